pub use super::age_bracket::Entity as AgeBracket;
pub use super::category::Entity as Category;
pub use super::contract::Entity as Contract;
pub use super::event::Entity as Event;
pub use super::status::ItemStatus;
pub use super::user::Entity as User;
pub use super::venue::Entity as Venue;
