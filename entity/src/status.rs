use sea_orm::entity::prelude::*;

/// Lifecycle status shared by every table.
///
/// Deleting a row never removes it; the row is flipped to `Deleted` and
/// filtered out of reads from then on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum ItemStatus {
    #[sea_orm(num_value = 0)]
    Deleted,
    #[sea_orm(num_value = 1)]
    Active,
    #[sea_orm(num_value = 2)]
    Inactive,
}

impl ItemStatus {
    /// Statuses excluded from reads by default.
    pub const HIDDEN: [ItemStatus; 1] = [ItemStatus::Deleted];
}
