use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{
        age_bracket::{
            create_age_bracket, delete_age_bracket, get_age_bracket_by_id, get_age_brackets,
            update_age_bracket,
        },
        category::{
            create_category, delete_category, get_categories, get_category_by_id, update_category,
        },
        contract::{
            create_contract, delete_contract, get_contract_by_id, get_contracts, update_contract,
        },
        event::{create_event, delete_event, get_event_by_id, get_events, update_event},
        user::{create_user, delete_user, get_user_by_id, get_users, update_user},
        venue::{create_venue, delete_venue, get_venue_by_id, get_venues, update_venue},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(
    crate::controller::category::get_categories,
    crate::controller::category::get_category_by_id,
    crate::controller::category::create_category,
    crate::controller::category::update_category,
    crate::controller::category::delete_category,
    crate::controller::venue::get_venues,
    crate::controller::venue::get_venue_by_id,
    crate::controller::venue::create_venue,
    crate::controller::venue::update_venue,
    crate::controller::venue::delete_venue,
    crate::controller::age_bracket::get_age_brackets,
    crate::controller::age_bracket::get_age_bracket_by_id,
    crate::controller::age_bracket::create_age_bracket,
    crate::controller::age_bracket::update_age_bracket,
    crate::controller::age_bracket::delete_age_bracket,
    crate::controller::contract::get_contracts,
    crate::controller::contract::get_contract_by_id,
    crate::controller::contract::create_contract,
    crate::controller::contract::update_contract,
    crate::controller::contract::delete_contract,
    crate::controller::user::get_users,
    crate::controller::user::get_user_by_id,
    crate::controller::user::create_user,
    crate::controller::user::update_user,
    crate::controller::user::delete_user,
    crate::controller::event::get_events,
    crate::controller::event::get_event_by_id,
    crate::controller::event::create_event,
    crate::controller::event::update_event,
    crate::controller::event::delete_event,
))]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categorias", get(get_categories).post(create_category))
        .route(
            "/categorias/{id}",
            get(get_category_by_id)
                .put(update_category)
                .delete(delete_category),
        )
        .route("/locais", get(get_venues).post(create_venue))
        .route(
            "/locais/{id}",
            get(get_venue_by_id).put(update_venue).delete(delete_venue),
        )
        .route("/faixa_etaria", get(get_age_brackets).post(create_age_bracket))
        .route(
            "/faixa_etaria/{id}",
            get(get_age_bracket_by_id)
                .put(update_age_bracket)
                .delete(delete_age_bracket),
        )
        .route("/contratos", get(get_contracts).post(create_contract))
        .route(
            "/contratos/{id}",
            get(get_contract_by_id)
                .put(update_contract)
                .delete(delete_contract),
        )
        .route("/usuarios", get(get_users).post(create_user))
        .route(
            "/usuarios/{id}",
            get(get_user_by_id).put(update_user).delete(delete_user),
        )
        .route("/eventos", get(get_events).post(create_event))
        .route(
            "/eventos/{id}",
            get(get_event_by_id).put(update_event).delete(delete_event),
        )
}

pub fn swagger() -> SwaggerUi {
    SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi())
}
