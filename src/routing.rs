//! Application router configuration with protected and unprotected route definitions.

use axum::{Router, middleware, routing::get};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    about::get_about_page,
    auth::{auth_guard, get_log_in_page, get_log_out, post_log_in},
    endpoints,
    error_pages::get_404_not_found,
    reports::get_reports_page,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, edit_transaction_endpoint,
        export_csv_endpoint, get_create_transaction_page, get_edit_transaction_page, get_home,
        get_transactions_page,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let unprotected_routes = Router::new()
        .route(endpoints::LOG_IN, get(get_log_in_page).post(post_log_in))
        .route(endpoints::LOG_OUT, get(get_log_out))
        .route(endpoints::ABOUT, get(get_about_page));

    let protected_routes = Router::new()
        .route(endpoints::ROOT, get(get_transactions_page))
        .route(endpoints::HOME, get(get_home))
        .route(
            endpoints::NEW_TRANSACTION,
            get(get_create_transaction_page).post(create_transaction_endpoint),
        )
        .route(
            endpoints::EDIT_TRANSACTION,
            get(get_edit_transaction_page).post(edit_transaction_endpoint),
        )
        .route(
            endpoints::DELETE_TRANSACTION,
            get(delete_transaction_endpoint),
        )
        .route(endpoints::EXPORT_CSV, get(export_csv_endpoint))
        .route(endpoints::REPORTS, get(get_reports_page))
        .layer(middleware::from_fn_with_state(state.clone(), auth_guard));

    protected_routes
        .merge(unprotected_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}
