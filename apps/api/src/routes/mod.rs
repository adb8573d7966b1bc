pub mod analyze;
pub mod health;
pub mod ui;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/api/analyze", post(analyze::handle_analyze));

    if state.config.dev_ui {
        router = router.route("/ui", get(ui::ui_handler));
    }

    router
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
        .with_state(state)
}
