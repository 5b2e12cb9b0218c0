use axum::{
    routing::{delete, get, post},
    Router,
};
use parking_lot::Mutex;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::routes::{
    delete_card, get_profile, list_cards, list_categories, list_uploads, post_upload, put_profile,
    rate_card, stats, toggle_favorite, AppState,
};
use flashmind_core::{seed, CardStore, Ingestor, ProfileEditor, UploadTracker};

pub fn app_state(store: CardStore, ingestor: Arc<dyn Ingestor>) -> Arc<AppState> {
    Arc::new(AppState {
        store: store.into_shared(),
        profile: Mutex::new(ProfileEditor::new(seed::demo_profile())),
        uploads: UploadTracker::new(seed::recent_uploads()),
        ingestor,
    })
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/cards", get(list_cards))
        .route("/cards/:id", delete(delete_card))
        .route("/cards/:id/favorite", post(toggle_favorite))
        .route("/cards/:id/rate", post(rate_card))
        .route("/categories", get(list_categories))
        .route("/stats", get(stats))
        .route("/uploads", get(list_uploads).post(post_upload))
        .route("/profile", get(get_profile).put(put_profile))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub async fn run(store: CardStore, ingestor: Arc<dyn Ingestor>, addr: SocketAddr) -> anyhow::Result<()> {
    let app = router(app_state(store, ingestor));

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "api listening");
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
