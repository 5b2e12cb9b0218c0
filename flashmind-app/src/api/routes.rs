use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use parking_lot::Mutex;
use std::sync::Arc;

use flashmind_core::{
    summarize, CoreError, DashboardStats, FilterCriteria, Ingestor, ProfileEditor, RatingEvent,
    SharedStore, UploadTracker, UserProfile,
};

use crate::api::dto::{parse_rating, CardListOut, RateIn, UploadIn, UploadOut, UploadsOut};

pub struct AppState {
    pub store: SharedStore,
    pub profile: Mutex<ProfileEditor>,
    pub uploads: UploadTracker,
    pub ingestor: Arc<dyn Ingestor>,
}

fn status_for(e: &CoreError) -> StatusCode {
    match e {
        CoreError::NotFound(_) => StatusCode::NOT_FOUND,
        CoreError::Invalid(_) => StatusCode::BAD_REQUEST,
        CoreError::Conflict(_) => StatusCode::CONFLICT,
        CoreError::Ingestion(_) => StatusCode::BAD_GATEWAY,
    }
}

pub async fn list_cards(
    State(st): State<Arc<AppState>>,
    Query(q): Query<FilterCriteria>,
) -> Json<CardListOut> {
    let store = st.store.read();
    let cards = store.filtered(&q);
    Json(CardListOut { total: store.len(), visible: cards.len(), cards })
}

pub async fn list_categories(State(st): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(st.store.read().categories())
}

pub async fn stats(State(st): State<Arc<AppState>>) -> Json<DashboardStats> {
    Json(summarize(st.store.read().cards()))
}

pub async fn toggle_favorite(State(st): State<Arc<AppState>>, Path(id): Path<String>) -> StatusCode {
    st.store.write().toggle_favorite(&id);
    StatusCode::NO_CONTENT
}

pub async fn delete_card(State(st): State<Arc<AppState>>, Path(id): Path<String>) -> StatusCode {
    st.store.write().delete(&id);
    StatusCode::NO_CONTENT
}

pub async fn rate_card(
    State(st): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<RateIn>,
) -> Result<Json<RatingEvent>, StatusCode> {
    let rating = parse_rating(&body.rating).ok_or(StatusCode::BAD_REQUEST)?;
    let event = st.store.read().rate(&id, rating).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(event))
}

pub async fn list_uploads(State(st): State<Arc<AppState>>) -> Json<UploadsOut> {
    Json(UploadsOut {
        uploading: st.uploads.is_uploading(),
        uploads: st.uploads.recent(),
    })
}

/// Generated cards go in together or not at all. An id clash answers 502;
/// 409 means another upload is running.
pub async fn post_upload(
    State(st): State<Arc<AppState>>,
    Json(body): Json<UploadIn>,
) -> Result<Json<UploadOut>, StatusCode> {
    let source = body.into_source().map_err(|e| status_for(&e))?;
    let generated = st
        .uploads
        .run(&*st.ingestor, source, |cards| {
            st.store
                .write()
                .insert_all(cards)
                .map_err(|e| CoreError::Ingestion(e.to_string()))
        })
        .await
        .map_err(|e| status_for(&e))?;
    Ok(Json(UploadOut { cards_generated: generated }))
}

pub async fn get_profile(State(st): State<Arc<AppState>>) -> Json<UserProfile> {
    Json(st.profile.lock().saved().clone())
}

pub async fn put_profile(
    State(st): State<Arc<AppState>>,
    Json(body): Json<UserProfile>,
) -> Result<Json<UserProfile>, StatusCode> {
    let saved = st.profile.lock().replace(body).map_err(|e| status_for(&e))?;
    Ok(Json(saved))
}
