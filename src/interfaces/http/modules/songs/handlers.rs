//! Song handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{SongData, SongIdData, SongQuery, SongRequest, SongSummaryDto, SongsData};
use crate::application::SongService;
use crate::interfaces::http::common::{ApiResponse, EmptyData, ValidatedJson};
use crate::interfaces::http::error::ApiError;

/// Song handler state
#[derive(Clone)]
pub struct SongHandlerState {
    pub service: Arc<SongService>,
}

#[utoipa::path(
    post,
    path = "/songs",
    tag = "Songs",
    request_body = SongRequest,
    responses(
        (status = 201, description = "Song created", body = ApiResponse<SongIdData>),
        (status = 400, description = "Invalid payload", body = ApiResponse<EmptyData>),
        (status = 404, description = "Referenced album not found", body = ApiResponse<EmptyData>)
    )
)]
pub async fn add_song(
    State(state): State<SongHandlerState>,
    ValidatedJson(request): ValidatedJson<SongRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SongIdData>>), ApiError> {
    let song_id = state.service.add_song(request.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(SongIdData { song_id })),
    ))
}

#[utoipa::path(
    get,
    path = "/songs",
    tag = "Songs",
    params(SongQuery),
    responses(
        (status = 200, description = "Matching songs", body = ApiResponse<SongsData>)
    )
)]
pub async fn get_songs(
    State(state): State<SongHandlerState>,
    Query(query): Query<SongQuery>,
) -> Result<Json<ApiResponse<SongsData>>, ApiError> {
    let songs = state
        .service
        .get_songs(&query.into())
        .await?
        .into_iter()
        .map(SongSummaryDto::from)
        .collect();
    Ok(Json(ApiResponse::success(SongsData { songs })))
}

#[utoipa::path(
    get,
    path = "/songs/{id}",
    tag = "Songs",
    params(("id" = String, Path, description = "Song id")),
    responses(
        (status = 200, description = "Song details", body = ApiResponse<SongData>),
        (status = 404, description = "Song not found", body = ApiResponse<EmptyData>)
    )
)]
pub async fn get_song_by_id(
    State(state): State<SongHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<SongData>>, ApiError> {
    let song = state.service.get_song_by_id(&id).await?;
    Ok(Json(ApiResponse::success(SongData { song: song.into() })))
}

#[utoipa::path(
    put,
    path = "/songs/{id}",
    tag = "Songs",
    params(("id" = String, Path, description = "Song id")),
    request_body = SongRequest,
    responses(
        (status = 200, description = "Song updated", body = ApiResponse<EmptyData>),
        (status = 400, description = "Invalid payload", body = ApiResponse<EmptyData>),
        (status = 404, description = "Song or referenced album not found", body = ApiResponse<EmptyData>)
    )
)]
pub async fn edit_song_by_id(
    State(state): State<SongHandlerState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<SongRequest>,
) -> Result<Json<ApiResponse<EmptyData>>, ApiError> {
    state.service.edit_song_by_id(&id, request.into()).await?;
    Ok(Json(ApiResponse::success_message("Song updated successfully")))
}

#[utoipa::path(
    delete,
    path = "/songs/{id}",
    tag = "Songs",
    params(("id" = String, Path, description = "Song id")),
    responses(
        (status = 200, description = "Song deleted", body = ApiResponse<EmptyData>),
        (status = 404, description = "Song not found", body = ApiResponse<EmptyData>)
    )
)]
pub async fn delete_song_by_id(
    State(state): State<SongHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<EmptyData>>, ApiError> {
    state.service.delete_song_by_id(&id).await?;
    Ok(Json(ApiResponse::success_message("Song deleted successfully")))
}
