//! Album handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{AlbumData, AlbumDto, AlbumIdData, AlbumRequest, AlbumsData};
use crate::application::AlbumService;
use crate::interfaces::http::common::{ApiResponse, EmptyData, ValidatedJson};
use crate::interfaces::http::error::ApiError;

/// Album handler state
#[derive(Clone)]
pub struct AlbumHandlerState {
    pub service: Arc<AlbumService>,
}

#[utoipa::path(
    post,
    path = "/albums",
    tag = "Albums",
    request_body = AlbumRequest,
    responses(
        (status = 201, description = "Album created", body = ApiResponse<AlbumIdData>),
        (status = 400, description = "Invalid payload", body = ApiResponse<EmptyData>)
    )
)]
pub async fn add_album(
    State(state): State<AlbumHandlerState>,
    ValidatedJson(request): ValidatedJson<AlbumRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AlbumIdData>>), ApiError> {
    let album_id = state.service.add_album(request.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(AlbumIdData { album_id })),
    ))
}

#[utoipa::path(
    get,
    path = "/albums",
    tag = "Albums",
    responses(
        (status = 200, description = "All albums", body = ApiResponse<AlbumsData>)
    )
)]
pub async fn get_albums(
    State(state): State<AlbumHandlerState>,
) -> Result<Json<ApiResponse<AlbumsData>>, ApiError> {
    let albums = state
        .service
        .get_albums()
        .await?
        .into_iter()
        .map(AlbumDto::from)
        .collect();
    Ok(Json(ApiResponse::success(AlbumsData { albums })))
}

#[utoipa::path(
    get,
    path = "/albums/{id}",
    tag = "Albums",
    params(("id" = String, Path, description = "Album id")),
    responses(
        (status = 200, description = "Album with its songs", body = ApiResponse<AlbumData>),
        (status = 404, description = "Album not found", body = ApiResponse<EmptyData>)
    )
)]
pub async fn get_album_by_id(
    State(state): State<AlbumHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<AlbumData>>, ApiError> {
    let album = state.service.get_album_by_id(&id).await?;
    Ok(Json(ApiResponse::success(AlbumData {
        album: album.into(),
    })))
}

#[utoipa::path(
    put,
    path = "/albums/{id}",
    tag = "Albums",
    params(("id" = String, Path, description = "Album id")),
    request_body = AlbumRequest,
    responses(
        (status = 200, description = "Album updated", body = ApiResponse<EmptyData>),
        (status = 400, description = "Invalid payload", body = ApiResponse<EmptyData>),
        (status = 404, description = "Album not found", body = ApiResponse<EmptyData>)
    )
)]
pub async fn edit_album_by_id(
    State(state): State<AlbumHandlerState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<AlbumRequest>,
) -> Result<Json<ApiResponse<EmptyData>>, ApiError> {
    state.service.edit_album_by_id(&id, request.into()).await?;
    Ok(Json(ApiResponse::success_message("Album updated successfully")))
}

#[utoipa::path(
    delete,
    path = "/albums/{id}",
    tag = "Albums",
    params(("id" = String, Path, description = "Album id")),
    responses(
        (status = 200, description = "Album and its songs deleted", body = ApiResponse<EmptyData>),
        (status = 404, description = "Album not found", body = ApiResponse<EmptyData>)
    )
)]
pub async fn delete_album_by_id(
    State(state): State<AlbumHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<EmptyData>>, ApiError> {
    state.service.delete_album_by_id(&id).await?;
    Ok(Json(ApiResponse::success_message("Album deleted successfully")))
}
