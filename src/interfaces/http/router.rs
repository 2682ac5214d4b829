//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::FromRef, middleware, routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{AlbumService, SongService};
use crate::domain::RepositoryProvider;
use crate::shared::validations::CatalogValidator;

use super::common::{ApiResponse, EmptyData, ResponseStatus};
use super::modules::albums::{self, AlbumHandlerState};
use super::modules::health::{self, HealthState};
use super::modules::metrics::{render_catalog_metrics, track_catalog_requests, MetricsState};
use super::modules::request_id::request_id_middleware;
use super::modules::songs::{self, SongHandlerState};

/// Unified state for the album and song routes.
/// Axum extracts the specific handler state via `FromRef`.
#[derive(Clone)]
pub struct CatalogState {
    pub albums: Arc<AlbumService>,
    pub songs: Arc<SongService>,
    pub validator: CatalogValidator,
}

impl FromRef<CatalogState> for AlbumHandlerState {
    fn from_ref(s: &CatalogState) -> Self {
        AlbumHandlerState {
            service: Arc::clone(&s.albums),
        }
    }
}

impl FromRef<CatalogState> for SongHandlerState {
    fn from_ref(s: &CatalogState) -> Self {
        SongHandlerState {
            service: Arc::clone(&s.songs),
        }
    }
}

impl FromRef<CatalogState> for CatalogValidator {
    fn from_ref(s: &CatalogState) -> Self {
        s.validator
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::service_info,
        health::health_check,
        // Albums
        albums::add_album,
        albums::get_albums,
        albums::get_album_by_id,
        albums::edit_album_by_id,
        albums::delete_album_by_id,
        // Songs
        songs::add_song,
        songs::get_songs,
        songs::get_song_by_id,
        songs::edit_song_by_id,
        songs::delete_song_by_id,
    ),
    components(
        schemas(
            // Common
            ResponseStatus,
            ApiResponse<EmptyData>,
            EmptyData,
            // Health
            health::HealthResponse,
            health::ComponentHealth,
            health::ServiceInfo,
            health::Endpoints,
            // Albums
            albums::AlbumRequest,
            albums::AlbumDto,
            albums::AlbumDetailDto,
            albums::AlbumIdData,
            albums::AlbumsData,
            albums::AlbumData,
            // Songs
            songs::SongRequest,
            songs::SongDto,
            songs::SongSummaryDto,
            songs::SongIdData,
            songs::SongsData,
            songs::SongData,
        )
    ),
    tags(
        (name = "Health", description = "Service banner and health check"),
        (name = "Albums", description = "Album catalog; an album lists the songs attached to it"),
        (name = "Songs", description = "Song catalog with title/performer filtering"),
    ),
    info(
        title = "OpenMusic API",
        version = "1.0.0",
        description = "REST API for an album and song catalog",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    db: DatabaseConnection,
    validator: CatalogValidator,
    prometheus_handle: PrometheusHandle,
) -> Router {
    let catalog_state = CatalogState {
        albums: Arc::new(AlbumService::new(repos.clone())),
        songs: Arc::new(SongService::new(repos)),
        validator,
    };

    let album_routes = Router::new()
        .route("/", get(albums::get_albums).post(albums::add_album))
        .route(
            "/{id}",
            get(albums::get_album_by_id)
                .put(albums::edit_album_by_id)
                .delete(albums::delete_album_by_id),
        )
        .with_state(catalog_state.clone());

    let song_routes = Router::new()
        .route("/", get(songs::get_songs).post(songs::add_song))
        .route(
            "/{id}",
            get(songs::get_song_by_id)
                .put(songs::edit_song_by_id)
                .delete(songs::delete_song_by_id),
        )
        .with_state(catalog_state);

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(HealthState {
            db,
            started_at: Arc::new(Instant::now()),
        });

    let metrics_routes = Router::new()
        .route("/metrics", get(render_catalog_metrics))
        .with_state(MetricsState {
            handle: prometheus_handle,
        });

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Banner, health, metrics
        .route("/", get(health::service_info))
        .merge(health_routes)
        .merge(metrics_routes)
        // Catalog
        .nest("/albums", album_routes)
        .nest("/songs", song_routes)
        // Middleware
        .layer(middleware::from_fn(track_catalog_requests))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, Response, StatusCode};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::{json, Value};
    use tower::Service;

    use crate::infrastructure::database::test_database;
    use crate::infrastructure::SeaOrmRepositoryProvider;

    async fn app() -> Router {
        let db = test_database().await;
        let repos: Arc<dyn RepositoryProvider> =
            Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
        let handle = PrometheusBuilder::new().build_recorder().handle();
        create_api_router(repos, db, CatalogValidator::default(), handle)
    }

    async fn send(app: &Router, req: Request<Body>) -> Response<Body> {
        let mut svc = app.clone();
        svc.call(req).await.unwrap()
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(resp: Response<Body>) -> Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn create_album(app: &Router, name: &str, year: i32) -> String {
        let resp = send(
            app,
            json_request("POST", "/albums", json!({"name": name, "year": year})),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body = body_json(resp).await;
        body["data"]["albumId"].as_str().unwrap().to_string()
    }

    async fn create_song(app: &Router, payload: Value) -> Response<Body> {
        send(app, json_request("POST", "/songs", payload)).await
    }

    #[tokio::test]
    async fn album_lifecycle() {
        let app = app().await;
        let id = create_album(&app, "Abbey Road", 1969).await;
        assert!(id.starts_with("album-"));

        let resp = send(&app, empty_request("GET", &format!("/albums/{}", id))).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["data"]["album"]["id"], id.as_str());
        assert_eq!(body["data"]["album"]["name"], "Abbey Road");
        assert_eq!(body["data"]["album"]["year"], 1969);
        assert!(body["data"]["album"]["createdAt"].is_string());
        assert_eq!(body["data"]["album"]["songs"], json!([]));

        let resp = send(
            &app,
            json_request(
                "PUT",
                &format!("/albums/{}", id),
                json!({"name": "Let It Be", "year": 1970}),
            ),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["status"], "success");
        assert!(body["message"].is_string());

        let resp = send(&app, empty_request("GET", "/albums")).await;
        let body = body_json(resp).await;
        assert_eq!(body["data"]["albums"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"]["albums"][0]["name"], "Let It Be");

        let resp = send(&app, empty_request("DELETE", &format!("/albums/{}", id))).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = send(&app, empty_request("GET", &format!("/albums/{}", id))).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await["status"], "fail");
    }

    #[tokio::test]
    async fn invalid_album_payload_is_400() {
        let app = app().await;
        let resp = send(&app, json_request("POST", "/albums", json!({"name": "Old", "year": 1900}))).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert_eq!(body["status"], "fail");
        assert!(body["message"].as_str().unwrap().contains("year"));

        let resp = send(&app, json_request("POST", "/albums", json!({"year": 1969}))).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = Request::builder()
            .method("POST")
            .uri("/albums")
            .header("content-type", "application/json")
            .body(Body::from("{\"name\": "))
            .unwrap();
        let resp = send(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await["status"], "fail");
    }

    #[tokio::test]
    async fn missing_album_routes_are_404() {
        let app = app().await;
        let resp = send(
            &app,
            json_request("PUT", "/albums/album-missing", json!({"name": "X", "year": 2000})),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = send(&app, empty_request("DELETE", "/albums/album-missing")).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn song_with_unknown_album_is_404_and_not_stored() {
        let app = app().await;
        let resp = create_song(
            &app,
            json!({
                "title": "Orphan",
                "year": 2001,
                "performer": "Nobody",
                "genre": "Pop",
                "albumId": "album-doesnotexist00",
            }),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await["status"], "fail");

        let resp = send(&app, empty_request("GET", "/songs")).await;
        assert_eq!(body_json(resp).await["data"]["songs"], json!([]));
    }

    #[tokio::test]
    async fn song_payload_rules_are_enforced() {
        let app = app().await;
        let resp = create_song(
            &app,
            json!({"title": "T", "year": 2001, "performer": "P", "genre": "G", "extra": 1}),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = create_song(
            &app,
            json!({"title": "T", "year": 2001, "performer": "P", "genre": "G", "duration": -1}),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = create_song(
            &app,
            json!({"title": "T", "year": 2001, "performer": "P", "genre": "G", "duration": null, "albumId": null}),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn songs_are_filtered_and_summarised() {
        let app = app().await;
        for (title, performer) in [
            ("Love of My Life", "Queen"),
            ("Love Me Do", "The Beatles"),
            ("Bohemian Rhapsody", "Queen"),
        ] {
            let resp = create_song(
                &app,
                json!({"title": title, "year": 1975, "performer": performer, "genre": "Rock"}),
            )
            .await;
            assert_eq!(resp.status(), StatusCode::CREATED);
        }

        let resp = send(&app, empty_request("GET", "/songs?title=LOVE&performer=queen")).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        let songs = body["data"]["songs"].as_array().unwrap();
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0]["title"], "Love of My Life");
        assert_eq!(songs[0]["performer"], "Queen");
        assert!(songs[0].get("genre").is_none());

        let resp = send(&app, empty_request("GET", "/songs")).await;
        let body = body_json(resp).await;
        assert_eq!(body["data"]["songs"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn abbey_road_end_to_end() {
        let app = app().await;
        let album_id = create_album(&app, "Abbey Road", 1969).await;

        let resp = create_song(
            &app,
            json!({
                "title": "Come Together",
                "year": 1969,
                "performer": "The Beatles",
                "genre": "Rock",
                "duration": 259,
                "albumId": album_id,
            }),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let song_id = body_json(resp).await["data"]["songId"]
            .as_str()
            .unwrap()
            .to_string();
        assert!(song_id.starts_with("song-"));

        let resp = send(&app, empty_request("GET", &format!("/songs/{}", song_id))).await;
        let body = body_json(resp).await;
        assert_eq!(body["data"]["song"]["albumId"], album_id.as_str());
        assert_eq!(body["data"]["song"]["duration"], 259);

        let resp = send(&app, empty_request("GET", &format!("/albums/{}", album_id))).await;
        let body = body_json(resp).await;
        assert_eq!(body["data"]["album"]["songs"][0]["id"], song_id.as_str());

        let resp = send(&app, empty_request("DELETE", &format!("/albums/{}", album_id))).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = send(&app, empty_request("GET", &format!("/songs/{}", song_id))).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn song_edit_and_delete() {
        let app = app().await;
        let resp = create_song(
            &app,
            json!({"title": "Yesterday", "year": 1965, "performer": "The Beatles", "genre": "Pop"}),
        )
        .await;
        let song_id = body_json(resp).await["data"]["songId"]
            .as_str()
            .unwrap()
            .to_string();

        let resp = send(
            &app,
            json_request(
                "PUT",
                &format!("/songs/{}", song_id),
                json!({"title": "Yesterday", "year": 1965, "performer": "Paul McCartney", "genre": "Pop"}),
            ),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = send(&app, empty_request("GET", &format!("/songs/{}", song_id))).await;
        assert_eq!(body_json(resp).await["data"]["song"]["performer"], "Paul McCartney");

        let resp = send(&app, empty_request("DELETE", &format!("/songs/{}", song_id))).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let resp = send(&app, empty_request("DELETE", &format!("/songs/{}", song_id))).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn banner_health_and_metrics() {
        let app = app().await;

        let resp = send(&app, empty_request("GET", "/")).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["endpoints"]["albums"], "/albums");

        let resp = send(&app, empty_request("GET", "/health")).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["database"]["status"], "ok");

        let resp = send(&app, empty_request("GET", "/metrics")).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn request_id_is_generated_or_echoed() {
        let app = app().await;

        let resp = send(&app, empty_request("GET", "/")).await;
        assert!(resp.headers().contains_key("x-request-id"));

        let req = Request::builder()
            .method("GET")
            .uri("/")
            .header("x-request-id", "abc-123")
            .body(Body::empty())
            .unwrap();
        let resp = send(&app, req).await;
        assert_eq!(resp.headers()["x-request-id"], "abc-123");
    }
}
