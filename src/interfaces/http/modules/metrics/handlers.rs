//! `GET /metrics`: Prometheus text for the catalog
//!
//! Besides the per-request series from [`super::track_catalog_requests`],
//! the services count album and song writes. [`describe_catalog_metrics`]
//! registers help text for all of them once the recorder is installed.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use metrics::Unit;
use metrics_exporter_prometheus::PrometheusHandle;

const PROMETHEUS_TEXT: &str = "text/plain; version=0.0.4; charset=utf-8";

#[derive(Clone)]
pub struct MetricsState {
    pub handle: PrometheusHandle,
}

pub fn describe_catalog_metrics() {
    metrics::describe_counter!(
        "catalog_http_requests_total",
        "Catalog HTTP requests by resource, method, route and outcome"
    );
    metrics::describe_histogram!(
        "catalog_http_request_duration_seconds",
        Unit::Seconds,
        "Catalog HTTP request latency by resource and method"
    );
    metrics::describe_counter!("catalog_albums_created_total", "Albums created");
    metrics::describe_counter!("catalog_albums_deleted_total", "Albums deleted with their songs");
    metrics::describe_counter!("catalog_songs_created_total", "Songs created");
    metrics::describe_counter!("catalog_songs_deleted_total", "Songs deleted");
}

pub async fn render_catalog_metrics(State(state): State<MetricsState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, PROMETHEUS_TEXT)],
        state.handle.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_exporter_prometheus::PrometheusBuilder;

    #[tokio::test]
    async fn renders_described_catalog_counters() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();
        metrics::with_local_recorder(&recorder, || {
            describe_catalog_metrics();
            metrics::counter!("catalog_albums_created_total").increment(2);
        });

        let resp = render_catalog_metrics(State(MetricsState { handle }))
            .await
            .into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[header::CONTENT_TYPE], PROMETHEUS_TEXT);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.contains("# HELP catalog_albums_created_total Albums created"));
        assert!(text.contains("catalog_albums_created_total 2"));
    }
}
