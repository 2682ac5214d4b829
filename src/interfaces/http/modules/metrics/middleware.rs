//! Per-request catalog metrics

use std::time::Instant;

use axum::{
    body::Body,
    extract::MatchedPath,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};

/// Route label for requests no route matched. Raw URIs are never used as
/// labels.
const UNMATCHED_ROUTE: &str = "unmatched";

/// Catalog area a route template belongs to: `albums`, `songs` or `service`
/// (banner, health, metrics, docs, unmatched).
pub fn resource_of(route: &str) -> &'static str {
    let first = route.trim_start_matches('/').split('/').next().unwrap_or("");
    match first {
        "albums" => "albums",
        "songs" => "songs",
        _ => "service",
    }
}

/// Envelope class a status code is answered with.
pub fn outcome_of(status: StatusCode) -> &'static str {
    if status.is_server_error() {
        "error"
    } else if status.is_client_error() {
        "fail"
    } else {
        "success"
    }
}

/// Records `catalog_http_requests_total{resource, method, route, outcome}`
/// and `catalog_http_request_duration_seconds{resource, method}`.
pub async fn track_catalog_requests(request: Request<Body>, next: Next) -> Response {
    let method = request.method().as_str().to_owned();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_owned());
    let resource = resource_of(&route);

    let started = Instant::now();
    let response = next.run(request).await;
    let elapsed = started.elapsed().as_secs_f64();

    metrics::counter!(
        "catalog_http_requests_total",
        "resource" => resource,
        "method" => method.clone(),
        "route" => route,
        "outcome" => outcome_of(response.status())
    )
    .increment(1);
    metrics::histogram!(
        "catalog_http_request_duration_seconds",
        "resource" => resource,
        "method" => method
    )
    .record(elapsed);

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_map_to_catalog_resources() {
        assert_eq!(resource_of("/albums"), "albums");
        assert_eq!(resource_of("/albums/{id}"), "albums");
        assert_eq!(resource_of("/songs/{id}"), "songs");
        assert_eq!(resource_of("/songsheet"), "service");
        assert_eq!(resource_of("/health"), "service");
        assert_eq!(resource_of("/"), "service");
        assert_eq!(resource_of(UNMATCHED_ROUTE), "service");
    }

    #[test]
    fn status_codes_map_to_envelope_outcomes() {
        assert_eq!(outcome_of(StatusCode::OK), "success");
        assert_eq!(outcome_of(StatusCode::CREATED), "success");
        assert_eq!(outcome_of(StatusCode::BAD_REQUEST), "fail");
        assert_eq!(outcome_of(StatusCode::NOT_FOUND), "fail");
        assert_eq!(outcome_of(StatusCode::INTERNAL_SERVER_ERROR), "error");
    }
}
