//! End-to-end client tests against a local stand-in for the openrouteservice API.
//!
//! These check what actually goes over the wire: method, path, credentials,
//! query string encoding and JSON bodies, and how response bodies come back.

mod fixtures;

use serde_json::json;

use openrouteservice::directions::DirectionsQuery;
use openrouteservice::elevation::ElevationQuery;
use openrouteservice::geocode::{GeocodeSearchOptions, GeocodeSource, StructuredAddress};
use openrouteservice::matrix::MatrixQuery;
use openrouteservice::request;
use openrouteservice::{
    Coordinate, GeometryInput, OrsClient, OrsConfig, OrsError, Profile, ResponseBody,
};

use fixtures::MockServer;
use fixtures::responses::{self, API_KEY};

// ============================================================================
// Test Infrastructure
// ============================================================================

fn client_for(server: &MockServer) -> OrsClient {
    let config = OrsConfig {
        base_url: server.base_url.clone(),
        api_key: API_KEY.to_string(),
        timeout_secs: Some(10),
    };
    OrsClient::new(config).expect("build client")
}

fn start() -> Coordinate {
    Coordinate::new(-121.86592918628558, 37.41513158647777)
}

fn end() -> Coordinate {
    Coordinate::new(-121.86597210162844, 37.424061505151634)
}

// ============================================================================
// GET endpoints
// ============================================================================

#[tokio::test]
async fn basic_directions_authenticates_with_query_parameter() {
    let server = MockServer::json(200, &responses::basic_directions()).await;
    let client = client_for(&server);

    let response = client
        .basic_directions(Profile::DrivingCar, start(), end())
        .await
        .expect("basic directions");
    let request = server.received().await;

    assert_eq!(request.method, "GET");
    assert_eq!(request.path(), "/v2/directions/driving-car");
    assert_eq!(request.query_pairs()[0], ("api_key".into(), API_KEY.into()));
    assert_eq!(
        request.query_param("start").as_deref(),
        Some("-121.86592918628558,37.41513158647777")
    );
    assert_eq!(
        request.query_param("end").as_deref(),
        Some("-121.86597210162844,37.424061505151634")
    );
    assert_eq!(request.header("authorization"), None);

    let summary = response.features[0].properties.summary;
    assert_eq!(summary.distance, 993.4);
    assert_eq!(response.metadata.query.profile, Some(Profile::DrivingCar));
}

#[tokio::test]
async fn geocode_search_joins_sources_and_unflattens_echoed_query() {
    let server = MockServer::json(200, &responses::geocode_search()).await;
    let client = client_for(&server);

    let options = GeocodeSearchOptions {
        sources: Some(vec![GeocodeSource::Osm, GeocodeSource::Gn]),
        size: Some(10),
        ..GeocodeSearchOptions::default()
    };
    let response = client
        .geocode_search("Namibian Brewery", &options)
        .await
        .expect("geocode search");
    let request = server.received().await;

    assert_eq!(request.method, "GET");
    assert_eq!(request.path(), "/geocode/search");
    let raw_query = request.raw_query().expect("query string");
    assert!(raw_query.starts_with(&format!("api_key={API_KEY}&")));
    assert!(raw_query.contains("sources=osm,gn"), "{raw_query}");
    assert!(!raw_query.contains("sources.0"), "{raw_query}");
    assert_eq!(request.query_param("text").as_deref(), Some("Namibian Brewery"));

    let echoed = &response.geocoding.query;
    assert_eq!(echoed["focus"]["point"]["lon"], json!(8.681495));
    assert_eq!(echoed["lang"]["iso6391"], json!("en"));
    assert!(!echoed.contains_key("focus.point.lon"));
    assert_eq!(
        response.features[0].properties.label.as_deref(),
        Some("Namibian Breweries, Windhoek, Namibia")
    );
}

#[tokio::test]
async fn structured_search_uses_structured_path() {
    let server = MockServer::json(200, &responses::geocode_search()).await;
    let client = client_for(&server);

    let address = StructuredAddress {
        address: Some("600 Montgomery St".into()),
        locality: Some("San Francisco".into()),
        ..StructuredAddress::default()
    };
    client
        .geocode_search(address, &GeocodeSearchOptions::default())
        .await
        .expect("structured search");
    let request = server.received().await;

    assert_eq!(request.path(), "/geocode/search/structured");
    assert_eq!(request.query_param("address").as_deref(), Some("600 Montgomery St"));
    assert_eq!(request.query_param("locality").as_deref(), Some("San Francisco"));
    assert_eq!(request.query_param("text"), None);
}

#[tokio::test]
async fn elevation_of_bare_point_is_a_get() {
    let server = MockServer::json(200, &responses::elevation_point()).await;
    let client = client_for(&server);

    let response = client
        .elevation(
            GeometryInput::classify(&json!([-121.86601, 37.41524])).expect("classify"),
            &ElevationQuery::default(),
        )
        .await
        .expect("elevation");
    let request = server.received().await;

    assert_eq!(request.method, "GET");
    assert_eq!(request.path(), "/elevation/point");
    assert_eq!(request.query_param("api_key").as_deref(), Some(API_KEY));
    assert_eq!(request.query_param("format_in").as_deref(), Some("point"));
    assert_eq!(
        request.query_param("geometry").as_deref(),
        Some("-121.86601,37.41524")
    );
    assert_eq!(
        response.geometry.coordinates(None),
        vec![Coordinate::with_elevation(-121.86601, 37.41524, 39.0)]
    );
}

// ============================================================================
// POST endpoints
// ============================================================================

#[tokio::test]
async fn directions_json_authenticates_with_header() {
    let server = MockServer::json(200, &responses::directions_json()).await;
    let client = client_for(&server);

    let query = DirectionsQuery::new(vec![start(), end()]);
    let response = client
        .directions_json(Profile::DrivingCar, &query)
        .await
        .expect("directions");
    let request = server.received().await;

    assert_eq!(request.method, "POST");
    assert_eq!(request.path(), "/v2/directions/driving-car/json");
    assert_eq!(request.raw_query(), None);
    assert_eq!(request.header("authorization"), Some(API_KEY));
    assert_eq!(request.header("content-type"), Some("application/json"));
    assert_eq!(request.json_body(), serde_json::to_value(&query).unwrap());

    let route = &response.routes[0];
    assert_eq!(route.segments[0].avgspeed, Some(30.5));
    assert_eq!(route.decoded_geometry(false).len(), 3);
}

#[tokio::test]
async fn directions_gpx_returns_raw_text() {
    let server = MockServer::respond(200, "application/gpx+xml;charset=UTF-8", responses::GPX).await;
    let client = client_for(&server);

    let gpx = client
        .directions_gpx(Profile::DrivingCar, &DirectionsQuery::new(vec![start(), end()]))
        .await
        .expect("gpx directions");
    let request = server.received().await;

    assert_eq!(gpx, responses::GPX);
    assert_eq!(request.path(), "/v2/directions/driving-car/gpx");
}

#[tokio::test]
async fn elevation_of_line_posts_geometry() {
    let server = MockServer::json(200, &responses::elevation_line()).await;
    let client = client_for(&server);

    let line = vec![
        Coordinate::new(-121.865929, 37.415132),
        Coordinate::new(-121.865972, 37.424062),
    ];
    let response = client
        .elevation(line, &ElevationQuery::default())
        .await
        .expect("elevation");
    let request = server.received().await;

    assert_eq!(request.method, "POST");
    assert_eq!(request.path(), "/elevation/line");
    assert_eq!(request.raw_query(), None);
    assert_eq!(request.header("authorization"), Some(API_KEY));
    assert_eq!(
        request.json_body(),
        json!({
            "format_in": "polyline",
            "geometry": [[-121.865929, 37.415132], [-121.865972, 37.424062]]
        })
    );
    assert_eq!(response.geometry.coordinates(None)[1].elevation, Some(47.5));
}

// ============================================================================
// Status handling
// ============================================================================

#[tokio::test]
async fn typed_calls_surface_error_status() {
    let server = MockServer::json(
        403,
        &json!({ "error": "Access to this API has been disallowed" }),
    )
    .await;
    let client = client_for(&server);

    let result = client
        .matrix(Profile::DrivingCar, &MatrixQuery::new(vec![start(), end()]))
        .await;
    server.received().await;

    match result {
        Err(OrsError::Status { status, body }) => {
            assert_eq!(status.as_u16(), 403);
            assert!(body.contains("disallowed"), "{body}");
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[tokio::test]
async fn execute_returns_any_status_untouched() {
    let server = MockServer::respond(404, "text/plain", "Not Found").await;
    let client = client_for(&server);

    let response = client
        .execute(&request::matrix(Profile::DrivingCar, &MatrixQuery::default()).unwrap())
        .await
        .expect("transport succeeds");
    server.received().await;

    assert_eq!(response.status.as_u16(), 404);
    assert_eq!(response.body, ResponseBody::Text("Not Found".into()));
}

#[tokio::test]
async fn clients_issue_concurrent_calls() {
    let first = MockServer::json(200, &responses::matrix()).await;
    let second = MockServer::json(200, &responses::matrix()).await;
    let client = client_for(&first);
    let second_client = OrsClient::new(OrsConfig {
        base_url: second.base_url.clone(),
        ..client.config().clone()
    })
    .expect("build second client");
    let query = MatrixQuery::new(vec![start(), end()]);

    let (a, b) = tokio::join!(
        client.matrix(Profile::DrivingCar, &query),
        second_client.matrix(Profile::FootWalking, &query),
    );
    let (first_request, second_request) = tokio::join!(first.received(), second.received());

    assert_eq!(a.expect("first matrix").durations, b.expect("second matrix").durations);
    assert_eq!(first_request.path(), "/v2/matrix/driving-car");
    assert_eq!(second_request.path(), "/v2/matrix/foot-walking");
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let config = OrsConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        api_key: API_KEY.to_string(),
        timeout_secs: Some(5),
    };
    let client = OrsClient::new(config).expect("build client");

    let result = client
        .basic_directions(Profile::DrivingCar, start(), end())
        .await;
    assert!(matches!(result, Err(OrsError::Http(_))), "{result:?}");
}
