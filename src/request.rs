//! Request shaping: which path, method and encoding each operation uses.
//!
//! Every operation produces an [`OrsRequest`] without touching the network.
//! Credentials are attached when the request is turned into a URL and
//! headers: `GET` requests authenticate with an `api_key` query parameter,
//! `POST` requests with an `Authorization` header.

use serde::Serialize;
use serde_json::Value;
use url::{Url, form_urlencoded};

use crate::common::Profile;
use crate::coordinate::Coordinate;
use crate::directions::{DirectionsFormat, DirectionsQuery};
use crate::elevation::ElevationQuery;
use crate::error::OrsResult;
use crate::flatten::to_query_pairs;
use crate::geocode::{
    GeocodeAutocompleteQuery, GeocodeReverseQuery, GeocodeSearch, GeocodeSearchOptions,
};
use crate::geometry::GeometryInput;
use crate::isochrones::IsochronesQuery;
use crate::matrix::MatrixQuery;
use crate::pois::PoisQuery;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A shaped request, ready for credentials and transport.
#[derive(Debug, Clone, PartialEq)]
pub struct OrsRequest {
    pub method: Method,
    pub path: String,
    /// Query parameters besides `api_key`, in order.
    pub query: Vec<(String, String)>,
    /// JSON body, `POST` only.
    pub body: Option<Value>,
}

impl OrsRequest {
    fn get(path: impl Into<String>, query: Vec<(String, String)>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            query,
            body: None,
        }
    }

    fn post<T: Serialize>(path: impl Into<String>, body: &T) -> OrsResult<Self> {
        Ok(Self {
            method: Method::Post,
            path: path.into(),
            query: Vec::new(),
            body: Some(serde_json::to_value(body)?),
        })
    }

    /// The encoded query string, with `api_key` first for `GET` requests.
    pub fn query_string(&self, api_key: &str) -> String {
        let auth = match self.method {
            Method::Get => Some(("api_key", api_key)),
            Method::Post => None,
        };
        auth.into_iter()
            .chain(self.query.iter().map(|(key, value)| (key.as_str(), value.as_str())))
            .map(|(key, value)| format!("{}={}", encode_component(key), encode_value(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn url(&self, base_url: &str, api_key: &str) -> OrsResult<Url> {
        let mut url = format!("{}{}", base_url.trim_end_matches('/'), self.path);
        let query = self.query_string(api_key);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }
        Ok(Url::parse(&url)?)
    }

    /// Headers to send besides the transport defaults.
    pub fn headers(&self, api_key: &str) -> Vec<(&'static str, String)> {
        match self.method {
            Method::Get => Vec::new(),
            Method::Post => vec![
                ("Authorization", api_key.to_owned()),
                ("Content-Type", "application/json".to_owned()),
            ],
        }
    }
}

fn encode_component(text: &str) -> String {
    form_urlencoded::byte_serialize(text.as_bytes()).collect()
}

/// Like [`encode_component`] but keeps `,` literal so list values read `osm,gn`.
fn encode_value(text: &str) -> String {
    text.split(',')
        .map(encode_component)
        .collect::<Vec<_>>()
        .join(",")
}

fn pairs(query: &impl Serialize) -> OrsResult<Vec<(String, String)>> {
    Ok(to_query_pairs(&serde_json::to_value(query)?))
}

/// `GET /v2/directions/{profile}?start=lon,lat&end=lon,lat`.
pub fn basic_directions(profile: Profile, start: Coordinate, end: Coordinate) -> OrsRequest {
    OrsRequest::get(
        format!("/v2/directions/{profile}"),
        vec![
            ("start".to_owned(), start.query_value()),
            ("end".to_owned(), end.query_value()),
        ],
    )
}

pub fn directions(
    profile: Profile,
    format: DirectionsFormat,
    query: &DirectionsQuery,
) -> OrsResult<OrsRequest> {
    OrsRequest::post(format!("/v2/directions/{profile}/{format}"), query)
}

pub fn isochrones(profile: Profile, query: &IsochronesQuery) -> OrsResult<OrsRequest> {
    OrsRequest::post(format!("/v2/isochrones/{profile}"), query)
}

pub fn matrix(profile: Profile, query: &MatrixQuery) -> OrsResult<OrsRequest> {
    OrsRequest::post(format!("/v2/matrix/{profile}"), query)
}

pub fn pois(query: &PoisQuery) -> OrsResult<OrsRequest> {
    OrsRequest::post("/pois", query)
}

/// Free text search adds `text`; a structured address selects `/structured`.
pub fn geocode_search(
    search: &GeocodeSearch,
    options: &GeocodeSearchOptions,
) -> OrsResult<OrsRequest> {
    let (path, mut query) = match search {
        GeocodeSearch::Text(text) => (
            "/geocode/search",
            vec![("text".to_owned(), text.clone())],
        ),
        GeocodeSearch::Structured(address) => ("/geocode/search/structured", pairs(address)?),
    };
    query.extend(pairs(options)?);
    Ok(OrsRequest::get(path, query))
}

pub fn geocode_autocomplete(query: &GeocodeAutocompleteQuery) -> OrsResult<OrsRequest> {
    Ok(OrsRequest::get("/geocode/autocomplete", pairs(query)?))
}

pub fn geocode_reverse(query: &GeocodeReverseQuery) -> OrsResult<OrsRequest> {
    Ok(OrsRequest::get("/geocode/reverse", pairs(query)?))
}

/// Elevation for a point or a line, dispatched on the geometry's kind.
///
/// A bare point is looked up with `GET` and `geometry=lon,lat`; every other
/// input is posted as JSON with its `format_in` tag.
pub fn elevation(geometry: &GeometryInput, query: &ElevationQuery) -> OrsResult<OrsRequest> {
    let path = geometry.kind().path();
    let format_in = geometry.format_in();

    if let GeometryInput::Point(point) = geometry {
        let mut params = vec![
            ("format_in".to_owned(), format_in.as_str().to_owned()),
            ("geometry".to_owned(), point.query_value()),
        ];
        params.extend(pairs(query)?);
        return Ok(OrsRequest::get(path, params));
    }

    let mut body = serde_json::Map::new();
    body.insert("format_in".to_owned(), Value::from(format_in.as_str()));
    body.insert("geometry".to_owned(), geometry.to_value()?);
    if let Value::Object(options) = serde_json::to_value(query)? {
        body.extend(options);
    }
    OrsRequest::post(path, &body)
}
