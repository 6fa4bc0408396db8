//! Geocoding (search, structured search, autocomplete, reverse) queries.
//!
//! These endpoints are plain `GET`s: queries are serialized to JSON, then
//! flattened into dotted query parameters (see [`crate::flatten`]).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::common::{BoundingBox, Feature, FeatureCollectionType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeocodeSource {
    Osm,
    Oa,
    Wof,
    Gn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeocodeLayer {
    Address,
    Venue,
    Neighbourhood,
    Locality,
    Borough,
    LocalAdmin,
    County,
    MacroCounty,
    Region,
    MacroRegion,
    Country,
    Coarse,
    Postalcode,
    Street,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl LonLat {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

/// `focus.point.lon` / `focus.point.lat`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Focus {
    pub point: LonLat,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryRect {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

/// `boundary.circle.*`; reverse geocoding only uses `radius`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundaryCircle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rect: Option<BoundaryRect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circle: Option<BoundaryCircle>,
    /// ISO 3166-1 alpha-2 or alpha-3 code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gid: Option<String>,
}

/// Options shared by free text and structured search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeocodeSearchOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<Focus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundary: Option<Boundary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<GeocodeSource>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layers: Option<Vec<GeocodeLayer>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

/// Address parts for `/geocode/search/structured`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neighbourhood: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub borough: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postalcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// What to search for: free text or an address broken into parts.
#[derive(Debug, Clone, PartialEq)]
pub enum GeocodeSearch {
    Text(String),
    Structured(StructuredAddress),
}

impl From<&str> for GeocodeSearch {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for GeocodeSearch {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<StructuredAddress> for GeocodeSearch {
    fn from(address: StructuredAddress) -> Self {
        Self::Structured(address)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeocodeAutocompleteQuery {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<Focus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundary: Option<Boundary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<GeocodeSource>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layers: Option<Vec<GeocodeLayer>>,
}

impl GeocodeAutocompleteQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeReverseQuery {
    pub point: LonLat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundary: Option<Boundary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<GeocodeSource>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layers: Option<Vec<GeocodeLayer>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl GeocodeReverseQuery {
    pub fn new(point: LonLat) -> Self {
        Self {
            point,
            boundary: None,
            sources: None,
            layers: None,
            size: None,
        }
    }
}

/// The `geocoding` member of a geocoder response.
///
/// `query` is the request echoed back, already unflattened into nested form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodingMetadata {
    pub version: Option<String>,
    pub attribution: Option<String>,
    #[serde(default)]
    pub query: Map<String, Value>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub errors: Vec<String>,
    pub engine: Option<Value>,
    pub timestamp: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeProperties {
    pub id: Option<String>,
    pub gid: Option<String>,
    pub layer: Option<String>,
    pub source: Option<String>,
    pub source_id: Option<String>,
    pub name: Option<String>,
    pub label: Option<String>,
    pub housenumber: Option<String>,
    pub street: Option<String>,
    pub postalcode: Option<String>,
    pub confidence: Option<f64>,
    pub distance: Option<f64>,
    pub accuracy: Option<String>,
    pub country: Option<String>,
    pub country_a: Option<String>,
    pub region: Option<String>,
    pub county: Option<String>,
    pub locality: Option<String>,
    pub neighbourhood: Option<String>,
    /// Anything not modelled above.
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResponse {
    #[serde(rename = "type", default)]
    pub kind: FeatureCollectionType,
    pub geocoding: GeocodingMetadata,
    pub bbox: Option<BoundingBox>,
    #[serde(default)]
    pub features: Vec<Feature<GeocodeProperties>>,
}
