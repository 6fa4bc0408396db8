//! Directions request options and response shapes.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::common::{BoundingBox, FeatureCollection, Metadata, Profile, Units};
use crate::coordinate::Coordinate;
use crate::polyline;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectionsFormat {
    #[serde(rename = "json")]
    Json,
    #[serde(rename = "gpx")]
    Gpx,
    #[serde(rename = "geojson")]
    GeoJson,
}

impl DirectionsFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Gpx => "gpx",
            Self::GeoJson => "geojson",
        }
    }
}

impl fmt::Display for DirectionsFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectionsAttribute {
    #[serde(rename = "avgspeed")]
    AverageSpeed,
    #[serde(rename = "detourfactor")]
    DetourFactor,
    #[serde(rename = "percentage")]
    Percentage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtraInfo {
    Steepness,
    Suitability,
    Surface,
    WayCategory,
    WayType,
    Tollways,
    TrailDifficulty,
    OsmId,
    RoadAccessRestrictions,
    CountryInfo,
    Green,
    Noise,
    Csv,
    Shadow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvoidFeature {
    Highways,
    Tollways,
    Ferries,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvoidBorders {
    All,
    Controlled,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Hgv,
    Bus,
    Agricultural,
    Delivery,
    Forestry,
    Goods,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Smoothness {
    Excellent,
    Good,
    Intermediate,
    Bad,
    VeryBad,
    Horrible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    Fastest,
    Shortest,
    Recommended,
}

/// Maneuver kind of a single step, sent as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum InstructionType {
    Left = 0,
    Right = 1,
    SharpLeft = 2,
    SharpRight = 3,
    SlightLeft = 4,
    SlightRight = 5,
    Straight = 6,
    EnterRoundabout = 7,
    ExitRoundabout = 8,
    UTurn = 9,
    Goal = 10,
    Depart = 11,
    KeepLeft = 12,
    KeepRight = 13,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AvoidPolygons {
    pub empty: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundTrip {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Weightings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steepness_difficulty: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub green: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiet: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Restrictions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axleload: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hazmat: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smoothness_type: Option<Smoothness>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_sloped_kerb: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_incline: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_width: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weightings: Option<Weightings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<Restrictions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface_quality_known: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_unsuitable: Option<bool>,
}

/// Routing options shared by directions and isochrones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid_features: Option<Vec<AvoidFeature>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid_borders: Option<AvoidBorders>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid_countries: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid_polygons: Option<AvoidPolygons>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round_trip: Option<RoundTrip>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<VehicleType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_params: Option<ProfileParams>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlternativeRoutes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_factor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_factor: Option<f64>,
}

/// Body of a `POST /v2/directions/{profile}/{format}` request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectionsQuery {
    pub coordinates: Vec<Coordinate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_routes: Option<AlternativeRoutes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<DirectionsAttribute>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continue_straight: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_info: Option<Vec<ExtraInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry_simplify: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maneuvers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<RouteOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preference: Option<Preference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radiuses: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roundabout_exits: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_segments: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppress_warnings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<Units>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearings: Option<Vec<Vec<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_speed: Option<f64>,
}

impl DirectionsQuery {
    pub fn new(coordinates: Vec<Coordinate>) -> Self {
        Self {
            coordinates,
            ..Self::default()
        }
    }
}

/// The query echoed back in directions metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EchoedDirectionsQuery {
    #[serde(flatten)]
    pub query: DirectionsQuery,
    pub profile: Option<Profile>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ascent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descent: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Maneuver {
    pub location: Coordinate,
    pub bearing_before: f64,
    pub bearing_after: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub duration: f64,
    #[serde(rename = "type")]
    pub instruction_type: InstructionType,
    pub instruction: Option<String>,
    #[serde(default)]
    pub name: String,
    pub way_points: [usize; 2],
    pub exit_number: Option<u32>,
    pub maneuver: Option<Maneuver>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub steps: Vec<Step>,
    pub avgspeed: Option<f64>,
    pub detourfactor: Option<f64>,
    pub percentage: Option<f64>,
    pub ascent: Option<f64>,
    pub descent: Option<f64>,
}

/// Summary of one extra info attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraSummary {
    pub value: f64,
    pub distance: f64,
    pub amount: f64,
}

/// Values are `[first_way_point, last_way_point, value]` triples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extra {
    pub values: Vec<[f64; 3]>,
    #[serde(default)]
    pub summary: Vec<ExtraSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    pub code: i32,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionsRoute {
    pub summary: Summary,
    #[serde(default)]
    pub segments: Vec<Segment>,
    pub bbox: Option<BoundingBox>,
    /// Encoded polyline, present unless `geometry` was disabled.
    pub geometry: Option<String>,
    #[serde(default)]
    pub way_points: Vec<usize>,
    #[serde(default)]
    pub legs: Vec<serde_json::Value>,
    #[serde(default)]
    pub extras: std::collections::BTreeMap<String, Extra>,
    #[serde(default)]
    pub warnings: Vec<Warning>,
}

impl DirectionsRoute {
    /// Decodes the route geometry, empty when the route carries none.
    ///
    /// Pass `include_elevation` when the request set `elevation: true`.
    pub fn decoded_geometry(&self, include_elevation: bool) -> Vec<Coordinate> {
        self.geometry
            .as_deref()
            .map(|encoded| polyline::decode(encoded, include_elevation))
            .unwrap_or_default()
    }
}

pub type DirectionsMetadata = Metadata<EchoedDirectionsQuery>;

/// Response of the directions endpoint in `json` format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionsResponse {
    pub bbox: Option<BoundingBox>,
    pub routes: Vec<DirectionsRoute>,
    pub metadata: DirectionsMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionsProperties {
    #[serde(default)]
    pub segments: Vec<Segment>,
    #[serde(default)]
    pub way_points: Vec<usize>,
    pub summary: Summary,
    #[serde(default)]
    pub extras: std::collections::BTreeMap<String, Extra>,
    #[serde(default)]
    pub warnings: Vec<Warning>,
    pub transfers: Option<u32>,
    pub fare: Option<f64>,
}

/// Response of the directions endpoint in `geojson` format.
pub type DirectionsGeoJson = FeatureCollection<DirectionsProperties, DirectionsMetadata>;

/// Echoed query of the basic `GET` directions shortcut.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicDirectionsQuery {
    pub coordinates: Vec<Coordinate>,
    pub profile: Option<Profile>,
    pub format: Option<String>,
}

/// Response of `GET /v2/directions/{profile}`, always GeoJSON.
pub type BasicDirectionsResponse =
    FeatureCollection<DirectionsProperties, Metadata<BasicDirectionsQuery>>;
