//! Types shared by several openrouteservice endpoints.

use std::fmt;

use serde::{Deserialize, Serialize};

/// `[min_lon, min_lat, max_lon, max_lat]`, optionally with elevation bounds.
pub type BoundingBox = Vec<f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Profile {
    #[serde(rename = "driving-car")]
    DrivingCar,
    #[serde(rename = "driving-hgv")]
    DrivingHgv,
    #[serde(rename = "cycling-regular")]
    CyclingRegular,
    #[serde(rename = "cycling-road")]
    CyclingRoad,
    #[serde(rename = "cycling-mountain")]
    CyclingMountain,
    #[serde(rename = "cycling-electric")]
    CyclingElectric,
    #[serde(rename = "foot-walking")]
    FootWalking,
    #[serde(rename = "foot-hiking")]
    FootHiking,
    #[serde(rename = "wheelchair")]
    Wheelchair,
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DrivingCar => "driving-car",
            Self::DrivingHgv => "driving-hgv",
            Self::CyclingRegular => "cycling-regular",
            Self::CyclingRoad => "cycling-road",
            Self::CyclingMountain => "cycling-mountain",
            Self::CyclingElectric => "cycling-electric",
            Self::FootWalking => "foot-walking",
            Self::FootHiking => "foot-hiking",
            Self::Wheelchair => "wheelchair",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Distance units accepted by directions, isochrones and matrix requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Units {
    #[serde(rename = "m")]
    Meters,
    #[serde(rename = "km")]
    Kilometers,
    #[serde(rename = "mi")]
    Miles,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Engine {
    pub version: String,
    pub build_date: Option<String>,
    pub graph_date: Option<String>,
}

/// The `metadata` member of routing, isochrones and matrix responses.
///
/// `Q` is the echoed query, which differs per endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata<Q> {
    pub attribution: String,
    pub service: String,
    pub timestamp: u64,
    pub query: Q,
    pub engine: Option<Engine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_message: Option<String>,
}

/// The `type` member of a GeoJSON feature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureType {
    #[default]
    Feature,
}

/// The `type` member of a GeoJSON feature collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureCollectionType {
    #[default]
    FeatureCollection,
}

/// A GeoJSON feature whose properties deserialize into `P`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature<P> {
    #[serde(rename = "type", default)]
    pub kind: FeatureType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
    pub geometry: geojson::Geometry,
    pub properties: P,
}

/// A GeoJSON feature collection with typed properties and an optional
/// endpoint specific metadata member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection<P, M> {
    #[serde(rename = "type", default)]
    pub kind: FeatureCollectionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
    pub features: Vec<Feature<P>>,
    pub metadata: M,
}
