//! Elevation lookup options and responses.

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::polyline;

/// Output geometry format of the elevation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElevationFormatOut {
    #[serde(rename = "geojson")]
    GeoJson,
    /// `[lon, lat, ele]` for point lookups.
    #[serde(rename = "point")]
    Point,
    /// `[[lon, lat, ele], ...]` for line lookups.
    #[serde(rename = "polyline")]
    Polyline,
    #[serde(rename = "encodedpolyline5")]
    EncodedPolyline5,
    #[serde(rename = "encodedpolyline6")]
    EncodedPolyline6,
}

impl ElevationFormatOut {
    /// Coordinate scale of encoded polyline output.
    pub fn polyline_factor(&self) -> f64 {
        match self {
            Self::EncodedPolyline6 => polyline::PRECISION_6,
            _ => polyline::PRECISION_5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GeoJson => "geojson",
            Self::Point => "point",
            Self::Polyline => "polyline",
            Self::EncodedPolyline5 => "encodedpolyline5",
            Self::EncodedPolyline6 => "encodedpolyline6",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElevationQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_out: Option<ElevationFormatOut>,
    /// Elevation model, e.g. `srtm`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<String>,
}

/// The `geometry` member of an elevation response; its form follows `format_out`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ElevationGeometry {
    Encoded(String),
    Point(Coordinate),
    Line(Vec<Coordinate>),
    GeoJson(geojson::Geometry),
}

impl ElevationGeometry {
    /// The positions carried by the geometry, decoding encoded polylines.
    ///
    /// Pass the `format_out` the request used; it selects the polyline scale.
    pub fn coordinates(&self, format_out: Option<ElevationFormatOut>) -> Vec<Coordinate> {
        match self {
            Self::Encoded(encoded) => {
                let factor = format_out.map_or(polyline::PRECISION_5, |format| {
                    format.polyline_factor()
                });
                polyline::decode_with_factor(encoded, true, factor)
            }
            Self::Point(point) => vec![*point],
            Self::Line(points) => points.clone(),
            Self::GeoJson(geometry) => match &geometry.value {
                geojson::Value::Point(position) => {
                    Coordinate::from_slice(position).into_iter().collect()
                }
                geojson::Value::LineString(positions) | geojson::Value::MultiPoint(positions) => {
                    positions
                        .iter()
                        .filter_map(|position| Coordinate::from_slice(position))
                        .collect()
                }
                _ => Vec::new(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElevationResponse {
    pub attribution: Option<String>,
    pub version: Option<String>,
    pub timestamp: Option<u64>,
    pub geometry: ElevationGeometry,
}
