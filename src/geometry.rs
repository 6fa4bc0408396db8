//! Geometry inputs accepted by the elevation endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::coordinate::Coordinate;
use crate::error::{OrsError, OrsResult};

/// Which elevation endpoint a geometry is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    Point,
    Line,
}

impl GeometryKind {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Point => "/elevation/point",
            Self::Line => "/elevation/line",
        }
    }
}

/// The `format_in` tag describing how a geometry is written on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormatIn {
    #[serde(rename = "point")]
    Point,
    #[serde(rename = "polyline")]
    Polyline,
    #[serde(rename = "geojson")]
    GeoJson,
    #[serde(rename = "encodedpolyline5")]
    EncodedPolyline5,
}

impl FormatIn {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Point => "point",
            Self::Polyline => "polyline",
            Self::GeoJson => "geojson",
            Self::EncodedPolyline5 => "encodedpolyline5",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GeometryInput {
    /// A bare `[lon, lat]` position.
    Point(Coordinate),
    /// A path given as a list of positions.
    Line(Vec<Coordinate>),
    /// A polyline already encoded with 1e-5 precision.
    EncodedPolyline(String),
    /// A GeoJSON geometry object.
    GeoJson(geojson::Geometry),
}

impl GeometryInput {
    /// Classifies an arbitrary JSON value.
    ///
    /// Precedence: a string is an encoded polyline, an object carrying a
    /// `type` member is GeoJSON, an array starting with a number is a single
    /// point, and any other array is a list of positions. `[lon, lat]` is
    /// therefore never read as a two point line.
    pub fn classify(value: &Value) -> OrsResult<Self> {
        match value {
            Value::String(encoded) => Ok(Self::EncodedPolyline(encoded.clone())),
            Value::Object(object) if object.contains_key("type") => {
                serde_json::from_value(value.clone())
                    .map(Self::GeoJson)
                    .map_err(|why| OrsError::InvalidGeometry(why.to_string()))
            }
            Value::Array(items) if items.first().is_some_and(Value::is_number) => {
                coordinate_from_value(value).map(Self::Point)
            }
            Value::Array(items) => items
                .iter()
                .map(coordinate_from_value)
                .collect::<OrsResult<Vec<_>>>()
                .map(Self::Line),
            other => Err(OrsError::InvalidGeometry(format!(
                "cannot classify {other} as a point, line, polyline or GeoJSON geometry"
            ))),
        }
    }

    pub fn kind(&self) -> GeometryKind {
        match self {
            Self::Point(_) => GeometryKind::Point,
            Self::Line(_) | Self::EncodedPolyline(_) => GeometryKind::Line,
            Self::GeoJson(geometry) => match geometry.value {
                geojson::Value::Point(_) => GeometryKind::Point,
                _ => GeometryKind::Line,
            },
        }
    }

    pub fn format_in(&self) -> FormatIn {
        match self {
            Self::Point(_) => FormatIn::Point,
            Self::Line(_) => FormatIn::Polyline,
            Self::EncodedPolyline(_) => FormatIn::EncodedPolyline5,
            Self::GeoJson(_) => FormatIn::GeoJson,
        }
    }

    /// The `geometry` member sent to the elevation service.
    pub fn to_value(&self) -> OrsResult<Value> {
        Ok(match self {
            Self::Point(point) => serde_json::to_value(point)?,
            Self::Line(points) => serde_json::to_value(points)?,
            Self::EncodedPolyline(encoded) => Value::String(encoded.clone()),
            Self::GeoJson(geometry) => serde_json::to_value(geometry)?,
        })
    }
}

fn coordinate_from_value(value: &Value) -> OrsResult<Coordinate> {
    serde_json::from_value(value.clone())
        .map_err(|why| OrsError::InvalidGeometry(format!("{value} is not a position: {why}")))
}

impl TryFrom<&Value> for GeometryInput {
    type Error = OrsError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::classify(value)
    }
}

impl From<Coordinate> for GeometryInput {
    fn from(point: Coordinate) -> Self {
        Self::Point(point)
    }
}

impl From<Vec<Coordinate>> for GeometryInput {
    fn from(points: Vec<Coordinate>) -> Self {
        Self::Line(points)
    }
}

impl From<String> for GeometryInput {
    fn from(encoded: String) -> Self {
        Self::EncodedPolyline(encoded)
    }
}

impl From<&str> for GeometryInput {
    fn from(encoded: &str) -> Self {
        Self::EncodedPolyline(encoded.to_owned())
    }
}

impl From<geojson::Geometry> for GeometryInput {
    fn from(geometry: geojson::Geometry) -> Self {
        Self::GeoJson(geometry)
    }
}
