//! Longitude-first coordinates as exchanged with openrouteservice.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

/// A `[lon, lat]` or `[lon, lat, elevation]` position.
///
/// Degrees for longitude/latitude, meters for elevation. Values are never
/// range checked; whatever the caller supplies goes on the wire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
    pub elevation: Option<f64>,
}

impl Coordinate {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self {
            lon,
            lat,
            elevation: None,
        }
    }

    pub fn with_elevation(lon: f64, lat: f64, elevation: f64) -> Self {
        Self {
            lon,
            lat,
            elevation: Some(elevation),
        }
    }

    /// Builds a coordinate from a GeoJSON style position.
    ///
    /// Returns `None` unless the slice holds exactly two or three values.
    pub fn from_slice(position: &[f64]) -> Option<Self> {
        match *position {
            [lon, lat] => Some(Self::new(lon, lat)),
            [lon, lat, elevation] => Some(Self::with_elevation(lon, lat, elevation)),
            _ => None,
        }
    }

    pub fn to_vec(&self) -> Vec<f64> {
        let mut position = vec![self.lon, self.lat];
        position.extend(self.elevation);
        position
    }

    /// `lon,lat` as used in GET query parameters, e.g. `8.681495,49.41461`.
    ///
    /// Elevation is never part of a query position.
    pub fn query_value(&self) -> String {
        format!("{},{}", self.lon, self.lat)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self::new(lon, lat)
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self::new(lon, lat)
    }
}

impl From<[f64; 3]> for Coordinate {
    fn from([lon, lat, elevation]: [f64; 3]) -> Self {
        Self::with_elevation(lon, lat, elevation)
    }
}

impl From<Coordinate> for geojson::Position {
    fn from(coordinate: Coordinate) -> Self {
        coordinate.to_vec()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}", self.lon, self.lat)?;
        if let Some(elevation) = self.elevation {
            write!(f, ", {elevation}")?;
        }
        Ok(())
    }
}

impl Serialize for Coordinate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = if self.elevation.is_some() { 3 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.lon)?;
        seq.serialize_element(&self.lat)?;
        if let Some(elevation) = &self.elevation {
            seq.serialize_element(elevation)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let position = Vec::<f64>::deserialize(deserializer)?;
        Coordinate::from_slice(&position).ok_or_else(|| {
            de::Error::invalid_length(position.len(), &"a position of 2 or 3 numbers")
        })
    }
}
