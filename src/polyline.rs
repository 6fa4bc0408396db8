//! Encoded polyline codec for route geometries.
//!
//! openrouteservice returns route geometries in Google's encoded polyline
//! format: every coordinate is a delta against the previous one, scaled to a
//! fixed precision (1e-5 degrees by default, 1e-2 meters for elevation), zigzag encoded
//! and written as 5-bit groups offset by 63. Elevation, when requested, is a
//! third value per point.
//!
//! See [Google's polyline
//! algorithm](https://developers.google.com/maps/documentation/utilities/polylinealgorithm).

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::coordinate::Coordinate;
use crate::error::PolylineError;

/// Scale of the standard five decimal polyline.
pub const PRECISION_5: f64 = 1e5;
/// Scale of `encodedpolyline6` output.
pub const PRECISION_6: f64 = 1e6;
const ELEVATION_FACTOR: f64 = 1e2;
const CHARACTER_OFFSET: u8 = 63;
const CONTINUATION_BIT: i64 = 0x20;
const GROUP_MASK: i64 = 0x1f;

/// A polyline representing a route geometry as decoded coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Decodes an encoded polyline, skipping points that cannot be read.
    pub fn decode(encoded: &str, include_elevation: bool) -> Self {
        Self::new(decode(encoded, include_elevation))
    }

    pub fn encode(&self, include_elevation: bool) -> String {
        encode(&self.points, include_elevation)
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }
}

/// Iterator over the points of an encoded polyline.
///
/// Yields one `Result` per point. A failed point does not advance the
/// running position, and iteration resumes after the characters it consumed.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    bytes: &'a [u8],
    index: usize,
    include_elevation: bool,
    factor: f64,
    position: [i64; 3],
}

impl<'a> Decoder<'a> {
    pub fn new(encoded: &'a str, include_elevation: bool) -> Self {
        Self::with_factor(encoded, include_elevation, PRECISION_5)
    }

    /// Decodes longitude and latitude at `factor` (e.g. [`PRECISION_6`]).
    pub fn with_factor(encoded: &'a str, include_elevation: bool, factor: f64) -> Self {
        Self {
            bytes: encoded.as_bytes(),
            index: 0,
            include_elevation,
            factor,
            position: [0; 3],
        }
    }

    fn dimensions(&self) -> usize {
        if self.include_elevation { 3 } else { 2 }
    }

    /// Reads one zigzag encoded value.
    fn read_value(&mut self) -> Result<i64, PolylineError> {
        let start = self.index;
        let mut result: i64 = 0;
        let mut shift = 0;
        loop {
            let Some(&byte) = self.bytes.get(self.index) else {
                return Err(PolylineError::Truncated { index: self.index });
            };
            if !(CHARACTER_OFFSET..=CHARACTER_OFFSET + 0x3f).contains(&byte) {
                let index = self.index;
                self.index += 1;
                return Err(PolylineError::InvalidCharacter { index, byte });
            }
            self.index += 1;
            if shift >= i64::BITS {
                return Err(PolylineError::Overflow { index: start });
            }

            let chunk = i64::from(byte - CHARACTER_OFFSET);
            result |= (chunk & GROUP_MASK) << shift;
            shift += 5;
            if chunk < CONTINUATION_BIT {
                break;
            }
        }

        Ok(if result & 1 != 0 {
            !(result >> 1)
        } else {
            result >> 1
        })
    }

    fn read_deltas(&mut self) -> Result<[i64; 3], PolylineError> {
        let mut deltas = [0; 3];
        // stored order on the wire is lat, lon, elevation
        for delta in deltas.iter_mut().take(self.dimensions()) {
            *delta = self.read_value()?;
        }
        Ok(deltas)
    }
}

impl Iterator for Decoder<'_> {
    type Item = Result<Coordinate, PolylineError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.bytes.len() {
            return None;
        }

        let deltas = match self.read_deltas() {
            Ok(deltas) => deltas,
            Err(error) => return Some(Err(error)),
        };
        for (value, delta) in self.position.iter_mut().zip(deltas) {
            *value = value.wrapping_add(delta);
        }

        let [lat, lon, elevation] = self.position;
        let lon = lon as f64 / self.factor;
        let lat = lat as f64 / self.factor;
        Some(Ok(if self.include_elevation {
            Coordinate::with_elevation(lon, lat, elevation as f64 / ELEVATION_FACTOR)
        } else {
            Coordinate::new(lon, lat)
        }))
    }
}

/// Decodes an encoded polyline into longitude-first coordinates.
///
/// Points that cannot be decoded (truncated groups, characters outside the
/// polyline alphabet, oversized values) are logged and left out; decoding
/// continues with the remaining input. Use [`decode_strict`] to fail instead.
pub fn decode(encoded: &str, include_elevation: bool) -> Vec<Coordinate> {
    decode_with_factor(encoded, include_elevation, PRECISION_5)
}

/// [`decode`] for polylines scaled by something other than 1e5.
pub fn decode_with_factor(encoded: &str, include_elevation: bool, factor: f64) -> Vec<Coordinate> {
    Decoder::with_factor(encoded, include_elevation, factor)
        .filter_map(|point| match point {
            Ok(coordinate) => Some(coordinate),
            Err(error) => {
                warn!(%error, "skipping undecodable polyline point");
                None
            }
        })
        .collect()
}

/// Decodes an encoded polyline, failing on the first malformed point.
pub fn decode_strict(
    encoded: &str,
    include_elevation: bool,
) -> Result<Vec<Coordinate>, PolylineError> {
    Decoder::new(encoded, include_elevation).collect()
}

/// Encodes coordinates as a polyline. Missing elevations encode as zero.
pub fn encode(coordinates: &[Coordinate], include_elevation: bool) -> String {
    encode_with_factor(coordinates, include_elevation, PRECISION_5)
}

pub fn encode_with_factor(
    coordinates: &[Coordinate],
    include_elevation: bool,
    factor: f64,
) -> String {
    let dimensions = if include_elevation { 3 } else { 2 };
    let mut encoded = String::new();
    let mut previous = [0i64; 3];

    for coordinate in coordinates {
        let current = [
            scale(coordinate.lat, factor),
            scale(coordinate.lon, factor),
            scale(coordinate.elevation.unwrap_or(0.0), ELEVATION_FACTOR),
        ];
        for dimension in 0..dimensions {
            write_value(current[dimension].wrapping_sub(previous[dimension]), &mut encoded);
        }
        previous = current;
    }

    encoded
}

fn scale(value: f64, factor: f64) -> i64 {
    (value * factor).round() as i64
}

fn write_value(value: i64, encoded: &mut String) {
    let mut zigzag = ((value << 1) ^ (value >> 63)) as u64;
    while zigzag >= CONTINUATION_BIT as u64 {
        let group = (CONTINUATION_BIT as u64 | (zigzag & GROUP_MASK as u64)) as u8;
        encoded.push(char::from(group + CHARACTER_OFFSET));
        zigzag >>= 5;
    }
    encoded.push(char::from(zigzag as u8 + CHARACTER_OFFSET));
}
