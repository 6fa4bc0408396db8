//! Distance/duration matrix request options and response shapes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::common::{Metadata, Profile, Units};
use crate::coordinate::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatrixMetric {
    Distance,
    Duration,
}

/// Body of a `POST /v2/matrix/{profile}` request.
///
/// `sources` and `destinations` index into `locations`; when absent every
/// location is used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatrixQuery {
    pub locations: Vec<Coordinate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destinations: Option<Vec<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<MatrixMetric>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_locations: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<Units>,
}

impl MatrixQuery {
    pub fn new(locations: Vec<Coordinate>) -> Self {
        Self {
            locations,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EchoedMatrixQuery {
    #[serde(flatten)]
    pub query: MatrixQuery,
    pub profile: Option<Profile>,
    #[serde(rename = "responseType")]
    pub response_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixLocation {
    pub location: Coordinate,
    pub snapped_distance: Option<f64>,
    pub name: Option<String>,
}

impl MatrixLocation {
    /// The resolved name, falling back to `lon, lat`.
    pub fn label(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| self.location.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixResponse {
    /// Seconds, `None` where no route exists.
    pub durations: Option<Vec<Vec<Option<f64>>>>,
    /// In the requested units, `None` where no route exists.
    pub distances: Option<Vec<Vec<Option<f64>>>>,
    #[serde(default)]
    pub destinations: Vec<MatrixLocation>,
    #[serde(default)]
    pub sources: Vec<MatrixLocation>,
    pub metadata: Metadata<EchoedMatrixQuery>,
}

impl MatrixResponse {
    /// Durations keyed by source label, then destination label.
    ///
    /// Labels come from [`MatrixLocation::label`]; locations sharing a label
    /// collapse into one entry.
    pub fn table(&self) -> BTreeMap<String, BTreeMap<String, Option<f64>>> {
        let durations = self.durations.as_deref().unwrap_or_default();
        self.sources
            .iter()
            .enumerate()
            .map(|(i, source)| {
                let row = self
                    .destinations
                    .iter()
                    .enumerate()
                    .map(|(j, destination)| {
                        let duration = durations
                            .get(i)
                            .and_then(|row| row.get(j))
                            .copied()
                            .flatten();
                        (destination.label(), duration)
                    })
                    .collect();
                (source.label(), row)
            })
            .collect()
    }
}
