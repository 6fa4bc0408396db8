//! Points of interest queries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::{BoundingBox, Feature, FeatureCollectionType};
use crate::coordinate::Coordinate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoiRequest {
    /// Features inside the search geometry.
    #[default]
    Pois,
    /// Counts per category.
    Stats,
    /// The category catalogue.
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoiSortBy {
    #[serde(rename = "category")]
    Category,
    #[serde(rename = "distance")]
    Distance,
}

/// Search area: a bounding box, a GeoJSON geometry, or both, plus a buffer in meters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoiGeometry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<[Coordinate; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geojson: Option<geojson::Geometry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffer: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoiFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_group_ids: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_ids: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wheelchair: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smoking: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Vec<String>>,
}

/// Body of a `POST /pois` request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoisQuery {
    pub request: PoiRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<PoiGeometry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<PoiFilters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sortby: Option<PoiSortBy>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoiCategory {
    pub category_name: String,
    pub category_group: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoiProperties {
    pub osm_id: u64,
    pub osm_type: u8,
    pub distance: Option<f64>,
    #[serde(default)]
    pub category_ids: BTreeMap<String, PoiCategory>,
    #[serde(default)]
    pub osm_tags: BTreeMap<String, String>,
}

/// Response to a [`PoiRequest::Pois`] query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoisResponse {
    #[serde(rename = "type", default)]
    pub kind: FeatureCollectionType,
    pub bbox: Option<BoundingBox>,
    #[serde(default)]
    pub features: Vec<Feature<PoiProperties>>,
    pub information: Option<Value>,
}
