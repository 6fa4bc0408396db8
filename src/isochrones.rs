//! Isochrones request options and response shapes.

use serde::{Deserialize, Serialize};

use crate::common::{FeatureCollection, Metadata, Profile, Units};
use crate::coordinate::Coordinate;
use crate::directions::RouteOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IsochronesAttribute {
    #[serde(rename = "area")]
    Area,
    #[serde(rename = "reachfactor")]
    ReachFactor,
    #[serde(rename = "total_pop")]
    TotalPopulation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    Start,
    Destination,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeType {
    Time,
    Distance,
}

/// Body of a `POST /v2/isochrones/{profile}` request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IsochronesQuery {
    pub locations: Vec<Coordinate>,
    /// Seconds for time ranges, `units` for distance ranges.
    pub range: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<IsochronesAttribute>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intersections: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_type: Option<LocationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<RouteOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_type: Option<RangeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smoothing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_units: Option<Units>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<Units>,
}

impl IsochronesQuery {
    pub fn new(locations: Vec<Coordinate>, range: Vec<f64>) -> Self {
        Self {
            locations,
            range,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EchoedIsochronesQuery {
    #[serde(flatten)]
    pub query: IsochronesQuery,
    pub profile: Option<Profile>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsochroneProperties {
    pub group_index: usize,
    pub value: f64,
    pub center: Coordinate,
    pub area: Option<f64>,
    pub reachfactor: Option<f64>,
    pub total_pop: Option<f64>,
}

pub type IsochronesResponse =
    FeatureCollection<IsochroneProperties, Metadata<EchoedIsochronesQuery>>;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_query_body() {
        let mut query = IsochronesQuery::new(
            vec![Coordinate::new(8.681495, 49.41461)],
            vec![300.0, 200.0],
        );
        query.attributes = Some(vec![IsochronesAttribute::TotalPopulation]);
        query.range_type = Some(RangeType::Time);

        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({
                "locations": [[8.681495, 49.41461]],
                "range": [300.0, 200.0],
                "attributes": ["total_pop"],
                "range_type": "time"
            })
        );
    }

    #[test]
    fn test_parse_response() {
        let response: IsochronesResponse = serde_json::from_value(json!({
            "type": "FeatureCollection",
            "bbox": [8.66, 49.40, 8.70, 49.43],
            "features": [{
                "type": "Feature",
                "properties": { "group_index": 0, "value": 300.0, "center": [8.681495, 49.41461], "area": 1234.5 },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[8.66, 49.40], [8.70, 49.40], [8.70, 49.43], [8.66, 49.40]]]
                }
            }],
            "metadata": {
                "attribution": "openrouteservice.org | OpenStreetMap contributors",
                "service": "isochrones",
                "timestamp": 1700000000000u64,
                "query": {
                    "profile": "foot-walking",
                    "locations": [[8.681495, 49.41461]],
                    "range": [300.0]
                },
                "engine": { "version": "7.1.0" }
            }
        }))
        .unwrap();

        let feature = &response.features[0];
        assert_eq!(feature.properties.center, Coordinate::new(8.681495, 49.41461));
        assert_eq!(feature.properties.area, Some(1234.5));
        assert_eq!(response.metadata.query.profile, Some(Profile::FootWalking));
    }
}
