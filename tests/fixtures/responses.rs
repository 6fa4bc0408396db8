//! Canned openrouteservice response bodies, trimmed to the members the
//! client reads.

use serde_json::{Value, json};

pub const API_KEY: &str = "5b3ce3597851110001cf6248a1b2c3d4";

pub const GPX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.0" creator="openrouteservice" xmlns="https://raw.githubusercontent.com/GIScience/openrouteservice-schema/main/gpx/v2/ors-gpx.xsd">
  <rte>
    <rtept lat="37.415132" lon="-121.865929"/>
    <rtept lat="37.424062" lon="-121.865972"/>
  </rte>
</gpx>"#;

fn metadata(service: &str, query: Value) -> Value {
    json!({
        "attribution": "openrouteservice.org | OpenStreetMap contributors",
        "service": service,
        "timestamp": 1718035200000u64,
        "query": query,
        "engine": {
            "version": "8.0.0",
            "build_date": "2024-03-21T13:55:54Z",
            "graph_date": "2024-06-02T08:13:46Z"
        }
    })
}

pub fn basic_directions() -> Value {
    json!({
        "type": "FeatureCollection",
        "bbox": [-121.865972, 37.415132, -121.865929, 37.424062],
        "features": [{
            "bbox": [-121.865972, 37.415132, -121.865929, 37.424062],
            "type": "Feature",
            "properties": {
                "segments": [{
                    "distance": 993.4,
                    "duration": 117.1,
                    "steps": [
                        { "distance": 993.4, "duration": 117.1, "type": 11, "instruction": "Head north on Cadillac Drive", "name": "Cadillac Drive", "way_points": [0, 1] },
                        { "distance": 0.0, "duration": 0.0, "type": 10, "instruction": "Arrive at Cadillac Drive", "name": "-", "way_points": [1, 1] }
                    ]
                }],
                "way_points": [0, 1],
                "summary": { "distance": 993.4, "duration": 117.1 }
            },
            "geometry": {
                "type": "LineString",
                "coordinates": [[-121.865929, 37.415132], [-121.865972, 37.424062]]
            }
        }],
        "metadata": metadata("routing", json!({
            "coordinates": [[-121.86592918628558, 37.41513158647777], [-121.86597210162844, 37.424061505151634]],
            "profile": "driving-car",
            "format": "json"
        }))
    })
}

pub fn directions_json() -> Value {
    json!({
        "bbox": [-121.865972, 37.415132, -121.865929, 37.424062],
        "routes": [{
            "summary": { "distance": 993.4, "duration": 117.1, "ascent": 3.0, "descent": 0.4 },
            "segments": [{
                "distance": 993.4,
                "duration": 117.1,
                "steps": [
                    { "distance": 993.4, "duration": 117.1, "type": 11, "instruction": "Head north on Cadillac Drive", "name": "Cadillac Drive", "way_points": [0, 1] },
                    { "distance": 0.0, "duration": 0.0, "type": 10, "instruction": "Arrive at Cadillac Drive", "name": "-", "way_points": [1, 1] }
                ],
                "avgspeed": 30.5
            }],
            "bbox": [-121.865972, 37.415132, -121.865929, 37.424062],
            "geometry": "_p~iF~ps|U_ulLnnqC_mqNvxq`@",
            "way_points": [0, 1]
        }],
        "metadata": metadata("routing", json!({
            "coordinates": [[-121.86592918628558, 37.41513158647777], [-121.86597210162844, 37.424061505151634]],
            "profile": "driving-car",
            "format": "json",
            "attributes": ["avgspeed"]
        }))
    })
}

pub fn matrix() -> Value {
    json!({
        "durations": [[0.0, 117.1], [121.9, 0.0]],
        "destinations": [
            { "location": [-121.865929, 37.415132], "snapped_distance": 0.5 },
            { "location": [-121.865972, 37.424062], "snapped_distance": 0.8 }
        ],
        "sources": [
            { "location": [-121.865929, 37.415132], "snapped_distance": 0.5 },
            { "location": [-121.865972, 37.424062], "snapped_distance": 0.8 }
        ],
        "metadata": metadata("matrix", json!({
            "locations": [[-121.86592918628558, 37.41513158647777], [-121.86597210162844, 37.424061505151634]],
            "profile": "driving-car",
            "responseType": "json"
        }))
    })
}

/// Geocoder response echoing its query with dotted keys.
pub fn geocode_search() -> Value {
    json!({
        "geocoding": {
            "version": "0.2",
            "attribution": "https://openrouteservice.org/terms-of-service/#attribution-geocode",
            "query": {
                "text": "Namibian Brewery",
                "size": 10,
                "sources": ["openstreetmap", "geonames"],
                "focus.point.lon": 8.681495,
                "focus.point.lat": 49.41461,
                "lang": { "name": "English", "iso6391": "en", "defaulted": true }
            },
            "warnings": [],
            "engine": { "name": "Pelias", "author": "Mapzen", "version": "1.0" },
            "timestamp": 1718035200000u64
        },
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "geometry": { "type": "Point", "coordinates": [17.081011, -22.574179] },
            "properties": {
                "id": "node/4307373592",
                "gid": "openstreetmap:venue:node/4307373592",
                "layer": "venue",
                "source": "openstreetmap",
                "source_id": "node/4307373592",
                "name": "Namibian Breweries",
                "confidence": 0.6,
                "accuracy": "point",
                "country": "Namibia",
                "country_a": "NAM",
                "label": "Namibian Breweries, Windhoek, Namibia"
            }
        }],
        "bbox": [17.081011, -22.574179, 17.081011, -22.574179]
    })
}

pub fn elevation_point() -> Value {
    json!({
        "attribution": "service by https://openrouteservice.org | data by https://srtm.csi.cgiar.org",
        "version": "0.2.1",
        "timestamp": 1718035200,
        "geometry": { "type": "Point", "coordinates": [-121.86601, 37.41524, 39.0] }
    })
}

pub fn elevation_line() -> Value {
    json!({
        "attribution": "service by https://openrouteservice.org | data by https://srtm.csi.cgiar.org",
        "version": "0.2.1",
        "timestamp": 1718035200,
        "geometry": [[-121.865929, 37.415132, 39.0], [-121.865972, 37.424062, 47.5]]
    })
}
