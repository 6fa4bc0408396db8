//! openrouteservice client
//!
//! Typed requests for directions, isochrones, matrices, geocoding, points of
//! interest and elevation, plus the encoded polyline codec used for route
//! geometries.

pub mod client;
pub mod common;
pub mod config;
pub mod coordinate;
pub mod directions;
pub mod elevation;
pub mod error;
pub mod flatten;
pub mod geocode;
pub mod geometry;
pub mod isochrones;
pub mod matrix;
pub mod pois;
pub mod polyline;
pub mod request;

pub use client::{OrsClient, OrsResponse, ResponseBody};
pub use common::Profile;
pub use config::OrsConfig;
pub use coordinate::Coordinate;
pub use error::{OrsError, OrsResult, PolylineError};
pub use geometry::GeometryInput;
pub use request::{Method, OrsRequest};
