//! openrouteservice HTTP client.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::common::Profile;
use crate::config::OrsConfig;
use crate::coordinate::Coordinate;
use crate::directions::{
    BasicDirectionsResponse, DirectionsFormat, DirectionsGeoJson, DirectionsQuery,
    DirectionsResponse,
};
use crate::elevation::{ElevationQuery, ElevationResponse};
use crate::error::{OrsError, OrsResult};
use crate::flatten::unflatten;
use crate::geocode::{
    GeocodeAutocompleteQuery, GeocodeResponse, GeocodeReverseQuery, GeocodeSearch,
    GeocodeSearchOptions,
};
use crate::geometry::GeometryInput;
use crate::isochrones::{IsochronesQuery, IsochronesResponse};
use crate::matrix::{MatrixQuery, MatrixResponse};
use crate::pois::PoisQuery;
use crate::request::{self, Method, OrsRequest};

/// A response body, parsed as JSON when it is JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    /// Anything else, e.g. GPX directions.
    Text(String),
}

impl ResponseBody {
    pub fn parse(text: String) -> Self {
        match serde_json::from_str(&text) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrsResponse {
    pub status: StatusCode,
    pub body: ResponseBody,
}

impl OrsResponse {
    pub fn error_for_status(self) -> OrsResult<Self> {
        if self.status.is_success() {
            return Ok(self);
        }
        let body = match self.body {
            ResponseBody::Json(value) => value.to_string(),
            ResponseBody::Text(text) => text,
        };
        Err(OrsError::Status {
            status: self.status,
            body,
        })
    }

    pub fn into_json(self) -> OrsResult<Value> {
        match self.body {
            ResponseBody::Json(value) => Ok(value),
            ResponseBody::Text(_) => Err(OrsError::UnexpectedBody { expected: "JSON" }),
        }
    }

    pub fn into_text(self) -> OrsResult<String> {
        match self.body {
            ResponseBody::Text(text) => Ok(text),
            ResponseBody::Json(_) => Err(OrsError::UnexpectedBody { expected: "text" }),
        }
    }
}

/// Async client for the openrouteservice API.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct OrsClient {
    config: OrsConfig,
    client: reqwest::Client,
}

impl OrsClient {
    pub fn new(config: OrsConfig) -> OrsResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout_secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(timeout_secs));
        }
        let client = builder.build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &OrsConfig {
        &self.config
    }

    /// Sends a shaped request and returns the response whatever its status.
    pub async fn execute(&self, request: &OrsRequest) -> OrsResult<OrsResponse> {
        let url = request.url(&self.config.base_url, &self.config.api_key)?;
        debug!(method = ?request.method, path = %request.path, "requesting openrouteservice");

        let mut builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        };
        for (name, value) in request.headers(&self.config.api_key) {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.body(serde_json::to_string(body)?);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(%status, bytes = text.len(), "openrouteservice responded");

        Ok(OrsResponse {
            status,
            body: ResponseBody::parse(text),
        })
    }

    async fn fetch_value(&self, request: OrsRequest) -> OrsResult<Value> {
        self.execute(&request).await?.error_for_status()?.into_json()
    }

    async fn fetch<T: DeserializeOwned>(&self, request: OrsRequest) -> OrsResult<T> {
        Ok(serde_json::from_value(self.fetch_value(request).await?)?)
    }

    pub async fn basic_directions(
        &self,
        profile: Profile,
        start: Coordinate,
        end: Coordinate,
    ) -> OrsResult<BasicDirectionsResponse> {
        self.fetch(request::basic_directions(profile, start, end)).await
    }

    pub async fn directions_json(
        &self,
        profile: Profile,
        query: &DirectionsQuery,
    ) -> OrsResult<DirectionsResponse> {
        self.fetch(request::directions(profile, DirectionsFormat::Json, query)?)
            .await
    }

    pub async fn directions_geojson(
        &self,
        profile: Profile,
        query: &DirectionsQuery,
    ) -> OrsResult<DirectionsGeoJson> {
        self.fetch(request::directions(profile, DirectionsFormat::GeoJson, query)?)
            .await
    }

    /// Directions as a GPX document.
    pub async fn directions_gpx(
        &self,
        profile: Profile,
        query: &DirectionsQuery,
    ) -> OrsResult<String> {
        let request = request::directions(profile, DirectionsFormat::Gpx, query)?;
        self.execute(&request).await?.error_for_status()?.into_text()
    }

    pub async fn isochrones(
        &self,
        profile: Profile,
        query: &IsochronesQuery,
    ) -> OrsResult<IsochronesResponse> {
        self.fetch(request::isochrones(profile, query)?).await
    }

    pub async fn matrix(&self, profile: Profile, query: &MatrixQuery) -> OrsResult<MatrixResponse> {
        self.fetch(request::matrix(profile, query)?).await
    }

    pub async fn geocode_search(
        &self,
        search: impl Into<GeocodeSearch>,
        options: &GeocodeSearchOptions,
    ) -> OrsResult<GeocodeResponse> {
        self.fetch_geocode(request::geocode_search(&search.into(), options)?)
            .await
    }

    pub async fn geocode_autocomplete(
        &self,
        query: &GeocodeAutocompleteQuery,
    ) -> OrsResult<GeocodeResponse> {
        self.fetch_geocode(request::geocode_autocomplete(query)?).await
    }

    pub async fn geocode_reverse(&self, query: &GeocodeReverseQuery) -> OrsResult<GeocodeResponse> {
        self.fetch_geocode(request::geocode_reverse(query)?).await
    }

    /// The geocoder echoes its query with dotted keys; hand it back nested.
    async fn fetch_geocode(&self, request: OrsRequest) -> OrsResult<GeocodeResponse> {
        let mut value = self.fetch_value(request).await?;
        if let Some(Value::Object(flat)) = value.pointer("/geocoding/query") {
            let nested = unflatten(flat);
            value["geocoding"]["query"] = nested;
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Points of interest.
    ///
    /// Deserialize into [`crate::pois::PoisResponse`] for
    /// [`crate::pois::PoiRequest::Pois`], or into `serde_json::Value` for the
    /// `stats` and `list` requests.
    pub async fn pois<T: DeserializeOwned>(&self, query: &PoisQuery) -> OrsResult<T> {
        self.fetch(request::pois(query)?).await
    }

    /// Elevation of a point or along a line.
    ///
    /// Accepts anything convertible to [`GeometryInput`]; classify raw JSON
    /// with [`GeometryInput::classify`] first.
    pub async fn elevation(
        &self,
        geometry: impl Into<GeometryInput>,
        query: &ElevationQuery,
    ) -> OrsResult<ElevationResponse> {
        self.fetch(request::elevation(&geometry.into(), query)?).await
    }
}
