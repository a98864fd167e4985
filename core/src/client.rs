//! Stateless HTTP request builder and response parser for the `/foods`
//! resource.
//!
//! # Design
//! `FoodClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method producing an `HttpRequest` and a `parse_*` method
//! consuming an `HttpResponse`; whoever owns the `Transport` runs the
//! round-trip in between.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateFood, Food, FoodPatch};

/// Synchronous, stateless client for the food API.
#[derive(Debug, Clone)]
pub struct FoodClient {
    base_url: String,
}

impl FoodClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_foods(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/foods", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// `POST /foods` with the form payload and `available: true`.
    pub fn build_create_food(&self, input: &FoodPatch) -> Result<HttpRequest, ApiError> {
        let body = json_body(&CreateFood::from(input.clone()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/foods", self.base_url),
            headers: json_headers(),
            body: Some(body),
        })
    }

    /// `PUT /foods/{id}` carrying the whole record.
    pub fn build_update_food(&self, id: u64, food: &Food) -> Result<HttpRequest, ApiError> {
        let body = json_body(food)?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/foods/{id}", self.base_url),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_delete_food(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/foods/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_foods(&self, response: HttpResponse) -> Result<Vec<Food>, ApiError> {
        check_status(&response)?;
        parse_body(&response)
    }

    pub fn parse_create_food(&self, response: HttpResponse) -> Result<Food, ApiError> {
        check_status(&response)?;
        parse_body(&response)
    }

    pub fn parse_update_food(&self, response: HttpResponse) -> Result<Food, ApiError> {
        check_status(&response)?;
        parse_body(&response)
    }

    /// The delete response body is unspecified; only the status is checked.
    pub fn parse_delete_food(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn json_body<T: serde::Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::Serialization(e.to_string()))
}

fn parse_body<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
