//! Minimal HTTP layer over the platform's outbound client.
//!
//! On Spin hosts requests go out through `spin_sdk::http`; elsewhere
//! `send` is an inert stub so the crate links in native builds and tests.

use crate::ApiError;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// HTTP methods the storefront uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// An outbound request under construction.
pub struct Request {
    method: Method,
    url: String,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl Request {
    /// Start a GET request.
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    /// Start a POST request.
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Add a header.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Set a JSON body and content type.
    pub fn json<T: Serialize>(mut self, value: &T) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_vec(value)?);
        Ok(self.header("content-type", "application/json"))
    }

    /// Send the request and return the response.
    #[cfg(target_arch = "wasm32")]
    pub fn send(self) -> Result<Response, ApiError> {
        use spin_sdk::http::{Method as SpinMethod, Request as SpinRequest};

        let method = match self.method {
            Method::Get => SpinMethod::Get,
            Method::Post => SpinMethod::Post,
        };

        let mut builder = SpinRequest::builder();
        builder.method(method).uri(&self.url);
        for (key, value) in &self.headers {
            builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = self.body {
            builder.body(body);
        }
        let request = builder.build();

        let response: spin_sdk::http::Response =
            spin_sdk::http::run(spin_sdk::http::send(request))
                .map_err(|e| ApiError::RequestError(e.to_string()))?;

        let status = *response.status();
        let body = response.into_body();
        Ok(Response { status, body })
    }

    /// Send the request (non-WASM stub for development and tests).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn send(self) -> Result<Response, ApiError> {
        Ok(Response {
            status: 200,
            body: Vec::new(),
        })
    }
}

/// A received response.
pub struct Response {
    status: u16,
    body: Vec<u8>,
}

impl Response {
    /// The HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx response into an error carrying the body text.
    pub fn error_for_status(self) -> Result<Self, ApiError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ApiError::HttpError {
                status: self.status,
                message: self.text(),
            })
        }
    }

    /// The body as (lossy) text.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Deserialize the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_slice(&self.body).map_err(|e| ApiError::ParseError(e.to_string()))
    }
}
