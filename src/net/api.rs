//! Fetch helpers for the core builder and client admin endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning [`ApiError::Unsupported`] so the pure
//! modules and their tests compile without a browser.
//!
//! ERROR HANDLING
//! ==============
//! No retries, timeouts or backoff. Transport failures and undecodable bodies
//! surface as [`ApiError`]; the only status with its own meaning is the
//! parser's HTTP 500, which becomes a user-facing message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{BuilderRequest, ParserResponse, PatchOutcome, PatchRoute};
use crate::config::ClientConfig;

pub const FORM_HTML_ROUTE: &str = "/core/api/form_html";
pub const RESULT_BLOCKS_HTML_ROUTE: &str = "/core/api/result_blocks_html";
pub const PARSER_ROUTE: &str = "/core/api/parser";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("response decode failed: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unsupported,
}

#[cfg(any(test, feature = "hydrate"))]
fn parser_unavailable(status: u16) -> bool {
    status == 500
}

#[cfg(feature = "hydrate")]
fn state_changing(builder: gloo_net::http::RequestBuilder, config: &ClientConfig) -> gloo_net::http::RequestBuilder {
    let builder = builder
        .mode(web_sys::RequestMode::SameOrigin)
        .credentials(web_sys::RequestCredentials::SameOrigin);
    match super::csrf::read_token(&config.csrf_cookie) {
        Some(token) => builder.header(&config.csrf_header, &token),
        None => {
            log::warn!("csrf cookie `{}` is not set", config.csrf_cookie);
            builder
        }
    }
}

/// Fetch rendered form markup via `GET /core/api/form_html?form_id=<id>`.
///
/// # Errors
///
/// Returns [`ApiError::Request`] when the request or body read fails.
pub async fn fetch_form_html(form_id: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(FORM_HTML_ROUTE)
            .query([("form_id", form_id)])
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        resp.text().await.map_err(|e| ApiError::Request(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form_id;
        Err(ApiError::Unsupported)
    }
}

/// Build result blocks via `POST /core/api/result_blocks_html`.
///
/// # Errors
///
/// Returns [`ApiError::Request`] when the request or body read fails, and
/// [`ApiError::Decode`] when the payload cannot be serialized.
pub async fn fetch_result_blocks_html(request: &BuilderRequest, config: &ClientConfig) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = state_changing(gloo_net::http::Request::post(RESULT_BLOCKS_HTML_ROUTE), config)
            .json(request)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        resp.text().await.map_err(|e| ApiError::Request(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (request, config);
        Err(ApiError::Unsupported)
    }
}

/// Look up the form data behind an 8-character link code via `GET /core/api/parser`.
///
/// # Errors
///
/// Returns [`ApiError::Request`] on transport failure and [`ApiError::Decode`]
/// when a non-500 body is not a parser response.
pub async fn fetch_parser_data(utm_hashcode: &str) -> Result<ParserResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(PARSER_ROUTE)
            .query([("utm_hashcode", utm_hashcode)])
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if parser_unavailable(resp.status()) {
            return Ok(ParserResponse::unavailable());
        }
        resp.json::<ParserResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = utm_hashcode;
        Err(ApiError::Unsupported)
    }
}

/// PATCH one client admin entity and return the status with the decoded body.
///
/// # Errors
///
/// Returns [`ApiError::Request`] on transport failure and [`ApiError::Decode`]
/// when the payload cannot be serialized or the body is not JSON.
pub async fn patch_client_admin(
    payload: &serde_json::Map<String, serde_json::Value>,
    entity_id: &str,
    route: PatchRoute,
    config: &ClientConfig,
) -> Result<PatchOutcome, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = route.endpoint(entity_id);
        let resp = state_changing(gloo_net::http::Request::patch(&url), config)
            .json(payload)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let status_code = resp.status();
        let data = resp
            .json::<serde_json::Value>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(PatchOutcome { status_code, data })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (payload, entity_id, route, config);
        Err(ApiError::Unsupported)
    }
}
