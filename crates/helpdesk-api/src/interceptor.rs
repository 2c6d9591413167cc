//! Request/response hooks.
//!
//! Every call made by [`HelpdeskClient`](crate::HelpdeskClient) runs through
//! an ordered chain of [`Interceptor`]s. The default chain holds a single
//! [`PassThrough`] hook, which lets requests through untouched and only
//! acknowledges `401 Unauthorized` responses in the log.

use reqwest::{Request, StatusCode};
use url::Url;

use crate::error::ApiError;

/// Hook invoked around every request.
///
/// All methods default to no-ops, so implementors override only what they
/// need.
pub trait Interceptor: Send + Sync {
    /// Called with the fully built request right before it is sent.
    /// Returning an error aborts the call with that error.
    fn on_request(&self, _request: &mut Request) -> Result<(), ApiError> {
        Ok(())
    }

    /// Called for every response received, success or not.
    fn on_response(&self, _status: StatusCode, _url: &Url) {}

    /// Called with the error about to be returned to the caller.
    fn on_error(&self, _error: &ApiError) {}
}

/// Default hook: forwards everything unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassThrough;

impl Interceptor for PassThrough {
    fn on_response(&self, status: StatusCode, url: &Url) {
        if status == StatusCode::UNAUTHORIZED {
            // No session handling exists yet; the caller sees the error.
            tracing::warn!(%url, "Unauthorized response from backend");
        }
    }
}
