//! Outbound request tagger.
//!
//! [`UserAgentLayer`] wraps any `tower::Service<http::Request<B>>` and stamps
//! every request with the `User-Agent` derived from the [`ClientIdentity`].
//! Method, URI, body and every other header pass through untouched, as does
//! whatever the inner service returns.

use crate::models::ClientIdentity;
use http::header::{HeaderValue, USER_AGENT};
use http::Request;
use std::task::{Context, Poll};
use tower::{Layer, Service};

#[derive(Debug, Clone, Default)]
pub struct UserAgentLayer {
    value: Option<HeaderValue>,
}

impl UserAgentLayer {
    /// With `None`, or an identity whose string is not a legal header value,
    /// the layer forwards requests unmodified.
    pub fn new(identity: Option<&ClientIdentity>) -> Self {
        let value = identity.and_then(|identity| {
            let user_agent = identity.user_agent();
            match HeaderValue::from_bytes(user_agent.as_bytes()) {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!("Not tagging requests, bad User-Agent {:?}: {}", user_agent, e);
                    None
                }
            }
        });

        Self { value }
    }

    pub fn header_value(&self) -> Option<&HeaderValue> {
        self.value.as_ref()
    }
}

impl<S> Layer<S> for UserAgentLayer {
    type Service = UserAgent<S>;

    fn layer(&self, inner: S) -> Self::Service {
        UserAgent {
            inner,
            value: self.value.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserAgent<S> {
    inner: S,
    value: Option<HeaderValue>,
}

impl<S> UserAgent<S> {
    pub fn header_value(&self) -> Option<&HeaderValue> {
        self.value.as_ref()
    }
}

impl<S, B> Service<Request<B>> for UserAgent<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<B>) -> Self::Future {
        if let Some(value) = &self.value {
            // insert drops every existing value for the (case-insensitive) name
            request.headers_mut().insert(USER_AGENT, value.clone());
        }
        self.inner.call(request)
    }
}
