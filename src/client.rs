use crate::error::Result;
use crate::models::ClientIdentity;
use crate::transport::ReqwestTransport;
use crate::user_agent::{UserAgent, UserAgentLayer};
use http::HeaderValue;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::{Client, Url};
use std::sync::Arc;
use tower::{ServiceBuilder, ServiceExt};

pub type HttpRequest = http::Request<reqwest::Body>;
pub type HttpResponse = http::Response<Vec<u8>>;

/// Builds the process-wide client: cookie jar plus request tagger in front
/// of the `reqwest` transport.
#[derive(Debug, Clone, Default)]
pub struct ClientFactory {
    identity: Option<ClientIdentity>,
    jar: Option<Arc<Jar>>,
}

impl ClientFactory {
    pub fn new(identity: Option<ClientIdentity>) -> Self {
        Self {
            identity,
            jar: None,
        }
    }

    /// Share an existing jar instead of starting empty.
    pub fn with_cookie_jar(mut self, jar: Arc<Jar>) -> Self {
        self.jar = Some(jar);
        self
    }

    pub fn build(self) -> Result<HttpClient> {
        let jar = self.jar.unwrap_or_default();
        let client = Client::builder().cookie_provider(jar.clone()).build()?;

        let tagger = UserAgentLayer::new(self.identity.as_ref());
        match tagger.header_value() {
            Some(value) => tracing::info!("Tagging outbound requests with User-Agent {:?}", value),
            None => tracing::info!("No client identity, sending default User-Agent"),
        }

        let service = ServiceBuilder::new()
            .layer(tagger)
            .service(ReqwestTransport::new(client));

        Ok(HttpClient { service, jar })
    }
}

/// Cloneable handle on the tagged client; clones share the jar and pool.
#[derive(Debug, Clone)]
pub struct HttpClient {
    service: UserAgent<ReqwestTransport>,
    jar: Arc<Jar>,
}

impl HttpClient {
    pub async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.service.clone().oneshot(request).await
    }

    pub async fn get(&self, url: &str) -> Result<HttpResponse> {
        let request = http::Request::get(url).body(reqwest::Body::from(Vec::new()))?;
        self.send(request).await
    }

    /// The `User-Agent` every request is tagged with, if any.
    pub fn user_agent(&self) -> Option<&HeaderValue> {
        self.service.header_value()
    }

    /// The `Cookie` header the jar would send to `url`, if any.
    pub fn cookies(&self, url: &Url) -> Option<String> {
        self.jar
            .cookies(url)
            .and_then(|value| value.to_str().ok().map(str::to_string))
    }

    pub fn cookie_jar(&self) -> &Arc<Jar> {
        &self.jar
    }
}
