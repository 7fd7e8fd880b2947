use crate::error::Error;
use reqwest::Client;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tower::Service;

pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;

/// Last link of the chain: sends the request with the shared `reqwest`
/// client and buffers the response body.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl<B> Service<http::Request<B>> for ReqwestTransport
where
    B: Into<reqwest::Body>,
{
    type Response = http::Response<Vec<u8>>;
    type Error = Error;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: http::Request<B>) -> Self::Future {
        let client = self.client.clone();
        let request = reqwest::Request::try_from(request);

        Box::pin(async move {
            let request = request?;
            let method = request.method().clone();
            let url = request.url().clone();

            let response = client.execute(request).await?;
            tracing::debug!("{} {} -> {}", method, url, response.status());

            let status = response.status();
            let version = response.version();
            let headers = response.headers().clone();
            let body = response.bytes().await?.to_vec();

            let mut builder = http::Response::builder().status(status).version(version);
            if let Some(map) = builder.headers_mut() {
                *map = headers;
            }
            Ok::<_, Error>(builder.body(body)?)
        })
    }
}
