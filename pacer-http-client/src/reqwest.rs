#![doc = "HttpClient implementation for [reqwest]"]
use http::{Request, Response};
use pacer_http::{BoxError, HttpClient};
use reqwest::Client;
use std::sync::Arc;
use tracing::trace;

#[derive(Clone)]
pub struct ReqwestClient {
    client: Arc<Client>,
}

impl ReqwestClient {
    pub fn new() -> ReqwestClient {
        ReqwestClientBuilder::new().build()
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Default)]
pub struct ReqwestClientBuilder {
    client: Option<Client>,
}

impl ReqwestClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    /// Use a preconfigured client, e.g. one with a request timeout.
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }
    pub fn build(self) -> ReqwestClient {
        ReqwestClient { client: Arc::new(self.client.unwrap_or_default()) }
    }
}

impl HttpClient for ReqwestClient {
    async fn send_http(
        &self,
        request: Request<Vec<u8>>,
    ) -> core::result::Result<Response<Vec<u8>>, BoxError> {
        trace!(method = %request.method(), uri = %request.uri(), "reqwest: sending");
        let response = self.client.execute(request.try_into()?).await?;
        trace!(status = %response.status(), "reqwest: received");
        let mut builder = Response::builder().status(response.status());
        for (k, v) in response.headers() {
            builder = builder.header(k, v);
        }
        builder.body(response.bytes().await?.to_vec()).map_err(Into::into)
    }
}
