#![doc = "HttpClient implementation for [isahc]"]
use http::{Request, Response};
use isahc::{AsyncReadResponseExt, HttpClient as Client};
use pacer_http::{BoxError, HttpClient};
use std::sync::Arc;
use tracing::trace;

#[derive(Clone)]
pub struct IsahcClient {
    client: Arc<Client>,
}

impl IsahcClient {
    pub fn new() -> Result<Self, isahc::Error> {
        IsahcClientBuilder::new().build()
    }
}

#[derive(Default)]
pub struct IsahcClientBuilder {
    client: Option<Client>,
}

impl IsahcClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }
    pub fn build(self) -> Result<IsahcClient, isahc::Error> {
        let client = match self.client {
            Some(client) => client,
            None => Client::new()?,
        };
        Ok(IsahcClient { client: Arc::new(client) })
    }
}

impl HttpClient for IsahcClient {
    async fn send_http(
        &self,
        request: Request<Vec<u8>>,
    ) -> core::result::Result<Response<Vec<u8>>, BoxError> {
        trace!(method = %request.method(), uri = %request.uri(), "isahc: sending");
        let mut response = self.client.send_async(request).await?;
        trace!(status = %response.status(), "isahc: received");
        let mut builder = Response::builder().status(response.status());
        for (k, v) in response.headers() {
            builder = builder.header(k, v);
        }
        builder.body(response.bytes().await?.to_vec()).map_err(Into::into)
    }
}
