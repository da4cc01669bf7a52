use crate::error::{Error, Result};
use crate::types::{BoxError, Headers, APPLICATION_JSON};
use http::header::CONTENT_TYPE;
use http::{Method, Request, Response};
use serde::Serialize;
use std::future::Future;
use tracing::trace;

/// An abstract HTTP client.
#[trait_variant::make(Send)]
pub trait HttpClient {
    /// Send an HTTP request and return the response.
    fn send_http(
        &self,
        request: Request<Vec<u8>>,
    ) -> impl Future<Output = core::result::Result<Response<Vec<u8>>, BoxError>>;
}

/// Retrieval, creation and partial update requests on top of any [`HttpClient`].
///
/// Bodies are serialized as JSON. `Content-Type: application/json` is added unless
/// the given headers already carry a content type.
pub trait RequestExt: HttpClient + Sync {
    fn get(
        &self,
        url: &str,
        headers: &Headers,
    ) -> impl Future<Output = Result<Response<Vec<u8>>>> + Send {
        send(self, Method::GET, url, headers, None)
    }
    fn post<B>(
        &self,
        url: &str,
        headers: &Headers,
        body: &B,
    ) -> impl Future<Output = Result<Response<Vec<u8>>>> + Send
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(body).map_err(Error::from);
        async move { send(self, Method::POST, url, headers, Some(body?)).await }
    }
    fn patch<B>(
        &self,
        url: &str,
        headers: &Headers,
        body: &B,
    ) -> impl Future<Output = Result<Response<Vec<u8>>>> + Send
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(body).map_err(Error::from);
        async move { send(self, Method::PATCH, url, headers, Some(body?)).await }
    }
}

impl<T> RequestExt for T where T: HttpClient + Sync + ?Sized {}

async fn send<C>(
    client: &C,
    method: Method,
    url: &str,
    headers: &Headers,
    body: Option<Vec<u8>>,
) -> Result<Response<Vec<u8>>>
where
    C: HttpClient + Sync + ?Sized,
{
    trace!(%method, url, "sending request");
    let mut builder = Request::builder().method(method).uri(url);
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    if body.is_some() && !headers.keys().any(|name| name.eq_ignore_ascii_case(CONTENT_TYPE.as_str()))
    {
        builder = builder.header(CONTENT_TYPE, APPLICATION_JSON);
    }
    let response =
        client.send_http(builder.body(body.unwrap_or_default())?).await.map_err(Error::HttpClient)?;
    trace!(status = %response.status(), "received response");
    Ok(response)
}
