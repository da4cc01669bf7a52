use crate::traits::HttpClient;
use crate::types::BoxError;
use http::{Request, Response};
use pacer_common::Paced;

/// An [`HttpClient`] whose requests all pass through one [`Gate`](pacer_common::Gate).
///
/// Built with [`PacedClient::new`], [`PacedClient::with_config`] or
/// [`PacedClient::with_gate`] to share a timer between several clients.
pub type PacedClient<T> = Paced<T>;

impl<T> HttpClient for Paced<T>
where
    T: HttpClient + Sync,
{
    async fn send_http(
        &self,
        request: Request<Vec<u8>>,
    ) -> core::result::Result<Response<Vec<u8>>, BoxError> {
        self.execute(|inner| inner.send_http(request)).await
    }
}
