use futures::future::{BoxFuture, FutureExt};
use log::trace;
use url::Url;

use crate::error::{Error, Result};

/// The one capability the canvas client needs from the network: a GET that
/// yields the response body. The returned future must not do anything until
/// it is polled.
pub trait Transport: Send + Sync {
    fn get(&self, url: Url) -> BoxFuture<'static, Result<String>>;
}

/// Plain HTTP transport over a shared `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: Url) -> BoxFuture<'static, Result<String>> {
        let client = self.client.clone();
        async move {
            trace!("GET {}", url);
            let response = client
                .get(url.clone())
                .send()
                .await
                .map_err(|source| Error::Transport {
                    url: url.clone(),
                    source,
                })?;
            let status = response.status();
            if !status.is_success() {
                return Err(Error::Status { url, status });
            }
            response
                .text()
                .await
                .map_err(|source| Error::Transport { url, source })
        }
        .boxed()
    }
}
