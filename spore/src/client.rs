use crate::endpoint::{ApiEndpoint, Endpoint};
use crate::error::{Error, Result};
use log::{debug, error};
use reqwest::Client as Http;
use std::future::Future;
use url::Url;

/// Fetches the body of a GET request as text. Non-2xx responses are errors.
pub trait Transport {
    fn get_text(&self, url: &Url) -> impl Future<Output = Result<String>> + Send;
}

impl Transport for Http {
    async fn get_text(&self, url: &Url) -> Result<String> {
        let r = self.get(url.clone()).send().await?;
        let st = r.status();
        if st.is_success() {
            debug!("{} from {}", st, r.url());
            Ok(r.text().await?)
        } else {
            error!("{} from {}", st, r.url());
            Err(Error::Http(st.as_u16(), r.text().await?))
        }
    }
}

#[derive(Debug, Clone)]
pub struct Client<T: Transport = Http> {
    transport: T,
    pub(crate) api: ApiEndpoint,
}

pub type HttpClient = Client<Http>;

impl<T: Transport> Client<T> {
    pub fn with_transport(transport: T, api: ApiEndpoint) -> Self {
        Self { transport, api }
    }

    pub fn api(&self) -> &ApiEndpoint {
        &self.api
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub(crate) async fn fetch(&self, endpoint: &Endpoint<'_>) -> Result<String> {
        let url = self.api.url(endpoint);
        debug!("GET {url}");
        self.transport.get_text(&url).await
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::with_transport(Http::new(), ApiEndpoint::new())
    }
}

impl HttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base(base: &str) -> Result<Self> {
        Ok(Self::with_transport(Http::new(), ApiEndpoint::with_base(base)?))
    }
}
