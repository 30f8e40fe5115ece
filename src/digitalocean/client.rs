//! HTTP client for the DigitalOcean v2 API
//!
//! Implements [`Account`] on top of the public REST API using a personal
//! access token.

use super::error::{AccountError, Result};
use super::regions::group_regions_by_city;
use super::types::{
    ApiErrorResponse, CreateDropletRequest, CreateDropletResponse, ManagedServer, RegionId,
    RegionMap, RegionsResponse,
};
use super::Account;
use crate::config::types::DigitalOceanConfig;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Production API URL
pub const DIGITALOCEAN_API_URL: &str = "https://api.digitalocean.com";

/// User agent for API requests
const USER_AGENT: &str = concat!("do-create/", env!("CARGO_PKG_VERSION"));

/// Droplet parameters used for every server this client creates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropletSpec {
    /// Size slug, also used to decide which regions are available
    pub size: String,
    /// Image slug
    pub image: String,
    /// Tags attached to the droplet
    pub tags: Vec<String>,
}

impl From<&DigitalOceanConfig> for DropletSpec {
    fn from(config: &DigitalOceanConfig) -> Self {
        Self {
            size: config.droplet_size.clone(),
            image: config.image.clone(),
            tags: config.tags.clone(),
        }
    }
}

/// DigitalOcean account backed by the REST API
pub struct DigitalOceanClient {
    /// HTTP client with configured timeout and headers
    http_client: Client,
    /// Base API URL
    api_url: String,
    /// Personal access token
    token: String,
    droplet: DropletSpec,
}

impl DigitalOceanClient {
    /// Create a client against the production API
    pub fn new(token: impl Into<String>, droplet: DropletSpec) -> Result<Self> {
        Self::with_url(DIGITALOCEAN_API_URL, token, droplet)
    }

    /// Create a client with a custom API URL
    pub fn with_url(
        api_url: impl Into<String>,
        token: impl Into<String>,
        droplet: DropletSpec,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()
            .map_err(AccountError::HttpError)?;

        Ok(Self {
            http_client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
            droplet,
        })
    }

    /// Get the configured API URL
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn droplet_spec(&self) -> &DropletSpec {
        &self.droplet
    }

    /// Make an authenticated GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.api_url, path);
        log::debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Make an authenticated POST request with a JSON body
    async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let url = format!("{}{}", self.api_url, path);
        log::debug!("POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Handle the HTTP response, converting errors appropriately
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| AccountError::ParseError(e.to_string()))
        } else {
            let error_body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorResponse>(&error_body)
                .map(|e| e.message)
                .unwrap_or(error_body);
            Err(AccountError::from_status(status.as_u16(), message))
        }
    }
}

impl Account for DigitalOceanClient {
    /// Endpoint: GET /v2/regions
    async fn get_region_map(&self) -> Result<RegionMap> {
        let response: RegionsResponse = self.get("/v2/regions").await?;
        log::info!("Fetched {} DigitalOcean regions", response.regions.len());
        Ok(group_regions_by_city(&response.regions, &self.droplet.size))
    }

    /// Endpoint: POST /v2/droplets
    async fn create_server(&self, region: &RegionId, name: &str) -> Result<ManagedServer> {
        let request = CreateDropletRequest {
            name: name.to_string(),
            region: region.to_string(),
            size: self.droplet.size.clone(),
            image: self.droplet.image.clone(),
            tags: self.droplet.tags.clone(),
        };
        let response: CreateDropletResponse = self.post("/v2/droplets", &request).await?;
        log::info!(
            "Created droplet {} ({}) in {}",
            response.droplet.id,
            response.droplet.name,
            region
        );
        Ok(response.droplet.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Serve one canned HTTP response on a local port
    ///
    /// Returns the base URL and a receiver for the raw request text.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let (request_tx, request_rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            let _ = request_tx.send(request);
        });

        (url, request_rx)
    }

    /// Read headers and a `Content-Length` body
    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        let mut data = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            data.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&data);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if data.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&data).into_owned()
    }

    fn spec() -> DropletSpec {
        DropletSpec {
            size: "s-1vcpu-1gb".to_string(),
            image: "ubuntu-22-04-x64".to_string(),
            tags: vec!["outline".to_string()],
        }
    }

    #[test]
    fn test_client_construction() {
        let client = DigitalOceanClient::with_url("https://example.com/", "token", spec()).unwrap();
        assert_eq!(client.api_url(), "https://example.com");
        assert_eq!(client.droplet_spec().size, "s-1vcpu-1gb");
    }

    #[test]
    fn test_default_url() {
        let client = DigitalOceanClient::new("token", spec()).unwrap();
        assert_eq!(client.api_url(), DIGITALOCEAN_API_URL);
        assert!(DIGITALOCEAN_API_URL.starts_with("https://"));
    }

    #[test]
    fn test_user_agent() {
        assert!(USER_AGENT.starts_with("do-create/"));
    }

    #[test]
    fn test_droplet_spec_from_config() {
        let config = DigitalOceanConfig::default();
        let spec = DropletSpec::from(&config);
        assert_eq!(spec.size, config.droplet_size);
        assert_eq!(spec.tags, config.tags);
    }

    #[tokio::test]
    async fn test_unreachable_api_is_http_error() {
        // Port 9 (discard) on localhost is not expected to serve HTTP
        let client = DigitalOceanClient::with_url("http://127.0.0.1:9", "token", spec()).unwrap();
        let err = client.get_region_map().await.unwrap_err();
        assert!(matches!(err, AccountError::HttpError(_)));
    }

    #[tokio::test]
    async fn test_region_map_groups_available_regions_by_city() {
        let (url, request) = serve_once(
            "200 OK",
            r#"{"regions": [
                {"slug": "ams3", "name": "Amsterdam 3", "sizes": ["s-1vcpu-1gb"], "available": true, "features": []},
                {"slug": "sgp1", "name": "Singapore 1", "sizes": ["s-2vcpu-2gb"], "available": true, "features": []},
                {"slug": "ams2", "name": "Amsterdam 2", "sizes": ["s-1vcpu-1gb"], "available": false, "features": []}
            ]}"#,
        )
        .await;
        let client = DigitalOceanClient::with_url(url, "dop_v1_test", spec()).unwrap();

        let map = client.get_region_map().await.unwrap();
        assert_eq!(map["ams"], vec![RegionId::new("ams3")]);
        assert!(map["sgp"].is_empty());
        assert_eq!(map.len(), 2);

        let request = request.await.unwrap();
        assert!(request.starts_with("GET /v2/regions "));
        assert!(request.to_lowercase().contains("authorization: bearer dop_v1_test"));
    }

    #[tokio::test]
    async fn test_error_body_message_is_used() {
        let (url, _request) = serve_once(
            "422 Unprocessable Entity",
            r#"{"id": "unprocessable_entity", "message": "bad size"}"#,
        )
        .await;
        let client = DigitalOceanClient::with_url(url, "token", spec()).unwrap();

        let err = client
            .create_server(&RegionId::new("ams3"), "Outline Server Amsterdam")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AccountError::ApiError { status: 422, ref message } if message == "bad size"
        ));
    }

    #[tokio::test]
    async fn test_server_error_status() {
        let (url, _request) = serve_once("503 Service Unavailable", "upstream down").await;
        let client = DigitalOceanClient::with_url(url, "token", spec()).unwrap();

        let err = client.get_region_map().await.unwrap_err();
        assert!(matches!(
            err,
            AccountError::ServerError { status: 503, ref message } if message == "upstream down"
        ));
    }

    #[tokio::test]
    async fn test_unauthorized_status() {
        let (url, _request) = serve_once(
            "401 Unauthorized",
            r#"{"id": "unauthorized", "message": "Unable to authenticate you"}"#,
        )
        .await;
        let client = DigitalOceanClient::with_url(url, "expired", spec()).unwrap();

        let err = client.get_region_map().await.unwrap_err();
        assert!(matches!(err, AccountError::Unauthorized));
    }

    #[tokio::test]
    async fn test_create_server_posts_droplet() {
        let (url, request) = serve_once(
            "202 Accepted",
            r#"{"droplet": {"id": 42, "name": "Outline Server Amsterdam", "status": "new", "region": {"slug": "ams3"}}}"#,
        )
        .await;
        let client = DigitalOceanClient::with_url(url, "token", spec()).unwrap();

        let server = client
            .create_server(&RegionId::new("ams3"), "Outline Server Amsterdam")
            .await
            .unwrap();
        assert_eq!(server.id, 42);
        assert_eq!(server.region, RegionId::new("ams3"));

        let request = request.await.unwrap();
        assert!(request.starts_with("POST /v2/droplets "));
        assert!(request.contains(r#""region":"ams3""#));
        assert!(request.contains(r#""size":"s-1vcpu-1gb""#));
        assert!(request.contains(r#""tags":["outline"]"#));
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_parse_error() {
        let (url, _request) = serve_once("200 OK", r#"{"regions": "nope"}"#).await;
        let client = DigitalOceanClient::with_url(url, "token", spec()).unwrap();

        let err = client.get_region_map().await.unwrap_err();
        assert!(matches!(err, AccountError::ParseError(_)));
    }
}
