use crate::config::Config;
use crate::error::Result;
use crate::face_list::FaceLists;
use crate::http::HttpClient;

/// Client for interacting with the Oxford Face API
pub struct Client {
    http_client: HttpClient,
}

impl Client {
    /// Create a new client with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        let http_client = HttpClient::new(config)?;
        Ok(Self { http_client })
    }

    /// Access the face list operations
    pub fn face_lists(&self) -> FaceLists<'_> {
        FaceLists::new(&self.http_client)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Client, Config};

    #[tokio::test]
    async fn test_client_new() {
        let client = Client::new(Config {
            api_key: "test_api_key".to_string(),
            ..Default::default()
        });
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_client_new_empty_api_key() {
        let client = Client::new(Config {
            api_key: "".to_string(),
            ..Default::default()
        });
        assert!(client.is_err());
    }

    #[test]
    fn test_client_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Client>();
    }
}
