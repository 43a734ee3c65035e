use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::FinderError;

pub struct JsonFetcher {
    client: Client,
}

impl JsonFetcher {
    pub fn new(timeout: Option<Duration>) -> Result<Self, FinderError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("recipe-finder/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }

    /// GET `url` with `query` parameters and decode the JSON body.
    ///
    /// Any non-2xx status is an error; the body is not inspected in that case.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, FinderError> {
        debug!("GET {}", url);
        let response = self.client.get(url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FinderError::StatusError {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
