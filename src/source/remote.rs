//! Remote report source.
//!
//! Talks to the report API: one endpoint picks a random report from a set
//! of substance index pages, another returns the full record for a report
//! URL. Both are POSTs with small JSON bodies.

use crate::defaults::{DEFAULT_BASE_URL, DEFAULT_INDEX_URLS};
use crate::error::{Result, RetellError};
use crate::report::{DoseRecord, Experience};
use crate::source::ContentSource;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Remote source configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SourceConfig {
    pub base_url: String,
    /// Substance index pages the random endpoint samples from.
    pub index_urls: Vec<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            index_urls: DEFAULT_INDEX_URLS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Source that fetches reports over HTTP.
pub struct RemoteSource {
    client: reqwest::Client,
    config: SourceConfig,
}

// Wire shapes, kept private to this module.

#[derive(Serialize)]
struct RandomRequest<'a> {
    urls: &'a [String],
}

#[derive(Deserialize)]
struct RandomResponse {
    experience: RandomExperience,
}

#[derive(Deserialize)]
struct RandomExperience {
    url: String,
}

#[derive(Serialize)]
struct DetailRequest<'a> {
    url: &'a str,
}

#[derive(Deserialize)]
struct DetailResponse {
    data: DetailData,
}

#[derive(Deserialize)]
struct DetailData {
    title: String,
    author: String,
    content: String,
    #[serde(default)]
    doses: Vec<DoseRecord>,
    #[serde(default)]
    metadata: DetailMetadata,
}

#[derive(Deserialize, Default)]
struct DetailMetadata {
    age: Option<String>,
    gender: Option<String>,
}

impl RemoteSource {
    pub fn new(config: SourceConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Ask the API to pick a random report and return its URL.
    async fn random_report_url(&self) -> Result<String> {
        let url = format!(
            "{}/erowid/random/experience?size_per_substance=1",
            self.config.base_url
        );
        let response: RandomResponse = self
            .post_json(&url, &RandomRequest {
                urls: &self.config.index_urls,
            })
            .await?;
        Ok(response.experience.url)
    }

    /// Fetch the full record for a report URL.
    async fn report_details(&self, report_url: &str) -> Result<Experience> {
        let url = format!("{}/erowid/experience", self.config.base_url);
        let response: DetailResponse = self
            .post_json(&url, &DetailRequest { url: report_url })
            .await?;

        let data = response.data;
        Ok(Experience {
            title: data.title,
            author: data.author,
            age: data.metadata.age.unwrap_or_else(|| "Unknown".to_string()),
            gender: data
                .metadata
                .gender
                .unwrap_or_else(|| "Unknown".to_string()),
            content: data.content,
            doses: data.doses,
        })
    }

    async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T>
    where
        B: Serialize + Sync,
        T: for<'de> Deserialize<'de>,
    {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| RetellError::SourceFetch {
                message: format!("POST {} failed: {}", url, e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RetellError::SourceFetch {
                message: format!("POST {} returned {}", url, status),
            });
        }

        response.json().await.map_err(|e| RetellError::SourceDecode {
            message: format!("unexpected response from {}: {}", url, e),
        })
    }
}

#[async_trait]
impl ContentSource for RemoteSource {
    async fn fetch(&self, reference: Option<&str>) -> Result<Experience> {
        let report_url = match reference {
            Some(url) => url.to_string(),
            None => self.random_report_url().await?,
        };
        self.report_details(&report_url).await
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}
