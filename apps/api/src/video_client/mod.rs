//! Video Client: YouTube Data API v3 `search` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::Config;
use crate::errors::UpstreamError;

/// A single video hit: just enough to build a watch link.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoHit {
    pub video_id: String,
    pub title: String,
}

#[async_trait]
pub trait VideoSearch: Send + Sync {
    /// Returns up to `max_results` videos for `term`, ordered by relevance.
    async fn search_videos(&self, term: &str, max_results: u32)
        -> Result<Vec<VideoHit>, UpstreamError>;
}

#[derive(Debug, Deserialize)]
struct SearchListResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: ItemId,
    snippet: ItemSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemId {
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ItemSnippet {
    #[serde(default)]
    title: String,
}

impl SearchListResponse {
    /// Drops channel/playlist hits that carry no video id.
    fn into_hits(self) -> Vec<VideoHit> {
        self.items
            .into_iter()
            .filter_map(|item| {
                item.id.video_id.map(|video_id| VideoHit {
                    video_id,
                    title: item.snippet.title,
                })
            })
            .collect()
    }
}

#[derive(Clone)]
pub struct YoutubeClient {
    client: Client,
    api_key: String,
    url: String,
}

impl YoutubeClient {
    pub fn new(config: &Config) -> Result<Self, UpstreamError> {
        Ok(Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.video_timeout_secs))
                .build()?,
            api_key: config.youtube_api_key.clone(),
            url: config.youtube_api_url.clone(),
        })
    }
}

#[async_trait]
impl VideoSearch for YoutubeClient {
    async fn search_videos(
        &self,
        term: &str,
        max_results: u32,
    ) -> Result<Vec<VideoHit>, UpstreamError> {
        debug!("youtube search: {term}");
        let max_results = max_results.to_string();
        let response = self
            .client
            .get(&self.url)
            .query(&[
                ("part", "snippet"),
                ("q", term),
                ("type", "video"),
                ("maxResults", max_results.as_str()),
                ("order", "relevance"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(UpstreamError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: SearchListResponse = serde_json::from_str(&body)?;
        Ok(parsed.into_hits())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_hits_skips_items_without_video_id() {
        let json = r#"{
            "items": [
                {"id": {"kind": "youtube#video", "videoId": "abc123"}, "snippet": {"title": "Rust in 100 seconds"}},
                {"id": {"kind": "youtube#channel", "channelId": "chan"}, "snippet": {"title": "A channel"}}
            ]
        }"#;
        let parsed: SearchListResponse = serde_json::from_str(json).unwrap();
        let hits = parsed.into_hits();
        assert_eq!(
            hits,
            vec![VideoHit {
                video_id: "abc123".to_string(),
                title: "Rust in 100 seconds".to_string()
            }]
        );
    }

    #[test]
    fn test_missing_items_is_empty() {
        let parsed: SearchListResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.into_hits().is_empty());
    }
}
