//! HTTP implementation of the story service.

use std::time::Duration;

use serde::Serialize;

use super::error::ServiceError;
use super::StoryService;
use crate::config::ApiConfig;
use crate::story::{StoryFeed, StoryId, StoryItem};

/// Body of a new text story.
///
/// Media uploads need multipart form data and are not supported here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewStory {
    pub media_type: &'static str,
    pub caption: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl NewStory {
    pub fn text(caption: impl Into<String>, background_color: Option<String>) -> Self {
        Self {
            media_type: "text",
            caption: caption.into(),
            background_color,
        }
    }
}

/// Story service backed by the platform's REST API.
#[derive(Debug, Clone)]
pub struct HttpStoryService {
    agent: ureq::Agent,
    base_url: String,
    token: Option<String>,
}

impl HttpStoryService {
    pub fn new(config: &ApiConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build();
        Self {
            agent,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        }
    }

    /// Absolute URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: &str, url: &str) -> ureq::Request {
        let request = self
            .agent
            .request(method, url)
            .set("Accept", "application/json");
        match &self.token {
            Some(token) => request.set("Authorization", &format!("Bearer {}", token)),
            None => request,
        }
    }
}

impl StoryService for HttpStoryService {
    fn get_all(&self) -> Result<StoryFeed, ServiceError> {
        let url = self.url("stories/");
        let response = self
            .request("GET", &url)
            .call()
            .map_err(|e| ServiceError::from_ureq(&url, e))?;
        let body: serde_json::Value = response
            .into_json()
            .map_err(|e| ServiceError::decode(&url, e))?;
        Ok(StoryFeed::from_value(body)?)
    }

    fn view(&self, id: &StoryId) -> Result<(), ServiceError> {
        let url = self.url(&format!("stories/{}/view", id));
        self.request("POST", &url)
            .call()
            .map_err(|e| ServiceError::from_ureq(&url, e))?;
        Ok(())
    }

    fn create(&self, story: &NewStory) -> Result<StoryItem, ServiceError> {
        let url = self.url("stories/");
        let response = self
            .request("POST", &url)
            .send_json(story)
            .map_err(|e| ServiceError::from_ureq(&url, e))?;
        response
            .into_json::<StoryItem>()
            .map_err(|e| ServiceError::decode(&url, e))
    }
}
