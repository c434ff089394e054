//! Pinterest v5 pin-creation client and wire types.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::manifest::UploadItem;
use crate::media::EncodedImage;

/// Fallback destination URL for pins whose manifest row left the link empty.
pub const DEFAULT_LINK: &str = "https://www.loveofsalt.com";

/// The base64 media payload of a pin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaSource {
    pub source_type: &'static str,
    pub data: String,
    pub content_type: &'static str,
}

/// Request body for `POST /v5/pins`. Empty optional fields are omitted from
/// the JSON entirely, matching the API's omitempty semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PinRequest {
    pub board_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub board_section_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub link: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub alt_text: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub note: String,
    pub media_source: MediaSource,
}

impl PinRequest {
    /// Build the wire entity for one upload item. An empty link is replaced
    /// with [`DEFAULT_LINK`]; a non-empty link passes through unchanged.
    pub fn from_item(board_id: &str, item: &UploadItem, image: EncodedImage) -> Self {
        let link = if item.link.is_empty() {
            DEFAULT_LINK.to_string()
        } else {
            item.link.clone()
        };

        Self {
            board_id: board_id.to_string(),
            board_section_id: item.section_id.clone(),
            title: item.title.clone(),
            description: item.description.clone(),
            link,
            alt_text: item.alt_text.clone(),
            note: item.note.clone(),
            media_source: MediaSource {
                source_type: "image_base64",
                data: image.data,
                content_type: image.content_type,
            },
        }
    }
}

/// The pin-creation seam. The orchestrator only sees this trait, so tests
/// can drive a whole batch against a recording stub.
#[async_trait]
pub trait PinApi: Send + Sync {
    async fn create_pin(&self, request: &PinRequest) -> Result<()>;
}

/// Real client for the pins endpoint. One instance per run, carrying the
/// access token obtained at startup.
pub struct PinterestClient {
    client: Client,
    api_base: String,
    access_token: String,
}

impl PinterestClient {
    pub fn new(
        client: Client,
        api_base: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_base: api_base.into(),
            access_token: access_token.into(),
        }
    }
}

#[async_trait]
impl PinApi for PinterestClient {
    async fn create_pin(&self, request: &PinRequest) -> Result<()> {
        let resp = self
            .client
            .post(format!("{}/v5/pins", self.api_base))
            .bearer_auth(&self.access_token)
            .json(request)
            .send()
            .await
            .map_err(Error::PinTransport)?;

        let status = resp.status();
        if status != reqwest::StatusCode::CREATED {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::PinApi {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
