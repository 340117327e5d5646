use serde::{Deserialize, Serialize};
use talk_admin_core::{AdminError, AdminResult};
use url::Url;

use crate::session::TalkSessionId;

pub const MIN_OPINION_CHARS: usize = 5;
pub const MAX_OPINION_CHARS: usize = 140;

/// A seed opinion posted by a session owner to start the discussion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedOpinion {
    pub talk_session_id: TalkSessionId,
    pub content: String,
    pub reference_url: Option<Url>,
}

impl SeedOpinion {
    pub fn new(
        talk_session_id: TalkSessionId,
        content: String,
        reference_url: Option<String>,
    ) -> AdminResult<Self> {
        let length = content.chars().count();
        if !(MIN_OPINION_CHARS..=MAX_OPINION_CHARS).contains(&length) {
            return Err(AdminError::validation(format!(
                "opinion must be {}-{} characters (got {})",
                MIN_OPINION_CHARS, MAX_OPINION_CHARS, length
            )));
        }

        let reference_url = match reference_url.filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => Some(parse_reference_url(raw.trim())?),
            None => None,
        };

        Ok(Self {
            talk_session_id,
            content,
            reference_url,
        })
    }

    /// Multipart fields for `POST /opinions`.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("talkSessionID", self.talk_session_id.to_string()),
            ("opinionContent", self.content.clone()),
            ("isSeed", "true".to_string()),
        ];
        if let Some(url) = &self.reference_url {
            fields.push(("referenceURL", url.to_string()));
        }
        fields
    }
}

fn parse_reference_url(raw: &str) -> AdminResult<Url> {
    let url = Url::parse(raw)
        .map_err(|e| AdminError::validation(format!("invalid reference URL '{}': {}", raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(AdminError::validation(format!(
            "reference URL must use http or https (got {})",
            scheme
        ))),
    }
}

/// Error body the backend sends when it refuses an opinion.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpinionRejection {
    #[serde(default)]
    pub message: Option<String>,
}

impl OpinionRejection {
    pub fn into_error(self, status: u16) -> AdminError {
        AdminError::Api {
            status,
            message: self
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "unknown error".to_string()),
        }
    }
}
