use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use crate::SitemapError;
use serde::{Deserialize, Serialize};

/// Pagination state carried between enumeration calls
///
/// Encoded as URL-safe base64 over compact JSON. Tokens are opaque to
/// callers; anything that does not decode back into this exact structure is
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Cursor {
    pub offset: u64,

    #[serde(rename = "sitemapUrl", default, skip_serializing_if = "Option::is_none")]
    pub sitemap_url: Option<String>,
}

impl Cursor {
    pub fn at(offset: u64) -> Self {
        Self {
            offset,
            sitemap_url: None,
        }
    }

    /// Encodes this cursor into an opaque URL-safe token
    pub fn encode(&self) -> crate::Result<String> {
        let json = serde_json::to_vec(self)
            .map_err(|e| SitemapError::Internal(format!("Failed to encode cursor: {}", e)))?;
        Ok(URL_SAFE_NO_PAD.encode(json))
    }

    /// Decodes a token produced by [`Cursor::encode`]
    ///
    /// Returns `None` for any token that is not a well-formed cursor.
    pub fn decode(token: &str) -> Option<Self> {
        let bytes = URL_SAFE_NO_PAD.decode(token.trim()).ok()?;
        serde_json::from_slice(&bytes).ok()
    }
}
