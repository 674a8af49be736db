//! Shareable-link payloads: a reversible encoding of a palette for embedding
//! in a URL path segment.

use std::time::{SystemTime, UNIX_EPOCH};

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Color;

/// Error raised when a share segment cannot be decoded.
#[derive(Debug, Error)]
pub enum ShareDecodeError {
    /// The segment is not valid url-safe base64.
    #[error("share segment is not valid base64")]
    Encoding(#[from] base64::DecodeError),
    /// The decoded bytes are not a valid payload document.
    #[error("share segment does not contain a valid palette payload")]
    Payload(#[from] serde_json::Error),
}

/// The palette data carried by a share link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePayload {
    /// Palette display name.
    pub name: String,
    /// Ordered color sequence.
    pub colors: Vec<Color>,
    /// Creation time, milliseconds since the Unix epoch.
    pub timestamp_ms: u64,
}

impl SharePayload {
    /// Build a payload stamped with the current time.
    #[must_use]
    pub fn new(name: impl Into<String>, colors: Vec<Color>) -> Self {
        let timestamp_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .ok()
            .and_then(|elapsed| u64::try_from(elapsed.as_millis()).ok())
            .unwrap_or(0);
        Self {
            name: name.into(),
            colors,
            timestamp_ms,
        }
    }

    /// Encode the payload as a url-safe base64 segment.
    pub fn encode(&self) -> serde_json::Result<String> {
        Ok(URL_SAFE_NO_PAD.encode(serde_json::to_vec(self)?))
    }

    /// Decode a segment produced by [`SharePayload::encode`]. Inverts the
    /// encoding exactly.
    pub fn decode(segment: &str) -> Result<Self, ShareDecodeError> {
        let bytes = URL_SAFE_NO_PAD.decode(segment)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Full share URL under `origin`, e.g. `https://example.com/share/<segment>`.
    pub fn share_url(&self, origin: &str) -> serde_json::Result<String> {
        Ok(format!(
            "{}/share/{}",
            origin.trim_end_matches('/'),
            self.encode()?
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> SharePayload {
        SharePayload {
            name: "Ocean".into(),
            colors: vec!["#003366".parse().unwrap(), "#66CCFF".parse().unwrap()],
            timestamp_ms: 1_724_600_000_000,
        }
    }

    #[test]
    fn encode_decode_round_trips_exactly() {
        let original = payload();
        let segment = original.encode().unwrap();
        let decoded = SharePayload::decode(&segment).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn segment_is_url_safe() {
        let segment = payload().encode().unwrap();
        assert!(
            segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn garbage_segments_are_rejected() {
        assert!(SharePayload::decode("not base64 at all!").is_err());
        // Valid base64, invalid payload.
        let segment = URL_SAFE_NO_PAD.encode(b"{\"nope\":true}");
        assert!(SharePayload::decode(&segment).is_err());
    }

    #[test]
    fn share_url_embeds_the_segment() {
        let original = payload();
        let url = original.share_url("https://example.com/").unwrap();
        let segment = url.strip_prefix("https://example.com/share/").unwrap();
        assert_eq!(SharePayload::decode(segment).unwrap(), original);
    }
}
