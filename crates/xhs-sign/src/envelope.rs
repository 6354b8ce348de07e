//! Signature envelope.
//!
//! The hex ciphertext travels inside a fixed JSON object that is
//! base64-encoded and prefixed to form the final signature. The remote
//! verifier compares bytes, so the JSON rendering must be compact, with
//! keys in template order:
//!
//! ```text
//! {"signSvn":"56","signType":"x2","appId":"xhs-pc-web","signVersion":"1","payload":"<hex>"}
//! ```
//!
//! serde preserves field declaration order, which pins the template
//! without a hand-built formatter.

use crate::config::SignConfig;
use crate::error::SignError;
use base64::{prelude::BASE64_STANDARD, Engine};
use serde::{Deserialize, Serialize};

/// The fixed JSON envelope wrapping one encrypted payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignEnvelope {
    /// Scheme revision (`signSvn`)
    pub sign_svn: String,
    /// Scheme variant tag (`signType`)
    pub sign_type: String,
    /// Client application identifier (`appId`)
    pub app_id: String,
    /// Envelope format version (`signVersion`)
    pub sign_version: String,
    /// Lowercase hex ciphertext
    pub payload: String,
}

impl SignEnvelope {
    /// Wrap an encrypted payload in the constant metadata fields.
    pub fn new(config: &SignConfig, payload_hex: &str) -> Self {
        Self {
            sign_svn: config.sign_svn.clone(),
            sign_type: config.sign_type.clone(),
            app_id: config.app_id.clone(),
            sign_version: config.sign_version.clone(),
            payload: payload_hex.to_string(),
        }
    }

    /// Compact JSON rendering, byte-identical to the wire template.
    ///
    /// # Errors
    ///
    /// Returns `SignError::Encoding` if serialization fails.
    pub fn to_json(&self) -> Result<String, SignError> {
        serde_json::to_string(self).map_err(|e| SignError::Encoding {
            context: "envelope",
            reason: e.to_string(),
        })
    }

    /// Final signature: the configured prefix plus the base64 of the
    /// JSON rendering.
    ///
    /// # Errors
    ///
    /// Returns `SignError::Encoding` if serialization fails.
    pub fn encode(&self, config: &SignConfig) -> Result<String, SignError> {
        Ok(format!(
            "{}{}",
            config.signature_prefix,
            BASE64_STANDARD.encode(self.to_json()?)
        ))
    }

    /// Parse a full signature string back into an envelope.
    ///
    /// # Errors
    ///
    /// Returns `SignError::Encoding` when the prefix is missing, the
    /// base64 does not decode, or the JSON does not match the template
    /// fields.
    pub fn decode(config: &SignConfig, signature: &str) -> Result<Self, SignError> {
        let encoded = signature
            .strip_prefix(&config.signature_prefix)
            .ok_or_else(|| SignError::Encoding {
                context: "signature",
                reason: format!("missing {} prefix", config.signature_prefix),
            })?;

        let bytes = BASE64_STANDARD
            .decode(encoded)
            .map_err(|e| SignError::Encoding {
                context: "signature",
                reason: format!("base64: {e}"),
            })?;

        serde_json::from_slice(&bytes).map_err(|e| SignError::Encoding {
            context: "envelope",
            reason: e.to_string(),
        })
    }
}
