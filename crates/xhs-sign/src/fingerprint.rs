//! Environment fingerprint assembly.
//!
//! The first pipeline stage renders request metadata into a fixed
//! four-field descriptor, then base64-encodes it for the cipher stage.
//! The descriptor is four `key=value` fields, each semicolon-terminated:
//!
//! ```text
//! x1=<md5 hex of "url=" + path>;x2=<capability vector>;x3=<client token>;x4=<epoch ms>;
//! ```
//!
//! `x1` is an opaque protocol checksum, not a security measure. `x3` is
//! the caller's `a1` cookie value, passed through verbatim.

use crate::config::SignConfig;
use crate::error::SignError;
use base64::{prelude::BASE64_STANDARD, Engine};
use md5::{Digest, Md5};
use std::fmt;

/// Lowercase 32-char MD5 hex of `url=<path_and_query>`.
pub fn url_checksum(path_and_query: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(b"url=");
    hasher.update(path_and_query.as_bytes());
    hex::encode(hasher.finalize())
}

/// One request's environment fingerprint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fingerprint {
    /// `x1`: checksum of the request path and query
    pub url_digest: String,
    /// `x2`: capability bit-vector
    pub capabilities: String,
    /// `x3`: client token (`a1` cookie value)
    pub client_token: String,
    /// `x4`: derivation timestamp in epoch milliseconds
    pub timestamp_ms: i64,
}

impl Fingerprint {
    /// Build the fingerprint for one request.
    pub fn new(
        config: &SignConfig,
        path_and_query: &str,
        client_token: &str,
        timestamp_ms: i64,
    ) -> Self {
        Self {
            url_digest: url_checksum(path_and_query),
            capabilities: config.capability_vector.clone(),
            client_token: client_token.to_string(),
            timestamp_ms,
        }
    }

    /// Render the exact wire descriptor.
    pub fn to_descriptor(&self) -> String {
        format!(
            "x1={};x2={};x3={};x4={};",
            self.url_digest, self.capabilities, self.client_token, self.timestamp_ms
        )
    }

    /// Base64 of the descriptor, the cipher-stage plaintext.
    pub fn encode(&self) -> String {
        BASE64_STANDARD.encode(self.to_descriptor())
    }

    /// Parse a descriptor back into its fields.
    ///
    /// Strict: all four fields must appear in order, each terminated by
    /// `;`, with nothing after `x4`.
    ///
    /// # Errors
    ///
    /// Returns `SignError::Encoding` when a field is missing,
    /// unterminated, or `x4` is not a decimal timestamp.
    pub fn parse(descriptor: &str) -> Result<Self, SignError> {
        let mut fields = [""; 4];
        let mut rest = descriptor;

        for (slot, key) in fields.iter_mut().zip(["x1=", "x2=", "x3=", "x4="]) {
            let after = rest.strip_prefix(key).ok_or_else(|| SignError::Encoding {
                context: "fingerprint",
                reason: format!("missing field {}", &key[..2]),
            })?;
            let (value, tail) = after.split_once(';').ok_or_else(|| SignError::Encoding {
                context: "fingerprint",
                reason: format!("unterminated field {}", &key[..2]),
            })?;
            *slot = value;
            rest = tail;
        }

        if !rest.is_empty() {
            return Err(SignError::Encoding {
                context: "fingerprint",
                reason: "trailing data after x4".to_string(),
            });
        }

        let timestamp_ms = fields[3].parse::<i64>().map_err(|e| SignError::Encoding {
            context: "fingerprint",
            reason: format!("bad x4 timestamp: {e}"),
        })?;

        Ok(Self {
            url_digest: fields[0].to_string(),
            capabilities: fields[1].to_string(),
            client_token: fields[2].to_string(),
            timestamp_ms,
        })
    }

    /// Base64-decode and parse an encoded fingerprint.
    ///
    /// # Errors
    ///
    /// Returns `SignError::Encoding` on invalid base64, non-UTF-8
    /// content, or a descriptor that fails [`Fingerprint::parse`].
    pub fn decode(encoded: &str) -> Result<Self, SignError> {
        let bytes = BASE64_STANDARD
            .decode(encoded)
            .map_err(|e| SignError::Encoding {
                context: "fingerprint",
                reason: format!("base64: {e}"),
            })?;
        let descriptor = String::from_utf8(bytes).map_err(|_| SignError::Encoding {
            context: "fingerprint",
            reason: "descriptor is not UTF-8".to_string(),
        })?;
        Self::parse(&descriptor)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_descriptor())
    }
}
