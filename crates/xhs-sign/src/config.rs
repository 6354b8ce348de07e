//! Signing configuration and protocol constants.
//!
//! The web client derives every signature from a fixed set of protocol
//! constants: a hard-coded AES key/IV pair, the envelope metadata fields,
//! the capability vector embedded in the fingerprint, and the signature
//! prefix. None of these are secrets; they are wire-format constants that
//! must match the remote verifier byte for byte.
//!
//! # Example
//!
//! ```
//! use xhs_sign::SignConfig;
//!
//! let config = SignConfig::default();
//! assert!(config.validate().is_ok());
//! ```

use crate::error::{CipherError, SignError};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// AES-128-CBC key used for the fingerprint payload (16 ASCII bytes).
pub const DEFAULT_CIPHER_KEY: &str = "7cc4adla5ay0701v";

/// AES-128-CBC initialization vector (16 ASCII bytes).
pub const DEFAULT_CIPHER_IV: &str = "4uzjr7mbsibcaldp";

/// Envelope `signSvn` field.
pub const DEFAULT_SIGN_SVN: &str = "56";

/// Envelope `signType` field.
pub const DEFAULT_SIGN_TYPE: &str = "x2";

/// Envelope `appId` field.
pub const DEFAULT_APP_ID: &str = "xhs-pc-web";

/// Envelope `signVersion` field.
pub const DEFAULT_SIGN_VERSION: &str = "1";

/// Capability bit-vector carried in fingerprint field `x2`.
pub const DEFAULT_CAPABILITY_VECTOR: &str = "0|0|0|1|0|0|1|0|0|0|1|0|0|0|0|1|0|0|0";

/// Literal prepended to the base64-encoded envelope.
pub const DEFAULT_SIGNATURE_PREFIX: &str = "XYW_";

/// Request header that carries the signature.
pub const HEADER_SIGNATURE: &str = "x-s";

/// Request header that carries the timestamp echo.
pub const HEADER_TIMESTAMP: &str = "x-t";

/// Required key and IV length in bytes (AES-128 block size).
pub const CIPHER_KEY_LEN: usize = 16;

lazy_static! {
    static ref BUILTIN: SignConfig = SignConfig::default();
}

/// Signing parameters for one target API deployment.
///
/// The defaults reproduce the deployed web client. A rotated deployment
/// (new key, bumped `signSvn`) is expressed as a modified config rather
/// than a code change; `validate` catches rotations that would make the
/// cipher unusable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignConfig {
    /// AES-128-CBC key (must be 16 bytes)
    pub cipher_key: String,
    /// AES-128-CBC IV (must be 16 bytes)
    pub cipher_iv: String,
    /// Envelope `signSvn` value
    pub sign_svn: String,
    /// Envelope `signType` value
    pub sign_type: String,
    /// Envelope `appId` value
    pub app_id: String,
    /// Envelope `signVersion` value
    pub sign_version: String,
    /// Fingerprint `x2` capability vector
    pub capability_vector: String,
    /// Signature prefix literal
    pub signature_prefix: String,
}

impl Default for SignConfig {
    fn default() -> Self {
        Self {
            cipher_key: DEFAULT_CIPHER_KEY.to_string(),
            cipher_iv: DEFAULT_CIPHER_IV.to_string(),
            sign_svn: DEFAULT_SIGN_SVN.to_string(),
            sign_type: DEFAULT_SIGN_TYPE.to_string(),
            app_id: DEFAULT_APP_ID.to_string(),
            sign_version: DEFAULT_SIGN_VERSION.to_string(),
            capability_vector: DEFAULT_CAPABILITY_VECTOR.to_string(),
            signature_prefix: DEFAULT_SIGNATURE_PREFIX.to_string(),
        }
    }
}

impl SignConfig {
    /// Process-wide read-only instance of the built-in constants.
    pub fn builtin() -> &'static SignConfig {
        &BUILTIN
    }

    /// Validate that the cipher parameters are usable.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidKeyLength` or `InvalidIvLength` when
    /// the key or IV is not exactly 16 bytes.
    pub fn validate(&self) -> Result<(), SignError> {
        if self.cipher_key.len() != CIPHER_KEY_LEN {
            return Err(CipherError::InvalidKeyLength {
                expected: CIPHER_KEY_LEN,
                actual: self.cipher_key.len(),
            }
            .into());
        }

        if self.cipher_iv.len() != CIPHER_KEY_LEN {
            return Err(CipherError::InvalidIvLength {
                expected: CIPHER_KEY_LEN,
                actual: self.cipher_iv.len(),
            }
            .into());
        }

        Ok(())
    }

    /// Builder-style method to set the cipher key
    pub fn with_cipher_key(mut self, key: &str) -> Self {
        self.cipher_key = key.to_string();
        self
    }

    /// Builder-style method to set the cipher IV
    pub fn with_cipher_iv(mut self, iv: &str) -> Self {
        self.cipher_iv = iv.to_string();
        self
    }
}
