//! # xhs-sign - Deterministic Request-Signature Derivation
//!
//! Derives the `x-s` / `x-t` header pair that must accompany requests
//! to the Xiaohongshu web API, byte-for-byte compatible with the
//! browser client's undocumented signing scheme.
//!
//! ## Components
//!
//! | Module | Role |
//! |--------|------|
//! | `config` | Protocol constants and rotation-friendly `SignConfig` |
//! | `fingerprint` | Four-field environment descriptor (`x1`..`x4`) |
//! | `cipher` | AES-128-CBC payload encryption, lowercase hex |
//! | `envelope` | Fixed JSON envelope, base64, `XYW_` prefix |
//! | `token` | Clock injection and pipeline orchestration |
//! | `ident` | Base-36 visitor / trace identifier helpers |
//!
//! ## Pipeline
//!
//! descriptor, then base64, then AES-128-CBC with PKCS#7 padding, then
//! lowercase hex, then the JSON envelope, then base64 under the `XYW_`
//! prefix. The derivation timestamp is echoed as the second header
//! value, so both header values come from one clock read.
//!
//! ## Example
//!
//! ```
//! use xhs_sign::derive_token;
//!
//! let token = derive_token("/api/sns/web/v1/feed", "a1demo")?;
//! assert!(token.signature.starts_with("XYW_"));
//! # Ok::<(), xhs_sign::SignError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cipher;
pub mod config;
pub mod envelope;
pub mod error;
pub mod fingerprint;
pub mod ident;
pub mod token;

// Re-exports
pub use config::{SignConfig, HEADER_SIGNATURE, HEADER_TIMESTAMP};
pub use envelope::SignEnvelope;
pub use error::{CipherError, SignError};
pub use fingerprint::{url_checksum, Fingerprint};
pub use token::{derive_token, Clock, SignedToken, Signer, SystemClock};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
