//! Token assembly.
//!
//! Composes the pipeline stages into the caller-facing API: fingerprint
//! the request, encrypt the encoded fingerprint, wrap it in the
//! envelope, and echo the derivation timestamp alongside the signature.
//! The timestamp embedded in fingerprint field `x4` and the returned
//! timestamp string always come from the same clock read.
//!
//! Time is injected through the [`Clock`] trait so derivations are
//! reproducible under test; production callers use [`SystemClock`].

use crate::cipher;
use crate::config::SignConfig;
use crate::envelope::SignEnvelope;
use crate::error::SignError;
use crate::fingerprint::Fingerprint;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

/// Millisecond clock abstraction.
pub trait Clock {
    /// Current epoch milliseconds.
    fn now_ms(&self) -> i64;
}

/// Wall-clock [`Clock`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }
}

/// One derived token pair: the two header values for a signed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedToken {
    /// Signature header value (`x-s`)
    pub signature: String,
    /// Timestamp header value (`x-t`), decimal epoch milliseconds
    pub timestamp: String,
}

/// Derives request signatures from a config and a clock.
///
/// Stateless between calls; a single instance can be shared across
/// threads (`Send + Sync` whenever the clock is).
#[derive(Clone, Debug)]
pub struct Signer<C: Clock = SystemClock> {
    config: SignConfig,
    clock: C,
}

impl Signer<SystemClock> {
    /// Signer over the built-in protocol constants and the wall clock.
    pub fn new() -> Self {
        Self {
            config: SignConfig::default(),
            clock: SystemClock,
        }
    }

    /// Signer with a caller-supplied config and the wall clock.
    pub fn with_config(config: SignConfig) -> Self {
        Self {
            config,
            clock: SystemClock,
        }
    }
}

impl Default for Signer<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Signer<C> {
    /// Signer with a caller-supplied clock.
    pub fn with_clock(config: SignConfig, clock: C) -> Self {
        Self { config, clock }
    }

    /// Borrow the active config.
    pub fn config(&self) -> &SignConfig {
        &self.config
    }

    /// Sign a request at the clock's current time.
    ///
    /// # Errors
    ///
    /// Propagates cipher parameter failures from the config.
    pub fn sign(&self, path_and_query: &str, client_token: &str) -> Result<SignedToken, SignError> {
        self.sign_at(path_and_query, client_token, self.clock.now_ms())
    }

    /// Sign a request at an explicit timestamp.
    ///
    /// The deterministic core: a fixed `(path, token, timestamp)` input
    /// always yields the identical token pair.
    ///
    /// # Errors
    ///
    /// Propagates cipher parameter failures from the config.
    pub fn sign_at(
        &self,
        path_and_query: &str,
        client_token: &str,
        timestamp_ms: i64,
    ) -> Result<SignedToken, SignError> {
        let fingerprint = Fingerprint::new(&self.config, path_and_query, client_token, timestamp_ms);
        let payload = cipher::encrypt_payload(&self.config, &fingerprint.encode())?;
        let signature = SignEnvelope::new(&self.config, &payload).encode(&self.config)?;

        debug!(
            path = path_and_query,
            timestamp_ms,
            signature_len = signature.len(),
            "derived request signature"
        );

        Ok(SignedToken {
            signature,
            timestamp: timestamp_ms.to_string(),
        })
    }

    /// Decode a signature back to the fingerprint it was derived from.
    ///
    /// Inverse pipeline, for tests and for inspecting rejected requests.
    ///
    /// # Errors
    ///
    /// Returns `SignError::Encoding` or `SignError::Cipher` for any
    /// stage that fails to invert; a signature derived under a different
    /// key or prefix does not decode.
    pub fn decode(&self, signature: &str) -> Result<Fingerprint, SignError> {
        let envelope = SignEnvelope::decode(&self.config, signature)?;
        let encoded = cipher::decrypt_payload(&self.config, &envelope.payload)?;
        Fingerprint::decode(&encoded)
    }
}

/// Sign one request with the built-in constants and the wall clock.
///
/// # Errors
///
/// Propagates cipher parameter failures; the built-in config never
/// triggers them.
pub fn derive_token(path_and_query: &str, client_token: &str) -> Result<SignedToken, SignError> {
    Signer::new().sign(path_and_query, client_token)
}
