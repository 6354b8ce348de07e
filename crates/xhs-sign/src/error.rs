//! Signing error types.

use thiserror::Error;

/// Errors surfaced by the signing pipeline.
#[derive(Debug, Error)]
pub enum SignError {
    /// An artifact could not be encoded or decoded as required
    #[error("Encoding failed in {context}: {reason}")]
    Encoding {
        /// Pipeline stage that rejected the data
        context: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// The payload cipher rejected its parameters or input
    #[error("Cipher failed: {0}")]
    Cipher(#[from] CipherError),
}

/// Errors from the AES-128-CBC payload cipher.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CipherError {
    /// Invalid key length
    #[error("Invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// Expected key length in bytes
        expected: usize,
        /// Actual key length in bytes
        actual: usize,
    },

    /// Invalid IV length
    #[error("Invalid IV length: expected {expected}, got {actual}")]
    InvalidIvLength {
        /// Expected IV length in bytes
        expected: usize,
        /// Actual IV length in bytes
        actual: usize,
    },

    /// Ciphertext length is not a whole number of cipher blocks
    #[error("Invalid ciphertext length: {actual} (must be a non-zero multiple of 16)")]
    InvalidCiphertextLength {
        /// Actual ciphertext length in bytes
        actual: usize,
    },

    /// PKCS#7 padding did not verify during decryption
    #[error("Invalid PKCS#7 padding")]
    InvalidPadding,
}
