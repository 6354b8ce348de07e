//! AES-128-CBC payload cipher.
//!
//! Encrypts the base64-encoded fingerprint under the fixed protocol
//! key/IV and renders the ciphertext as lowercase hex. PKCS#7 padding
//! always adds at least one byte, so the ciphertext is a non-zero
//! multiple of the 16-byte block and the hex output a multiple of 32
//! characters. The key is a protocol constant shared by every client,
//! not a secret; the cipher exists for obfuscation parity with the
//! remote verifier.

use crate::config::{SignConfig, CIPHER_KEY_LEN};
use crate::error::{CipherError, SignError};
use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};

type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;

/// Borrow the fixed-size key and IV out of the config.
fn cipher_params(config: &SignConfig) -> Result<(&[u8; CIPHER_KEY_LEN], &[u8; CIPHER_KEY_LEN]), CipherError> {
    let key: &[u8; CIPHER_KEY_LEN] =
        config
            .cipher_key
            .as_bytes()
            .try_into()
            .map_err(|_| CipherError::InvalidKeyLength {
                expected: CIPHER_KEY_LEN,
                actual: config.cipher_key.len(),
            })?;
    let iv: &[u8; CIPHER_KEY_LEN] =
        config
            .cipher_iv
            .as_bytes()
            .try_into()
            .map_err(|_| CipherError::InvalidIvLength {
                expected: CIPHER_KEY_LEN,
                actual: config.cipher_iv.len(),
            })?;
    Ok((key, iv))
}

/// Encrypt a plaintext string, returning lowercase hex ciphertext.
///
/// # Errors
///
/// Returns `CipherError::InvalidKeyLength` / `InvalidIvLength` when the
/// config carries a key or IV that is not exactly 16 bytes.
pub fn encrypt_payload(config: &SignConfig, plaintext: &str) -> Result<String, SignError> {
    let (key, iv) = cipher_params(config)?;
    let ciphertext =
        Aes128CbcEnc::new(key.into(), iv.into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());
    Ok(hex::encode(ciphertext))
}

/// Decrypt a lowercase-hex payload back to its plaintext string.
///
/// Inverse of [`encrypt_payload`]; used when decoding a signature back
/// into its fingerprint.
///
/// # Errors
///
/// Returns `SignError::Encoding` for non-hex input or non-UTF-8
/// plaintext, and `SignError::Cipher` for a bad key/IV, a ciphertext
/// that is not a non-zero multiple of 16 bytes, or padding that does
/// not verify.
pub fn decrypt_payload(config: &SignConfig, payload_hex: &str) -> Result<String, SignError> {
    let (key, iv) = cipher_params(config)?;

    let ciphertext = hex::decode(payload_hex).map_err(|e| SignError::Encoding {
        context: "payload",
        reason: format!("hex: {e}"),
    })?;

    if ciphertext.is_empty() || ciphertext.len() % CIPHER_KEY_LEN != 0 {
        return Err(CipherError::InvalidCiphertextLength {
            actual: ciphertext.len(),
        }
        .into());
    }

    let plaintext = Aes128CbcDec::new(key.into(), iv.into())
        .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
        .map_err(|_| CipherError::InvalidPadding)?;

    String::from_utf8(plaintext).map_err(|_| SignError::Encoding {
        context: "payload",
        reason: "plaintext is not UTF-8".to_string(),
    })
}
