use crate::library::domain::{Claims, Credential};
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use std::fmt::Write;
use thiserror::Error;

/// Standard alphabet, padding optional, trailing bits tolerated
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Why a token could not be turned into a credential
///
/// Always recoverable: callers treat every variant as "no credential".
#[derive(Debug, Error)]
pub enum TokenDecodeError {
    #[error("token has {0} segment(s), expected 3")]
    SegmentCount(usize),

    #[error("token payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("token payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("token payload is not a valid claims object: {0}")]
    Json(#[from] serde_json::Error),
}

/// TokenDecoder reads the claims out of a bearer token without verifying it
///
/// The payload is the middle of three dot-separated segments, URL-safe
/// base64 over a UTF-8 JSON object. Decoding mirrors what a browser does
/// with `atob` + `decodeURIComponent`: every decoded byte is re-encoded as
/// `%XX` and the result percent-decoded, so multi-byte characters in the
/// claims come back intact.
pub struct TokenDecoder;

impl TokenDecoder {
    pub fn decode(raw_token: &str) -> Result<Credential, TokenDecodeError> {
        let claims = Self::decode_claims(raw_token)?;
        Ok(Credential::new(raw_token, claims))
    }

    pub fn decode_claims(raw_token: &str) -> Result<Claims, TokenDecodeError> {
        let segments: Vec<&str> = raw_token.trim().split('.').collect();
        if segments.len() != 3 {
            return Err(TokenDecodeError::SegmentCount(segments.len()));
        }

        let standard: String = segments[1]
            .chars()
            .map(|c| match c {
                '-' => '+',
                '_' => '/',
                other => other,
            })
            .collect();
        let bytes = PAYLOAD_ENGINE.decode(standard.as_bytes())?;

        let mut percent_encoded = String::with_capacity(bytes.len() * 3);
        for byte in &bytes {
            // Writing to a String cannot fail
            let _ = write!(percent_encoded, "%{:02x}", byte);
        }
        let json = urlencoding::decode(&percent_encoded)?;

        Ok(serde_json::from_str(&json)?)
    }
}
