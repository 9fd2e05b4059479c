//! JWT inspection
//!
//! Decodes the header and payload segments of a JSON Web Token for
//! display. The signature is never verified; this is a client-side
//! inspector, not an authenticator.

use crate::error::InspectError;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
pub struct DecodedJwt {
    pub header: Value,
    pub payload: Value,
    /// "alg" from the header, when present
    pub algorithm: Option<String>,
    /// "exp" claim as a Unix timestamp
    pub expires_at: Option<i64>,
    /// "iat" claim as a Unix timestamp
    pub issued_at: Option<i64>,
}

impl DecodedJwt {
    pub fn header_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.header).unwrap_or_default()
    }

    pub fn payload_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.payload).unwrap_or_default()
    }

    /// Whether the token is expired at the given Unix time
    pub fn expired_at(&self, now: i64) -> Option<bool> {
        self.expires_at.map(|exp| exp <= now)
    }
}

pub fn decode_jwt(token: &str) -> Result<DecodedJwt, InspectError> {
    let mut segments = token.trim().split('.');
    let (header_b64, payload_b64) = match (segments.next(), segments.next()) {
        (Some(h), Some(p)) => (h, p),
        _ => return Err(InspectError::Jwt("Expected header.payload.signature".into())),
    };
    // Signature segment is allowed to be absent (unsecured JWT) but a
    // fourth segment is not.
    if segments.nth(1).is_some() {
        return Err(InspectError::Jwt("Too many segments".into()));
    }

    let header = decode_segment(header_b64, "header")?;
    let payload = decode_segment(payload_b64, "payload")?;

    let algorithm = header
        .get("alg")
        .and_then(Value::as_str)
        .map(str::to_string);
    let expires_at = payload.get("exp").and_then(Value::as_i64);
    let issued_at = payload.get("iat").and_then(Value::as_i64);

    Ok(DecodedJwt {
        header,
        payload,
        algorithm,
        expires_at,
        issued_at,
    })
}

fn decode_segment(segment: &str, which: &str) -> Result<Value, InspectError> {
    // RFC 7515 wants unpadded base64url, but some issuers pad anyway
    let bytes = URL_SAFE_NO_PAD
        .decode(segment.trim_end_matches('='))
        .map_err(|e| InspectError::Jwt(format!("Bad {} encoding: {}", which, e)))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| InspectError::Jwt(format!("{} is not JSON: {}", which, e)))
}
