// SPDX-License-Identifier: Apache-2.0

//! One-shot flash messages carried in a signed cookie.
//!
//! Token format is `base64url(json payload).base64url(hmac_sha256)`,
//! signed with the process-wide secret. The cookie is set on redirect
//! and expired on the next render; anything malformed or tampered is
//! ignored as if no flash existed.

use axum::http::HeaderMap;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt::{Display, Formatter};

type HmacSha256 = Hmac<Sha256>;

pub const FLASH_COOKIE: &str = "recicla_flash";

#[derive(Debug)]
pub struct FlashTokenError(pub String);

impl Display for FlashTokenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::error::Error for FlashTokenError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }
}

pub(crate) fn encode_flash(flash: &Flash, secret: &[u8]) -> Result<String, FlashTokenError> {
    let payload_bytes = serde_json::to_vec(flash).map_err(|e| FlashTokenError(e.to_string()))?;
    let payload_part = URL_SAFE_NO_PAD.encode(payload_bytes);
    let mut mac =
        HmacSha256::new_from_slice(secret).map_err(|e| FlashTokenError(e.to_string()))?;
    mac.update(payload_part.as_bytes());
    let sig_part = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());
    Ok(format!("{payload_part}.{sig_part}"))
}

/// `None` on any defect: bad shape, bad base64, bad signature, bad
/// JSON. A broken flash is dropped, never surfaced.
pub(crate) fn decode_flash(token: &str, secret: &[u8]) -> Option<Flash> {
    let (payload_part, sig_part) = token.split_once('.')?;
    let mut mac = HmacSha256::new_from_slice(secret).ok()?;
    mac.update(payload_part.as_bytes());
    let expected = URL_SAFE_NO_PAD.decode(sig_part).ok()?;
    mac.verify_slice(&expected).ok()?;
    let payload_bytes = URL_SAFE_NO_PAD.decode(payload_part).ok()?;
    serde_json::from_slice(&payload_bytes).ok()
}

pub(crate) fn set_cookie_value(flash: &Flash, secret: &[u8]) -> Result<String, FlashTokenError> {
    let token = encode_flash(flash, secret)?;
    Ok(format!(
        "{FLASH_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax"
    ))
}

pub(crate) fn clear_cookie_value() -> String {
    format!("{FLASH_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Reads the flash cookie off the request, if present and authentic.
pub(crate) fn take_flash(headers: &HeaderMap, secret: &[u8]) -> Option<Flash> {
    let cookies = headers.get("cookie").and_then(|v| v.to_str().ok())?;
    for pair in cookies.split(';') {
        let Some((name, value)) = pair.trim().split_once('=') else {
            continue;
        };
        if name == FLASH_COOKIE {
            return decode_flash(value, secret);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    const SECRET: &[u8] = b"test-secret";

    #[test]
    fn flash_round_trips_under_the_same_secret() {
        let flash = Flash::success("Ponto cadastrado com sucesso!");
        let token = encode_flash(&flash, SECRET).expect("encode");
        assert_eq!(decode_flash(&token, SECRET), Some(flash));
    }

    #[test]
    fn tampered_or_foreign_tokens_are_ignored() {
        let flash = Flash::error("Ponto não encontrado.");
        let token = encode_flash(&flash, SECRET).expect("encode");

        assert_eq!(decode_flash(&token, b"other-secret"), None);
        assert_eq!(decode_flash(&format!("x{token}"), SECRET), None);
        assert_eq!(decode_flash("no-dot-at-all", SECRET), None);
        assert_eq!(decode_flash("", SECRET), None);
    }

    #[test]
    fn take_flash_finds_the_cookie_among_others() {
        let flash = Flash::success("ok");
        let token = encode_flash(&flash, SECRET).expect("encode");
        let mut headers = HeaderMap::new();
        headers.insert(
            "cookie",
            HeaderValue::from_str(&format!("theme=dark; {FLASH_COOKIE}={token}"))
                .expect("header value"),
        );
        assert_eq!(take_flash(&headers, SECRET), Some(flash));
    }
}
