//! One-shot flash messages carried across a redirect in a signed cookie

use axum_extra::extract::cookie::{Cookie, CookieJar, Key, SameSite, SignedCookieJar};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};

pub const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }

    fn encode(&self) -> String {
        // Serializing a plain struct of strings cannot fail
        let json = serde_json::to_vec(self).unwrap_or_default();
        URL_SAFE_NO_PAD.encode(json)
    }

    fn decode(value: &str) -> Option<Self> {
        let json = URL_SAFE_NO_PAD.decode(value).ok()?;
        serde_json::from_slice(&json).ok()
    }
}

/// Derive the cookie signing key from the configured secret.
///
/// `Key::from` wants at least 64 bytes, which is exactly a SHA-512 digest,
/// so any secret length is accepted.
pub fn signing_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(&digest[..])
}

/// Queue a message for the next page view
pub fn push(jar: SignedCookieJar, flash: Flash) -> SignedCookieJar {
    let cookie = Cookie::build((FLASH_COOKIE, flash.encode()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    jar.add(cookie)
}

/// Pop the pending message, if any. `raw` is the unverified view of the same
/// request cookies: a flash cookie that fails the signature check yields
/// `None` and is cleared as well.
pub fn take(jar: SignedCookieJar, raw: &CookieJar) -> (SignedCookieJar, Option<Flash>) {
    let flash = match jar.get(FLASH_COOKIE) {
        Some(cookie) => {
            let flash = Flash::decode(cookie.value());
            if flash.is_none() {
                tracing::debug!("Discarding unreadable flash cookie");
            }
            flash
        }
        None if raw.get(FLASH_COOKIE).is_some() => {
            tracing::debug!("Discarding flash cookie with a bad signature");
            None
        }
        None => return (jar, None),
    };

    (clear(jar), flash)
}

fn clear(jar: SignedCookieJar) -> SignedCookieJar {
    jar.remove(Cookie::build((FLASH_COOKIE, "")).path("/"))
}
