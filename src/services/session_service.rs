use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::error::{Error, Result};

type HmacSha256 = Hmac<Sha256>;

pub const SESSION_COOKIE: &str = "la_glorieta_admin";
const SESSION_TTL_DAYS: i64 = 7;

/// Stateless admin session tokens: `admin:<epoch-millis>.<hex hmac-sha256>`,
/// signed with the shared admin secret. Rotating the secret invalidates
/// every outstanding session.
#[derive(Clone)]
pub struct SessionService {
    secret: String,
}

impl SessionService {
    pub fn new(secret: String) -> Self {
        Self { secret }
    }

    pub fn max_age_secs() -> i64 {
        SESSION_TTL_DAYS * 24 * 60 * 60
    }

    /// Constant-time check of the shared admin password.
    pub fn password_matches(&self, provided: &str) -> Result<bool> {
        if self.secret.is_empty() {
            return Err(Error::Config("ADMIN_PASSWORD no está configurado.".into()));
        }
        Ok(ConstantTimeEq::ct_eq(provided.as_bytes(), self.secret.as_bytes()).into())
    }

    pub fn issue(&self) -> Result<String> {
        if self.secret.is_empty() {
            return Err(Error::Config("ADMIN_PASSWORD no está configurado.".into()));
        }
        let payload = format!("admin:{}", Utc::now().timestamp_millis());
        let signature = self
            .raw_signature(&payload)
            .ok_or_else(|| Error::Config("No se pudo firmar la sesión.".into()))?;
        Ok(format!("{}.{}", payload, hex::encode(signature)))
    }

    /// Never errors: malformed, mis-signed and stale tokens are all simply
    /// invalid. The embedded issuance timestamp is checked against the
    /// 7-day TTL here as well, independent of the cookie max-age.
    pub fn verify(&self, token: &str) -> bool {
        if self.secret.is_empty() {
            return false;
        }
        let Some((payload, signature)) = token.rsplit_once('.') else {
            return false;
        };
        if payload.is_empty() || signature.is_empty() {
            return false;
        }
        let Ok(provided) = hex::decode(signature) else {
            return false;
        };
        let Some(expected) = self.raw_signature(payload) else {
            return false;
        };
        if !bool::from(ConstantTimeEq::ct_eq(provided.as_slice(), expected.as_slice())) {
            return false;
        }
        let Some(issued_ms) = payload
            .strip_prefix("admin:")
            .and_then(|ts| ts.parse::<i64>().ok())
        else {
            return false;
        };
        let age_ms = Utc::now().timestamp_millis().saturating_sub(issued_ms);
        age_ms <= Self::max_age_secs() * 1000
    }

    fn raw_signature(&self, payload: &str) -> Option<Vec<u8>> {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes()).ok()?;
        mac.update(payload.as_bytes());
        Some(mac.finalize().into_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> SessionService {
        SessionService::new("secreto-de-prueba".into())
    }

    #[test]
    fn issued_token_verifies() {
        let sessions = service();
        let token = sessions.issue().expect("issue");
        assert!(sessions.verify(&token));
    }

    #[test]
    fn rotated_secret_invalidates_token() {
        let token = service().issue().expect("issue");
        let rotated = SessionService::new("otro-secreto".into());
        assert!(!rotated.verify(&token));
    }

    #[test]
    fn tampered_signature_fails() {
        let sessions = service();
        let token = sessions.issue().expect("issue");
        let mut chars: Vec<char> = token.chars().collect();
        let last = *chars.last().unwrap();
        *chars.last_mut().unwrap() = if last == '0' { '1' } else { '0' };
        let tampered: String = chars.into_iter().collect();
        assert!(!sessions.verify(&tampered));
    }

    #[test]
    fn tampered_payload_fails() {
        let sessions = service();
        let token = sessions.issue().expect("issue");
        let forged = token.replacen("admin:", "admin:9", 1);
        assert!(!sessions.verify(&forged));
    }

    #[test]
    fn malformed_tokens_fail() {
        let sessions = service();
        assert!(!sessions.verify(""));
        assert!(!sessions.verify("admin:123"));
        assert!(!sessions.verify(".deadbeef"));
        assert!(!sessions.verify("admin:123."));
        assert!(!sessions.verify("admin:123.not-hex"));
    }

    #[test]
    fn empty_secret_never_verifies() {
        let sessions = SessionService::new(String::new());
        assert!(sessions.issue().is_err());
        assert!(!sessions.verify("admin:1.00"));
    }

    #[test]
    fn token_older_than_ttl_is_rejected() {
        let sessions = service();
        let stale_ms =
            Utc::now().timestamp_millis() - (SessionService::max_age_secs() + 60) * 1000;
        let payload = format!("admin:{}", stale_ms);
        let signature = sessions.raw_signature(&payload).unwrap();
        let token = format!("{}.{}", payload, hex::encode(signature));
        assert!(!sessions.verify(&token));
    }

    #[test]
    fn token_within_ttl_is_accepted() {
        let sessions = service();
        let recent_ms = Utc::now().timestamp_millis() - 60_000;
        let payload = format!("admin:{}", recent_ms);
        let signature = sessions.raw_signature(&payload).unwrap();
        let token = format!("{}.{}", payload, hex::encode(signature));
        assert!(sessions.verify(&token));
    }
}
