//! Anti-forgery tokens scoped to an action and a user
//!
//! A token is valid for the tick it was issued in and the one after, so its
//! lifetime is between half and the full configured lifetime.

use sha1::{Digest, Sha1};

/// Upper bound on the configured lifetime (one year).
pub const MAX_LIFETIME_SECS: u64 = 365 * 86_400;

#[derive(Debug, Clone)]
pub struct NonceIssuer {
    secret: String,
    lifetime_secs: u64,
}

impl NonceIssuer {
    pub fn new(secret: impl Into<String>, lifetime_secs: u64) -> Self {
        Self {
            secret: secret.into(),
            lifetime_secs: lifetime_secs.clamp(2, MAX_LIFETIME_SECS),
        }
    }

    pub fn create(&self, action: &str, user: &str) -> String {
        self.create_at(action, user, now_unix())
    }

    pub fn verify(&self, nonce: &str, action: &str, user: &str) -> bool {
        self.verify_at(nonce, action, user, now_unix())
    }

    fn create_at(&self, action: &str, user: &str, now: i64) -> String {
        self.token_for_tick(self.tick(now), action, user)
    }

    fn verify_at(&self, nonce: &str, action: &str, user: &str, now: i64) -> bool {
        if nonce.is_empty() {
            return false;
        }
        let tick = self.tick(now);
        [tick, tick - 1]
            .iter()
            .any(|&t| constant_time_eq(&self.token_for_tick(t, action, user), nonce))
    }

    fn tick(&self, now: i64) -> i64 {
        let half = (self.lifetime_secs / 2) as i64;
        (now + half - 1).div_euclid(half)
    }

    fn token_for_tick(&self, tick: i64, action: &str, user: &str) -> String {
        let input = format!("{tick}|{action}|{user}|{}", self.secret);
        let mut hasher = Sha1::new();
        hasher.update(input.as_bytes());
        let digest = hex::encode(hasher.finalize());
        digest[..10].to_string()
    }
}

fn now_unix() -> i64 {
    time::OffsetDateTime::now_utc().unix_timestamp()
}

pub fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes().zip(b.bytes()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: u64 = 86_400;

    #[test]
    fn test_roundtrip() {
        let issuer = NonceIssuer::new("s3cret", DAY);
        let nonce = issuer.create("save_geg_gradients", "admin");
        assert_eq!(nonce.len(), 10);
        assert!(issuer.verify(&nonce, "save_geg_gradients", "admin"));
    }

    #[test]
    fn test_scoped_to_action_user_and_secret() {
        let issuer = NonceIssuer::new("s3cret", DAY);
        let nonce = issuer.create_at("save_geg_gradients", "admin", 1_000_000);

        assert!(!issuer.verify_at(&nonce, "other_action", "admin", 1_000_000));
        assert!(!issuer.verify_at(&nonce, "save_geg_gradients", "editor", 1_000_000));
        let other = NonceIssuer::new("different", DAY);
        assert!(!other.verify_at(&nonce, "save_geg_gradients", "admin", 1_000_000));
    }

    #[test]
    fn test_previous_tick_still_valid() {
        let issuer = NonceIssuer::new("s3cret", DAY);
        let issued = 1_000_000;
        let nonce = issuer.create_at("a", "u", issued);

        let half = (DAY / 2) as i64;
        assert!(issuer.verify_at(&nonce, "a", "u", issued + half));
        assert!(!issuer.verify_at(&nonce, "a", "u", issued + 2 * half + 1));
    }

    #[test]
    fn test_lifetime_is_clamped() {
        let huge = NonceIssuer::new("s3cret", u64::MAX);
        assert_eq!(huge.lifetime_secs, MAX_LIFETIME_SECS);
        let nonce = huge.create("a", "u");
        assert!(huge.verify(&nonce, "a", "u"));
        assert!(huge.verify_at(&nonce, "a", "u", now_unix()));

        assert_eq!(NonceIssuer::new("s3cret", 0).lifetime_secs, 2);
    }

    #[test]
    fn test_empty_and_garbage_rejected() {
        let issuer = NonceIssuer::new("s3cret", DAY);
        assert!(!issuer.verify("", "a", "u"));
        assert!(!issuer.verify("not-a-token", "a", "u"));
    }
}
