use super::Config;
use rand::Rng;

/// Default configuration with freshly generated secrets.
pub fn defaults() -> Config {
    let mut cfg = Config::default();
    fill_secrets(&mut cfg);
    cfg
}

/// Generate any missing secret. Returns true if something changed.
pub fn fill_secrets(cfg: &mut Config) -> bool {
    let mut changed = false;
    if cfg.auth.admin_key.trim().is_empty() {
        cfg.auth.admin_key = random_hex(24);
        changed = true;
    }
    if cfg.auth.nonce_secret.trim().is_empty() {
        cfg.auth.nonce_secret = random_hex(32);
        changed = true;
    }
    changed
}

fn random_hex(len: usize) -> String {
    let mut bytes = vec![0u8; len];
    rand::rng().fill(&mut bytes[..]);
    hex::encode(bytes)
}
