use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub client: ClientConfig,
    pub paths: PathsConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// User the save nonce is issued to.
    pub admin_user: String,
    /// Shared key proving the caller may manage gradients. Generated when empty.
    pub admin_key: String,
    /// Secret mixed into nonces. Generated when empty.
    pub nonce_secret: String,
    pub nonce_lifetime_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the gallery server.
    pub endpoint: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct StorageConfig {
    /// Only persist gradients that exist in the catalog.
    pub strict_catalog: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8787,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_user: "admin".to_string(),
            admin_key: String::new(),
            nonce_secret: String::new(),
            nonce_lifetime_secs: 86_400,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8787".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        let proj = ProjectDirs::from("dev", "gradients", "gradients");
        let data_dir = proj
            .as_ref()
            .map(|p| p.data_dir().to_path_buf())
            .unwrap_or_else(|| std::env::temp_dir().join("gradients"));
        Self { data_dir }
    }
}

impl Config {
    pub fn database_path(&self) -> PathBuf {
        self.paths.data_dir.join("gradients.sqlite3")
    }

    pub fn log_path(&self) -> PathBuf {
        self.paths.data_dir.join("gradients.log")
    }
}

pub fn save(cfg: &Config, override_path: Option<&Path>) -> anyhow::Result<()> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };
    write_config(cfg, &path)
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj = ProjectDirs::from("dev", "gradients", "gradients")
        .context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if !path.exists() {
        let cfg = defaults::defaults();
        write_config(&cfg, &path)?;
        return Ok(cfg);
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let mut cfg =
        toml::from_str::<Config>(&raw).with_context(|| format!("parse {}", path.display()))?;
    if defaults::fill_secrets(&mut cfg) {
        write_config(&cfg, &path)?;
    }
    Ok(cfg)
}

fn write_config(cfg: &Config, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
    }
    let raw = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, raw).with_context(|| format!("write {}", path.display()))?;
    // Holds the admin key and nonce secret.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("gradients-cfg-{}-{name}", std::process::id()))
            .join("config.toml")
    }

    #[test]
    fn test_first_load_writes_defaults_with_secrets() {
        let path = temp_path("first");
        let _ = fs::remove_file(&path);

        let cfg = load(Some(&path)).unwrap();
        assert!(path.exists());
        assert!(!cfg.auth.admin_key.is_empty());
        assert!(!cfg.auth.nonce_secret.is_empty());

        let again = load(Some(&path)).unwrap();
        assert_eq!(again.auth.admin_key, cfg.auth.admin_key);
        assert_eq!(again.auth.nonce_secret, cfg.auth.nonce_secret);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_partial_file_gets_defaults_and_secrets() {
        let path = temp_path("partial");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "[server]\nport = 9000\n\n[storage]\nstrict_catalog = true\n").unwrap();

        let cfg = load(Some(&path)).unwrap();
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert!(cfg.storage.strict_catalog);
        assert_eq!(cfg.client.timeout_secs, 10);
        assert!(!cfg.auth.admin_key.is_empty());

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains(&cfg.auth.admin_key));
        let _ = fs::remove_file(&path);
    }
}
