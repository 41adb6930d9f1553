use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_BIND: &str = "127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub bind: SocketAddr,
    /// Trunk output: `index.html` plus the wasm bundle
    pub dist_dir: PathBuf,
    pub assets_dir: PathBuf,
}

impl SiteConfig {
    /// Reads `.env` (if any) and then `TUTOR_*` variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind = var("TUTOR_BIND").unwrap_or_else(|| DEFAULT_BIND.to_owned());
        let bind = bind
            .parse()
            .with_context(|| format!("TUTOR_BIND is not a socket address: {bind:?}"))?;

        Ok(Self {
            bind,
            dist_dir: var("TUTOR_DIST_DIR").unwrap_or_else(|| "../dist".into()).into(),
            assets_dir: var("TUTOR_ASSETS_DIR").unwrap_or_else(|| "../assets".into()).into(),
        })
    }

    pub fn index_html(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}
