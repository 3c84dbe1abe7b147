//! Runtime settings, read with the `config` crate from an optional
//! `stlreader.{toml,json,yaml}` file and `STLREADER__*` environment variables.

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;
use crate::extract::DEFAULT_TOOL_SOURCES;

/// File names of the sources read by the fixed-purpose loaders.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SourceNames {
    pub nav: String,
    pub tools: String,
    pub docs_nav: String,
    pub aso: String,
    /// Source anchors of the tools shown on the tools page, in display order.
    pub tool_sources: Vec<String>,
}
impl Default for SourceNames {
    fn default() -> Self {
        Self {
            nav: "nav.stl".into(),
            tools: "tools.stl".into(),
            docs_nav: "docs-nav.stl".into(),
            aso: "aso.stl".into(),
            tool_sources: DEFAULT_TOOL_SOURCES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub content_dir: PathBuf,
    pub listen: String,
    pub log_level: String,
    pub sources: SourceNames,
}
impl Default for Settings {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("src/content/stl"),
            listen: "127.0.0.1:4321".into(),
            log_level: "info".into(),
            sources: SourceNames::default(),
        }
    }
}

impl Settings {
    /// Reads `<basename>.{toml,json,yaml,...}` if present, then lets the
    /// environment override individual keys.
    pub fn load(basename: &str) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::with_name(basename).required(false))
            .add_source(Environment::with_prefix("STLREADER").separator("__"))
            .build()?
            .try_deserialize::<Settings>()?;
        Ok(settings)
    }
}
