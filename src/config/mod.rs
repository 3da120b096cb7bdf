use crate::utils::validation::{validate_context_path, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PORT: u16 = 8080;
pub const PORT_ENV_VAR: &str = "PORT";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "todo-launcher")]
#[command(about = "Self-extracting launcher for the bundled todo webapp")]
pub struct LauncherConfig {
    #[arg(long, default_value = "/todo")]
    pub context_path: String,

    #[arg(long, help = "Read the webapp tree from this zip archive instead of probing the running executable")]
    pub archive: Option<String>,

    #[arg(long, help = "Read the webapp tree from this loose directory (unpackaged runs)")]
    pub webapp_dir: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for LauncherConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_context_path("context_path", &self.context_path)?;
        if let Some(archive) = &self.archive {
            validate_path("archive", archive)?;
        }
        if let Some(dir) = &self.webapp_dir {
            validate_path("webapp_dir", dir)?;
        }
        Ok(())
    }
}

/// Where the resolved port value came from. Malformed values are not
/// swallowed silently; callers log the fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortSource {
    Env,
    DefaultUnset,
    DefaultInvalid { raw: String },
}

pub fn resolve_port(raw: Option<&str>) -> (u16, PortSource) {
    match raw {
        None => (DEFAULT_PORT, PortSource::DefaultUnset),
        Some(value) => match value.parse::<u16>() {
            Ok(port) if port > 0 => (port, PortSource::Env),
            _ => (
                DEFAULT_PORT,
                PortSource::DefaultInvalid {
                    raw: value.to_string(),
                },
            ),
        },
    }
}

pub fn port_from_env() -> (u16, PortSource) {
    resolve_port(std::env::var(PORT_ENV_VAR).ok().as_deref())
}
