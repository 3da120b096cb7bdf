pub mod config;
pub mod core;
pub mod utils;

pub use crate::config::{port_from_env, resolve_port, LauncherConfig, PortSource, DEFAULT_PORT};
pub use crate::core::extract::{
    extract_webapp, ExtractReport, ExtractedWebapp, SourceMode, WebappSource, RESOURCE_ROOT,
    WELL_KNOWN_FILES,
};
pub use crate::core::server::WebServer;
pub use crate::utils::error::{LauncherError, Result};
