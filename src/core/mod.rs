pub mod extract;
pub mod server;

pub use crate::core::extract::{
    extract_webapp, ExtractReport, ExtractedWebapp, SourceMode, WebappSource,
};
pub use crate::core::server::WebServer;
