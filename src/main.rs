use clap::Parser;
use todo_launcher::utils::{logger, validation::Validate};
use todo_launcher::{extract_webapp, port_from_env, LauncherConfig, PortSource, WebServer, WebappSource};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = LauncherConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting todo-launcher");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let (port, port_source) = port_from_env();
    match &port_source {
        PortSource::Env => tracing::info!(port, "Using port from PORT environment variable"),
        PortSource::DefaultUnset => tracing::info!(port, "PORT not set, using default"),
        PortSource::DefaultInvalid { raw } => {
            tracing::warn!(port, raw = %raw, "PORT is not a valid port number, using default")
        }
    }

    let source = WebappSource::probe(&config)?;
    tracing::info!(mode = %source.mode(), "Webapp source selected");

    let webapp = extract_webapp(&source)?;
    tracing::info!(
        files = webapp.report.files_copied,
        dirs = webapp.report.dirs_created,
        path = %webapp.path().display(),
        "📁 Webapp extracted"
    );
    for missing in &webapp.report.skipped {
        tracing::warn!(path = %missing, "Webapp resource not found, skipped");
    }

    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(
        "🌐 Serving todo webapp at http://localhost:{}{}",
        port,
        config.context_path
    );

    let server = WebServer::new(&config.context_path, webapp.path());
    server.run(listener).await?;

    // Dropping `webapp` removes the extracted tree.
    drop(webapp);
    tracing::info!("✅ Shutdown complete, extracted webapp removed");
    Ok(())
}
