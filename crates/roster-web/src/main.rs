use facet::Facet;
use figue as args;
use roster_web::app::{AppState, build_router};
use roster_web::config::ServerConfig;
use roster_web::store::load_data_dir;
use tokio::net::TcpListener;
use tracing::info;

#[derive(Facet, Debug)]
struct ServerCli {
    #[facet(flatten)]
    builtins: args::FigueBuiltins,
    #[facet(args::named, default)]
    data_dir: Option<String>,
}

fn main() {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("failed to build tokio runtime")
        .block_on(async {
            if let Err(err) = run_server().await {
                eprintln!("{err}");
                std::process::exit(1);
            }
        });
}

async fn run_server() -> Result<(), String> {
    let cli = parse_server_cli()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env(cli.data_dir)?;

    // The dataset is fully loaded before the listener exists.
    let data_dir = config.data_dir.clone();
    let snapshot = tokio::task::spawn_blocking(move || load_data_dir(&data_dir))
        .await
        .map_err(|e| format!("dataset loader join error: {e}"))?;
    let state = AppState::new(snapshot);

    let http_addr = config.http_addr.as_str();
    let listener = TcpListener::bind(http_addr)
        .await
        .map_err(|e| format!("failed to bind HTTP on {http_addr}: {e}"))?;
    info!(
        %http_addr,
        data_dir = %config.data_dir.display(),
        "roster HTTP API ready"
    );

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("HTTP server error: {e}"))?;
    info!("roster stopped");
    Ok(())
}

fn parse_server_cli() -> Result<ServerCli, String> {
    let figue_config = args::builder::<ServerCli>()
        .map_err(|e| format!("failed to build CLI schema: {e}"))?
        .cli(|cli| cli.strict())
        .help(|h| {
            h.program_name("roster")
                .description("Read-only company and employee query API")
                .version(option_env!("CARGO_PKG_VERSION").unwrap_or("dev"))
        })
        .build();
    let cli = args::Driver::new(figue_config)
        .run()
        .into_result()
        .map_err(|e| e.to_string())?;
    Ok(cli.value)
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
