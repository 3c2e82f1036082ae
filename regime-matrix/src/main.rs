use regime_matrix::{EngineConfig, RegimeEngine};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_help() {
    eprintln!(
        r#"Regime Matrix - regime transition matrix and stress-risk service

USAGE:
    regime-matrix [--config <PATH>]

OPTIONS:
    -c, --config <PATH>   JSON configuration file
    -h, --help            Print this help message

CONFIG FILE (every key optional):
    name                  Service name shown in logs
    server.host           Bind host (default: 0.0.0.0)
    server.port           Bind port (default: 8080)
    matrix.step_days      Sampling step for compute requests (default: 7, max: 366)
    matrix.alpha          Laplace smoothing pseudo-count (default: 1.0)
    matrix.stress_labels  Stress regimes for risk metrics (default: ["RISK_OFF_STRESS"])
    matrix.vocabulary     Fixed label order for every matrix
    seed_samples          Observations loaded at startup: [{{"timestamp", "label"}}]

ENVIRONMENT VARIABLES:
    HOST, PORT            Override server.host / server.port
    RUST_LOG              Log filter (default: regime_matrix=info,tower_http=debug)
"#
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "regime_matrix=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config_path: Option<String> = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => match args.next() {
                Some(path) => config_path = Some(path),
                None => {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
            },
            other => {
                eprintln!("Unknown argument: {}", other);
                print_help();
                std::process::exit(1);
            }
        }
    }

    let mut config = if let Some(path) = config_path {
        tracing::info!("Loading configuration from: {}", path);
        EngineConfig::from_file(&path)?
    } else {
        tracing::info!("Using default configuration");
        EngineConfig::default()
    };
    config.apply_overrides(std::env::var("HOST").ok(), std::env::var("PORT").ok())?;

    tracing::info!("Engine: {}", config.name);
    tracing::info!("Seed observations: {}", config.seed_samples.len());
    tracing::info!(
        "Defaults: step_days={} alpha={} stress_labels={:?}",
        config.matrix.step_days,
        config.matrix.alpha,
        config.matrix.stress_labels
    );

    let engine = RegimeEngine::from_config(config);

    tracing::info!("Available endpoints:");
    tracing::info!("  GET  /api/health");
    tracing::info!("  POST /api/regime/samples");
    tracing::info!("  POST /api/regime/transition/compute");
    tracing::info!("  GET  /api/regime/transition/current");
    tracing::info!("  GET  /api/regime/transition/matrix");
    tracing::info!("  GET  /api/regime/transition/durations");

    engine.run().await
}
