//! ExpertGM Engine - Main entry point.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use expertgm_engine::api::console;
use expertgm_engine::infrastructure::{
    app_settings::EngineConfig, experts::ExpertRegistry, random::random_source,
    rules_loader::load_rules,
};
use expertgm_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root so `cargo run` works from any crate dir.
    load_dotenv_from_repo_root();

    // Initialize logging. Output goes to stderr; stdout carries responses.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "expertgm_engine=debug,expertgm_domain=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting ExpertGM Engine");

    let config = EngineConfig::from_env()?;
    tracing::debug!(?config, "Loaded configuration");

    let rules = load_rules(config.rules_path.as_deref())?;
    let experts = ExpertRegistry::load(config.experts_path.as_deref())?;
    let random = random_source(config.rng_seed);

    let app = Arc::new(App::new(rules, experts, random));

    tracing::info!("Reading tool requests from stdin");
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    console::run(app, stdin, tokio::io::stdout()).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
    let _ = dotenvy::dotenv();
}
