use clap::Parser;

use kochwerk_meals_rs::server::run_server;

/// Serves the normalized Kochwerk meal plan as JSON.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Port for the HTTP endpoint
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    port: u16,
    /// Enable verbose logging{n}[SETS env: RUST_LOG=debug]
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }

    pretty_env_logger::formatted_timed_builder()
        .filter_level(log::LevelFilter::Info)
        .filter_module(
            "kochwerk_meals_rs",
            if std::env::var(pretty_env_logger::env_logger::DEFAULT_FILTER_ENV).unwrap_or_default()
                == "debug"
            {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            },
        )
        .init();

    log::info!("Starting meal server...");
    run_server(args.port).await
}
