use clap::{Parser, Subcommand};

use estates_api::{app, config, database, seed, AppState};

#[derive(Parser)]
#[command(name = "estates-api", about = "Real-estate listings backend")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Populate the database with demo data
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = config::config();
    tracing::info!("Starting estates-api in {:?} mode", config.environment);

    let pool = database::manager::connect(&config.database.url, config.database.max_connections).await?;
    database::manager::ensure_schema(&pool).await?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Seed => {
            seed::run(&pool).await?;
            println!("Seed data created");
        }
        Command::Serve => {
            let state = AppState { pool };
            let router = app(state);

            let bind_addr = format!("0.0.0.0:{}", config.server.port);
            let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
            tracing::info!("estates-api listening on http://{}", bind_addr);

            axum::serve(listener, router).await?;
        }
    }

    Ok(())
}
