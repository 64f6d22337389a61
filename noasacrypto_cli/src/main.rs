mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use noasacrypto_api::{Client, ClientConfig, DEFAULT_BASE_URL};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "noasacrypto")]
#[command(about = "Fetch crypto excuses from the NoasaCrypto reasons API")]
struct Cli {
    /// Output format: table, json, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API root to query
    #[arg(long, env = "NOASACRYPTO_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,

    /// Request timeout in milliseconds
    #[arg(long, env = "NOASACRYPTO_TIMEOUT_MS", default_value = "10000", global = true)]
    timeout_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a random reason from any category
    Random,
    /// Fetch a random reason from one category
    Category(commands::category::CategoryArgs),
    /// List the built-in category ids
    Categories,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("noasacrypto=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    if let Commands::Categories = cli.command {
        commands::categories::run(&format);
        return Ok(());
    }

    let config = ClientConfig::default()
        .with_base_url(&cli.base_url)
        .with_timeout_ms(cli.timeout_ms);
    let client = Client::with_config(config)?;

    let result = match &cli.command {
        Commands::Random => commands::random::run(&client, &format).await,
        Commands::Category(args) => commands::category::run(args, &client, &format).await,
        Commands::Categories => Ok(()),
    };
    client.close();

    if let Err(ref err) = result {
        if let Some(hint) = err
            .downcast_ref::<noasacrypto_api::Error>()
            .map(commands::hint)
        {
            eprintln!("{}", hint);
        }
    }
    result
}
