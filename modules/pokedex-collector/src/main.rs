use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pokeapi_client::PokeApiClient;
use pokedex_collector::Collector;

#[derive(Parser, Debug)]
#[command(author, version, about = "Collect pokemon data from PokeAPI")]
struct Args {
    /// The starting pokedex id (inclusive)
    #[arg(default_value_t = 1)]
    start_id: u32,

    /// The ending pokedex id (inclusive)
    #[arg(default_value_t = 151)]
    end_id: u32,

    /// The name of the output JSON file
    #[arg(long, default_value = "pokemon_data.json")]
    filename: PathBuf,

    /// Collect these pokemon by name instead of an id range
    #[arg(long, value_delimiter = ',', conflicts_with_all = ["start_id", "end_id"])]
    names: Vec<String>,

    /// Sleep this many milliseconds between entities (default: no delay)
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// Base URL of the PokeAPI instance to fetch from
    #[arg(long, env = "POKEAPI_BASE_URL", default_value = pokeapi_client::DEFAULT_BASE_URL)]
    base_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("pokedex_collector=info".parse()?)
                .add_directive("pokeapi_client=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let client = PokeApiClient::new(&args.base_url);
    let mut collector =
        Collector::new(client).with_delay(Duration::from_millis(args.delay_ms));

    if args.names.is_empty() {
        collector.collect_range(args.start_id, args.end_id).await;
    } else {
        collector.collect_names(&args.names).await;
    }

    let (pokedex, stats) = collector.finish();
    info!("{stats}");

    pokedex_core::write_json(&pokedex, &args.filename)?;
    info!(
        path = %args.filename.display(),
        entries = pokedex.len(),
        "Data saved"
    );

    Ok(())
}
