mod arxiv;
mod dedup;
mod expand;
mod llm;
mod pipeline;
mod present;
mod rank;
mod translate;

pub const USER_AGENT: &str = concat!("scholar/", env!("CARGO_PKG_VERSION"));

use std::time::Duration;

use clap::Parser;
use reqwest::Client;
use tracing::info;

use arxiv::{ArxivClient, SortMode};
use llm::ChatClient;
use pipeline::PipelineConfig;
use rank::Strategy;

/// Retrieve arXiv papers on a topic, rank them by relevance with an LLM,
/// and print translated abstracts.
#[derive(Parser, Debug)]
#[command(name = "scholar", version, about)]
struct Cli {
    /// Topic to search for
    topic: String,

    /// Number of papers to output
    #[arg(long, default_value_t = 5)]
    max_results: usize,

    /// Number of expanded search queries (1 searches the bare topic)
    #[arg(long, default_value_t = 3)]
    queries: usize,

    /// Candidates fetched per search query
    #[arg(long, default_value_t = 25)]
    per_query: usize,

    /// Ranking strategy
    #[arg(long, value_enum, default_value = "score")]
    strategy: Strategy,

    /// arXiv sort order
    #[arg(long, value_enum, default_value = "latest")]
    sort: SortMode,

    /// arXiv category filter
    #[arg(long, default_value = "cs.*")]
    category: String,

    /// API key for the LLM service
    #[arg(long, env = "LLM_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Base URL for an OpenAI-compatible LLM API
    #[arg(long, env = "LLM_BASE_URL", default_value = "https://api.deepseek.com")]
    base_url: String,

    /// Model name for the LLM API
    #[arg(long, env = "LLM_MODEL", default_value = "deepseek-chat")]
    model: String,

    /// Emit the result as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("scholar=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let http = Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;
    let llm = ChatClient::new(http.clone(), &cli.api_key, &cli.base_url, &cli.model);
    let search = ArxivClient::new(http, cli.category.clone(), cli.sort);

    let config = PipelineConfig {
        topic: cli.topic.clone(),
        max_results: cli.max_results,
        expand_queries: cli.queries,
        per_query: cli.per_query,
        strategy: cli.strategy,
    };

    info!(topic = %cli.topic, model = %cli.model, "starting");
    let result = pipeline::run(&llm, &search, &config).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", present::render(&result));
    }

    Ok(())
}
