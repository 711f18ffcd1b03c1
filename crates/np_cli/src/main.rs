use anyhow::Context;
use clap::Parser;
use np_core::{ArticleSummary, Category, NewsItem, SearchResult, Theme};
use np_inference::{create_provider, Config, Gateway};
use np_web::AppState;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Nigerian news briefings and search, answered by Gemini", long_about = None)]
pub struct Cli {
    /// Gemini API key. Falls back to API_KEY or GEMINI_API_KEY.
    #[arg(long, global = true)]
    api_key: Option<String>,
    #[arg(long, global = true, help = "Model to use (default gemini-2.5-flash)")]
    model: Option<String>,
    #[arg(long, global = true)]
    base_url: Option<String>,
    /// Abort provider calls after this many seconds. Unbounded by default.
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,
    /// Serve canned demo data instead of calling the provider
    #[arg(long, global = true)]
    offline: bool,
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the web application
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        bind: SocketAddr,
        /// Initial colour scheme (dark or light). Falls back to NAIJPEDIA_THEME.
        #[arg(long)]
        theme: Option<Theme>,
    },
    /// Ask a free-text question
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// List trending headlines
    News {
        /// All, Politics, Business, Technology, Sports, Entertainment or Metro
        #[arg(long, default_value = "All")]
        category: Category,
    },
    /// Summarize one article
    Summarize {
        title: String,
        #[arg(long, default_value = "News")]
        source: String,
    },
}

impl Cli {
    /// Flags win over the environment.
    fn config(&self) -> Config {
        let env = Config::from_env();
        Config {
            api_key: self.api_key.clone().or(env.api_key),
            model_name: self.model.clone().or(env.model_name),
            base_url: self.base_url.clone().or(env.base_url),
            timeout: self.timeout_secs.map(Duration::from_secs),
            offline: self.offline,
        }
    }
}

fn print_search(result: &SearchResult) {
    println!("{}", result.text);
    let sources = result.sources();
    if !sources.is_empty() {
        println!("\nSources:");
        for (i, web) in sources.iter().enumerate() {
            let uri = web.uri.as_deref().unwrap_or_default();
            println!("  {}. {} <{}>", i + 1, web.title.as_deref().unwrap_or(uri), uri);
        }
    }
}

fn print_news(category: Category, items: &[NewsItem]) {
    if items.is_empty() {
        println!("No news found for {}.", category);
        return;
    }
    for (i, item) in items.iter().enumerate() {
        println!(
            "{}. [{}] {} ({}, {})",
            i + 1,
            item.category,
            item.title,
            item.source.as_deref().unwrap_or("Source"),
            item.time
        );
        if let Some(summary) = &item.summary {
            println!("   {}", summary);
        }
        if let Some(url) = item.safe_url() {
            println!("   {}", url);
        }
    }
}

fn print_summary(title: &str, summary: &ArticleSummary) {
    println!("{}\n", title);
    println!("Why it matters: {}\n", summary.why_it_matters);
    for point in &summary.points {
        println!("  → {}", point);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    np_core::logging::init_logging(cli.verbose);

    let config = cli.config();
    let provider = create_provider(&config).context("failed to set up the AI provider")?;
    let gateway = Gateway::new(provider);
    info!("🧠 AI provider ready (using {})", gateway.provider_name());

    match cli.command {
        Commands::Serve { bind, theme } => {
            let theme = theme.unwrap_or_else(|| {
                Theme::from_host_preference(std::env::var("NAIJPEDIA_THEME").ok().as_deref())
            });
            np_web::serve(AppState::new(gateway, theme), bind).await?;
        }
        Commands::Search { query } => {
            let query = query.join(" ");
            info!("🔍 Searching for {}", query);
            let result = gateway.perform_general_search(&query).await?;
            print_search(&result);
        }
        Commands::News { category } => {
            info!("📰 Fetching {} news", category);
            let items = gateway.load_news(category.label()).await;
            print_news(category, &items);
        }
        Commands::Summarize { title, source } => {
            let summary = gateway.summarize_article(&title, &source).await;
            print_summary(&title, &summary);
        }
    }

    Ok(())
}
