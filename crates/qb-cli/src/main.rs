mod render;
mod server;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use qb_core::{
    AuthorSortKey, Catalog, CategorySortKey, Direction, MonthDay, QuoteFilter, QuoteSortKey,
    authors_born_on, catalog_stats, daily_quote, featured_quotes, filter_authors,
    filter_categories, most_popular_category, random_quote, search_quotes, sort_authors,
    sort_categories, sort_quotes, today_utc, top_categories,
};
use qb_store::{Config, DataSource, load_catalog, resolve_config_path, save_catalog};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::render::{
    author_details, author_line, plural, quote_line, search_summary, topic_line,
};

#[derive(Parser)]
#[command(name = "qb", about = "Browse and search the quotebook catalog")]
struct Cli {
    /// JSON dataset to load instead of the builtin quotes (env: QB_DATA)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Config file (env: QB_CONFIG; default ./quotebook.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the quote of the day
    Daily,

    /// List featured quotes
    Featured {
        /// Maximum number of quotes to show (default from config)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show a random quote
    Random {
        /// Quote id to skip
        #[arg(long)]
        exclude: Option<String>,
    },

    /// Search quotes by text, author name or topic name
    Search {
        /// Text to look for (case-insensitive; empty matches everything)
        query: String,

        /// Only quotes in this topic id
        #[arg(long)]
        category: Option<String>,

        /// Only quotes by this author id
        #[arg(long)]
        author: Option<String>,

        /// relevance, author or likes
        #[arg(long, default_value = "relevance")]
        sort: QuoteSortKey,

        /// asc or desc
        #[arg(long, default_value = "desc")]
        order: Direction,
    },

    /// List authors
    Authors {
        /// Keep authors whose name, profession or nationality contains this text
        #[arg(long)]
        filter: Option<String>,

        /// name, profession or nationality
        #[arg(long, default_value = "name")]
        sort: AuthorSortKey,

        /// asc or desc
        #[arg(long, default_value = "asc")]
        order: Direction,
    },

    /// Show one author and their quotes
    Author {
        /// Author id
        id: String,
    },

    /// List topics
    Topics {
        /// Keep topics whose name or description contains this text
        #[arg(long)]
        filter: Option<String>,

        /// name or quotes
        #[arg(long, default_value = "name")]
        sort: CategorySortKey,

        /// asc or desc (default: desc for quotes, asc for name)
        #[arg(long)]
        order: Option<Direction>,
    },

    /// Show one topic and its quotes
    Topic {
        /// Topic id
        id: String,
    },

    /// Authors born on a given day
    Birthdays {
        /// Month and day as MM-DD (default: today)
        #[arg(long)]
        date: Option<MonthDay>,
    },

    /// Show catalog statistics
    Stats,

    /// Export the dataset to a JSON file
    Export {
        /// Output file path
        path: PathBuf,
    },

    /// Serve the read-only HTTP query API
    Serve {
        /// Address to bind (default from config)
        #[arg(long)]
        bind: Option<String>,
    },
}

/// Topics listed under "top topics" by `qb stats`.
const TOP_TOPICS: usize = 3;

/// Flag value, falling back to an environment variable.
fn flag_or_env(flag: Option<&Path>, var: &str) -> Option<PathBuf> {
    flag.map(Path::to_path_buf).or_else(|| {
        std::env::var(var)
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    })
}

fn load_config(cli: &Cli) -> Result<Config> {
    let explicit = flag_or_env(cli.config.as_deref(), "QB_CONFIG");
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let path = resolve_config_path(explicit.as_deref(), &cwd);
    Config::load_or_default(path.as_deref()).context("failed to load config")
}

fn open_catalog(cli: &Cli, config: &Config) -> Result<Catalog> {
    let explicit = flag_or_env(cli.data.as_deref(), "QB_DATA");
    let source = DataSource::resolve(explicit.as_deref(), config);
    load_catalog(&source).with_context(|| format!("failed to load dataset from {}", source.describe()))
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    let catalog = open_catalog(&cli, &config)?;

    match &cli.command {
        Commands::Daily => cmd_daily(&catalog),
        Commands::Featured { limit } => {
            cmd_featured(&catalog, limit.unwrap_or(config.display.featured_limit))
        }
        Commands::Random { exclude } => cmd_random(&catalog, exclude.as_deref()),
        Commands::Search {
            query,
            category,
            author,
            sort,
            order,
        } => {
            let filter = QuoteFilter::from_selection(category.as_deref(), author.as_deref());
            cmd_search(&catalog, query, &filter, *sort, *order)
        }
        Commands::Authors {
            filter,
            sort,
            order,
        } => cmd_authors(&catalog, filter.as_deref().unwrap_or(""), *sort, *order),
        Commands::Author { id } => cmd_author(&catalog, id),
        Commands::Topics {
            filter,
            sort,
            order,
        } => {
            let order = order.unwrap_or(match sort {
                CategorySortKey::Quotes => Direction::Descending,
                CategorySortKey::Name => Direction::Ascending,
            });
            cmd_topics(&catalog, filter.as_deref().unwrap_or(""), *sort, order)
        }
        Commands::Topic { id } => cmd_topic(&catalog, id),
        Commands::Birthdays { date } => {
            cmd_birthdays(&catalog, date.unwrap_or_else(|| today_utc().month_day()))
        }
        Commands::Stats => cmd_stats(&catalog),
        Commands::Export { path } => cmd_export(&catalog, path),
        Commands::Serve { bind } => {
            let bind = bind.clone().unwrap_or_else(|| config.server.bind.clone());
            cmd_serve(catalog, &bind).await
        }
    }
}

fn cmd_daily(catalog: &Catalog) -> Result<()> {
    match daily_quote(catalog) {
        Some(quote) => {
            let date = quote
                .daily_quote_date
                .clone()
                .unwrap_or_else(|| today_utc().to_string());
            println!("Quote of the day ({date})");
            println!("{}", quote_line(catalog, quote));
        }
        None => println!("(no daily quote)"),
    }
    Ok(())
}

fn cmd_featured(catalog: &Catalog, limit: usize) -> Result<()> {
    let featured = featured_quotes(catalog);
    if featured.is_empty() {
        println!("(no featured quotes)");
    }
    for quote in featured.into_iter().take(limit) {
        println!("{}", quote_line(catalog, quote));
    }
    Ok(())
}

fn cmd_random(catalog: &Catalog, exclude: Option<&str>) -> Result<()> {
    let mut rng = SmallRng::from_os_rng();
    match random_quote(catalog, &mut rng, exclude) {
        Some(quote) => println!("{}", quote_line(catalog, quote)),
        None => println!("(no quotes found)"),
    }
    Ok(())
}

fn cmd_search(
    catalog: &Catalog,
    query: &str,
    filter: &QuoteFilter,
    sort: QuoteSortKey,
    order: Direction,
) -> Result<()> {
    let hits = search_quotes(catalog, query);
    let narrowed = filter.apply(&hits);
    let sorted = sort_quotes(catalog, &narrowed, sort, order, query);
    tracing::debug!(
        "search {query:?}: {} hits, {} after filter, sort={sort} order={order}",
        hits.len(),
        sorted.len()
    );

    println!("{}", search_summary(query, hits.len(), sorted.len()));
    for quote in sorted {
        println!("{}", quote_line(catalog, quote));
    }
    Ok(())
}

fn cmd_authors(
    catalog: &Catalog,
    filter: &str,
    sort: AuthorSortKey,
    order: Direction,
) -> Result<()> {
    let matches = filter_authors(catalog, filter);
    let sorted = sort_authors(&matches, sort, order);
    if sorted.is_empty() {
        println!("No authors found");
        return Ok(());
    }
    println!(
        "Showing {} of {} authors",
        sorted.len(),
        catalog.authors().len()
    );
    for author in sorted {
        println!("{}", author_line(catalog, author));
    }
    Ok(())
}

fn cmd_author(catalog: &Catalog, id: &str) -> Result<()> {
    let Some(author) = catalog.find_author(id) else {
        bail!("author not found: {id}");
    };
    for line in author_details(author, &today_utc()) {
        println!("{line}");
    }
    let quotes = catalog.quotes_by_author(id);
    println!();
    println!("{} {}:", quotes.len(), plural(quotes.len(), "quote"));
    for quote in quotes {
        println!("  {}", quote_line(catalog, quote));
    }
    Ok(())
}

fn cmd_topics(
    catalog: &Catalog,
    filter: &str,
    sort: CategorySortKey,
    order: Direction,
) -> Result<()> {
    let matches = filter_categories(catalog, filter);
    let sorted = sort_categories(catalog, &matches, sort, order);
    if sorted.is_empty() {
        println!("No topics found");
        return Ok(());
    }
    println!(
        "Showing {} of {} topics",
        sorted.len(),
        catalog.categories().len()
    );
    for category in sorted {
        println!("{}", topic_line(catalog, category));
    }
    Ok(())
}

fn cmd_topic(catalog: &Catalog, id: &str) -> Result<()> {
    let Some(category) = catalog.find_category(id) else {
        bail!("topic not found: {id}");
    };
    println!("{} [{}]", category.name, category.id);
    println!("{}", category.description);
    let quotes = catalog.quotes_by_category(id);
    println!();
    println!("{} {}:", quotes.len(), plural(quotes.len(), "quote"));
    for quote in quotes {
        println!("  {}", quote_line(catalog, quote));
    }
    Ok(())
}

fn cmd_birthdays(catalog: &Catalog, date: MonthDay) -> Result<()> {
    let born = authors_born_on(catalog, date);
    if born.is_empty() {
        println!("(no birthdays on {date})");
        return Ok(());
    }
    println!("Born on {date}:");
    for author in born {
        let lifespan = author.lifespan_label().unwrap_or_default();
        println!("  {} ({lifespan})  [{}]", author.name, author.id);
    }
    Ok(())
}

fn cmd_stats(catalog: &Catalog) -> Result<()> {
    let stats = catalog_stats(catalog);
    println!("quotes:     {}", stats.quotes);
    println!("authors:    {}", stats.authors);
    println!("topics:     {}", stats.categories);
    println!("max/topic:  {}", stats.max_quotes_per_category);
    println!("avg/topic:  {}", stats.avg_quotes_per_category);
    if let Some(top) = most_popular_category(catalog) {
        println!(
            "popular:    {} ({})",
            top.name,
            catalog.count_by_category(&top.id)
        );
    }
    let top = top_categories(catalog, TOP_TOPICS);
    if !top.is_empty() {
        let listed: Vec<String> = top
            .iter()
            .map(|(category, count)| format!("{} ({count})", category.name))
            .collect();
        println!("top topics: {}", listed.join(", "));
    }
    Ok(())
}

fn cmd_export(catalog: &Catalog, path: &Path) -> Result<()> {
    save_catalog(catalog, path).with_context(|| format!("failed to write {}", path.display()))?;
    println!("exported to {}", path.display());
    Ok(())
}

async fn cmd_serve(catalog: Catalog, bind: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;
    let addr = listener.local_addr().context("failed to read bound address")?;
    tracing::info!(
        "serving {} quotes on {addr}",
        catalog.quotes().len()
    );
    println!("listening on http://{addr}");

    server::serve(listener, Arc::new(catalog), server::shutdown_signal())
        .await
        .context("HTTP server failed")?;
    tracing::info!("server stopped");
    Ok(())
}
