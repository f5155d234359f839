//! Terminal presentation adapter for the ranking pipeline.

use clap::{Parser, Subcommand};
use rivalrank_core::RankingResult;
use rivalrank_engine::{LookupOutcome, LookupSession, SessionSettings, Suggestions};
use rivalrank_places::PlacesClient;

#[derive(Debug, Parser)]
#[command(name = "rivalrank")]
#[command(about = "Estimate a business's rank among nearby competitors")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Look up a business and print its estimated local rank
    Rank {
        /// Business name to search for
        query: String,
        /// Search radius in meters (overrides RIVALRANK_SEARCH_RADIUS_M)
        #[arg(long)]
        radius: Option<u32>,
        /// Maximum competitors shown ahead of the target (overrides RIVALRANK_DISPLAY_CAP)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print autocomplete predictions for a partial query
    Suggest {
        query: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    // Loads `.env` before reading the environment.
    let config = rivalrank_core::load_app_config()?;
    tracing::debug!(?config, "configuration loaded");
    let client = PlacesClient::new(&config.places_api_key, config.request_timeout_secs)?;
    let mut settings = SessionSettings::from_config(&config);

    match cli.command {
        Commands::Rank {
            query,
            radius,
            limit,
        } => {
            if let Some(radius) = radius {
                settings.retrieval.radius_m = radius;
            }
            if let Some(limit) = limit {
                settings.display_cap = limit;
            }
            run_rank(client, settings, &query).await;
        }
        Commands::Suggest { query } => {
            run_suggest(client, settings, &query).await;
        }
    }

    Ok(())
}

async fn run_rank(client: PlacesClient, settings: SessionSettings, query: &str) {
    let (session, mut notices) = LookupSession::new(client, settings);

    let printer = tokio::spawn(async move {
        while let Some(notice) = notices.recv().await {
            println!("{notice}");
        }
    });

    match session.lookup(query).await {
        LookupOutcome::Ranked {
            target,
            category,
            result,
        } => {
            println!();
            println!("{}", target.name);
            if let Some(address) = &target.address {
                println!("{address}");
            }
            println!(
                "rating {:.1} · {} reviews",
                target.rating, target.review_count
            );
            println!(
                "category: {}{}",
                category.category_type,
                if category.keyword.is_empty() {
                    String::new()
                } else {
                    format!(" (keyword: {})", category.keyword)
                }
            );
            println!("estimated position: {}", result.position);
            print_leaderboard(&result);
        }
        LookupOutcome::NoMatches | LookupOutcome::DetailsUnavailable => {
            // The notice channel already carried the user-facing message.
        }
    }

    drop(session);
    let _ = printer.await;
}

fn print_leaderboard(result: &RankingResult) {
    if result.competitors_ahead.is_empty() {
        return;
    }
    println!("competitors ahead:");
    for (i, c) in result.competitors_ahead.iter().enumerate() {
        println!(
            "  {}. {} — rating {:.1} · {} reviews · {:.0} m · score {:.1}",
            i + 1,
            c.place.name,
            c.place.rating,
            c.place.review_count,
            c.distance_meters,
            c.score
        );
    }
}

async fn run_suggest(client: PlacesClient, settings: SessionSettings, query: &str) {
    let (session, mut notices) = LookupSession::new(client, settings);

    match session.suggest(query).await {
        Suggestions::Ready(predictions) => {
            for p in predictions {
                let secondary = &p.structured_formatting.secondary_text;
                if secondary.is_empty() {
                    println!("{}", p.structured_formatting.main_text);
                } else {
                    println!("{} — {}", p.structured_formatting.main_text, secondary);
                }
            }
        }
        Suggestions::Cleared => {
            println!("query too short");
        }
        Suggestions::Stale => {
            // Cannot happen for a single CLI invocation.
        }
        Suggestions::Unavailable => {
            while let Ok(notice) = notices.try_recv() {
                println!("{notice}");
            }
        }
    }
}
