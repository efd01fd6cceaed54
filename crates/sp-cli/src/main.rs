use std::{fmt::Write as _, path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use sp_common::{
    logging::{init_tracing, LogConfig},
    pool::{load_accounts, CandidatePool, DatasetError, DatasetStore},
    MatchTier, Recommendation, RecommendationEngine, RecommendationFilter, ScoreBreakdown,
    UserProfile,
};
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(
    name = "sp-recommend",
    about = "Rank study partners by profile similarity"
)]
struct Cli {
    /// Bulk student dataset (CSV export with a header row)
    #[arg(long, env = "SP_DATASET_PATH", global = true)]
    dataset: Option<PathBuf>,

    /// Locally registered accounts (JSON array of profiles)
    #[arg(long, env = "SP_ACCOUNTS_PATH", global = true)]
    accounts: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank every other student against one user
    Rank {
        #[arg(long)]
        user: String,

        /// Keep only the best N matches left after filtering (0 keeps everything)
        #[arg(long, env = "SP_RECOMMEND_LIMIT")]
        limit: Option<usize>,

        /// high | medium | low
        #[arg(long)]
        tier: Option<MatchTier>,

        /// Case-insensitive search over name, university and CS interests
        #[arg(long)]
        query: Option<String>,

        #[arg(long)]
        json: bool,
    },
    /// Compare two users and show the per-attribute breakdown
    Score {
        #[arg(long)]
        user: String,

        #[arg(long)]
        other: String,

        #[arg(long)]
        json: bool,
    },
    /// Print one profile as JSON
    Show {
        #[arg(long)]
        user: String,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error("no profile with id {0}")]
    UnknownUser(String),
    #[error("no candidate pool: pass --dataset and/or --accounts")]
    NoPool,
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    dotenv().ok();
    init_tracing("sp-recommend", &LogConfig::from_env());

    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "sp-recommend failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, CliError> {
    let pool = build_pool(cli)?;
    let engine = RecommendationEngine::default();

    match &cli.command {
        Command::Rank {
            user,
            limit,
            tier,
            query,
            json,
        } => {
            let target = find(&pool, user)?;
            let filter = RecommendationFilter {
                query: query.clone(),
                tier: *tier,
            };
            // filter the full ranking, then keep the best N survivors
            let mut ranked = filter.apply(engine.rank(target, pool.as_slice(), None));
            if let Some(limit) = limit.filter(|limit| *limit > 0) {
                ranked.truncate(limit);
            }
            info!(user = %target.id, results = ranked.len(), "ranked study partners");

            if *json {
                Ok(serde_json::to_string_pretty(&ranked)?)
            } else {
                Ok(render_ranking(&ranked))
            }
        }
        Command::Score { user, other, json } => {
            let a = find(&pool, user)?;
            let b = find(&pool, other)?;
            let breakdown = engine.scorer().score_breakdown(a, b);

            if *json {
                Ok(serde_json::to_string_pretty(&breakdown)?)
            } else {
                Ok(render_breakdown(a, b, &breakdown))
            }
        }
        Command::Show { user } => Ok(serde_json::to_string_pretty(find(&pool, user)?)?),
    }
}

/// Dataset users first, then registered accounts.
fn build_pool(cli: &Cli) -> Result<CandidatePool, CliError> {
    if cli.dataset.is_none() && cli.accounts.is_none() {
        return Err(CliError::NoPool);
    }

    let mut pool = CandidatePool::new();
    if let Some(path) = &cli.dataset {
        let store = DatasetStore::new(path);
        pool = pool.with_profiles(store.get_or_load()?.iter().cloned());
    }
    if let Some(path) = &cli.accounts {
        pool = pool.with_profiles(load_accounts(path)?);
    }

    Ok(pool)
}

fn find<'a>(pool: &'a CandidatePool, id: &str) -> Result<&'a UserProfile, CliError> {
    pool.find(id)
        .ok_or_else(|| CliError::UnknownUser(id.to_string()))
}

fn render_ranking(ranked: &[Recommendation]) -> String {
    if ranked.is_empty() {
        return "no matches".to_string();
    }

    let mut out = String::new();
    for (position, rec) in ranked.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {:>3}%  {:<12}  {:<14} {:<28} {}",
            position + 1,
            rec.match_score,
            rec.tier().label(),
            rec.profile.id,
            rec.profile.display_name(),
            rec.profile.university
        );
    }
    out.trim_end().to_string()
}

fn render_breakdown(a: &UserProfile, b: &UserProfile, breakdown: &ScoreBreakdown) -> String {
    let score = (breakdown.total * 100.0).round();
    let mut out = format!(
        "{} vs {}: {score}%\n",
        a.display_name(),
        b.display_name()
    );
    for attribute in &breakdown.attributes {
        let _ = writeln!(
            out,
            "  {:<24} weight {:.2}  component {:.3}  contribution {:.3}",
            attribute.attribute.as_ref(),
            attribute.weight,
            attribute.component,
            attribute.contribution
        );
    }
    out.trim_end().to_string()
}
