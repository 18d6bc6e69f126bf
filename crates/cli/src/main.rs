mod game;
mod ui;

use std::time::Duration;

use clap::{Parser, ValueEnum};
use othello_core::disc::Disc;
use othello_core::level::{DEFAULT_LEVEL, N_LEVELS};
use othello_core::search::options::SearchOptions;
use othello_core::transposition_table::CacheOptions;
use tracing_subscriber::EnvFilter;

/// Which colors are played from the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Human {
    Dark,
    Light,
    Both,
    /// Engine against itself
    None,
}

impl Human {
    pub fn plays(self, color: Disc) -> bool {
        match self {
            Human::Dark => color == Disc::Dark,
            Human::Light => color == Disc::Light,
            Human::Both => true,
            Human::None => false,
        }
    }
}

#[derive(Parser, Debug, Clone)]
struct EngineParams {
    #[arg(short, long, default_value_t = DEFAULT_LEVEL,
          value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(0..N_LEVELS as u64))]
    level: usize,

    /// Seconds per engine move; 0 disables the limit
    #[arg(short, long, default_value = "2.5")]
    time: f64,

    /// Search every move to this depth instead of the level's schedule
    #[arg(long)]
    depth: Option<u32>,

    /// Log2 of the transposition cache bucket count
    #[arg(long, default_value = "16", value_parser = clap::value_parser!(u32).range(0..=26))]
    hash_bits: u32,

    /// Verify cache hits against the full board
    #[arg(long)]
    exact_cache: bool,

    /// Limit each cache bucket to this many entries
    #[arg(long)]
    bucket_len: Option<usize>,

    #[arg(long)]
    no_cache: bool,

    #[arg(long)]
    no_corner_cutoff: bool,

    #[arg(long)]
    lookahead_mobility: bool,

    /// Keep explored positions between moves
    #[arg(long)]
    retain_tree: bool,

    #[arg(long)]
    seed: Option<u64>,
}

impl EngineParams {
    fn search_options(&self) -> SearchOptions {
        let time_budget = (self.time > 0.0).then(|| Duration::from_secs_f64(self.time));
        let mut options = SearchOptions::new(self.level)
            .with_time_budget(time_budget)
            .with_cache(!self.no_cache)
            .with_cache_options(CacheOptions {
                size_log2: self.hash_bits,
                exact: self.exact_cache,
                max_bucket_len: self.bucket_len,
            })
            .with_corner_cutoff(!self.no_corner_cutoff)
            .with_lookahead_mobility(self.lookahead_mobility)
            .with_retain_tree(self.retain_tree)
            .with_seed(self.seed);
        if let Some(depth) = self.depth {
            options = options.with_fixed_depth(depth);
        }
        options
    }
}

#[derive(Parser, Debug)]
#[command(name = "othello", about = "Play Othello against an alpha-beta engine")]
struct Cli {
    /// Colors controlled by the keyboard
    #[arg(long, value_enum, default_value_t = Human::Dark)]
    human: Human,

    /// Print search diagnostics (same as RUST_LOG=debug)
    #[arg(short, long)]
    verbose: bool,

    #[command(flatten)]
    engine_params: EngineParams,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    let options = args.engine_params.search_options();
    tracing::debug!(?options, human = ?args.human, "starting");
    ui::ui_loop(options, args.human)
}
