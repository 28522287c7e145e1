//! Balda - CLI
//!
//! Bot matches, strategy benchmarks and longest-word lookups for the Balda
//! word game.

use anyhow::{Context, Result, bail};
use balda::{
    commands::{BenchmarkConfig, BoardSource, find_longest, run_benchmark, run_match},
    dictionary::{Dictionary, loader::load_from_file},
    game::{GameConfig, RejectionPolicy, WinnerPolicy},
    output::{print_benchmark_result, print_longest, print_match_report, print_move},
    strategy::StrategyType,
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "balda",
    about = "Balda word game engine with random, greedy and adversarial bots",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a word-per-line file
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Board side length
    #[arg(short = 'n', long, global = true, default_value = "5")]
    size: usize,

    /// Seed word placed on the middle row
    #[arg(short = 'w', long, global = true, default_value = "балда")]
    word: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one bot match (default)
    Play {
        /// Strategies, one per player: random|easy, greedy|hard, adversarial|choke
        #[arg(short, long, value_delimiter = ',', default_value = "greedy,greedy")]
        players: Vec<String>,

        /// Seed for random bots
        #[arg(long)]
        rng_seed: Option<u64>,

        /// Give up the turn on the first illegal proposal instead of retrying
        #[arg(long)]
        forfeit: bool,

        /// Extra proposals allowed after an illegal one
        #[arg(long, default_value = "3")]
        attempts: usize,

        /// Winner rule: 'highest' (default) or 'pairwise'
        #[arg(long, default_value = "highest")]
        winner: String,

        /// Print the board after every move
        #[arg(short, long)]
        verbose: bool,
    },

    /// Pit two strategies against each other over many games
    Benchmark {
        /// Number of games
        #[arg(short = 'g', long, default_value = "20")]
        games: usize,

        /// First contender
        #[arg(long, default_value = "greedy")]
        first: String,

        /// Second contender
        #[arg(long, default_value = "random")]
        second: String,

        /// Base seed for random bots
        #[arg(long)]
        rng_seed: Option<u64>,
    },

    /// Show the longest dictionary word on a board
    Longest {
        /// Explicit board rows separated by commas, '.' for empty cells
        #[arg(short, long, value_delimiter = ',')]
        rows: Option<Vec<String>>,
    },
}

/// Load the dictionary named by the -d flag
fn load_dictionary(source: &str) -> Result<Dictionary> {
    let dictionary = match source {
        "embedded" => Dictionary::embedded(),
        path => load_from_file(path).with_context(|| format!("loading dictionary '{path}'"))?,
    };
    log::info!("dictionary: {} words", dictionary.len());
    Ok(dictionary)
}

fn parse_winner(name: &str) -> Result<WinnerPolicy> {
    match name {
        "highest" => Ok(WinnerPolicy::HighestScore),
        "pairwise" => Ok(WinnerPolicy::AdjacentPairwise),
        other => bail!("unknown winner rule '{other}', expected 'highest' or 'pairwise'"),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let dictionary = load_dictionary(&cli.dictionary)?;
    let game = GameConfig::new(cli.size, cli.word.clone());

    let command = cli.command.unwrap_or(Commands::Play {
        players: vec!["greedy".to_string(), "greedy".to_string()],
        rng_seed: None,
        forfeit: false,
        attempts: 3,
        winner: "highest".to_string(),
        verbose: false,
    });

    match command {
        Commands::Play {
            players,
            rng_seed,
            forfeit,
            attempts,
            winner,
            verbose,
        } => {
            let rejection = if forfeit {
                RejectionPolicy::Forfeit
            } else {
                RejectionPolicy::Retry { attempts }
            };
            let config = game
                .with_rejection(rejection)
                .with_winner(parse_winner(&winner)?);
            run_play_command(config, &players, rng_seed, verbose, &dictionary)
        }
        Commands::Benchmark {
            games,
            first,
            second,
            rng_seed,
        } => {
            let config = BenchmarkConfig {
                game,
                contenders: [first, second],
                games,
                seed: rng_seed,
                show_progress: true,
            };
            run_benchmark_command(&config, &dictionary)
        }
        Commands::Longest { rows } => {
            let source = rows.map_or(
                BoardSource::Seeded {
                    size: cli.size,
                    seed: cli.word,
                },
                BoardSource::Rows,
            );
            let result = find_longest(&source, &dictionary)?;
            print_longest(&result);
            Ok(())
        }
    }
}

fn run_play_command(
    config: GameConfig,
    players: &[String],
    rng_seed: Option<u64>,
    verbose: bool,
    dictionary: &Dictionary,
) -> Result<()> {
    let strategies: Vec<StrategyType> = players
        .iter()
        .enumerate()
        .map(|(seat, name)| {
            let strategy = StrategyType::from_name(name);
            match rng_seed {
                Some(seed) => strategy.with_seed(seed.wrapping_add(seat as u64)),
                None => strategy,
            }
        })
        .collect();

    let names: Vec<&str> = strategies.iter().map(StrategyType::name).collect();
    println!(
        "Playing {}x{} from '{}': {}",
        config.size,
        config.size,
        config.seed_word,
        names.join(" vs ")
    );

    let mut number = 0;
    let report = run_match(config, strategies, dictionary, |accepted, board| {
        number += 1;
        print_move(number, accepted, board, verbose);
    })?;
    print_match_report(&report);
    Ok(())
}

fn run_benchmark_command(config: &BenchmarkConfig, dictionary: &Dictionary) -> Result<()> {
    println!(
        "Running {} games: {} vs {}...",
        config.games, config.contenders[0], config.contenders[1]
    );
    let result = run_benchmark(config, dictionary)?;
    print_benchmark_result(&result);
    Ok(())
}
