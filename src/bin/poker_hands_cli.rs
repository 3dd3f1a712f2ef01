use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use poker_hands::api::{
    build_deal, handle_query, ApiError, ComparisonDto, DealDto, FixtureDto, HandReportDto, Query,
    QueryResponse,
};
use poker_hands::infra::{deal_hands, DeterministicRng, RandomSource, SystemRng};

#[derive(Parser)]
#[command(author, version, about = "Five-card poker hand evaluator", long_about = None)]
struct Cli {
    /// Формат вывода.
    #[arg(long, value_enum, global = true, default_value_t = Format::Text)]
    format: Format,

    /// Подробность логов (-v = debug, -vv = trace). RUST_LOG имеет приоритет.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Compare two hands, prints -1 / 0 / 1", alias = "cmp")]
    Compare {
        #[arg(required = true)]
        left: String,
        #[arg(required = true)]
        right: String,
    },
    #[command(about = "Classify a single hand", alias = "ev")]
    Eval {
        #[arg(required = true)]
        hand: String,
    },
    #[command(about = "Check that a hand is valid")]
    Validate {
        #[arg(required = true)]
        hand: String,
    },
    #[command(about = "Run the reference hand pairs")]
    Fixtures,
    #[command(about = "Deal random hands and pick the best one")]
    Random {
        /// Seed для воспроизводимой раздачи.
        #[arg(long)]
        seed: Option<u64>,
        /// Сколько рук раздать (колода ограничивает до 10).
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=10))]
        hands: u8,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command, cli.format) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// `Ok(false)` — команда отработала, но результат не совпал с ожидаемым
/// (расхождение в эталонной таблице).
fn run(command: Command, format: Format) -> Result<bool, ApiError> {
    let query = match command {
        Command::Compare { left, right } => Query::Compare { left, right },
        Command::Eval { hand } => Query::Evaluate { hand },
        Command::Validate { hand } => Query::Validate { hand },
        Command::Fixtures => Query::Fixtures,
        Command::Random { seed, hands } => {
            let count = usize::from(hands);
            let deal = match seed {
                Some(seed) => random_deal(&mut DeterministicRng::from_seed(seed), count)?,
                None => random_deal(&mut SystemRng, count)?,
            };
            emit(&deal, format, || print_deal(&deal))?;
            return Ok(true);
        }
    };

    log::debug!("query: {query:?}");
    match handle_query(query)? {
        QueryResponse::Valid(valid) => {
            emit(&valid, format, || println!("valid"))?;
            Ok(valid)
        }
        QueryResponse::Report(report) => {
            emit(&report, format, || print_report("", &report))?;
            Ok(true)
        }
        QueryResponse::Comparison(comparison) => {
            print_comparison(&comparison, format)?;
            Ok(true)
        }
        QueryResponse::Fixtures(rows) => {
            emit(&rows, format, || print_fixtures(&rows))?;
            Ok(rows.iter().all(|r| r.expected == r.actual))
        }
    }
}

fn random_deal(rng: &mut impl RandomSource, count: usize) -> Result<DealDto, ApiError> {
    let hands = deal_hands(rng, count)?;
    Ok(build_deal(&hands))
}

/// JSON — через serde_json, текст — через переданный принтер.
fn emit<T: Serialize>(value: &T, format: Format, text: impl FnOnce()) -> Result<(), ApiError> {
    match format {
        Format::Json => {
            let json = serde_json::to_string_pretty(value)
                .map_err(|e| ApiError::BadRequest(e.to_string()))?;
            println!("{json}");
        }
        Format::Text => text(),
    }
    Ok(())
}

fn print_comparison(comparison: &ComparisonDto, format: Format) -> Result<(), ApiError> {
    emit(comparison, format, || {
        print_report("left:  ", &comparison.left);
        print_report("right: ", &comparison.right);
        println!("{}", comparison.result);
    })
}

fn print_deal(deal: &DealDto) {
    for (i, report) in deal.hands.iter().enumerate() {
        print_report(&format!("#{i}:    "), report);
    }
    match deal.winner {
        Some(idx) => println!("winner: #{idx}"),
        None => println!("winner: none"),
    }
}

fn print_report(prefix: &str, report: &HandReportDto) {
    println!(
        "{prefix}{:<16} {:<28} key={:?}",
        report.hand.to_string(),
        report.description,
        report.key.values()
    );
}

fn print_fixtures(rows: &[FixtureDto]) {
    for (i, row) in rows.iter().enumerate() {
        let mark = if row.expected == row.actual { "ok" } else { "MISMATCH" };
        println!(
            "{:>2}. {:<16} vs {:<16} expected {:>2} got {:>2}  {mark}",
            i + 1,
            row.left,
            row.right,
            row.expected,
            row.actual
        );
    }
}
