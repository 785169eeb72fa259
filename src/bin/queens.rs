use clap::{Arg, Command};

use queens_search::error::QueensError;
use queens_search::search::{self, Strategy};

fn make_parser() -> Command {
    Command::new("queens")
        .about("Counts non-attacking queen placements on an N x N board")
        .arg(
            Arg::new("size")
                .short('n')
                .long("size")
                .help("Board size N")
                .default_value("8")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("strategy")
                .short('s')
                .long("strategy")
                .help("Candidate generation strategy")
                .default_value("permutations")
                .value_parser(["permutations", "odometer"]),
        )
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let matches = make_parser().get_matches();
    let n = *matches
        .get_one::<usize>("size")
        .expect("size has a default");
    let strategy = match matches
        .get_one::<String>("strategy")
        .expect("strategy has a default")
        .as_str()
    {
        "odometer" => Strategy::Odometer,
        _ => Strategy::Permutations,
    };

    let report = match search::run(strategy, n, |board| {
        println!();
        println!("{board}");
    }) {
        Ok(report) => report,
        Err(e @ QueensError::InvalidSize { .. }) => {
            eprintln!("queens: {e}");
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("queens: {e}");
            std::process::exit(1);
        }
    };

    println!();
    println!(
        "Ran {0}x{0} board in {1:?}",
        report.n, report.elapsed
    );
    println!("Solutions: {}", report.solutions);
    println!("Iterations: {}", report.candidates);
}
