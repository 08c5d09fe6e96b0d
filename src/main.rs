use std::io;

use anyhow::ensure;
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};
use structopt::StructOpt;

mod menu;
use menu::Menu;

mod recursion;
use recursion::hanoi::{self, Rod};
use recursion::{binary_search, factorial, fibonacci, MAX_DEPTH};

mod stack;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "lifo",
    about = "A stack ADT with an interactive menu, plus classic recursive algorithms."
)]
struct Opt {
    /// Enables trace log level
    #[structopt(short, long, global = true)]
    trace: bool,

    /// Enables info log level
    #[structopt(short, long, global = true)]
    info: bool,

    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Runs the interactive stack menu on stdin/stdout
    Menu,

    /// Reverses a string by pushing it through a stack
    Reverse {
        /// The text to reverse
        text: String,
    },

    /// Computes n!
    Factorial {
        n: u32,

        /// Use plain recursion instead of the memoized version
        #[structopt(long)]
        naive: bool,
    },

    /// Computes the n-th Fibonacci number
    Fibonacci {
        n: u32,

        /// Use plain double recursion instead of the memoized version
        #[structopt(long)]
        naive: bool,
    },

    /// Prints every move that solves the Tower of Hanoi for n disks
    Hanoi {
        /// Number of disks
        n: u32,

        /// The rod the disks start on
        #[structopt(long, default_value = "A")]
        from: Rod,

        /// The rod the disks end up on
        #[structopt(long, default_value = "C")]
        to: Rod,

        /// The spare rod
        #[structopt(long, default_value = "B")]
        via: Rod,
    },

    /// Recursive binary search for a target in a sorted list
    Search {
        target: i64,

        /// The values to search, in ascending order
        #[structopt(required = true)]
        values: Vec<i64>,
    },
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();

    let log_level = if opt.trace {
        log::Level::Trace
    } else if opt.info {
        log::Level::Info
    } else {
        log::Level::Warn
    };

    simple_logger::init_with_level(log_level)?;

    match opt.cmd {
        Command::Menu => {
            let stdin = io::stdin();
            let stdout = io::stdout();

            Menu::new(stdin.lock(), stdout.lock()).run()?;
        }
        Command::Reverse { text } => {
            println!("{}", stack::reverse(&text));
        }
        Command::Factorial { n, naive } => {
            ensure!(n <= MAX_DEPTH, "n must be at most {}, got {}", MAX_DEPTH, n);

            if naive {
                println!("{}", factorial::naive(n));
            } else {
                let mut cache = factorial::FactorialCache::new();
                println!("{}", cache.get(n));
                info!("factorial cache holds {} entries", cache.len());
            }
        }
        Command::Fibonacci { n, naive } => {
            ensure!(n <= MAX_DEPTH, "n must be at most {}, got {}", MAX_DEPTH, n);

            if naive {
                println!("{}", fibonacci::checked_naive(n)?);
            } else {
                let mut cache = fibonacci::FibonacciCache::new();
                println!("{}", cache.get(n));
                info!("fibonacci cache holds {} entries", cache.len());
            }
        }
        Command::Hanoi { n, from, to, via } => {
            ensure!(
                n <= hanoi::MAX_DISKS,
                "at most {} disks are supported, got {}",
                hanoi::MAX_DISKS,
                n
            );
            ensure!(
                from != to && to != via && from != via,
                "source, destination and spare rods must all differ"
            );

            let moves = hanoi::solve(n, from, to, via);
            for (step, m) in moves.iter().enumerate() {
                println!("Step {}: {}", step + 1, m);
            }
            println!("Total moves: {}", moves.len());
        }
        Command::Search { target, values } => {
            ensure!(
                binary_search::is_sorted(&values),
                "values must be given in ascending order"
            );

            match binary_search::search(&values, &target) {
                Some(i) => println!("Target found at index: {}", i),
                None => println!("Target not found in array."),
            }
        }
    }

    Ok(())
}
