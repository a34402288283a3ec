//! Equity Lookup Binary
//!
//! Loads one cached equity table and answers `pockets ~ board` queries,
//! from the command line or one per line on stdin.

use clap::Parser;
use robosim::cards::observation::Observation;
use robosim::cards::street::Street;
use robosim::equity::layout::CacheLayout;
use robosim::equity::store::Store;
use std::io::BufRead;

#[derive(Parser)]
#[command(author, version, about = "Query a precomputed equity table", long_about = None)]
struct Args {
    /// Cache root; defaults to $CACHE_DIR, else ./cache
    #[arg(long)]
    dir: Option<std::path::PathBuf>,
    /// preflop, flop, turn or river
    #[arg(long, value_parser = parse_street)]
    street: Street,
    #[arg(long, default_value_t = 1)]
    opponents: usize,
    /// Print loaded pockets and their record counts
    #[arg(long)]
    stats: bool,
    /// Queries such as "AsKs ~ 2c3d4h" or "As Ks 2c 3d 4h"
    queries: Vec<String>,
}

fn parse_street(s: &str) -> Result<Street, String> {
    Street::try_from(s)
}

fn query(store: &Store, line: &str) -> anyhow::Result<String> {
    let (pockets, board) = Observation::split(line).map_err(anyhow::Error::msg)?;
    let equity = store.probabilities(pockets, board)?;
    Ok(format!("{} ~ {}  {}", pockets, board, equity))
}

fn main() -> anyhow::Result<()> {
    robosim::log();
    let args = Args::parse();
    let layout = args.dir.map(CacheLayout::new).unwrap_or_default();
    let store = Store::open(&layout, args.street, args.opponents)?;
    log::info!("{:<32}{:<16}", "cache root", layout.root().display());
    log::info!("{:<32}{:<16}", "loaded equity records", store.len());
    if args.stats {
        for (pockets, n) in store.pockets() {
            println!("{:<8}{:>8}", pockets, n);
        }
    }
    let answer = |line: &str| match query(&store, line) {
        Ok(out) => println!("{}", out),
        Err(e) => eprintln!("{}: {:#}", line.trim(), e),
    };
    if args.queries.is_empty() && !args.stats {
        for line in std::io::stdin().lock().lines() {
            let line = line?;
            match line.trim() {
                "" => continue,
                "quit" | "exit" => break,
                line => answer(line),
            }
        }
    } else {
        args.queries.iter().for_each(|line| answer(line));
    }
    Ok(())
}
