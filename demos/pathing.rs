//! Terminal pathfinding demo.
//!
//! Run: cargo run --bin pathing -- [seed] [width height]
//!
//! Set `RUST_LOG=debug` to see the search log.

use std::time::Instant;

use log::{error, info, warn};
use tzar_demos::{Battlefield, parse_args};
use tzar_paths::{Algorithm, PathConfig, PathingSystem};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (seed, size) = match parse_args(&args) {
        Ok(v) => v,
        Err(e) => {
            error!("{e}");
            eprintln!("usage: pathing [seed] [width height]");
            std::process::exit(2);
        }
    };

    let bf = match Battlefield::generate(size, seed) {
        Ok(bf) => bf,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    let mut pathing = match PathingSystem::new(&bf.grid, PathConfig::default().with_check_bounds(true))
    {
        Ok(p) => p,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    for algorithm in [Algorithm::AStarHeap, Algorithm::AStarHeapBidirectional] {
        let t0 = Instant::now();
        let path = match pathing.find_path(&bf.grid, bf.start, bf.target, algorithm) {
            Ok(p) => p,
            Err(e) => {
                error!("{e}");
                std::process::exit(1);
            }
        };
        let elapsed = t0.elapsed();
        if path.is_empty() {
            warn!("{algorithm:?}: no path from {} to {}", bf.start, bf.target);
            continue;
        }
        info!(
            "{algorithm:?}: {} steps, {} tiles expanded in {elapsed:?}",
            path.len() - 1,
            pathing.last_expanded()
        );
        println!("{}", bf.render(&path));
    }
}
