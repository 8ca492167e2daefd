// demos/train.rs
// Run with:
//   cargo run --example train -- 3,0,3,0,0 6 "CON >= 6 and EYE >= 6"
//   RUST_LOG=train_probability=debug cargo run --example train --features parallel -- 0,0,0,0,0 8 "fb >= 10"

use train_probability::{EngineConfig, TrainProbabilityEngine};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(stats), Some(target), Some(condition)) = (args.next(), args.next(), args.next()) else {
        eprintln!("usage: train <a,b,c,d,e> <target level> <condition>");
        std::process::exit(2);
    };

    let stats: Vec<i64> = match stats.split(',').map(|s| s.trim().parse()).collect() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("bad stat line {stats:?}: {e}");
            std::process::exit(2);
        }
    };
    let target: i64 = match target.parse() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("bad target level {target:?}: {e}");
            std::process::exit(2);
        }
    };

    let engine = TrainProbabilityEngine::new(EngineConfig::default().with_parallel(true));
    match engine.evaluate(&stats, target, &condition) {
        Ok(p) => {
            println!("P = {:.6}  ({} / {})", p.value(), p.favorable, p.outcomes);
            match p.one_in() {
                Some(n) => println!("about 1 in {n:.1}"),
                None => println!("never"),
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
