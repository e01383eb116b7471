//! Exhaustive pattern survey.
//!
//! Enumerates every non-empty square pattern up to a side bound,
//! classifies each on an isolated board, and prints the interesting
//! finds: still lifes and oscillators, with their renderings.
//!
//! Run with:
//!   cargo run --example survey -- [max_side] [tick_cap]
//!
//! Defaults to max_side 3. Side 4 visits 66 061 candidates; each extra
//! side multiplies the search space by 2^(s²), so the bound is capped.

use petri::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let max_side: usize = match args.next() {
        Some(raw) => raw.parse()?,
        None => 3,
    };
    let tick_cap: usize = match args.next() {
        Some(raw) => raw.parse()?,
        None => 10_000,
    };

    let config = ClassifyConfig { max_side, tick_cap };
    config.validate()?;
    println!(
        "surveying {} candidate patterns (sides 2..={max_side}, cap {tick_cap} ticks)\n",
        survey_size(max_side),
    );

    let mut stable = 0usize;
    let mut cyclic = 0usize;
    let mut fixed = 0usize;
    let mut unclassified = 0usize;
    survey(&config, |verdict| {
        match verdict.outcome {
            Outcome::FixedPoint if verdict.is_stable() => {
                stable += 1;
                println!("stable after {} tick(s):\n{}", verdict.ticks, verdict.construct);
            }
            Outcome::FixedPoint => fixed += 1,
            Outcome::Cycle { .. } => {
                cyclic += 1;
                println!("{}:\n{}", verdict.label(), verdict.construct);
            }
            Outcome::Unclassified => unclassified += 1,
        }
    })?;

    println!(
        "done: {stable} stable, {cyclic} cyclic, {fixed} settled to another fixed point, \
         {unclassified} unclassified",
    );
    Ok(())
}
