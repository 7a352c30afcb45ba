//! Regenerate the magic constants and print them as Rust array literals.
//!
//! The shipped tables never need this at runtime; it exists so the
//! constants in `board::magics` can be rebuilt if the masks or shifts ever
//! change. Exhaustion on any square aborts with a nonzero exit instead of
//! emitting a degenerate constant.

use std::process::ExitCode;

use rand::rngs::StdRng;
use rand::SeedableRng;

use forte::board::magics::{generate_magics, MagicSet};

fn print_table(name: &str, magics: &[u64; 64]) {
    println!("const {name}: [u64; 64] = [");
    for row in magics.chunks(4) {
        let cells: Vec<String> = row.iter().map(|m| format!("{m:#018x}")).collect();
        println!("    {},", cells.join(", "));
    }
    println!("];");
}

fn main() -> ExitCode {
    let mut rng = StdRng::seed_from_u64(11);
    let MagicSet { diagonal, straight } = match generate_magics(&mut rng) {
        Ok(set) => set,
        Err(e) => {
            eprintln!("magic generation failed: {e}");
            return ExitCode::FAILURE;
        }
    };
    print_table("DIAGONAL_MAGICS", &diagonal);
    println!();
    print_table("STRAIGHT_MAGICS", &straight);
    ExitCode::SUCCESS
}
