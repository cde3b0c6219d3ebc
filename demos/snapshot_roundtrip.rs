//! Snapshot and Restore
//!
//! Save a half-built automaton, restore it, finish it and query it.
//!
//! Run with: cargo run --example snapshot_roundtrip

use dfakit::{Dfa, Snapshot};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Snapshot Example ===\n");

    // Even number of 'a', only the first row defined so far
    let mut dfa = Dfa::create("ab".chars(), 2, 0, [0])?;
    dfa.add_transition(0, 'a', 1)?;
    dfa.add_transition(0, 'b', 0)?;

    let json = dfa.snapshot().to_json()?;
    println!("Snapshot:\n{json}\n");
    drop(dfa);

    let mut restored = Dfa::restore(&Snapshot::from_json(&json)?)?;
    println!("Restored phase: {:?}", restored.phase());
    for (state, symbol) in restored.missing_transitions() {
        let target = if symbol == 'a' { 0 } else { 1 };
        restored.add_transition(state, symbol, target)?;
    }
    println!("Completed phase: {:?}", restored.phase());

    let bytes = restored.snapshot().to_bytes()?;
    let again = Dfa::restore(&Snapshot::from_bytes(&bytes)?)?;
    println!("Binary snapshot: {} bytes", bytes.len());

    for input in ["aabb", "ab", ""] {
        println!("{input:?}: {:?}", again.accepts(input)?);
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
