//! Binary Suffix
//!
//! Three ways to build the automaton for binary strings ending in "1",
//! plus a look at the building/ready lifecycle and evaluation traces.
//!
//! Run with: cargo run --example binary_suffix

use dfakit::{dfa, Dfa, DfaBuilder, DfaError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Binary Suffix Example ===\n");

    // Step by step
    let mut manual = Dfa::create("01".chars(), 2, 0, [1])?;
    println!("Created: {:?}", manual.phase());
    for state in 0..2 {
        manual.add_transition(state, '0', 0)?;
        manual.add_transition(state, '1', 1)?;
    }
    println!("Filled:  {:?}", manual.phase());

    // Fluent builder
    let built = DfaBuilder::new()
        .alphabet("01".chars())
        .states(2)
        .initial(0)
        .final_state(1)
        .row(0, [('0', 0), ('1', 1)])
        .row(1, [('0', 0), ('1', 1)])
        .require_complete()
        .build()?;

    // Declarative macro
    let declared = dfa! {
        alphabet: "01",
        states: 2,
        initial: 0,
        final: [1],
        transitions: {
            0: ['0' => 0, '1' => 1],
            1: ['0' => 0, '1' => 1],
        }
    }?;

    println!();
    for input in ["101", "100", "", "2"] {
        let verdicts = [&manual, &built, &declared].map(|dfa| dfa.accepts(input));
        match &verdicts[0] {
            Ok(true) => println!("{input:>5?}: accepted"),
            Ok(false) => println!("{input:>5?}: not accepted"),
            Err(DfaError::InvalidCharacter { symbol, .. }) => {
                println!("{input:>5?}: invalid character {symbol:?}")
            }
            Err(e) => println!("{input:>5?}: {e}"),
        }
        assert!(verdicts.iter().all(|v| v == &verdicts[0]));
    }

    let trace = declared.trace("0110")?;
    println!("\nPath for \"0110\": {:?}", trace.get_path());

    println!("\n=== Example Complete ===");
    Ok(())
}
