//! Interactive Automaton
//!
//! Console front end: prompts for a definition, then checks strings until
//! told to stop.
//!
//! Key concepts:
//! - The library knows nothing about prompts; this file is a thin adapter
//! - `missing_transitions` drives the table prompts
//! - Errors are reported separately from "Not accepted"
//!
//! Run with: cargo run --example interactive

use dfakit::{Dfa, DfaError};
use std::error::Error;
use std::io::{self, BufRead, Write};

/// Whitespace-separated token reader over stdin.
struct Tokens<R> {
    input: R,
    pending: Vec<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: Vec::new(),
        }
    }

    fn next(&mut self) -> Result<String, Box<dyn Error>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err("unexpected end of input".into());
            }
            self.pending = line.split_whitespace().rev().map(String::from).collect();
        }
        Ok(self.pending.pop().unwrap_or_default())
    }

    fn number(&mut self) -> Result<usize, Box<dyn Error>> {
        Ok(self.next()?.parse()?)
    }
}

fn prompt(text: &str) -> io::Result<()> {
    print!("{text}");
    io::stdout().flush()
}

fn main() -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let mut tokens = Tokens::new(stdin.lock());

    prompt("Enter all the unique alphabets in a single line:\n")?;
    let alphabet = tokens.next()?;
    prompt("Enter number of states: ")?;
    let num_states = tokens.number()?;
    prompt("Enter initial state: ")?;
    let initial = tokens.number()?;
    prompt("Enter number of final states: ")?;
    let count = tokens.number()?;

    let mut finals = Vec::with_capacity(count);
    for i in 0..count {
        prompt(&format!("Enter final state {}: ", i + 1))?;
        finals.push(tokens.number()?);
    }

    let mut dfa = Dfa::create(alphabet.chars(), num_states, initial, finals)?;

    println!("Enter transition table:");
    while let Some(&(state, symbol)) = dfa.missing_transitions().first() {
        if dfa.alphabet().index_of(symbol) == Some(0) {
            println!("State {state}");
        }
        prompt(&format!("\tInput {symbol}: "))?;
        let target = tokens.number()?;
        if let Err(e) = dfa.add_transition(state, symbol, target) {
            println!("\t{e}, try again");
        }
    }
    println!();

    loop {
        prompt("Enter string to check:\n")?;
        let input = tokens.next()?;
        match dfa.accepts(&input) {
            Ok(true) => println!("Accepted"),
            Ok(false) => println!("Not accepted"),
            Err(e @ DfaError::InvalidCharacter { .. }) => println!("Error: {e}"),
            Err(e) => return Err(e.into()),
        }

        prompt("Do you want to continue? (y/n)\n")?;
        let answer = tokens.next()?;
        if !answer.starts_with(['y', 'Y']) {
            break;
        }
    }

    Ok(())
}
