//! Simple interactive CLI mode
//!
//! Reads start/end pairs from the terminal and prints each ladder.

use super::neighbors::find_neighbors;
use super::solve::{SolveConfig, solve_ladder};
use crate::dictionary::Dictionary;
use crate::output::{print_neighbors_result, print_solve_result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// One line of user input, parsed
#[derive(Debug, PartialEq, Eq)]
enum Request<'a> {
    Quit,
    Help,
    Blank,
    Neighbors(&'a str),
    Solve(&'a str, &'a str),
    Unknown,
}

fn parse_request(line: &str) -> Request<'_> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [] => Request::Blank,
        ["quit" | "q" | "exit"] => Request::Quit,
        ["help" | "h" | "?"] => Request::Help,
        ["n" | "neighbors", word] => Request::Neighbors(*word),
        [start, end] => Request::Solve(*start, *end),
        _ => Request::Unknown,
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading from stdin or writing the prompt fails.
pub fn run_simple(dictionary: &Dictionary) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Word Ladder - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Dictionary: {} words. Enter two words of the same length to climb",
        dictionary.len()
    );
    println!("from one to the other, one letter at a time.\n");
    print_help();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} ", "ladder>".bright_cyan().bold());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line?;

        match parse_request(&line) {
            Request::Quit => {
                println!("\n👋 Bye!\n");
                return Ok(());
            }
            Request::Help => print_help(),
            Request::Blank => {}
            Request::Neighbors(word) => match find_neighbors(word, dictionary) {
                Ok(result) => print_neighbors_result(&result),
                Err(e) => println!("❌ {e}\n"),
            },
            Request::Solve(start, end) => {
                match solve_ladder(SolveConfig::new(start, end), dictionary) {
                    Ok(result) => print_solve_result(&result, false),
                    Err(e) => println!("❌ {e}\n"),
                }
            }
            Request::Unknown => {
                println!("❌ Expected two words, 'n <word>', 'help' or 'quit'\n");
            }
        }
    }
}

fn print_help() {
    println!("  <start> <end>   find the shortest ladder");
    println!("  n <word>        list words one letter away");
    println!("  help            show this help");
    println!("  quit            leave\n");
}
