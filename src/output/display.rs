//! Display functions for command results

use super::formatters::{create_progress_bar, highlight_step, ladder_line};
use crate::commands::{BenchmarkResult, CheckResult, NeighborsResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a ladder
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Ladder: {} → {}",
        result.start.trim().to_uppercase().bright_yellow().bold(),
        result.end.trim().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    let mut previous: Option<&str> = None;
    for (i, word) in result.ladder.iter().enumerate() {
        println!("  {:>2}. {}", i, highlight_step(previous, word));
        previous = Some(word.as_str());
    }

    if verbose {
        println!("\n  Levels expanded: {}", result.stats.levels);
        println!("  Nodes created:   {}", result.stats.nodes);
        println!("  Words visited:   {}", result.stats.visited);
        println!("  Time taken:      {:.3}ms", result.duration.as_secs_f64() * 1000.0);
    }

    println!();
    let steps = result.steps();
    println!(
        "{}",
        format!(
            "✅ {} {}",
            steps,
            if steps == 1 { "step" } else { "steps" }
        )
        .green()
        .bold()
    );
    println!();
}

/// Print the neighbours of a word
pub fn print_neighbors_result(result: &NeighborsResult) {
    let marker = if result.in_dictionary {
        "in dictionary".green()
    } else {
        "not in dictionary".yellow()
    };
    println!(
        "\n{} ({marker}): {} neighbour{}",
        result.word.to_uppercase().bright_yellow().bold(),
        result.neighbors.len(),
        if result.neighbors.len() == 1 { "" } else { "s" }
    );
    for neighbor in &result.neighbors {
        println!("  • {}", highlight_step(Some(result.word.as_str()), neighbor));
    }
    println!();
}

/// Print the result of checking words
pub fn print_check_result(result: &CheckResult) {
    let verdict = |valid: bool| {
        if valid {
            "✓ valid".green()
        } else {
            "✗ not in dictionary".red()
        }
    };

    println!(
        "{}: {}",
        result.word.to_uppercase().bright_white().bold(),
        verdict(result.valid)
    );
    if let Some(other) = &result.other {
        println!(
            "{}: {}",
            other.word.to_uppercase().bright_white().bold(),
            verdict(other.valid)
        );
        if other.adjacent {
            println!("{}", "One letter apart".green());
        } else {
            println!("{}", "Not one letter apart".yellow());
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Pairs tested:     {}", result.total_pairs);
    println!(
        "   Ladders found:    {}",
        format!("{}", result.found).green()
    );
    println!(
        "   No ladder:        {}",
        format!("{}", result.not_found).yellow()
    );
    println!(
        "   Average steps:    {}",
        format!("{:.2}", result.average_steps)
            .bright_yellow()
            .bold()
    );
    println!("   Shortest:         {}", result.min_steps);
    println!("   Longest:          {}", result.max_steps);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Searches/second:  {:.1}", result.searches_per_second);

    if result.found > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for steps in result.min_steps..=result.max_steps {
            if let Some(&count) = result.distribution.get(&steps) {
                let pct = (count as f64 / result.found as f64) * 100.0;
                let bar = create_progress_bar(pct, 100.0, 40);
                println!("   {steps:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
            }
        }
    }

    if let Some(longest) = &result.longest {
        println!("\n🪜 {}", "Longest ladder:".bright_cyan().bold());
        println!("   {}", ladder_line(longest));
    }
}
