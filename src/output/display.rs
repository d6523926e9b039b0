//! Display functions for command results

use super::formatters::{score_to_pegs, share_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use colored::Colorize;
use std::collections::HashMap;

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, details: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, round) in result.rounds.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}  {}",
            i + 1,
            round.guess.code().letters(),
            score_to_pegs(round.score, result.num_pegs),
            round.score.to_string().bright_black()
        );

        if details {
            println!(
                "  Candidates: {} → {}",
                round.candidates_before, round.candidates_after
            );
            println!("  Quality:    {} expected discards", round.quality);
        }
    }

    println!();
    println!(
        "{}",
        format!("✅ Guessed after {} guesses!", result.total_guesses())
            .green()
            .bold()
    );
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.guess.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let num_pegs = result.guess.pegs().len();
    let bar = share_bar(result.quality, result.total_candidates, 30);

    println!("\n📊 Against {} possible secrets:", result.total_candidates);
    println!(
        "   Quality:     [{}] {}",
        bar.green(),
        format!(
            "{} expected discards ({:.1}%)",
            result.quality,
            result.discard_percent()
        )
        .bright_yellow()
    );
    println!("   Worst case:  {} candidates remain", result.largest_bucket);
    println!("   Rank:        #{} among all guesses", result.rank);

    println!("\n📈 {}", "Score buckets:".bright_cyan().bold());
    for (score, count) in &result.buckets {
        println!(
            "   {} {:>15} {:6}",
            score_to_pegs(*score, num_pegs),
            score.to_string(),
            count
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    if result.failed > 0 {
        println!(
            "   Failed:           {}",
            result.failed.to_string().red().bold()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        result.min_guesses.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_guesses.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!(
        "   Time per guess:   {:.2}ms",
        result.average_time_per_guess.as_secs_f64() * 1000.0
    );

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    print_distribution(&result.distribution, result.solved);
}

/// Print a guess-count histogram, one row per count in ascending order
pub fn print_distribution(distribution: &HashMap<usize, usize>, total: usize) {
    let mut counts: Vec<(&usize, &usize)> = distribution.iter().collect();
    counts.sort_unstable();

    for (guesses, count) in counts {
        let pct = *count as f64 / total.max(1) as f64 * 100.0;
        let bar = share_bar(*count, total, 40);
        println!(
            "   {guesses:2}: {} {count:6} ({pct:5.1}%)",
            bar.green()
        );
    }
}
