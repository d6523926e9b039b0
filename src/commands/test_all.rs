//! Test every secret - comprehensive solver evaluation
//!
//! Plays one game per code in the space and gathers statistics.

use crate::core::{CodeSpace, SecretCode};
use crate::solver::{SecretOracle, Session, SessionConfig, SessionError};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::error;

/// Result from playing a single secret
#[derive(Debug, Clone)]
pub struct SecretTestResult {
    pub secret: SecretCode,
    pub num_guesses: usize,
    pub success: bool,
    pub duration: Duration,
}

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_secrets: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: HashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub worst_secrets: Vec<(SecretCode, usize)>,
}

/// Play every secret in the configured space (or the first `limit`)
///
/// # Errors
///
/// Returns an error if the session configuration is invalid.
pub fn run_test_all(
    config: &SessionConfig,
    limit: Option<usize>,
    show_progress: bool,
) -> Result<TestAllStatistics, SessionError> {
    config.validate()?;

    let space = CodeSpace::new(&config.colors, config.num_pegs);
    let secrets: Vec<&SecretCode> = space
        .secrets
        .iter()
        .take(limit.unwrap_or(space.secrets.len()))
        .collect();

    let pb = if show_progress {
        println!("🎯 Testing {} secrets...", secrets.len());
        let pb = ProgressBar::new(secrets.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut results = Vec::with_capacity(secrets.len());
    let mut guess_distribution: HashMap<usize, usize> = HashMap::new();
    let total_start = Instant::now();

    for (idx, &secret) in secrets.iter().enumerate() {
        let start = Instant::now();
        let mut session = Session::new(config.clone())?;

        let (num_guesses, success) = match session.play(&mut SecretOracle::new(secret.clone())) {
            Ok(summary) => (summary.total_guesses, true),
            Err(e) => {
                error!(%secret, error = %e, "solver failed");
                (session.rounds(), false)
            }
        };

        if success {
            *guess_distribution.entry(num_guesses).or_insert(0) += 1;
        }

        results.push(SecretTestResult {
            secret: secret.clone(),
            num_guesses,
            success,
            duration: start.elapsed(),
        });

        if idx % 10 == 0 {
            let avg =
                results.iter().map(|r| r.num_guesses).sum::<usize>() as f64 / results.len() as f64;
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let total_time = total_start.elapsed();
    let solved: Vec<&SecretTestResult> = results.iter().filter(|r| r.success).collect();
    let total_guesses: usize = solved.iter().map(|r| r.num_guesses).sum();

    let mut worst_secrets: Vec<(SecretCode, usize)> = solved
        .iter()
        .map(|r| (r.secret.clone(), r.num_guesses))
        .collect();
    worst_secrets.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    worst_secrets.truncate(10);

    Ok(TestAllStatistics {
        total_secrets: results.len(),
        solved: solved.len(),
        failed: results.len() - solved.len(),
        guess_distribution,
        total_time,
        average_guesses: if solved.is_empty() {
            0.0
        } else {
            total_guesses as f64 / solved.len() as f64
        },
        max_guesses: solved.iter().map(|r| r.num_guesses).max().unwrap_or(0),
        min_guesses: solved.iter().map(|r| r.num_guesses).min().unwrap_or(0),
        worst_secrets,
    })
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total secrets tested: {}", stats.total_secrets);
    println!(
        "  Successfully solved:  {} {}",
        stats.solved,
        format!(
            "({:.1}%)",
            stats.solved as f64 / stats.total_secrets.max(1) as f64 * 100.0
        )
        .green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:      {} {}",
            stats.failed,
            "(scoring inconsistency, this is a bug)".red()
        );
    }
    println!(
        "  Average guesses:      {}",
        format!("{:.3}", stats.average_guesses).bright_yellow().bold()
    );
    println!("  Best / worst:         {} / {}", stats.min_guesses, stats.max_guesses);
    println!("  Total time:           {:.2}s", stats.total_time.as_secs_f64());
    println!(
        "  Time per secret:      {:.1}ms",
        stats.total_time.as_millis() as f64 / stats.total_secrets.max(1) as f64
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    crate::output::print_distribution(&stats.guess_distribution, stats.solved);

    if !stats.worst_secrets.is_empty() {
        println!("\n😰 {}", "Hardest Secrets".yellow().bold());
        for (secret, guesses) in stats.worst_secrets.iter().take(5) {
            println!("  {} ({} guesses)", secret.to_string().yellow(), guesses);
        }
    }
}
