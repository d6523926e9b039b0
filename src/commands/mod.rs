//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, analyze_code};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use simple::{PromptScorer, run_simple};
pub use solve::{SolveConfig, SolveResult, solve_code};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};

use crate::core::Code;
use crate::solver::SessionConfig;

/// Parse a code and check it fits the session's palette and peg count
///
/// # Errors
///
/// Returns a message describing why the code cannot be played.
pub fn parse_code(text: &str, config: &SessionConfig) -> Result<Code, String> {
    let code: Code = text.parse().map_err(|e| format!("Invalid code: {e}"))?;

    if code.len() != config.num_pegs {
        return Err(format!(
            "Code has {} pegs, expected {}",
            code.len(),
            config.num_pegs
        ));
    }
    if let Some(peg) = code.pegs().iter().find(|p| !config.colors.contains(p)) {
        return Err(format!("Code uses {peg}, which is not in the palette"));
    }

    Ok(code)
}
