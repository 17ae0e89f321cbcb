use crate::core::{RegionResult, ReportSink, ValidationOutcome};

/// Renders findings as human-readable lines on stdout. Valid regions are
/// only logged at debug level to keep the default output to the findings
/// and the verdict.
#[derive(Debug, Default, Clone)]
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn report(&self, result: &RegionResult) {
        if result.is_valid() {
            tracing::debug!("{} is valid", result.kind);
            return;
        }
        let digits = result
            .duplicates
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        tracing::warn!("duplicate digits in {}: {}", result.kind, digits);
        println!("{} is invalid (duplicate: {})", result.kind, digits);
    }

    fn report_pass(&self, pass: &str, invalid: usize) {
        if invalid == 0 {
            println!("All {} are valid.", pass);
        } else {
            println!("Errors found in {} {}.", invalid, pass);
        }
    }

    fn report_final(&self, outcome: &ValidationOutcome) {
        if outcome.is_valid() {
            println!("Sudoku solution is valid!");
        } else {
            println!("Sudoku solution is not valid.");
        }
    }
}
