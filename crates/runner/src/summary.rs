//! Pass/fail counts for a completed run.

use std::fmt;

/// Aggregated outcome of a run.
///
/// A slot passes when it is not the failure sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    /// Entries drained by the run.
    pub total: usize,

    /// Entries whose slot holds a result.
    pub passed: usize,

    /// Entries whose slot holds the sentinel.
    pub failed: usize,
}

impl Summary {
    /// Count the slots of a results sequence.
    pub fn from_results<T>(results: &[Option<T>]) -> Self {
        let passed = results.iter().filter(|slot| slot.is_some()).count();
        Self {
            total: results.len(),
            passed,
            failed: results.len() - passed,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Completed {} tests ({} passed, {} failed)",
            self.total, self.passed, self.failed
        )
    }
}
