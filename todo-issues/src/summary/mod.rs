//! Per-issue results and the run totals reported as action outputs.

mod result;
mod run_summary;

pub use result::ProcessingResult;
pub use run_summary::RunSummary;
