// src/report.rs
use std::io::Write;

/// How many endpoints the error ranking keeps.
pub const TOP_ENDPOINTS: usize = 3;

/// Final aggregation result, produced once after input exhaustion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub total_requests: u64,
    pub error_requests: u64,
    /// (endpoint, error count) sorted by count descending; equal counts keep
    /// first-error-seen order. At most `TOP_ENDPOINTS` entries.
    pub top_errors: Vec<(String, u64)>,
}

impl Report {
    /// Render the report in its fixed text layout.
    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out)?;
        writeln!(out, "Log Analysis Results")?;
        writeln!(out, "{}", "-".repeat(20))?;
        writeln!(out, "Total Requests: {}", self.total_requests)?;
        writeln!(out, "Error Requests: {}", self.error_requests)?;
        writeln!(out)?;
        writeln!(out, "Top {} Endpoints with Most Errors:", TOP_ENDPOINTS)?;
        for (endpoint, count) in &self.top_errors {
            writeln!(out, "  {}: {} errors", endpoint, count)?;
        }
        Ok(())
    }
}
