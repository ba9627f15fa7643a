// src/aggregator.rs
use indexmap::IndexMap;
use std::io::{BufRead, Write};

use crate::error::SourceError;
use crate::record::LogRecord;
use crate::report::{Report, TOP_ENDPOINTS};

/// Running counters, owned by one `LogAggregator` per run and mutated in
/// place as lines are processed. Rejected lines never touch it.
#[derive(Debug, Default)]
pub struct AggregateState {
    /// Count of successfully parsed records
    pub total_requests: u64,
    /// Count of parsed records with status_code >= 400
    pub error_requests: u64,
    /// Error counts per endpoint, in first-error-seen order. The insertion
    /// order is what makes the top-N tie-break deterministic: a stable sort
    /// over these entries keeps earlier endpoints ahead on equal counts.
    pub error_counts: IndexMap<String, u64>,
}

/// What happened to one raw line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// Counted into the aggregate state
    Counted,
    /// Empty or whitespace-only, skipped without a warning
    Blank,
    /// Rejected with a warning on the diagnostic stream
    Rejected,
}

/// Converts a raw line stream into validated records and maintains running
/// aggregates; `finalize` produces the ranked summary.
#[derive(Debug, Default)]
pub struct LogAggregator {
    state: AggregateState,
}

impl LogAggregator {
    pub fn new() -> Self {
        LogAggregator {
            state: AggregateState::default(),
        }
    }

    pub fn state(&self) -> &AggregateState {
        &self.state
    }

    /// Feed one raw line. Parse and validation failures become a single
    /// warning line on `warnings` and leave the state untouched; they never
    /// abort processing of subsequent lines.
    pub fn process_line<W: Write>(
        &mut self,
        raw: &str,
        line_number: usize,
        warnings: &mut W,
    ) -> Result<LineOutcome, SourceError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(LineOutcome::Blank);
        }

        let record = match LogRecord::parse_line(trimmed) {
            Ok(record) => record,
            Err(issue) => {
                writeln!(warnings, "logtally: line {}: {}", line_number, issue)?;
                return Ok(LineOutcome::Rejected);
            }
        };

        self.state.total_requests += 1;
        if record.is_error() {
            self.state.error_requests += 1;
            *self.state.error_counts.entry(record.endpoint).or_insert(0) += 1;
        }

        Ok(LineOutcome::Counted)
    }

    /// Process an entire line source in input order. A read failure is fatal
    /// and propagates; per-line problems only produce warnings.
    pub fn process_stream<R: BufRead, W: Write>(
        &mut self,
        input: R,
        warnings: &mut W,
    ) -> Result<(), SourceError> {
        for (index, line_result) in input.lines().enumerate() {
            let line = line_result?;
            self.process_line(&line, index + 1, warnings)?;
        }
        Ok(())
    }

    /// Produce the final ranked report. Consumes the aggregator so the
    /// report always reflects input exhaustion, never a mid-stream snapshot.
    pub fn finalize(self) -> Report {
        let AggregateState {
            total_requests,
            error_requests,
            error_counts,
        } = self.state;

        let mut top_errors: Vec<(String, u64)> = error_counts.into_iter().collect();
        // Stable sort over first-seen order breaks ties deterministically
        top_errors.sort_by(|a, b| b.1.cmp(&a.1));
        top_errors.truncate(TOP_ENDPOINTS);

        Report {
            total_requests,
            error_requests,
            top_errors,
        }
    }
}
