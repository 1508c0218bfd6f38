//! Conversion of `qstat`/`qsub` text output into typed records.
//!
//! Nothing here performs I/O: callers hand over the lines a remote command
//! printed, stdout first and stderr after.

use crate::{
    exception::{ParseException, ParseResult},
    model::{
        entity::JobRecord,
        vo::{ColumnLayout, JobIdentifier, JobState},
    },
};

/// Parse a whole status listing laid out as `layout`.
pub fn parse_table<S: AsRef<str>>(
    layout: &ColumnLayout,
    lines: &[S],
) -> ParseResult<Vec<JobRecord>> {
    if layout.empty_below.is_some_and(|n| lines.len() < n) {
        return Ok(vec![]);
    }
    if lines.len() < layout.min_lines {
        return Err(ParseException::MalformedOutput {
            reason: format!(
                "expected at least {} lines, got {}",
                layout.min_lines,
                lines.len()
            ),
            output: join(lines),
        });
    }

    lines
        .iter()
        .skip(layout.header_lines)
        .map(|line| parse_row(layout, line.as_ref()))
        .collect()
}

/// Parse one job row. Rows missing a column are errors, never skipped.
pub fn parse_row(layout: &ColumnLayout, line: &str) -> ParseResult<JobRecord> {
    let columns: Vec<&str> = line.split_whitespace().collect();
    let width = layout.width();
    if columns.len() < width {
        return Err(ParseException::MalformedOutput {
            reason: format!("job row has {} columns, expected {width}", columns.len()),
            output: line.to_owned(),
        });
    }

    Ok(JobRecord {
        id: JobIdentifier::parse(columns[layout.id]).bare(),
        state: JobState::from(columns[layout.state]),
        name: columns[layout.name].to_owned(),
        elapsed_time: columns[layout.elapsed_time].to_owned(),
        owner: layout.owner.map(|i| columns[i].to_owned()),
    })
}

/// Parse the `<id>.<signature>` acknowledgment printed by `qsub`.
pub fn parse_submission(output: &str) -> ParseResult<JobIdentifier> {
    let error = || ParseException::Submission {
        output: output.to_owned(),
    };
    let line = output.lines().map(str::trim).find(|l| !l.is_empty()).ok_or_else(error)?;
    // one token, `<id>.<signature>`; error text from qsub has spaces
    if line.contains(char::is_whitespace) {
        return Err(error());
    }
    match line.split_once('.') {
        Some((id, _)) if !id.is_empty() => Ok(JobIdentifier::parse(line)),
        _ => Err(error()),
    }
}

/// Whether any line carries `marker`, the scheduler's message for an unknown
/// job. An empty marker never matches.
pub fn reports_unknown_job<S: AsRef<str>>(lines: &[S], marker: &str) -> bool {
    !marker.is_empty() && lines.iter().any(|line| line.as_ref().contains(marker))
}

/// Bare ids of the lines in `source` that carry `signature` after their id.
pub fn strip_job_ids(source: &str, signature: &str) -> Vec<String> {
    source
        .lines()
        .filter(|line| line.find(signature).is_some_and(|pos| pos > 0))
        .filter_map(|line| line.split('.').next())
        .map(str::to_owned)
        .collect()
}

fn join<S: AsRef<str>>(lines: &[S]) -> String {
    lines.iter().map(AsRef::as_ref).collect::<Vec<_>>().join("\n")
}
