use std::io::{self, Write};
use std::num::NonZeroUsize;

use serde::Serialize;

use crate::search::{Hit, SearchOutcome};

#[derive(Debug, Serialize)]
pub struct ResultView<'a> {
    pub program: &'a str,
    pub command: &'a str,
    pub shortcut: &'a str,
    pub description: &'a str,
    pub score: u32,
}

impl<'a> From<&Hit<'a>> for ResultView<'a> {
    fn from(hit: &Hit<'a>) -> Self {
        ResultView {
            program: &hit.record.program,
            command: &hit.record.command,
            shortcut: &hit.record.shortcut,
            description: &hit.record.description,
            score: hit.score,
        }
    }
}

/// JSON shape shared by `h --output json` and the HTTP API.
#[derive(Debug, Serialize)]
pub struct SearchResponse<'a> {
    pub query: &'a str,
    pub results: Vec<ResultView<'a>>,
}

impl<'a> SearchResponse<'a> {
    pub fn new(
        query: &'a str,
        outcome: &SearchOutcome<'a>,
        limit: Option<NonZeroUsize>,
    ) -> Self {
        SearchResponse {
            query,
            results: outcome
                .hits()
                .iter()
                .take(max_results(limit))
                .map(ResultView::from)
                .collect(),
        }
    }
}

// A zero limit would make a hit look like no results.
fn max_results(limit: Option<NonZeroUsize>) -> usize {
    limit.map_or(usize::MAX, NonZeroUsize::get)
}

/// One record per line, or a single "no results" line.
pub fn write_plain<W: Write>(
    w: &mut W,
    query: &str,
    outcome: &SearchOutcome<'_>,
    limit: Option<NonZeroUsize>,
) -> io::Result<()> {
    if outcome.is_no_results() {
        return writeln!(w, "no results for \"{query}\"");
    }
    for record in outcome.records().take(max_results(limit)) {
        writeln!(w, "{record}")?;
    }
    Ok(())
}

pub fn write_json<W: Write>(
    w: &mut W,
    query: &str,
    outcome: &SearchOutcome<'_>,
    limit: Option<NonZeroUsize>,
) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, &SearchResponse::new(query, outcome, limit))?;
    writeln!(w)
}
