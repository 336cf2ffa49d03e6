//! Line and field parsers for the 7-column film metadata format.
//!
//! Wire format, one film per line, comma-delimited with no quoting or
//! escaping support:
//!
//! ```text
//! director,duration,genres,title,rating,year,score
//! ```
//!
//! The column order (director before title) is part of the external contract
//! and must stay as-is. Because there is no quoting, a comma inside a
//! free-text field is indistinguishable from a delimiter; such rows fail the
//! arity check and are dropped. Known limitation of the format.

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::types::Film;
use std::collections::BTreeSet;
use std::str::FromStr;

/// Number of comma-separated fields a film row must have.
pub const FIELD_COUNT: usize = 7;

/// Parse one numeric token, integer or real.
///
/// An empty token is an ordinary missing value and reports nothing. A
/// non-empty token that fails to parse is also missing, but emits exactly one
/// diagnostic naming the column and the rejected text. Either way the line
/// survives.
fn parse_numeric<T: FromStr>(
    token: &str,
    field: &'static str,
    sink: &mut dyn DiagnosticSink,
) -> Option<T> {
    if token.is_empty() {
        return None;
    }
    match token.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            sink.report(Diagnostic {
                field,
                token: token.to_string(),
            });
            None
        }
    }
}

/// Split a pipe-delimited genre token into a label set.
///
/// An empty token is an empty set, not a missing value.
fn parse_genres(token: &str) -> BTreeSet<String> {
    if token.is_empty() {
        return BTreeSet::new();
    }
    token.split('|').map(str::to_string).collect()
}

/// Parse one raw line (no trailing newline) into a [`Film`].
///
/// A line without exactly [`FIELD_COUNT`] fields yields `None` with no
/// diagnostic: structurally wrong rows are dropped, not fatal. Text fields
/// are taken verbatim, untrimmed; numeric fields go through the tolerant
/// parser above.
pub fn parse_film(line: &str, sink: &mut dyn DiagnosticSink) -> Option<Film> {
    let tokens: Vec<&str> = line.split(',').collect();
    if tokens.len() != FIELD_COUNT {
        return None;
    }

    Some(Film {
        director: tokens[0].to_string(),
        duration: parse_numeric(tokens[1], "duration", sink),
        genres: parse_genres(tokens[2]),
        title: tokens[3].to_string(),
        rating: tokens[4].to_string(),
        year: parse_numeric(tokens[5], "year", sink),
        score: parse_numeric(tokens[6], "score", sink),
    })
}
