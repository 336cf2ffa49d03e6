//! Bulk ingestion: raw lines in, deduplicated [`Catalog`] out.
//!
//! Two entry points, both on [`Catalog`]:
//! - [`Catalog::from_lines`] for any in-memory line source (tests, stdin)
//! - [`Catalog::from_path`] for a file on disk, parsing lines in parallel
//!
//! The first line of either source is assumed to be a header and skipped
//! regardless of its content. Malformed lines are dropped, bad numeric
//! tokens go through the diagnostics sink, and structurally identical rows
//! collapse into one film.

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::{Catalog, Film};
use rayon::prelude::*;
use std::fs::File;
use std::io::Read;
use std::path::Path;

impl Catalog {
    /// Build a catalog from raw lines, sequentially.
    pub fn from_lines<I, S>(lines: I, sink: &mut dyn DiagnosticSink) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut catalog = Catalog::new();
        for line in lines.into_iter().skip(1) {
            if let Some(film) = parser::parse_film(line.as_ref(), sink) {
                catalog.insert(film);
            }
        }
        catalog
    }

    /// Load a catalog from a file on disk.
    ///
    /// Each line's parse is independent, so lines are parsed in parallel and
    /// the per-line diagnostics are replayed into `sink` in input order once
    /// the parse finishes — observably the same as the sequential path.
    ///
    /// The only error is a source that cannot be opened or read. That is
    /// fatal to this call, not to the process: the caller decides whether to
    /// proceed with an empty catalog.
    pub fn from_path(path: &Path, sink: &mut dyn DiagnosticSink) -> Result<Self> {
        let lines = read_lines_latin1(path)?;

        let parsed: Vec<(Option<Film>, Vec<Diagnostic>)> = lines
            .par_iter()
            .skip(1) // header
            .map(|line| {
                let mut diagnostics = Vec::new();
                let film = parser::parse_film(line, &mut diagnostics);
                (film, diagnostics)
            })
            .collect();

        let mut catalog = Catalog::new();
        for (film, diagnostics) in parsed {
            for diagnostic in diagnostics {
                sink.report(diagnostic);
            }
            if let Some(film) = film {
                catalog.insert(film);
            }
        }

        tracing::debug!(
            path = %path.display(),
            lines = lines.len(),
            films = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }
}

/// Read a file as lines, tolerating ISO-8859-1 (Latin-1) content.
///
/// Movie metadata exports are frequently Latin-1 rather than UTF-8. Every
/// Latin-1 byte maps directly to the Unicode code point of the same value,
/// so decoding is a straight byte-to-char widening.
fn read_lines_latin1(path: &Path) -> Result<Vec<String>> {
    let unreadable = |source| CatalogError::Unreadable {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(unreadable)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(unreadable)?;

    let content: String = bytes.iter().map(|&b| b as char).collect();
    Ok(content.lines().map(str::to_string).collect())
}
