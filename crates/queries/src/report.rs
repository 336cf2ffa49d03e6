//! The stock analytical report over a catalog.
//!
//! These are the six fixed questions the product answers out of the box.
//! Each one is an instance of the generic engine in [`crate::rank`] and
//! [`crate::aggregate`]; nothing here knows how to print — rendering is the
//! consumer's job.

use crate::{aggregate, rank};
use catalog::{Catalog, Film};
use serde::Serialize;

/// Results of the six stock queries.
///
/// Films are cloned out of the catalog so the report owns its data and can
/// outlive the collection it was computed from. Optional aggregates stay
/// optional: an absent average is reported as absent, never as zero.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogReport {
    /// Ten highest-scored films.
    pub top_rated: Vec<Film>,
    /// Eight highest-scored films carrying the "Action" genre.
    pub top_action: Vec<Film>,
    /// Five longest films carrying the "Fantasy" genre.
    pub longest_fantasy: Vec<Film>,
    /// Mean duration of "Family" films with a known duration, in minutes.
    pub family_avg_duration: Option<f64>,
    /// Mean score of "Sci-Fi" films with a known score.
    pub sci_fi_avg_score: Option<f64>,
    /// Highest-scored film whose rating label is exactly "PG-13".
    pub best_pg13: Option<Film>,
}

impl CatalogReport {
    /// Compute the report. Read-only over the catalog; repeated calls on an
    /// unmodified catalog return the same answers.
    pub fn build(catalog: &Catalog) -> Self {
        tracing::debug!(films = catalog.len(), "building catalog report");

        Self {
            top_rated: owned(rank::top_n(catalog, |f: &Film| f.score, 10)),
            top_action: owned(rank::top_n_matching(
                catalog,
                |f| f.has_genre("Action"),
                |f| f.score,
                8,
            )),
            longest_fantasy: owned(rank::top_n_matching(
                catalog,
                |f| f.has_genre("Fantasy"),
                |f| f.duration,
                5,
            )),
            family_avg_duration: aggregate::group_average(
                catalog,
                |f| f.has_genre("Family"),
                |f| f.duration.map(f64::from),
            ),
            sci_fi_avg_score: aggregate::group_average(
                catalog,
                |f| f.has_genre("Sci-Fi"),
                |f| f.score,
            ),
            best_pg13: aggregate::max_matching(catalog, |f| f.rating == "PG-13", |f| f.score)
                .cloned(),
        }
    }
}

fn owned(films: Vec<&Film>) -> Vec<Film> {
    films.into_iter().cloned().collect()
}
