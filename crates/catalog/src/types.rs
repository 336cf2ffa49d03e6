//! Core domain types for the film catalog.
//!
//! This module defines the two structures everything else works with:
//! - [`Film`], one validated record from the metadata export
//! - [`Catalog`], the deduplicated collection the query engine reads

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::collections::hash_set;
use std::hash::{Hash, Hasher};

/// One validated film record.
///
/// Built only by the line parser during ingestion, never mutated afterwards.
/// Numeric fields that were absent or unparseable in the input are `None`,
/// which is distinct from any legitimate value — a zero-minute duration is
/// not the same thing as an unknown one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Film {
    pub title: String,
    pub director: String,
    /// Runtime in minutes, when the source supplied one.
    pub duration: Option<u32>,
    /// Genre labels, case-sensitive, order-irrelevant. May be empty.
    ///
    /// A `BTreeSet` rather than a `HashSet` so the whole record can
    /// implement `Hash` deterministically.
    pub genres: BTreeSet<String>,
    /// Content-rating label ("PG-13", "R", ...). Not validated against an
    /// enum; the dataset's vocabulary is open-ended.
    pub rating: String,
    /// Release year, when the source supplied one.
    pub year: Option<u16>,
    /// Quality score, when the source supplied one.
    pub score: Option<f64>,
}

impl Film {
    /// Whether this film carries the given genre label (case-sensitive).
    pub fn has_genre(&self, label: &str) -> bool {
        self.genres.contains(label)
    }

    /// Re-serialize the record into its seven wire tokens, in column order:
    /// director, duration, genres, title, rating, year, score.
    ///
    /// Missing numerics become empty tokens. Genre labels re-join in
    /// lexicographic order, the only order the set retains.
    pub fn to_csv_fields(&self) -> [String; 7] {
        [
            self.director.clone(),
            self.duration.map(|d| d.to_string()).unwrap_or_default(),
            self.genres.iter().cloned().collect::<Vec<_>>().join("|"),
            self.title.clone(),
            self.rating.clone(),
            self.year.map(|y| y.to_string()).unwrap_or_default(),
            self.score.map(|s| s.to_string()).unwrap_or_default(),
        ]
    }
}

// Equality and hashing are structural over all seven fields. f64 implements
// neither Eq nor Hash, so the score participates through its bit pattern;
// two records parsed from identical lines always produce identical bits.
impl PartialEq for Film {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.director == other.director
            && self.duration == other.duration
            && self.genres == other.genres
            && self.rating == other.rating
            && self.year == other.year
            && self.score.map(f64::to_bits) == other.score.map(f64::to_bits)
    }
}

impl Eq for Film {}

impl Hash for Film {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
        self.director.hash(state);
        self.duration.hash(state);
        self.genres.hash(state);
        self.rating.hash(state);
        self.year.hash(state);
        self.score.map(f64::to_bits).hash(state);
    }
}

/// The deduplicated film collection.
///
/// Keyed by full structural equality: two rows identical in every field are
/// one element, even if they happen to describe different real films. That
/// is the collection's contract, not an accident. Iteration order is
/// unspecified, but stable within one run for an unmodified catalog, which
/// is what the query engine's tie-breaking relies on.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    films: HashSet<Film>,
}

impl Catalog {
    /// Creates a new, empty catalog.
    pub fn new() -> Self {
        Self {
            films: HashSet::new(),
        }
    }

    /// Insert a film, collapsing silently onto any structurally identical
    /// entry. Returns whether the film was new.
    pub fn insert(&mut self, film: Film) -> bool {
        self.films.insert(film)
    }

    /// Number of distinct films held.
    pub fn len(&self) -> usize {
        self.films.len()
    }

    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }

    pub fn contains(&self, film: &Film) -> bool {
        self.films.contains(film)
    }

    /// Borrowing iterator over the films, in no particular order.
    pub fn iter(&self) -> hash_set::Iter<'_, Film> {
        self.films.iter()
    }
}

impl FromIterator<Film> for Catalog {
    fn from_iter<I: IntoIterator<Item = Film>>(iter: I) -> Self {
        Self {
            films: iter.into_iter().collect(),
        }
    }
}

impl Extend<Film> for Catalog {
    fn extend<I: IntoIterator<Item = Film>>(&mut self, iter: I) {
        self.films.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Film;
    type IntoIter = hash_set::Iter<'a, Film>;

    fn into_iter(self) -> Self::IntoIter {
        self.films.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_film() -> Film {
        Film {
            title: "Alien".to_string(),
            director: "Ridley Scott".to_string(),
            duration: Some(117),
            genres: ["Action", "Sci-Fi"].iter().map(|g| g.to_string()).collect(),
            rating: "R".to_string(),
            year: Some(1979),
            score: Some(8.5),
        }
    }

    #[test]
    fn structurally_identical_films_are_equal() {
        assert_eq!(sample_film(), sample_film());
    }

    #[test]
    fn score_participates_in_equality() {
        let mut other = sample_film();
        other.score = Some(8.4);
        assert_ne!(sample_film(), other);

        other.score = None;
        assert_ne!(sample_film(), other);
    }

    #[test]
    fn catalog_deduplicates_on_insert() {
        let mut catalog = Catalog::new();
        assert!(catalog.insert(sample_film()));
        assert!(!catalog.insert(sample_film()));
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains(&sample_film()));
    }

    #[test]
    fn films_differing_in_one_field_both_survive() {
        let mut other = sample_film();
        other.duration = None;

        let catalog: Catalog = vec![sample_film(), other].into_iter().collect();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn csv_fields_follow_wire_order() {
        let fields = sample_film().to_csv_fields();
        assert_eq!(
            fields,
            [
                "Ridley Scott",
                "117",
                "Action|Sci-Fi",
                "Alien",
                "R",
                "1979",
                "8.5"
            ]
        );
    }

    #[test]
    fn missing_numerics_serialize_as_empty_tokens() {
        let film = Film {
            title: "Lost Dog".to_string(),
            director: "J. Doe".to_string(),
            duration: None,
            genres: ["Family".to_string()].into_iter().collect(),
            rating: "G".to_string(),
            year: Some(2001),
            score: None,
        };

        let fields = film.to_csv_fields();
        assert_eq!(fields[1], "");
        assert_eq!(fields[6], "");
    }
}
