//! # Queries Crate
//!
//! Read-only analytical queries over a [`catalog::Catalog`].
//!
//! ## Components
//!
//! ### Ranking ([`rank`])
//! Top-N by any numeric key, optionally behind a predicate:
//! - highest-scored films overall
//! - highest-scored films within a genre
//! - longest films within a genre (filter by one field, rank by another)
//!
//! ### Aggregation ([`aggregate`])
//! - group averages that exclude missing values from both sides of the
//!   division
//! - extremum search behind an equality filter
//!
//! ### Stock report ([`report`])
//! The six fixed questions the product ships with, computed as data and
//! rendered elsewhere.
//!
//! ## Design
//!
//! Every operation is a pure function over `IntoIterator<Item = &Film>`, so
//! the same code runs against a whole catalog or any pre-filtered view of
//! one. Orderings are caller-supplied key functions returning `Option<K>`;
//! a missing key always ranks below a present one and never panics a
//! comparison. Empty results are `None` or an empty `Vec`, never an error
//! and never a fabricated zero.
//!
//! ## Example Usage
//!
//! ```ignore
//! use queries::{top_n_matching, group_average};
//!
//! let noisiest = top_n_matching(&catalog, |f| f.has_genre("Action"), |f| f.score, 8);
//! let family_runtime = group_average(&catalog, |f| f.has_genre("Family"),
//!                                    |f| f.duration.map(f64::from));
//! ```

// Public modules
pub mod aggregate;
pub mod rank;
pub mod report;

// Re-export commonly used operations
pub use aggregate::{group_average, max_matching};
pub use rank::{top_n, top_n_matching};
pub use report::CatalogReport;
