//! Ranking queries: top-N by a caller-supplied numeric key.
//!
//! The ordering is always an explicit key function passed in by the caller,
//! never an intrinsic order on [`Film`] itself — the same record ranks by
//! score in one query and by duration in the next.

use catalog::Film;
use std::cmp::Ordering;

/// Compare two optional keys for descending rank order.
///
/// Present keys sort greatest-first; a missing key ranks below every present
/// one; incomparable pairs (NaN scores) tie. Ties keep their input order
/// because the sort below is stable.
fn rank_order<K: PartialOrd>(a: &Option<K>, b: &Option<K>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// The `n` films with the greatest value of `key`, in descending key order.
///
/// Films whose key is missing rank last rather than poisoning the
/// comparison. Asking for more films than exist returns them all. The input
/// collection is only read; the result is a fresh sequence of borrows.
pub fn top_n<'a, I, K, F>(films: I, key: F, n: usize) -> Vec<&'a Film>
where
    I: IntoIterator<Item = &'a Film>,
    K: PartialOrd,
    F: Fn(&Film) -> Option<K>,
{
    let mut ranked: Vec<&Film> = films.into_iter().collect();
    ranked.sort_by(|a, b| rank_order(&key(a), &key(b)));
    ranked.truncate(n);
    ranked
}

/// [`top_n`] restricted to films matching `predicate`.
///
/// A predicate that reads a missing field should simply return false; the
/// film then never reaches the sort. Keying by a different field than the
/// filter is fine — "longest films within a genre" is this function keyed
/// on duration.
pub fn top_n_matching<'a, I, K, P, F>(films: I, predicate: P, key: F, n: usize) -> Vec<&'a Film>
where
    I: IntoIterator<Item = &'a Film>,
    K: PartialOrd,
    P: Fn(&Film) -> bool,
    F: Fn(&Film) -> Option<K>,
{
    top_n(
        films.into_iter().filter(|film| predicate(film)),
        key,
        n,
    )
}
