//! Aggregation queries: group averages and constrained extrema.

use catalog::Film;
use std::cmp::Ordering;

/// Arithmetic mean of `field` over the films matching `predicate`.
///
/// Films whose field is missing are excluded from both the numerator and
/// the denominator — they never count as zero. Returns `None` when the
/// filter matches nothing, or when every match is missing the field: an
/// absent average is distinguishable from an average of zero.
pub fn group_average<'a, I, P, F>(films: I, predicate: P, field: F) -> Option<f64>
where
    I: IntoIterator<Item = &'a Film>,
    P: Fn(&Film) -> bool,
    F: Fn(&Film) -> Option<f64>,
{
    let mut sum = 0.0;
    let mut count = 0usize;

    for film in films {
        if !predicate(film) {
            continue;
        }
        if let Some(value) = field(film) {
            sum += value;
            count += 1;
        }
    }

    (count > 0).then(|| sum / count as f64)
}

/// The single film maximizing `key` among those matching `predicate`.
///
/// Missing keys rank below every present key, so a film with an unknown
/// score loses to any scored one but can still win when it is the only
/// match. When several films tie for the maximum, the last one in iteration
/// order wins — deterministic for a given input ordering. Returns `None`
/// only when the filter matches nothing.
pub fn max_matching<'a, I, K, P, F>(films: I, predicate: P, key: F) -> Option<&'a Film>
where
    I: IntoIterator<Item = &'a Film>,
    K: PartialOrd,
    P: Fn(&Film) -> bool,
    F: Fn(&Film) -> Option<K>,
{
    films
        .into_iter()
        .filter(|film| predicate(film))
        .max_by(|a, b| max_order(&key(a), &key(b)))
}

/// Ascending order over optional keys with missing values first, so
/// `max_by` never prefers an unknown key over a known one.
fn max_order<K: PartialOrd>(a: &Option<K>, b: &Option<K>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}
