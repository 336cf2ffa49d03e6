//! Integration tests for the query engine.
//!
//! These drive the whole path the product takes: raw delimited lines in,
//! catalog built, queries answered through the public API.

use catalog::{Catalog, Diagnostic};
use queries::{CatalogReport, group_average, max_matching, top_n};

fn load(lines: &[&str]) -> (Catalog, Vec<Diagnostic>) {
    let mut sink = Vec::new();
    let catalog = Catalog::from_lines(lines, &mut sink);
    (catalog, sink)
}

const HEADER: &str =
    "director_name,duration,genres,movie_title,content_rating,title_year,imdb_score";

#[test]
fn end_to_end_ranking_and_average() {
    let (catalog, diagnostics) = load(&[
        HEADER,
        "Ridley Scott,117,Action|Sci-Fi,Alien,R,1979,8.5",
        "J. Doe,,Family,Lost Dog,G,2001,",
    ]);

    assert_eq!(catalog.len(), 2);
    assert!(diagnostics.is_empty());

    // the only scored film wins the ranking
    let best = top_n(&catalog, |f| f.score, 1);
    assert_eq!(best.len(), 1);
    assert_eq!(best[0].title, "Alien");

    // the only Family film has no duration, so there is no average
    let family_runtime = group_average(
        &catalog,
        |f| f.has_genre("Family"),
        |f| f.duration.map(f64::from),
    );
    assert_eq!(family_runtime, None);
}

#[test]
fn stock_report_from_raw_lines() {
    let (catalog, diagnostics) = load(&[
        HEADER,
        "Ridley Scott,117,Action|Sci-Fi,Alien,R,1979,8.5",
        "Ridley Scott,117,Action|Sci-Fi,Alien,R,1979,8.5",
        "P. Jackson,178,Action|Fantasy,Ring Road,PG-13,2001,8.8",
        "J. Doe,ninety,Family,Lost Dog,G,2001,6.0",
        "not,enough,fields",
    ]);

    // duplicate Alien collapsed, malformed line dropped, bad duration logged
    assert_eq!(catalog.len(), 3);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].field, "duration");
    assert!(diagnostics[0].to_string().contains("ninety"));

    let report = CatalogReport::build(&catalog);

    assert_eq!(report.top_rated.len(), 3);
    assert_eq!(report.top_rated[0].title, "Ring Road");
    assert_eq!(report.top_rated[1].title, "Alien");

    assert_eq!(report.top_action.len(), 2);
    assert_eq!(report.longest_fantasy.len(), 1);
    assert_eq!(report.longest_fantasy[0].title, "Ring Road");

    // Lost Dog matched the Family filter but its duration never parsed
    assert_eq!(report.family_avg_duration, None);
    assert_eq!(report.sci_fi_avg_score, Some(8.5));
    assert_eq!(
        report.best_pg13.as_ref().map(|f| f.title.as_str()),
        Some("Ring Road")
    );
}

#[test]
fn queries_over_an_empty_load_are_well_defined() {
    // header-only source: valid, degenerate catalog
    let (catalog, _) = load(&[HEADER]);
    assert!(catalog.is_empty());

    assert!(top_n(&catalog, |f| f.score, 10).is_empty());
    assert_eq!(group_average(&catalog, |_| true, |f| f.score), None);
    assert!(max_matching(&catalog, |_| true, |f| f.score).is_none());
}
