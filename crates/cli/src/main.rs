use anyhow::Result;
use catalog::{Catalog, Film, LogSink};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use queries::{group_average, top_n, top_n_matching, CatalogReport};
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Filmlens - film catalog analytics
#[derive(Parser)]
#[command(name = "filmlens")]
#[command(about = "Analytical queries over a flat film-metadata export", long_about = None)]
struct Cli {
    /// Path to the film metadata CSV
    #[arg(short, long, default_value = "data/movie_metadata.csv")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the stock report: top rated, genre rankings, group averages
    Report {
        /// Emit the report as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Rank films by a numeric key
    Top {
        /// How many films to show
        #[arg(long, default_value = "10")]
        n: usize,

        /// Key to rank by
        #[arg(long, value_enum, default_value = "score")]
        key: RankKey,

        /// Only consider films carrying this genre label
        #[arg(long)]
        genre: Option<String>,
    },

    /// Average a numeric field over films in a genre
    Average {
        /// Field to average
        #[arg(long, value_enum)]
        field: AvgField,

        /// Genre label to filter on
        #[arg(long)]
        genre: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum RankKey {
    Score,
    Duration,
    Year,
}

impl RankKey {
    fn label(self) -> &'static str {
        match self {
            RankKey::Score => "score",
            RankKey::Duration => "duration",
            RankKey::Year => "year",
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum AvgField {
    Duration,
    Score,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // keep stdout clean when the caller asked for JSON
    let json_mode = matches!(&cli.command, Commands::Report { json: true });

    let start = Instant::now();
    let catalog = load_catalog(&cli.data);
    if !json_mode {
        println!(
            "{} Loaded {} films in {:?}",
            "✓".green(),
            catalog.len(),
            start.elapsed()
        );
    }

    match cli.command {
        Commands::Report { json } => handle_report(&catalog, json)?,
        Commands::Top { n, key, genre } => handle_top(&catalog, n, key, genre.as_deref()),
        Commands::Average { field, genre } => handle_average(&catalog, field, &genre),
    }

    Ok(())
}

/// Load the catalog, proceeding with an empty one when the source is
/// unreadable. That trade-off belongs here, not in the library: every query
/// below has well-defined empty-catalog behavior, so a degraded run still
/// renders a coherent answer instead of aborting.
fn load_catalog(path: &Path) -> Catalog {
    match Catalog::from_path(path, &mut LogSink) {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::error!("{err}");
            Catalog::new()
        }
    }
}

/// Handle the 'report' command
fn handle_report(catalog: &Catalog, json: bool) -> Result<()> {
    let report = CatalogReport::build(catalog);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_films("Top ten highest rated films", &report.top_rated);
    print_films("Top eight highest rated Action films", &report.top_action);
    print_films("Five longest Fantasy films", &report.longest_fantasy);

    println!(
        "{} {}",
        "Average length of a Family film:".bold(),
        fmt_minutes(report.family_avg_duration)
    );
    println!(
        "{} {}",
        "Average score of a Sci-Fi film:".bold(),
        fmt_average(report.sci_fi_avg_score)
    );
    println!(
        "{} {}",
        "Best PG-13 film:".bold(),
        report
            .best_pg13
            .as_ref()
            .map(|f| f.title.as_str())
            .unwrap_or("n/a")
    );

    Ok(())
}

/// Handle the 'top' command
fn handle_top(catalog: &Catalog, n: usize, key: RankKey, genre: Option<&str>) {
    let ranked = match key {
        RankKey::Score => ranked_films(catalog, genre, |f| f.score, n),
        RankKey::Duration => ranked_films(catalog, genre, |f| f.duration, n),
        RankKey::Year => ranked_films(catalog, genre, |f| f.year, n),
    };

    let heading = match genre {
        Some(label) => format!("Top {n} films by {} in {label}", key.label()),
        None => format!("Top {n} films by {}", key.label()),
    };
    print_films(&heading, ranked);
}

/// Handle the 'average' command
fn handle_average(catalog: &Catalog, field: AvgField, genre: &str) {
    match field {
        AvgField::Duration => {
            let avg = group_average(
                catalog,
                |f| f.has_genre(genre),
                |f| f.duration.map(f64::from),
            );
            println!("Average duration of a {genre} film: {}", fmt_minutes(avg));
        }
        AvgField::Score => {
            let avg = group_average(catalog, |f| f.has_genre(genre), |f| f.score);
            println!("Average score of a {genre} film: {}", fmt_average(avg));
        }
    }
}

fn ranked_films<'a, K: PartialOrd>(
    catalog: &'a Catalog,
    genre: Option<&str>,
    key: impl Fn(&Film) -> Option<K>,
    n: usize,
) -> Vec<&'a Film> {
    match genre {
        Some(label) => top_n_matching(catalog, |f| f.has_genre(label), key, n),
        None => top_n(catalog, key, n),
    }
}

/// Pretty-print a ranked film table.
fn print_films<'a>(label: &str, films: impl IntoIterator<Item = &'a Film>) {
    println!("{}", format!("{label}:").bold().blue());

    let mut any = false;
    for film in films {
        any = true;
        let genres = film.genres.iter().cloned().collect::<Vec<_>>().join(", ");
        println!(
            "  {:<40}{:<6}{:<10}{:<6}{:<6}{:<24}{}",
            film.title,
            fmt_opt(film.year),
            film.rating,
            fmt_opt(film.duration),
            fmt_score(film.score),
            film.director,
            genres
        );
    }
    if !any {
        println!("  (no films)");
    }
    println!();
}

// Missing values render as a dash or "n/a", never as a zero.

fn fmt_opt<T: Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn fmt_score(value: Option<f64>) -> String {
    value
        .map(|v| format!("{v:.1}"))
        .unwrap_or_else(|| "-".to_string())
}

fn fmt_minutes(value: Option<f64>) -> String {
    value
        .map(|v| format!("{v:.1} min"))
        .unwrap_or_else(|| "n/a".to_string())
}

fn fmt_average(value: Option<f64>) -> String {
    value
        .map(|v| format!("{v:.2}"))
        .unwrap_or_else(|| "n/a".to_string())
}
