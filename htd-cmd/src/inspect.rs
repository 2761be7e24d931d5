//! Offline checks on a temperature CSV.

use anyhow::Context;
use htd_core::column::columns;
use htd_core::parser::parse_bytes;
use htd_core::Dataset;
use log::info;
use std::path::Path;

/// Read and parse a CSV file from disk.
pub fn load_dataset(path: &Path) -> anyhow::Result<Dataset> {
    let bytes = std::fs::read(path).with_context(|| format!("Error reading file {}", path.display()))?;
    let dataset = parse_bytes(&bytes, &columns())
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    info!("Loaded {} records from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// One-line summary of a dataset.
pub fn summarize(dataset: &Dataset) -> String {
    let years: Vec<i32> = dataset.iter().filter_map(|r| r.year).collect();
    let missing_cells: usize = dataset
        .iter()
        .map(|r| {
            r.months().iter().filter(|m| m.is_missing()).count()
                + usize::from(r.annual.is_missing())
        })
        .sum();
    match (years.iter().min(), years.iter().max()) {
        (Some(first), Some(last)) => format!(
            "{} records, years {}-{}, {} missing cells",
            dataset.len(),
            first,
            last,
            missing_cells
        ),
        _ => format!("{} records, no years, {} missing cells", dataset.len(), missing_cells),
    }
}

pub fn run_validate(path: &Path) -> anyhow::Result<()> {
    let dataset = load_dataset(path)?;
    println!("{}: {}", path.display(), summarize(&dataset));
    Ok(())
}

pub fn run_years(path: &Path) -> anyhow::Result<()> {
    let dataset = load_dataset(path)?;
    for year in dataset.iter().filter_map(|r| r.year) {
        println!("{}", year);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use htd_core::parser::parse_temperatures;

    static FIXTURE: &str = include_str!("../../fixtures/temperatures.csv");

    #[test]
    fn summary_counts_missing_cells() {
        let dataset = parse_temperatures(FIXTURE).unwrap();
        assert_eq!(
            summarize(&dataset),
            "6 records, years 1859-1864, 1 missing cells"
        );
    }

    #[test]
    fn summary_of_empty_dataset() {
        assert_eq!(summarize(&Vec::new()), "0 records, no years, 0 missing cells");
    }

    #[test]
    fn load_missing_file_fails() {
        let err = load_dataset(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(err.to_string().contains("Error reading file"));
    }

    #[test]
    fn load_fixture_from_disk() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../fixtures/temperatures.csv");
        let dataset = load_dataset(&path).unwrap();
        assert_eq!(dataset.len(), 6);
    }
}
