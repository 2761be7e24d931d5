//! Submit a CSV through the gateway and print the chart projection.

use crate::inspect::load_dataset;
use htd_core::ViewMode;
use htd_data::style::{ChartMeta, RandomColors};
use htd_data::ChartProjection;
use htd_store::{EchoGateway, GatewayConfig, HttpGateway, RecordStore, SubmissionGateway};
use log::info;
use std::path::Path;

/// Pick the HTTP gateway when a base URL is configured, else echo in-process.
pub fn gateway_for(api_url: Option<&str>) -> Box<dyn SubmissionGateway> {
    match api_url {
        Some(url) if !url.trim().is_empty() => {
            info!("Submitting through {}", url);
            Box::new(HttpGateway::new(GatewayConfig::new(url)))
        }
        _ => Box::new(EchoGateway),
    }
}

pub async fn run_project(
    path: &Path,
    mode: ViewMode,
    year: Option<i32>,
    json: bool,
    api_url: Option<&str>,
) -> anyhow::Result<()> {
    let dataset = load_dataset(path)?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let gateway = gateway_for(api_url);
    let mut store = RecordStore::new();
    if let Err(e) = store.submit(gateway.as_ref(), filename, dataset).await {
        anyhow::bail!("Submission failed: {}", e);
    }

    store.set_mode(mode);
    store.set_year(year);

    if json {
        let chart = store.chart_data(&mut RandomColors::new());
        println!("{}", serde_json::to_string_pretty(&chart)?);
    } else {
        let meta = ChartMeta::for_mode(mode);
        println!("{} ({})", meta.title, store.view().filename);
        print!("{}", render_table(&store.projection(), meta.x_axis_label));
    }
    Ok(())
}

/// Plain-text table: one row per series, one column per label.
pub fn render_table(projection: &ChartProjection, corner: &str) -> String {
    let labels = projection.labels.to_strings();
    let name_width = projection
        .series
        .iter()
        .map(|s| s.name.chars().count())
        .chain(std::iter::once(corner.chars().count()))
        .max()
        .unwrap_or(0);

    let mut out = format!("{:<width$}", corner, width = name_width);
    for label in &labels {
        out.push_str(&format!(" {:>6}", label));
    }
    out.push('\n');

    for series in &projection.series {
        out.push_str(&format!("{:<width$}", series.name, width = name_width));
        for value in &series.values {
            out.push_str(&format!(" {:>6}", value.to_string()));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use htd_core::parser::parse_temperatures;
    use htd_data::project;

    const CSV: &str = "Year,Jan,Feb,Mar,Apr,May,Jun,Jul,Aug,Sep,Oct,Nov,Dec,Annual\n\
                       1859,25.7,25.4,24.2,23.1,19.5,15.7,14.7,17.7,18.3,23.9,,25.4,21.4";

    #[test]
    fn table_shows_missing_as_dash() {
        let dataset = parse_temperatures(CSV).unwrap();
        let projection = project(&dataset, None, &[1859], ViewMode::Monthly);
        let table = render_table(&projection, "Months");
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Months"));
        assert!(lines[0].contains("Jan") && lines[0].contains("Dec"));
        assert!(lines[1].starts_with("1859"));
        assert!(lines[1].contains("25.7"));
        assert!(lines[1].contains("     -"));
    }

    #[tokio::test]
    async fn echo_gateway_without_url() {
        let gateway = gateway_for(None);
        let dataset = parse_temperatures(CSV).unwrap();
        let committed = gateway.submit(dataset.clone()).await.unwrap();
        assert_eq!(committed, dataset);

        let gateway = gateway_for(Some("  "));
        assert!(gateway.submit(vec![]).await.unwrap().is_empty());
    }
}
