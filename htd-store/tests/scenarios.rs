//! End-to-end flows: CSV text through the store to chart series.

use async_trait::async_trait;
use htd_core::parser::parse_temperatures;
use htd_core::{Dataset, Reading, ViewMode};
use htd_data::projection::{Labels, MEAN, MEAN_MINUS_SIGMA, MEAN_PLUS_SIGMA};
use htd_store::{EchoGateway, RecordStore, SubmissionError, SubmissionGateway};

const HEADER: &str = "Year,Jan,Feb,Mar,Apr,May,Jun,Jul,Aug,Sep,Oct,Nov,Dec,Annual";
const ROW_1859: &str = "1859,25.7,25.4,24.2,23.1,19.5,15.7,14.7,17.7,18.3,23.9,23.6,25.4,21.4";
const ROW_1860: &str = "1860,25.7,23.6,24.9,21.8,18.6,15.5,14.7,16.0,17.9,20.0,21.6,23.2,20.3";

static FIXTURE: &str = include_str!("../../fixtures/temperatures.csv");

struct ServerError;

#[async_trait(?Send)]
impl SubmissionGateway for ServerError {
    async fn submit(&self, _dataset: Dataset) -> Result<Dataset, SubmissionError> {
        Err(SubmissionError::new("Internal server error"))
    }
}

async fn store_with(csv: &str) -> RecordStore {
    let mut store = RecordStore::new();
    let dataset = parse_temperatures(csv).unwrap();
    store.submit(&EchoGateway, "temperatures.csv", dataset).await.unwrap();
    store
}

fn present(values: &[Reading]) -> Vec<f64> {
    values.iter().map(|r| r.value().unwrap()).collect()
}

#[tokio::test]
async fn single_record_monthly() {
    let store = store_with(&format!("{}\n{}", HEADER, ROW_1859)).await;
    assert_eq!(store.dataset().len(), 1);
    assert_eq!(store.dataset()[0].year, Some(1859));
    assert_eq!(store.dataset()[0].annual, Reading::Value(21.4));

    let projection = store.projection();
    assert_eq!(
        projection.labels,
        Labels::Months(vec![
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"
        ])
    );
    assert_eq!(projection.series.len(), 1);
    assert_eq!(
        present(&projection.series[0].values),
        vec![25.7, 25.4, 24.2, 23.1, 19.5, 15.7, 14.7, 17.7, 18.3, 23.9, 23.6, 25.4]
    );
}

#[tokio::test]
async fn two_records_yearly() {
    let mut store = store_with(&format!("{}\n{}\n{}", HEADER, ROW_1859, ROW_1860)).await;
    store.set_mode(ViewMode::Yearly);

    let projection = store.projection();
    assert_eq!(projection.labels, Labels::Years(vec![1859, 1860]));
    assert_eq!(projection.series.len(), 3);
    assert_eq!(
        present(&projection.series_named(MEAN).unwrap().values),
        vec![21.4, 20.3]
    );
    assert!(projection.series_named(MEAN_PLUS_SIGMA).is_some());
    assert!(projection.series_named(MEAN_MINUS_SIGMA).is_some());
}

#[tokio::test]
async fn year_filter_monthly() {
    let mut store = store_with(&format!("{}\n{}\n{}", HEADER, ROW_1859, ROW_1860)).await;
    store.set_year(Some(1860));

    let rows = store.records_for_selected_year().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].year, Some(1860));

    let projection = store.projection();
    assert_eq!(projection.series.len(), 1);
    assert_eq!(projection.series[0].name, "1860");
}

#[tokio::test]
async fn rejected_submission_keeps_previous_data() {
    let mut store = store_with(&format!("{}\n{}", HEADER, ROW_1859)).await;
    let before = store.dataset().to_vec();

    let dataset = parse_temperatures(&format!("{}\n{}", HEADER, ROW_1860)).unwrap();
    let result = store.submit(&ServerError, "next.csv", dataset).await;

    assert!(result.is_err());
    assert_eq!(store.view().error, "Internal server error");
    assert!(!store.view().loading);
    assert_eq!(store.view().filename, "");
    assert_eq!(store.dataset(), before.as_slice());
}

#[tokio::test]
async fn clear_after_anything_is_empty() {
    let mut store = store_with(FIXTURE).await;
    store.set_mode(ViewMode::Yearly);
    store.set_year(Some(1862));
    store.set_error("stale");
    store.clear();

    assert!(!store.has_data());
    assert!(store.years().is_empty());
    assert_eq!(store.records_for_selected_year(), None);
    assert_eq!(store.view().mode, ViewMode::Monthly);
    assert!(store.projection().series.is_empty());
}

#[tokio::test]
async fn fixture_yearly_band_skips_blank_month() {
    let mut store = store_with(FIXTURE).await;
    store.set_mode(ViewMode::Yearly);
    let projection = store.projection();
    assert_eq!(
        projection.labels,
        Labels::Years(vec![1859, 1860, 1861, 1862, 1863, 1864])
    );
    // 1862 is missing November but still has a band from the other months.
    let upper = &projection.series_named(MEAN_PLUS_SIGMA).unwrap().values;
    assert!(!upper[3].is_missing());
}

#[tokio::test]
async fn invalid_header_leaves_store_untouched() {
    let mut store = store_with(FIXTURE).await;
    let before = store.clone();
    let submitted = store
        .upload(&EchoGateway, "broken.csv", "Year,Jan,Feb\n1900,1,2")
        .await;
    assert!(!submitted);
    assert_eq!(store.dataset(), before.dataset());
    assert_eq!(store.view().filename, before.view().filename);
    assert!(!store.view().error.is_empty());
}
