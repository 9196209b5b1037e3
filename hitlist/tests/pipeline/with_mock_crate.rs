use std::sync::Arc;
use std::time::Duration;

use hitlist::{Hitlist, NO_INFO_PLACEHOLDER, Notice};
use hitlist_mock::{MockChart, MockConnector};

#[tokio::test]
async fn fixture_run_mixes_every_outcome() {
    let hitlist = Hitlist::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .max_in_flight(4)
        .build()
        .unwrap();

    let report = hitlist.process(50).await.unwrap();

    assert_eq!(report.entries.len(), 12);
    let golden = &report.entries[0];
    assert!(golden.errors.is_empty());
    assert!(golden.video_url.starts_with("https://www.youtube.com/watch?v="));

    let failing = report.entries.iter().find(|e| e.title == "FAIL").unwrap();
    assert_eq!(failing.summary, NO_INFO_PLACEHOLDER);
    assert_eq!(failing.errors.len(), 2);

    let undocumented = report.entries.iter().find(|e| e.title == "Undocumented").unwrap();
    assert_eq!(undocumented.errors, vec!["Wikipedia info not found."]);
}

#[tokio::test(start_paused = true)]
async fn fixture_slow_title_times_out_under_tight_budget() {
    let hitlist = Hitlist::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .provider_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let report = hitlist.process(10).await.unwrap();
    let slow = &report.entries[9];
    assert_eq!(slow.title, "TIMEOUT");
    assert_eq!(slow.errors.len(), 2);
}

#[tokio::test]
async fn fixture_unreachable_chart() {
    let hitlist = Hitlist::builder()
        .with_connector(Arc::new(MockConnector::new().with_chart(MockChart::Unreachable)))
        .build()
        .unwrap();

    let report = hitlist.process(10).await.unwrap();
    assert!(report.entries.is_empty());
    assert_eq!(report.notices, vec![Notice::NoSongsFound]);
}
