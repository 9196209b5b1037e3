use hitlist::{ChartEntry, Hitlist, LookupResult, NO_INFO_PLACEHOLDER, NOT_FOUND_SENTINEL};
use hitlist_core::summarize_extract;

use crate::helpers::{MockConnector, video};

#[tokio::test]
async fn found_found_fills_every_field() {
    let extract = "Song One is a 2025 single. ".repeat(20);
    let snippet = summarize_extract(&extract);
    let mock = MockConnector::builder()
        .returns_chart_ok(vec![ChartEntry::new("1", "Song One", "Artist One")])
        .returns_summary(LookupResult::Found(snippet.clone()))
        .returns_media(LookupResult::Found(video("abc123")))
        .build();

    let hitlist = Hitlist::builder().with_connector(mock.clone()).build().unwrap();
    let report = hitlist.process(1).await.unwrap();

    assert_eq!(report.entries.len(), 1);
    let e = &report.entries[0];
    assert_eq!(e.rank, "1");
    assert_eq!(e.summary, snippet);
    assert_eq!(e.summary.chars().count(), 203);
    assert_eq!(e.video_id, "abc123");
    assert_eq!(e.video_url, "https://www.youtube.com/watch?v=abc123");
    assert_eq!(e.thumbnail_url, "https://i.ytimg.com/vi/abc123/default.jpg");
    assert_eq!(e.errors_field(), "");
    assert!(report.notices.is_empty());
    assert!(report.warnings.is_empty());
}

#[tokio::test]
async fn not_found_and_failed_degrade_to_placeholders() {
    let mock = MockConnector::builder()
        .returns_chart_ok(vec![ChartEntry::new("2", "Song Two", "Artist Two")])
        .returns_summary(LookupResult::NotFound)
        .returns_media(LookupResult::Failed("timeout".into()))
        .build();

    let hitlist = Hitlist::builder().with_connector(mock.clone()).build().unwrap();
    let report = hitlist.process(1).await.unwrap();

    let e = &report.entries[0];
    assert_eq!(e.summary, NO_INFO_PLACEHOLDER);
    assert_eq!(e.video_id, NOT_FOUND_SENTINEL);
    assert_eq!(e.video_url, NOT_FOUND_SENTINEL);
    assert_eq!(e.thumbnail_url, NOT_FOUND_SENTINEL);
    assert_eq!(
        e.errors_field(),
        "Wikipedia info not found.; YouTube video not found."
    );

    // Both causes stay distinguishable in the diagnostics.
    assert_eq!(report.warnings.len(), 2);
    assert!(report.warnings[0].is_not_found());
    assert!(report.warnings[1].is_actionable());
    assert!(report.warnings[1].to_string().contains("timeout"));
}

#[tokio::test]
async fn lookups_receive_song_queries() {
    let mock = MockConnector::builder()
        .returns_chart_ok(vec![ChartEntry::new("1", "Golden", "HUNTR/X")])
        .with_summary_fn(|title, artist| {
            assert_eq!((title, artist), ("Golden", "HUNTR/X"));
            LookupResult::Found("ok...".into())
        })
        .with_media_fn(|q| {
            assert_eq!(q, "Golden HUNTR/X official music video");
            LookupResult::NotFound
        })
        .build();

    let hitlist = Hitlist::builder().with_connector(mock.clone()).build().unwrap();
    let report = hitlist.process(5).await.unwrap();

    assert_eq!(report.entries[0].errors, vec!["YouTube video not found."]);
    assert_eq!(mock.summary_calls(), 1);
    assert_eq!(mock.media_calls(), 1);
}

#[tokio::test]
async fn zero_count_is_rejected() {
    let mock = MockConnector::builder()
        .returns_chart_ok(crate::helpers::chart(3))
        .returns_summary(LookupResult::NotFound)
        .returns_media(LookupResult::NotFound)
        .build();
    let hitlist = Hitlist::builder().with_connector(mock.clone()).build().unwrap();

    let err = hitlist.process(0).await.unwrap_err();
    assert!(matches!(err, hitlist::HitlistError::InvalidArg(_)));
    assert_eq!(mock.chart_calls(), 0);
}

#[tokio::test]
async fn pipeline_can_run_again() {
    let mock = MockConnector::builder()
        .returns_chart_ok(crate::helpers::chart(4))
        .returns_summary(LookupResult::NotFound)
        .returns_media(LookupResult::Found(video("v")))
        .build();
    let hitlist = Hitlist::builder().with_connector(mock.clone()).build().unwrap();

    let first = hitlist.process(2).await.unwrap();
    let second = hitlist.process(2).await.unwrap();
    assert_eq!(first.entries, second.entries);
    assert_eq!(mock.chart_calls(), 2);
}
