use std::time::Duration;

use hitlist::{Hitlist, LookupResult};

use crate::helpers::{MockConnector, chart, video};

#[tokio::test(start_paused = true)]
async fn rank_order_survives_out_of_order_completion() {
    // Earlier ranks take longer, so with parallelism they finish last.
    let mut builder = MockConnector::builder().returns_chart_ok(chart(6));
    for i in 1..=6u64 {
        builder = builder.lookup_delay(&format!("Song {i}"), Duration::from_millis(70 - 10 * i));
    }
    let mock = builder
        .with_summary_fn(|title, _| {
            if title.ends_with('3') {
                LookupResult::Failed("boom".into())
            } else {
                LookupResult::Found(format!("{title}..."))
            }
        })
        .with_media_fn(|q| {
            if q.starts_with("Song 5 ") {
                LookupResult::NotFound
            } else {
                LookupResult::Found(video(&q.replace(' ', "_")))
            }
        })
        .build();

    let hitlist = Hitlist::builder()
        .with_connector(mock.clone())
        .max_in_flight(4)
        .build()
        .unwrap();
    let report = hitlist.process(6).await.unwrap();

    let ranks: Vec<&str> = report.entries.iter().map(|e| e.rank.as_str()).collect();
    assert_eq!(ranks, ["1", "2", "3", "4", "5", "6"]);
    assert_eq!(report.entries[2].errors, vec!["Wikipedia info not found."]);
    assert_eq!(report.entries[4].errors, vec!["YouTube video not found."]);
    assert_eq!(mock.summary_calls(), 6);
    assert_eq!(mock.media_calls(), 6);
}

#[tokio::test]
async fn duplicate_rows_are_kept() {
    let mut rows = chart(2);
    rows.push(rows[0].clone());
    let mock = MockConnector::builder()
        .returns_chart_ok(rows)
        .returns_summary(LookupResult::NotFound)
        .returns_media(LookupResult::NotFound)
        .build();
    let hitlist = Hitlist::builder().with_connector(mock.clone()).build().unwrap();

    let report = hitlist.process(10).await.unwrap();
    let ranks: Vec<&str> = report.entries.iter().map(|e| e.rank.as_str()).collect();
    assert_eq!(ranks, ["1", "2", "1"]);
}
