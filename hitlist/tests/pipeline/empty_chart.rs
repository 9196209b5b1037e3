use hitlist::{Hitlist, HitlistError, LookupResult, Notice};

use crate::helpers::MockConnector;

#[tokio::test]
async fn empty_chart_raises_notice_once_and_skips_lookups() {
    let mock = MockConnector::builder()
        .returns_chart_ok(vec![])
        .returns_summary(LookupResult::NotFound)
        .returns_media(LookupResult::NotFound)
        .build();
    let hitlist = Hitlist::builder().with_connector(mock.clone()).build().unwrap();

    for n in [1, 10, 50] {
        let report = hitlist.process(n).await.unwrap();
        assert!(report.entries.is_empty());
        assert_eq!(report.notices, vec![Notice::NoSongsFound]);
        assert!(report.warnings.is_empty());
    }
    assert_eq!(mock.lookup_calls(), 0);
}

#[tokio::test]
async fn unreachable_chart_keeps_fetch_error_as_warning() {
    let mock = MockConnector::builder()
        .chart_fails("dns error")
        .returns_summary(LookupResult::NotFound)
        .returns_media(LookupResult::NotFound)
        .build();
    let hitlist = Hitlist::builder().with_connector(mock.clone()).build().unwrap();

    let report = hitlist.process(10).await.unwrap();

    assert!(report.entries.is_empty());
    assert!(report.has_notice(Notice::NoSongsFound));
    assert_eq!(report.notices.len(), 1);
    assert!(matches!(report.warnings.as_slice(), [HitlistError::Fetch { .. }]));
    assert_eq!(mock.chart_calls(), 1);
    assert_eq!(mock.lookup_calls(), 0);
}
