use hitlist::{Hitlist, LookupResult};
use proptest::prelude::*;

use crate::helpers::{MockConnector, chart, video};

proptest! {
    #![proptest_config(ProptestConfig { cases: 48, .. ProptestConfig::default() })]
    #[test]
    fn output_is_chart_prefix_of_min_length(available in 0usize..30, n in 1usize..60, parallel in 1usize..6) {
        tokio_test::block_on(async move {
            let mock = MockConnector::builder()
                .returns_chart_ok(chart(available))
                .with_summary_fn(|title, _| {
                    if title.len() % 2 == 0 { LookupResult::NotFound } else { LookupResult::Found(format!("{title}...")) }
                })
                .returns_media(LookupResult::Found(video("v")))
                .build();
            let hitlist = Hitlist::builder()
                .with_connector(mock.clone())
                .max_in_flight(parallel)
                .build()
                .expect("hitlist");

            let report = hitlist.process(n).await.expect("process");

            assert_eq!(report.entries.len(), n.min(available));
            let expected: Vec<String> = (1..=n.min(available)).map(|i| i.to_string()).collect();
            let ranks: Vec<String> = report.entries.iter().map(|e| e.rank.clone()).collect();
            assert_eq!(ranks, expected);
            assert_eq!(report.notices.is_empty(), available > 0);
            assert_eq!(mock.summary_calls(), n.min(available));
        });
    }
}
