use std::sync::Arc;
use std::time::Duration;

use hitlist_billboard::{BillboardConfig, BillboardConnector};
use hitlist_core::{HitlistConnector, HitlistError};
use hitlist_mock::{MockChart, MockConnector};
use hitlist_wikipedia::{WikipediaConfig, WikipediaConnector};
use hitlist_youtube::{YoutubeConfig, YoutubeConnector};

use crate::args::{Args, MockChartArg};

/// Connectors for this run, in registration order.
pub fn build(args: &Args) -> Result<Vec<Arc<dyn HitlistConnector>>, HitlistError> {
    if args.mock {
        tracing::info!("using the offline mock connector");
        let chart = match args.mock_chart {
            MockChartArg::Fixture => MockChart::Fixture,
            MockChartArg::Empty => MockChart::Empty,
            MockChartArg::Unreachable => MockChart::Unreachable,
        };
        return Ok(vec![Arc::new(MockConnector::new().with_chart(chart))]);
    }

    let timeout = Duration::from_secs(args.timeout_secs);
    let billboard = BillboardConnector::new(&BillboardConfig {
        timeout,
        ..BillboardConfig::default()
    })?;
    let wikipedia = WikipediaConnector::new(&WikipediaConfig {
        timeout,
        ..WikipediaConfig::default()
    })?;
    let mut yt = YoutubeConfig::from_env();
    if let Some(key) = args.youtube_key.clone().filter(|k| !k.trim().is_empty()) {
        yt.api_key = Some(key);
    }
    yt.timeout = timeout;
    let youtube = YoutubeConnector::new(&yt)?;

    Ok(vec![Arc::new(billboard), Arc::new(wikipedia), Arc::new(youtube)])
}
