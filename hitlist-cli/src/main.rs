//! `hitlist`: fetch the chart, enrich the top songs, print the table and
//! export it as CSV.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use hitlist::{Hitlist, Notice};

mod args;
mod connectors;
mod logging;

use args::Args;

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init(args.log_file.as_deref())?;

    // Show the whole table: every row, long summaries, all columns.
    for (key, value) in [
        ("POLARS_FMT_MAX_ROWS", "-1"),
        ("POLARS_FMT_MAX_COLS", "-1"),
        ("POLARS_FMT_STR_LEN", "256"),
    ] {
        if std::env::var_os(key).is_none() {
            // SAFETY: still single-threaded; the runtime is built below.
            unsafe { std::env::set_var(key, value) };
        }
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run(args))
}

async fn run(args: Args) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut builder = Hitlist::builder()
        .provider_timeout(Duration::from_secs(args.timeout_secs))
        .max_in_flight(usize::from(args.max_in_flight));
    for c in connectors::build(&args)? {
        builder = builder.with_connector(c);
    }
    let hitlist = builder.build()?;

    println!("Processing songs...");
    let report = hitlist.process(usize::from(args.count)).await?;

    if report.has_notice(Notice::NoSongsFound) {
        println!("{}", Notice::NoSongsFound.message());
        return Ok(ExitCode::SUCCESS);
    }
    for w in &report.warnings {
        tracing::debug!(warning = %w, "lookup diagnostic");
    }

    let df = hitlist::to_dataframe(&report.entries)?;
    println!("Processed Song Data");
    println!("{df}");

    if args.no_export {
        return Ok(ExitCode::SUCCESS);
    }
    match hitlist::write_csv(&report.entries, &args.out) {
        Ok(()) => {
            println!("Data saved to {}", args.out.display());
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::error!(error = %e, "error saving data to CSV");
            eprintln!("Error saving export: {e}");
            Ok(ExitCode::FAILURE)
        }
    }
}
