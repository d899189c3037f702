use anyhow::Context;
use clap::Parser;
use fetch::client::CatalogClient;
use gui_bridge::bridge::AnalysisBridge;
use gui_bridge::model::AnalysisModel;
use motorcore::catalog::SearchRequest;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::runner::Runner;

mod fetch;
mod gui_bridge;
mod report;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "ThrustCurve catalog analyzer and report generator")]
struct Args {
    /// Fetch a single listing and print the raw catalog schema
    #[arg(long, default_value_t = false)]
    probe: bool,
    /// Keep the analysis bridge alive for HTTP clients after the run
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let runtime = TokioBuilder::new_current_thread()
        .enable_all()
        .build()
        .context("creating runtime for catalog requests")?;
    let client = CatalogClient::new().context("building catalog client")?;

    if args.probe {
        let body = runtime
            .block_on(client.search_value(&SearchRequest::single()))
            .context("probing catalog schema")?;
        match body.get("results").and_then(|results| results.get(0)) {
            Some(record) => println!("{}", serde_json::to_string_pretty(record)?),
            None => log::warn!("schema probe returned no records"),
        }
        return Ok(());
    }

    let records = runtime
        .block_on(client.search(&SearchRequest::bulk()))
        .context("fetching motor catalog")?;
    if records.is_empty() {
        log::info!("catalog returned no motors, nothing to report");
        return Ok(());
    }

    let runner = Runner::new();
    let result = runner.execute(&records);

    println!(
        "Catalog run -> {} fetched, {} admitted, {} skipped",
        records.len(),
        result.admitted,
        result.skipped
    );

    let out_dir = PathBuf::from(".");
    report::generate_reports(&result.motors, "", &out_dir)?;

    let micro = result.micro_motors();
    report::generate_reports(&micro, report::MICRO_REPORT_SUFFIX, &out_dir)?;
    report::export::export_json(&micro, &out_dir.join("motors_under_640ns.json"))?;
    report::export::export_json(&result.motors, &out_dir.join("motors_all.json"))?;

    let bridge = AnalysisBridge::new(Arc::new(runner.clone()));
    bridge.publish(&AnalysisModel::from_result(&result))?;
    bridge.publish_status("Catalog analysis ready.");

    if args.serve {
        bridge.publish_status("HTTP bridge running (Ctrl+C to stop)...");
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}
