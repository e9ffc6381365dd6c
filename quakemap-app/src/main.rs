//! quakemap-app - fetches both feeds and writes the earthquake map page
//!
//! Nothing is written unless both feeds resolve; a failed or malformed feed
//! leaves any previous output untouched.

use anyhow::Context;
use clap::Parser;
use quakemap::{
    DataLoader, FetchOrdering, HeadlessRenderer, LeafletHtmlRenderer, MapBuilder,
    QuakeMapConfig,
};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "quakemap")]
#[command(about = "Render the past week of earthquakes and plate boundaries as a Leaflet map", long_about = None)]
struct Args {
    /// Where to write the generated page
    #[arg(long, short, default_value = "index.html")]
    output: PathBuf,

    /// Request both feeds at once instead of one after the other
    #[arg(long)]
    parallel: bool,

    /// Build the map without writing a page and print a summary
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let args = Args::parse();
    if let Err(e) = run(args).await {
        log::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let ordering = if args.parallel {
        FetchOrdering::Parallel
    } else {
        FetchOrdering::Sequential
    };
    let config = QuakeMapConfig::default().with_ordering(ordering);

    let loader = DataLoader::http(config.feeds.clone());
    let builder = MapBuilder::new().with_map_options(config.map.clone());

    if args.dry_run {
        let mut renderer = HeadlessRenderer::new();
        let map = loader
            .run(&builder, &mut renderer)
            .await
            .context("failed to load earthquake feeds")?;

        println!("Earthquakes plotted: {}", map.overlays.circles.len());
        println!(
            "Plate boundary segments: {}",
            map.overlays.tectonic.data().feature_count().unwrap_or(0)
        );
        println!("Visible layers: {}", map.visible_layer_ids().join(", "));
        return Ok(());
    }

    let mut renderer = LeafletHtmlRenderer::new();
    let map = loader
        .run(&builder, &mut renderer)
        .await
        .context("failed to load earthquake feeds")?;
    let html = renderer.to_html().context("failed to render map page")?;

    tokio::fs::write(&args.output, html)
        .await
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    log::info!(
        "Wrote {} earthquakes to {}",
        map.overlays.circles.len(),
        args.output.display()
    );
    Ok(())
}
