//! scene — builds graph snapshots of a small synthetic highway.
//!
//! Usage: `scene [config.json]`.  Without an argument the default
//! `GraphConfig` is used, with a downlink target placed mid-road.
//!
//! Log level follows `RUST_LOG` (default `info`).

mod channel;
mod scene;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use v2x_core::{GraphConfig, Point2};
use v2x_graph::{GraphBuilder, Relation};

use channel::LogDistanceChannel;
use scene::{Scene, ROAD_LENGTH_M};

// ── Constants ─────────────────────────────────────────────────────────────────

const RADIO_UNITS: u32 = 3;
const VEHICLES:    u32 = 12;
const EPOCHS:      u64 = 10;
const SEED:        u64 = 42;

const OUTPUT_DIR: &str = "output/scene";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

fn load_config(path: Option<&str>) -> Result<GraphConfig> {
    match path {
        Some(p) => {
            let text = std::fs::read_to_string(p).with_context(|| format!("reading {p}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {p}"))
        }
        None => Ok(GraphConfig {
            scene_scale_x:   ROAD_LENGTH_M,
            scene_scale_y:   200.0,
            downlink_target: Some(Point2::new(ROAD_LENGTH_M / 2.0, 300.0)),
            ..GraphConfig::default()
        }),
    }
}

fn main() -> Result<()> {
    init_tracing();

    let arg = std::env::args().nth(1);
    let config = load_config(arg.as_deref())?;
    info!(?config, "graph configuration");

    // 1. Scene and builder.
    let channel = LogDistanceChannel::default();
    let mut scene = Scene::highway(RADIO_UNITS, VEHICLES, SEED);
    scene.observe(&channel, &config);
    let builder = GraphBuilder::new(config, channel)?;

    // 2. Run epochs.
    let t0 = Instant::now();
    let mut last = None;
    for epoch in 0..EPOCHS {
        let snapshot = builder.build(&scene.radio_units, &scene.vehicles, epoch)?;
        info!(
            epoch,
            nodes = snapshot.num_nodes(),
            communication = snapshot.num_edges(Relation::Communication),
            proximity = snapshot.num_edges(Relation::Proximity),
            skipped = snapshot.skipped_pairs().len(),
            "snapshot"
        );

        let radius = builder.config().inference_radius;
        for (ru, sub) in scene
            .radio_units
            .iter()
            .zip(builder.build_all_subgraphs(&scene.radio_units, &scene.vehicles, epoch, radius))
        {
            match sub {
                Ok(sub) => tracing::debug!(epoch, focal = %ru.id, nodes = sub.num_nodes(), "subgraph"),
                Err(e)  => warn!(epoch, focal = %ru.id, error = %e, "subgraph build failed"),
            }
        }

        last = Some(snapshot);
        scene.step(builder.channel(), builder.config());
    }
    info!(elapsed_ms = t0.elapsed().as_millis() as u64, epochs = EPOCHS, "run complete");

    // 3. Dump the final snapshot.
    if let Some(snapshot) = last {
        std::fs::create_dir_all(OUTPUT_DIR)?;
        let path = Path::new(OUTPUT_DIR).join("snapshot.json");
        let file = std::fs::File::create(&path)?;
        serde_json::to_writer_pretty(std::io::BufWriter::new(file), &snapshot)?;
        info!(path = %path.display(), "wrote snapshot");
    }

    Ok(())
}
