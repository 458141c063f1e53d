use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use polars::prelude::*;
use polygons::{PolygonCollection, RegularPolygon};
use serde::Serialize;
use serde_json::json;
use std::fs::File;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

use provenance::{inline_block, write_sidecar, Sidecar};

#[derive(Parser)]
#[command(name = "polygons")]
#[command(about = "Regular polygon measures and the most efficient polygon")]
struct Cmd {
    /// Log debug events from the library
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print every measure of one regular polygon
    Describe {
        #[arg(long)]
        edges: u32,
        #[arg(long)]
        circumradius: f64,
    },
    /// Print the polygon with the best area/perimeter ratio among 3..=max-edges edges
    Efficiency {
        #[arg(long)]
        max_edges: u32,
        #[arg(long)]
        circumradius: f64,
        /// Emit JSON instead of the text summary
        #[arg(long)]
        json: bool,
    },
    /// Write one row per polygon to a .csv or .parquet file (plus provenance sidecar)
    Table {
        #[arg(long)]
        max_edges: u32,
        #[arg(long)]
        circumradius: f64,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

/// Flat view of one polygon for JSON output.
#[derive(Serialize)]
struct PolygonRow {
    edges: u32,
    circumradius: f64,
    interior_angle: f64,
    edge_length: f64,
    apothem: f64,
    area: f64,
    perimeter: f64,
    ratio: f64,
}

impl From<&RegularPolygon> for PolygonRow {
    fn from(p: &RegularPolygon) -> Self {
        Self {
            edges: p.edge_count(),
            circumradius: p.circumradius(),
            interior_angle: p.interior_angle(),
            edge_length: p.edge_length(),
            apothem: p.apothem(),
            area: p.area(),
            perimeter: p.perimeter(),
            ratio: p.ratio(),
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Describe {
            edges,
            circumradius,
        } => describe(edges, circumradius),
        Action::Efficiency {
            max_edges,
            circumradius,
            json,
        } => efficiency(max_edges, circumradius, json),
        Action::Table {
            max_edges,
            circumradius,
            out,
        } => table(max_edges, circumradius, out),
        Action::Report => report(),
    }
}

fn describe(edges: u32, circumradius: f64) -> Result<()> {
    tracing::info!(edges, circumradius, "describe");
    let polygon = RegularPolygon::new(edges, circumradius)
        .with_context(|| format!("building polygon with {edges} edges"))?;
    println!("{}", polygon.details());
    Ok(())
}

fn efficiency(max_edges: u32, circumradius: f64, as_json: bool) -> Result<()> {
    tracing::info!(max_edges, circumradius, "efficiency");
    let coll = PolygonCollection::new(max_edges, circumradius)
        .with_context(|| format!("building collection up to {max_edges} edges"))?;
    let best = coll.efficiency();
    if as_json {
        let doc = json!({
            "collection": coll.to_string(),
            "best": PolygonRow::from(best),
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        println!("{coll}: {best} ratio={}", best.ratio());
        println!("{}", best.details());
    }
    Ok(())
}

fn table(max_edges: u32, circumradius: f64, out: String) -> Result<()> {
    tracing::info!(max_edges, circumradius, out, "table");
    let coll = PolygonCollection::new(max_edges, circumradius)
        .with_context(|| format!("building collection up to {max_edges} edges"))?;
    let mut df = polygon_frame(&coll)?;
    write_frame(&mut df, Path::new(&out))?;
    tracing::info!(rows = df.height(), cols = df.width(), "table_written");

    let sidecar = Sidecar::new(
        "table",
        json!({
            "max_edges": max_edges,
            "circumradius": circumradius,
            "best_edges": coll.efficiency().edge_count(),
        }),
    );
    let prov = write_sidecar(&out, &sidecar)?;
    tracing::info!(provenance = %prov.display(), "provenance_written");
    Ok(())
}

fn report() -> Result<()> {
    let block = inline_block(&Sidecar::new("report", json!({})));
    println!("{}", serde_json::to_string_pretty(&block)?);
    Ok(())
}

/// One row per polygon, ascending by edge count.
fn polygon_frame(coll: &PolygonCollection) -> PolarsResult<DataFrame> {
    let rows: Vec<PolygonRow> = coll.iter().map(PolygonRow::from).collect();
    df!(
        "edges" => rows.iter().map(|r| r.edges).collect::<Vec<u32>>(),
        "circumradius" => rows.iter().map(|r| r.circumradius).collect::<Vec<f64>>(),
        "interior_angle" => rows.iter().map(|r| r.interior_angle).collect::<Vec<f64>>(),
        "edge_length" => rows.iter().map(|r| r.edge_length).collect::<Vec<f64>>(),
        "apothem" => rows.iter().map(|r| r.apothem).collect::<Vec<f64>>(),
        "area" => rows.iter().map(|r| r.area).collect::<Vec<f64>>(),
        "perimeter" => rows.iter().map(|r| r.perimeter).collect::<Vec<f64>>(),
        "ratio" => rows.iter().map(|r| r.ratio).collect::<Vec<f64>>(),
    )
}

fn write_frame(df: &mut DataFrame, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let ext = out.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext {
        "csv" => {
            let mut file =
                File::create(out).with_context(|| format!("creating {}", out.display()))?;
            CsvWriter::new(&mut file).include_header(true).finish(df)?;
        }
        "parquet" => {
            let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
            ParquetWriter::new(file).finish(df)?;
        }
        other => bail!("unsupported output extension {other:?} (use .csv or .parquet)"),
    }
    Ok(())
}
