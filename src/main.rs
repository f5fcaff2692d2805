use clap::Parser;
use color_eyre::Result;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use kml_inventory::export::{export_csv, export_json};
use kml_inventory::inventory::{build_inventory, summarize, InventoryOptions};
use kml_inventory::model::{InventoryReport, InventorySummary};
use kml_inventory::parser::parse_kml_file;

#[derive(Parser, Debug)]
#[command(name = "kml-inventory")]
#[command(about = "KML Inventory - fiber routes, POPs and cabinets from KML files")]
#[command(version)]
struct Args {
    /// Path to KML file
    #[arg(required = true)]
    file: PathBuf,

    /// Export route table to CSV (optional output path)
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Export full inventory to JSON (optional output path)
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Maximum folder nesting depth to visit
    #[arg(long, value_name = "N", default_value_t = InventoryOptions::default().max_depth)]
    max_depth: usize,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    // RUST_LOG=debug shows every classification decision.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let document = parse_kml_file(&args.file)?;
    let options = InventoryOptions {
        max_depth: args.max_depth,
        ..InventoryOptions::default()
    };
    let report = build_inventory(&document, &options);
    let summary = summarize(&report);

    if let Some(csv_path) = &args.csv {
        export_csv(&report, csv_path)?;
        println!("Exported to CSV: {}", csv_path.display());
    }

    if let Some(json_path) = &args.json {
        export_json(&report, &summary, json_path)?;
        println!("Exported to JSON: {}", json_path.display());
    }

    if args.csv.is_some() || args.json.is_some() {
        return Ok(());
    }

    print_summary(&report, &summary);
    Ok(())
}

fn print_summary(report: &InventoryReport, summary: &InventorySummary) {
    println!("Document: {}", report.document);

    if !summary.folders.is_empty() {
        println!();
        println!("{:<40} {:>8} {:>14} {:>10}", "Folder", "Routes", "Distance (m)", "Done (%)");
        for folder in &summary.folders {
            println!(
                "{:<40} {:>8} {:>14.0} {:>10.1}",
                folder.folder, folder.route_count, folder.subtotal_m, folder.completion_pct
            );
        }
        println!("Trunk total: {:.0} m", summary.trunk_total_m);
        println!("Partner total: {:.0} m", summary.partner_total_m);
    }

    if !summary.pops.is_empty() {
        println!();
        println!(
            "{:<24} {:<24} {:>9} {:>7} {:>7} {:>12}",
            "Hub", "POP", "Cabinets", "Routes", "Items", "Fiber (m)"
        );
        for pop in &summary.pops {
            println!(
                "{:<24} {:<24} {:>9} {:>7} {:>7} {:>12.0}",
                pop.hub, pop.pop, pop.cabinet_count, pop.route_count, pop.item_count,
                pop.fiber_length_m
            );
        }
        println!(
            "Hubs: {}  Routes: {}  Items: {}  Fiber: {:.0} m",
            summary.hubs.len(),
            summary.total_routes,
            summary.total_items,
            summary.total_fiber_m
        );
    }

    println!();
    println!("Cities: {}", summary.city_count);
    if !report.warnings.is_empty() {
        println!("Warnings: {}", report.warnings.len());
    }
}
