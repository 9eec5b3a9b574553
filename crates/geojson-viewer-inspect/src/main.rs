//! Decodes a GeoJSON document and prints what the viewer would show.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use geojson_viewer::codec::{decode_document_bytes, is_compressed};
use geojson_viewer::limits::{DEFAULT_COMPRESSION_LEVEL, MAX_DOCUMENT_SIZE, MAX_NESTING_DEPTH};
use geojson_viewer::{
    build_overlays, encode_document_compressed, format_path, overlay_bounds, validate_feature,
    DecodeOptions, Feature, GeometryKind, Overlay, PathSegment,
};
use log::{error, info, LevelFilter};

#[derive(Debug, Parser)]
#[command(version, about)]
/// Decode a GeoJSON document and summarize its features and overlays
struct Args {
    /// Input GeoJSON file (plain or zstd-compressed)
    input: PathBuf,
    /// Maximum nesting of FeatureCollections / GeometryCollections
    #[arg(long, default_value_t = MAX_NESTING_DEPTH)]
    max_depth: usize,
    /// Maximum document size in bytes, after decompression
    #[arg(long, default_value_t = MAX_DOCUMENT_SIZE)]
    max_size: usize,
    /// Log every decoded feature node as it completes
    #[arg(short, long)]
    progress: bool,
    /// Check the decoded tree against RFC 7946 structural rules
    #[arg(long)]
    validate: bool,
    /// Write the decoded tree back out as zstd-compressed GeoJSON
    #[arg(long, value_name = "OUT")]
    compress: Option<PathBuf>,
    /// zstd level for --compress
    #[arg(long, default_value_t = DEFAULT_COMPRESSION_LEVEL)]
    level: i32,
    /// Print debug output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn init_logger(&self) {
        let mut builder = pretty_env_logger::formatted_builder();
        builder.filter_level(if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        });
        if let Ok(filters) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filters);
        }
        builder.init();
    }

    fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            max_depth: self.max_depth,
            max_document_size: self.max_size,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    args.init_logger();

    let data = match fs::read(&args.input) {
        Ok(data) => data,
        Err(err) => {
            error!("couldn't read {:?}: {}", args.input, err);
            return ExitCode::FAILURE;
        }
    };
    info!(
        "read {} bytes from {:?}{}",
        data.len(),
        args.input,
        if is_compressed(&data) { " (zstd)" } else { "" }
    );

    let mut log_progress = |path: &[PathSegment], node: &Feature| {
        info!("decoded {} at {}", node.type_name(), format_path(path));
    };
    let progress = if args.progress {
        Some(&mut log_progress as &mut geojson_viewer::ProgressFn<'_>)
    } else {
        None
    };

    let root = match decode_document_bytes(&data, &args.decode_options(), progress) {
        Ok(root) => root,
        Err(err) => {
            error!("couldn't decode GeoJSON [{}]: {}", err.code().name(), err);
            return ExitCode::FAILURE;
        }
    };

    print_summary(&root);

    if let Some(out) = &args.compress {
        let compressed = match encode_document_compressed(&root, args.level) {
            Ok(compressed) => compressed,
            Err(err) => {
                error!("couldn't encode {}: {}", root.type_name(), err);
                return ExitCode::FAILURE;
            }
        };
        if let Err(err) = fs::write(out, &compressed) {
            error!("couldn't write {:?}: {}", out, err);
            return ExitCode::FAILURE;
        }
        info!(
            "wrote {} bytes to {:?} (level {})",
            compressed.len(),
            out,
            args.level
        );
    }

    if args.validate {
        match validate_feature(&root) {
            Ok(()) => println!("RFC 7946: ok"),
            Err(err) => {
                println!("RFC 7946: {}", err);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

fn print_summary(root: &Feature) {
    println!("\n=== Document ===");
    println!("Root: {}", root.type_name());
    if let Some(id) = root.id() {
        println!("ID: {}", id);
    }
    println!("Nodes: {}", root.node_count());

    let mut properties: Vec<_> = root.properties().iter().collect();
    properties.sort_by(|a, b| a.0.cmp(b.0));
    println!("Root properties: {}", properties.len());
    for (name, value) in properties {
        println!("  {:<20} {}", name, value.type_name());
    }

    let geometries = root.geometries();
    let mut kinds: BTreeMap<GeometryKind, usize> = BTreeMap::new();
    for geometry in &geometries {
        *kinds.entry(geometry.kind()).or_default() += 1;
    }
    let positions: usize = geometries.iter().map(|g| g.position_count()).sum();

    println!("\n=== Geometries ({}) ===", geometries.len());
    for (kind, count) in &kinds {
        println!("  {:<20} {}", kind.name(), count);
    }
    println!("  positions: {}", positions);

    let overlays = build_overlays(root);
    let polylines = overlays
        .iter()
        .filter(|o| matches!(o, Overlay::Polyline(_)))
        .count();

    println!("\n=== Overlays ({}) ===", overlays.len());
    println!("  polylines: {}", polylines);
    println!("  polygons:  {}", overlays.len() - polylines);
    match overlay_bounds(&overlays) {
        Some(b) => println!(
            "  bounds: lat {:.6}..{:.6}, lng {:.6}..{:.6}",
            b.south, b.north, b.west, b.east
        ),
        None => println!("  bounds: (nothing to draw)"),
    }
}
