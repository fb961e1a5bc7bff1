use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use oracle::{Device, SamConfig, SamProcessOracle};
use tracing::info;
use tracing_subscriber::{self, EnvFilter};
use viz::{process_folder, VizParams};

/// Batch SAM mask visualization: segment every image under the input
/// directory and save annotated copies with object boundaries drawn.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory tree of input images (.png/.jpg/.jpeg)
    #[arg(short, long)]
    input: PathBuf,

    /// Directory for the visualization images (created if absent)
    #[arg(short, long)]
    output: PathBuf,

    /// SAM runner script invoked per image
    #[arg(long, default_value = "sam_runner.py")]
    runner: PathBuf,

    /// Python interpreter used to launch the runner
    #[arg(long, default_value = "python3")]
    interpreter: PathBuf,

    /// Path to the SAM model checkpoint
    #[arg(long, default_value = "sam_vit_h_4b8939.pth")]
    checkpoint: PathBuf,

    /// Model variant (vit_h, vit_l, ...)
    #[arg(long, default_value = "vit_h")]
    model_type: String,

    /// Compute device: auto, cuda or cpu
    #[arg(long, default_value = "auto")]
    device: String,

    /// Minimum mask region area, applied inside the mask generator
    #[arg(long, default_value = "50000")]
    min_mask_region_area: u32,

    /// Minimum contour area in pixels; smaller boundaries are dropped
    #[arg(long, default_value = "2000")]
    min_contour_area: u32,

    /// Sample points per image side
    #[arg(long, default_value = "32")]
    points_per_side: u32,

    /// Predicted IoU threshold for keeping a mask
    #[arg(long, default_value = "0.95")]
    pred_iou_thresh: f32,

    /// Stability score threshold for keeping a mask
    #[arg(long, default_value = "0.95")]
    stability_score_thresh: f32,

    /// Box NMS threshold for overlapping masks
    #[arg(long, default_value = "0.8")]
    box_nms_thresh: f32,

    /// Number of crop layers in the generator
    #[arg(long, default_value = "1")]
    crop_n_layers: u32,
}

fn parse_device(raw: &str) -> Result<Device> {
    match raw {
        "auto" => Ok(Device::Auto),
        "cuda" => Ok(Device::Cuda),
        "cpu" => Ok(Device::Cpu),
        other => Err(color_eyre::eyre::eyre!("unknown device `{other}`")),
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = SamConfig {
        checkpoint: cli.checkpoint,
        model_type: cli.model_type,
        device: parse_device(&cli.device)?,
        points_per_side: cli.points_per_side,
        pred_iou_thresh: cli.pred_iou_thresh,
        stability_score_thresh: cli.stability_score_thresh,
        box_nms_thresh: cli.box_nms_thresh,
        crop_n_layers: cli.crop_n_layers,
        min_mask_region_area: cli.min_mask_region_area,
        ..SamConfig::default()
    };

    // One oracle for the whole batch: the model handle is constructed once
    // and shared read-only across every image.
    let oracle = SamProcessOracle::new(cli.runner, config).with_interpreter(cli.interpreter);

    let params = VizParams {
        min_mask_region_area: cli.min_mask_region_area,
        min_contour_area: cli.min_contour_area,
    };

    let summary = process_folder(&oracle, &cli.input, &cli.output, &params)?;
    info!(
        processed = summary.processed,
        skipped = summary.skipped,
        failed = summary.failed,
        "done"
    );
    Ok(())
}
