use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Compute device for the segmentation model. `Auto` lets the runner pick
/// an accelerator when one is available and fall back to the CPU otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    #[default]
    Auto,
    Cuda,
    Cpu,
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Auto => write!(f, "auto"),
            Device::Cuda => write!(f, "cuda"),
            Device::Cpu => write!(f, "cpu"),
        }
    }
}

/// Configuration for the automatic mask generator. All tuning knobs are
/// forwarded to the runner unchanged; the core never interprets them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamConfig {
    /// Path to the model checkpoint (e.g. `sam_vit_h_4b8939.pth`).
    pub checkpoint: PathBuf,
    /// Model variant, e.g. `vit_h` or `vit_l`.
    pub model_type: String,
    pub device: Device,
    pub points_per_side: u32,
    pub points_per_batch: u32,
    pub pred_iou_thresh: f32,
    pub stability_score_thresh: f32,
    pub box_nms_thresh: f32,
    pub crop_n_layers: u32,
    pub crop_n_points_downscale_factor: u32,
    /// Minimum mask region area, applied inside the generator itself.
    pub min_mask_region_area: u32,
}

impl Default for SamConfig {
    fn default() -> Self {
        Self {
            checkpoint: PathBuf::from("sam_vit_h_4b8939.pth"),
            model_type: "vit_h".to_string(),
            device: Device::Auto,
            points_per_side: 32,
            points_per_batch: 64,
            pred_iou_thresh: 0.95,
            stability_score_thresh: 0.95,
            box_nms_thresh: 0.8,
            crop_n_layers: 1,
            crop_n_points_downscale_factor: 2,
            min_mask_region_area: 50_000,
        }
    }
}
