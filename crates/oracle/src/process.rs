//! SAM runner integration over a child-process JSON handshake.
//!
//! The runner is a Python script owning the model weights. Per invocation
//! we hand it a request file describing the image and the generator
//! configuration; it writes one PNG per mask into a scratch directory and
//! prints a JSON manifest on stdout.

use std::path::{Path, PathBuf};
use std::process::Command;

use image::RgbImage;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    config::SamConfig,
    error::{OracleError, Result},
    MaskCandidate, MaskOracle,
};

#[derive(Serialize)]
struct RunnerRequest<'a> {
    image_path: &'a Path,
    mask_dir: &'a Path,
    #[serde(flatten)]
    config: &'a SamConfig,
}

#[derive(Deserialize)]
struct RunnerResponse {
    masks: Vec<MaskEntry>,
}

#[derive(Deserialize)]
struct MaskEntry {
    mask_path: PathBuf,
    predicted_iou: f32,
    stability_score: f32,
}

/// Production oracle: shells out to a SAM runner script.
///
/// The model is loaded once by the long-lived script environment; this
/// handle only carries the interpreter, the script path, and the frozen
/// generator configuration.
pub struct SamProcessOracle {
    interpreter: PathBuf,
    script: PathBuf,
    config: SamConfig,
}

impl SamProcessOracle {
    pub fn new(script: impl Into<PathBuf>, config: SamConfig) -> Self {
        Self {
            interpreter: PathBuf::from("python3"),
            script: script.into(),
            config,
        }
    }

    /// Use a specific interpreter (e.g. a venv or `uv run` shim) instead
    /// of `python3` from PATH.
    pub fn with_interpreter(mut self, interpreter: impl Into<PathBuf>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    pub fn config(&self) -> &SamConfig {
        &self.config
    }

    fn invoke_runner(&self, request_path: &Path) -> Result<RunnerResponse> {
        let output = Command::new(&self.interpreter)
            .arg(&self.script)
            .arg("--request")
            .arg(request_path)
            .output()
            .map_err(|source| OracleError::Spawn {
                command: self.interpreter.display().to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(OracleError::RunnerFailed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(serde_json::from_slice(&output.stdout)?)
    }
}

impl MaskOracle for SamProcessOracle {
    fn generate_masks(&self, image: &RgbImage) -> Result<Vec<MaskCandidate>> {
        let scratch = tempfile::tempdir()?;
        let image_path = scratch.path().join("input.png");
        let mask_dir = scratch.path().join("masks");
        std::fs::create_dir(&mask_dir)?;

        image
            .save(&image_path)
            .map_err(|source| OracleError::ImageStage {
                path: image_path.clone(),
                source,
            })?;

        let request = RunnerRequest {
            image_path: &image_path,
            mask_dir: &mask_dir,
            config: &self.config,
        };
        let request_path = scratch.path().join("request.json");
        std::fs::write(&request_path, serde_json::to_vec(&request)?)?;

        let response = self.invoke_runner(&request_path)?;
        debug!(masks = response.masks.len(), "runner returned mask manifest");

        let mut candidates = Vec::with_capacity(response.masks.len());
        for entry in response.masks {
            let segmentation = image::open(&entry.mask_path)
                .map_err(|source| OracleError::MaskLoad {
                    path: entry.mask_path.clone(),
                    source,
                })?
                .to_luma8();
            candidates.push(MaskCandidate {
                segmentation,
                predicted_iou: entry.predicted_iou,
                stability_score: entry.stability_score,
            });
        }
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Device;

    #[test]
    fn request_embeds_config_fields_flat() {
        let config = SamConfig {
            device: Device::Cpu,
            ..SamConfig::default()
        };
        let request = RunnerRequest {
            image_path: Path::new("/tmp/in.png"),
            mask_dir: Path::new("/tmp/masks"),
            config: &config,
        };
        let value: serde_json::Value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["image_path"], "/tmp/in.png");
        assert_eq!(value["device"], "cpu");
        assert_eq!(value["points_per_side"], 32);
        assert_eq!(value["min_mask_region_area"], 50_000);
    }

    #[test]
    fn manifest_parses_scores_and_paths() {
        let raw = r#"{
            "masks": [
                {"mask_path": "/tmp/masks/0.png", "predicted_iou": 0.97, "stability_score": 0.96},
                {"mask_path": "/tmp/masks/1.png", "predicted_iou": 0.95, "stability_score": 0.99}
            ]
        }"#;
        let response: RunnerResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.masks.len(), 2);
        assert_eq!(response.masks[0].mask_path, PathBuf::from("/tmp/masks/0.png"));
        assert!(response.masks[1].stability_score > 0.98);
    }
}
