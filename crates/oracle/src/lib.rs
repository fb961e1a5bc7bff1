//! Segmentation oracle abstraction.
//!
//! The mask generator is a deep-learning artifact living outside this
//! workspace. This crate pins down the one capability the pipeline needs
//! from it ([`MaskOracle::generate_masks`]) and ships a production
//! implementation that drives a SAM runner script in a child process.
//! Everything downstream depends only on the trait, so tests substitute a
//! deterministic stub.

pub mod config;
pub mod error;
pub mod process;

pub use config::{Device, SamConfig};
pub use error::{OracleError, Result};
pub use process::SamProcessOracle;

use image::{GrayImage, RgbImage};

/// One candidate object region proposed by the segmentation model.
///
/// The segmentation is a binary membership grid with the same dimensions
/// as the source image; nonzero pixels belong to the region. The quality
/// scores are produced by the model and passed along untouched.
#[derive(Debug, Clone)]
pub struct MaskCandidate {
    pub segmentation: GrayImage,
    pub predicted_iou: f32,
    pub stability_score: f32,
}

/// A source of candidate object masks for an image.
///
/// Implementations are constructed once, before batch processing begins,
/// and shared read-only across all invocations. The returned set is
/// unordered; callers must not rely on its iteration order.
pub trait MaskOracle: Send + Sync {
    fn generate_masks(&self, image: &RgbImage) -> Result<Vec<MaskCandidate>>;
}
