use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use oracle::MaskOracle;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::{
    compositor::draw_contours,
    error::Result,
    naming::OutputName,
};

/// Extensions treated as images; everything else is skipped silently.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// The two area thresholds the pipeline is parameterized by. The mask
/// region area is applied inside the oracle; it appears here because the
/// output filename embeds both values. No relationship between the two is
/// enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VizParams {
    pub min_mask_region_area: u32,
    pub min_contour_area: u32,
}

impl Default for VizParams {
    fn default() -> Self {
        Self {
            min_mask_region_area: 50_000,
            min_contour_area: 2_000,
        }
    }
}

/// Per-batch outcome counts. `failed` covers decode, oracle, and write
/// failures; each is reported and the batch moves on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Run the full pipeline for one image and write the visualization under
/// `output_root`. Returns the path of the written file.
pub fn visualize_image(
    oracle: &dyn MaskOracle,
    input_path: &Path,
    output_root: &Path,
    params: &VizParams,
) -> Result<PathBuf> {
    let image = image::open(input_path)?.to_rgb8();

    let masks = oracle.generate_masks(&image)?;
    debug!(path = %input_path.display(), masks = masks.len(), "oracle returned masks");

    let mut contours = Vec::new();
    for candidate in &masks {
        let binary = outline::binarize(&candidate.segmentation);
        contours.extend(outline::extract_outer_contours(&binary));
    }
    let contours = outline::filter_by_area(contours, params.min_contour_area as f64);

    let canvas = draw_contours(&image, &contours);

    let name = OutputName::for_input(
        input_path,
        params.min_mask_region_area,
        params.min_contour_area,
    );
    let output_path = output_root.join(name.file_name());
    canvas.save(&output_path)?;
    Ok(output_path)
}

/// Recursively process every image file under `input_root`, writing all
/// visualizations flat into `output_root` (created if absent).
///
/// Files are processed strictly one at a time. A failing file is logged
/// and counted; it never aborts the rest of the batch, and outputs already
/// written stay in place.
pub fn process_folder(
    oracle: &dyn MaskOracle,
    input_root: &Path,
    output_root: &Path,
    params: &VizParams,
) -> Result<BatchSummary> {
    fs::create_dir_all(output_root)?;
    let mut summary = BatchSummary::default();
    visit_dir(oracle, input_root, output_root, params, &mut summary)?;
    info!(
        processed = summary.processed,
        skipped = summary.skipped,
        failed = summary.failed,
        "batch complete"
    );
    Ok(summary)
}

fn visit_dir(
    oracle: &dyn MaskOracle,
    dir: &Path,
    output_root: &Path,
    params: &VizParams,
    summary: &mut BatchSummary,
) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            visit_dir(oracle, &path, output_root, params, summary)?;
        } else if is_image_file(&path) {
            match visualize_image(oracle, &path, output_root, params) {
                Ok(output_path) => {
                    info!(output = %output_path.display(), "visualization saved");
                    summary.processed += 1;
                }
                Err(err) => {
                    error!(path = %path.display(), %err, "failed to process image");
                    summary.failed += 1;
                }
            }
        } else {
            debug!(path = %path.display(), "skipping non-image file");
            summary.skipped += 1;
        }
    }
    Ok(())
}

fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}
