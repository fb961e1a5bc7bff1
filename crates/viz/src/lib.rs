//! # Segmentation visualization pipeline
//!
//! Drives the batch: walk an input tree, ask the [`oracle`] for candidate
//! masks per image, turn masks into exterior contours via [`outline`],
//! drop contours under the area threshold, stroke the survivors in green
//! over a copy of the source, and save the result under a timestamped,
//! parameter-qualified name.
//!
//! ```rust,no_run
//! use oracle::{SamConfig, SamProcessOracle};
//! use viz::{process_folder, VizParams};
//! # use std::path::Path;
//!
//! let oracle = SamProcessOracle::new("sam_runner.py", SamConfig::default());
//! let summary = process_folder(
//!     &oracle,
//!     Path::new("input"),
//!     Path::new("output/visualization"),
//!     &VizParams::default(),
//! )?;
//! println!("{} images processed", summary.processed);
//! # Ok::<(), viz::VizError>(())
//! ```

pub mod batch;
pub mod compositor;
pub mod error;
pub mod naming;

pub use batch::{process_folder, visualize_image, BatchSummary, VizParams};
pub use compositor::{draw_contours, OUTLINE_COLOR, STROKE_WIDTH};
pub use error::{Result, VizError};
pub use naming::OutputName;
