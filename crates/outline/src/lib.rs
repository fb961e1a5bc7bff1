//! # Mask outline extraction
//!
//! Turns per-pixel binary masks into validated exterior boundary contours.
//! Extraction keeps only outer borders (holes inside a component are never
//! reported), and filtering compares each contour's shoelace area against a
//! minimum-area threshold.
//!
//! ```rust
//! use image::{GrayImage, Luma};
//! use outline::{extract_outer_contours, filter_by_area};
//!
//! let mut mask = GrayImage::new(100, 100);
//! for y in 20..70 {
//!     for x in 20..70 {
//!         mask.put_pixel(x, y, Luma([255u8]));
//!     }
//! }
//!
//! let contours = extract_outer_contours(&mask);
//! let kept = filter_by_area(contours, 1000.0);
//! assert_eq!(kept.len(), 1);
//! ```

pub mod extract;
pub mod filter;
pub mod types;

pub use extract::{binarize, extract_outer_contours};
pub use filter::filter_by_area;
pub use types::Contour;
