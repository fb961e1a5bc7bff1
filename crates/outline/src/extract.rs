use image::GrayImage;
use imageproc::contours::{find_contours, BorderType};

use crate::types::Contour;

/// Force a mask to strict 0/255 membership. Model output is nominally
/// binary already, but anything nonzero counts as foreground.
pub fn binarize(mask: &GrayImage) -> GrayImage {
    imageproc::contrast::threshold(mask, 0)
}

/// Trace the exterior boundary of every connected foreground component.
///
/// Uses Suzuki border following with 8-connectivity. Only outer borders
/// are kept: a donut-shaped component yields its outer ring and nothing
/// for the hole. An all-background mask yields an empty set.
pub fn extract_outer_contours(mask: &GrayImage) -> Vec<Contour> {
    find_contours::<i32>(mask)
        .into_iter()
        .filter(|c| c.border_type == BorderType::Outer)
        .map(|c| Contour::new(c.points.iter().map(|p| [p.x, p.y]).collect()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn blank(width: u32, height: u32) -> GrayImage {
        GrayImage::new(width, height)
    }

    fn fill_rect(img: &mut GrayImage, x0: u32, y0: u32, x1: u32, y1: u32, value: u8) {
        for y in y0..=y1 {
            for x in x0..=x1 {
                img.put_pixel(x, y, Luma([value]));
            }
        }
    }

    #[test]
    fn empty_mask_yields_no_contours() {
        assert!(extract_outer_contours(&blank(50, 50)).is_empty());
    }

    #[test]
    fn single_blob_yields_one_contour() {
        let mut mask = blank(100, 100);
        fill_rect(&mut mask, 20, 20, 69, 69, 255);
        let contours = extract_outer_contours(&mask);
        assert_eq!(contours.len(), 1);
        // 50x50 filled square: boundary polygon spans 49x49 pixel centers.
        assert_eq!(contours[0].area(), 2401.0);
        assert_eq!(contours[0].bounding_box(), ([20, 20], [69, 69]));
    }

    #[test]
    fn disjoint_blobs_yield_one_contour_each() {
        let mut mask = blank(100, 100);
        fill_rect(&mut mask, 5, 5, 20, 20, 255);
        fill_rect(&mut mask, 60, 60, 90, 90, 255);
        assert_eq!(extract_outer_contours(&mask).len(), 2);
    }

    #[test]
    fn donut_yields_outer_boundary_only() {
        let mut mask = blank(60, 60);
        fill_rect(&mut mask, 10, 10, 49, 49, 255);
        fill_rect(&mut mask, 25, 25, 34, 34, 0);
        let contours = extract_outer_contours(&mask);
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].bounding_box(), ([10, 10], [49, 49]));
    }

    #[test]
    fn extraction_is_idempotent() {
        let mut mask = blank(80, 80);
        fill_rect(&mut mask, 12, 30, 55, 70, 255);
        fill_rect(&mut mask, 60, 5, 75, 18, 255);
        let first = extract_outer_contours(&mask);
        let second = extract_outer_contours(&mask);
        assert_eq!(first, second);
    }

    #[test]
    fn binarize_promotes_any_nonzero_to_full_white() {
        let mut mask = blank(10, 10);
        mask.put_pixel(3, 3, Luma([1]));
        mask.put_pixel(4, 4, Luma([200]));
        let binary = binarize(&mask);
        assert_eq!(binary.get_pixel(3, 3), &Luma([255]));
        assert_eq!(binary.get_pixel(4, 4), &Luma([255]));
        assert_eq!(binary.get_pixel(5, 5), &Luma([0]));
    }
}
