use crate::types::Contour;

/// Keep contours whose enclosed area is at least `min_area` square pixels.
///
/// Pure and order-preserving. A threshold of zero admits everything.
pub fn filter_by_area(contours: Vec<Contour>, min_area: f64) -> Vec<Contour> {
    contours
        .into_iter()
        .filter(|c| c.area() >= min_area)
        .collect()
}
