use geo_types::{Coord, LineString, Polygon};
use serde::{Deserialize, Serialize};

/// The exterior boundary of one connected foreground component.
///
/// Points are pixel coordinates in image space, ordered along the border.
/// The polygon is implicitly closed: the edge from the last point back to
/// the first is part of the boundary even though it is not stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contour {
    pub points: Vec<[i32; 2]>,
}

impl Contour {
    pub fn new(points: Vec<[i32; 2]>) -> Self {
        Self { points }
    }

    /// Convert to a geo-types polygon for geometric operations. The ring
    /// is closed by the constructor.
    pub fn to_geo_polygon(&self) -> Polygon<f64> {
        let coords: Vec<Coord<f64>> = self
            .points
            .iter()
            .map(|&[x, y]| Coord {
                x: x as f64,
                y: y as f64,
            })
            .collect();
        Polygon::new(LineString::new(coords), vec![])
    }

    /// Enclosed area in square pixels: the absolute value of the shoelace
    /// formula over the closed boundary polygon.
    pub fn area(&self) -> f64 {
        use geo::Area;
        self.to_geo_polygon().unsigned_area()
    }

    /// Axis-aligned bounding box as `([min_x, min_y], [max_x, max_y])`.
    pub fn bounding_box(&self) -> ([i32; 2], [i32; 2]) {
        let mut min = [i32::MAX, i32::MAX];
        let mut max = [i32::MIN, i32::MIN];
        for &[x, y] in &self.points {
            min[0] = min[0].min(x);
            min[1] = min[1].min(y);
            max[0] = max[0].max(x);
            max[1] = max[1].max(y);
        }
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_of_axis_aligned_rectangle() {
        let contour = Contour::new(vec![[0, 0], [9, 0], [9, 9], [0, 9]]);
        assert_eq!(contour.area(), 81.0);
    }

    #[test]
    fn area_is_orientation_independent() {
        let cw = Contour::new(vec![[0, 0], [0, 4], [4, 4], [4, 0]]);
        let ccw = Contour::new(vec![[0, 0], [4, 0], [4, 4], [0, 4]]);
        assert_eq!(cw.area(), ccw.area());
    }

    #[test]
    fn degenerate_contour_has_zero_area() {
        assert_eq!(Contour::new(vec![[3, 3]]).area(), 0.0);
        assert_eq!(Contour::new(vec![[0, 0], [5, 5]]).area(), 0.0);
    }

    #[test]
    fn bounding_box_spans_all_points() {
        let contour = Contour::new(vec![[2, 7], [10, 3], [5, 5]]);
        assert_eq!(contour.bounding_box(), ([2, 3], [10, 7]));
    }
}
