/// A key center (or any path vertex) in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Computes the length of every segment of the polyline `(xs[i], ys[i])`.
/// xs: x coordinates, ys: y coordinates (same length).
/// Returns `len - 1` distances, or an empty vector for fewer than two points.
pub fn segment_lengths(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    xs.windows(2)
        .zip(ys.windows(2))
        .map(|(x, y)| {
            let dx = x[1] - x[0];
            let dy = y[1] - y[0];
            (dx * dx + dy * dy).sqrt()
        })
        .collect()
}

/// Total arc length of the polyline.
pub fn polygon_length(xs: &[f64], ys: &[f64]) -> f64 {
    segment_lengths(xs, ys).iter().sum()
}

/// Splits a point sequence into separate x and y coordinate arrays, in order.
pub fn split_axes(points: &[Point]) -> (Vec<f64>, Vec<f64>) {
    points.iter().map(|p| (p.x, p.y)).unzip()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance_345() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_relative_eq!(a.distance(&b), 5.0);
        assert_relative_eq!(b.distance(&a), 5.0);
    }

    #[test]
    fn test_segment_lengths_count() {
        let xs = [5.0, 15.0, 15.0, 25.0];
        let ys = [5.0, 5.0, 5.0, 5.0];
        let segs = segment_lengths(&xs, &ys);
        assert_eq!(segs, vec![10.0, 0.0, 10.0]);
        assert_relative_eq!(polygon_length(&xs, &ys), 20.0);
    }

    #[test]
    fn test_short_paths_have_no_segments() {
        assert!(segment_lengths(&[], &[]).is_empty());
        assert!(segment_lengths(&[1.0], &[2.0]).is_empty());
        assert_eq!(polygon_length(&[1.0], &[2.0]), 0.0);
    }

    #[test]
    fn test_split_axes_keeps_order() {
        let points = [Point::new(1.0, 2.0), Point::new(3.0, 4.0), Point::new(5.0, 6.0)];
        let (xs, ys) = split_axes(&points);
        assert_eq!(xs, vec![1.0, 3.0, 5.0]);
        assert_eq!(ys, vec![2.0, 4.0, 6.0]);
    }
}
