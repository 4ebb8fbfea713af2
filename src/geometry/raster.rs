/// One horizontal run of pixels, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub y: i32,
    pub x_start: i32,
    pub x_end: i32,
}

/// Scanline fill of a convex polygon given in pixel coordinates.
///
/// Rows are sampled at pixel centers; each row yields at most one span
/// between the leftmost and rightmost edge crossing.
pub fn convex_spans(polygon: &[(f32, f32)]) -> Vec<Span> {
    if polygon.len() < 3 {
        return Vec::new();
    }

    let min_y = polygon.iter().map(|p| p.1).fold(f32::INFINITY, f32::min);
    let max_y = polygon.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max);

    let mut spans = Vec::new();
    for y in (min_y.floor() as i32)..(max_y.ceil() as i32) {
        let center = y as f32 + 0.5;
        let mut left = f32::INFINITY;
        let mut right = f32::NEG_INFINITY;

        for (i, a) in polygon.iter().enumerate() {
            let b = polygon[(i + 1) % polygon.len()];
            let (low, high) = if a.1 < b.1 { (*a, b) } else { (b, *a) };
            if low.1 == high.1 || center < low.1 || center >= high.1 {
                continue;
            }
            let t = (center - low.1) / (high.1 - low.1);
            let x = low.0 + t * (high.0 - low.0);
            left = left.min(x);
            right = right.max(x);
        }

        if left.is_finite() && right.is_finite() {
            let x_start = left.round() as i32;
            let x_end = right.round() as i32 - 1;
            if x_end >= x_start {
                spans.push(Span { y, x_start, x_end });
            }
        }
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_fills_every_row() {
        let square = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
        let spans = convex_spans(&square);
        assert_eq!(spans.len(), 10);
        for (row, span) in spans.iter().enumerate() {
            assert_eq!(
                *span,
                Span {
                    y: row as i32,
                    x_start: 0,
                    x_end: 9,
                }
            );
        }
    }

    #[test]
    fn triangle_narrows_towards_apex() {
        let triangle = [(0.0, 10.0), (20.0, 10.0), (10.0, 0.0)];
        let spans = convex_spans(&triangle);
        let first = spans.first().unwrap();
        let last = spans.last().unwrap();
        assert!(first.x_end - first.x_start < last.x_end - last.x_start);
    }

    #[test]
    fn degenerate_polygons_produce_nothing() {
        assert!(convex_spans(&[(0.0, 0.0), (5.0, 5.0)]).is_empty());
        assert!(convex_spans(&[(0.0, 1.0), (5.0, 1.0), (9.0, 1.0)]).is_empty());
    }
}
