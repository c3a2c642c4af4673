//! The S-curve drawn behind the feedback page header.

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Points of a gentle sigmoid spanning `width` x `height`, sampled over
/// x in [-10, 10], formatted for an SVG `polyline`.
pub fn sigmoid_points(width: f64, height: f64, offset_y: f64, samples: usize) -> String {
    let samples = samples.max(2);
    (0..samples)
        .map(|i| {
            let x = -10.0 + 20.0 * i as f64 / (samples - 1) as f64;
            let px = (x + 10.0) / 20.0 * width;
            let py = sigmoid(x / 2.0) * height + offset_y;
            format!("{px:.1},{py:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_endpoints() {
        let points = sigmoid_points(200.0, 100.0, 0.0, 3);
        let parts: Vec<_> = points.split(' ').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts[0].starts_with("0.0,0.7"));
        assert_eq!(parts[1], "100.0,50.0");
        assert!(parts[2].starts_with("200.0,99.3"));
    }

    #[test]
    fn test_offset_shifts_y() {
        let points = sigmoid_points(200.0, 100.0, 100.0, 3);
        assert!(points.contains("100.0,150.0"));
    }
}
