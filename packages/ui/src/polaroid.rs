//! Scatter layout of the learning gallery: every card is tilted and nudged
//! vertically by its position in a repeating group of four.

const ROTATIONS: [i32; 4] = [-12, -4, 4, 12];

/// Tilt in degrees.
pub fn rotation(index: usize) -> i32 {
    ROTATIONS[index % ROTATIONS.len()]
}

/// Vertical offset in pixels.
pub fn y_offset(index: usize) -> i32 {
    match index % 4 {
        0 => -20,
        3 => 80,
        _ => 30,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_repeats_every_four() {
        let rotations: Vec<_> = (0..6).map(rotation).collect();
        assert_eq!(rotations, vec![-12, -4, 4, 12, -12, -4]);
        let offsets: Vec<_> = (0..5).map(y_offset).collect();
        assert_eq!(offsets, vec![-20, 30, 30, 80, -20]);
    }
}
