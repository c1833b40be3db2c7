//! Window function implementations

use std::f32::consts::PI;

/// Create a periodic Hann window
pub fn hann_window(size: usize) -> Vec<f32> {
    let n = size as f32;
    (0..size)
        .map(|i| 0.5 * (1.0 - (2.0 * PI * i as f32 / n).cos()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hann_window() {
        let window = hann_window(4);
        assert!((window[0]).abs() < 0.01); // Should be ~0 at edges
        assert!((window[2] - 1.0).abs() < 0.01); // Should be ~1 at center
    }

    #[test]
    fn test_hann_window_empty() {
        assert!(hann_window(0).is_empty());
    }
}
