//! Axis math shared by the SVG charts.

/// Round a data maximum up to a "nice" axis ceiling: 1, 2 or 5 times a power
/// of ten. Zero input keeps the axis at 1 so bars never divide by zero.
pub fn nice_max(data_max: f64) -> f64 {
    if data_max <= 0.0 {
        return 1.0;
    }
    let exponent = data_max.log10().floor();
    let magnitude = 10f64.powf(exponent);
    let fraction = data_max / magnitude;
    let nice_fraction = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice_fraction * magnitude
}

/// Pixel height of a value on a chart of `plot_height` pixels with the given
/// axis ceiling.
pub fn scaled_height(value: f64, axis_max: f64, plot_height: f64) -> f64 {
    if axis_max <= 0.0 {
        return 0.0;
    }
    (value / axis_max).clamp(0.0, 1.0) * plot_height
}

/// Evenly spaced tick values from zero to the ceiling, ceiling included.
pub fn ticks(axis_max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return vec![];
    }
    (0..=count)
        .map(|i| axis_max * i as f64 / count as f64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_ceilings() {
        assert_eq!(nice_max(0.0), 1.0);
        assert_eq!(nice_max(7.0), 10.0);
        assert_eq!(nice_max(42.0), 50.0);
        assert_eq!(nice_max(180.0), 200.0);
        assert_eq!(nice_max(9800.0), 10_000.0);
        assert_eq!(nice_max(10_000.0), 10_000.0);
    }

    #[test]
    fn heights_are_proportional_and_clamped() {
        assert_eq!(scaled_height(50.0, 100.0, 300.0), 150.0);
        assert_eq!(scaled_height(0.0, 100.0, 300.0), 0.0);
        assert_eq!(scaled_height(200.0, 100.0, 300.0), 300.0);
        assert_eq!(scaled_height(10.0, 0.0, 300.0), 0.0);
    }

    #[test]
    fn tick_spacing() {
        assert_eq!(ticks(100.0, 4), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
        assert!(ticks(100.0, 0).is_empty());
    }
}
