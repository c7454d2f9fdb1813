//! Tests for dimension normalization and advisory messages

#[cfg(test)]
mod tests {
    use mazegrid::algorithm::normalize::{Advisory, Axis, normalize};

    // Tests even values on both axes are bumped and reported
    // Verified by skipping the parity repair
    #[test]
    fn test_even_dimensions_are_incremented() {
        let (dimensions, advisories) = normalize(24, 24);

        assert_eq!((dimensions.height(), dimensions.width()), (25, 25));
        assert_eq!(advisories.len(), 2);
        assert_eq!(advisories[0].to_string(), "height is even, incremented by 1");
        assert_eq!(advisories[1].to_string(), "width is even, incremented by 1");
    }

    // Tests a tiny height falls back to the default while width is repaired separately
    // Verified by chaining the parity check after the default substitution
    #[test]
    fn test_below_minimum_and_even_are_independent() {
        let (dimensions, advisories) = normalize(1, 10);

        assert_eq!((dimensions.height(), dimensions.width()), (25, 11));
        assert_eq!(
            advisories,
            vec![
                Advisory::BelowMinimum {
                    axis: Axis::Height,
                    requested: 1,
                    replacement: 25,
                },
                Advisory::Even {
                    axis: Axis::Width,
                    requested: 10,
                    replacement: 11,
                },
            ]
        );
        assert_eq!(
            advisories[0].to_string(),
            "height below minimum, defaulted to 25"
        );
    }

    #[test]
    fn test_valid_dimensions_are_untouched() {
        let (dimensions, advisories) = normalize(25, 25);

        assert_eq!((dimensions.height(), dimensions.width()), (25, 25));
        assert!(advisories.is_empty());
    }

    // Tests the minimum boundary: 2 is kept and repaired, anything lower is replaced
    #[test]
    fn test_minimum_boundary() {
        let (dimensions, advisories) = normalize(2, -7);

        assert_eq!((dimensions.height(), dimensions.width()), (3, 25));
        assert_eq!(advisories[0].axis(), Axis::Height);
        assert!(matches!(advisories[0], Advisory::Even { .. }));
        assert_eq!(advisories[1].axis(), Axis::Width);
        assert!(matches!(advisories[1], Advisory::BelowMinimum { .. }));
    }

    // Tests every output is odd and at least 3 across a sweep of inputs
    // Verified by returning even defaults
    #[test]
    fn test_outputs_always_odd_and_large_enough() {
        for height in -5..40 {
            for width in [i64::MIN, -1, 0, 1, 2, 3, 4, 99, 100] {
                let (dimensions, _) = normalize(height, width);
                for value in [dimensions.height(), dimensions.width()] {
                    assert_eq!(value % 2, 1, "{height}x{width} produced {value}");
                    assert!(value >= 3, "{height}x{width} produced {value}");
                }
            }
        }
    }
}
