//! Tests for random glyph generation

#[cfg(test)]
mod tests {
    use invaderwall::glyph::{generate_glyph, validate_detail};
    use invaderwall::io::configuration::MAX_DETAIL;
    use invaderwall::math::RandomSource;

    // Tests every glyph is square with binary values
    // Verified by omitting the middle row
    #[test]
    fn test_glyph_shape_and_values() {
        let mut rng = RandomSource::new(5);
        for detail in (1..=11).step_by(2) {
            let glyph = generate_glyph(&mut rng, detail).unwrap();
            let side = detail as usize;
            assert_eq!(glyph.detail(), side);
            assert_eq!(glyph.cells().dim(), (side, side));
            assert!(glyph.cells().iter().all(|&v| v <= 1));
        }
    }

    // Tests left-right symmetry across many glyphs
    // Verified by drawing the mirrored half independently
    #[test]
    fn test_glyphs_are_mirror_symmetric() {
        let mut rng = RandomSource::new(2106);
        for detail in [1, 3, 5, 7, 9] {
            for _ in 0..50 {
                let glyph = generate_glyph(&mut rng, detail).unwrap();
                assert!(glyph.is_mirror_symmetric(), "asymmetric glyph:\n{glyph}");
                let detail = glyph.detail();
                for row in 0..detail {
                    for col in 0..detail {
                        assert_eq!(glyph.is_set(row, col), glyph.is_set(row, detail - 1 - col));
                    }
                }
            }
        }
    }

    // Tests zero detail is rejected
    // Verified by removing the detail guard
    #[test]
    fn test_zero_detail_rejected() {
        let mut rng = RandomSource::new(1);
        let err = generate_glyph(&mut rng, 0).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    // Tests even detail is rejected instead of yielding a detail x (detail + 1) glyph
    // Verified by removing the parity check
    #[test]
    fn test_even_detail_rejected() {
        let mut rng = RandomSource::new(5);
        for detail in [2, 4, 6, 8, 10] {
            let err = generate_glyph(&mut rng, detail).unwrap_err();
            assert!(err.is_invalid_parameter(), "detail {detail}: {err}");
        }

        // Rejection happens before any bit is drawn
        let after = generate_glyph(&mut rng, 3).unwrap();
        assert_eq!(after, generate_glyph(&mut RandomSource::new(5), 3).unwrap());
    }

    // Tests the accepted detail range at both ends yields square glyphs
    // Verified by raising the maximum detail by one
    #[test]
    fn test_detail_bounds_are_square() {
        let mut rng = RandomSource::new(9);
        for detail in [1, MAX_DETAIL] {
            let glyph = generate_glyph(&mut rng, detail).unwrap();
            let side = detail as usize;
            assert_eq!(glyph.cells().dim(), (side, side));
            assert!(glyph.is_mirror_symmetric());
        }

        assert!(validate_detail(MAX_DETAIL).is_ok());
        assert!(validate_detail(MAX_DETAIL + 1).is_err());
        assert!(validate_detail(MAX_DETAIL + 2).is_err());
    }

    // Tests the glyph is built from draws in the documented order
    // Verified by drawing the middle row before the half
    #[test]
    fn test_glyph_matches_manual_construction() {
        let detail = 5;
        let half = detail / 2;
        let glyph = generate_glyph(&mut RandomSource::new(321), 5).unwrap();

        let mut replay = RandomSource::new(321);
        let half_rows: Vec<Vec<u8>> = (0..half)
            .map(|_| (0..detail).map(|_| replay.bit()).collect())
            .collect();
        let middle: Vec<u8> = (0..detail).map(|_| replay.bit()).collect();

        let mut stacked = half_rows.clone();
        stacked.push(middle);
        stacked.extend(half_rows.iter().rev().cloned());
        assert_eq!(stacked.len(), detail);

        for i in 0..detail {
            for j in 0..detail {
                let expected = stacked[j][detail - 1 - i] == 1;
                assert_eq!(glyph.is_set(i, j), expected, "mismatch at ({i}, {j})");
            }
        }
    }

    // Tests consecutive glyphs continue one random sequence
    // Verified by reseeding inside the generator
    #[test]
    fn test_shared_source_advances() {
        let detail = 7;
        let mut shared = RandomSource::new(77);
        let first = generate_glyph(&mut shared, detail).unwrap();
        let second = generate_glyph(&mut shared, detail).unwrap();

        // Half of 3 rows plus a middle row, 7 bits each
        let mut skipped = RandomSource::new(77);
        for _ in 0..4 * 7 {
            skipped.bit();
        }
        let expected_second = generate_glyph(&mut skipped, detail).unwrap();

        assert_eq!(second, expected_second);
        assert_eq!(first, generate_glyph(&mut RandomSource::new(77), detail).unwrap());
    }

    // Tests filled cells list exactly the set pixels
    // Verified by skipping the filter in filled_cells
    #[test]
    fn test_filled_cells_consistent() {
        let glyph = generate_glyph(&mut RandomSource::new(8), 9).unwrap();
        let filled: Vec<(usize, usize)> = glyph.filled_cells().collect();

        assert_eq!(filled.len(), glyph.cells().iter().filter(|&&v| v == 1).count());
        assert!(filled.iter().all(|&(r, c)| glyph.is_set(r, c)));
        assert!(!glyph.is_set(9, 0));
    }

    // Tests the text rendering has one line per row
    // Verified by dropping the newline per row
    #[test]
    fn test_display_rows() {
        let glyph = generate_glyph(&mut RandomSource::new(3), 5).unwrap();
        let text = glyph.to_string();

        assert_eq!(text.lines().count(), 5);
        assert!(text.lines().all(|line| line.chars().count() == 5));
        assert_eq!(text.matches('#').count(), glyph.filled_cells().count());
    }
}
