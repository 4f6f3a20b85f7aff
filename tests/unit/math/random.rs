//! Tests for the seeded random source

#[cfg(test)]
mod tests {
    use invaderwall::math::RandomSource;

    // Tests identical seeds produce identical sequences
    // Verified by seeding from system entropy instead of the seed
    #[test]
    fn test_same_seed_same_sequence() {
        let mut first = RandomSource::new(2106);
        let mut second = RandomSource::new(2106);

        let a: Vec<Option<usize>> = (0..64).map(|_| first.integer(0, 1000)).collect();
        let b: Vec<Option<usize>> = (0..64).map(|_| second.integer(0, 1000)).collect();

        assert_eq!(a, b);
    }

    // Tests different seeds diverge
    // Verified by ignoring the seed argument
    #[test]
    fn test_different_seeds_differ() {
        let mut first = RandomSource::new(1);
        let mut second = RandomSource::new(2);

        let a: Vec<u8> = (0..64).map(|_| first.bit()).collect();
        let b: Vec<u8> = (0..64).map(|_| second.bit()).collect();

        assert_ne!(a, b);
    }

    // Tests integers stay in the half-open range
    // Verified by switching to an inclusive range
    #[test]
    fn test_integer_range_bounds() {
        let mut rng = RandomSource::new(7);
        for _ in 0..500 {
            let value = rng.integer(3, 6).unwrap();
            assert!((3..6).contains(&value));
        }
    }

    // Tests an empty range yields nothing and leaves the sequence untouched
    // Verified by drawing before checking the range
    #[test]
    fn test_empty_range_consumes_no_draw() {
        let mut probed = RandomSource::new(11);
        let mut untouched = RandomSource::new(11);

        assert_eq!(probed.integer(4, 4), None);
        assert_eq!(probed.integer(5, 2), None);
        assert_eq!(probed.integer(0, 100), untouched.integer(0, 100));
    }

    // Tests bits are binary and both values occur
    // Verified by widening the bit range
    #[test]
    fn test_bits_are_binary() {
        let mut rng = RandomSource::new(42);
        let bits: Vec<u8> = (0..200).map(|_| rng.bit()).collect();

        assert!(bits.iter().all(|&b| b <= 1));
        assert!(bits.contains(&0));
        assert!(bits.contains(&1));
    }

    // Tests pick is one uniform index draw over the slice
    // Verified by drawing the index twice inside pick
    #[test]
    fn test_pick_matches_index_draw() {
        let items = ['a', 'b', 'c', 'd'];
        let mut picker = RandomSource::new(99);
        let mut indexer = RandomSource::new(99);

        for _ in 0..50 {
            let picked = picker.pick(&items).copied();
            let index = indexer.integer(0, items.len()).unwrap();
            assert_eq!(picked, items.get(index).copied());
        }
    }

    // Tests picking from an empty slice
    // Verified by removing the empty guard
    #[test]
    fn test_pick_empty_slice() {
        let mut rng = RandomSource::new(0);
        let empty: [u8; 0] = [];
        assert_eq!(rng.pick(&empty), None);
    }
}
