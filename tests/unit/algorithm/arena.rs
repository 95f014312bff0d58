//! Tests for per-trial availability and fatigue bookkeeping

#[cfg(test)]
mod tests {
    use mosaicorder::algorithm::arena::TrialArena;
    use mosaicorder::algorithm::trial::TrialMode;

    const DUPLICATES: TrialMode = TrialMode::Duplicates { fatigue_base: 1.03 };

    // Tests distinct mode retires used entries
    // Verified by leaving the availability bit set on use
    #[test]
    fn test_distinct_marks_unavailable() {
        let mut arena = TrialArena::new(3, TrialMode::Distinct);
        assert_eq!(arena.remaining(), 3);
        assert!((0..3).all(|i| arena.is_available(i)));

        arena.record_use(1);
        assert!(arena.is_available(0));
        assert!(!arena.is_available(1));
        assert!(arena.is_available(2));
        assert_eq!(arena.remaining(), 2);
        assert_eq!(arena.uses(1), 0);
    }

    // Tests distinct mode leaves distances unscaled
    // Verified by applying the multiplier in both modes
    #[test]
    fn test_distinct_distance_unscaled() {
        let arena = TrialArena::new(2, TrialMode::Distinct);
        assert!((arena.effective_distance(0, 42.0) - 42.0).abs() < f64::EPSILON);
    }

    // Tests duplicates mode keeps entries available and counts uses
    // Verified by clearing availability in duplicates mode
    #[test]
    fn test_duplicates_counts_uses() {
        let mut arena = TrialArena::new(2, DUPLICATES);
        arena.record_use(0);
        arena.record_use(0);

        assert!(arena.is_available(0));
        assert_eq!(arena.remaining(), 2);
        assert_eq!(arena.uses(0), 2);
        assert_eq!(arena.uses(1), 0);
    }

    // Tests the penalty is fatigue_base ^ uses
    // Verified by growing the multiplier linearly
    #[test]
    fn test_duplicates_penalty_exponential() {
        let mut arena = TrialArena::new(1, DUPLICATES);
        assert!((arena.effective_distance(0, 100.0) - 100.0).abs() < f64::EPSILON);

        for uses in 1..=5 {
            arena.record_use(0);
            let expected = 100.0 * 1.03_f64.powi(uses);
            assert!((arena.effective_distance(0, 100.0) - expected).abs() < 1e-9);
        }
    }

    // Tests the penalty strictly increases with each use
    // Verified by capping the multiplier after the first use
    #[test]
    fn test_duplicates_penalty_monotonic() {
        let mut arena = TrialArena::new(1, DUPLICATES);
        let mut previous = arena.effective_distance(0, 10.0);
        for _ in 0..20 {
            arena.record_use(0);
            let current = arena.effective_distance(0, 10.0);
            assert!(current > previous);
            previous = current;
        }
    }

    // Tests out of range indices are ignored
    // Verified by indexing without bounds checks
    #[test]
    fn test_out_of_range_indices() {
        let mut distinct = TrialArena::new(2, TrialMode::Distinct);
        distinct.record_use(5);
        assert_eq!(distinct.remaining(), 2);
        assert!(!distinct.is_available(5));

        let mut duplicates = TrialArena::new(2, DUPLICATES);
        duplicates.record_use(5);
        assert_eq!(duplicates.uses(5), 0);
    }
}
