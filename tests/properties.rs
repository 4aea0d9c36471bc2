//! Property tests: the constant-time window agrees with a brute-force
//! recomputation over the last `capacity` samples.
//!
//! Run with: cargo test --test properties

use proptest::prelude::*;

use windowstats::statistics::WindowStatistics;

/// Last `capacity` samples, with never-written slots counted as zero
fn window_contents<T: Copy + Default>(samples: &[T], capacity: usize) -> Vec<T> {
    let mut window = vec![T::default(); capacity.saturating_sub(samples.len())];
    let start = samples.len().saturating_sub(capacity);
    window.extend_from_slice(&samples[start..]);
    window
}

proptest! {
    #[test]
    fn integer_sum_and_extrema_match_brute_force(
        shift in 0u32..6,
        samples in prop::collection::vec(-1000i32..1000, 1..200),
    ) {
        let capacity = 1usize << shift;
        let mut stats = WindowStatistics::<i32>::new(capacity as u32).unwrap();
        for (i, &sample) in samples.iter().enumerate() {
            stats.push(sample, false).unwrap();

            let window = window_contents(&samples[..=i], capacity);
            let sum: i32 = window.iter().sum();
            prop_assert_eq!(stats.sum(), sum);
            prop_assert_eq!(stats.average(), sum >> shift);

            // Unwritten slots still hold zeros until the window fills
            if i + 1 >= capacity {
                prop_assert_eq!(stats.max(), *window.iter().max().unwrap());
                prop_assert_eq!(stats.min(), *window.iter().min().unwrap());
            }
        }
    }

    #[test]
    fn float_aggregates_match_brute_force(
        capacity in 1usize..40,
        samples in prop::collection::vec(-100.0f64..100.0, 1..200),
    ) {
        let mut stats = WindowStatistics::<f64>::new(capacity as u32).unwrap();
        for &sample in &samples {
            stats.push(sample, false).unwrap();
        }

        let window = window_contents(&samples, capacity);
        let n = capacity as f64;
        let mean = window.iter().sum::<f64>() / n;
        let mean_square = window.iter().map(|v| v * v).sum::<f64>() / n;

        prop_assert!((stats.average() - mean).abs() < 1e-6);
        prop_assert!((stats.mean_square() - mean_square).abs() < 1e-4);
        prop_assert!((stats.rms() - mean_square.sqrt()).abs() < 1e-4);

        let variance = (mean_square - mean * mean).max(0.0);
        prop_assert!((stats.standard_deviation() - variance.sqrt()).abs() < 1e-2);

        if samples.len() >= capacity {
            let max = window.iter().cloned().fold(f64::MIN, f64::max);
            let min = window.iter().cloned().fold(f64::MAX, f64::min);
            prop_assert_eq!(stats.max(), max);
            prop_assert_eq!(stats.min(), min);
        }
    }

    #[test]
    fn infinite_extrema_cover_all_history(
        samples in prop::collection::vec(any::<i16>(), 1..300),
    ) {
        let mut stats = WindowStatistics::<i16>::new(8).unwrap();
        for &sample in &samples {
            stats.push(sample, true).unwrap();
        }
        prop_assert_eq!(stats.max(), *samples.iter().max().unwrap());
        prop_assert_eq!(stats.min(), *samples.iter().min().unwrap());
    }

    #[test]
    fn sample_count_never_exceeds_capacity(
        requested in 1u32..300,
        pushes in 0usize..700,
    ) {
        let mut stats = WindowStatistics::<u8>::new(requested).unwrap();
        for i in 0..pushes {
            stats.push(i as u8, false).unwrap();
        }
        prop_assert!(stats.capacity() <= requested);
        prop_assert!(stats.capacity().is_power_of_two());
        prop_assert_eq!(stats.sample_count() as usize, pushes.min(stats.capacity() as usize));
    }
}
