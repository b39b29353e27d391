// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Every algorithm, run to completion through the run engine.

use sortlab::{AlgorithmId, PatternGenerator, RunInstance, RunOutcome, RunState, Sequence};

async fn sort(algorithm: AlgorithmId, sequence: Sequence) -> RunInstance {
    let mut run = RunInstance::new(algorithm, sequence);
    let outcome = run.play().await.unwrap();
    assert_eq!(outcome, RunOutcome::Completed, "{} did not complete", algorithm);
    assert_eq!(run.state(), RunState::Completed);
    run
}

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut values = values.to_vec();
    values.sort_by(f64::total_cmp);
    values
}

/// Values with heavy repetition: only five distinct keys.
fn with_duplicates(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..len).map(|_| (rng.u8(0..5) as f64) * 20.0).collect()
}

#[tokio::test(start_paused = true)]
async fn test_empty_and_single_element() {
    for algorithm in AlgorithmId::ALL {
        let run = sort(algorithm, Sequence::default()).await;
        assert!(run.snapshot().is_empty());

        let run = sort(algorithm, Sequence::from_values(&[42.0]).unwrap()).await;
        assert_eq!(run.snapshot().values(), vec![42.0]);
    }
}

#[tokio::test(start_paused = true)]
async fn test_random_inputs_end_sorted() {
    let mut generator = PatternGenerator::with_seed(2024);
    for len in [2, 3, 7, 16, 17, 33, 50, 64] {
        let input = generator.shuffled(len).unwrap();
        let expected = sorted_copy(&input.values());
        for algorithm in AlgorithmId::ALL {
            let run = sort(algorithm, input.clone()).await;
            let result = run.snapshot();
            assert_eq!(result.values(), expected, "{} on n={}", algorithm, len);
            assert!(result.elements().iter().all(|e| e.is_sorted()));
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_duplicate_heavy_inputs_end_sorted() {
    for (len, seed) in [(9, 1), (40, 2), (71, 3)] {
        let values = with_duplicates(len, seed);
        let expected = sorted_copy(&values);
        for algorithm in AlgorithmId::ALL {
            let run = sort(algorithm, Sequence::from_values(&values).unwrap()).await;
            assert_eq!(run.snapshot().values(), expected, "{} on n={}", algorithm, len);
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_all_equal_values() {
    let values = vec![50.0; 12];
    for algorithm in AlgorithmId::ALL {
        let run = sort(algorithm, Sequence::from_values(&values).unwrap()).await;
        assert_eq!(run.snapshot().values(), values, "{}", algorithm);
    }
}

#[tokio::test(start_paused = true)]
async fn test_presorted_and_reversed_inputs() {
    let mut generator = PatternGenerator::with_seed(9);
    for pattern in sortlab::InputPattern::ALL {
        let input = generator.pattern(pattern, 45).unwrap();
        let expected = sorted_copy(&input.values());
        for algorithm in AlgorithmId::ALL {
            let run = sort(algorithm, input.clone()).await;
            assert_eq!(run.snapshot().values(), expected, "{} on {}", algorithm, pattern);
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_stable_algorithms_keep_equal_values_in_order() {
    let values = with_duplicates(60, 77);
    for algorithm in AlgorithmId::ALL.into_iter().filter(|a| a.is_stable()) {
        let run = sort(algorithm, Sequence::from_values(&values).unwrap()).await;
        let result = run.snapshot();
        for pair in result.elements().windows(2) {
            if pair[0].value == pair[1].value {
                assert!(
                    pair[0].origin < pair[1].origin,
                    "{} reordered equal values {} (origins {} and {})",
                    algorithm,
                    pair[0].value,
                    pair[0].origin,
                    pair[1].origin
                );
            }
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_origins_are_a_permutation() {
    let input = PatternGenerator::with_seed(3).shuffled(30).unwrap();
    for algorithm in AlgorithmId::ALL {
        let run = sort(algorithm, input.clone()).await;
        let mut origins = run.snapshot().origins();
        origins.sort_unstable();
        assert_eq!(origins, (0..30).collect::<Vec<_>>(), "{}", algorithm);
    }
}

#[tokio::test(start_paused = true)]
async fn test_counters_are_deterministic() {
    let input = PatternGenerator::with_seed(55).shuffled(40).unwrap();
    for algorithm in AlgorithmId::ALL {
        let first = sort(algorithm, input.clone()).await.stats();
        let second = sort(algorithm, input.clone()).await.stats();
        assert_eq!(first.comparisons, second.comparisons, "{}", algorithm);
        assert_eq!(first.swaps, second.swaps, "{}", algorithm);
    }
}

#[tokio::test(start_paused = true)]
async fn test_bubble_counts_every_pair() {
    let run = sort(
        AlgorithmId::Bubble,
        Sequence::from_values(&[5.0, 2.0, 8.0, 1.0, 9.0]).unwrap(),
    )
    .await;
    assert_eq!(run.stats().comparisons, 10);
    assert_eq!(run.snapshot().values(), vec![1.0, 2.0, 5.0, 8.0, 9.0]);
}

#[tokio::test(start_paused = true)]
async fn test_insertion_on_sorted_input() {
    let run = sort(
        AlgorithmId::Insertion,
        Sequence::from_values(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap(),
    )
    .await;
    assert_eq!(run.stats().swaps, 0);
    assert_eq!(run.stats().comparisons, 4);
}

#[tokio::test(start_paused = true)]
async fn test_selection_counts() {
    // n(n-1)/2 comparisons regardless of input; no swaps when already sorted.
    let run = sort(
        AlgorithmId::Selection,
        Sequence::from_values(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap(),
    )
    .await;
    assert_eq!(run.stats().comparisons, 15);
    assert_eq!(run.stats().swaps, 0);
}

#[tokio::test(start_paused = true)]
async fn test_radix_handles_integral_and_fractional_keys() {
    let integral = [90.0, 7.0, 100.0, 0.0, 35.0, 7.0];
    let run = sort(AlgorithmId::Radix, Sequence::from_values(&integral).unwrap()).await;
    assert_eq!(run.snapshot().values(), sorted_copy(&integral));

    let fractional = [33.3, 0.5, 99.99, 12.25, 0.0, 12.25];
    let run = sort(AlgorithmId::Radix, Sequence::from_values(&fractional).unwrap()).await;
    assert_eq!(run.snapshot().values(), sorted_copy(&fractional));
}
