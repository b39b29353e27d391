// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Pairwise comparison and the N-way benchmark.

use std::time::Duration;

use sortlab::{
    AlgorithmId, Benchmark, BenchmarkSettings, InputPattern, LaneStatus, PairwiseSession,
    PatternGenerator, RankMetric, RunState, Speed,
};

#[tokio::test(start_paused = true)]
async fn test_pairwise_lanes_agree_for_every_pair_with_bubble() {
    let input = PatternGenerator::with_seed(31).shuffled(30).unwrap();
    for other in AlgorithmId::ALL {
        let mut session = PairwiseSession::new(AlgorithmId::Bubble, other, input.clone());
        let report = session.play().await;
        assert!(report.left.status.is_completed());
        assert!(report.right.status.is_completed(), "{}", other);
        assert_eq!(
            session.left().snapshot().values(),
            session.right().snapshot().values(),
            "bubble and {} disagree",
            other
        );
    }
}

#[tokio::test(start_paused = true)]
async fn test_pairwise_pause_and_resume() {
    let input = PatternGenerator::with_seed(32).shuffled(20).unwrap();
    let mut session = PairwiseSession::new(AlgorithmId::Selection, AlgorithmId::Insertion, input)
        .with_speed(Speed::new(60).unwrap());

    let [left, right] = session.handles();
    let pauser = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(300)).await;
        left.pause() && right.pause()
    });

    let report = session.play().await;
    assert!(pauser.await.unwrap());
    assert_eq!(report.left.status, LaneStatus::Paused);
    assert_eq!(report.right.status, LaneStatus::Paused);

    let report = session.play().await;
    assert!(report.left.status.is_completed());
    assert!(report.right.status.is_completed());
    assert_eq!(
        session.left().snapshot().values(),
        session.right().snapshot().values()
    );
}

#[tokio::test(start_paused = true)]
async fn test_pairwise_resume_only_drives_paused_lane() {
    // Insertion finishes an already sorted input long before bubble does.
    let input = PatternGenerator::with_seed(1)
        .pattern(InputPattern::Sorted, 40)
        .unwrap();
    let mut session = PairwiseSession::new(AlgorithmId::Insertion, AlgorithmId::Bubble, input)
        .with_speed(Speed::new(80).unwrap());

    let [_, bubble] = session.handles();
    let pauser = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(2_000)).await;
        bubble.pause()
    });

    let report = session.play().await;
    assert!(pauser.await.unwrap());
    assert!(report.left.status.is_completed());
    assert_eq!(report.right.status, LaneStatus::Paused);
    let insertion_comparisons = report.left.stats.comparisons;

    let report = session.play().await;
    assert!(report.left.status.is_completed());
    assert!(report.right.status.is_completed());
    // The completed lane was not re-run.
    assert_eq!(report.left.stats.comparisons, insertion_comparisons);
    assert_eq!(report.right.stats.comparisons, 40 * 39 / 2);
}

#[tokio::test(start_paused = true)]
async fn test_benchmark_all_sixteen_on_random_input() {
    let mut bench = Benchmark::new(
        &AlgorithmId::ALL,
        50,
        InputPattern::Random,
        PatternGenerator::with_seed(50),
    )
    .unwrap();
    let mut expected = bench.input().values();
    expected.sort_by(f64::total_cmp);

    let report = bench.run().await;
    assert!(!report.aborted);
    assert_eq!(report.size, 50);
    assert_eq!(report.lanes.len(), 16);
    for lane in bench.lanes() {
        assert_eq!(lane.state(), RunState::Completed);
        assert_eq!(lane.snapshot().values(), expected, "{}", lane.algorithm());
    }

    let board = report.leaderboard(RankMetric::Time);
    assert_eq!(board.len(), 16);
    for pair in board.windows(2) {
        assert!(
            (pair[0].elapsed, pair[0].algorithm) < (pair[1].elapsed, pair[1].algorithm),
            "{:?} ranked above {:?}",
            pair[0],
            pair[1]
        );
    }
}

#[tokio::test(start_paused = true)]
async fn test_leaderboard_reranks_without_rerunning() {
    let mut bench = Benchmark::new(
        &[AlgorithmId::Bubble, AlgorithmId::Merge, AlgorithmId::Heap, AlgorithmId::Shell],
        30,
        InputPattern::Reversed,
        PatternGenerator::with_seed(3),
    )
    .unwrap();
    let report = bench.run().await;

    let by_comparisons = report.leaderboard(RankMetric::Comparisons);
    assert_eq!(by_comparisons.len(), 4);
    assert!(by_comparisons
        .windows(2)
        .all(|pair| pair[0].comparisons <= pair[1].comparisons));
    // Bubble always compares every pair.
    assert_eq!(by_comparisons[3].algorithm, AlgorithmId::Bubble);
    assert_eq!(by_comparisons[3].comparisons, 30 * 29 / 2);

    // Same raw results, different order.
    let by_time = report.leaderboard(RankMetric::Time);
    let mut a: Vec<_> = by_comparisons.iter().map(|e| e.algorithm).collect();
    let mut b: Vec<_> = by_time.iter().map(|e| e.algorithm).collect();
    a.sort();
    b.sort();
    assert_eq!(a, b);
}

#[tokio::test(start_paused = true)]
async fn test_benchmark_from_settings_and_regenerate() {
    let settings = BenchmarkSettings {
        array_size: 25,
        pattern: InputPattern::NearlySorted,
        metric: RankMetric::Comparisons,
        algorithms: vec![AlgorithmId::Gnome, AlgorithmId::Cycle],
    };
    let mut bench = Benchmark::from_settings(&settings, Some(99)).unwrap();
    assert_eq!(bench.input().len(), 25);
    assert_eq!(bench.pattern(), InputPattern::NearlySorted);

    bench.generate(InputPattern::Sorted).unwrap();
    assert!(bench.input().is_sorted());

    let report = bench.run().await;
    assert_eq!(report.pattern, InputPattern::Sorted);
    assert!(report.lanes.iter().all(|l| l.status.is_completed()));
    // Gnome walks a sorted input once.
    assert_eq!(report.lane(AlgorithmId::Gnome).unwrap().stats.comparisons, 24);
    assert_eq!(report.lane(AlgorithmId::Gnome).unwrap().stats.swaps, 0);
}

#[tokio::test(start_paused = true)]
async fn test_benchmark_report_serializes() {
    let mut bench = Benchmark::new(
        &[AlgorithmId::Heap],
        8,
        InputPattern::Random,
        PatternGenerator::with_seed(8),
    )
    .unwrap();
    let report = bench.run().await;
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["pattern"], "random");
    assert_eq!(json["lanes"][0]["algorithm"], "heap");
    assert_eq!(json["lanes"][0]["status"], "completed");
    assert!(json["lanes"][0]["stats"]["comparisons"].as_u64().unwrap() > 0);
}
