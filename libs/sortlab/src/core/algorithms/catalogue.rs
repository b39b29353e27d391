// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use serde::Serialize;

use super::AlgorithmId;

/// Reference card shown next to an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
    pub space: &'static str,
    pub properties: &'static str,
    pub description: &'static str,
}

const fn card(
    name: &'static str,
    [best, average, worst, space]: [&'static str; 4],
    properties: &'static str,
    description: &'static str,
) -> AlgorithmInfo {
    AlgorithmInfo {
        name,
        best,
        average,
        worst,
        space,
        properties,
        description,
    }
}

/// Indexed by [`AlgorithmId::ordinal`].
static CATALOGUE: [AlgorithmInfo; 16] = [
    card(
        "Bubble Sort",
        ["O(n)", "O(n²)", "O(n²)", "O(1)"],
        "Stable, In-place",
        "Repeatedly steps through the list, compares adjacent elements and swaps them if they are in the wrong order, until a full pass makes no change.",
    ),
    card(
        "Selection Sort",
        ["O(n²)", "O(n²)", "O(n²)", "O(1)"],
        "Unstable, In-place",
        "Divides the input into a sorted and an unsorted region, repeatedly moving the smallest unsorted element to the end of the sorted region.",
    ),
    card(
        "Insertion Sort",
        ["O(n)", "O(n²)", "O(n²)", "O(1)"],
        "Stable, In-place",
        "Builds the result one item at a time, inserting each element into its place within the already sorted prefix.",
    ),
    card(
        "Merge Sort",
        ["O(n log n)", "O(n log n)", "O(n log n)", "O(n)"],
        "Stable, Out-of-place",
        "Divide and conquer: split the array into halves, sort each half, then merge the sorted halves back together.",
    ),
    card(
        "Quick Sort",
        ["O(n log n)", "O(n log n)", "O(n²)", "O(log n)"],
        "Unstable, In-place",
        "Picks a pivot, partitions the array so smaller elements precede it and larger ones follow, then sorts both partitions.",
    ),
    card(
        "Heap Sort",
        ["O(n log n)", "O(n log n)", "O(n log n)", "O(1)"],
        "Unstable, In-place",
        "Builds a max heap from the input, then repeatedly moves the maximum to the end and restores the heap.",
    ),
    card(
        "Shell Sort",
        ["O(n log n)", "O(n^(4/3))", "O(n^(3/2))", "O(1)"],
        "Unstable, In-place",
        "Generalizes insertion sort to exchange items far apart, starting with large gaps and halving them down to one.",
    ),
    card(
        "Comb Sort",
        ["O(n log n)", "O(n²/2^p)", "O(n²)", "O(1)"],
        "Unstable, In-place",
        "Improves on bubble sort by comparing elements a gap apart, shrinking the gap by a factor of 1.3 until it reaches one.",
    ),
    card(
        "Cocktail Sort",
        ["O(n)", "O(n²)", "O(n²)", "O(1)"],
        "Stable, In-place",
        "A bidirectional bubble sort that alternates forward and backward passes through the list.",
    ),
    card(
        "Gnome Sort",
        ["O(n)", "O(n²)", "O(n²)", "O(1)"],
        "Stable, In-place",
        "Like insertion sort, but moves each element into place through a series of adjacent swaps.",
    ),
    card(
        "Cycle Sort",
        ["O(n²)", "O(n²)", "O(n²)", "O(1)"],
        "Unstable, In-place",
        "Rotates each cycle of the permutation into place, performing the minimum possible number of writes.",
    ),
    card(
        "Pancake Sort",
        ["O(n)", "O(n²)", "O(n²)", "O(1)"],
        "Unstable, In-place",
        "Uses only prefix reversals: flips the maximum to the front, then flips it into its final position.",
    ),
    card(
        "Tim Sort",
        ["O(n)", "O(n log n)", "O(n log n)", "O(n)"],
        "Stable, Hybrid",
        "Insertion-sorts fixed runs of 32 elements, then merges runs of doubling size.",
    ),
    card(
        "Intro Sort",
        ["O(n log n)", "O(n log n)", "O(n log n)", "O(log n)"],
        "Unstable, Hybrid",
        "Starts as quicksort, switches to heapsort past a depth limit of 2·log2(n), and insertion-sorts small partitions.",
    ),
    card(
        "Bitonic Sort",
        ["O(log²n)", "O(log²n)", "O(log²n)", "O(log²n)"],
        "Unstable, Parallel",
        "A comparison network that builds bitonic sequences and merges them; every stage could run in parallel.",
    ),
    card(
        "Radix Sort (LSD)",
        ["O(nk)", "O(nk)", "O(nk)", "O(n+k)"],
        "Stable, Out-of-place",
        "Sorts by individual decimal digits, least significant first, with a stable counting pass per digit.",
    ),
];

impl AlgorithmId {
    pub fn info(&self) -> &'static AlgorithmInfo {
        &CATALOGUE[self.ordinal()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_matches_stability() {
        for id in AlgorithmId::ALL {
            let info = id.info();
            assert_eq!(
                info.properties.starts_with("Stable"),
                id.is_stable(),
                "{}",
                info.name
            );
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(AlgorithmId::Radix.display_name(), "Radix Sort (LSD)");
        assert_eq!(AlgorithmId::Tim.info().space, "O(n)");
    }
}
