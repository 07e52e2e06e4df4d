use orst_core::*;
use utilities::{assert_well_formed, TestArrays};

fn inversions(values: &[i64]) -> usize {
    let mut count = 0;
    for i in 0..values.len() {
        for j in (i + 1)..values.len() {
            if values[i] > values[j] {
                count += 1;
            }
        }
    }
    count
}

/// The named fixtures followed by a batch of seeded random arrays.
fn every_input() -> Vec<Vec<i64>> {
    let arrays = TestArrays::new();
    let mut inputs = arrays
        .all()
        .into_iter()
        .map(|(_, input)| input.to_vec())
        .collect::<Vec<_>>();
    inputs.extend(TestArrays::random(0xbeef, 150));
    inputs
}

/// Reads the two runs named by a merge step such as `Merging [1, 3] and [2].`.
fn merged_runs(explanation: &str) -> Option<(Vec<i64>, Vec<i64>)> {
    let runs = explanation.strip_prefix("Merging ")?.strip_suffix('.')?;
    let (left, right) = runs.split_once(" and ")?;
    Some((parse_list(left)?, parse_list(right)?))
}

fn parse_list(list: &str) -> Option<Vec<i64>> {
    let values = list.strip_prefix('[')?.strip_suffix(']')?;
    values.split(", ").map(|v| v.parse().ok()).collect()
}

mod sorted_output {
    use super::*;

    #[test]
    fn named_arrays() {
        let arrays = TestArrays::new();
        for algorithm in Algorithm::ALL {
            for (name, input) in arrays.all() {
                let trace = algorithm
                    .trace(input)
                    .unwrap_or_else(|e| panic!("{algorithm} failed on {name}: {e}"));
                assert_eq!(trace.algorithm(), algorithm);
                assert_well_formed(&trace, input);
            }
        }
    }

    #[test]
    fn random_arrays() {
        for input in TestArrays::random(0x5eed, 200) {
            for algorithm in Algorithm::ALL {
                let trace = algorithm.trace(&input).unwrap();
                assert_well_formed(&trace, &input);
            }
        }
    }

    #[test]
    fn floats_without_nan() {
        let input = [2.5, -1.0, 0.0, 2.5, 1e9];
        for algorithm in Algorithm::ALL {
            let trace = algorithm.trace(&input).unwrap();
            assert_eq!(trace.final_snapshot(), &[-1.0, 0.0, 2.5, 2.5, 1e9]);
        }
    }

    #[test]
    fn strings() {
        let input = ["pear", "apple", "fig"];
        for algorithm in Algorithm::ALL {
            let trace = algorithm.trace(&input).unwrap();
            assert_eq!(trace.final_snapshot(), &["apple", "fig", "pear"]);
        }
    }
}

mod edge_cases {
    use super::*;

    #[test]
    fn empty_and_single_inputs_record_nothing() {
        let arrays = TestArrays::new();
        for algorithm in Algorithm::ALL {
            let empty = algorithm.trace(&arrays.empty).unwrap();
            assert!(empty.is_empty(), "{algorithm}");
            assert!(empty.final_snapshot().is_empty());

            let single = algorithm.trace(&arrays.single).unwrap();
            assert!(single.is_empty(), "{algorithm}");
            assert_eq!(single.final_snapshot(), &[7]);
            assert_eq!(single.comparisons(), 0);
        }
    }

    #[test]
    fn sorted_input_stays_sorted() {
        let arrays = TestArrays::new();
        for algorithm in Algorithm::ALL {
            let trace = algorithm.trace(&arrays.sorted).unwrap();
            assert!(!trace.is_empty(), "{algorithm}");
            assert_eq!(trace.final_snapshot(), arrays.sorted.as_slice());
        }
    }

    #[test]
    fn bubble_sort_stops_after_one_pass_on_sorted_input() {
        let arrays = TestArrays::new();
        let trace = Algorithm::Bubble.trace(&arrays.sorted).unwrap();

        assert_eq!(trace.len(), arrays.sorted.len());
        assert_eq!(trace.comparisons(), arrays.sorted.len() - 1);
        assert_eq!(
            trace.steps().last().unwrap().explanation(),
            "No swaps in this pass. Array is sorted."
        );

        let passes = trace
            .iter()
            .filter(|step| step.explanation().starts_with("Pass"))
            .count();
        assert_eq!(passes, 1);
        assert!(trace.steps()[0].explanation().starts_with("Pass 1:"));
    }

    #[test]
    fn nan_is_incomparable() {
        let input = [1.0, f64::NAN, 0.5];
        for algorithm in Algorithm::ALL {
            let result = algorithm.trace(&input);
            assert!(
                matches!(result, Err(OrstError::IncomparableElements { .. })),
                "{algorithm} returned {result:?}"
            );
        }
    }

    #[test]
    fn unknown_algorithm_is_rejected_before_sorting() {
        assert_eq!(
            "bogo sort".parse::<Algorithm>(),
            Err(OrstError::UnknownAlgorithm("bogo sort".to_string()))
        );
    }
}

mod trace_shape {
    use super::*;

    #[test]
    fn traces_are_deterministic() {
        let arrays = TestArrays::new();
        for algorithm in Algorithm::ALL {
            let first = algorithm.trace(&arrays.demo).unwrap();
            let second = algorithm.trace(&arrays.demo.clone()).unwrap();
            assert_eq!(first, second, "{algorithm}");
        }
    }

    #[test]
    fn snapshots_do_not_alias() {
        let arrays = TestArrays::new();
        for algorithm in Algorithm::ALL {
            let trace = algorithm.trace(&arrays.reversed).unwrap();
            // Early steps of a reversed input must still show unsorted data.
            assert_ne!(
                trace.steps()[0].snapshot(),
                trace.final_snapshot(),
                "{algorithm}"
            );
        }
    }

    #[test]
    fn swaps_never_add_inversions() {
        let arrays = TestArrays::new();
        for algorithm in [Algorithm::Bubble, Algorithm::Selection] {
            for (name, input) in arrays.all() {
                let trace = algorithm.trace(input).unwrap();
                let mut previous = inversions(input);
                for step in &trace {
                    let current = inversions(step.snapshot());
                    assert!(current <= previous, "{algorithm} on {name}");
                    previous = current;
                }
                assert_eq!(previous, 0);
            }
        }
    }

    #[test]
    fn quick_sort_pivots_partition_the_array() {
        for input in every_input() {
            let trace = Algorithm::Quick.trace(&input).unwrap();
            let placements = trace
                .iter()
                .filter(|step| step.explanation().starts_with("Pivot"));

            for step in placements {
                let &[pivot] = step.highlighted() else {
                    panic!("pivot placement must highlight one index");
                };
                let snapshot = step.snapshot();
                let value = snapshot[pivot];

                assert!(
                    snapshot[..pivot].iter().all(|v| *v <= value),
                    "{input:?}: a larger value sits left of the pivot after `{}`",
                    step.explanation()
                );
                assert!(
                    snapshot[pivot + 1..].iter().all(|v| *v >= value),
                    "{input:?}: a smaller value sits right of the pivot after `{}`",
                    step.explanation()
                );
                assert_eq!(value, trace.final_snapshot()[pivot], "{input:?}");
            }
        }
    }

    #[test]
    fn merge_sort_leaves_each_merged_run_sorted_and_contiguous() {
        for input in every_input() {
            let trace = Algorithm::Merge.trace(&input).unwrap();
            let mut merges = 0;

            for step in &trace {
                let Some((left, right)) = merged_runs(step.explanation()) else {
                    continue;
                };
                let mut run = [left, right].concat();
                run.sort();

                let contiguous = step.snapshot().windows(run.len()).any(|w| w == run);
                assert!(
                    contiguous,
                    "{input:?}: {run:?} is not contiguous after `{}`",
                    step.explanation()
                );
                merges += 1;
            }

            // One merge per inner node of the split tree.
            assert_eq!(merges, input.len().saturating_sub(1), "{input:?}");
        }
    }

    #[test]
    fn selection_sort_scan_is_silent() {
        let trace = Algorithm::Selection.trace(&[5, 3, 4]).unwrap();
        assert_eq!(trace.len(), 5);
        assert_eq!(trace.highlighted_steps(), 2);
        assert_eq!(trace.comparisons(), 3);
    }

    #[test]
    fn merge_sort_records_split_and_merge() {
        let trace = Algorithm::Merge.trace(&[4, 2]).unwrap();
        assert_eq!(trace.len(), 2);
        assert!(trace.steps()[0].explanation().starts_with("Splitting"));
        assert!(trace.steps()[1].explanation().starts_with("Merging"));
        assert_eq!(trace.final_snapshot(), &[2, 4]);
    }
}
