use std::fmt::Debug;

use orst_core::Trace;

/// Checks the properties every finished trace must have, whatever the algorithm:
///
/// - the final snapshot is `input` sorted in non-decreasing order,
/// - every snapshot has the length of the input,
/// - every step highlights at most two positions, all inside its snapshot,
/// - every step carries an explanation.
pub fn assert_well_formed<T>(trace: &Trace<T>, input: &[T])
where
    T: Ord + Clone + Debug,
{
    let algorithm = trace.algorithm();
    let mut expected = input.to_vec();
    expected.sort();

    assert_eq!(trace.input(), input, "{algorithm}: input was not preserved");
    assert_eq!(
        trace.final_snapshot(),
        expected.as_slice(),
        "{algorithm}: final snapshot is not sorted for {input:?}"
    );

    for (n, step) in trace.iter().enumerate() {
        assert_eq!(
            step.snapshot().len(),
            input.len(),
            "{algorithm}: step {} changed the array length",
            n + 1
        );
        assert!(
            step.highlighted().len() <= 2,
            "{algorithm}: step {} highlights {:?}",
            n + 1,
            step.highlighted()
        );
        let in_bounds = step.highlighted().iter().all(|&i| i < input.len());
        assert!(
            in_bounds,
            "{algorithm}: step {} highlights outside the snapshot",
            n + 1
        );
        assert!(
            !step.explanation().is_empty(),
            "{algorithm}: step {} has no explanation",
            n + 1
        );
    }
}
