use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A set of named input arrays every sorter is expected to handle.
pub struct TestArrays {
    pub empty: Vec<i64>,
    pub single: Vec<i64>,
    pub pair: Vec<i64>,
    pub sorted: Vec<i64>,
    pub reversed: Vec<i64>,
    pub duplicates: Vec<i64>,
    pub negatives: Vec<i64>,
    pub demo: Vec<i64>,
}

impl TestArrays {
    pub fn new() -> Self {
        TestArrays {
            empty: vec![],
            single: vec![7],
            pair: vec![9, -9],
            sorted: (1..=12).collect(),
            reversed: (1..=12).rev().collect(),
            duplicates: vec![5, 1, 5, 3, 1, 5, 3, 3],
            negatives: vec![0, -4, 17, -4, 2, -100, 33],
            demo: vec![
                456, 125, 59, 23, 45, 9, 234, 6, 450, 389, 148, 78, 28, 97, 208, 109, 2, 5,
            ],
        }
    }

    /// Every named array, labelled for assertion messages.
    pub fn all(&self) -> Vec<(&'static str, &[i64])> {
        vec![
            ("empty", self.empty.as_slice()),
            ("single", self.single.as_slice()),
            ("pair", self.pair.as_slice()),
            ("sorted", self.sorted.as_slice()),
            ("reversed", self.reversed.as_slice()),
            ("duplicates", self.duplicates.as_slice()),
            ("negatives", self.negatives.as_slice()),
            ("demo", self.demo.as_slice()),
        ]
    }

    /// `count` arrays of random length (up to 40) and values in `-50..50`, reproducible from
    /// `seed`.
    pub fn random(seed: u64, count: usize) -> Vec<Vec<i64>> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..count)
            .map(|_| {
                let len = rng.gen_range(0..=40);
                (0..len).map(|_| rng.gen_range(-50..50)).collect()
            })
            .collect()
    }
}

impl Default for TestArrays {
    fn default() -> Self {
        Self::new()
    }
}
