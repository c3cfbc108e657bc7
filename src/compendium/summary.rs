//! Aggregate statistics derived from a loaded catalog
//!
//! The summary is recomputed wholesale on every load; there are no
//! incremental updates.

use std::collections::{HashMap, HashSet};

use super::soul::{MartialSoul, normalize_affinity};

/// Souls at or above this grade count as rare
pub const RARE_GRADE_THRESHOLD: i32 = 7;

/// Derived aggregate over the whole catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompendiumSummary {
    pub total_souls: usize,
    /// Souls with grade >= [`RARE_GRADE_THRESHOLD`]
    pub rare_souls: usize,
    pub highest_grade: i32,
    /// Name of the last soul seen at the highest grade
    pub highest_soul_name: String,
    /// Distinct normalized affinity names, sorted alphabetically
    pub affinity_names: Vec<String>,
    /// grade -> count, sorted descending by grade
    pub grade_counts: Vec<(i32, usize)>,
    /// affinity -> count, sorted descending by count then alphabetically
    pub affinity_counts: Vec<(String, usize)>,
}

impl CompendiumSummary {
    pub fn compute(souls: &[MartialSoul]) -> Self {
        let mut summary = Self::default();
        if souls.is_empty() {
            return summary;
        }

        let mut grade_counts: HashMap<i32, usize> = HashMap::new();
        let mut affinity_counts: HashMap<String, usize> = HashMap::new();
        let mut affinity_names: HashSet<String> = HashSet::new();

        summary.total_souls = souls.len();

        for soul in souls {
            summary.highest_grade = summary.highest_grade.max(soul.grade);
            if soul.grade == summary.highest_grade {
                summary.highest_soul_name = soul.name.clone();
            }
            if soul.grade >= RARE_GRADE_THRESHOLD {
                summary.rare_souls += 1;
            }

            *grade_counts.entry(soul.grade).or_default() += 1;

            for affinity in &soul.affinities {
                if affinity.is_empty() {
                    continue;
                }
                let key = normalize_affinity(affinity);
                *affinity_counts.entry(key.clone()).or_default() += 1;
                affinity_names.insert(key);
            }
        }

        summary.affinity_names = affinity_names.into_iter().collect();
        summary.affinity_names.sort();

        summary.grade_counts = grade_counts.into_iter().collect();
        summary.grade_counts.sort_by(|lhs, rhs| rhs.0.cmp(&lhs.0));

        summary.affinity_counts = affinity_counts.into_iter().collect();
        summary
            .affinity_counts
            .sort_by(|lhs, rhs| rhs.1.cmp(&lhs.1).then_with(|| lhs.0.cmp(&rhs.0)));

        summary
    }
}
