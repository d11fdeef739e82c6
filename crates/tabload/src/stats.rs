//! Column statistics and profiles.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TabloadError};
use crate::input::Table;

/// How many distinct values to keep as a column sample.
const SAMPLE_VALUES: usize = 5;

/// Numeric statistics for a single column.
///
/// Computed over the numeric-coercible cells only; non-numeric cells are
/// skipped silently. A column with no numeric cells has `count == 0` and no
/// min/max/mean, which is not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStats {
    /// Number of numeric-coercible cells.
    pub count: usize,
    /// Smallest numeric value, if any.
    pub min: Option<f64>,
    /// Largest numeric value, if any.
    pub max: Option<f64>,
    /// Arithmetic mean of the numeric values, if any.
    pub mean: Option<f64>,
    /// Sum of the numeric values.
    pub sum: f64,
}

/// Streaming accumulator: single pass, running mean, O(1) memory.
#[derive(Debug, Clone)]
struct RunningStats {
    count: usize,
    mean: f64,
    sum: f64,
    min: f64,
    max: f64,
}

impl RunningStats {
    fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            sum: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    fn add(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;

        let delta = value - self.mean;
        self.mean += delta / self.count as f64;

        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    fn finish(self) -> ColumnStats {
        if self.count == 0 {
            return ColumnStats {
                count: 0,
                min: None,
                max: None,
                mean: None,
                sum: 0.0,
            };
        }

        ColumnStats {
            count: self.count,
            min: Some(self.min),
            max: Some(self.max),
            mean: Some(self.mean),
            sum: self.sum,
        }
    }
}

/// Compute numeric statistics for a named column.
pub fn column_stats(table: &Table, column: &str) -> Result<ColumnStats> {
    let index = table
        .column_index(column)
        .ok_or_else(|| TabloadError::ColumnNotFound {
            name: column.to_string(),
        })?;

    let mut acc = RunningStats::new();
    for value in table.column_values(index) {
        if let Ok(num) = value.trim().parse::<f64>() {
            acc.add(num);
        }
    }

    Ok(acc.finish())
}

/// Value-level profile of a single column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnProfile {
    /// Column name.
    pub name: String,
    /// Number of non-empty cells.
    pub non_empty: usize,
    /// Number of distinct non-empty values.
    pub unique: usize,
    /// Up to five distinct values, in first-seen order.
    pub sample_values: Vec<String>,
}

/// Profile a named column: non-empty count, distinct count, sample values.
pub fn column_profile(table: &Table, column: &str) -> Result<ColumnProfile> {
    let index = table
        .column_index(column)
        .ok_or_else(|| TabloadError::ColumnNotFound {
            name: column.to_string(),
        })?;

    let mut value_counts: IndexMap<&str, usize> = IndexMap::new();
    let mut non_empty = 0;

    for value in table.column_values(index) {
        if Table::is_empty_value(value) {
            continue;
        }
        non_empty += 1;
        *value_counts.entry(value).or_insert(0) += 1;
    }

    let sample_values = value_counts
        .keys()
        .take(SAMPLE_VALUES)
        .map(|v| v.to_string())
        .collect();

    Ok(ColumnProfile {
        name: column.to_string(),
        non_empty,
        unique: value_counts.len(),
        sample_values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_table(headers: Vec<&str>, rows: Vec<Vec<&str>>) -> Table {
        Table::new(
            headers.into_iter().map(String::from).collect(),
            rows.into_iter()
                .map(|r| r.into_iter().map(String::from).collect())
                .collect(),
            b',',
        )
    }

    #[test]
    fn test_stats_integer_column() {
        let table = make_table(
            vec!["count"],
            vec![vec!["1"], vec!["2"], vec!["3"], vec!["100"]],
        );
        let stats = column_stats(&table, "count").unwrap();

        assert_eq!(stats.count, 4);
        assert_eq!(stats.min, Some(1.0));
        assert_eq!(stats.max, Some(100.0));
        assert_eq!(stats.mean, Some(26.5));
        assert_eq!(stats.sum, 106.0);
    }

    #[test]
    fn test_stats_skips_non_numeric() {
        let table = make_table(
            vec!["value"],
            vec![vec!["1.5"], vec!["n/a"], vec!["2.5"], vec![""]],
        );
        let stats = column_stats(&table, "value").unwrap();

        assert_eq!(stats.count, 2);
        assert_eq!(stats.mean, Some(2.0));
    }

    #[test]
    fn test_stats_all_non_numeric() {
        let table = make_table(
            vec!["name"],
            vec![vec!["Alice"], vec!["Bob"], vec!["Carol"]],
        );
        let stats = column_stats(&table, "name").unwrap();

        assert_eq!(stats.count, 0);
        assert_eq!(stats.min, None);
        assert_eq!(stats.max, None);
        assert_eq!(stats.mean, None);
    }

    #[test]
    fn test_stats_unknown_column() {
        let table = make_table(vec!["a"], vec![vec!["1"]]);
        let err = column_stats(&table, "b").unwrap_err();
        assert!(matches!(err, TabloadError::ColumnNotFound { .. }));
    }

    #[test]
    fn test_profile_counts() {
        let table = make_table(
            vec!["major"],
            vec![
                vec!["CS"],
                vec!["Math"],
                vec!["CS"],
                vec![""],
                vec!["  "],
            ],
        );
        let profile = column_profile(&table, "major").unwrap();

        assert_eq!(profile.non_empty, 3);
        assert_eq!(profile.unique, 2);
        assert_eq!(profile.sample_values, vec!["CS", "Math"]);
    }
}
