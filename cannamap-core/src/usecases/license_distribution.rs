use super::prelude::*;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionEntry {
    pub label: String,
    pub count: usize,
}

/// Number of occurrences per distinct value.
///
/// Entries are sorted by count in descending order,
/// values with the same count keep their order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Distribution {
    entries: Vec<DistributionEntry>,
    labels: Vec<String>,
}

impl Distribution {
    pub fn from_values<'a>(values: impl IntoIterator<Item = &'a str>) -> Self {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut entries: Vec<DistributionEntry> = vec![];
        for value in values {
            match index.get(value) {
                Some(&i) => entries[i].count += 1,
                None => {
                    index.insert(value, entries.len());
                    entries.push(DistributionEntry {
                        label: value.to_string(),
                        count: 1,
                    });
                }
            }
        }
        let labels = entries.iter().map(|e| e.label.clone()).collect();
        // stable
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        Self { entries, labels }
    }

    pub fn entries(&self) -> &[DistributionEntry] {
        &self.entries
    }

    /// Distinct values in order of their first appearance.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count_of(&self, label: &str) -> usize {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.count)
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Share of `label` in percent.
    pub fn share_of(&self, label: &str) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count_of(label) as f64 * 100.0 / total as f64
    }

    /// Restrict the distribution to the selected values.
    ///
    /// Unknown values are ignored.
    pub fn select<S: AsRef<str>>(&self, selection: &[S]) -> Self {
        let selected = |label: &String| selection.iter().any(|s| s.as_ref() == label);
        Self {
            entries: self
                .entries
                .iter()
                .filter(|e| selected(&e.label))
                .cloned()
                .collect(),
            labels: self.labels.iter().filter(|l| selected(l)).cloned().collect(),
        }
    }
}

/// Records without a license status are not counted.
pub fn license_status_distribution(records: &[RegistryRecord]) -> Distribution {
    Distribution::from_values(
        records
            .iter()
            .map(|r| r.status.as_str())
            .filter(|status| !status.trim().is_empty()),
    )
}

/// Blank categories are counted as [`RegistryRecord::CATEGORY_NOT_AVAILABLE`].
pub fn license_category_distribution(records: &[RegistryRecord]) -> Distribution {
    Distribution::from_values(records.iter().map(RegistryRecord::category_or_not_available))
}
