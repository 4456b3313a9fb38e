use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use super::model::{BenchmarkDataset, BenchmarkRow};

// ---------------------------------------------------------------------------
// DomainGroup – rows sharing one `domain` value
// ---------------------------------------------------------------------------

/// The rows of one domain, borrowed from the dataset in file order.
#[derive(Debug, Clone)]
pub struct DomainGroup<'a> {
    pub domain: &'a str,
    pub rows: Vec<&'a BenchmarkRow>,
}

impl DomainGroup<'_> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Sorted set of distinct domain values.
pub fn unique_domains(dataset: &BenchmarkDataset) -> BTreeSet<&str> {
    dataset.rows.iter().map(|r| r.domain.as_str()).collect()
}

/// Partition the dataset by domain.
///
/// One group per distinct value, ordered by domain name; rows inside a group
/// keep their file order. An empty dataset yields no groups.
pub fn group_by_domain(dataset: &BenchmarkDataset) -> Vec<DomainGroup<'_>> {
    let mut groups: BTreeMap<&str, Vec<&BenchmarkRow>> = BTreeMap::new();
    for row in &dataset.rows {
        groups.entry(row.domain.as_str()).or_default().push(row);
    }

    groups
        .into_iter()
        .map(|(domain, rows)| {
            debug!("domain '{domain}': {} rows", rows.len());
            DomainGroup { domain, rows }
        })
        .collect()
}
