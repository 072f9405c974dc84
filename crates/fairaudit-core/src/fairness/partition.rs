//! Row partitioning by sensitive attribute.

use crate::error::ReportError;
use crate::label::Label;
use std::collections::HashMap;

/// Row indices grouped by sensitive attribute value.
///
/// Groups keep either first-encountered order or an explicit caller order.
/// Rows whose group value is missing never belong to a group, and groups
/// that end up with no rows are not stored.
#[derive(Debug, Clone, Default)]
pub struct GroupPartition {
    groups: Vec<(Label, Vec<usize>)>,
    unassigned: usize,
}

impl GroupPartition {
    /// Partitions `rows` of `sensitive` in first-encountered group order.
    pub fn natural<I>(sensitive: &[Label], rows: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut partition = Self::default();
        let mut slots: HashMap<&Label, usize> = HashMap::new();

        for row in rows {
            let group = &sensitive[row];
            if group.is_missing() {
                partition.unassigned += 1;
                continue;
            }
            let slot = *slots.entry(group).or_insert_with(|| {
                partition.groups.push((group.clone(), Vec::new()));
                partition.groups.len() - 1
            });
            partition.groups[slot].1.push(row);
        }

        partition
    }

    /// Partitions `rows` of `sensitive` following `order`.
    ///
    /// Rows whose group is not listed in `order` are left unassigned. Listed
    /// groups without rows are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::DuplicateGroup`] if `order` repeats a group.
    pub fn ordered<I>(sensitive: &[Label], rows: I, order: &[Label]) -> Result<Self, ReportError>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut slots: HashMap<&Label, usize> = HashMap::with_capacity(order.len());
        for (slot, group) in order.iter().enumerate() {
            if slots.insert(group, slot).is_some() {
                return Err(ReportError::DuplicateGroup(group.to_string()));
            }
        }

        let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); order.len()];
        let mut unassigned = 0;

        for row in rows {
            let group = &sensitive[row];
            match slots.get(group) {
                Some(&slot) if !group.is_missing() => buckets[slot].push(row),
                _ => unassigned += 1,
            }
        }

        let groups = order
            .iter()
            .cloned()
            .zip(buckets)
            .filter(|(_, rows)| !rows.is_empty())
            .collect();

        Ok(Self { groups, unassigned })
    }

    /// Iterates over `(group, row indices)` in partition order.
    pub fn iter(&self) -> impl Iterator<Item = (&Label, &[usize])> {
        self.groups.iter().map(|(group, rows)| (group, rows.as_slice()))
    }

    /// Number of non-empty groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of rows that did not land in any group.
    pub fn unassigned(&self) -> usize {
        self.unassigned
    }
}
