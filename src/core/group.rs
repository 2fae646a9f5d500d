//! Grouping of cost allocations by distribution key.

use std::collections::HashMap;

use super::types::Allocation;

/// Allocations sharing one normalized distribution key.
///
/// `key` is `None` for the "no distribution key" sentinel group.
#[derive(Debug)]
pub struct AllocationGroup<'a> {
    pub key: Option<&'a str>,
    pub items: Vec<&'a Allocation>,
}

/// Group allocations by distribution key, preserving order.
///
/// A missing or empty `distribution_key_name` normalizes to the sentinel
/// key. Groups come out in first-occurrence order of their key — the
/// sentinel group sits wherever its key was first seen, not forced to front
/// or back — and items keep their input order within each group. Every
/// allocation lands in exactly one group.
pub fn group_allocations(allocations: &[Allocation]) -> Vec<AllocationGroup<'_>> {
    let mut groups: Vec<AllocationGroup<'_>> = Vec::new();
    let mut index: HashMap<Option<&str>, usize> = HashMap::new();

    for allocation in allocations {
        let key = allocation
            .distribution_key_name
            .as_deref()
            .filter(|k| !k.is_empty());
        match index.get(&key) {
            Some(&i) => groups[i].items.push(allocation),
            None => {
                index.insert(key, groups.len());
                groups.push(AllocationGroup {
                    key,
                    items: vec![allocation],
                });
            }
        }
    }
    groups
}
