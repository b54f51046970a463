//! Frequency counting over a sequence of items.

use std::collections::HashMap;
use std::hash::Hash;

/// Count how many times each item occurs.
///
/// Each item's count starts at zero when first seen and is incremented once
/// per occurrence.
pub fn count_items<K, I>(items: I) -> HashMap<K, u64>
where
    K: Eq + Hash,
    I: IntoIterator<Item = K>,
{
    items.into_iter().fold(HashMap::new(), |mut counts, item| {
        *counts.entry(item).or_default() += 1;
        counts
    })
}

/// Counts ordered by descending frequency, ties broken by item order.
pub fn sorted_counts<K: Ord>(counts: HashMap<K, u64>) -> Vec<(K, u64)> {
    let mut entries: Vec<(K, u64)> = counts.into_iter().collect();
    entries.sort_by(|(a_item, a_count), (b_item, b_count)| {
        b_count.cmp(a_count).then_with(|| a_item.cmp(b_item))
    });
    entries
}
