//! Recursive filtering, search and tallying over the line-item tree.
//!
//! All three operations share the same ancestor-preservation rule: when a
//! descendant matches, its ancestors are kept as pass-through containers so
//! the match stays reachable in the rendered hierarchy. Sibling order is
//! always preserved and the input tree is never mutated.

use crate::schema::LineItem;
use crate::variance::{analyze_variance, VarianceLevel};
use serde::{Deserialize, Serialize};

/// Returns a pruned copy of `items` keeping rows classified at `level`, plus
/// any ancestors needed to reach them. Rows that neither match nor contain a
/// match are dropped. Returns an empty vec when nothing matches.
///
/// "Show all" is not a level; callers bypass this function entirely for it.
pub fn filter_items_by_variance(
    items: &[LineItem],
    level: VarianceLevel,
    net_profit: f64,
) -> Vec<LineItem> {
    items
        .iter()
        .filter_map(|item| prune_by_variance(item, level, net_profit))
        .collect()
}

fn prune_by_variance(item: &LineItem, level: VarianceLevel, net_profit: f64) -> Option<LineItem> {
    let kept_children: Vec<LineItem> = item
        .children
        .iter()
        .filter_map(|child| prune_by_variance(child, level, net_profit))
        .collect();

    let self_matches = analyze_variance(item, net_profit).level == level;

    if self_matches || !kept_children.is_empty() {
        let mut kept = item.clone();
        // A matching parent keeps its full subtree only via children that
        // also survived the prune; unmatched descendants are dropped.
        kept.children = kept_children;
        Some(kept)
    } else {
        None
    }
}

/// Case-insensitive substring search on row names, with the same
/// ancestor-preservation rule as the variance filter. An empty or
/// whitespace-only term returns the tree unchanged.
pub fn filter_items_by_search(items: &[LineItem], term: &str) -> Vec<LineItem> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter_map(|item| prune_by_search(item, &needle))
        .collect()
}

fn prune_by_search(item: &LineItem, needle: &str) -> Option<LineItem> {
    let kept_children: Vec<LineItem> = item
        .children
        .iter()
        .filter_map(|child| prune_by_search(child, needle))
        .collect();

    let self_matches = item.name.to_lowercase().contains(needle);

    if self_matches || !kept_children.is_empty() {
        let mut kept = item.clone();
        if self_matches {
            // A row matched by name keeps its whole subtree so the user sees
            // the category contents, not a bare header.
            kept.children = item.children.clone();
        } else {
            kept.children = kept_children;
        }
        Some(kept)
    } else {
        None
    }
}

/// Per-bucket tallies across a whole tree. Parents and children are counted
/// independently; the four buckets always sum to the total node count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlaggedCounts {
    pub critical: usize,
    pub attention: usize,
    pub favorable: usize,
    pub normal: usize,
}

impl FlaggedCounts {
    /// Rows that warrant a badge in the UI (everything except normal).
    pub fn flagged(&self) -> usize {
        self.critical + self.attention + self.favorable
    }

    pub fn total(&self) -> usize {
        self.flagged() + self.normal
    }
}

/// Walks the tree once and tallies every row into its variance bucket.
pub fn count_flagged_items(items: &[LineItem], net_profit: f64) -> FlaggedCounts {
    let mut counts = FlaggedCounts::default();
    tally(items, net_profit, &mut counts);
    counts
}

fn tally(items: &[LineItem], net_profit: f64, counts: &mut FlaggedCounts) {
    for item in items {
        match analyze_variance(item, net_profit).level {
            VarianceLevel::Critical => counts.critical += 1,
            VarianceLevel::Attention => counts.attention += 1,
            VarianceLevel::Favorable => counts.favorable += 1,
            VarianceLevel::Normal => counts.normal += 1,
        }
        tally(&item.children, net_profit, counts);
    }
}
