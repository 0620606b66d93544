//! The dashboard's single mutable state container.
//!
//! Every view-level slot the P&L page can change lives here: the active
//! variance filter, the search box, which category rows are expanded, budget
//! targets, and the detail modal. There is exactly one owner (the top-level
//! view) and one mutator path (the setter methods below); everything else in
//! the crate stays pure.

use crate::schema::{LineItem, PnlStatement};
use crate::tree::{filter_items_by_search, filter_items_by_variance};
use crate::variance::VarianceLevel;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// The dropdown above the table: either everything, or exactly one bucket.
/// "All" is a view concern, not a classification, so it never reaches the
/// tree filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VarianceFilter {
    #[default]
    All,
    Level(VarianceLevel),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardState {
    pub variance_filter: VarianceFilter,
    pub search_term: String,
    /// Ids of category rows the user has expanded.
    pub expanded: BTreeSet<String>,
    /// Budget targets keyed by line item id, edited through the targets modal.
    pub budget_targets: BTreeMap<String, f64>,
    /// Id of the row whose detail modal is open, if any.
    pub detail_item: Option<String>,
    pub banner_dismissed: bool,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_variance_filter(&mut self, filter: VarianceFilter) {
        self.variance_filter = filter;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn clear_search(&mut self) {
        self.search_term.clear();
    }

    pub fn toggle_expanded(&mut self, id: &str) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_string());
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    pub fn set_budget_target(&mut self, id: impl Into<String>, target: f64) {
        self.budget_targets.insert(id.into(), target);
    }

    pub fn budget_target(&self, id: &str) -> Option<f64> {
        self.budget_targets.get(id).copied()
    }

    pub fn open_detail(&mut self, id: impl Into<String>) {
        self.detail_item = Some(id.into());
    }

    pub fn close_detail(&mut self) {
        self.detail_item = None;
    }

    pub fn dismiss_banner(&mut self) {
        self.banner_dismissed = true;
    }

    /// The rows the table should render right now: search narrows first, then
    /// the variance filter prunes, unless it is set to `All`, which bypasses
    /// the variance pass entirely.
    pub fn visible_items(&self, statement: &PnlStatement) -> Vec<LineItem> {
        let searched = filter_items_by_search(&statement.items, &self.search_term);
        match self.variance_filter {
            VarianceFilter::All => searched,
            VarianceFilter::Level(level) => {
                filter_items_by_variance(&searched, level, statement.net_profit_current())
            }
        }
    }
}
