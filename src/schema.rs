use crate::error::{PnlError, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Maximum nesting depth of a line-item tree. The dashboard renders at most
/// category -> group -> detail rows.
pub const MAX_TREE_DEPTH: usize = 3;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub enum LineItemType {
    #[schemars(description = "Income from sales of food, beverage or services. An increase versus the prior period is favorable.")]
    Revenue,

    #[schemars(description = "A cost line such as COGS, labor or occupancy. A decrease versus the prior period is favorable.")]
    Expense,

    #[schemars(
        description = "A derived display row (Gross Profit, Prime Cost, Net Profit). Treated like revenue for variance direction, excluded from net profit roll-ups."
    )]
    Subtotal,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LineItem {
    #[schemars(description = "Unique key for this row, stable across periods (e.g. 'food-cost')")]
    pub id: String,

    #[schemars(description = "Display label as it appears on the statement (e.g. 'Food Cost')")]
    pub name: String,

    #[schemars(description = "Value for the current reporting period, in dollars")]
    pub current: f64,

    #[schemars(description = "Value for the comparison period (prior month or budget), in dollars")]
    pub prior: f64,

    #[serde(rename = "type")]
    #[schemars(description = "Whether the row is revenue, expense or a derived subtotal")]
    pub item_type: LineItemType,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schemars(description = "Ordered child rows. Absent for leaf rows.")]
    pub children: Vec<LineItem>,
}

impl LineItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        item_type: LineItemType,
        current: f64,
        prior: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            current,
            prior,
            item_type,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<LineItem>) -> Self {
        self.children = children;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes in this subtree, the row itself included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(LineItem::node_count).sum::<usize>()
    }
}

/// A full P&L statement for one reporting period, compared against a prior
/// period. Constructed once from fixtures or an import; never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PnlStatement {
    #[schemars(description = "The restaurant or location name")]
    pub restaurant_name: String,

    #[schemars(description = "Label for the current period (e.g. 'March 2024')")]
    pub period_label: String,

    #[schemars(description = "Label for the comparison period (e.g. 'February 2024')")]
    pub prior_label: String,

    #[schemars(description = "Top-level statement sections in display order")]
    pub items: Vec<LineItem>,
}

impl PnlStatement {
    /// Net profit for the current period: revenue leaves minus expense leaves.
    /// Subtotal rows are derived presentation rows and are skipped so their
    /// contents are not double counted.
    pub fn net_profit_current(&self) -> f64 {
        sum_leaves(&self.items, |item| item.current)
    }

    pub fn net_profit_prior(&self) -> f64 {
        sum_leaves(&self.items, |item| item.prior)
    }

    pub fn total_items(&self) -> usize {
        self.items.iter().map(LineItem::node_count).sum()
    }

    /// Checks the structural invariants the rest of the crate relies on:
    /// ids are unique across the whole tree and nesting stays within
    /// [`MAX_TREE_DEPTH`].
    pub fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for item in &self.items {
            validate_item(item, 1, &mut seen)?;
        }
        Ok(())
    }

    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(PnlStatement)
    }

    pub fn schema_as_json() -> std::result::Result<String, serde_json::Error> {
        let schema = Self::generate_json_schema();
        serde_json::to_string_pretty(&schema)
    }

    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn sum_leaves(items: &[LineItem], value: impl Fn(&LineItem) -> f64 + Copy) -> f64 {
    let mut total = 0.0;
    for item in items {
        if item.is_leaf() {
            match item.item_type {
                LineItemType::Revenue => total += value(item),
                LineItemType::Expense => total -= value(item),
                LineItemType::Subtotal => {}
            }
        } else {
            total += sum_leaves(&item.children, value);
        }
    }
    total
}

fn validate_item(item: &LineItem, depth: usize, seen: &mut BTreeSet<String>) -> Result<()> {
    if depth > MAX_TREE_DEPTH {
        return Err(PnlError::TreeTooDeep {
            id: item.id.clone(),
            depth,
            max: MAX_TREE_DEPTH,
        });
    }
    if !seen.insert(item.id.clone()) {
        return Err(PnlError::DuplicateItemId(item.id.clone()));
    }
    for child in &item.children {
        validate_item(child, depth + 1, seen)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_level_statement() -> PnlStatement {
        PnlStatement {
            restaurant_name: "Test Bistro".to_string(),
            period_label: "March 2024".to_string(),
            prior_label: "February 2024".to_string(),
            items: vec![
                LineItem::new("revenue", "Revenue", LineItemType::Revenue, 0.0, 0.0)
                    .with_children(vec![
                        LineItem::new("food-sales", "Food Sales", LineItemType::Revenue, 80_000.0, 75_000.0),
                        LineItem::new("bev-sales", "Beverage Sales", LineItemType::Revenue, 20_000.0, 22_000.0),
                    ]),
                LineItem::new("cogs", "Cost of Goods Sold", LineItemType::Expense, 0.0, 0.0)
                    .with_children(vec![LineItem::new(
                        "food-cost",
                        "Food Cost",
                        LineItemType::Expense,
                        30_000.0,
                        28_000.0,
                    )]),
                LineItem::new("gross-profit", "Gross Profit", LineItemType::Subtotal, 70_000.0, 69_000.0),
            ],
        }
    }

    #[test]
    fn test_net_profit_skips_subtotals_and_parents() {
        let statement = two_level_statement();
        // 80k + 20k - 30k; the Gross Profit row and the container rows do not count.
        assert!((statement.net_profit_current() - 70_000.0).abs() < 1e-9);
        assert!((statement.net_profit_prior() - 69_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_total_items_counts_every_node() {
        let statement = two_level_statement();
        assert_eq!(statement.total_items(), 6);
    }

    #[test]
    fn test_validate_accepts_well_formed_tree() {
        assert!(two_level_statement().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_id() {
        let mut statement = two_level_statement();
        statement.items.push(LineItem::new(
            "food-sales",
            "Food Sales Again",
            LineItemType::Revenue,
            1.0,
            1.0,
        ));
        match statement.validate() {
            Err(PnlError::DuplicateItemId(id)) => assert_eq!(id, "food-sales"),
            other => panic!("expected DuplicateItemId, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_overdeep_tree() {
        let deep = LineItem::new("a", "A", LineItemType::Expense, 0.0, 0.0).with_children(vec![
            LineItem::new("b", "B", LineItemType::Expense, 0.0, 0.0).with_children(vec![
                LineItem::new("c", "C", LineItemType::Expense, 0.0, 0.0).with_children(vec![
                    LineItem::new("d", "D", LineItemType::Expense, 0.0, 0.0),
                ]),
            ]),
        ]);
        let statement = PnlStatement {
            restaurant_name: "Deep".to_string(),
            period_label: "P".to_string(),
            prior_label: "Q".to_string(),
            items: vec![deep],
        };
        assert!(matches!(
            statement.validate(),
            Err(PnlError::TreeTooDeep { depth: 4, .. })
        ));
    }

    #[test]
    fn test_schema_generation() {
        let schema_json = PnlStatement::schema_as_json().unwrap();
        assert!(schema_json.contains("restaurant_name"));
        assert!(schema_json.contains("period_label"));
        assert!(schema_json.contains("items"));
    }

    #[test]
    fn test_serialization_round_trip() {
        let statement = two_level_statement();
        let json = statement.to_json().unwrap();
        assert!(json.contains("Test Bistro"));
        assert!(json.contains("\"type\": \"Revenue\""));

        let deserialized: PnlStatement = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.restaurant_name, "Test Bistro");
        assert_eq!(deserialized.total_items(), 6);
    }
}
