//! # Restaurant P&L Core
//!
//! The data model, variance analysis and mock data behind a restaurant
//! management dashboard. The rendering layer lives elsewhere; this crate owns
//! everything it computes from:
//!
//! - **Line-item tree**: a static hierarchy of revenue/expense/subtotal rows,
//!   each carrying a current and a prior period value
//! - **Variance classifier**: pure function bucketing each row as
//!   critical/attention/favorable/normal against the statement's net profit
//! - **Tree filter/search**: recursive pruning that keeps ancestor chains so
//!   matches stay reachable in the rendered hierarchy
//! - **Dashboard state**: one explicit struct holding every mutable view slot
//! - **Mock data**: generated daily sales/labor series for the operations views
//! - **Scripted assistant**: keyword-matched answers over a snapshot of the
//!   live numbers, with a separately testable typing delay
//!
//! ## Example
//!
//! ```rust
//! use restaurant_pnl_core::*;
//!
//! let statement = fixtures::sample_statement();
//! let analysis = analyze_statement(&statement).unwrap();
//!
//! assert!(analysis.counts.critical > 0);
//! let kitchen = &analysis.by_id["kitchen-labor"];
//! assert_eq!(kitchen.level, VarianceLevel::Critical);
//! ```

pub mod assistant;
pub mod error;
pub mod fixtures;
pub mod mock;
pub mod prefs;
pub mod report;
pub mod schema;
pub mod state;
pub mod tree;
pub mod utils;
pub mod variance;
pub mod weekday;

pub use assistant::{typing_delay, AssistantReply, DashboardSnapshot, ScriptedAssistant};
pub use error::{PnlError, Result};
pub use mock::{generate_mock_data, DailySnapshot, MockDataConfig, MockDataGenerator};
pub use prefs::DashboardPrefs;
pub use report::PnlReport;
pub use schema::{LineItem, LineItemType, PnlStatement, MAX_TREE_DEPTH};
pub use state::{DashboardState, VarianceFilter};
pub use tree::{
    count_flagged_items, filter_items_by_search, filter_items_by_variance, FlaggedCounts,
};
pub use utils::{format_money, format_money_delta, format_pct, format_pct_delta};
pub use variance::{analyze_variance, VarianceInfo, VarianceLevel};
pub use weekday::{get_profile_weights, WeekdayProfile};

use log::{debug, info};
use std::collections::BTreeMap;

/// Everything the dashboard needs to paint badges for one statement:
/// the reference net profit, per-bucket tallies, and each row's
/// classification keyed by id.
#[derive(Debug, Clone)]
pub struct PnlAnalysis {
    pub net_profit: f64,
    pub counts: FlaggedCounts,
    pub by_id: BTreeMap<String, VarianceInfo>,
}

/// Validates the statement and classifies every row against its own net
/// profit. This is the one-call entry point the dashboard uses on load.
pub fn analyze_statement(statement: &PnlStatement) -> Result<PnlAnalysis> {
    statement.validate()?;

    let net_profit = statement.net_profit_current();
    info!(
        "Analyzing P&L for {}: {} vs {}",
        statement.restaurant_name, statement.period_label, statement.prior_label
    );
    debug!(
        "Statement has {} rows, net profit {:.2}",
        statement.total_items(),
        net_profit
    );

    let counts = count_flagged_items(&statement.items, net_profit);
    let mut by_id = BTreeMap::new();
    classify_into(&statement.items, net_profit, &mut by_id);

    debug!(
        "Flagged {} of {} rows ({} critical)",
        counts.flagged(),
        counts.total(),
        counts.critical
    );

    Ok(PnlAnalysis {
        net_profit,
        counts,
        by_id,
    })
}

fn classify_into(
    items: &[LineItem],
    net_profit: f64,
    by_id: &mut BTreeMap<String, VarianceInfo>,
) {
    for item in items {
        by_id.insert(item.id.clone(), analyze_variance(item, net_profit));
        classify_into(&item.children, net_profit, by_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_statement_end_to_end() {
        let statement = fixtures::sample_statement();
        let analysis = analyze_statement(&statement).unwrap();

        assert!((analysis.net_profit - 17_722.37).abs() < 0.01);
        assert_eq!(analysis.by_id.len(), statement.total_items());
        assert_eq!(analysis.counts.total(), statement.total_items());

        assert_eq!(analysis.by_id["kitchen-labor"].level, VarianceLevel::Critical);
        assert_eq!(analysis.by_id["rent"].level, VarianceLevel::Normal);
        assert_eq!(analysis.by_id["marketing"].level, VarianceLevel::Favorable);
    }

    #[test]
    fn test_analyze_statement_rejects_invalid_tree() {
        let mut statement = fixtures::sample_statement();
        let duplicate = statement.items[0].clone();
        statement.items.push(duplicate);
        assert!(matches!(
            analyze_statement(&statement),
            Err(PnlError::DuplicateItemId(_))
        ));
    }
}
