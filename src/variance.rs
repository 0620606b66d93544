//! Variance classification for P&L rows.
//!
//! Each row is compared against its prior-period value and bucketed by how
//! hard the swing hits the bottom line. Thresholds are expressed both as a
//! share of net profit and as absolute dollars, so a small line item cannot
//! hide a profit-sized move behind a small percentage.

use crate::schema::{LineItem, LineItemType};
use crate::utils::{format_money, format_pct, format_pct_delta};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VarianceLevel {
    Critical,
    Attention,
    Favorable,
    Normal,
}

impl VarianceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            VarianceLevel::Critical => "critical",
            VarianceLevel::Attention => "attention",
            VarianceLevel::Favorable => "favorable",
            VarianceLevel::Normal => "normal",
        }
    }
}

impl std::fmt::Display for VarianceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The classification of one row for one evaluation. Computed fresh every
/// time from the row and the statement's net profit; never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VarianceInfo {
    pub level: VarianceLevel,
    pub reason: String,
    pub variance: f64,
    pub variance_pct: f64,
}

/// Classifies a single line item against the supplied net profit.
///
/// Rules are applied in strict order, first match wins:
/// 1. critical: profit impact > 25% OR (|pct| > 15% AND |dollars| > 3000)
/// 2. attention: profit impact > 10% OR |dollars| > 2000
/// 3. favorable: direction is favorable AND (impact > 5% OR |dollars| > 1000)
/// 4. normal otherwise, with an empty reason
///
/// A favorable move that trips rule 1 or 2 is reported as favorable, not
/// critical or attention.
///
/// When `prior == 0` the percentage is reported as 0, which suppresses the
/// percentage-based threshold while the dollar thresholds still apply. New
/// line items therefore only flag on absolute size. See the tests.
pub fn analyze_variance(item: &LineItem, net_profit: f64) -> VarianceInfo {
    let variance = item.current - item.prior;
    let variance_pct = if item.prior != 0.0 {
        variance / item.prior * 100.0
    } else {
        0.0
    };
    let profit_impact = if net_profit != 0.0 {
        (variance / net_profit).abs() * 100.0
    } else {
        0.0
    };

    let is_favorable = match item.item_type {
        LineItemType::Expense => variance < 0.0,
        LineItemType::Revenue | LineItemType::Subtotal => variance > 0.0,
    };

    let crosses_critical =
        profit_impact > 25.0 || (variance_pct.abs() > 15.0 && variance.abs() > 3000.0);
    let crosses_attention = profit_impact > 10.0 || variance.abs() > 2000.0;

    let level = if crosses_critical {
        if is_favorable {
            VarianceLevel::Favorable
        } else {
            VarianceLevel::Critical
        }
    } else if crosses_attention {
        if is_favorable {
            VarianceLevel::Favorable
        } else {
            VarianceLevel::Attention
        }
    } else if is_favorable && (profit_impact > 5.0 || variance.abs() > 1000.0) {
        VarianceLevel::Favorable
    } else {
        VarianceLevel::Normal
    };

    let reason = match level {
        VarianceLevel::Normal => String::new(),
        _ => describe(item, variance, variance_pct, profit_impact, level),
    };

    VarianceInfo {
        level,
        reason,
        variance,
        variance_pct,
    }
}

fn describe(
    item: &LineItem,
    variance: f64,
    variance_pct: f64,
    profit_impact: f64,
    level: VarianceLevel,
) -> String {
    let noun = match item.item_type {
        LineItemType::Revenue => "Revenue",
        LineItemType::Expense => "Expense",
        LineItemType::Subtotal => "Subtotal",
    };
    let direction = if variance >= 0.0 { "up" } else { "down" };
    let magnitude = format_money(variance.abs());
    let pct = format_pct_delta(variance_pct);

    match level {
        VarianceLevel::Critical => format!(
            "{} {} {} ({}), {} of net profit",
            noun,
            direction,
            magnitude,
            pct,
            format_pct(profit_impact)
        ),
        VarianceLevel::Attention => format!(
            "{} {} {} ({}), worth reviewing at {} of net profit",
            noun,
            direction,
            magnitude,
            pct,
            format_pct(profit_impact)
        ),
        VarianceLevel::Favorable => {
            format!("Favorable: {} {} {} ({})", noun.to_lowercase(), direction, magnitude, pct)
        }
        VarianceLevel::Normal => String::new(),
    }
}
