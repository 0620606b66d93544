//! The scripted "ask about your numbers" chat panel.
//!
//! There is no model behind this: questions are keyword-matched against a
//! fixed set of topics and answered from a snapshot of the live dashboard
//! numbers. The typing delay that makes the panel feel alive is a separate
//! pure function so no test ever has to sleep.

use crate::schema::PnlStatement;
use crate::tree::{count_flagged_items, FlaggedCounts};
use crate::utils::{format_money, format_money_delta, format_pct};
use crate::variance::{analyze_variance, VarianceLevel};
use std::time::Duration;

const BASE_DELAY_MS: u64 = 400;
const PER_CHAR_DELAY_MS: u64 = 12;
const MAX_DELAY_MS: u64 = 2_500;

/// How long the UI should pretend to "type" before showing `text`.
/// Proportional to response length, clamped so long answers never stall the
/// panel. Zeroing this out changes nothing about correctness.
pub fn typing_delay(text: &str) -> Duration {
    let ms = BASE_DELAY_MS + PER_CHAR_DELAY_MS * text.chars().count() as u64;
    Duration::from_millis(ms.min(MAX_DELAY_MS))
}

#[derive(Debug, Clone)]
pub struct AssistantReply {
    pub text: String,
    pub typing_delay: Duration,
}

#[derive(Debug, Clone)]
pub struct FlaggedRow {
    pub name: String,
    pub reason: String,
}

/// The numbers the assistant is allowed to talk about, captured once per
/// statement so answering is a pure lookup.
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    pub restaurant_name: String,
    pub period_label: String,
    pub prior_label: String,
    pub net_profit: f64,
    pub net_profit_prior: f64,
    pub counts: FlaggedCounts,
    pub critical_rows: Vec<FlaggedRow>,
    pub attention_rows: Vec<FlaggedRow>,
    /// COGS + labor as a share of revenue, when the statement has the
    /// conventional sections to compute it from.
    pub prime_cost_pct: Option<f64>,
}

impl DashboardSnapshot {
    pub fn from_statement(statement: &PnlStatement) -> Self {
        let net_profit = statement.net_profit_current();
        let counts = count_flagged_items(&statement.items, net_profit);

        let mut critical_rows = Vec::new();
        let mut attention_rows = Vec::new();
        collect_flagged(&statement.items, net_profit, &mut critical_rows, &mut attention_rows);

        let section_total = |id: &str| {
            statement
                .items
                .iter()
                .find(|i| i.id == id)
                .map(|i| i.current)
        };
        let revenue = section_total("revenue");
        let prime_cost_pct = match (section_total("cogs"), section_total("labor"), revenue) {
            (Some(cogs), Some(labor), Some(revenue)) if revenue != 0.0 => {
                Some((cogs + labor) / revenue * 100.0)
            }
            _ => None,
        };

        Self {
            restaurant_name: statement.restaurant_name.clone(),
            period_label: statement.period_label.clone(),
            prior_label: statement.prior_label.clone(),
            net_profit,
            net_profit_prior: statement.net_profit_prior(),
            counts,
            critical_rows,
            attention_rows,
            prime_cost_pct,
        }
    }
}

pub struct ScriptedAssistant {
    snapshot: DashboardSnapshot,
}

impl ScriptedAssistant {
    pub fn new(snapshot: DashboardSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn from_statement(statement: &PnlStatement) -> Self {
        Self::new(DashboardSnapshot::from_statement(statement))
    }

    /// Answers a question from the snapshot. First matching topic wins;
    /// anything unrecognized falls through to the help text.
    pub fn respond(&self, question: &str) -> AssistantReply {
        let text = self.answer(question);
        let typing_delay = typing_delay(&text);
        AssistantReply { text, typing_delay }
    }

    fn answer(&self, question: &str) -> String {
        let q = question.to_lowercase();
        let s = &self.snapshot;

        if q.trim().is_empty() {
            return self.help_text();
        }

        if contains_any(&q, &["hello", "hi there", "hey", "good morning", "good evening"]) {
            return format!(
                "Hi! I'm looking at {} for {}. Ask me about profit, prime cost, or what needs attention.",
                s.restaurant_name, s.period_label
            );
        }

        if contains_any(&q, &["profit", "bottom line", "how did we do", "make money"]) {
            let delta = s.net_profit - s.net_profit_prior;
            return format!(
                "Net profit for {} is {}, compared with {} in {}. That's {} period over period.",
                s.period_label,
                format_money(s.net_profit),
                format_money(s.net_profit_prior),
                s.prior_label,
                format_money_delta(delta)
            );
        }

        if contains_any(&q, &["prime cost", "food cost", "cogs", "cost of goods"]) {
            return match s.prime_cost_pct {
                Some(pct) => format!(
                    "Prime cost (COGS plus labor) is running at {} of revenue for {}. Most full-service operators target 55-60%.",
                    format_pct(pct),
                    s.period_label
                ),
                None => "I can't compute prime cost for this statement; it needs revenue, COGS and labor sections.".to_string(),
            };
        }

        if contains_any(&q, &["attention", "wrong", "worried", "flag", "variance", "problem"]) {
            return self.variance_summary();
        }

        if contains_any(&q, &["labor", "staff", "payroll", "overtime"]) {
            let labor_flags: Vec<&FlaggedRow> = s
                .critical_rows
                .iter()
                .chain(&s.attention_rows)
                .filter(|row| row.name.to_lowercase().contains("labor"))
                .collect();
            if labor_flags.is_empty() {
                return format!(
                    "Labor looks in line with {} this period. Nothing is flagged.",
                    s.prior_label
                );
            }
            let mut text = "Labor is flagged this period:".to_string();
            for row in labor_flags {
                text.push_str(&format!("\n- {}: {}", row.name, row.reason));
            }
            return text;
        }

        self.help_text()
    }

    fn variance_summary(&self) -> String {
        let s = &self.snapshot;
        if s.critical_rows.is_empty() && s.attention_rows.is_empty() {
            return format!(
                "{} looks clean for {}: {} favorable rows and nothing flagged critical.",
                s.restaurant_name, s.period_label, s.counts.favorable
            );
        }

        let mut text = format!(
            "{} critical and {} attention rows for {}:",
            s.counts.critical, s.counts.attention, s.period_label
        );
        for row in &s.critical_rows {
            text.push_str(&format!("\n- [critical] {}: {}", row.name, row.reason));
        }
        for row in &s.attention_rows {
            text.push_str(&format!("\n- [attention] {}: {}", row.name, row.reason));
        }
        text
    }

    fn help_text(&self) -> String {
        "I can answer questions about this P&L: try \"how is profit\", \"what needs attention\", \"prime cost\", or \"how is labor\".".to_string()
    }
}

fn collect_flagged(
    items: &[crate::schema::LineItem],
    net_profit: f64,
    critical: &mut Vec<FlaggedRow>,
    attention: &mut Vec<FlaggedRow>,
) {
    for item in items {
        let info = analyze_variance(item, net_profit);
        let row = FlaggedRow {
            name: item.name.clone(),
            reason: info.reason,
        };
        match info.level {
            VarianceLevel::Critical => critical.push(row),
            VarianceLevel::Attention => attention.push(row),
            _ => {}
        }
        collect_flagged(&item.children, net_profit, critical, attention);
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
