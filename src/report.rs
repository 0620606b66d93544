use crate::schema::{LineItem, LineItemType, PnlStatement};
use crate::tree::count_flagged_items;
use crate::utils::{format_money, format_money_delta, format_pct_delta};
use crate::variance::{analyze_variance, VarianceLevel};

/// Plain-text renderings of a classified statement, for exports and the
/// "share report" action. Rendering never mutates the statement.
pub struct PnlReport<'a> {
    statement: &'a PnlStatement,
    net_profit: f64,
}

impl<'a> PnlReport<'a> {
    pub fn new(statement: &'a PnlStatement) -> Self {
        let net_profit = statement.net_profit_current();
        Self {
            statement,
            net_profit,
        }
    }

    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "# P&L Variance Report - {}\n\n",
            self.statement.restaurant_name
        ));
        output.push_str(&format!(
            "**Period:** {} vs {}\n\n",
            self.statement.period_label, self.statement.prior_label
        ));
        output.push_str(&format!(
            "**Net Profit:** {}\n\n",
            format_money(self.net_profit)
        ));

        let counts = count_flagged_items(&self.statement.items, self.net_profit);
        output.push_str(&format!(
            "**Flags:** {} critical, {} attention, {} favorable ({} rows total)\n\n",
            counts.critical,
            counts.attention,
            counts.favorable,
            counts.total()
        ));

        for item in &self.statement.items {
            self.push_markdown_item(&mut output, item, 0);
        }
        output.push('\n');

        output
    }

    fn push_markdown_item(&self, output: &mut String, item: &LineItem, depth: usize) {
        let info = analyze_variance(item, self.net_profit);
        let marker = match info.level {
            VarianceLevel::Critical => " 🔴 **[CRITICAL]**",
            VarianceLevel::Attention => " 🟡 **[ATTENTION]**",
            VarianceLevel::Favorable => " 🟢 **[FAVORABLE]**",
            VarianceLevel::Normal => "",
        };

        let indent = "  ".repeat(depth);
        output.push_str(&format!(
            "{}- {}: {} ({} vs prior){}\n",
            indent,
            item.name,
            format_money(item.current),
            format_money_delta(info.variance),
            marker
        ));
        if !info.reason.is_empty() {
            output.push_str(&format!("{}  - {}\n", indent, info.reason));
        }

        for child in &item.children {
            self.push_markdown_item(output, child, depth + 1);
        }
    }

    pub fn to_csv(&self) -> String {
        let mut output = String::new();
        output.push_str("Id,Name,Type,Current,Prior,Variance,Variance %,Level,Reason\n");

        for item in &self.statement.items {
            self.push_csv_item(&mut output, item);
        }

        output
    }

    fn push_csv_item(&self, output: &mut String, item: &LineItem) {
        let info = analyze_variance(item, self.net_profit);
        let type_label = match item.item_type {
            LineItemType::Revenue => "Revenue",
            LineItemType::Expense => "Expense",
            LineItemType::Subtotal => "Subtotal",
        };

        output.push_str(&format!(
            "{},{},{},{:.2},{:.2},{:.2},{},{},{}\n",
            item.id,
            csv_escape(&item.name),
            type_label,
            item.current,
            item.prior,
            info.variance,
            format_pct_delta(info.variance_pct),
            info.level,
            csv_escape(&info.reason)
        ));

        for child in &item.children {
            self.push_csv_item(output, child);
        }
    }
}

fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
