//! The canonical demo statement the dashboard ships with.
//!
//! Numbers are chosen to exercise every variance bucket: a kitchen-labor
//! blowout (critical), a new catering line with no prior period, a favorable
//! marketing cut, and plenty of quiet rows.

use crate::schema::{LineItem, LineItemType, PnlStatement};

/// March-vs-February P&L for the fictional "Harbor & Vine" restaurant.
/// Current-period net profit works out to $17,722.37.
pub fn sample_statement() -> PnlStatement {
    use LineItemType::*;

    PnlStatement {
        restaurant_name: "Harbor & Vine".to_string(),
        period_label: "March 2024".to_string(),
        prior_label: "February 2024".to_string(),
        items: vec![
            LineItem::new("revenue", "Revenue", Revenue, 163_150.00, 152_450.00).with_children(
                vec![
                    LineItem::new("food-sales", "Food Sales", Revenue, 118_400.00, 112_650.00),
                    LineItem::new("beverage-sales", "Beverage Sales", Revenue, 38_250.00, 39_800.00),
                    // New this period: no prior value, so its percentage
                    // change reads as 0 and only dollar thresholds apply.
                    LineItem::new("catering", "Catering & Events", Revenue, 6_500.00, 0.00),
                ],
            ),
            LineItem::new("cogs", "Cost of Goods Sold", Expense, 49_900.00, 48_420.00)
                .with_children(vec![
                    LineItem::new("food-cost", "Food Cost", Expense, 38_900.00, 36_200.00),
                    LineItem::new("beverage-cost", "Beverage Cost", Expense, 9_150.00, 10_400.00),
                    LineItem::new("paper-goods", "Paper & Packaging", Expense, 1_850.00, 1_820.00),
                ]),
            LineItem::new("labor", "Labor", Expense, 84_377.63, 78_766.00).with_children(vec![
                LineItem::new("kitchen-labor", "Kitchen Labor", Expense, 55_670.00, 50_556.00),
                LineItem::new("foh-labor", "Front of House Labor", Expense, 24_300.00, 23_900.00),
                LineItem::new("payroll-taxes", "Payroll Taxes & Benefits", Expense, 4_407.63, 4_310.00),
            ]),
            LineItem::new("opex", "Operating Expenses", Expense, 11_150.00, 13_880.00)
                .with_children(vec![
                    LineItem::new("rent", "Rent", Expense, 7_500.00, 7_500.00),
                    LineItem::new("utilities", "Utilities", Expense, 1_650.00, 1_580.00),
                    LineItem::new("marketing", "Marketing", Expense, 2_000.00, 4_800.00),
                ]),
            LineItem::new("gross-profit", "Gross Profit", Subtotal, 113_250.00, 104_030.00),
            LineItem::new("net-profit", "Net Profit", Subtotal, 17_722.37, 11_384.00),
        ],
    }
}
