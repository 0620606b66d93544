//! Generates four weeks of mock daily operations data and prints a simple
//! sales/labor table.
//!
//! Run with: cargo run --example mock_week_demo

use anyhow::Result;
use restaurant_pnl_core::*;

fn main() -> Result<()> {
    let config = MockDataConfig {
        seed: Some(7),
        ..MockDataConfig::default()
    };
    let data = generate_mock_data(&config)?;

    println!("{:<12} {:>12} {:>8} {:>12} {:>8}", "Date", "Sales", "Guests", "Labor $", "Hours");
    for day in &data {
        println!(
            "{:<12} {:>12} {:>8} {:>12} {:>8.1}",
            day.date.format("%a %b %d"),
            format_money(day.sales),
            day.guest_count,
            format_money(day.labor_cost),
            day.labor_hours
        );
    }

    let total: f64 = data.iter().map(|d| d.sales).sum();
    println!("\n{} days, {} total sales", data.len(), format_money(total));

    Ok(())
}
