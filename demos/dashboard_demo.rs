//! Walks the full dashboard flow in the terminal: load the demo statement,
//! classify it, narrow the view, print the report, and ask the assistant a
//! couple of questions.
//!
//! Run with: cargo run --example dashboard_demo

use anyhow::Result;
use restaurant_pnl_core::*;

fn main() -> Result<()> {
    let statement = fixtures::sample_statement();
    let analysis = analyze_statement(&statement)?;

    println!(
        "{} / {} vs {}",
        statement.restaurant_name, statement.period_label, statement.prior_label
    );
    println!(
        "Net profit {} | {} critical, {} attention, {} favorable\n",
        format_money(analysis.net_profit),
        analysis.counts.critical,
        analysis.counts.attention,
        analysis.counts.favorable
    );

    let mut state = DashboardState::new();
    state.set_variance_filter(VarianceFilter::Level(VarianceLevel::Critical));
    println!("Critical rows only:");
    for item in state.visible_items(&statement) {
        println!("  {}", item.name);
        for child in &item.children {
            let info = analyze_variance(child, analysis.net_profit);
            println!("    {} - {}", child.name, info.reason);
        }
    }

    println!("\n--- Markdown report ---\n");
    println!("{}", PnlReport::new(&statement).to_markdown());

    let assistant = ScriptedAssistant::from_statement(&statement);
    for question in ["how is profit?", "what needs attention?", "prime cost?"] {
        let reply = assistant.respond(question);
        println!("> {}", question);
        println!(
            "{}  (typed over {}ms)\n",
            reply.text,
            reply.typing_delay.as_millis()
        );
    }

    Ok(())
}
