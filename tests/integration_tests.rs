use chrono::NaiveDate;
use restaurant_pnl_core::*;
use std::fs::File;
use std::io::Write;

fn taqueria_statement() -> PnlStatement {
    use LineItemType::*;

    PnlStatement {
        restaurant_name: "Casa Verde Taqueria".to_string(),
        period_label: "Week 12".to_string(),
        prior_label: "Week 11".to_string(),
        items: vec![
            LineItem::new("revenue", "Revenue", Revenue, 41_200.0, 38_900.0).with_children(vec![
                LineItem::new("dine-in", "Dine-In Sales", Revenue, 28_400.0, 27_100.0),
                LineItem::new("takeout", "Takeout & Delivery", Revenue, 12_800.0, 11_800.0),
            ]),
            LineItem::new("cogs", "Cost of Goods Sold", Expense, 13_600.0, 12_100.0)
                .with_children(vec![
                    LineItem::new("proteins", "Proteins", Expense, 7_900.0, 6_400.0),
                    LineItem::new("produce", "Produce", Expense, 3_200.0, 3_300.0),
                    LineItem::new("dry-goods", "Dry Goods", Expense, 2_500.0, 2_400.0),
                ]),
            LineItem::new("labor", "Labor", Expense, 12_900.0, 12_700.0).with_children(vec![
                LineItem::new("boh-labor", "Kitchen Labor", Expense, 7_600.0, 7_500.0),
                LineItem::new("foh-labor", "Counter Labor", Expense, 5_300.0, 5_200.0),
            ]),
            LineItem::new("opex", "Operating Expenses", Expense, 6_300.0, 6_250.0),
        ],
    }
}

#[test]
fn test_full_dashboard_flow() {
    let statement = taqueria_statement();
    statement.validate().unwrap();

    let analysis = analyze_statement(&statement).unwrap();
    // 41,200 - 13,600 - 12,900 - 6,300 (leaves only, parents not double counted)
    assert!((analysis.net_profit - 8_400.0).abs() < 0.01);

    // Proteins jumped $1,500 on an $8,400 profit: 17.9% impact, 23.4% move.
    assert_eq!(analysis.by_id["proteins"].level, VarianceLevel::Attention);

    // Drive the view the way the page does: filter dropdown + search box.
    let mut state = DashboardState::new();
    state.set_variance_filter(VarianceFilter::Level(VarianceLevel::Attention));
    let visible = state.visible_items(&statement);
    assert!(visible.iter().any(|item| item.id == "cogs"
        && item.children.iter().any(|c| c.id == "proteins")));

    state.set_variance_filter(VarianceFilter::All);
    state.set_search_term("labor");
    let visible = state.visible_items(&statement);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "labor");
    assert_eq!(visible[0].children.len(), 2);
}

#[test]
fn test_report_export_writes_csv() {
    let statement = fixtures::sample_statement();
    let report = PnlReport::new(&statement);
    let csv = report.to_csv();

    let path = std::env::temp_dir().join(format!("pnl-report-{}.csv", std::process::id()));
    let mut file = File::create(&path).unwrap();
    file.write_all(csv.as_bytes()).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written.lines().count(), statement.total_items() + 1);
    assert!(written.contains("kitchen-labor"));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_expense_decreases_are_never_flagged_unfavorably() {
    // Sweep a grid of shrinking expenses: the classifier must never call a
    // favorable move critical or attention.
    let net_profits = [100.0, 5_000.0, 17_722.37, 1_000_000.0];
    for prior in [10.0, 1_500.0, 50_556.0, 400_000.0] {
        for fraction in [0.0, 0.25, 0.5, 0.9, 0.999] {
            let current = prior * fraction;
            let item = LineItem::new("e", "Expense", LineItemType::Expense, current, prior);
            for net_profit in net_profits {
                let info = analyze_variance(&item, net_profit);
                assert_ne!(info.level, VarianceLevel::Critical, "prior={} current={}", prior, current);
                assert_ne!(info.level, VarianceLevel::Attention, "prior={} current={}", prior, current);
            }
        }
    }
}

#[test]
fn test_zero_prior_always_reports_zero_pct() {
    for current in [-10_000.0, -1.0, 0.0, 4.53, 3_000.0, 1_000_000.0] {
        let item = LineItem::new("n", "New Item", LineItemType::Revenue, current, 0.0);
        let info = analyze_variance(&item, 17_722.37);
        assert_eq!(info.variance_pct, 0.0, "current={}", current);
    }
}

#[test]
fn test_counter_buckets_partition_the_tree() {
    let statement = fixtures::sample_statement();
    let net_profit = statement.net_profit_current();
    let counts = count_flagged_items(&statement.items, net_profit);
    assert_eq!(counts.total(), statement.total_items());
    assert_eq!(
        counts.flagged() + counts.normal,
        counts.critical + counts.attention + counts.favorable + counts.normal
    );
}

#[test]
fn test_search_filter_is_idempotent_on_fixture() {
    let statement = fixtures::sample_statement();
    let once = filter_items_by_search(&statement.items, "cost");
    let twice = filter_items_by_search(&once, "cost");
    assert_eq!(
        serde_json::to_string(&once).unwrap(),
        serde_json::to_string(&twice).unwrap()
    );
}

#[test]
fn test_empty_search_returns_structurally_identical_tree() {
    let statement = fixtures::sample_statement();
    let filtered = filter_items_by_search(&statement.items, "");
    assert_eq!(
        serde_json::to_string(&statement.items).unwrap(),
        serde_json::to_string(&filtered).unwrap()
    );
}

#[test]
fn test_assistant_conversation_over_live_numbers() {
    let statement = fixtures::sample_statement();
    let assistant = ScriptedAssistant::from_statement(&statement);

    let reply = assistant.respond("hello");
    assert!(reply.text.contains("Harbor & Vine"));
    assert_eq!(reply.typing_delay, typing_delay(&reply.text));

    let reply = assistant.respond("what's wrong this month?");
    assert!(reply.text.contains("Kitchen Labor"));

    // The delay parameter is advisory only: the answer for a given question
    // is identical however long the panel pretends to type.
    let again = assistant.respond("what's wrong this month?");
    assert_eq!(reply.text, again.text);
}

#[test]
fn test_mock_month_feeds_labor_summary() {
    let config = MockDataConfig {
        start_date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
        days: 28,
        weekly_sales: 42_000.0,
        profile: WeekdayProfile::WeekendHeavy,
        noise_factor: 0.08,
        average_check: 38.0,
        labor_pct: 0.30,
        average_wage: 21.0,
        seed: Some(2024),
    };
    let data = generate_mock_data(&config).unwrap();
    assert_eq!(data.len(), 28);

    let total_sales: f64 = data.iter().map(|d| d.sales).sum();
    assert!((total_sales - 4.0 * 42_000.0).abs() < 0.1);

    let total_labor: f64 = data.iter().map(|d| d.labor_cost).sum();
    assert!((total_labor / total_sales - 0.30).abs() < 1e-9);

    for day in &data {
        assert!(day.sales >= 0.0);
        assert!(day.labor_hours >= 0.0);
    }
}

#[test]
fn test_prefs_survive_a_session() {
    let path = std::env::temp_dir().join(format!("pnl-session-prefs-{}.json", std::process::id()));

    let mut state = DashboardState::new();
    state.dismiss_banner();

    let prefs = DashboardPrefs {
        banner_dismissed: state.banner_dismissed,
        active_task: Some(serde_json::json!({"view": "labor"})),
    };
    prefs.save(&path).unwrap();

    let restored = DashboardPrefs::load(&path).unwrap();
    assert!(restored.banner_dismissed);
    assert_eq!(restored, prefs);

    let _ = std::fs::remove_file(&path);
}
