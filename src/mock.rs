//! Mock operational data for the labor and operations views.
//!
//! There is no POS feed behind the dashboard; daily sales, covers and labor
//! figures are generated from a weekly total spread across a weekday profile,
//! with normal noise for texture. Each complete week is re-normalized after
//! the noise pass so it still sums to the configured weekly total.

use crate::error::{PnlError, Result};
use crate::weekday::{get_profile_weights, WeekdayProfile};
use chrono::{Datelike, Days, NaiveDate};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MockDataConfig {
    #[schemars(description = "First day of the generated range")]
    pub start_date: NaiveDate,

    #[schemars(description = "Number of consecutive days to generate")]
    pub days: usize,

    #[schemars(description = "Target sales for one full week, in dollars")]
    pub weekly_sales: f64,

    #[schemars(description = "How sales are spread across the days of the week")]
    pub profile: WeekdayProfile,

    #[schemars(
        description = "Random variation applied per day. Range 0.0 (none) to 1.0; 0.05-0.10 looks like a real restaurant."
    )]
    pub noise_factor: f64,

    #[schemars(description = "Average spend per guest, used to derive cover counts")]
    pub average_check: f64,

    #[schemars(description = "Labor cost as a share of sales (e.g. 0.30)")]
    pub labor_pct: f64,

    #[schemars(description = "Blended hourly wage, used to derive scheduled hours")]
    pub average_wage: f64,

    #[serde(default)]
    #[schemars(description = "Optional RNG seed for reproducible data")]
    pub seed: Option<u64>,
}

impl Default for MockDataConfig {
    fn default() -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            days: 28,
            weekly_sales: 42_000.0,
            profile: WeekdayProfile::WeekendHeavy,
            noise_factor: 0.06,
            average_check: 38.0,
            labor_pct: 0.30,
            average_wage: 21.0,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySnapshot {
    pub date: NaiveDate,
    pub sales: f64,
    pub guest_count: u32,
    pub labor_hours: f64,
    pub labor_cost: f64,
}

pub struct MockDataGenerator {
    rng: StdRng,
}

impl MockDataGenerator {
    pub fn new(config: &MockDataConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    pub fn generate(&mut self, config: &MockDataConfig) -> Result<Vec<DailySnapshot>> {
        validate_config(config)?;

        let weights = get_profile_weights(&config.profile)?;
        let noise = config.noise_factor;

        let mut daily_sales = Vec::with_capacity(config.days);
        for offset in 0..config.days {
            let date = config
                .start_date
                .checked_add_days(Days::new(offset as u64))
                .ok_or_else(|| {
                    PnlError::InvalidMockConfig(format!(
                        "date range overflows past {}",
                        config.start_date
                    ))
                })?;

            let weekday_idx = date.weekday().num_days_from_monday() as usize;
            let mut sales = config.weekly_sales * weights[weekday_idx];
            if noise > 0.0 {
                let normal = Normal::new(0.0, noise).unwrap();
                sales *= 1.0 + normal.sample(&mut self.rng);
            }
            daily_sales.push((date, sales.max(0.0)));
        }

        // Re-normalize each complete week so noise shifts the shape of the
        // week, not its total. A trailing partial week keeps its raw values.
        for week in daily_sales.chunks_mut(7) {
            if week.len() < 7 {
                break;
            }
            let week_sum: f64 = week.iter().map(|(_, s)| s).sum();
            if week_sum > 0.0 {
                let correction = config.weekly_sales / week_sum;
                for (_, sales) in week.iter_mut() {
                    *sales *= correction;
                }
            }
        }

        let snapshots = daily_sales
            .into_iter()
            .map(|(date, sales)| {
                let labor_cost = sales * config.labor_pct;
                DailySnapshot {
                    date,
                    sales,
                    guest_count: (sales / config.average_check).round() as u32,
                    labor_hours: labor_cost / config.average_wage,
                    labor_cost,
                }
            })
            .collect();

        Ok(snapshots)
    }
}

/// Convenience wrapper building a generator and running it once.
pub fn generate_mock_data(config: &MockDataConfig) -> Result<Vec<DailySnapshot>> {
    MockDataGenerator::new(config).generate(config)
}

fn validate_config(config: &MockDataConfig) -> Result<()> {
    if !(0.0..=1.0).contains(&config.noise_factor) {
        return Err(PnlError::InvalidNoiseFactor(config.noise_factor));
    }
    if config.days == 0 {
        return Err(PnlError::InvalidMockConfig("days must be at least 1".to_string()));
    }
    if config.weekly_sales < 0.0 {
        return Err(PnlError::InvalidMockConfig(
            "weekly_sales must be non-negative".to_string(),
        ));
    }
    if config.average_check <= 0.0 {
        return Err(PnlError::InvalidMockConfig(
            "average_check must be positive".to_string(),
        ));
    }
    if !(0.0..=1.0).contains(&config.labor_pct) {
        return Err(PnlError::InvalidMockConfig(
            "labor_pct must be between 0.0 and 1.0".to_string(),
        ));
    }
    if config.average_wage <= 0.0 {
        return Err(PnlError::InvalidMockConfig(
            "average_wage must be positive".to_string(),
        ));
    }
    Ok(())
}
