use crate::error::{PnlError, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How a week of restaurant sales is spread across the seven days.
/// Weights are Monday-first and sum to 1.0.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub enum WeekdayProfile {
    #[schemars(description = "Evenly distributed across all seven days. Use when there is no known weekly pattern.")]
    Flat,

    #[schemars(
        description = "Typical full-service pattern: quiet Monday-Wednesday, building Thursday, peaking Friday and Saturday, easing Sunday."
    )]
    WeekendHeavy,

    #[schemars(
        description = "Business-district lunch pattern: strong Monday-Friday, weak Saturday and Sunday."
    )]
    LunchTrade,

    #[schemars(
        description = "Custom 7-value array of daily weights, Monday first, summing to 1.0."
    )]
    Custom(
        #[schemars(description = "Array of 7 decimal weights (must sum to 1.0)")] Vec<f64>,
    ),
}

pub fn get_profile_weights(profile: &WeekdayProfile) -> Result<Vec<f64>> {
    let weights = match profile {
        WeekdayProfile::Flat => vec![1.0 / 7.0; 7],

        WeekdayProfile::WeekendHeavy => {
            vec![0.08, 0.09, 0.11, 0.14, 0.21, 0.23, 0.14]
        }

        WeekdayProfile::LunchTrade => {
            vec![0.17, 0.18, 0.18, 0.18, 0.17, 0.06, 0.06]
        }

        WeekdayProfile::Custom(ref custom_weights) => {
            validate_custom_weights(custom_weights)?;
            custom_weights.clone()
        }
    };

    Ok(weights)
}

fn validate_custom_weights(weights: &[f64]) -> Result<()> {
    if weights.len() != 7 {
        return Err(PnlError::InvalidProfileWeights(format!(
            "Expected 7 weights, got {}",
            weights.len()
        )));
    }

    if weights.iter().any(|&w| w < 0.0) {
        return Err(PnlError::InvalidProfileWeights(
            "All weights must be non-negative".to_string(),
        ));
    }

    let sum: f64 = weights.iter().sum();
    if (sum - 1.0).abs() > 0.01 {
        return Err(PnlError::InvalidProfileWeights(format!(
            "Weights must sum to 1.0 (got {})",
            sum
        )));
    }

    Ok(())
}
