use crate::models::{BmiBand, Dashboard, Record, WaterGoal, WeightPoint};

/// Height is not captured by the form, so BMI uses a fixed assumed height.
pub const ASSUMED_HEIGHT_M: f64 = 1.70;

/// 3 liters per day over the 7-day KPI window.
pub const WATER_GOAL_LITERS: f64 = 21.0;

/// The KPIs look at the final 7 records, the weight chart at the final 30.
const KPI_WINDOW: usize = 7;
const WEIGHT_SERIES_LEN: usize = 30;

/// How many records the history list shows, newest first.
pub const HISTORY_LEN: usize = 10;

pub fn bmi_for_weight(weight: f64) -> f64 {
    if weight <= 0.0 {
        return 0.0;
    }
    weight / (ASSUMED_HEIGHT_M * ASSUMED_HEIGHT_M)
}

/// Strict `<` on every boundary: 18.5 is normal, 24.9 is overweight and
/// 29.9 is obese.
pub fn classify_bmi(bmi: f64) -> BmiBand {
    if bmi < 18.5 {
        BmiBand::Underweight
    } else if bmi < 24.9 {
        BmiBand::Normal
    } else if bmi < 29.9 {
        BmiBand::Overweight
    } else {
        BmiBand::Obese
    }
}

/// Derives the dashboard snapshot from records sorted ascending by date.
///
/// An empty history yields `None`; the page then leaves every KPI display
/// unset instead of treating it as an error.
pub fn build_dashboard(records: &[Record]) -> Option<Dashboard> {
    let latest = records.last()?;

    let bmi = bmi_for_weight(latest.weight);
    let band = classify_bmi(bmi);

    let last7 = &records[records.len().saturating_sub(KPI_WINDOW)..];
    let total_water_7: f64 = last7.iter().map(|r| r.water).sum();
    let avg_sleep_7 = last7.iter().map(|r| r.sleep).sum::<f64>() / last7.len() as f64;

    let achieved_pct = (total_water_7 / WATER_GOAL_LITERS * 100.0).min(100.0);

    let weight_series = records[records.len().saturating_sub(WEIGHT_SERIES_LEN)..]
        .iter()
        .map(|r| WeightPoint {
            date: r.date.clone(),
            weight: r.weight,
        })
        .collect();

    Some(Dashboard {
        bmi,
        bmi_band: band,
        bmi_color: band.color(),
        avg_sleep_7,
        total_water_7,
        water_goal: WaterGoal {
            goal_liters: WATER_GOAL_LITERS,
            achieved_pct,
            remaining_pct: 100.0 - achieved_pct,
        },
        weight_series,
    })
}

/// The `HISTORY_LEN` most recent records, newest first.
pub fn recent_history(records: &[Record]) -> Vec<Record> {
    records.iter().rev().take(HISTORY_LEN).cloned().collect()
}
