use serde::{Deserialize, Serialize};

/// One day's health entry. `date` is the unique key; saving a second entry
/// for the same date replaces the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub date: String,
    pub weight: f64,
    pub water: f64,
    pub sleep: f64,
}

/// Raw form input as submitted: four strings, nothing parsed yet.
#[derive(Debug, Clone, Deserialize)]
pub struct EntryForm {
    pub date: String,
    pub weight: String,
    pub water: String,
    pub sleep: String,
}

/// Checks raw input and turns it into a [`Record`].
///
/// Succeeds only if the date is non-empty and weight/water/sleep all parse
/// as finite numbers. The message is user-facing; nothing is persisted on
/// failure.
pub fn validate_entry(form: &EntryForm) -> Result<Record, String> {
    let date = form.date.trim();
    if date.is_empty() {
        return Err("please pick a date".to_string());
    }

    let weight = parse_finite("weight", &form.weight)?;
    let water = parse_finite("water", &form.water)?;
    let sleep = parse_finite("sleep", &form.sleep)?;

    Ok(Record {
        date: date.to_string(),
        weight,
        water,
        sleep,
    })
}

fn parse_finite(field: &str, raw: &str) -> Result<f64, String> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(format!("{field} must be a number")),
    }
}

/// BMI classification bands. Comparisons are strict `<`, so 24.9 itself
/// counts as overweight and 29.9 as obese.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiBand {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiBand {
    /// Display color used by the dashboard KPI card.
    pub fn color(self) -> &'static str {
        match self {
            BmiBand::Underweight => "#f39c12",
            BmiBand::Normal => "#2ecc71",
            BmiBand::Overweight => "#e67e22",
            BmiBand::Obese => "#e74c3c",
        }
    }
}

/// One point of the weight line chart.
#[derive(Debug, Clone, Serialize)]
pub struct WeightPoint {
    pub date: String,
    pub weight: f64,
}

/// Achieved/remaining slices of the 7-day water goal. Values stay at full
/// precision here; rounding to one decimal happens at display time only.
#[derive(Debug, Clone, Serialize)]
pub struct WaterGoal {
    pub goal_liters: f64,
    pub achieved_pct: f64,
    pub remaining_pct: f64,
}

/// Everything the dashboard view needs, derived from the sorted records.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub bmi: f64,
    pub bmi_band: BmiBand,
    pub bmi_color: &'static str,
    pub avg_sleep_7: f64,
    pub total_water_7: f64,
    pub water_goal: WaterGoal,
    pub weight_series: Vec<WeightPoint>,
}
