use crate::domain::model::{AgeResult, BodyAge};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DISPLAY_NAME: &str = "User";

/// Display-ready view of an [`AgeResult`], formatted in one fixed locale
/// (`.` decimal separator, `,` thousands separator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeReport {
    pub display_name: String,
    pub age_in_days: u64,
    pub earth_age: String,
    pub cards: Vec<PlanetCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetCard {
    pub key: String,
    pub name: String,
    pub color: Option<String>,
    pub age: String,
    pub age_label: String,
    pub period_days: String,
    pub period_earth_years: String,
    pub progress_percent: u32,
}

impl AgeReport {
    pub fn new(display_name: &str, result: &AgeResult) -> Self {
        let name = display_name.trim();
        Self {
            display_name: if name.is_empty() {
                DEFAULT_DISPLAY_NAME.to_string()
            } else {
                name.to_string()
            },
            age_in_days: result.age_in_days,
            earth_age: format_fixed2(result.earth_years),
            cards: result.per_body.iter().map(PlanetCard::from_body_age).collect(),
        }
    }
}

impl PlanetCard {
    pub fn from_body_age(entry: &BodyAge) -> Self {
        let body = &entry.body;
        Self {
            key: body.key.clone(),
            name: body.name.clone(),
            color: body.color.clone(),
            age: format_fixed2(entry.age_in_orbital_years),
            age_label: format!("age on {}", body.name.to_lowercase()),
            period_days: format_grouped(body.orbital_period_days),
            period_earth_years: format_fixed2(body.period_in_earth_years()),
            progress_percent: progress_percent(entry.current_year_progress_fraction),
        }
    }
}

pub fn format_fixed2(value: f64) -> String {
    format!("{:.2}", value)
}

/// Rounds half away from zero, like the progress bar of the web page.
pub fn progress_percent(fraction: f64) -> u32 {
    (fraction * 100.0).round().max(0.0) as u32
}

/// 千分位格式，最多保留三位小數 (4333 -> "4,333", 365.25 -> "365.25")
pub fn format_grouped(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let fixed = fixed.trim_end_matches('0').trim_end_matches('.');
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed, None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    if value < 0.0 {
        grouped.push('-');
    }
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculator::compute_ages;
    use crate::domain::bodies::default_bodies;
    use crate::domain::model::AgeQuery;
    use chrono::NaiveDate;

    fn sample_result() -> AgeResult {
        let query = AgeQuery::new(
            NaiveDate::from_ymd_opt(2000, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        );
        compute_ages(&query, &default_bodies()).unwrap()
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(88.0), "88");
        assert_eq!(format_grouped(365.25), "365.25");
        assert_eq!(format_grouped(4333.0), "4,333");
        assert_eq!(format_grouped(60190.0), "60,190");
        assert_eq!(format_grouped(1234567.5), "1,234,567.5");
        assert_eq!(format_grouped(0.0), "0");
    }

    #[test]
    fn test_progress_percent_rounding() {
        assert_eq!(progress_percent(0.0), 0);
        assert_eq!(progress_percent(0.004), 0);
        assert_eq!(progress_percent(0.125), 13);
        assert_eq!(progress_percent(0.996), 100);
    }

    #[test]
    fn test_report_cards_follow_result() {
        let report = AgeReport::new("  Ana ", &sample_result());
        assert_eq!(report.display_name, "Ana");
        assert_eq!(report.age_in_days, 8766);
        assert_eq!(report.earth_age, "24.00");
        assert_eq!(report.cards.len(), 8);

        let jupiter = report.cards.iter().find(|c| c.key == "jupiter").unwrap();
        assert_eq!(jupiter.age, "2.02");
        assert_eq!(jupiter.age_label, "age on jupiter");
        assert_eq!(jupiter.period_days, "4,333");
        assert_eq!(jupiter.period_earth_years, "11.86");
        assert_eq!(jupiter.progress_percent, 2);
        assert_eq!(jupiter.color.as_deref(), Some("#f97316"));

        let earth = report.cards.iter().find(|c| c.key == "earth").unwrap();
        assert_eq!(earth.period_days, "365.25");
        assert_eq!(earth.period_earth_years, "1.00");
        assert_eq!(earth.progress_percent, 0);
    }

    #[test]
    fn test_blank_name_falls_back() {
        let report = AgeReport::new("   ", &sample_result());
        assert_eq!(report.display_name, DEFAULT_DISPLAY_NAME);
    }
}
