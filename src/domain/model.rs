use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Days in the mean year used for every Earth-year conversion.
pub const DAYS_PER_EARTH_YEAR: f64 = 365.25;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitalBody {
    pub key: String,
    pub name: String,
    pub orbital_period_days: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl OrbitalBody {
    pub fn new(key: impl Into<String>, name: impl Into<String>, orbital_period_days: f64) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            orbital_period_days,
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// 公轉一圈換算成地球年
    pub fn period_in_earth_years(&self) -> f64 {
        self.orbital_period_days / DAYS_PER_EARTH_YEAR
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeQuery {
    pub birth_date: NaiveDate,
    pub reference_date: NaiveDate,
}

impl AgeQuery {
    pub fn new(birth_date: NaiveDate, reference_date: NaiveDate) -> Self {
        Self {
            birth_date,
            reference_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyAge {
    pub body: OrbitalBody,
    pub age_in_orbital_years: f64,
    /// Share of the current orbit already completed, in `[0, 1)`.
    pub current_year_progress_fraction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeResult {
    pub age_in_days: u64,
    pub earth_years: f64,
    pub per_body: Vec<BodyAge>,
}
