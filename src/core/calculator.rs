use crate::core::dates::{parse_date, parse_optional_date, whole_days_between};
use crate::domain::bodies::default_bodies;
use crate::domain::model::{AgeQuery, AgeResult, BodyAge, OrbitalBody, DAYS_PER_EARTH_YEAR};
use crate::domain::ports::{Clock, SystemClock};
use crate::utils::error::{AgeError, Result};
use crate::utils::validation::validate_orbital_period;
use chrono::NaiveDate;

/// Computes the age for `query` on every body, preserving the order of `bodies`.
///
/// Pure: no clock, no I/O. The body table is checked before anything is
/// computed, so a bad entry never yields a partial result.
pub fn compute_ages(query: &AgeQuery, bodies: &[OrbitalBody]) -> Result<AgeResult> {
    validate_bodies(bodies)?;

    if query.birth_date > query.reference_date {
        return Err(AgeError::FutureDate {
            birth_date: query.birth_date,
            reference_date: query.reference_date,
        });
    }

    let age_in_days = whole_days_between(query.birth_date, query.reference_date).unsigned_abs();
    let days = age_in_days as f64;

    let per_body = bodies
        .iter()
        .map(|body| {
            let period = body.orbital_period_days;
            BodyAge {
                body: body.clone(),
                age_in_orbital_years: days / period,
                current_year_progress_fraction: (days % period) / period,
            }
        })
        .collect();

    Ok(AgeResult {
        age_in_days,
        earth_years: days / DAYS_PER_EARTH_YEAR,
        per_body,
    })
}

pub fn validate_bodies(bodies: &[OrbitalBody]) -> Result<()> {
    for body in bodies {
        if body.name.trim().is_empty() {
            return Err(AgeError::InvalidBodyData {
                body: body.key.clone(),
                reason: "display name cannot be empty".to_string(),
            });
        }
        validate_orbital_period(&body.key, body.orbital_period_days)?;
    }
    Ok(())
}

/// 綁定星體表與時鐘的計算器
pub struct AgeCalculator<C: Clock = SystemClock> {
    bodies: Vec<OrbitalBody>,
    clock: C,
}

impl AgeCalculator<SystemClock> {
    pub fn new(bodies: Vec<OrbitalBody>) -> Result<Self> {
        validate_bodies(&bodies)?;
        tracing::debug!("Age calculator ready with {} bodies", bodies.len());
        Ok(Self {
            bodies,
            clock: SystemClock,
        })
    }

    pub fn with_default_bodies() -> Self {
        Self {
            bodies: default_bodies(),
            clock: SystemClock,
        }
    }
}

impl<C: Clock> AgeCalculator<C> {
    pub fn with_clock<D: Clock>(self, clock: D) -> AgeCalculator<D> {
        AgeCalculator {
            bodies: self.bodies,
            clock,
        }
    }

    pub fn bodies(&self) -> &[OrbitalBody] {
        &self.bodies
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn compute(&self, birth_date: NaiveDate, reference_date: NaiveDate) -> Result<AgeResult> {
        compute_ages(&AgeQuery::new(birth_date, reference_date), &self.bodies)
    }

    pub fn compute_today(&self, birth_date: NaiveDate) -> Result<AgeResult> {
        self.compute(birth_date, self.clock.today())
    }

    /// Parses both dates, falling back to the clock when no reference is given.
    pub fn compute_str(&self, birth_date: &str, reference_date: Option<&str>) -> Result<AgeResult> {
        let birth = parse_date("birth_date", birth_date)?;
        let reference = match parse_optional_date("reference_date", reference_date)? {
            Some(date) => date,
            None => self.clock.today(),
        };
        tracing::debug!("Computing ages for {} as of {}", birth, reference);
        self.compute(birth, reference)
    }
}
