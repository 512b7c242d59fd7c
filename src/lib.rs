pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::output::{render, OutputFormat};
pub use config::bodies_config::BodiesConfig;
pub use crate::core::calculator::{compute_ages, AgeCalculator};
pub use crate::core::report::{AgeReport, PlanetCard};
pub use domain::bodies::default_bodies;
pub use domain::model::{AgeQuery, AgeResult, BodyAge, OrbitalBody, DAYS_PER_EARTH_YEAR};
pub use domain::ports::{Clock, FixedClock, SystemClock};
pub use utils::error::{AgeError, Result};
