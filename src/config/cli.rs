use crate::adapters::output::OutputFormat;
use crate::config::bodies_config::BodiesConfig;
use crate::domain::bodies::default_bodies;
use crate::domain::model::OrbitalBody;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_one_of, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "planet-ages")]
#[command(about = "How old are you on the other planets of the solar system?")]
pub struct CliConfig {
    /// Birth date, YYYY-MM-DD
    #[arg(short, long)]
    pub birth_date: String,

    /// Reference date, YYYY-MM-DD (defaults to today, UTC)
    #[arg(long)]
    pub today: Option<String>,

    /// Name shown on the report
    #[arg(short, long, default_value = "")]
    pub name: String,

    /// TOML file with a custom [[bodies]] table
    #[arg(long)]
    pub bodies: Option<String>,

    /// Output format: text, json or csv
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn output_format(&self) -> Result<OutputFormat> {
        self.format.parse()
    }

    /// 自訂星體表優先，否則使用預設八大行星
    pub fn load_bodies(&self) -> Result<Vec<OrbitalBody>> {
        match &self.bodies {
            Some(path) => {
                tracing::debug!("Loading body table from {}", path);
                BodiesConfig::from_file(path)?.into_bodies()
            }
            None => Ok(default_bodies()),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("birth_date", &self.birth_date)?;
        validate_one_of("format", &self.format, &OutputFormat::NAMES)?;
        if let Some(path) = &self.bodies {
            validate_path("bodies", path)?;
        }
        if let Some(path) = &self.output {
            validate_path("output", path)?;
        }
        if let Some(today) = &self.today {
            validate_non_empty_string("today", today)?;
        }
        Ok(())
    }
}
