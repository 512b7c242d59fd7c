use crate::core::report::AgeReport;
use crate::utils::error::{AgeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::Path;
use std::str::FromStr;

const BAR_WIDTH: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["text", "json", "csv"];
}

impl FromStr for OutputFormat {
    type Err = AgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(AgeError::InvalidConfigValueError {
                field: "format".to_string(),
                value: s.to_string(),
                reason: format!("Unsupported format. Valid formats: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

pub fn render(report: &AgeReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Csv => render_csv(report),
    }
}

pub fn render_text(report: &AgeReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", report.display_name);
    let _ = writeln!(
        out,
        "Earth age: {} years ({} days)",
        report.earth_age, report.age_in_days
    );

    for card in &report.cards {
        let filled = card.progress_percent.min(100) * BAR_WIDTH / 100;
        let bar: String = (0..BAR_WIDTH)
            .map(|i| if i < filled { '#' } else { '.' })
            .collect();

        let _ = writeln!(out);
        let _ = writeln!(out, "{}: {} ({})", card.name, card.age, card.age_label);
        let _ = writeln!(
            out,
            "  Orbital period: {} Earth days ({} Earth years)",
            card.period_days, card.period_earth_years
        );
        let _ = writeln!(
            out,
            "  [{}] {}% of the current year",
            bar, card.progress_percent
        );
    }
    out
}

pub fn render_csv(report: &AgeReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "key",
        "name",
        "age",
        "period_days",
        "period_earth_years",
        "progress_percent",
    ])?;
    for card in &report.cards {
        writer.write_record([
            card.key.as_str(),
            card.name.as_str(),
            card.age.as_str(),
            card.period_days.as_str(),
            card.period_earth_years.as_str(),
            card.progress_percent.to_string().as_str(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| AgeError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| AgeError::ConfigError {
        message: format!("CSV output is not UTF-8: {}", e),
    })
}

/// 將報表寫入檔案
pub fn write_report<P: AsRef<Path>>(path: P, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(AgeError::IoError)
}
