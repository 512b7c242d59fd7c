use clap::Parser;
use planet_ages::adapters::output::write_report;
use planet_ages::utils::error::ErrorSeverity;
use planet_ages::utils::{logger, validation::Validate};
use planet_ages::{render, AgeCalculator, AgeError, AgeReport, CliConfig};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting planet-ages");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let output = match run(&config) {
        Ok(output) => output,
        Err(e) => exit_with(e),
    };

    match &config.output {
        Some(path) => {
            if let Err(e) = write_report(path, &output) {
                exit_with(e);
            }
            tracing::info!("📁 Report saved to: {}", path);
        }
        None => print!("{}", output),
    }
}

fn run(config: &CliConfig) -> planet_ages::Result<String> {
    let format = config.output_format()?;
    let bodies = config.load_bodies()?;
    tracing::info!("🪐 Using a table of {} bodies", bodies.len());

    let calculator = AgeCalculator::new(bodies)?;
    let result = calculator.compute_str(&config.birth_date, config.today.as_deref())?;
    tracing::info!(
        "✅ {} days old, {:.2} Earth years",
        result.age_in_days,
        result.earth_years
    );

    let report = AgeReport::new(&config.name, &result);
    render(&report, format)
}

fn exit_with(e: AgeError) -> ! {
    tracing::error!(
        "❌ Age calculation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}
