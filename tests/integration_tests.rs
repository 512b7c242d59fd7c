use anyhow::Result;
use chrono::NaiveDate;
use planet_ages::{
    compute_ages, default_bodies, render, AgeCalculator, AgeError, AgeQuery, AgeReport,
    BodiesConfig, FixedClock, OutputFormat,
};
use std::thread;
use tempfile::TempDir;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_end_to_end_default_table() -> Result<()> {
    let calculator = AgeCalculator::with_default_bodies().with_clock(FixedClock(ymd(2024, 3, 1)));
    let result = calculator.compute_str("2000-03-01", None)?;

    assert_eq!(result.age_in_days, 8766);
    assert!((result.earth_years - 24.0).abs() < 1e-9);

    let report = AgeReport::new("", &result);
    assert_eq!(report.display_name, "User");
    let names: Vec<&str> = report.cards.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune"]
    );

    let mercury = &report.cards[0];
    // 8766 / 88 = 99.61..., 8766 % 88 = 54 -> 61%
    assert_eq!(mercury.age, "99.61");
    assert_eq!(mercury.progress_percent, 61);
    Ok(())
}

#[test]
fn test_custom_table_from_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("dwarfs.toml");
    std::fs::write(
        &path,
        r##"
name = "dwarf planets"

[[bodies]]
key = "ceres"
name = "Ceres"
orbital_period_days = 1680
color = "#9ca3af"

[[bodies]]
key = "pluto"
name = "Pluto"
orbital_period_days = 90560
"##,
    )?;

    let bodies = BodiesConfig::from_file(&path)?.into_bodies()?;
    let calculator = AgeCalculator::new(bodies)?.with_clock(FixedClock(ymd(2024, 3, 1)));
    let result = calculator.compute(ymd(2000, 3, 1), ymd(2024, 3, 1))?;

    assert_eq!(result.per_body.len(), 2);
    assert_eq!(result.per_body[0].body.key, "ceres");
    // 8766 = 5 * 1680 + 366
    assert!((result.per_body[0].age_in_orbital_years - 8766.0 / 1680.0).abs() < 1e-12);
    assert!((result.per_body[0].current_year_progress_fraction - 366.0 / 1680.0).abs() < 1e-12);

    let csv = render(&AgeReport::new("Ana", &result), OutputFormat::Csv)?;
    assert!(csv.contains("pluto,Pluto,0.10,\"90,560\",247.94,10"));
    Ok(())
}

#[test]
fn test_missing_bodies_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = BodiesConfig::from_file(temp_dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, AgeError::IoError(_)));
}

#[test]
fn test_errors_are_distinct() {
    let calculator = AgeCalculator::with_default_bodies().with_clock(FixedClock(ymd(2024, 3, 1)));

    assert!(matches!(
        calculator.compute_str("not a date", None),
        Err(AgeError::InvalidDate { .. })
    ));
    assert!(matches!(
        calculator.compute_str("2024-03-02", Some("2024-03-01")),
        Err(AgeError::FutureDate { .. })
    ));

    let mut bodies = default_bodies();
    bodies[3].orbital_period_days = -687.0;
    assert!(matches!(
        AgeCalculator::new(bodies),
        Err(AgeError::InvalidBodyData { .. })
    ));
}

#[test]
fn test_concurrent_calls_agree() {
    let bodies = default_bodies();
    let query = AgeQuery::new(ymd(1969, 7, 20), ymd(2024, 3, 1));
    let expected = compute_ages(&query, &bodies).unwrap();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| compute_ages(&query, &bodies).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_json_output_round_trips_report() -> Result<()> {
    let result = compute_ages(
        &AgeQuery::new(ymd(1990, 5, 17), ymd(2024, 3, 1)),
        &default_bodies(),
    )?;
    let report = AgeReport::new("Bia", &result);
    let json = render(&report, OutputFormat::Json)?;
    let parsed: AgeReport = serde_json::from_str(&json)?;
    assert_eq!(parsed, report);
    Ok(())
}
