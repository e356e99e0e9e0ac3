//! End-to-end tests of the price and validate commands.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use approx::assert_relative_eq;
use chrono::NaiveDate;
use pricer_core::types::Currency;
use service_cli::commands::{price, validate};
use service_cli::commands::price::PriceOptions;
use service_cli::writer::OutputFormat;
use service_cli::{CliError, RiskConfig};
use tempfile::TempDir;

const HEADER: &str =
    "TradeID,Underlying,Notional,NotionalCurrency,Spot,Strike,Vol,RateDomestic,RateForeign,Expiry,OptionType";

fn write_book(dir: &TempDir, name: &str, rows: &[&str]) -> PathBuf {
    let path = dir.path().join(name);
    let mut content = String::from(HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content.push('\n');
    fs::write(&path, content).unwrap();
    path
}

fn options(input: &Path, format: OutputFormat) -> PriceOptions {
    PriceOptions {
        format,
        valuation_date: NaiveDate::from_ymd_opt(2024, 6, 28),
        ..PriceOptions::new(input)
    }
}

#[test]
fn test_price_reference_book_writes_csv() {
    let dir = TempDir::new().unwrap();
    let input = write_book(
        &dir,
        "book.csv",
        &[
            "FX001,USD/JPY,1,USD,100,100,0.20,0.0,0.0,1.0,CALL",
            "FX002,USD/JPY,1,USD,100,100,0.20,0.0,0.0,1.0,PUT",
        ],
    );

    let result = price::run(&options(&input, OutputFormat::Csv), &RiskConfig::default()).unwrap();

    assert_eq!(result.summary.trade_count, 2);
    assert_relative_eq!(result.summary.total_present_value, 2.0 * 7.9656, epsilon = 1e-3);
    // 0.53983 - 0.46017
    assert_relative_eq!(result.summary.total_delta, 0.07966, epsilon = 1e-4);

    let trades = fs::read_to_string(dir.path().join("book_Trade_Results.csv")).unwrap();
    assert_eq!(trades.lines().count(), 3);
    assert!(trades.lines().next().unwrap().starts_with("TradeID,CurrencyPair,OptionType"));
    assert!(trades.contains("FX001,USD/JPY,CALL"));

    let summary = fs::read_to_string(dir.path().join("book_Portfolio_Summary.csv")).unwrap();
    assert!(summary.contains("Total Trades,2"));
    assert!(summary.contains("Total PV (USD),15.93"));
    assert!(summary.contains("Failed Trades,0"));
    assert!(summary.contains("Valuation Date,2024-06-28"));
}

#[test]
fn test_jpy_notional_reported_in_usd() {
    let dir = TempDir::new().unwrap();
    // Zero vol: PV = 15 JPY per unit, converted at the trade's own spot of 150
    let input = write_book(&dir, "jpy.csv", &["FX001,USD/JPY,1000000,JPY,150,135,0.0,0.0,0.0,1.0,CALL"]);

    let result = price::run(&options(&input, OutputFormat::Table), &RiskConfig::default()).unwrap();
    assert_relative_eq!(result.converted[0].priced.present_value, 15_000_000.0, max_relative = 1e-12);
    assert_relative_eq!(result.summary.total_present_value, 100_000.0, max_relative = 1e-12);
}

#[test]
fn test_reporting_currency_override() {
    let dir = TempDir::new().unwrap();
    let input = write_book(&dir, "book.csv", &["FX001,USD/JPY,1000,USD,150,100,0.0,0.0,0.0,1.0,CALL"]);

    let opts = PriceOptions {
        reporting_currency: Some(Currency::JPY),
        ..options(&input, OutputFormat::Table)
    };
    let result = price::run(&opts, &RiskConfig::default()).unwrap();
    assert_eq!(result.summary.reporting_currency, Currency::JPY);
    assert_relative_eq!(result.summary.total_present_value, 50_000.0 * 150.0, max_relative = 1e-12);
}

#[test]
fn test_json_output() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("reports");
    let input = write_book(&dir, "book.csv", &["FX001,EUR/USD,1000000,USD,1.10,1.12,0.08,0.05,0.03,1.0,PUT"]);

    let opts = PriceOptions {
        output_dir: Some(out.clone()),
        ..options(&input, OutputFormat::Json)
    };
    price::run(&opts, &RiskConfig::default()).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("book_results.json")).unwrap()).unwrap();
    assert_eq!(json["summary"]["trade_count"], 1);
    assert_eq!(json["summary"]["reporting_currency"], "USD");
    assert_eq!(json["trades"].as_array().map(Vec::len), Some(1));
    assert_eq!(json["failures"].as_array().map(Vec::len), Some(0));
}

#[test]
fn test_validation_errors_abort_run() {
    let dir = TempDir::new().unwrap();
    let input = write_book(
        &dir,
        "bad.csv",
        &[
            "FX001,USD/JPY,1000000,USD,150,152,0.10,0.001,0.05,0.5,CALL",
            "FX002,EUR/JPY,1000000,USD,150,152,0.10,0.001,0.05,0.5,CALL",
            "FX003,USD/JPY,1000000,USD,150,152,0.10,0.001,0.05,0.0,PUT",
        ],
    );

    match price::run(&options(&input, OutputFormat::Csv), &RiskConfig::default()) {
        Err(CliError::Validation(errors)) => {
            assert_eq!(errors.len(), 2);
            assert!(errors[0].starts_with("Trade FX002:"));
            assert!(errors[1].starts_with("Trade FX003:"));
        }
        other => panic!("Expected validation failure, got {:?}", other.map(|r| r.summary)),
    }
    assert!(!dir.path().join("bad_Trade_Results.csv").exists());
}

#[test]
fn test_validate_command() {
    let dir = TempDir::new().unwrap();
    let input = write_book(
        &dir,
        "ok.csv",
        &[
            "FX001,USD/JPY,1000000,USD,150,152,0.10,0.001,0.05,0.5,CALL",
            "FX002,GBP/USD,-250000,USD,1.27,1.25,0.09,0.05,0.045,0.25,P",
        ],
    );
    // "P" is not an accepted option type in files
    assert!(matches!(
        validate::run(&input, &RiskConfig::default()),
        Err(CliError::Validation(_))
    ));

    let input = write_book(&dir, "ok2.csv", &["FX001,USD/JPY,1000000,USD,150,152,0.10,0.001,0.05,0.5,CALL"]);
    assert_eq!(validate::run(&input, &RiskConfig::default()).unwrap(), 1);
}

#[test]
fn test_missing_input_file() {
    let dir = TempDir::new().unwrap();
    let result = price::run(
        &options(&dir.path().join("absent.csv"), OutputFormat::Csv),
        &RiskConfig::default(),
    );
    assert!(matches!(result, Err(CliError::Load(_))));
}

#[test]
fn test_strict_mode_fails_on_conversion_failure() {
    let dir = TempDir::new().unwrap();
    // JPY notional on a EUR/USD trade has no USD/JPY spot to convert with
    let input = write_book(&dir, "mixed.csv", &["FX001,EUR/USD,1000000,JPY,1.10,1.12,0.08,0.05,0.03,1.0,CALL"]);

    let lenient = price::run(&options(&input, OutputFormat::Table), &RiskConfig::default()).unwrap();
    assert_eq!(lenient.summary.failed_trade_count, 1);
    assert_eq!(lenient.summary.trade_count, 0);

    let strict = PriceOptions {
        strict: true,
        ..options(&input, OutputFormat::Table)
    };
    assert!(matches!(
        price::run(&strict, &RiskConfig::default()),
        Err(CliError::FailedTrades(1))
    ));
}

#[test]
fn test_empty_book() {
    let dir = TempDir::new().unwrap();
    let input = write_book(&dir, "empty.csv", &[]);
    let result = price::run(&options(&input, OutputFormat::Csv), &RiskConfig::default()).unwrap();
    assert_eq!(result.summary.trade_count, 0);
    assert_eq!(result.summary.total_present_value, 0.0);
}

#[test]
fn test_csv_output_lists_failed_trades() {
    let dir = TempDir::new().unwrap();
    let input = write_book(
        &dir,
        "mixed.csv",
        &[
            "FX001,USD/JPY,1,USD,100,100,0.20,0.0,0.0,1.0,CALL",
            "FX002,EUR/USD,1000000,JPY,1.10,1.12,0.08,0.05,0.03,1.0,CALL",
        ],
    );

    let result = price::run(&options(&input, OutputFormat::Csv), &RiskConfig::default()).unwrap();
    assert_eq!(result.summary.failed_trade_count, 1);

    let failures = fs::read_to_string(dir.path().join("mixed_Failures.csv")).unwrap();
    let lines: Vec<&str> = failures.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "TradeID,Reason");
    assert!(lines[1].starts_with("FX002,"));
    assert!(lines[1].contains("conversion failed"));
}

fn fx_risk(dir: &TempDir) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_fx-risk"));
    command
        .current_dir(dir.path())
        .env_remove("FXRISK_REPORTING_CURRENCY")
        .env_remove("FXRISK_VALUATION_DATE")
        .env_remove("FXRISK_LOG_LEVEL")
        .env_remove("FXRISK_PARALLEL_THRESHOLD");
    command
}

#[test]
fn test_malformed_env_valuation_date_aborts_run() {
    let dir = TempDir::new().unwrap();
    let input = write_book(&dir, "book.csv", &["FX001,USD/JPY,1,USD,100,100,0.20,0.0,0.0,1.0,CALL"]);

    let output = fx_risk(&dir)
        .args(["price", "-f", "table"])
        .arg(&input)
        .env("FXRISK_VALUATION_DATE", "2024-13-45")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("FXRISK_VALUATION_DATE"), "stderr: {}", stderr);
    assert!(stderr.contains("2024-13-45"), "stderr: {}", stderr);
    assert!(!String::from_utf8_lossy(&output.stdout).contains("PORTFOLIO SUMMARY"));
}

#[test]
fn test_env_valuation_date_labels_summary() {
    let dir = TempDir::new().unwrap();
    let input = write_book(&dir, "book.csv", &["FX001,USD/JPY,1,USD,100,100,0.20,0.0,0.0,1.0,CALL"]);

    let output = fx_risk(&dir)
        .args(["price", "-f", "table"])
        .arg(&input)
        .env("FXRISK_VALUATION_DATE", "2024-06-28")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("2024-06-28"));
}
