use std::io::{self, Write};

pub mod coerce;
pub mod config;
pub mod converter;
pub mod error;
pub mod headers;
pub mod locator;

pub use config::Config;
pub use converter::ConversionSummary;
pub use error::{ConvertError, Result};

/// Locate the input, convert it and write the summary lines to `report`.
pub fn run_with_report<W: Write>(config: &Config, report: &mut W) -> Result<ConversionSummary> {
    let input_path = locator::find_input_file(&config.input_candidates)?;
    let summary = converter::convert_file(&input_path, config, report)?;

    writeln!(report, "OK: Wrote {}", summary.output_path.display())?;
    writeln!(
        report,
        "Features: {}  Skipped (missing lat/lon): {}",
        summary.features, summary.skipped
    )?;
    report.flush()?;

    Ok(summary)
}

/// Same as [`run_with_report`], reporting to stdout.
pub fn run(config: &Config) -> Result<ConversionSummary> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run_with_report(config, &mut handle)
}
