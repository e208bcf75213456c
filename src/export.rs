//! CSV export of the cumulative cost series and of scenario sweeps

use std::io::Write;

use serde::Serialize;

use crate::calculation::Calculation;
use crate::error::Result;
use crate::format::roi_days_display;
use crate::projection::Projection;

#[derive(Serialize)]
struct SeriesRecord<'a> {
    month: u32,
    label: &'a str,
    manual_cumulative: f64,
    automated_cumulative: f64,
    net_savings: f64,
}

#[derive(Serialize)]
struct SweepRecord {
    hourly_rate: f64,
    monthly_volume: f64,
    hours_per_doc_manual: f64,
    minutes_per_doc_auto: f64,
    setup_cost: f64,
    annual_savings: f64,
    hours_saved_annually: f64,
    roi_days: String,
    break_even_month: Option<f64>,
}

/// Write one row per month of the series
pub fn write_series_csv<W: Write>(writer: W, projection: &Projection) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for point in &projection.points {
        let label = point.label();
        csv_writer.serialize(SeriesRecord {
            month: point.month,
            label: &label,
            manual_cumulative: point.manual_cumulative,
            automated_cumulative: point.automated_cumulative,
            net_savings: point.net_savings(),
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write one row per evaluated scenario
pub fn write_sweep_csv<W: Write>(writer: W, calculations: &[Calculation]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for calc in calculations {
        csv_writer.serialize(SweepRecord {
            hourly_rate: calc.inputs.hourly_rate,
            monthly_volume: calc.inputs.monthly_volume,
            hours_per_doc_manual: calc.inputs.hours_per_doc_manual,
            minutes_per_doc_auto: calc.inputs.minutes_per_doc_auto,
            setup_cost: calc.inputs.setup_cost,
            annual_savings: calc.results.annual_savings,
            hours_saved_annually: calc.results.hours_saved_annually,
            roi_days: roi_days_display(calc.results.roi_days),
            break_even_month: calc.projection.break_even.map(|b| b.month),
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}
