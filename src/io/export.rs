//! CSV export for the equipment schedule.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::report::ScheduleRow;

/// Column header for the schedule export.
const HEADER: &str = "name,quantity,power_w,daily_hours,daily_kwh";

/// Exports schedule rows to a CSV file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_schedule_csv(rows: &[ScheduleRow], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_schedule_csv(rows, buf)
}

/// Writes schedule rows as CSV to any writer.
///
/// One header row, then one row per entry in schedule order. Daily energy
/// is written with two decimals, matching the on-screen table.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_schedule_csv(rows: &[ScheduleRow], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;

    for r in rows {
        wtr.write_record(&[
            r.entry.name().to_string(),
            r.entry.quantity().to_string(),
            r.entry.power_watts().to_string(),
            r.entry.daily_hours().to_string(),
            format!("{:.2}", r.daily_kwh),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
