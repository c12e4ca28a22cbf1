use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::constants::TELEMETRY_HEADER;
use crate::errors::ExportError;

use super::telemetry::Telemetry;

/// Writes `t,x,y,vx,vy,ax,ay` followed by one line per telemetry row.
pub fn write_csv<W: Write>(writer: W, telemetry: &Telemetry) -> Result<(), ExportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(TELEMETRY_HEADER)?;
    for row in &telemetry.rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;

    Ok(())
}

pub fn write_csv_file<P: AsRef<Path>>(path: P, telemetry: &Telemetry) -> Result<(), ExportError> {
    let file = File::create(path.as_ref())?;
    write_csv(file, telemetry)?;
    log::info!(
        "Exported {} telemetry rows to {}",
        telemetry.len(),
        path.as_ref().display()
    );
    Ok(())
}
