use std::io::Write;
use std::path::Path;

use crate::error::ExportError;
use crate::sim::Sample;

/// Write trajectory samples as CSV.
///
/// Columns: x, y, t, v, vx, vy
pub fn write_trajectory<W: Write>(writer: W, trajectory: &[Sample]) -> Result<(), ExportError> {
    let mut out = ::csv::Writer::from_writer(writer);
    for sample in trajectory {
        out.serialize(sample)?;
    }
    out.flush()?;
    Ok(())
}

/// Write trajectory to a CSV file at the given path.
pub fn write_trajectory_file<P: AsRef<Path>>(path: P, trajectory: &[Sample]) -> Result<(), ExportError> {
    let file = std::fs::File::create(path)?;
    write_trajectory(file, trajectory)
}

/// Read samples back from CSV written by [`write_trajectory`].
pub fn read_trajectory<R: std::io::Read>(reader: R) -> Result<Vec<Sample>, ExportError> {
    let mut input = ::csv::Reader::from_reader(reader);
    let mut samples = Vec::new();
    for record in input.deserialize() {
        samples.push(record?);
    }
    Ok(samples)
}
