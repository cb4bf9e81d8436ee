use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::ExportError;
use crate::physics::Environment;
use crate::scenario::ParameterSet;
use crate::sim::{SimulationResult, Termination};

/// Summary statistics computed from a simulated flight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightSummary {
    pub max_height_m: f64,
    pub apex_time_s: f64,
    pub range_m: f64,
    pub time_of_flight_s: f64,
    pub max_speed_ms: f64,
    pub impact_speed_ms: f64,
    pub samples: usize,
    pub termination: Termination,
}

impl FlightSummary {
    /// Compute summary from a simulation result.
    pub fn from_result(result: &SimulationResult) -> Self {
        let max_speed = result
            .trajectory()
            .iter()
            .map(|s| s.v)
            .fold(0.0_f64, f64::max);

        FlightSummary {
            max_height_m: result.max_height(),
            apex_time_s: result.apex().t,
            range_m: result.range(),
            time_of_flight_s: result.time_of_flight(),
            max_speed_ms: max_speed,
            impact_speed_ms: result.last().v,
            samples: result.len(),
            termination: result.termination(),
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    scenario: Scenario<'a>,
    performance: &'a FlightSummary,
}

#[derive(Serialize)]
struct Scenario<'a> {
    environment: &'a str,
    #[serde(flatten)]
    parameters: &'a ParameterSet,
}

/// Write flight summary as pretty JSON to a writer.
pub fn write_summary<W: Write>(
    writer: W,
    params: &ParameterSet,
    summary: &FlightSummary,
) -> Result<(), ExportError> {
    let report = Report {
        scenario: Scenario {
            environment: Environment::label_for(params.gravity),
            parameters: params,
        },
        performance: summary,
    };
    serde_json::to_writer_pretty(writer, &report)?;
    Ok(())
}

/// Write flight summary JSON to a file.
pub fn write_summary_file<P: AsRef<Path>>(
    path: P,
    params: &ParameterSet,
    summary: &FlightSummary,
) -> Result<(), ExportError> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, params, summary)?;
    writeln!(file)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::integrate;

    #[test]
    fn summary_matches_result() {
        let params = ParameterSet::new(25.0, 45.0, 9.81);
        let result = integrate(&params);
        let s = FlightSummary::from_result(&result);
        assert_eq!(s.max_height_m, result.max_height());
        assert_eq!(s.range_m, result.range());
        assert_eq!(s.samples, result.len());
        assert!(s.apex_time_s > 0.0 && s.apex_time_s < s.time_of_flight_s);
        assert!((s.max_speed_ms - 25.0).abs() < 1.0);
    }

    #[test]
    fn json_output_is_valid() {
        let params = ParameterSet::new(10.0, 30.0, 1.62).with_air_resistance(true);
        let summary = FlightSummary::from_result(&integrate(&params));

        let mut buf = Vec::new();
        write_summary(&mut buf, &params, &summary).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(json["scenario"]["environment"], "Moon");
        assert_eq!(json["scenario"]["air_resistance"], true);
        assert_eq!(json["performance"]["termination"], "ground_contact");
        assert!(json["performance"]["range_m"].as_f64().unwrap() > 0.0);
    }
}
