use projectile_sim::io::csv;
use projectile_sim::io::json::{self, FlightSummary};
use projectile_sim::scenario::ParameterSetBuilder;
use projectile_sim::sim;

fn main() -> anyhow::Result<()> {
    let params = ParameterSetBuilder::new()
        .velocity(25.0)
        .angle(45.0)
        .mass(1.5)
        .try_build()?;

    println!("Simulating {:.0} m/s at {:.0} deg ...", params.velocity, params.angle);
    let result = sim::try_integrate(&params)?;

    let summary = FlightSummary::from_result(&result);
    println!("Max height: {:.2} m (t = {:.2} s)", summary.max_height_m, summary.apex_time_s);
    println!("Range: {:.2} m", summary.range_m);
    println!("Flight time: {:.2} s", summary.time_of_flight_s);

    csv::write_trajectory_file("launch_trajectory.csv", result.trajectory())?;
    json::write_summary_file("launch_summary.json", &params, &summary)?;

    println!("Exported: launch_trajectory.csv, launch_summary.json");
    Ok(())
}
