use projectile_sim::dynamics::state::SimConfig;
use projectile_sim::physics::ENVIRONMENTS;
use projectile_sim::scenario::presets;
use projectile_sim::sim::{self, query, Playback};

fn main() {
    let category = presets::oblique();
    println!("{}: \"{}\"", category.title, category.prompt);

    let runs = sim::compare_environments(&category.parameters, &ENVIRONMENTS, &SimConfig::default());
    for run in &runs {
        println!(
            "{:<8} g={:>5.2}  apex {:>7.2} m  range {:>8.2} m  air time {:>6.2} s",
            run.environment.name,
            run.environment.gravity,
            run.result.max_height(),
            run.result.range(),
            run.result.time_of_flight()
        );
    }

    // Step a shared clock through the longest flight at 4 frames per second.
    let mut clock = Playback::for_results(runs.iter().map(|r| &r.result));
    clock.play();
    loop {
        let finished = clock.advance(0.25);
        let positions: Vec<String> = runs
            .iter()
            .map(|r| {
                let s = query::sample_at(&r.result, clock.current_time());
                format!("{}=({:.1}, {:.1})", r.environment.name, s.x, s.y)
            })
            .collect();
        println!("t={:>6.2}s  {}", clock.current_time(), positions.join("  "));
        if finished {
            break;
        }
    }
}
