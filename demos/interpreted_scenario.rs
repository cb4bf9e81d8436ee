use projectile_sim::interpret::{InterpretError, ScenarioInterpreter};
use projectile_sim::scenario::presets;
use projectile_sim::sim;

/// Stand-in for the language model: answers the three sample prompts with
/// the reply it would be expected to give.
fn canned_backend(prompt: &str) -> Result<String, String> {
    let category = presets::all()
        .into_iter()
        .find(|c| c.prompt == prompt)
        .ok_or_else(|| format!("no canned reply for '{prompt}'"))?;
    let p = category.parameters;
    Ok(format!(
        r#"{{"parameters": {{"velocity": {}, "angle": {}, "gravity": {}, "mass": {}, "initialHeight": {}}},
            "derivationSummary": "Extracted from: {}"}}"#,
        p.velocity, p.angle, p.gravity, p.mass, p.initial_height, category.title
    ))
}

fn main() -> Result<(), InterpretError> {
    for category in presets::all() {
        let interpretation = canned_backend.interpret(category.prompt)?;
        let result = sim::try_integrate(&interpretation.parameters)?;
        println!("{}", interpretation.derivation);
        println!(
            "  range {:.2} m, air time {:.2} s, apex {:.2} m",
            result.range(),
            result.time_of_flight(),
            result.max_height()
        );
    }

    match canned_backend.interpret("Throw a rock off Olympus Mons") {
        Err(e) => println!("interpretation failed as expected: {e}"),
        Ok(_) => println!("unexpected interpretation"),
    }
    Ok(())
}
