use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn cli() -> Command {
    Command::cargo_bin("projectile-sim").expect("projectile-sim bin")
}

#[test]
fn prints_flight_report() {
    cli()
        .args(["--velocity", "25", "--angle", "45", "--gravity", "9.81", "--rows", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PROJECTILE FLIGHT: Earth"))
        .stdout(predicate::str::contains("LANDING"))
        .stdout(predicate::str::contains("Max height:"));
}

#[test]
fn rejects_non_positive_gravity() {
    cli()
        .args(["--velocity", "10", "--gravity", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("gravity"));
}

#[test]
fn rejects_negative_velocity() {
    cli()
        .args(["--velocity", "-3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("velocity"));
}

#[test]
fn compare_lists_every_world() {
    cli()
        .args(["--preset", "oblique", "--compare", "--rows", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Environment Comparison"))
        .stdout(predicate::str::contains("Moon"))
        .stdout(predicate::str::contains("Jupiter"));
}

#[test]
fn exports_csv_and_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("flight.csv");
    let json_path = dir.path().join("flight.json");

    cli()
        .args(["--environment", "mars", "--height", "12", "--rows", "0"])
        .arg("--csv")
        .arg(&csv_path)
        .arg("--json")
        .arg(&json_path)
        .assert()
        .success();

    let csv_text = fs::read_to_string(&csv_path).expect("csv output");
    assert!(csv_text.starts_with("x,y,t,v,vx,vy"));
    assert!(csv_text.lines().count() > 2);

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).expect("json output")).expect("valid json");
    assert_eq!(json["scenario"]["environment"], "Mars");
    assert_eq!(json["scenario"]["initial_height"], 12.0);
}

#[test]
fn reads_interpreter_reply_and_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let reply = dir.path().join("reply.json");
    fs::write(
        &reply,
        r#"{"parameters": {"velocity": 10, "angle": 0, "initialHeight": 60},
            "derivationSummary": "Quadratic in t with y0 = 60 m."}"#,
    )
    .unwrap();
    let config = dir.path().join("sim.toml");
    fs::write(&config, "[launch]\nvelocity = 5.0\nangle = 10.0\ngravity = 9.81\nair_resistance = true\n").unwrap();

    cli()
        .arg("--config")
        .arg(&config)
        .arg("--response")
        .arg(&reply)
        .args(["--rows", "0", "--at", "1.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quadratic in t with y0 = 60 m."))
        .stdout(predicate::str::is_match(r"Air drag:\s+on").unwrap())
        .stdout(predicate::str::contains("Playback Samples"));
}

#[test]
fn malformed_reply_is_an_interpretation_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let reply = dir.path().join("reply.json");
    fs::write(&reply, "Sorry, I cannot help with that.").unwrap();

    cli()
        .arg("--response")
        .arg(&reply)
        .assert()
        .failure()
        .stderr(predicate::str::contains("scenario interpretation failed"));
}

#[test]
fn reports_requested_height_crossings() {
    cli()
        .args(["--velocity", "20", "--angle", "60", "--cross-height", "5", "--rows", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RISE"))
        .stdout(predicate::str::contains("FALL"));
}

#[test]
fn environment_names_ignore_case() {
    cli()
        .args(["--environment", "JUPITER", "--rows", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PROJECTILE FLIGHT: Jupiter"));

    cli()
        .args(["--environment", "venus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown environment 'venus'"));
}
