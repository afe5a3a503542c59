use anyhow::Result;
use std::process::Command;

fn dinner_wine() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dinner-wine"))
}

#[test]
fn plan_prints_exact_prompt() -> Result<()> {
    let out = dinner_wine()
        .args(["plan", "--main-dish", "roast chicken", "--sides", "3", "--cuisine", "French"])
        .output()?;
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout)?.trim_end(),
        "Plan some French dinner featuring roast chicken: suggest 3 sides plus a wine pairing, then explain why that pairing works."
    );
    Ok(())
}

#[test]
fn plan_json_reports_random_source() -> Result<()> {
    let out = dinner_wine()
        .args(["plan", "--main-dish", "tofu stir-fry", "--seed", "3", "--json"])
        .output()?;
    assert!(out.status.success());
    let plan: serde_json::Value = serde_json::from_slice(&out.stdout)?;
    assert_eq!(plan["cuisine_source"], "random");
    let cuisine = plan["cuisine"].as_str().unwrap_or_default();
    assert!(dinner_wine::CUISINES.contains(&cuisine));
    Ok(())
}

#[test]
fn cuisines_json_matches_resource() -> Result<()> {
    let out = dinner_wine().args(["cuisines", "--json"]).output()?;
    assert!(out.status.success());
    let names: Vec<String> = serde_json::from_slice(&out.stdout)?;
    assert_eq!(names, dinner_wine::CUISINES);
    Ok(())
}
