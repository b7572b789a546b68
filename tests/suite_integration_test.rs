use anyhow::Result;
use asp_instgen::config::suite_config::SuiteConfig;
use asp_instgen::utils::validation::Validate;
use asp_instgen::SuiteRunner;
use tempfile::TempDir;

#[tokio::test]
async fn test_suite_generates_files_and_manifest() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let toml_content = format!(
        r#"
[suite]
name = "selection-suite"
description = "Selection instances for scaling runs"

[generator]
kind = "selection"
domain_size = 50

[instances]
counts = [5, 10]
repetitions = 2

[output]
path = "{}"
"#,
        output_path
    );

    let config = SuiteConfig::from_toml_str(&toml_content)?;
    assert!(config.validate().is_ok());

    let runner = SuiteRunner::new(config);
    runner.run().await?;

    // 2 counts x 2 repetitions
    for file_name in [
        "instance5_1.lp",
        "instance5_2.lp",
        "instance10_1.lp",
        "instance10_2.lp",
    ] {
        assert!(temp_dir.path().join(file_name).exists());
    }

    let content = std::fs::read_to_string(temp_dir.path().join("instance10_2.lp"))?;
    let lines: Vec<&str> = content.lines().collect();

    // Comment header, then the fact lines
    assert!(lines[0].starts_with("% suite selection-suite"));
    assert!(lines[1].starts_with("% generated by asp-instgen"));

    let fact_lines: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|line| !line.starts_with('%'))
        .collect();
    assert_eq!(fact_lines.len(), 13);
    assert_eq!(fact_lines[10], "dom(1..50).");
    assert_eq!(fact_lines[11], "num(10).");
    assert!(fact_lines[12].starts_with("max("));

    // Manifest describes every generated file
    let manifest_path = temp_dir.path().join("manifest.json");
    assert!(manifest_path.exists());

    let manifest: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(
        &manifest_path,
    )?)?;

    assert_eq!(manifest["suite"], "selection-suite");
    assert_eq!(manifest["generator"], "selection");

    let instances = manifest["instances"].as_array().unwrap();
    assert_eq!(instances.len(), 4);

    let entry = instances
        .iter()
        .find(|e| e["file"] == "instance10_2.lp")
        .unwrap();
    assert_eq!(entry["count"], 10);
    assert_eq!(entry["repetition"], 2);
    assert_eq!(entry["fact_count"], 10);
    assert_eq!(entry["domain_size"], 50);
    assert!(entry["max_value"].as_i64().unwrap() <= 50);

    Ok(())
}

#[tokio::test]
async fn test_suite_without_manifest() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let toml_content = format!(
        r#"
[suite]
name = "chains"

[generator]
kind = "successors"

[instances]
counts = [3]

[output]
path = "{}"
filename_template = "chain{{count}}_{{rep}}.lp"
manifest = false
"#,
        output_path
    );

    let config = SuiteConfig::from_toml_str(&toml_content)?;
    let runner = SuiteRunner::new(config);
    runner.run().await?;

    assert!(temp_dir.path().join("chain3_1.lp").exists());
    assert!(!temp_dir.path().join("manifest.json").exists());

    let content = std::fs::read_to_string(temp_dir.path().join("chain3_1.lp"))?;
    let fact_lines: Vec<&str> = content
        .lines()
        .filter(|line| !line.starts_with('%'))
        .collect();
    assert_eq!(
        fact_lines,
        vec!["succ(0, 1).", "succ(1, 2).", "succ(2, 3)."]
    );

    Ok(())
}
