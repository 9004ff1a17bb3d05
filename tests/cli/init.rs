use anyhow::Result;

use crate::{stderr_of, stdout_of, CliTest};

#[test]
fn test_init_writes_default_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("Created .propscanrc.json"));

    let config = test.read_file(".propscanrc.json")?;
    let json: serde_json::Value = serde_json::from_str(&config)?;
    assert_eq!(json["files"][0], "**/*.{js,jsx,tsx}");
    assert_eq!(json["gitignore"], true);

    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".propscanrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("already exists"));

    Ok(())
}
