use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{stderr_of, stdout_of, CliTest};

const APP: &str = r#"
const App = () => (
  <div>
    <Tab.Container kind="primary" />
    <Tab.Container kind="ghost" disabled />
  </div>
);
"#;

#[test]
fn test_usage_and_prop_reports() -> Result<()> {
    let test = CliTest::with_file("src/app.jsx", APP)?;

    let output = test.scan_command().output()?;
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "\
Scanned 1 files in 0.0 seconds

2 components used 3 times:
     2   *******---   <Tab.Container>
     1   ****------   <div>

<Tab.Container> was used 2 times with the following prop usage:
     2   **********   kind
     1   *****-----   disabled

<div> was used 1 time without any props
"
    );

    Ok(())
}

#[test]
fn test_usage_report_only() -> Result<()> {
    let test = CliTest::with_file("src/app.jsx", APP)?;

    let output = test.scan_command().args(["--report", "usage"]).output()?;
    let stdout = stdout_of(&output);
    assert!(stdout.contains("2 components used 3 times:"));
    assert!(!stdout.contains("prop usage"));

    Ok(())
}

#[test]
fn test_alphabetical_sort() -> Result<()> {
    let test = CliTest::with_file("src/app.jsx", APP)?;

    let output = test
        .scan_command()
        .args(["--report", "usage", "--sort", "alphabetical"])
        .output()?;
    assert_eq!(
        stdout_of(&output),
        "\
Scanned 1 files in 0.0 seconds

2 components used 3 times:
     2   *******---   <Tab.Container>
     1   ****------   <div>
"
    );

    Ok(())
}

#[test]
fn test_components_allow_list() -> Result<()> {
    let test = CliTest::with_file("src/app.jsx", APP)?;

    let output = test
        .scan_command()
        .args(["--report", "usage", "--components", "div"])
        .output()?;
    let stdout = stdout_of(&output);
    assert!(stdout.contains("1 components used 1 times:"));
    assert!(stdout.contains("<div>"));
    assert!(!stdout.contains("Tab.Container"));

    Ok(())
}

#[test]
fn test_lines_report_with_filter() -> Result<()> {
    let test = CliTest::with_file("src/app.jsx", APP)?;

    let output = test
        .scan_command()
        .args(["--prop", "kind=primary", "--report", "lines"])
        .output()?;
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "\
Scanned 1 files in 0.0 seconds

<Tab.Container> ./src/app.jsx:4:20
   4 |     <Tab.Container kind=\"primary\" />
"
    );

    Ok(())
}

#[test]
fn test_not_equals_filter() -> Result<()> {
    let test = CliTest::with_file("src/app.jsx", APP)?;

    let output = test
        .scan_command()
        .args(["--prop", "kind!=primary", "--report", "props"])
        .output()?;
    let stdout = stdout_of(&output);
    assert!(stdout.contains("<Tab.Container> was used 2 times with the following prop usage:"));
    assert!(stdout.contains("   1   *****-----   kind"));

    Ok(())
}

#[test]
fn test_absent_filter() -> Result<()> {
    let test = CliTest::with_file("src/app.jsx", APP)?;

    let output = test
        .scan_command()
        .args(["--prop", "!disabled", "--report", "props"])
        .output()?;
    let stdout = stdout_of(&output);
    // One of the two <Tab.Container> elements lacks `disabled`; so does <div>.
    assert!(stdout.contains("   1   *****-----   disabled"));
    assert!(stdout.contains("<div> was used 1 time with the following prop usage:"));

    Ok(())
}

#[test]
fn test_lines_report_requires_prop_filter() -> Result<()> {
    let test = CliTest::with_file("src/app.jsx", APP)?;

    let output = test.scan_command().args(["--report", "lines"]).output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("requires a prop filter"));

    Ok(())
}

#[test]
fn test_json_output() -> Result<()> {
    let test = CliTest::with_file("src/app.jsx", APP)?;

    let output = test.scan_command().arg("--json").output()?;
    let json: serde_json::Value = serde_json::from_str(&stdout_of(&output))?;

    assert_eq!(json["componentTotal"], 2);
    assert_eq!(json["componentUsageTotal"], 3);
    assert_eq!(json["componentUsage"]["Tab.Container"], 2);
    assert_eq!(json["componentUsage"]["div"], 1);
    assert_eq!(json["propUsage"]["Tab.Container"]["kind"], 2);
    assert_eq!(json["elapsedTime"], 0.0);
    assert_eq!(json["filenames"][0], "./src/app.jsx");

    Ok(())
}

#[test]
fn test_parse_error_is_nonfatal_and_reported() -> Result<()> {
    let test = CliTest::with_file("src/app.jsx", APP)?;
    test.write_file("src/broken.jsx", "const x = <div")?;

    let output = test.scan_command().args(["--report", "usage"]).output()?;
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("Scanned 2 files in 0.0 seconds"));
    assert!(stdout.contains("2 components used 3 times:"));
    assert!(stdout.contains("1 parse error"));
    assert!(stdout.contains("./src/broken.jsx:1:"));

    Ok(())
}

#[test]
fn test_parse_error_suggests_syntax_extension() -> Result<()> {
    let test = CliTest::with_file("src/store.js", "@observer\nclass Store {}\n")?;

    let output = test.scan_command().output()?;
    let stdout = stdout_of(&output);
    assert!(stdout.contains("1 parse error"));
    assert!(stdout.contains("Try adding these syntax extensions as arguments:"));
    assert!(stdout.contains("--syntax decorators"));

    Ok(())
}

#[test]
fn test_syntax_extension_fixes_parse() -> Result<()> {
    let test = CliTest::with_file(
        "src/store.jsx",
        "@observer\nclass Store {}\nconst x = <Store kind=\"a\" />;\n",
    )?;

    let output = test
        .scan_command()
        .args(["--report", "usage", "--syntax", "decorators"])
        .output()?;
    let stdout = stdout_of(&output);
    assert!(stdout.contains("1 components used 1 times:"));
    assert!(!stdout.contains("parse error"));

    Ok(())
}

#[test]
fn test_config_files_and_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".propscanrc.json",
        r#"{ "files": ["src/**/*.tsx"], "ignores": ["src/generated/**"] }"#,
    )?;
    test.write_file("src/app.tsx", "const x = <div />;")?;
    test.write_file("src/generated/types.tsx", "const x = <span />;")?;
    test.write_file("lib/other.tsx", "const x = <span />;")?;

    let output = test.scan_command().args(["--report", "usage"]).output()?;
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Scanned 1 files"));
    assert!(stdout.contains("<div>"));
    assert!(!stdout.contains("<span>"));

    Ok(())
}

#[test]
fn test_cli_files_override_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".propscanrc.json", r#"{ "files": ["src/**/*.tsx"] }"#)?;
    test.write_file("src/app.tsx", "const x = <div />;")?;
    test.write_file("lib/other.tsx", "const x = <span />;")?;

    let output = test
        .scan_command()
        .args(["--report", "usage", "--files", "lib/**/*.tsx"])
        .output()?;
    let stdout = stdout_of(&output);
    assert!(stdout.contains("<span>"));
    assert!(!stdout.contains("<div>"));

    Ok(())
}

#[test]
fn test_gitignore_is_honored() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".gitignore", "generated/\n")?;
    test.write_file("src/app.jsx", "const x = <div />;")?;
    test.write_file("generated/out.jsx", "const x = <span />;")?;

    let output = test.scan_command().args(["--report", "usage"]).output()?;
    let stdout = stdout_of(&output);
    assert!(stdout.contains("<div>"));
    assert!(!stdout.contains("<span>"));

    let output = test
        .scan_command()
        .args(["--report", "usage", "--no-gitignore"])
        .output()?;
    let stdout = stdout_of(&output);
    assert!(stdout.contains("<span>"));

    Ok(())
}

#[test]
fn test_empty_project_is_a_valid_run() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.scan_command().output()?;
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "Scanned 0 files in 0.0 seconds\n");

    Ok(())
}

#[test]
fn test_spread_props_use_sentinel_name() -> Result<()> {
    let test = CliTest::with_file("src/app.jsx", "const x = <Tab {...rest} />;")?;

    let output = test.scan_command().args(["--report", "props"]).output()?;
    assert!(stdout_of(&output).contains("{...}"));

    Ok(())
}
