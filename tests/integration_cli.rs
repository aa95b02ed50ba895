use std::process::Command;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_main"))
}

#[test]
fn test_cli_rejects_invalid_mass_with_readable_message() {
    let output = cli()
        .args(["--mass", "0", "--output", "summary"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Command should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Parameter `mass` must be greater than zero, got 0"),
        "Should print the validation message, got: {}",
        stderr
    );
    assert!(!stderr.contains("NotPositive"), "Should not print the Debug form");
}

#[test]
fn test_cli_summary() {
    let output = cli()
        .args(["--speed", "30", "--angle", "45", "--output", "summary"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Flight Summary"));
    assert!(stdout.contains("Terminated by: GroundContact"));
}
