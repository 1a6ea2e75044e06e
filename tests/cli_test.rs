/// Binary-level checks for the CLI surface.
use std::process::Command;

#[test]
fn missing_token_exits_one_with_usage() {
    let output = Command::new(env!("CARGO_BIN_EXE_tunnel-sweep"))
        .output()
        .expect("binary should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("usage: tunnel-sweep <token>"),
        "stderr was: {}",
        stderr
    );
    // no progress output: the sweep never started
    assert!(output.stdout.is_empty());
}

#[test]
fn empty_token_exits_one_with_usage() {
    let output = Command::new(env!("CARGO_BIN_EXE_tunnel-sweep"))
        .arg("")
        .output()
        .expect("binary should run");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("usage: tunnel-sweep <token>"));
}
