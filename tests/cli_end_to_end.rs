//! End-to-end run of the probebench binary

use std::process::Command;

#[test]
fn test_binary_prints_full_report() {
    let output = Command::new(env!("CARGO_BIN_EXE_probebench"))
        .output()
        .expect("Failed to start probebench");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout
        .lines()
        .filter(|line| !line.starts_with("   Time: "))
        .collect();

    assert_eq!(
        lines,
        vec![
            "--- Python Benchmark Suite ---",
            "1. Recursion (Fib 28)...",
            "317811",
            "2. Iteration (Sum 1M)...",
            "   Result: 499999500000",
            "3. List Allocation (Push 100k)...",
            "   Len: 100000",
            "4. Map Access (100k Overwrites)...",
            "   Last Val: 99999",
            "--- END ---",
        ]
    );
    assert_eq!(stdout.matches("   Time: ").count(), 4);
}

#[test]
fn test_binary_ignores_arguments() {
    let output = Command::new(env!("CARGO_BIN_EXE_probebench"))
        .arg("--unexpected")
        .output()
        .expect("Failed to start probebench");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("   Last Val: 99999"));
}

#[test]
fn test_closed_stdout_reports_failure_once() {
    let (reader, writer) = std::io::pipe().expect("Failed to create pipe");
    drop(reader);

    let output = Command::new(env!("CARGO_BIN_EXE_probebench"))
        .stdout(writer)
        .output()
        .expect("Failed to start probebench");

    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    assert_eq!(lines, vec!["Output stream closed before the report was written."]);
}
