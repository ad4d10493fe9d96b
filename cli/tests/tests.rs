mod common;


use common::TestCli;

#[test]
fn test_completion() {
    let cli = TestCli::new();
    let output = cli.run(["completion", "bash"]);
    assert!(output.contains("ica"));
    assert!(output.contains("download"));
}

#[test]
fn test_unknown_command() {
    let cli = TestCli::new();
    let output = cli.command().arg("frobnicate").output().unwrap();
    assert!(!output.status.success());
}
