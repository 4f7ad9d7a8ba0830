use super::test_helpers::{create_stack, create_test_git_repo, run_tool, stderr_of, stdout_of};

#[test]
fn test_explicit_config_changes_echo_prefix() {
    let (temp_dir, repo_path) = create_test_git_repo();
    create_stack(&repo_path, &["topic1", "topic2"]);

    let config_path = temp_dir.path().join("settings.json");
    std::fs::write(&config_path, r#"{ "output": { "echo_prefix": "+ " } }"#).unwrap();

    let output = run_tool(
        &repo_path,
        temp_dir.path(),
        &[
            "--dryrun",
            "--config",
            config_path.to_str().unwrap(),
            "topic1",
            "echo",
            "%B",
        ],
    );
    let stdout = stdout_of(&output);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout.contains("+ git checkout topic1"));
    assert!(stdout.contains("+ echo topic2"));
    assert!(!stdout.contains("> git checkout"));
}

#[test]
fn test_default_config_is_read_from_home() {
    let (temp_dir, repo_path) = create_test_git_repo();
    create_stack(&repo_path, &["topic1"]);

    let config_dir = temp_dir.path().join(".for-each-stacked");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.json"),
        r#"{ "output": { "echo_prefix": "$ " } }"#,
    )
    .unwrap();

    let output = run_tool(&repo_path, temp_dir.path(), &["--dryrun", "topic", "echo", "%B"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("$ git checkout topic1"));
}

#[test]
fn test_invalid_config_is_rejected_before_running() {
    let (temp_dir, repo_path) = create_test_git_repo();
    create_stack(&repo_path, &["topic1"]);

    let config_path = temp_dir.path().join("bad.json");
    std::fs::write(&config_path, r#"{ "git": { "executable": "" } }"#).unwrap();

    let output = run_tool(
        &repo_path,
        temp_dir.path(),
        &["--config", config_path.to_str().unwrap(), "topic1", "echo", "%B"],
    );
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("git.executable"));
    assert!(!stdout_of(&output).contains("git checkout"));
}
