use super::test_helpers::{
    commit_file, create_stack, create_test_git_repo, git, run_tool, stderr_of, stdout_of,
};

#[test]
fn test_dryrun_prints_without_executing() {
    let (temp_dir, repo_path) = create_test_git_repo();
    create_stack(&repo_path, &["feature1", "feature2", "feature3"]);

    let output = run_tool(
        &repo_path,
        temp_dir.path(),
        &["--dryrun", "feature1", "git", "merge", "%P"],
    );
    let stdout = stdout_of(&output);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    assert!(stdout.contains("running in dryrun mode"));
    assert!(stdout.contains("prefix: feature1"));
    assert_eq!(stdout.matches("> git checkout ").count(), 3);
    assert_eq!(stdout.matches("> git merge ").count(), 2);
    assert!(stdout.contains("> git merge feature1"));
    assert!(stdout.contains("> git merge feature2"));
    assert!(stdout
        .lines()
        .any(|line| line == "Failed to expand command on branch feature1, skipping (git merge %P)"));

    // Nothing ran, so HEAD did not move
    assert_eq!(git(&repo_path, &["rev-parse", "--abbrev-ref", "HEAD"]), "main");
}

#[test]
fn test_checkouts_follow_numeric_order() {
    let (temp_dir, repo_path) = create_test_git_repo();
    create_stack(&repo_path, &["part1", "part2", "part9", "part10"]);

    let output = run_tool(&repo_path, temp_dir.path(), &["--dryrun", "part2", "echo", "%B"]);
    assert!(output.status.success());

    let checkouts: Vec<String> = stdout_of(&output)
        .lines()
        .filter_map(|line| line.strip_prefix("> git checkout "))
        .map(str::to_string)
        .collect();
    assert_eq!(checkouts, vec!["part2", "part9", "part10"]);
}

#[test]
fn test_date_prefixed_stack_walks_in_numeric_order() {
    let (temp_dir, repo_path) = create_test_git_repo();
    create_stack(
        &repo_path,
        &["2024-feature3", "2024-feature4", "2024-feature9", "2024-feature10"],
    );

    let output = run_tool(
        &repo_path,
        temp_dir.path(),
        &["--dryrun", "2024-feature4", "git", "merge", "%P"],
    );
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let commands: Vec<String> = stdout_of(&output)
        .lines()
        .filter_map(|line| line.strip_prefix("> "))
        .map(str::to_string)
        .collect();
    assert_eq!(
        commands,
        vec![
            "git checkout 2024-feature4",
            "git checkout 2024-feature9",
            "git merge 2024-feature4",
            "git checkout 2024-feature10",
            "git merge 2024-feature9",
        ]
    );
}

#[test]
fn test_merge_parent_into_each_child() {
    let (temp_dir, repo_path) = create_test_git_repo();
    create_stack(&repo_path, &["layer1", "layer2", "layer3"]);

    git(&repo_path, &["checkout", "layer1"]);
    commit_file(&repo_path, "late-fix.txt");
    git(&repo_path, &["checkout", "main"]);

    let output = run_tool(&repo_path, temp_dir.path(), &["layer1", "git", "merge", "%P"]);
    assert!(
        output.status.success(),
        "stdout: {}\nstderr: {}",
        stdout_of(&output),
        stderr_of(&output)
    );

    // The walk ends on the last branch, which now carries the parent's fix
    assert_eq!(git(&repo_path, &["rev-parse", "--abbrev-ref", "HEAD"]), "layer3");
    assert!(repo_path.join("late-fix.txt").exists());
    assert!(repo_path.join("layer2.txt").exists());
}

#[cfg(unix)]
#[test]
fn test_failure_stops_the_walk() {
    let (temp_dir, repo_path) = create_test_git_repo();
    create_stack(&repo_path, &["step1", "step2", "step3"]);

    let output = run_tool(
        &repo_path,
        temp_dir.path(),
        &["step1", "test", "%B", "!=", "step2"],
    );
    let stdout = stdout_of(&output);

    assert!(!output.status.success());
    assert!(stdout.contains("> git checkout step2"));
    assert!(!stdout.contains("git checkout step3"));
    assert!(stderr_of(&output).contains("returncode 1"));
    assert_eq!(git(&repo_path, &["rev-parse", "--abbrev-ref", "HEAD"]), "step2");
}

#[test]
fn test_no_matching_branches_is_success() {
    let (temp_dir, repo_path) = create_test_git_repo();
    create_stack(&repo_path, &["feature1"]);

    let output = run_tool(&repo_path, temp_dir.path(), &["nomatch", "echo", "%B"]);
    assert!(output.status.success());
    assert!(!stdout_of(&output).contains("git checkout"));
}

#[test]
fn test_outside_repository_fails() {
    let temp_dir = tempfile::TempDir::new().unwrap();

    let output = run_tool(temp_dir.path(), temp_dir.path(), &["feature1", "echo", "%B"]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("Not a git repository"));
}
