//! CLI integration tests for the task board
//!
//! These drive the real binary through scripted stdin, the same way a user
//! types answers at the prompts.

use predicates::prelude::*;

/// Get a command instance for the taskboard binary
fn taskboard_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("taskboard"))
}

/// A session with plain output and no pauses
fn session(input: &str) -> assert_cmd::assert::Assert {
    taskboard_cmd()
        .args(["--no-color", "--no-pause"])
        .write_stdin(input.to_string())
        .assert()
}

/// Menu answers that create "Pay rent" (Urgent, new category "Bills", due today)
const CREATE_PAY_RENT: &str = "2\nPay rent\n\n4\n6\nBills\n\n";

// =============================================================================
// Session Tests
// =============================================================================

#[test]
fn test_exit_immediately() {
    session("0\n")
        .success()
        .stdout(predicate::str::contains("TASK MANAGER"))
        .stdout(predicate::str::contains("Choose an action (0-7): "));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    session("").success();
    session("2\nHalf a task\n").success();
}

#[test]
fn test_invalid_menu_choice() {
    session("42\nhello\n0\n")
        .success()
        .stdout(predicate::str::contains("Invalid input. Choose 0-7.").count(2));
}

#[test]
fn test_pause_waits_for_enter() {
    taskboard_cmd()
        .arg("--no-color")
        .write_stdin("7\n\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Press Enter to continue..."));
}

#[test]
fn test_help_lists_flags() {
    taskboard_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-pause"))
        .stdout(predicate::str::contains("--format"));
}

// =============================================================================
// Task Tests
// =============================================================================

#[test]
fn test_create_reports_id() {
    session(&format!("{}0\n", CREATE_PAY_RENT))
        .success()
        .stdout(predicate::str::contains("Task 'Pay rent' added with ID: 1001"));
}

#[test]
fn test_created_task_is_active_and_counted() {
    // create, list active (2), stats, exit
    let input = format!("{}1\n2\n7\n0\n", CREATE_PAY_RENT);

    session(&input)
        .success()
        .stdout(predicate::str::contains("Category: Bills (1)"))
        .stdout(predicate::str::contains("[1001] Pay rent"))
        .stdout(predicate::str::contains("OVERDUE").not())
        .stdout(predicate::str::contains("Active: 1"))
        .stdout(predicate::str::contains("- Bills: 1"))
        .stdout(predicate::str::contains("- Urgent: 1"));
}

#[test]
fn test_ids_increase() {
    let input = format!("{}{}0\n", CREATE_PAY_RENT, "2\nSecond\n\n1\n1\n\n");

    session(&input)
        .success()
        .stdout(predicate::str::contains("added with ID: 1001"))
        .stdout(predicate::str::contains("'Second' added with ID: 1002"));
}

#[test]
fn test_overdue_task_leaves_overdue_search_when_completed() {
    let create_old = "2\nOld bill\n\n2\n5\n01.01.2000\n";
    let search_overdue = "6\n5\n";
    let complete = "3\n1001\n";
    let input = format!(
        "{}{}{}{}0\n",
        create_old, search_overdue, complete, search_overdue
    );

    let assert = session(&input).success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();

    let completed_at = stdout.find("marked as completed").unwrap();
    let (before, after) = stdout.split_at(completed_at);
    assert!(before.contains("[1001] Old bill"));
    assert!(before.contains("OVERDUE"));
    assert!(after.contains("Nothing found"));
}

#[test]
fn test_edit_completed_task_is_refused() {
    let input = format!("{}3\n1001\n4\n1001\n7\n0\n", CREATE_PAY_RENT);

    session(&input)
        .success()
        .stdout(predicate::str::contains("Completed tasks cannot be edited"))
        .stdout(predicate::str::contains("Completed: 1"));
}

#[test]
fn test_edit_with_bad_date_keeps_task() {
    let edit = "4\n1001\nRenamed\n\n\n\nnot-a-date\n";
    let input = format!("{}{}6\n1\nRenamed\n0\n", CREATE_PAY_RENT, edit);

    session(&input)
        .success()
        .stdout(predicate::str::contains("changes not saved"))
        .stdout(predicate::str::contains("Nothing found"));
}

#[test]
fn test_delete_declined_keeps_task() {
    let input = format!("{}5\n1001\nn\n7\n0\n", CREATE_PAY_RENT);

    session(&input)
        .success()
        .stdout(predicate::str::contains("Are you sure you want to delete task 'Pay rent'?"))
        .stdout(predicate::str::contains("Cancelled"))
        .stdout(predicate::str::contains("Total tasks: 1"));
}

#[test]
fn test_delete_confirmed_removes_task() {
    let input = format!("{}5\n1001\nyes\n1\n0\n", CREATE_PAY_RENT);

    session(&input)
        .success()
        .stdout(predicate::str::contains("Task deleted"))
        .stdout(predicate::str::contains("Task list is empty"));
}

#[test]
fn test_unknown_and_malformed_ids() {
    session("3\n4242\n3\nabc\n0\n")
        .success()
        .stdout(predicate::str::contains("Task with ID 4242 not found"))
        .stdout(predicate::str::contains("Invalid task ID"));
}

#[test]
fn test_title_search_ignores_case() {
    let create_milk = "2\nBuy Milk\n\n1\n2\n\n";
    session(&format!("{}6\n1\nmilk\n0\n", create_milk))
        .success()
        .stdout(predicate::str::contains("[1001] Buy Milk"));
}

// =============================================================================
// Output Format Tests
// =============================================================================

#[test]
fn test_json_stats() {
    let output = taskboard_cmd()
        .args(["--format", "json", "--no-pause"])
        .write_stdin(format!("{}7\n0\n", CREATE_PAY_RENT))
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();
    let docs: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0]["id"], 1001);
    assert_eq!(docs[0]["category"], "Bills");
    assert_eq!(docs[1]["total"], 1);
    assert_eq!(docs[1]["active"], 1);
    assert_eq!(docs[1]["percent_complete"], 0);
}

#[test]
fn test_verbose_logs_to_stderr() {
    taskboard_cmd()
        .args(["--verbose", "--no-pause", "--no-color"])
        .write_stdin("7\n0\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("[verbose:menu] Running stats"));
}
