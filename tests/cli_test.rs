use assert_cmd::Command;
use assert_cmd::cargo_bin;
use predicates::prelude::*;

fn command() -> Command {
    let mut cmd = Command::new(cargo_bin!("admin-actions"));
    cmd.env("INTERVAL_API_KEY", "test_host_key")
        .env_remove("STRIPE_API_KEY")
        .env_remove("STRIPE_API_BASE")
        .env_remove("ADMIN_DB_PATH")
        .env_remove("LOG_FORMAT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_list_prints_registered_actions() {
    command()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Create User (create-user)"))
        .stdout(predicate::str::contains(
            "2. List Transactions (list-transactions): List the most recent Stripe transactions",
        ));
}

#[test]
fn test_missing_host_key_fails() {
    command()
        .env_remove("INTERVAL_API_KEY")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--api-key"));
}

#[test]
fn test_run_create_user_end_to_end() {
    command()
        .args(["run", "create-user"])
        .write_stdin("Ada Lovelace\nada@example.com\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Email: User created successfully"));
}

#[test]
fn test_run_unknown_action_fails() {
    command()
        .args(["run", "delete-user"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown action: delete-user"));
}

#[test]
fn test_listen_exits_on_quit() {
    command()
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available actions:"));
}

#[test]
fn test_listen_exits_on_end_of_input() {
    command()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available actions:"));
}

#[test]
fn test_dotenv_supplies_host_key() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".env"), "INTERVAL_API_KEY=from_dotenv\n").unwrap();

    command()
        .env_remove("INTERVAL_API_KEY")
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Create User (create-user)"));
}

#[test]
fn test_run_rejects_blank_host_key() {
    command()
        .env("INTERVAL_API_KEY", "  ")
        .args(["run", "create-user"])
        .write_stdin("Ada\nada@example.com\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("User created successfully").not())
        .stderr(predicate::str::contains("host API key must not be empty"));
}
