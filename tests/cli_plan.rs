//! Behavioural tests for the `ec2kit plan` dry-run subcommands.

#[path = "common/test_constants.rs"]
mod test_constants;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::contains;
use serde_json::{Value, json};
use tempfile::TempDir;

use test_constants::{DEFAULT_INSTANCE_TYPE, IMAGE_ID, INSTANCE_ID, OTHER_INSTANCE_ID};

const CONFIG_VARS: [&str; 8] = [
    "EC2KIT_ACCESS_KEY_ID",
    "EC2KIT_SECRET_ACCESS_KEY",
    "EC2KIT_REGION",
    "EC2KIT_ENDPOINT",
    "EC2KIT_DEFAULT_INSTANCE_TYPE",
    "EC2KIT_DEFAULT_IMAGE_ID",
    "EC2KIT_DEFAULT_KEY_NAME",
    "EC2KIT_DEFAULT_USER_DATA_FILE",
];

/// Builds a command isolated from the caller's configuration.
fn isolated_cmd(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("ec2kit");
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env_remove("XDG_CONFIG_HOME");
    for var in CONFIG_VARS {
        cmd.env_remove(var);
    }
    cmd
}

fn home() -> TempDir {
    TempDir::new().unwrap_or_else(|err| panic!("tempdir: {err}"))
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap_or_else(|err| panic!("stdout should be JSON: {err}"))
}

#[test]
fn plan_run_renders_launch_call() {
    let tmp = home();
    let mut cmd = isolated_cmd(&tmp);
    cmd.args([
        "plan", "run", "--image", IMAGE_ID, "--type", "m5.large", "--count", "3",
        "--key-name", "deploy",
    ]);

    assert_eq!(
        stdout_json(&mut cmd),
        json!({
            "operation": "RunInstances",
            "parameters": {
                "ImageId": IMAGE_ID,
                "InstanceType": "m5.large",
                "MinCount": 3,
                "MaxCount": 3,
                "KeyName": "deploy",
            },
        })
    );
}

#[test]
fn plan_run_falls_back_to_configured_defaults() {
    let tmp = home();
    let user_data = tmp.path().join("user-data.sh");
    std::fs::write(&user_data, "#!/bin/sh\n").unwrap_or_else(|err| panic!("write: {err}"));
    let mut cmd = isolated_cmd(&tmp);
    cmd.env("EC2KIT_DEFAULT_IMAGE_ID", IMAGE_ID)
        .env("EC2KIT_DEFAULT_KEY_NAME", "ops")
        .env("EC2KIT_DEFAULT_USER_DATA_FILE", &user_data)
        .args(["plan", "run"]);

    let planned = stdout_json(&mut cmd);

    assert_eq!(planned["parameters"]["InstanceType"], json!(DEFAULT_INSTANCE_TYPE));
    assert_eq!(planned["parameters"]["ImageId"], json!(IMAGE_ID));
    assert_eq!(planned["parameters"]["KeyName"], json!("ops"));
    assert_eq!(planned["parameters"]["UserData"], json!("#!/bin/sh\n"));
    assert_eq!(planned["parameters"]["MinCount"], json!(1));
}

#[test]
fn plan_run_without_image_names_the_fallback() {
    let tmp = home();
    let mut cmd = isolated_cmd(&tmp);
    cmd.args(["plan", "run"]);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(contains("missing image id: pass --image or set EC2KIT_DEFAULT_IMAGE_ID"));
}

#[test]
fn plan_run_rejects_zero_count() {
    let tmp = home();
    let mut cmd = isolated_cmd(&tmp);
    cmd.args(["plan", "run", "--image", IMAGE_ID, "--count", "0"]);

    cmd.assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(contains("MinCount must be at least 1, got 0"));
}

#[test]
fn plan_run_rejects_unknown_type() {
    let tmp = home();
    let mut cmd = isolated_cmd(&tmp);
    cmd.args(["plan", "run", "--image", IMAGE_ID, "--type", "m5.larg"]);

    cmd.assert()
        .failure()
        .stderr(contains("unknown instance type 'm5.larg'"));
}

#[test]
fn plan_terminate_renders_ids() {
    let tmp = home();
    let mut cmd = isolated_cmd(&tmp);
    cmd.args(["plan", "terminate", INSTANCE_ID, OTHER_INSTANCE_ID, INSTANCE_ID]);

    assert_eq!(
        stdout_json(&mut cmd),
        json!({
            "operation": "TerminateInstances",
            "parameters": { "InstanceIds": [INSTANCE_ID, OTHER_INSTANCE_ID] },
        })
    );
}

#[test]
fn plan_terminate_without_ids_fails() {
    let tmp = home();
    let mut cmd = isolated_cmd(&tmp);
    cmd.args(["plan", "terminate"]);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(contains("InstanceIds must contain at least one instance id"));
}

#[test]
fn plan_describe_renders_filters() {
    let tmp = home();
    let mut cmd = isolated_cmd(&tmp);
    cmd.args([
        "plan",
        "describe",
        "--filter",
        "instance-state-name=running,stopped",
        "--max-results",
        "20",
    ]);

    assert_eq!(
        stdout_json(&mut cmd),
        json!({
            "operation": "DescribeInstances",
            "parameters": {
                "Filters": [
                    { "Name": "instance-state-name", "Values": ["running", "stopped"] },
                ],
                "MaxResults": 20,
            },
        })
    );
}

#[test]
fn plan_describe_rejects_malformed_filter() {
    let tmp = home();
    let mut cmd = isolated_cmd(&tmp);
    cmd.args(["plan", "describe", "--filter", "running"]);

    cmd.assert()
        .failure()
        .stderr(contains("invalid filter 'running'"));
}
