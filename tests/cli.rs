use assert_cmd::Command;
use predicates::prelude::*;

fn rmix() -> Command {
    let mut cmd = Command::cargo_bin("rmix").unwrap();
    cmd.env_remove("RMIX_METHOD").env_remove("RMIX_LOG");
    cmd
}

#[test]
fn test_enc_defaults_to_morse() {
    rmix()
        .args(["enc", "-i", "SOS"])
        .assert()
        .success()
        .stdout("... --- ...\n");
}

#[test]
fn test_dec_a1z26() {
    rmix()
        .args(["dec", "-m", "A1Z26", "-i", "1 2 | 3 4"])
        .assert()
        .success()
        .stdout("AB CD\n");
}

#[test]
fn test_method_from_env() {
    rmix()
        .env("RMIX_METHOD", "reverse")
        .args(["enc", "-i", "hello"])
        .assert()
        .success()
        .stdout("olleh\n");
}

#[test]
fn test_reads_stdin_without_trailing_newline() {
    rmix()
        .args(["enc", "-m", "a1z26"])
        .write_stdin("CAB\n")
        .assert()
        .success()
        .stdout("3 1 2\n");
}

#[test]
fn test_unknown_method_exit_code() {
    rmix()
        .args(["enc", "-m", "NoSuchMethod", "-i", "x"])
        .assert()
        .code(13)
        .stderr(predicate::str::contains("unknown method: NoSuchMethod"));
}

#[test]
fn test_out_of_range_exit_code() {
    rmix()
        .args(["dec", "-m", "A1Z26", "-i", "1 27"])
        .assert()
        .code(11)
        .stderr(predicate::str::contains("outside 1-26"));
}

#[test]
fn test_list() {
    rmix()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Morse Code"))
        .stdout(predicate::str::contains("Polar Cenit"));
}

#[test]
fn test_list_json() {
    let output = rmix().args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Morse Code", "A1Z26", "Reverse Cipher", "Polar Cenit"]);
}

#[test]
fn test_info() {
    rmix()
        .args(["info", "morse"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unmapped:    Drop"))
        .stdout(predicate::str::contains("Word marker: /"));
}

#[test]
fn test_enc_json() {
    let output = rmix()
        .args(["enc", "-m", "Polar Cenit", "-i", "Polar", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["schema_version"], 1);
    assert_eq!(value["direction"], "encode");
    assert_eq!(value["output"], "Cenit");
}

#[test]
fn test_enc_all() {
    rmix()
        .args(["enc", "--all", "-i", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("olleh"))
        .stdout(predicate::str::contains("8 5 12 12 15"));
}

#[test]
fn test_verify() {
    rmix()
        .args(["verify", "-m", "A1Z26", "-i", "1 2 3"])
        .assert()
        .success()
        .stdout("valid\n");
    rmix()
        .args(["verify", "-m", "A1Z26", "-i", "1 99"])
        .assert()
        .code(11)
        .stdout(predicate::str::starts_with("invalid:"));
}

#[test]
fn test_verify_rejects_non_morse() {
    rmix()
        .args(["verify", "-m", "morse", "-i", "hello"])
        .assert()
        .code(10)
        .stdout(predicate::str::contains("unknown morse symbol: hello"));
    rmix()
        .args(["verify", "-m", "morse", "-i", "... --- ..."])
        .assert()
        .success()
        .stdout("valid\n");
}

#[test]
fn test_swap_command() {
    rmix()
        .args(["swap", "-s", "ABC", "-t", "XYZ", "-i", "Cab"])
        .assert()
        .success()
        .stdout("Zxy\n");
}

#[test]
fn test_swap_invalid_alphabet() {
    rmix()
        .args(["swap", "-s", "ABC", "-t", "XY", "-i", "Cab"])
        .assert()
        .code(14)
        .stderr(predicate::str::contains("invalid alphabet mapping"));
}

#[test]
fn test_output_to_file() {
    let dir = std::env::temp_dir().join(format!("rmix-cli-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("out.txt");

    rmix()
        .args(["enc", "-m", "reverse", "-i", "abc", "-o"])
        .arg(format!("@{}", path.display()))
        .assert()
        .success()
        .stdout("");

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "cba");
    std::fs::remove_dir_all(&dir).unwrap();
}
