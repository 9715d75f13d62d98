use assert_cmd::Command;

#[test]
fn check_cargo_test() {
    assert_eq!(2 + 2, 4);
}

#[test]
fn help_flag_succeeds() {
    let mut cmd = Command::cargo_bin("qcmesh").unwrap();
    cmd.arg("--help").assert().success();
}

#[test]
fn missing_config_file_fails() {
    let mut cmd = Command::cargo_bin("qcmesh").unwrap();
    cmd.arg("--config")
        .arg("definitely/not/a/config.yaml")
        .assert()
        .failure();
}

#[test]
fn malformed_config_file_fails() {
    let dir = std::env::temp_dir().join(format!("qcmesh_cli_malformed_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let cfg_path = dir.join("config.yaml");
    std::fs::write(&cfg_path, "radius: [not, a, scalar]\n").unwrap();

    let mut cmd = Command::cargo_bin("qcmesh").unwrap();
    cmd.arg("--config")
        .arg(cfg_path.to_str().unwrap())
        .assert()
        .failure();
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn invalid_counts_fail_before_any_output() {
    let dir = std::env::temp_dir().join(format!("qcmesh_cli_counts_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let cfg_path = dir.join("config.yaml");
    std::fs::write(&cfg_path, "axial_cells: 0\n").unwrap();

    let mut cmd = Command::cargo_bin("qcmesh").unwrap();
    cmd.arg("--config")
        .arg(cfg_path.to_str().unwrap())
        .assert()
        .failure();
    assert!(!dir.join("system").join("blockMeshDict").exists());
    std::fs::remove_dir_all(&dir).unwrap();
}
