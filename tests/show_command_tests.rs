//! Show command tests

mod common;

use predicates::prelude::*;

#[test]
fn test_show_static_tool_uses_hosted_fallback() {
    let workspace = common::TestWorkspace::with_sample_manifest();
    workspace
        .cmd()
        .args(["show", "windirstat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("WinDirStat"))
        .stdout(predicate::str::contains("Maintenance"))
        .stdout(predicate::str::contains("msi"))
        .stdout(predicate::str::contains("WinDirStat.msi"))
        .stdout(predicate::str::contains(format!(
            "{}/static/WinDirStat-x64.msi",
            workspace.offline_base
        )));
}

#[test]
fn test_show_static_tool_found_locally() {
    let workspace = common::TestWorkspace::with_sample_manifest();
    workspace.write_file("static/vlc-3.0.18.exe", "MZ");
    workspace
        .cmd()
        .args(["show", "VLC Media Player"])
        .assert()
        .success()
        .stdout(predicate::str::contains("VLC_Media_Player.exe"))
        .stdout(predicate::str::contains("(no download)"));
}

#[test]
fn test_show_dynamic_tool() {
    let workspace = common::TestWorkspace::with_sample_manifest();
    workspace
        .cmd()
        .args(["show", "Malwarebytes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dynamic"))
        .stdout(predicate::str::contains("/VERYSILENT /NORESTART"))
        .stdout(predicate::str::contains(
            "https://data-cdn.mbamupdates.com/web/mb-windows/MBSetup.exe",
        ));
}

#[test]
fn test_show_unknown_tool() {
    let workspace = common::TestWorkspace::with_sample_manifest();
    workspace
        .cmd()
        .args(["show", "Notepad++"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Tool not found: Notepad++"));
}

#[test]
fn test_show_inferred_installer_warns() {
    let workspace = common::TestWorkspace::new();
    workspace.write_manifest(
        r#"[{"name": "Agent", "url": "https://x/download", "type": "dynamic", "category": "Security"}]"#,
    );
    workspace
        .cmd()
        .args(["show", "Agent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("inferred from source suffix"))
        .stderr(predicate::str::contains("inferred from source suffix"));
}

#[test]
fn test_show_declared_installer() {
    let workspace = common::TestWorkspace::new();
    workspace.write_manifest(
        r#"[{"name": "Agent", "url": "https://x/download", "type": "dynamic", "category": "Security", "installer": "msi"}]"#,
    );
    workspace
        .cmd()
        .args(["show", "Agent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Agent.msi"))
        .stdout(predicate::str::contains("inferred").not());
}
