use integration_tests::harness::{CaptureLog, SUCCESSFUL, table_rows};
use mftstatus_core::capture::{ListQuery, Query, RenderOptions, run_query};
use mftstatus_core::locate::{LocatorInputs, resolve_log_path};
use pretty_assertions::assert_eq;
use std::fs;

#[test]
fn derived_path_points_at_the_agent_capture_log() {
    // Arrange
    let log = CaptureLog::new();
    let data_root = log.dir().join("bfg");
    let logs_dir = data_root.join("mqft/logs/COORDQM/agents/SRC/logs");
    fs::create_dir_all(&logs_dir).unwrap();
    let capture = CaptureLog::new().completed("TX1", SUCCESSFUL).write();
    fs::copy(capture.path(), logs_dir.join("capture0.log")).unwrap();

    let agent_config = log.dir().join("agent.json");
    fs::write(&agent_config, r#"{ "coordinationQMgr": { "name": "COORDQM" } }"#).unwrap();

    let inputs = LocatorInputs {
        capture_log: None,
        agent_config_file: Some(agent_config),
        coordination_qm: None,
        agent_name: Some("SRC".to_string()),
        data_root: Some(data_root),
    };

    // Act
    let path = resolve_log_path(&inputs).unwrap();
    let mut out = Vec::new();
    run_query(
        &path,
        &Query::List(ListQuery::all()),
        RenderOptions::default(),
        &mut out,
    )
    .unwrap();

    // Assert
    assert_eq!(path, logs_dir.join("capture0.log"));
    assert_eq!(
        table_rows(&String::from_utf8(out).unwrap()),
        vec![("TX1".to_string(), "Successful".to_string())]
    );
}

#[test]
fn explicit_path_is_used_as_is() {
    let log = CaptureLog::new().completed("TX1", SUCCESSFUL).write();
    let inputs = LocatorInputs {
        capture_log: Some(log.path()),
        ..LocatorInputs::default()
    };

    assert_eq!(resolve_log_path(&inputs).unwrap(), log.path());
}
