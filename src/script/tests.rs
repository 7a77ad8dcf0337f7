use tempfile::tempdir;

use crate::config::ViewerConfig;
use crate::model::{PropertyValue, TracingLayer, ViewId, VolumeExtent};
use crate::trace::TracePoint;

use super::{
    ReplayReport, ScriptAction, ScriptError, SessionScript, load_script, replay, save_report,
};

fn config() -> ViewerConfig {
    ViewerConfig {
        volume: VolumeExtent {
            width: 10,
            height: 10,
            slices: 6,
            time_points: 1,
        },
        ..ViewerConfig::default()
    }
}

const BRIGHTNESS_SCRIPT: &str = r#"{
  "name": "brightness drag",
  "actions": [
    {"action": "set", "view": "axial", "value": {"brightness": 0.2}},
    {"action": "set", "view": "axial", "value": {"brightness": 0.4}},
    {"action": "zoom", "view": "axial", "delta": 0.2},
    {"action": "zoom", "view": "axial", "delta": 2.5},
    {"action": "undo"}
  ]
}"#;

#[test]
fn json_script_replays_in_order() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("script.json");
    std::fs::write(&path, BRIGHTNESS_SCRIPT).expect("write script");
    let script = load_script(&path).expect("load script");

    let (session, report) = replay(&script, &config()).expect("replay");
    assert_eq!(report.script_name.as_deref(), Some("brightness drag"));
    let outcomes: Vec<&str> = report.steps.iter().map(|step| step.outcome.as_str()).collect();
    assert_eq!(
        outcomes,
        vec!["appended", "merged", "appended", "merged", "undone"]
    );
    assert_eq!(
        report.history,
        vec!["Brightness set to 40%", "Scale axial image by 200%"]
    );
    assert_eq!(report.history_index, 1);
    assert_eq!(session.viewer().view(ViewId::Axial).scale(), 1.0);
    assert_eq!(report.views[0].state.brightness(), 0.4);
}

#[test]
fn yaml_script_with_gestures_and_traces() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("script.yaml");
    std::fs::write(
        &path,
        "name: tracing\nactions:\n\
         - {action: pan, view: coronal, dx: 0.1, dy: 0.0, gesture: 7}\n\
         - {action: pan, view: coronal, dx: 0.1, dy: 0.0, gesture: 7}\n\
         - {action: pan, view: coronal, dx: 0.1, dy: 0.0}\n\
         - {action: move_cursor, axial: 2}\n\
         - action: add_points\n  points: [{x: 1, y: 1}, {x: 2, y: 1}]\n\
         - action: erase_points\n  points: [{x: 1, y: 1}]\n",
    )
    .expect("write script");
    let script = load_script(&path).expect("load script");

    let (session, report) = replay(&script, &config()).expect("replay");
    assert_eq!(report.history.len(), 5);
    assert_eq!(report.history[0], "Move coronal image by (20%, 0%)");
    assert_eq!(report.history[2], "Move to axial slice 2");
    assert_eq!(report.trace_counts.get("EAT"), Some(&1));
    assert!(session.viewer().traces().is_set(TracingLayer::Eat, 2, 1, 2));
    assert!(!session.viewer().redraw().is_pending());
}

#[test]
fn failing_action_reports_its_index() {
    let script = SessionScript {
        name: None,
        actions: vec![
            ScriptAction::Set {
                view: ViewId::Axial,
                value: PropertyValue::Contrast(1.5),
            },
            ScriptAction::AddPoints {
                points: vec![TracePoint::new(40, 0)],
            },
        ],
    };
    let error = replay(&script, &config()).expect_err("point outside volume");
    assert!(matches!(error, ScriptError::Action { index: 1, .. }));
    assert!(error.to_string().contains("add_points"));
}

#[test]
fn empty_script_is_rejected() {
    let script = SessionScript {
        name: None,
        actions: vec![],
    };
    assert!(matches!(script.validate(), Err(ScriptError::Parse(_))));
}

#[test]
fn negative_cursor_request_is_rejected() {
    let script = SessionScript {
        name: None,
        actions: vec![ScriptAction::MoveCursor {
            sagittal: None,
            coronal: Some(-2),
            axial: None,
            time: None,
        }],
    };
    let error = script.validate().expect_err("negative slice");
    assert!(error.to_string().contains("negative slice -2"));
}

#[test]
fn report_round_trips_through_yaml() {
    let script = SessionScript {
        name: Some("short".to_string()),
        actions: vec![ScriptAction::ResetView, ScriptAction::Redo],
    };
    let (_, report) = replay(&script, &config()).expect("replay");
    assert_eq!(report.steps[1].outcome, "none");

    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("report.yml");
    save_report(&path, &report).expect("save report");
    let raw = std::fs::read_to_string(&path).expect("read report");
    let restored: ReplayReport = serde_yaml::from_str(&raw).expect("parse report");
    assert_eq!(restored, report);
}
