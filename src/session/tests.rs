use crate::config::{HistoryConfig, ViewerConfig};
use crate::controls::{Binding, ControlKind, ControlValue, UpdateSource};
use crate::history::PushOutcome;
use crate::model::{
    CursorLocation, LocationAxis, SliceDisplayType, TracingLayer, Vec2, ViewId, VolumeExtent,
};
use crate::trace::TracePoint;

use super::{Session, SessionError};

fn session() -> Session {
    let config = ViewerConfig {
        volume: VolumeExtent {
            width: 8,
            height: 8,
            slices: 5,
            time_points: 2,
        },
        ..ViewerConfig::default()
    };
    Session::new(&config).expect("session")
}

#[test]
fn invalid_config_is_rejected() {
    let config = ViewerConfig {
        history: HistoryConfig {
            undo_limit: Some(0),
            ..HistoryConfig::default()
        },
        ..ViewerConfig::default()
    };
    assert!(matches!(Session::new(&config), Err(SessionError::Config(_))));
}

#[test]
fn added_control_shows_current_state() {
    let mut session = session();
    let contrast = session
        .add_control(ControlKind::Slider, "contrast", Binding::Contrast(ViewId::Axial))
        .expect("bind contrast");
    assert_eq!(
        session.viewer().controls().value(contrast),
        Some(ControlValue::Int(100))
    );
    assert_eq!(session.dispatch_events(), 0);
    assert!(session.history().is_empty());
}

#[test]
fn user_slider_edit_becomes_undoable_command() {
    let mut session = session();
    let slider = session
        .add_control(ControlKind::Slider, "brightness", Binding::Brightness(ViewId::Axial))
        .expect("bind brightness");
    session.dispatch_events();

    session
        .viewer_mut()
        .controls_mut()
        .set(slider, ControlValue::Int(40), UpdateSource::User)
        .expect("slider accepts int");
    assert_eq!(session.dispatch_events(), 1);
    assert_eq!(session.viewer().view(ViewId::Axial).brightness(), 0.4);
    assert_eq!(session.history().descriptions(), vec!["Brightness set to 40%"]);

    assert_eq!(session.undo().as_deref(), Some("Brightness set to 40%"));
    assert_eq!(
        session.viewer().controls().value(slider),
        Some(ControlValue::Int(0))
    );
    // The mirrored write from undo must not come back as a new command.
    assert_eq!(session.dispatch_events(), 0);
    assert_eq!(session.history().len(), 1);
    assert!(session.history().can_redo());
}

#[test]
fn checking_radio_button_sets_display_type() {
    let mut session = session();
    let group = ControlKind::RadioButton { group: 1 };
    let fat = session
        .add_control(
            group,
            "Fat only",
            Binding::DisplayType(ViewId::Axial, SliceDisplayType::FatOnly),
        )
        .expect("bind fat");
    let water = session
        .add_control(
            group,
            "Water only",
            Binding::DisplayType(ViewId::Axial, SliceDisplayType::WaterOnly),
        )
        .expect("bind water");
    assert_eq!(
        session.viewer().controls().value(fat),
        Some(ControlValue::Checked(true))
    );
    session.dispatch_events();

    session
        .viewer_mut()
        .controls_mut()
        .set(water, ControlValue::Checked(true), UpdateSource::User)
        .expect("radio accepts checked");
    assert_eq!(session.dispatch_events(), 1);
    assert_eq!(
        session.viewer().view(ViewId::Axial).display_type(),
        SliceDisplayType::WaterOnly
    );

    session.undo();
    let controls = session.viewer().controls();
    assert_eq!(controls.value(fat), Some(ControlValue::Checked(true)));
    assert_eq!(controls.value(water), Some(ControlValue::Checked(false)));
}

#[test]
fn slice_spin_box_moves_cursor() {
    let mut session = session();
    let axial = session
        .add_control(ControlKind::SpinBox, "axial", Binding::Slice(LocationAxis::Axial))
        .expect("bind slice");
    session
        .viewer_mut()
        .controls_mut()
        .set(axial, ControlValue::Int(4), UpdateSource::User)
        .expect("spin box accepts int");
    assert_eq!(session.dispatch_events(), 1);
    assert_eq!(session.viewer().location().axial, 4);
    assert_eq!(session.history().descriptions(), vec!["Move to axial slice 4"]);
}

#[test]
fn out_of_range_slice_event_is_ignored() {
    let mut session = session();
    let axial = session
        .add_control(ControlKind::SpinBox, "axial", Binding::Slice(LocationAxis::Axial))
        .expect("bind slice");
    session
        .viewer_mut()
        .controls_mut()
        .set(axial, ControlValue::Int(5), UpdateSource::User)
        .expect("spin box accepts int");
    assert_eq!(session.dispatch_events(), 0);
    assert_eq!(session.viewer().location().axial, 0);
}

#[test]
fn unbound_control_events_are_ignored() {
    let mut session = session();
    let stray = session.viewer_mut().controls_mut().add(ControlKind::Slider, "stray");
    session
        .viewer_mut()
        .controls_mut()
        .set(stray, ControlValue::Int(10), UpdateSource::User)
        .expect("slider accepts int");
    assert_eq!(session.dispatch_events(), 0);
    assert!(session.history().is_empty());
}

#[test]
fn gestures_separate_pan_entries() {
    let mut session = session();
    let first = session.begin_gesture();
    session.pan(ViewId::Coronal, Vec2::new(0.1, 0.0), first);
    session.pan(ViewId::Coronal, Vec2::new(0.1, 0.0), first);
    let second = session.begin_gesture();
    assert_ne!(first, second);
    assert_eq!(
        session.pan(ViewId::Coronal, Vec2::new(0.0, 0.1), second),
        PushOutcome::Appended
    );
    assert_eq!(session.history().len(), 2);
    assert_eq!(
        session.history().descriptions()[0],
        "Move coronal image by (20%, 0%)"
    );
}

#[test]
fn traces_use_axial_layer_and_current_slice() {
    let mut session = session();
    session.set_tracing_layer(ViewId::Axial, TracingLayer::Vat);
    session
        .move_cursor(CursorLocation::unchanged().with_axis(LocationAxis::Axial, 3))
        .expect("slice in range");
    session
        .add_trace_points([TracePoint::new(2, 2), TracePoint::new(3, 2)])
        .expect("points in range");
    assert!(session.viewer().traces().is_set(TracingLayer::Vat, 2, 2, 3));
    assert_eq!(session.viewer().traces().layer(TracingLayer::Vat).count(), 2);

    session
        .erase_trace_points([TracePoint::new(2, 2)])
        .expect("points in range");
    assert_eq!(session.viewer().traces().layer(TracingLayer::Vat).count(), 1);
    assert_eq!(
        session.history().descriptions()[2..],
        ["Added points to VAT layer", "Erased points from VAT layer"]
    );

    session.undo_to(0);
    assert_eq!(session.viewer().traces().layer(TracingLayer::Vat).count(), 0);
    assert_eq!(
        session.viewer().view(ViewId::Axial).tracing_layer(),
        TracingLayer::Eat
    );
}

#[test]
fn trace_points_outside_slice_fail() {
    let mut session = session();
    let error = session
        .add_trace_points([TracePoint::new(8, 0)])
        .expect_err("x out of range");
    assert!(matches!(error, SessionError::Trace(_)));
    assert!(session.history().is_empty());
}

#[test]
fn move_cursor_rejects_out_of_range_time() {
    let mut session = session();
    let request = CursorLocation::unchanged().with_axis(LocationAxis::Time, 2);
    assert!(matches!(
        session.move_cursor(request),
        Err(SessionError::Model(_))
    ));
}

#[test]
fn mirrored_events_do_not_accumulate() {
    let mut session = session();
    session
        .add_control(ControlKind::Slider, "brightness", Binding::Brightness(ViewId::Axial))
        .expect("bind brightness");
    session
        .add_control(ControlKind::SpinBox, "axial", Binding::Slice(LocationAxis::Axial))
        .expect("bind slice");
    assert!(session.viewer().controls().pending_events().is_empty());

    session.set_brightness(ViewId::Axial, 0.3);
    session.set_brightness(ViewId::Axial, 0.6);
    session
        .move_cursor(CursorLocation::unchanged().with_axis(LocationAxis::Axial, 2))
        .expect("slice in range");
    session.undo();
    session.redo();
    session.set_history_index(0);
    session.set_history_index(2);
    assert!(session.viewer().controls().pending_events().is_empty());
}

#[test]
fn user_edits_survive_history_mirroring() {
    let mut session = session();
    let slider = session
        .add_control(ControlKind::Slider, "contrast", Binding::Contrast(ViewId::Axial))
        .expect("bind contrast");
    session
        .viewer_mut()
        .controls_mut()
        .set(slider, ControlValue::Int(150), UpdateSource::User)
        .expect("slider accepts int");
    session.set_brightness(ViewId::Axial, 0.2);

    let pending = session.viewer().controls().pending_events();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].source, UpdateSource::User);
    assert_eq!(session.dispatch_events(), 1);
    assert_eq!(session.viewer().view(ViewId::Axial).contrast(), 1.5);
}
