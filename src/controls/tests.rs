use crate::model::{ColorMap, DrawMode, PropertyValue, SliceDisplayType, ViewId};

use super::{
    Binding, ControlBindings, ControlError, ControlKind, ControlPanel, ControlValue, MirrorWrite,
    UpdateSource, from_percent, percent,
};

#[test]
fn set_queues_tagged_event_only_on_change() {
    let mut panel = ControlPanel::new();
    let slider = panel.add(ControlKind::Slider, "brightness");
    assert!(
        panel
            .set(slider, ControlValue::Int(40), UpdateSource::User)
            .expect("set")
    );
    assert!(
        !panel
            .set(slider, ControlValue::Int(40), UpdateSource::User)
            .expect("set")
    );
    let events = panel.take_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].source, UpdateSource::User);
    assert_eq!(events[0].value, ControlValue::Int(40));
    assert!(panel.pending_events().is_empty());
}

#[test]
fn mistyped_values_are_rejected() {
    let mut panel = ControlPanel::new();
    let combo = panel.add(ControlKind::ComboBox, "color map");
    let error = panel
        .set(combo, ControlValue::Checked(true), UpdateSource::User)
        .expect_err("combo boxes hold indices");
    assert!(matches!(error, ControlError::ValueMismatch { .. }));
}

#[test]
fn checking_radio_unchecks_group_peers() {
    let mut panel = ControlPanel::new();
    let fat = panel.add(ControlKind::RadioButton { group: 1 }, "Fat only");
    let water = panel.add(ControlKind::RadioButton { group: 1 }, "Water only");
    let other = panel.add(ControlKind::RadioButton { group: 2 }, "EAT");
    panel
        .set(fat, ControlValue::Checked(true), UpdateSource::User)
        .expect("check fat");
    panel
        .set(other, ControlValue::Checked(true), UpdateSource::User)
        .expect("check other group");
    panel
        .set(water, ControlValue::Checked(true), UpdateSource::History)
        .expect("check water");
    assert_eq!(panel.value(fat), Some(ControlValue::Checked(false)));
    assert_eq!(panel.value(water), Some(ControlValue::Checked(true)));
    assert_eq!(panel.value(other), Some(ControlValue::Checked(true)));
    let history_events = panel
        .take_events()
        .into_iter()
        .filter(|event| event.source == UpdateSource::History)
        .count();
    assert_eq!(history_events, 2);
}

#[test]
fn blocked_controls_stay_silent() {
    let mut panel = ControlPanel::new();
    let spin = panel.add(ControlKind::SpinBox, "contrast");
    let previous = panel.block_notifications(spin, true).expect("block");
    assert!(!previous);
    panel
        .set(spin, ControlValue::Int(120), UpdateSource::User)
        .expect("set");
    assert!(panel.pending_events().is_empty());
    assert!(panel.block_notifications(spin, previous).expect("restore"));
    assert_eq!(panel.value(spin), Some(ControlValue::Int(120)));
}

#[test]
fn percent_conversion_rounds() {
    assert_eq!(percent(0.29), 29);
    assert_eq!(percent(-0.5), -50);
    assert!((from_percent(29) - 0.29).abs() < f32::EPSILON);
}

#[test]
fn bindings_reject_incompatible_controls() {
    let mut panel = ControlPanel::new();
    let check = panel.add(ControlKind::CheckBox, "brightness");
    let mut bindings = ControlBindings::new();
    let error = bindings
        .bind(Binding::Brightness(ViewId::Axial), check, ControlKind::CheckBox)
        .expect_err("check boxes cannot show brightness");
    assert!(matches!(error, ControlError::UnsupportedBinding { .. }));
}

#[test]
fn rebinding_moves_control() {
    let mut panel = ControlPanel::new();
    let slider = panel.add(ControlKind::Slider, "value");
    let mut bindings = ControlBindings::new();
    bindings
        .bind(Binding::Brightness(ViewId::Axial), slider, ControlKind::Slider)
        .expect("bind brightness");
    bindings
        .bind(Binding::Contrast(ViewId::Axial), slider, ControlKind::Slider)
        .expect("bind contrast");
    assert!(
        bindings
            .controls_for(Binding::Brightness(ViewId::Axial))
            .is_empty()
    );
    assert_eq!(
        bindings.binding_of(slider),
        Some(Binding::Contrast(ViewId::Axial))
    );
}

#[test]
fn writes_cover_every_bound_control() {
    let mut panel = ControlPanel::new();
    let slider = panel.add(ControlKind::Slider, "brightness");
    let spin = panel.add(ControlKind::SpinBox, "brightness");
    let combo = panel.add(ControlKind::ComboBox, "primary map");
    let erase = panel.add(ControlKind::PushButton { group: 3 }, "Erase");
    let pages = panel.add(ControlKind::StackedPages, "tools");
    let mut bindings = ControlBindings::new();
    let axial = ViewId::Axial;
    for (binding, id) in [
        (Binding::Brightness(axial), slider),
        (Binding::Brightness(axial), spin),
        (Binding::PrimaryColorMap(axial), combo),
        (Binding::DrawMode(axial, DrawMode::Erase), erase),
        (Binding::DrawModePages(axial), pages),
    ] {
        let kind = panel.get(id).expect("control").kind;
        bindings.bind(binding, id, kind).expect("bind");
    }

    assert_eq!(
        bindings.writes_for(axial, &PropertyValue::Brightness(0.4)),
        vec![
            MirrorWrite::new(slider, ControlValue::Int(40)),
            MirrorWrite::new(spin, ControlValue::Int(40)),
        ]
    );
    assert_eq!(
        bindings.writes_for(axial, &PropertyValue::PrimaryColorMap(ColorMap::Jet)),
        vec![MirrorWrite::new(combo, ControlValue::Index(6))]
    );
    assert_eq!(
        bindings.writes_for(axial, &PropertyValue::DrawMode(DrawMode::Erase)),
        vec![
            MirrorWrite::new(erase, ControlValue::Checked(true)),
            MirrorWrite::new(pages, ControlValue::Index(1)),
        ]
    );
    assert!(
        bindings
            .writes_for(
                ViewId::Coronal,
                &PropertyValue::DisplayType(SliceDisplayType::WaterOnly)
            )
            .is_empty()
    );
}

#[test]
fn discard_events_keeps_other_sources() {
    let mut panel = ControlPanel::new();
    let slider = panel.add(ControlKind::Slider, "brightness");
    let spin = panel.add(ControlKind::SpinBox, "axial");
    panel
        .set(slider, ControlValue::Int(20), UpdateSource::History)
        .expect("set");
    panel
        .set(spin, ControlValue::Int(3), UpdateSource::User)
        .expect("set");
    panel
        .set(slider, ControlValue::Int(30), UpdateSource::History)
        .expect("set");

    assert_eq!(panel.discard_events(UpdateSource::History), 2);
    let events = panel.take_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].control, spin);
    assert_eq!(panel.discard_events(UpdateSource::History), 0);
}
