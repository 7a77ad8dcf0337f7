use std::collections::HashMap;

use tracing::{debug, info};

use crate::config::ViewerConfig;
use crate::history::{GestureId, PushOutcome};
use crate::model::{Vec2, ViewId};
use crate::session::{Session, SessionError};

use super::{ReplayReport, Result, ScriptAction, ScriptError, SessionScript, StepReport, ViewReport};

fn outcome_label(outcome: PushOutcome) -> &'static str {
    match outcome {
        PushOutcome::Appended => "appended",
        PushOutcome::Merged => "merged",
        PushOutcome::Collapsed => "collapsed",
    }
}

fn pushed(session: &Session, outcome: PushOutcome) -> (&'static str, Option<String>) {
    let description = match outcome {
        PushOutcome::Collapsed => None,
        PushOutcome::Appended | PushOutcome::Merged => session.history().undo_description(),
    };
    (outcome_label(outcome), description)
}

/// Replays `script` against a new session built from `config`.
pub fn replay(script: &SessionScript, config: &ViewerConfig) -> Result<(Session, ReplayReport)> {
    script.validate()?;
    let mut session = Session::new(config)?;
    let mut gestures: HashMap<u64, GestureId> = HashMap::new();
    let mut steps = Vec::with_capacity(script.actions.len());

    for (index, action) in script.actions.iter().enumerate() {
        let fail = |source: SessionError| ScriptError::Action {
            index,
            action: action.name(),
            source,
        };
        let (outcome, description) = match action {
            ScriptAction::Pan {
                view,
                dx,
                dy,
                gesture,
            } => {
                let gesture = match gesture {
                    Some(label) => *gestures
                        .entry(*label)
                        .or_insert_with(|| session.begin_gesture()),
                    None => session.begin_gesture(),
                };
                let outcome = session.pan(*view, Vec2::new(*dx, *dy), gesture);
                pushed(&session, outcome)
            }
            ScriptAction::Zoom { view, delta } => {
                let outcome = session.zoom(*view, *delta);
                pushed(&session, outcome)
            }
            ScriptAction::ResetView => {
                let outcome = session.reset_view();
                pushed(&session, outcome)
            }
            ScriptAction::Set { view, value } => {
                let outcome = session.set_property(*view, *value);
                pushed(&session, outcome)
            }
            ScriptAction::MoveCursor {
                sagittal,
                coronal,
                axial,
                time,
            } => {
                let request = ScriptAction::cursor_request(*sagittal, *coronal, *axial, *time);
                let outcome = session.move_cursor(request).map_err(fail)?;
                pushed(&session, outcome)
            }
            ScriptAction::AddPoints { points } => {
                let outcome = session
                    .add_trace_points(points.iter().copied())
                    .map_err(fail)?;
                pushed(&session, outcome)
            }
            ScriptAction::ErasePoints { points } => {
                let outcome = session
                    .erase_trace_points(points.iter().copied())
                    .map_err(fail)?;
                pushed(&session, outcome)
            }
            ScriptAction::Undo => match session.undo() {
                Some(description) => ("undone", Some(description)),
                None => ("none", None),
            },
            ScriptAction::Redo => match session.redo() {
                Some(description) => ("redone", Some(description)),
                None => ("none", None),
            },
            ScriptAction::UndoTo { index: target } => {
                let steps = session.undo_to(*target);
                let label = if steps == 0 { "none" } else { "undone" };
                (label, session.history().redo_description())
            }
        };
        debug!(index, action = action.name(), outcome, "replayed action");
        steps.push(StepReport {
            action: action.name().to_string(),
            outcome: outcome.to_string(),
            description,
        });
    }

    // Replays run headless; nothing drains the redraw queue.
    session.viewer_mut().redraw_mut().take();

    let viewer = session.viewer();
    let report = ReplayReport {
        script_name: script.name.clone(),
        steps,
        views: ViewId::ALL
            .iter()
            .map(|view| ViewReport {
                view: *view,
                state: viewer.view(*view).clone(),
            })
            .collect(),
        history: session.history().descriptions(),
        history_index: session.history().index(),
        trace_counts: viewer.traces().counts(),
    };
    info!(
        actions = script.actions.len(),
        entries = report.history.len(),
        "replay finished"
    );
    Ok((session, report))
}
