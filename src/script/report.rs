use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{ViewId, ViewState};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StepReport {
    pub action: String,
    /// `appended`, `merged`, `collapsed`, `undone`, `redone` or `none`.
    pub outcome: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewReport {
    pub view: ViewId,
    pub state: ViewState,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReplayReport {
    pub script_name: Option<String>,
    pub steps: Vec<StepReport>,
    pub views: Vec<ViewReport>,
    pub history: Vec<String>,
    pub history_index: usize,
    pub trace_counts: BTreeMap<String, usize>,
}
