use serde::{Deserialize, Serialize};

use crate::model::{ScaleLimits, ViewDefaults, VolumeExtent};

use super::{ConfigError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of entries kept; `None` keeps everything.
    pub undo_limit: Option<usize>,
    /// Remove a merged entry once its old and new values coincide.
    pub drop_no_op_merges: bool,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            undo_limit: None,
            drop_no_op_merges: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ViewerConfig {
    pub volume: VolumeExtent,
    pub scale: ScaleLimits,
    pub history: HistoryConfig,
    pub defaults: ViewDefaults,
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.volume.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "volume must not be empty, got {}x{}x{} with {} time points",
                self.volume.width, self.volume.height, self.volume.slices, self.volume.time_points
            )));
        }
        if self.scale.min.is_nan() || self.scale.min <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "`scale.min` must be positive, got {}",
                self.scale.min
            )));
        }
        if self.scale.max.is_nan() || self.scale.min >= self.scale.max {
            return Err(ConfigError::Invalid(format!(
                "`scale.max` ({}) must be greater than `scale.min` ({})",
                self.scale.max, self.scale.min
            )));
        }
        if self.history.undo_limit == Some(0) {
            return Err(ConfigError::Invalid(
                "`history.undo_limit` must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }
}
