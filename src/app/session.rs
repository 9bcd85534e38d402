use crate::core::controller::TagController;
use crate::domain::model::{PointId, PointSeed, Position, Surface};
use crate::domain::ports::Renderer;
use crate::utils::error::{Result, TagError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One host operation in a session script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    NewPoint,
    /// Click at a pixel offset on the current surface.
    Click { x: f64, y: f64 },
    Select { id: PointId },
    Remove { id: PointId },
    Position {
        id: PointId,
        x: Option<f64>,
        y: Option<f64>,
    },
    Label { id: PointId, text: String },
    SaveAll,
    Disable,
    Enable,
    Seed {
        #[serde(default)]
        points: Vec<PointSeed>,
    },
    Resize { width: f64, height: f64 },
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::NewPoint => "new_point",
            Step::Click { .. } => "click",
            Step::Select { .. } => "select",
            Step::Remove { .. } => "remove",
            Step::Position { .. } => "position",
            Step::Label { .. } => "label",
            Step::SaveAll => "save_all",
            Step::Disable => "disable",
            Step::Enable => "enable",
            Step::Seed { .. } => "seed",
            Step::Resize { .. } => "resize",
        }
    }
}

/// Session 執行結果
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionReport {
    pub applied: usize,
    /// Steps that were valid but had nothing to act on (unknown id, gated click).
    pub ignored: usize,
    pub created: Vec<PointId>,
}

/// Ordered list of steps, read from `[[step]]` tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "step", default)]
    pub steps: Vec<Step>,
}

impl Session {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn run<R: Renderer>(&self, controller: &mut TagController<R>) -> Result<SessionReport> {
        let mut report = SessionReport::default();

        for (index, step) in self.steps.iter().enumerate() {
            let applied = match step {
                Step::NewPoint => {
                    report.created.push(controller.new_point());
                    true
                }
                Step::Click { x, y } => controller.click(*x, *y),
                Step::Select { id } => controller.set_active_point(id),
                Step::Remove { id } => controller.remove_point(id),
                Step::Position { id, x, y } => {
                    controller.position_point(id, Position { x: *x, y: *y })
                }
                Step::Label { id, text } => controller.label_point(id, text),
                Step::SaveAll => {
                    controller.save_all_points();
                    true
                }
                Step::Disable => {
                    controller.disable_new_points();
                    true
                }
                Step::Enable => {
                    controller.enable_new_points();
                    true
                }
                Step::Seed { points } => {
                    controller.seed_points(points.clone());
                    true
                }
                Step::Resize { width, height } => {
                    let surface = Surface::new(*width, *height).map_err(|e| {
                        TagError::SessionError {
                            index,
                            action: step.name().to_string(),
                            message: e.to_string(),
                        }
                    })?;
                    controller.set_surface(surface);
                    true
                }
            };

            if applied {
                report.applied += 1;
            } else {
                tracing::debug!("Step {} ({}) had no effect", index, step.name());
                report.ignored += 1;
            }
        }

        tracing::info!(
            "Session finished: {} applied, {} ignored",
            report.applied,
            report.ignored
        );
        Ok(report)
    }
}
