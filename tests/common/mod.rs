#![allow(dead_code)]

use image_tag::{Point, PointId, Renderer};

/// Calls the core made into the renderer, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Create(PointId),
    Attach(usize),
    Detach(usize),
    Position {
        handle: usize,
        x: f64,
        y: f64,
        unit: String,
        radius: f64,
    },
    Style {
        handle: usize,
        active: bool,
    },
    Label {
        handle: usize,
        text: String,
    },
    Clip(bool),
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<Call>,
    pub created: usize,
    pub attached: Vec<usize>,
    /// Current active styling per handle.
    pub styled_active: Vec<bool>,
}

impl RecordingRenderer {
    pub fn active_styled_count(&self) -> usize {
        self.styled_active.iter().filter(|active| **active).count()
    }

    pub fn detach_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, Call::Detach(_)))
            .count()
    }

    pub fn last_position(&self, handle: usize) -> Option<(f64, f64, String, f64)> {
        self.calls.iter().rev().find_map(|call| match call {
            Call::Position {
                handle: h,
                x,
                y,
                unit,
                radius,
            } if *h == handle => Some((*x, *y, unit.clone(), *radius)),
            _ => None,
        })
    }
}

impl Renderer for RecordingRenderer {
    type Handle = usize;

    fn create_visual(&mut self, point: &Point) -> usize {
        self.calls.push(Call::Create(point.id.clone()));
        self.styled_active.push(false);
        self.created += 1;
        self.created - 1
    }

    fn attach(&mut self, handle: &usize) {
        self.calls.push(Call::Attach(*handle));
        self.attached.push(*handle);
    }

    fn detach(&mut self, handle: &usize) {
        self.calls.push(Call::Detach(*handle));
        self.attached.retain(|h| h != handle);
    }

    fn set_position(&mut self, handle: &usize, x: f64, y: f64, unit: &str, radius: f64) {
        self.calls.push(Call::Position {
            handle: *handle,
            x,
            y,
            unit: unit.to_string(),
            radius,
        });
    }

    fn set_selection_style(&mut self, handle: &usize, _point: &Point, is_active: bool) {
        self.calls.push(Call::Style {
            handle: *handle,
            active: is_active,
        });
        self.styled_active[*handle] = is_active;
    }

    fn set_label(&mut self, handle: &usize, text: &str) {
        self.calls.push(Call::Label {
            handle: *handle,
            text: text.to_string(),
        });
    }

    fn configure_surface(&mut self, clip_overflow: bool) {
        self.calls.push(Call::Clip(clip_overflow));
    }
}
