use crate::config::TagConfig;
use crate::domain::model::Point;
use crate::domain::ports::Renderer;
use std::collections::HashMap;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

/// In-memory stand-in for one point's DOM element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub classes: Vec<String>,
    pub top: String,
    pub left: String,
    pub label: String,
}

/// Renders points as HTML markup, the way the browser widget lays them out.
#[derive(Debug, Clone)]
pub struct MarkupRenderer {
    class_name: String,
    point_text_class_name: String,
    active_class_name: String,
    clip_overflow: bool,
    elements: HashMap<ElementId, Element>,
    attached: Vec<ElementId>,
    next_id: usize,
}

impl MarkupRenderer {
    pub fn new(config: &TagConfig) -> Self {
        Self {
            class_name: config.class_name.clone(),
            point_text_class_name: config.point_text_class_name.clone(),
            active_class_name: config.active_class_name.clone(),
            clip_overflow: false,
            elements: HashMap::new(),
            attached: Vec::new(),
            next_id: 0,
        }
    }

    pub fn element(&self, handle: &ElementId) -> Option<&Element> {
        self.elements.get(handle)
    }

    /// Elements currently on the surface, in attach order.
    pub fn attached(&self) -> impl Iterator<Item = &Element> {
        self.attached.iter().filter_map(|id| self.elements.get(id))
    }

    pub fn attached_count(&self) -> usize {
        self.attached.len()
    }

    /// Visuals still held; detached ones are dropped.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn clips_overflow(&self) -> bool {
        self.clip_overflow
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        if self.clip_overflow {
            out.push_str("<div class=\"image-tag\" style=\"overflow: hidden\">\n");
        } else {
            out.push_str("<div class=\"image-tag\">\n");
        }

        for element in self.attached() {
            // write! 到 String 不會失敗
            let _ = writeln!(
                out,
                "  <div class=\"{}\" style=\"top: {}; left: {}\"><div class=\"{}\">{}</div></div>",
                element.classes.join(" "),
                element.top,
                element.left,
                self.point_text_class_name,
                escape_html(&element.label),
            );
        }

        out.push_str("</div>\n");
        out
    }

    fn element_mut(&mut self, handle: &ElementId) -> Option<&mut Element> {
        self.elements.get_mut(handle)
    }
}

impl Renderer for MarkupRenderer {
    type Handle = ElementId;

    fn create_visual(&mut self, _point: &Point) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.elements.insert(id, Element::default());
        id
    }

    fn attach(&mut self, handle: &ElementId) {
        if !self.attached.contains(handle) {
            self.attached.push(*handle);
        }
    }

    /// Detaching disposes the element; its handle is never handed out again.
    fn detach(&mut self, handle: &ElementId) {
        self.attached.retain(|id| id != handle);
        self.elements.remove(handle);
    }

    fn set_position(&mut self, handle: &ElementId, x: f64, y: f64, unit: &str, radius: f64) {
        if let Some(element) = self.element_mut(handle) {
            element.top = format!("calc({}{} - {}px)", y, unit, radius);
            element.left = format!("calc({}{} - {}px)", x, unit, radius);
        }
    }

    fn set_selection_style(&mut self, handle: &ElementId, point: &Point, is_active: bool) {
        let mut classes = vec![
            self.class_name.clone(),
            format!("{}-{}", self.class_name, point.id),
        ];
        if is_active {
            classes.push(self.active_class_name.clone());
        }

        if let Some(element) = self.element_mut(handle) {
            element.classes = classes;
        }
    }

    fn set_label(&mut self, handle: &ElementId, text: &str) {
        if let Some(element) = self.element_mut(handle) {
            element.label = text.to_string();
        }
    }

    fn configure_surface(&mut self, clip_overflow: bool) {
        self.clip_overflow = clip_overflow;
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
