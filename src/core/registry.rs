use crate::core::transform::CoordinateTransform;
use crate::domain::model::{Point, PointId, PointSeed, Position};
use crate::domain::ports::Renderer;

/// A point together with the renderer's handle for its visual.
#[derive(Debug)]
pub struct PointEntry<H> {
    point: Point,
    handle: H,
}

impl<H> PointEntry<H> {
    pub fn point(&self) -> &Point {
        &self.point
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }
}

/// Ordered store of every point and its visual. Owns the renderer it paints through.
pub struct PointRegistry<R: Renderer> {
    entries: Vec<PointEntry<R::Handle>>,
    renderer: R,
    transform: CoordinateTransform,
    radius: f64,
    next_id: u64,
}

impl<R: Renderer> PointRegistry<R> {
    pub fn new(renderer: R, transform: CoordinateTransform, radius: f64) -> Self {
        Self {
            entries: Vec::new(),
            renderer,
            transform,
            radius,
            next_id: 1,
        }
    }

    pub fn transform(&self) -> &CoordinateTransform {
        &self.transform
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.entries.iter().map(|entry| &entry.point)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Next numeric id not held by a registered point. Never hands out the same value twice.
    fn generate_id(&mut self) -> PointId {
        loop {
            let candidate = self.next_id;
            self.next_id += 1;
            let taken = self
                .entries
                .iter()
                .any(|entry| entry.point.id.as_number() == Some(candidate));
            if !taken {
                return PointId::Number(candidate);
            }
        }
    }

    /// Build a point and its visual without registering it.
    pub fn create(&mut self, seed: PointSeed) -> PointEntry<R::Handle> {
        let id = match seed.id {
            Some(id) => id,
            None => self.generate_id(),
        };
        let point = Point {
            id,
            x: seed.x.unwrap_or(0.0),
            y: seed.y.unwrap_or(0.0),
            text: seed.text.unwrap_or_default(),
            is_active: false,
        };

        let handle = self.renderer.create_visual(&point);
        self.renderer.set_selection_style(&handle, &point, false);
        self.renderer.set_label(&handle, &point.text);

        PointEntry { point, handle }
    }

    /// Move a point that has not been inserted yet.
    pub fn position_entry(&mut self, entry: &mut PointEntry<R::Handle>, position: Position) {
        let unit = self.transform.unit_symbol();
        place(&mut self.renderer, unit, self.radius, entry, position);
    }

    pub fn display(&mut self, entry: &PointEntry<R::Handle>) {
        self.renderer.attach(&entry.handle);
    }

    /// Appends without checking for an existing point with the same id.
    /// Inserted points start inactive; only `set_active` selects one.
    pub fn insert(&mut self, mut entry: PointEntry<R::Handle>) {
        entry.point.is_active = false;
        tracing::debug!("Registered point {} at ({}, {})", entry.point.id, entry.point.x, entry.point.y);
        self.entries.push(entry);
    }

    fn index_of(&self, id: &PointId) -> Option<usize> {
        self.entries.iter().position(|entry| &entry.point.id == id)
    }

    pub fn get_by_id(&self, id: &PointId) -> Option<&Point> {
        self.index_of(id).map(|index| &self.entries[index].point)
    }

    pub fn get_active(&self) -> Option<&Point> {
        self.points().find(|point| point.is_active)
    }

    /// Make the first point with `id` the only active one. Unknown ids change nothing.
    pub fn set_active(&mut self, id: &PointId) -> bool {
        let Some(target) = self.index_of(id) else {
            tracing::debug!("Cannot activate unknown point {}", id);
            return false;
        };

        for (index, entry) in self.entries.iter_mut().enumerate() {
            entry.point.is_active = index == target;
            self.renderer
                .set_selection_style(&entry.handle, &entry.point, entry.point.is_active);
        }

        tracing::debug!("Point {} is now active", id);
        true
    }

    /// Drop every point carrying `id` and release their visuals.
    pub fn remove(&mut self, id: &PointId) -> bool {
        let before = self.entries.len();
        let renderer = &mut self.renderer;
        self.entries.retain(|entry| {
            if &entry.point.id == id {
                renderer.detach(&entry.handle);
                false
            } else {
                true
            }
        });

        let removed = before - self.entries.len();
        if removed > 0 {
            tracing::debug!("Removed point {}", id);
        }
        removed > 0
    }

    pub fn reposition(&mut self, id: &PointId, position: Position) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let unit = self.transform.unit_symbol();
        place(&mut self.renderer, unit, self.radius, &mut self.entries[index], position);
        true
    }

    pub fn relabel(&mut self, id: &PointId, text: &str) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let entry = &mut self.entries[index];
        entry.point.text = text.to_string();
        self.renderer.set_label(&entry.handle, text);
        true
    }

    /// Dispose every current point, then load `seeds` in order. Nothing ends up active.
    pub fn replace_all(&mut self, seeds: Vec<PointSeed>) {
        for entry in self.entries.drain(..) {
            self.renderer.detach(&entry.handle);
        }

        let count = seeds.len();
        for seed in seeds {
            let mut entry = self.create(seed);
            self.position_entry(&mut entry, Position::default());
            self.display(&entry);
            self.insert(entry);
        }

        tracing::debug!("Seeded {} points", count);
    }

    pub fn save_all(&mut self) {
        for entry in &mut self.entries {
            entry.point.is_active = false;
            self.renderer
                .set_selection_style(&entry.handle, &entry.point, false);
        }
    }
}

fn place<R: Renderer>(
    renderer: &mut R,
    unit: &str,
    radius: f64,
    entry: &mut PointEntry<R::Handle>,
    position: Position,
) {
    if let Some(x) = position.x {
        entry.point.x = x;
    }
    if let Some(y) = position.y {
        entry.point.y = y;
    }
    renderer.set_position(&entry.handle, entry.point.x, entry.point.y, unit, radius);
}
