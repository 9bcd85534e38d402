use crate::config::TagConfig;
use crate::core::registry::PointRegistry;
use crate::core::transform::CoordinateTransform;
use crate::domain::model::{Point, PointId, PointSeed, Position, Surface};
use crate::domain::ports::Renderer;

/// Public façade over the registry: point creation, click handling and creation gating.
///
/// Every mutation takes `&mut self`; a multi-threaded host has to keep the controller on
/// one thread or behind a lock.
pub struct TagController<R: Renderer> {
    registry: PointRegistry<R>,
    surface: Surface,
    creation_enabled: bool,
}

impl<R: Renderer> TagController<R> {
    /// Builds the controller and loads `config.seed_data`, if any.
    pub fn new(mut renderer: R, config: TagConfig, surface: Surface) -> Self {
        if !config.allow_overflow {
            renderer.configure_surface(true);
        }

        let transform = CoordinateTransform::new(config.is_percentage);
        let mut controller = Self {
            registry: PointRegistry::new(renderer, transform, config.radius),
            surface,
            creation_enabled: !config.is_disabled,
        };

        if let Some(seeds) = config.seed_data {
            controller.seed_points(seeds);
        }

        tracing::debug!(
            "Tag controller ready: {}x{} surface, unit {}, creation {}",
            surface.width(),
            surface.height(),
            transform.unit_symbol(),
            if controller.creation_enabled { "enabled" } else { "disabled" }
        );
        controller
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// Tell the controller the image was laid out again at a new size.
    pub fn set_surface(&mut self, surface: Surface) {
        self.surface = surface;
    }

    pub fn is_creation_enabled(&self) -> bool {
        self.creation_enabled
    }

    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.registry.points()
    }

    pub fn renderer(&self) -> &R {
        self.registry.renderer()
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        self.registry.renderer_mut()
    }

    /// Create a point at the center of the surface and make it the active one.
    pub fn new_point(&mut self) -> PointId {
        let transform = *self.registry.transform();
        let position = Position::new(
            transform.to_storage_unit(self.surface.width() / 2.0, self.surface.width()),
            transform.to_storage_unit(self.surface.height() / 2.0, self.surface.height()),
        );

        let mut entry = self.registry.create(PointSeed::default());
        self.registry.position_entry(&mut entry, position);
        self.registry.display(&entry);
        let id = entry.point().id.clone();
        self.registry.insert(entry);

        self.registry.set_active(&id);
        id
    }

    pub fn seed_points(&mut self, seeds: Vec<PointSeed>) {
        self.registry.replace_all(seeds);
    }

    /// Move the active point to a click at `(offset_x, offset_y)` on `surface`.
    /// Returns whether a point moved; clicks never create points.
    pub fn on_surface_click(&mut self, offset_x: f64, offset_y: f64, surface: Surface) -> bool {
        if !self.creation_enabled {
            tracing::debug!("Ignoring click at ({}, {}): new points disabled", offset_x, offset_y);
            return false;
        }

        let Some(id) = self.registry.get_active().map(|point| point.id.clone()) else {
            tracing::debug!("Ignoring click at ({}, {}): no active point", offset_x, offset_y);
            return false;
        };

        let transform = *self.registry.transform();
        let position = Position::new(
            transform.to_storage_unit(offset_x, surface.width()),
            transform.to_storage_unit(offset_y, surface.height()),
        );
        self.registry.reposition(&id, position)
    }

    /// Click on the surface the controller currently knows about.
    pub fn click(&mut self, offset_x: f64, offset_y: f64) -> bool {
        let surface = self.surface;
        self.on_surface_click(offset_x, offset_y, surface)
    }

    pub fn get_point_by_id(&self, id: &PointId) -> Option<&Point> {
        self.registry.get_by_id(id)
    }

    pub fn get_active_point(&self) -> Option<&Point> {
        self.registry.get_active()
    }

    pub fn set_active_point(&mut self, id: &PointId) -> bool {
        self.registry.set_active(id)
    }

    /// Removing the active point leaves no point active.
    pub fn remove_point(&mut self, id: &PointId) -> bool {
        self.registry.remove(id)
    }

    pub fn position_point(&mut self, id: &PointId, position: Position) -> bool {
        self.registry.reposition(id, position)
    }

    pub fn label_point(&mut self, id: &PointId, text: &str) -> bool {
        self.registry.relabel(id, text)
    }

    pub fn save_all_points(&mut self) {
        self.registry.save_all();
    }

    pub fn disable_new_points(&mut self) {
        self.creation_enabled = false;
    }

    pub fn enable_new_points(&mut self) {
        self.creation_enabled = true;
    }
}
