use crate::domain::model::Point;

/// Paints tag points. The core hands each point's handle back to the renderer and never
/// inspects it.
pub trait Renderer {
    type Handle;

    /// Allocate a visual for `point`. Must not fail for a valid point.
    fn create_visual(&mut self, point: &Point) -> Self::Handle;

    /// Make the visual part of the displayed surface.
    fn attach(&mut self, handle: &Self::Handle);

    /// Remove the visual from the surface. Calling it twice is harmless.
    fn detach(&mut self, handle: &Self::Handle);

    /// Center the visual on `(x, y)` expressed in `unit`, pulled back by `radius` pixels.
    fn set_position(&mut self, handle: &Self::Handle, x: f64, y: f64, unit: &str, radius: f64);

    fn set_selection_style(&mut self, handle: &Self::Handle, point: &Point, is_active: bool);

    fn set_label(&mut self, handle: &Self::Handle, text: &str);

    /// Whether visuals falling outside the surface get clipped.
    fn configure_surface(&mut self, _clip_overflow: bool) {}
}
