// Domain layer: the point model and the renderer port. No rendering code lives here.

pub mod model;
pub mod ports;
