// Adapters layer: concrete renderers behind the `Renderer` port.

pub mod markup;
