pub mod ddl_renderer;

pub use ddl_renderer::{renderer_for, DdlRenderer};

#[cfg(test)]
pub use ddl_renderer::MockDdlRenderer;
