pub mod entity;
pub mod migrate;
pub mod renderer;
