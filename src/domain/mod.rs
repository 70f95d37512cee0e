pub mod directory;
pub mod geometry;
pub mod graph;
pub mod registry;
pub mod user;
pub mod utils;
pub mod zone;
