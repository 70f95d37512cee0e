pub mod edge;
pub mod switching_center;
pub mod tower;
pub mod vertex;
