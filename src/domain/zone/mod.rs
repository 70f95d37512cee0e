pub mod events;
pub mod network_zone;
pub mod routing;
