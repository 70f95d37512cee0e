pub mod scenario_dto;
pub mod snapshot_dto;
