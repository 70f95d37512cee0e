pub mod telephone_registry;
