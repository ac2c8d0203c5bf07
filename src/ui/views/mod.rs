pub mod assistant;
pub mod quiz;
pub mod tutorial;
