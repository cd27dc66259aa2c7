pub mod domain;
pub mod form;
pub mod render;
pub mod telemetry;
