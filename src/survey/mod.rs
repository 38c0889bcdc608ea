pub mod mode;
pub mod plan;
