pub mod resume;
pub mod update;
