//! Data models for `GpaCalc`

pub mod course;
pub mod semester;

pub use course::Course;
pub use semester::Semester;
