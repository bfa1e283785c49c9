pub mod errors;
pub mod student;

pub use student::{Student, StudentInput};
