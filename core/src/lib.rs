pub mod log;
pub mod panic;
