pub mod count;
pub mod panic;
