pub mod page;
pub mod raw;
