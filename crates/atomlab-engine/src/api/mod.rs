pub mod error;
pub mod lab;
