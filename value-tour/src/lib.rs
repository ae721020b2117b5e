pub mod catalog;
pub mod closure;
pub mod config;
pub mod native;
pub mod program;
pub mod runtime_value;
