pub mod block;
pub mod config;
pub mod gaps;
pub mod template;
