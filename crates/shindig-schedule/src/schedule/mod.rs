pub mod resolve;
pub mod rule;
pub mod window;
