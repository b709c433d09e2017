pub mod symphony;

pub use symphony::SymphonyCommand;
