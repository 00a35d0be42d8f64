pub mod misc;
pub mod poder;
pub mod webhook;
