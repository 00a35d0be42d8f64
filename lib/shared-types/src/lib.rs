mod macros;
mod poder_id;

pub use poder_id::PoderId;
