pub mod poder;
