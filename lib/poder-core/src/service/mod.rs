pub mod error;
pub mod poder;
pub mod webhook;

#[cfg(test)]
pub(crate) mod test_utilities;
