pub mod adaptors;
pub mod ai;
