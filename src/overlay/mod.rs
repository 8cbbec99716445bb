pub mod boundary;
pub mod clip;
