pub mod coords;
pub mod filter;
pub mod merge;
pub mod model;
