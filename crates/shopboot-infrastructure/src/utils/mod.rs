//! Utility modules

pub mod timing;

pub use timing::TimedOperation;
