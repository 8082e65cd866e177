//! Configuration persistence for modpanel
//!
//! - **store**: the flat `key=value` file shared by every feature
//! - **value**: typed values and conversions used by the store

pub mod store;
pub mod value;

pub use store::Store;
pub use value::{FromValue, Value};
