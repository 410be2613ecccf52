//! Configuration types.
//!
//! - [`root`] - The root `UibotConfig`, file lookup and loading
//! - [`wait`] - Wait and expand timing

pub mod root;
pub mod wait;
