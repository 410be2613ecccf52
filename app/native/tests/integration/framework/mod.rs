//! Test framework for uibot integration tests.
//!
//! # Example
//!
//! ```rust,ignore
//! let test = Test::new("expand_order");
//! let bench = test.workbench(&["General", "Advanced"]);
//!
//! test.automation().expand(bench.items[0]).unwrap();
//! assert!(test.expanded(bench.items[0]));
//! ```

mod suite;
mod test;
mod workbench;

pub use suite::init_suite;
pub use test::Test;
pub use workbench::{EventLog, Workbench};
