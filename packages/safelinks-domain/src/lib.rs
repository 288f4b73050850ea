//! Link handling rules shared by the SafeLinks service and its clients.
//!
//! Nothing here performs I/O. Timing-sensitive pieces such as the search overlay take the
//! current instant as an argument so callers own the clock.

pub mod address;
pub mod capture;
pub mod overlay;
pub mod search;
pub mod title;
pub mod ui;
pub mod vault;
