//! Input/output helpers.
//!
//! - model + feature-list loading and path resolution (`load`)
//! - estimate/curve JSON exports (`export`)
//! - starter artifact generation for `pay init` (`starter`)

pub mod export;
pub mod load;
pub mod starter;

pub use export::*;
pub use load::*;
pub use starter::*;
