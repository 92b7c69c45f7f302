//! Kernel utilities shared across the toolchain.
//! Keep this crate lightweight: pure helpers plus the configuration layer.
//!
//! ## Naming conventions
//! ```rust
//! use kiln_kernel::naming::to_snake_form;
//!
//! assert_eq!(to_snake_form("HTTPServer"), "http_server");
//! ```
//!
//! ## Flags
//! ```rust
//! use kiln_kernel::config::resolve_flags;
//!
//! let flags = resolve_flags(&[("DUMP", "1"), ("UNIFY", "0")]);
//! assert!(flags.dump());
//! assert!(!flags.unify());
//! ```
pub mod config;
pub mod format;
pub mod naming;
pub mod seq;

pub use kiln_domain as domain;
