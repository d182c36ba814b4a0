//! URL generation module.
//!
//! This module provides named-route reversing and the traits the data-view
//! widgets generate links through.
//!
//! # Examples
//!
//! ```rust
//! use reinhardt_dataview::urls::{UrlGenerator, UrlParams, UrlReverser};
//!
//! let mut reverser = UrlReverser::new();
//! reverser.register_path("users:detail", "/users/{id}/");
//! let url = reverser.generate("users:detail", &UrlParams::new().with("id", 5)).unwrap();
//! assert_eq!(url, "/users/5/");
//! ```

pub use reinhardt_urls::*;
