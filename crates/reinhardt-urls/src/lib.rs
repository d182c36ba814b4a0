//! Named-route URL generation for Reinhardt data views
//!
//! This crate provides the URL capability that pagers, sorters and action
//! columns call into: give it a route name and an ordered parameter map and
//! it hands back a URL string.
//!
//! - [`UrlGenerator`]: the generation capability
//! - [`RouteMatcher`]: which route matched the current request
//! - [`UrlReverser`]: a concrete registry implementing both
//! - [`UrlParams`]: insertion-ordered parameters with later-wins merging
//!
//! # Example
//!
//! ```rust
//! use reinhardt_urls::{UrlGenerator, UrlParams, UrlReverser};
//!
//! let mut reverser = UrlReverser::new();
//! reverser.register_path("books:list", "/books/");
//!
//! let url = reverser
//!     .generate("books:list", &UrlParams::new().with("page", 3_usize))
//!     .unwrap();
//! assert_eq!(url, "/books/?page=3");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod generator;
pub mod params;
pub mod reverse;

pub use error::{Result, UrlError};
pub use generator::{FixedRoute, RouteMatcher, UrlGenerator};
pub use params::{ParamValue, UrlParams};
pub use reverse::UrlReverser;
