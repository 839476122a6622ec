//! # untag-core
//!
//! Converts **type-tagged attribute JSON** into plain JSON.
//!
//! Key-value storage APIs often ship typed attributes over JSON by wrapping
//! every value with a discriminator: `{"S": "text"}`, `{"N": "42"}`,
//! `{"BOOL": "true"}`, `{"NULL": "true"}`, `{"L": [...]}`, `{"M": {...}}`.
//! This crate strips the tags, decodes and validates each payload, and drops
//! anything that does not make sense instead of failing the whole document.
//!
//! ## Quick start
//!
//! ```rust
//! use untag_core::transform;
//!
//! let tagged = r#"{"id":{"S":"a1"},"tags":{"L":[{"S":"x"},{"NULL":"true"}]},"ok":{"BOOL":"T"}}"#;
//! let plain = transform(tagged).unwrap();
//! assert_eq!(plain, r#"{"id":"a1","tags":["x"],"ok":true}"#);
//! ```
//!
//! ## Modules
//!
//! - [`transform`](mod@transform) — document pipeline and the recursive map/list/value walk
//! - [`tag`] — discriminators, dispatch policy, `TaggedNode` decoding
//! - [`scalar`] — the `S`, `N`, `BOOL`, `NULL` rules
//! - [`types`] — `NativeValue`, the untagged output tree
//! - [`error`] — document-level and value-level error types

pub mod error;
pub mod scalar;
pub mod tag;
pub mod transform;
pub mod types;

pub use error::{InvalidValue, TransformError};
pub use tag::{Dispatch, Tag, TaggedNode};
pub use transform::{
    transform, transform_document, transform_list, transform_map, transform_slice,
    transform_value, transform_with, TransformOptions,
};
pub use types::NativeValue;
