//! `nukmed` is a quick reference for nuclear medicine radiopharmaceuticals
//! with a radioactive decay calculator
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use nukmed_format as format;

#[doc(inline)]
pub use nukmed_decay as decay;

#[cfg(feature = "catalog")]
#[cfg_attr(docsrs, doc(cfg(feature = "catalog")))]
#[doc(inline)]
pub use nukmed_catalog as catalog;
