//! stlreader – a reader for the anchor-arrow-anchor statement language and the
//! extraction of typed page records from what it reads.
//!
//! The language is a sequence of *statements* of the form
//! `[Source] -> [Target] ::mod(key=value, ...)`, where:
//! * An [`construct::Anchor`] is one bracketed endpoint, optionally namespaced
//!   as `[Namespace:Name]`.
//! * A [`construct::Modifiers`] map holds typed annotations; every value is a
//!   [`datatype::Value`] (boolean, number or text).
//! * A [`construct::Statement`] couples a source anchor, a target anchor and
//!   the merged modifiers of all its `::mod(...)` blocks.
//! * A [`construct::Document`] is the ordered statements plus the comment
//!   bodies of one source text.
//!
//! ## Modules
//! * [`construct`] – Anchors, modifiers, statements and documents.
//! * [`datatype`] – The modifier [`datatype::Value`] and the
//!   [`datatype::DataType`] trait for typed lookups.
//! * [`stl`] – Line joining and the statement reader.
//! * [`query`] – Namespace filters, modifier lookups, ordering and grouping.
//! * [`extract`] – Page-specific projections into serializable records.
//! * [`loader`] – Reads named sources from a content directory, parsing each once.
//! * [`settings`] – Configuration through the `config` crate.
//! * [`server`] – An axum router serving documents and page records as JSON.
//!
//! ## Leniency
//! The reader handles a known well-formed subset of the language. Lines it
//! does not recognize are skipped rather than reported; a stricter validator
//! is expected to run earlier in the authoring pipeline.
//!
//! ## Quick Start
//! ```
//! use stlreader::construct::Document;
//! use stlreader::query::{filter_by_namespace, sort_by_order, Field};
//! let doc = Document::parse("[Home] -> [Feature:Fast] ::mod(order=2)\n[Home] -> [Feature:Small] ::mod(order=1)");
//! let features = sort_by_order(filter_by_namespace(&doc, "Feature", Field::Target));
//! assert_eq!(features[0].target().name(), "Small");
//! ```

pub mod construct;
pub mod datatype;
pub mod error;
pub mod extract;
pub mod loader;
pub mod query;
pub mod server;
pub mod settings;
pub mod stl;
