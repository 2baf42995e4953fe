//! The record schema and its two-sided enforcement.
//!
//! One declarative description of every constrained leaf
//! ([`RecordSchema`]), a pure one-pass validator producing
//! (path, message) [`Violation`]s, and a reconciler mapping dotted
//! violation paths to the flat keys the form UI hangs errors on.
//!
//! Client and server call exactly the same validator: the CLI form
//! session validates its serialized draft before submitting, and the
//! service re-validates the incoming body before persisting.

mod def;
mod reconcile;
mod validate;

pub use def::{FieldKind, FieldRule, ListRule, RecordSchema};
pub use reconcile::{collect_flat, reconcile};
pub use validate::Violation;
