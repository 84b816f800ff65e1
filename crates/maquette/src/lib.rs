//! Maquette: a layout compiler for design mockups.
//!
//! Maquette turns a hierarchical declarative UI description (YAML with
//! typed elements such as `CONTAINER`, `LABEL`, `BUTTON`, `INPUT`, `IMAGE`
//! and `TABLE`) into a fully positioned, styled widget tree ready for a
//! renderer. Nothing is drawn here: the output is a data structure with
//! geometry, z-order, interaction-state style sheets and per-kind widget
//! metadata.
//!
//! # Quick start
//!
//! ```
//! use geom::Expanse;
//! use maquette::Importer;
//!
//! let yaml = "
//! CONTAINER:
//!   FLEX-DIRECTION: ROW
//!   CHILDREN:
//!     - BUTTON:
//!         CONTENT: \"Sign Up\"
//!     - BUTTON:
//!         CONTENT: \"Login\"
//! ";
//! let mut importer = Importer::new();
//! let screen = importer.import(yaml, Expanse::new(400, 800)).unwrap();
//! assert_eq!(screen.children.len(), 1);
//! ```
//!
//! # Module organization
//!
//! - [`spec`] / [`parse`] - the declarative document and its parser
//! - [`style`] / [`theme`] - style sheets and token resolution
//! - [`layout`] - the recursive box layout engine
//! - [`pipeline`] - post-processing (scale, relayout, cleanup)
//! - [`measure`] / [`log`] - collaborator seams with stock implementations
//! - [`snap`] / [`prompt`] - canvas grid snapping and completion-service
//!   plumbing

/// Error and result types.
pub mod error;
/// The top-level importer.
pub mod importer;
/// Element tags, widget kinds, capability tables.
pub mod kind;
/// The box layout engine.
pub mod layout;
/// The import log seam.
pub mod log;
/// Text measurement seams.
pub mod measure;
/// The spec parser.
pub mod parse;
/// Post-processing passes.
pub mod pipeline;
/// Completion-service prompt and payload extraction.
pub mod prompt;
/// Session id/z allocation.
pub mod session;
/// Canvas grid snapping.
pub mod snap;
/// Spec document loading.
pub mod spec;
/// Style sheets and per-kind resolution.
pub mod style;
/// Theme tables and token substitution.
pub mod theme;
/// Test support doubles.
pub mod tutils;
/// The widget tree.
pub mod widget;

pub use error::{Error, Result};
pub use importer::{ImportOptions, Importer};
pub use kind::{Capabilities, ElementTag, WidgetKind};
pub use layout::LayoutEngine;
pub use log::{ImportLog, TraceLog};
pub use measure::{FontSpec, HeuristicMeasurer, Surface, SurfaceMeasurer, TextMeasurer};
pub use session::Session;
pub use style::{StyleProp, StyleSheet, StyleValue};
pub use theme::{BuiltinThemes, ThemeResolver, ThemeTable};
pub use widget::{Column, Flow, Props, Widget, WidgetId};

// Re-export the geometry crate for downstream callers.
pub use geom;
