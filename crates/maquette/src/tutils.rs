//! Test support: recording collaborators and widget builders.
//!
//! These doubles stand in for the theme, measurement and logging seams in
//! unit and integration tests. They are not part of the render contract.

use std::{cell::RefCell, rc::Rc};

use geom::Expanse;
use serde_yaml::Value;

use crate::{
    error::{Error, Result},
    kind::WidgetKind,
    log::ImportLog,
    measure::{FontSpec, TextMeasurer},
    style::StyleSheet,
    widget::{Props, Widget, WidgetId},
};

/// An import log that records every report, for assertions. Clones share
/// one buffer, so a handle can be kept while the log is handed to an
/// importer.
#[derive(Debug, Clone, Default)]
pub struct RecordingLog {
    entries: Rc<RefCell<Vec<String>>>,
}

impl RecordingLog {
    /// Construct an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of reports received.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// True if nothing was reported.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A copy of all reports.
    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }
}

impl ImportLog for RecordingLog {
    fn report_error(&self, context: &str, node: &Value) {
        self.entries
            .borrow_mut()
            .push(format!("{context}: {node:?}"));
    }
}

/// A measurer that returns one fixed height for any text.
#[derive(Debug, Clone, Copy)]
pub struct FixedMeasurer(pub u32);

impl TextMeasurer for FixedMeasurer {
    fn measure_height(&self, _text: &str, _width: u32, _font: &FontSpec) -> Result<u32> {
        Ok(self.0)
    }
}

/// A measurer that always fails, for fatal-error paths.
#[derive(Debug, Clone, Copy)]
pub struct FailingMeasurer;

impl TextMeasurer for FailingMeasurer {
    fn measure_height(&self, _text: &str, _width: u32, _font: &FontSpec) -> Result<u32> {
        Err(Error::Measure("measurement surface unavailable".into()))
    }
}

/// A bare widget of the given kind for layout tests: zero frame, empty
/// sheets, no provenance.
pub fn blank(kind: WidgetKind) -> Widget {
    let mut widget = Widget::screen(WidgetId(0), 0, Expanse::default());
    widget.kind = kind;
    widget.name = kind.to_string();
    widget.tag = None;
    widget.flow = None;
    widget.props = Props::default();
    widget.style = StyleSheet::new();
    widget.has = kind.capabilities();
    widget
}
