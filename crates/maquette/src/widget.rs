//! The materialized widget tree.

use geom::{Expanse, Rect};
use serde::Serialize;

use crate::{
    kind::{Capabilities, ElementTag, WidgetKind},
    style::{StyleProp, StyleSheet, StyleValue},
};

/// A widget identity, unique within an import session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct WidgetId(pub u64);

/// Child arrangement within a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Flow {
    /// Children flow left to right.
    Row,
    /// Children stack top to bottom.
    Column,
}

/// A table column descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Column header text.
    pub label: String,
    /// Fixed default column width in pixels.
    pub width: u32,
    /// Cells are editable.
    pub is_editable: bool,
    /// Column is sortable.
    pub is_sortable: bool,
    /// Column is searchable.
    pub is_searchable: bool,
}

impl Column {
    /// A column with the fixed defaults: 100px wide, not editable, not
    /// sortable, not searchable.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            width: 100,
            is_editable: false,
            is_sortable: false,
            is_searchable: false,
        }
    }
}

/// Type-specific widget payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Props {
    /// Visible text: content for labels and buttons, placeholder text for
    /// inputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// The label is rendered as placeholder text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<bool>,
    /// Check state for checkbox and radio widgets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    /// Table column descriptors, in declaration order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<Column>>,
    /// Table rows, carried through unvalidated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Vec<String>>>,
    /// Marks the screen root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<bool>,
}

/// A positioned, styled element of the output tree.
///
/// Widgets are created once during parsing and mutated in place by style
/// resolution and layout; the whole tree is replaced by the next import.
#[derive(Debug, Clone, Serialize)]
pub struct Widget {
    /// Session-unique id.
    pub id: WidgetId,
    /// Display name, derived from kind and creation order.
    pub name: String,
    /// Resolved widget kind.
    pub kind: WidgetKind,
    /// Absolute x in pixels, post-layout.
    pub x: u32,
    /// Absolute y in pixels, post-layout.
    pub y: u32,
    /// Width in pixels, post-layout.
    pub w: u32,
    /// Height in pixels, post-layout.
    pub h: u32,
    /// Stacking order: depth-first creation order.
    pub z: u32,
    /// Base style sheet.
    pub style: StyleSheet,
    /// Hover state sheet.
    pub hover: StyleSheet,
    /// Active state sheet.
    pub active: StyleSheet,
    /// Error state sheet.
    pub error: StyleSheet,
    /// Focus state sheet.
    pub focus: StyleSheet,
    /// Type-specific payload.
    pub props: Props,
    /// Static capability flags for the kind.
    pub has: Capabilities,
    /// Exclusively owned children, in declaration order.
    pub children: Vec<Widget>,
    /// Provenance: the original element tag. Transient; stripped by the
    /// cleanup pass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<ElementTag>,
    /// Flow direction for containers. Transient; stripped by the cleanup
    /// pass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow: Option<Flow>,
}

impl Widget {
    /// The synthetic screen root for a target viewport. It is the sole
    /// ownership root of the tree and keeps its fixed viewport extent
    /// through layout.
    pub fn screen(id: WidgetId, z: u32, viewport: Expanse) -> Self {
        Self {
            id,
            name: "Screen".into(),
            kind: WidgetKind::Screen,
            x: 0,
            y: 0,
            w: viewport.w,
            h: viewport.h,
            z,
            style: StyleSheet::new().with(StyleProp::Background, StyleValue::str("#fff")),
            hover: StyleSheet::new(),
            active: StyleSheet::new(),
            error: StyleSheet::new(),
            focus: StyleSheet::new(),
            props: Props {
                start: Some(true),
                ..Props::default()
            },
            has: Capabilities::default(),
            children: Vec::new(),
            tag: Some(ElementTag::Container),
            flow: None,
        }
    }

    /// True for elements that flow children (and for the screen root).
    pub fn is_container(&self) -> bool {
        self.tag == Some(ElementTag::Container)
    }

    /// Effective flow direction; containers default to column.
    pub fn flow(&self) -> Flow {
        self.flow.unwrap_or(Flow::Column)
    }

    /// The widget's frame as a rectangle.
    pub fn frame(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }

    /// Replace the widget's frame.
    pub fn set_frame(&mut self, frame: Rect) {
        self.x = frame.tl.x;
        self.y = frame.tl.y;
        self.w = frame.w;
        self.h = frame.h;
    }

    /// All five style sheets, for batch token substitution.
    pub fn sheets_mut(&mut self) -> [&mut StyleSheet; 5] {
        [
            &mut self.style,
            &mut self.hover,
            &mut self.active,
            &mut self.error,
            &mut self.focus,
        ]
    }

    /// Walk the tree depth-first, self first.
    pub fn walk(&self, f: &mut impl FnMut(&Self)) {
        f(self);
        for child in &self.children {
            child.walk(f);
        }
    }
}
