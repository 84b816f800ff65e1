//! Theme tables and token substitution.
//!
//! Widgets are styled with symbolic tokens (`@form-background`,
//! `@border-width:focus`). The [`ThemeResolver`] seam substitutes those
//! tokens with concrete values; the rest of the compiler never interprets
//! a token. Substitution itself ships as provided trait methods so that an
//! alternative resolver only has to supply tables.

use std::collections::BTreeMap;

use crate::{
    kind::{self, WidgetKind},
    style::{StyleProp, StyleValue},
    widget::Widget,
};

/// A named table of token values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeTable {
    name: String,
    values: BTreeMap<String, StyleValue>,
}

impl ThemeTable {
    /// Construct an empty table.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: BTreeMap::new(),
        }
    }

    /// The table name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a token value. The leading `@` is optional and stripped.
    pub fn with(mut self, token: &str, value: StyleValue) -> Self {
        self.values
            .insert(token.trim_start_matches('@').to_owned(), value);
        self
    }

    /// Look up a token, with or without its leading `@`.
    pub fn get(&self, token: &str) -> Option<&StyleValue> {
        self.values.get(token.trim_start_matches('@'))
    }

    /// Look up a token that must resolve to pixels.
    pub fn px(&self, token: &str) -> Option<u32> {
        self.get(token).and_then(StyleValue::as_px)
    }
}

/// The theme collaborator consumed by the compiler.
pub trait ThemeResolver {
    /// Look up a theme table by name.
    fn theme(&self, name: &str) -> Option<&ThemeTable>;

    /// Substitute symbolic tokens across all five of the widget's sheets.
    /// Tokens without a table entry are left in place.
    fn resolve_variables(&self, table: &ThemeTable, widget: &mut Widget) {
        for sheet in widget.sheets_mut() {
            for value in sheet.values_mut() {
                if let StyleValue::Token(token) = value {
                    if let Some(concrete) = table.get(token) {
                        *value = concrete.clone();
                    }
                }
            }
        }
    }

    /// Assign the widget's provisional extent from its kind's size tokens.
    /// Containers start at zero height and are sized by layout; the screen
    /// root keeps its fixed viewport extent.
    fn resolve_size_tokens(&self, table: &ThemeTable, widget: &mut Widget) {
        if widget.kind == WidgetKind::Screen {
            return;
        }
        widget.w = table.px(kind::width_token(widget.tag)).unwrap_or(0);
        widget.h = match kind::height_token(widget.tag) {
            Some(token) => table.px(token).unwrap_or(0),
            None => 0,
        };
    }

    /// Expand border shorthand into the per-side properties the render
    /// model exposes. The shorthand is kept alongside the expansion.
    fn resolve_border_tokens(&self, widget: &mut Widget) {
        use StyleProp::*;
        for sheet in widget.sheets_mut() {
            if let Some(color) = sheet.get(BorderColor).cloned() {
                for side in [
                    BorderTopColor,
                    BorderRightColor,
                    BorderBottomColor,
                    BorderLeftColor,
                ] {
                    sheet.set_default(side, color.clone());
                }
            }
            if let Some(width) = sheet.get(BorderWidth).cloned() {
                for side in [
                    BorderTopWidth,
                    BorderRightWidth,
                    BorderBottomWidth,
                    BorderLeftWidth,
                ] {
                    sheet.set_default(side, width.clone());
                }
            }
        }
    }
}

/// The stock resolver carrying the built-in theme tables.
#[derive(Debug, Clone)]
pub struct BuiltinThemes {
    themes: BTreeMap<String, ThemeTable>,
}

impl BuiltinThemes {
    /// Construct the stock resolver with the wireframe theme.
    pub fn new() -> Self {
        let mut themes = BTreeMap::new();
        themes.insert("wireframe".to_owned(), wireframe());
        Self { themes }
    }

    /// Register an additional table.
    pub fn with_theme(mut self, table: ThemeTable) -> Self {
        self.themes.insert(table.name().to_owned(), table);
        self
    }
}

impl Default for BuiltinThemes {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeResolver for BuiltinThemes {
    fn theme(&self, name: &str) -> Option<&ThemeTable> {
        self.themes.get(name)
    }
}

/// The built-in wireframe theme: greyscale boxes, a single accent for
/// active states.
pub fn wireframe() -> ThemeTable {
    ThemeTable::new("wireframe")
        .with("@font-family", StyleValue::str("Helvetica Neue, sans-serif"))
        .with("@font-size-m", StyleValue::Px(16))
        .with("@font-size-xl", StyleValue::Px(32))
        .with("@lineHeight", StyleValue::Num(1.5))
        .with("@letterSpacing", StyleValue::Px(0))
        .with("@label-color", StyleValue::str("#333333"))
        .with("@form-background", StyleValue::str("#ffffff"))
        .with("@form-background:hover", StyleValue::str("#f7f7f7"))
        .with("@form-background:focus", StyleValue::str("#ffffff"))
        .with("@form-background:error", StyleValue::str("#fff5f5"))
        .with("@form-border-color", StyleValue::str("#999999"))
        .with("@form-border-color:hover", StyleValue::str("#555555"))
        .with("@form-border-color:focus", StyleValue::str("#333333"))
        .with("@form-border-color:error", StyleValue::str("#cc3344"))
        .with("@form-color", StyleValue::str("#333333"))
        .with("@form-color:hover", StyleValue::str("#111111"))
        .with("@form-color:focus", StyleValue::str("#111111"))
        .with("@form-color:error", StyleValue::str("#cc3344"))
        .with("@button-primary-background", StyleValue::str("#333333"))
        .with(
            "@button-primary-background:hover",
            StyleValue::str("#111111"),
        )
        .with("@button-primary-border-color", StyleValue::str("#333333"))
        .with(
            "@button-primary-border-color:hover",
            StyleValue::str("#111111"),
        )
        .with("@button-primary-color", StyleValue::str("#ffffff"))
        .with("@button-primary-color:hover", StyleValue::str("#ffffff"))
        .with("@background-active", StyleValue::str("#4a90e2"))
        .with("@color-active", StyleValue::str("#ffffff"))
        .with("@border-width", StyleValue::Px(1))
        .with("@border-width:focus", StyleValue::Px(2))
        .with("@border-radius", StyleValue::Px(4))
        .with("@form-padding-vertical", StyleValue::Px(8))
        .with("@form-padding-horizontal", StyleValue::Px(12))
        .with("@form-width", StyleValue::Px(320))
        .with("@form-height", StyleValue::Px(40))
        .with("@box-height-l", StyleValue::Px(200))
}
