//! Style sheets and their per-kind resolution.
//!
//! Every widget carries five sheets: base, hover, active, error and focus.
//! Sheet values start out as symbolic tokens (`@form-background`) and are
//! substituted with concrete values by the theme resolver; the builders in
//! this module never interpret tokens themselves.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_yaml::Mapping;

use crate::{kind::ElementTag, spec::attr_str};

/// A style property name. The serialized form uses the camelCase names the
/// render model expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum StyleProp {
    FontFamily,
    FontSize,
    LineHeight,
    LetterSpacing,
    TextAlign,
    VerticalAlign,
    Color,
    Background,
    BackgroundImage,
    BorderColor,
    BorderWidth,
    BorderStyle,
    BorderRadius,
    BorderTopColor,
    BorderRightColor,
    BorderBottomColor,
    BorderLeftColor,
    BorderTopWidth,
    BorderRightWidth,
    BorderBottomWidth,
    BorderLeftWidth,
    Padding,
    PaddingTop,
    PaddingBottom,
    PaddingLeft,
    PaddingRight,
    ColorButton,
    HeaderFontWeight,
    HeaderBackground,
    HeaderColor,
    HeaderSticky,
    CheckBox,
    CheckBoxHookColor,
    CheckBoxBackground,
    CheckBoxBorderColor,
    CheckBoxBorderRadius,
    CheckBoxBorderWidth,
}

/// A style property value: a symbolic token before theme resolution, or a
/// concrete value after.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// A symbolic token (`@form-background`, `@border-width:focus`).
    Token(String),
    /// A concrete textual value (a color, an alignment keyword).
    Str(String),
    /// A concrete pixel value.
    Px(u32),
    /// A concrete dimensionless number (line height, font weight).
    Num(f64),
    /// A concrete flag.
    Bool(bool),
}

impl StyleValue {
    /// Shorthand for a token value.
    pub fn token(t: impl Into<String>) -> Self {
        Self::Token(t.into())
    }

    /// Shorthand for a string value.
    pub fn str(s: impl Into<String>) -> Self {
        Self::Str(s.into())
    }

    /// The pixel value, if this is one.
    pub fn as_px(&self) -> Option<u32> {
        match self {
            Self::Px(v) => Some(*v),
            _ => None,
        }
    }
}

/// A single style sheet: property name to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StyleSheet(BTreeMap<StyleProp, StyleValue>);

impl StyleSheet {
    /// Construct an empty sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any existing value.
    pub fn set(&mut self, prop: StyleProp, value: StyleValue) {
        self.0.insert(prop, value);
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, prop: StyleProp, value: StyleValue) -> Self {
        self.set(prop, value);
        self
    }

    /// Set a property only if it is not already present.
    pub fn set_default(&mut self, prop: StyleProp, value: StyleValue) {
        self.0.entry(prop).or_insert(value);
    }

    /// Look up a property.
    pub fn get(&self, prop: StyleProp) -> Option<&StyleValue> {
        self.0.get(&prop)
    }

    /// Remove a property.
    pub fn remove(&mut self, prop: StyleProp) -> Option<StyleValue> {
        self.0.remove(&prop)
    }

    /// True if no properties are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of properties set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over properties and values.
    pub fn iter(&self) -> impl Iterator<Item = (&StyleProp, &StyleValue)> {
        self.0.iter()
    }

    /// Iterate mutably over values.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut StyleValue> {
        self.0.values_mut()
    }
}

/// The five interaction-state sheets of a widget.
#[derive(Debug, Clone, Default)]
pub(crate) struct SheetSet {
    pub(crate) base: StyleSheet,
    pub(crate) hover: StyleSheet,
    pub(crate) active: StyleSheet,
    pub(crate) error: StyleSheet,
    pub(crate) focus: StyleSheet,
}

/// Build the five sheets for an element. `wireframe` suppresses the
/// explicit per-node color overrides.
pub(crate) fn resolve(tag: Option<ElementTag>, attrs: &Mapping, wireframe: bool) -> SheetSet {
    SheetSet {
        base: base_sheet(tag, attrs, wireframe),
        hover: hover_sheet(tag),
        active: active_sheet(tag),
        error: error_sheet(tag),
        focus: focus_sheet(tag),
    }
}

/// The base sheet: fixed defaults, overlaid with kind rules, then the
/// node's explicit `COLOR`/`BACKGROUND`/`BORDER_COLOR` overrides (unless
/// wireframe). Override order matters: explicit attributes always win.
fn base_sheet(tag: Option<ElementTag>, attrs: &Mapping, wireframe: bool) -> StyleSheet {
    use StyleProp::*;

    let mut sheet = StyleSheet::new()
        .with(FontFamily, StyleValue::token("@font-family"))
        .with(FontSize, StyleValue::token("@font-size-m"))
        .with(LineHeight, StyleValue::token("@lineHeight"))
        .with(LetterSpacing, StyleValue::token("@letterSpacing"))
        .with(TextAlign, StyleValue::str("left"))
        .with(Color, StyleValue::token("@label-color"));

    match tag {
        Some(ElementTag::Button) => {
            sheet.set(Background, StyleValue::token("@button-primary-background"));
            sheet.set(
                BorderColor,
                StyleValue::token("@button-primary-border-color"),
            );
            sheet.set(BorderWidth, StyleValue::token("@border-width"));
            sheet.set(BorderStyle, StyleValue::str("solid"));
            sheet.set(Padding, StyleValue::Px(0));
            sheet.set(Color, StyleValue::token("@button-primary-color"));
            sheet.set(TextAlign, StyleValue::str("center"));
            sheet.set(VerticalAlign, StyleValue::str("middle"));
        }
        Some(ElementTag::Table) => {
            sheet.set(Background, StyleValue::token("@form-background"));
            sheet.set(BorderColor, StyleValue::token("@form-border-color"));
            sheet.set(BorderWidth, StyleValue::token("@border-width"));
            sheet.set(BorderStyle, StyleValue::str("solid"));
            sheet.set(Color, StyleValue::token("@form-color"));
            sheet.set(BorderRadius, StyleValue::token("@border-radius"));
            sheet.set(PaddingBottom, StyleValue::token("@form-padding-vertical"));
            sheet.set(PaddingTop, StyleValue::token("@form-padding-vertical"));
            sheet.set(PaddingLeft, StyleValue::token("@form-padding-horizontal"));
            sheet.set(PaddingRight, StyleValue::token("@form-padding-horizontal"));
            sheet.set(HeaderFontWeight, StyleValue::Num(800.0));
            sheet.set(HeaderBackground, StyleValue::token("@form-border-color"));
            sheet.set(HeaderColor, StyleValue::token("@form-background"));
            sheet.set(HeaderSticky, StyleValue::Bool(true));
            sheet.set(CheckBox, StyleValue::Bool(false));
            sheet.set(CheckBoxHookColor, StyleValue::token("@background-active"));
            sheet.set(CheckBoxBackground, StyleValue::token("@form-background"));
            sheet.set(
                CheckBoxBorderColor,
                StyleValue::token("@form-border-color"),
            );
            sheet.set(CheckBoxBorderRadius, StyleValue::token("@border-radius"));
            sheet.set(CheckBoxBorderWidth, StyleValue::Px(1));
        }
        Some(ElementTag::Container) => {
            sheet.set(ColorButton, StyleValue::token("@form-border-color"));
            sheet.set(BorderWidth, StyleValue::token("@border-width"));
            sheet.set(BorderStyle, StyleValue::str("solid"));
        }
        Some(ElementTag::Image) => {
            sheet.set(ColorButton, StyleValue::token("@form-border-color"));
            sheet.set(BorderWidth, StyleValue::Px(0));
            sheet.set(BorderStyle, StyleValue::str("solid"));
        }
        Some(ElementTag::Input) => {
            sheet.set(Background, StyleValue::token("@form-background"));
            sheet.set(BorderColor, StyleValue::token("@form-border-color"));
            sheet.set(BorderWidth, StyleValue::token("@border-width"));
            sheet.set(BorderStyle, StyleValue::str("solid"));
            sheet.set(BorderRadius, StyleValue::token("@border-radius"));
            sheet.set(Color, StyleValue::token("@form-color"));
            sheet.set(PaddingBottom, StyleValue::token("@form-padding-vertical"));
            sheet.set(PaddingTop, StyleValue::token("@form-padding-vertical"));
            sheet.set(PaddingLeft, StyleValue::token("@form-padding-horizontal"));
            sheet.set(PaddingRight, StyleValue::token("@form-padding-horizontal"));
            if matches!(attr_str(attrs, "TYPE"), Some("Checkbox" | "RadioBox")) {
                sheet.set(ColorButton, StyleValue::token("@form-border-color"));
                sheet.set(VerticalAlign, StyleValue::str("middle"));
            }
        }
        Some(ElementTag::Label) | None => {}
    }

    if attr_str(attrs, "TYPE") == Some("Headline") {
        sheet.set(FontSize, StyleValue::token("@font-size-xl"));
    }

    if !wireframe {
        if let Some(background) = attr_str(attrs, "BACKGROUND") {
            sheet.set(Background, StyleValue::str(background));
        }
        if let Some(color) = attr_str(attrs, "COLOR") {
            sheet.set(Color, StyleValue::str(color));
        }
        if let Some(border) = attr_str(attrs, "BORDER_COLOR") {
            sheet.set(BorderColor, StyleValue::str(border));
        }
    }

    sheet
}

/// Hover styling exists only for the interactive tags.
fn hover_sheet(tag: Option<ElementTag>) -> StyleSheet {
    use StyleProp::*;
    match tag {
        Some(ElementTag::Input) => StyleSheet::new()
            .with(BorderColor, StyleValue::token("@form-border-color:hover"))
            .with(Background, StyleValue::token("@form-background:hover"))
            .with(Color, StyleValue::token("@form-color:hover")),
        Some(ElementTag::Button) => StyleSheet::new()
            .with(
                BorderColor,
                StyleValue::token("@button-primary-border-color:hover"),
            )
            .with(
                Background,
                StyleValue::token("@button-primary-background:hover"),
            )
            .with(Color, StyleValue::token("@button-primary-color:hover")),
        _ => StyleSheet::new(),
    }
}

fn active_sheet(tag: Option<ElementTag>) -> StyleSheet {
    use StyleProp::*;
    match tag {
        Some(ElementTag::Input) => StyleSheet::new()
            .with(Color, StyleValue::token("@color-active"))
            .with(Background, StyleValue::token("@background-active")),
        _ => StyleSheet::new(),
    }
}

fn error_sheet(tag: Option<ElementTag>) -> StyleSheet {
    use StyleProp::*;
    match tag {
        Some(ElementTag::Input) => StyleSheet::new()
            .with(BorderColor, StyleValue::token("@form-border-color:error"))
            .with(Background, StyleValue::token("@form-background:error"))
            .with(Color, StyleValue::token("@form-color:error"))
            .with(ColorButton, StyleValue::token("@form-border-color:error")),
        _ => StyleSheet::new(),
    }
}

fn focus_sheet(tag: Option<ElementTag>) -> StyleSheet {
    use StyleProp::*;
    match tag {
        Some(ElementTag::Input) => StyleSheet::new()
            .with(BorderWidth, StyleValue::token("@border-width:focus"))
            .with(BorderColor, StyleValue::token("@form-border-color:focus"))
            .with(Background, StyleValue::token("@form-background:focus"))
            .with(Color, StyleValue::token("@form-color:focus")),
        _ => StyleSheet::new(),
    }
}
