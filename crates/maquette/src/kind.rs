//! Element tags, widget kinds and the static capability table.

use serde::Serialize;

/// The element type tag of a spec node.
///
/// Retained on widgets as provenance during the layout passes (containers
/// are the only elements that flow children) and stripped by cleanup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ElementTag {
    /// A flowing container of child elements.
    Container,
    /// Static text.
    Label,
    /// A clickable button.
    Button,
    /// A form input; the `TYPE` attribute selects the concrete kind.
    Input,
    /// An image placeholder.
    Image,
    /// A data table.
    Table,
}

impl ElementTag {
    /// Resolve a raw tag name. Unrecognized tags yield `None`; the parser
    /// falls back to a [`WidgetKind::Button`] so authoring stays forgiving.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "CONTAINER" => Some(Self::Container),
            "LABEL" => Some(Self::Label),
            "BUTTON" => Some(Self::Button),
            "INPUT" => Some(Self::Input),
            "IMAGE" => Some(Self::Image),
            "TABLE" => Some(Self::Table),
            _ => None,
        }
    }

    /// The widget kind for this tag. For `INPUT`, the `TYPE` sub-attribute
    /// picks the concrete kind, defaulting to a text box.
    pub fn widget_kind(&self, input_type: Option<&str>) -> WidgetKind {
        match self {
            Self::Container => WidgetKind::Box,
            Self::Label => WidgetKind::Label,
            Self::Button => WidgetKind::Button,
            Self::Image => WidgetKind::Image,
            Self::Table => WidgetKind::Table,
            Self::Input => match input_type {
                Some("Checkbox") => WidgetKind::LabeledCheckBox,
                Some("Password") => WidgetKind::Password,
                Some("RadioBox") => WidgetKind::LabeledRadioBox,
                Some("TextArea") => WidgetKind::TextArea,
                _ => WidgetKind::TextBox,
            },
        }
    }
}

/// The resolved kind of a widget in the output tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WidgetKind {
    /// The synthetic viewport root.
    Screen,
    /// A plain container box.
    Box,
    /// Static text.
    Label,
    /// A clickable button.
    Button,
    /// A single-line text input.
    TextBox,
    /// A password input.
    Password,
    /// A checkbox with a trailing label.
    LabeledCheckBox,
    /// A radio button with a trailing label.
    LabeledRadioBox,
    /// A multi-line text input.
    TextArea,
    /// A data table.
    Table,
    /// An image placeholder.
    Image,
}

impl WidgetKind {
    /// The static capability table for this kind. These flags describe
    /// which optional affordances the kind supports; they are never
    /// derived from content.
    pub fn capabilities(&self) -> Capabilities {
        match self {
            Self::Screen => Capabilities::default(),
            Self::Label => Capabilities {
                label: true,
                padding: true,
                advanced_text: true,
                ..Capabilities::default()
            },
            Self::Image => Capabilities {
                onclick: true,
                background_image: true,
                border_radius: true,
                ..Capabilities::default()
            },
            _ => Capabilities {
                label: true,
                background_color: true,
                border: true,
                editable: true,
                onclick: true,
                padding: true,
                ..Capabilities::default()
            },
        }
    }
}

impl std::fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Screen => "Screen",
            Self::Box => "Box",
            Self::Label => "Label",
            Self::Button => "Button",
            Self::TextBox => "TextBox",
            Self::Password => "Password",
            Self::LabeledCheckBox => "LabeledCheckBox",
            Self::LabeledRadioBox => "LabeledRadioBox",
            Self::TextArea => "TextArea",
            Self::Table => "Table",
            Self::Image => "Image",
        };
        f.write_str(name)
    }
}

/// Capability flags of a widget kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    /// Carries a text label.
    pub label: bool,
    /// Participates in padding.
    pub padding: bool,
    /// Supports rich text content.
    pub advanced_text: bool,
    /// Content is user-editable.
    pub editable: bool,
    /// Reacts to clicks.
    pub onclick: bool,
    /// Supports a background color.
    pub background_color: bool,
    /// Supports a border.
    pub border: bool,
    /// Supports a background image.
    pub background_image: bool,
    /// Supports rounded corners.
    pub border_radius: bool,
}

/// The default height token for a tag, resolved to pixels by the theme at
/// widget creation. Containers start at zero height and are sized by
/// layout; image and table boxes get the large box size, everything else
/// the form control height.
pub(crate) fn height_token(tag: Option<ElementTag>) -> Option<&'static str> {
    match tag {
        Some(ElementTag::Container) => None,
        Some(ElementTag::Image | ElementTag::Table) => Some("@box-height-l"),
        _ => Some("@form-height"),
    }
}

/// The default width token for a tag. Widths are provisional; layout
/// assigns the final width of every widget.
pub(crate) fn width_token(_tag: Option<ElementTag>) -> &'static str {
    "@form-width"
}
