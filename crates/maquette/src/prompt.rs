//! Prompt construction and payload extraction for the completion service.
//!
//! The network transport is an external collaborator; this module only
//! holds the pure ends of the exchange: the prompt that teaches the model
//! the declarative UI language, and the extraction of YAML or HTML
//! payloads from whatever prose the model wraps its answer in.

use geom::Expanse;

use crate::error::{Error, Result};

/// The device class a generated mockup targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    /// A desktop browser window.
    Desktop,
    /// A phone screen.
    Mobile,
    /// A tablet screen.
    Tablet,
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
        })
    }
}

/// The render target described to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Device {
    /// Device class.
    pub kind: DeviceKind,
    /// Screen size in pixels.
    pub screen: Expanse,
}

/// Build the prompt that describes the declarative UI language and asks
/// for a screen matching `description`, sized for `device`.
pub fn ui_language_prompt(description: &str, device: &Device) -> String {
    format!(
        "This is a UI language in YAML which has the following elements:\n\
         \n\
         CONTAINER: An element that can have child elements. A container has a list of CHILDREN\n\
         elements and a FLEX-DIRECTION attribute with the values ROW and COLUMN. ROW aligns the\n\
         children horizontally from left to right, COLUMN aligns them vertically from top to down.\n\
         \n\
         LABEL: An element that shows text. It has a CONTENT attribute and a TYPE attribute which\n\
         can be \"Headline\", \"Label\" or \"Paragraph\".\n\
         \n\
         BUTTON: An element that shows text. It has a CONTENT attribute.\n\
         \n\
         INPUT: An element that renders a form field. It can have a PLACEHOLDER attribute and a\n\
         TYPE attribute. The TYPE can be \"Text\", \"Checkbox\", \"RadioBox\", \"Password\" or \"TextArea\".\n\
         \n\
         IMAGE: An element that presents an image. It has a CONTENT attribute. Images are optional\n\
         and should only be included if needed.\n\
         \n\
         TABLE: An element that presents a table. It has a COLUMNS attribute which is a list of\n\
         column names, and a DATA attribute which is an array of arrays of string values.\n\
         \n\
         Each element can have a COLOR, BACKGROUND and BORDER_COLOR attribute to describe the\n\
         visual appearance. The values are hex color codes.\n\
         \n\
         The screen you generate runs on a {kind} device with a width of {width} pixels.\n\
         \n\
         Please generate:\n\
         \n\
         {description}\n\
         \n\
         Return the result as YAML in the defined language. Do not include any additional text.\n",
        kind = device.kind,
        width = device.screen.w,
        description = description,
    )
}

/// The element tags that mark a plausible UI document.
const TAGS: [&str; 6] = [
    "CONTAINER:",
    "LABEL:",
    "BUTTON:",
    "INPUT:",
    "IMAGE:",
    "TABLE:",
];

/// Extract the YAML payload from completion text. A fenced code block is
/// preferred; failing that, text that opens with a known element tag is
/// taken whole.
pub fn extract_yaml(content: &str) -> Result<String> {
    if let Some(start) = content.find("```") {
        let body = &content[start + 3..];
        // Drop the language word on the opening fence, if any.
        let body = match body.find('\n') {
            Some(eol) => &body[eol + 1..],
            None => body,
        };
        let body = match body.find("```") {
            Some(end) => &body[..end],
            None => body,
        };
        if !body.trim().is_empty() {
            return Ok(body.trim_end().to_owned());
        }
    }
    let trimmed = content.trim();
    if TAGS.iter().any(|tag| trimmed.starts_with(tag)) {
        return Ok(trimmed.to_owned());
    }
    Err(Error::Extract("no yaml payload in completion".into()))
}

/// Extract an HTML document from completion text: everything between the
/// first `html>` and the closing `</html>`, rewrapped.
pub fn extract_html(content: &str) -> Result<String> {
    if content.is_empty() {
        return Err(Error::Extract("empty completion".into()));
    }
    let start = content
        .find("html>")
        .ok_or_else(|| Error::Extract("no html document in completion".into()))?;
    let end = content
        .find("</html>")
        .ok_or_else(|| Error::Extract("unterminated html document".into()))?;
    if end < start {
        return Err(Error::Extract("unterminated html document".into()));
    }
    let inner = content[start + 5..end].replace("<html>", "");
    Ok(format!("<html>{inner}</html>"))
}
