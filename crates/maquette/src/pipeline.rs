//! Post-processing: scale, relayout, cleanup.
//!
//! Three pure tree transforms applied strictly after layout. Scaling
//! remaps geometry from the authoring viewport to the render target;
//! relayout (performed by the importer with the same engine) restores
//! internal consistency; cleanup strips the fields that are not part of
//! the render contract.

use geom::Expanse;

use crate::{
    style::{StyleProp, StyleSheet, StyleValue},
    widget::Widget,
};

/// Pixel-valued style properties that follow the horizontal scale factor.
const SCALED_PROPS: [StyleProp; 7] = [
    StyleProp::FontSize,
    StyleProp::Padding,
    StyleProp::PaddingTop,
    StyleProp::PaddingBottom,
    StyleProp::PaddingLeft,
    StyleProp::PaddingRight,
    StyleProp::BorderRadius,
];

/// Remap the tree's geometry from the `from` viewport to the `to`
/// viewport. X positions and widths follow the horizontal ratio, y
/// positions and heights the vertical one; pixel-valued style properties
/// (font size, paddings, radii) follow the horizontal ratio. Identity
/// when the viewports match.
pub fn scale(node: &mut Widget, from: Expanse, to: Expanse) {
    let (fx, fy) = from.factors(&to);
    if fx == 1.0 && fy == 1.0 {
        return;
    }
    scale_node(node, fx, fy);
}

fn scale_node(node: &mut Widget, fx: f64, fy: f64) {
    node.set_frame(node.frame().scale(fx, fy));
    for sheet in node.sheets_mut() {
        scale_sheet(sheet, fx);
    }
    for child in &mut node.children {
        scale_node(child, fx, fy);
    }
}

fn scale_sheet(sheet: &mut StyleSheet, fx: f64) {
    for prop in SCALED_PROPS {
        if let Some(StyleValue::Px(v)) = sheet.get(prop) {
            let scaled = (*v as f64 * fx).round() as u32;
            sheet.set(prop, StyleValue::Px(scaled));
        }
    }
}

/// Strip the transient fields from every node, leaving only the render
/// contract: id, kind, geometry, style, props, capabilities and children.
/// Under `remove_containers`, container boxing styles are cleared as well.
pub fn cleanup(node: &mut Widget, remove_containers: bool) {
    if remove_containers && node.is_container() {
        for prop in [
            StyleProp::BorderColor,
            StyleProp::BorderWidth,
            StyleProp::BorderStyle,
            StyleProp::BorderRadius,
            StyleProp::BorderTopColor,
            StyleProp::BorderRightColor,
            StyleProp::BorderBottomColor,
            StyleProp::BorderLeftColor,
            StyleProp::BorderTopWidth,
            StyleProp::BorderRightWidth,
            StyleProp::BorderBottomWidth,
            StyleProp::BorderLeftWidth,
            StyleProp::ColorButton,
        ] {
            node.style.remove(prop);
        }
    }
    node.tag = None;
    node.flow = None;
    for child in &mut node.children {
        cleanup(child, remove_containers);
    }
}
