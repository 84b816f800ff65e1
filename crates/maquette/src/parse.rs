//! The spec parser: materializes the widget tree from the declarative
//! document, depth-first.

use serde_yaml::{Mapping, Value};

use crate::{
    kind::{ElementTag, WidgetKind},
    log::ImportLog,
    session::Session,
    spec::{attr, attr_str, scalar_text},
    style,
    theme::{ThemeResolver, ThemeTable},
    widget::{Column, Flow, Props, Widget},
};

/// Builds widgets from spec nodes.
///
/// The parser owns no state of its own; ids and z-order come from the
/// caller's [`Session`], styles from the theme seam, and malformed-node
/// reports go to the import log. A malformed node never aborts the import:
/// it is reported, its subtree dropped, and siblings continue.
pub struct Parser<'a> {
    session: &'a mut Session,
    resolver: &'a dyn ThemeResolver,
    table: &'a ThemeTable,
    log: &'a dyn ImportLog,
    wireframe: bool,
}

impl<'a> Parser<'a> {
    /// Construct a parser over a session and its collaborators.
    pub fn new(
        session: &'a mut Session,
        resolver: &'a dyn ThemeResolver,
        table: &'a ThemeTable,
        log: &'a dyn ImportLog,
        wireframe: bool,
    ) -> Self {
        Self {
            session,
            resolver,
            table,
            log,
            wireframe,
        }
    }

    /// Parse a document root into `parent`. A top-level sequence is treated
    /// as a list of sibling elements.
    pub fn parse_document(&mut self, doc: &Value, parent: &mut Widget) {
        match doc {
            Value::Sequence(nodes) => {
                for node in nodes {
                    self.parse_node(node, parent);
                }
            }
            _ => self.parse_node(doc, parent),
        }
    }

    /// Parse one spec node into `parent`, recursing into `CHILDREN`.
    pub fn parse_node(&mut self, node: &Value, parent: &mut Widget) {
        let Some(map) = node.as_mapping() else {
            self.log.report_error("parse_node", node);
            return;
        };
        if map.len() != 1 {
            self.log.report_error("parse_node", node);
            return;
        }
        let Some((key, value)) = map.iter().next() else {
            return;
        };
        let Some(tag_name) = key.as_str() else {
            self.log.report_error("parse_node", node);
            return;
        };

        let empty = Mapping::new();
        let attrs = value.as_mapping().unwrap_or(&empty);
        let mut widget = self.create_widget(tag_name, attrs);

        if let Some(children) = attr(attrs, "CHILDREN").and_then(Value::as_sequence) {
            for child in children {
                self.parse_node(child, &mut widget);
            }
        }
        parent.children.push(widget);
    }

    /// Materialize a widget for an element. Unrecognized tags fall back to
    /// the button kind so authoring stays forgiving.
    fn create_widget(&mut self, tag_name: &str, attrs: &Mapping) -> Widget {
        let tag = ElementTag::from_tag(tag_name);
        let input_type = attr_str(attrs, "TYPE");
        let kind = tag
            .map(|t| t.widget_kind(input_type))
            .unwrap_or(WidgetKind::Button);
        let (id, z) = self.session.allocate();
        let sheets = style::resolve(tag, attrs, self.wireframe);

        let mut widget = Widget {
            id,
            name: format!("{kind}{z}"),
            kind,
            x: 0,
            y: 0,
            w: 0,
            h: 0,
            z,
            style: sheets.base,
            hover: sheets.hover,
            active: sheets.active,
            error: sheets.error,
            focus: sheets.focus,
            props: self.props(tag, attrs),
            has: kind.capabilities(),
            children: Vec::new(),
            tag,
            flow: self.flow(tag, attrs),
        };

        self.resolver.resolve_variables(self.table, &mut widget);
        self.resolver.resolve_size_tokens(self.table, &mut widget);
        self.resolver.resolve_border_tokens(&mut widget);
        widget
    }

    /// Flow direction is retained for containers only; `ROW` is the single
    /// recognized override.
    fn flow(&self, tag: Option<ElementTag>, attrs: &Mapping) -> Option<Flow> {
        if tag != Some(ElementTag::Container) {
            return None;
        }
        if attr_str(attrs, "FLEX-DIRECTION") == Some("ROW") {
            Some(Flow::Row)
        } else {
            Some(Flow::Column)
        }
    }

    /// Type-specific props.
    fn props(&self, tag: Option<ElementTag>, attrs: &Mapping) -> Props {
        let mut props = Props::default();
        if let Some(content) = attr_str(attrs, "CONTENT") {
            props.label = Some(content.to_owned());
        }

        match tag {
            Some(ElementTag::Table) => {
                if let Some(columns) = attr(attrs, "COLUMNS").and_then(Value::as_sequence) {
                    props.columns = Some(
                        columns
                            .iter()
                            .filter_map(scalar_text)
                            .map(Column::new)
                            .collect(),
                    );
                }
                if let Some(rows) = attr(attrs, "DATA").and_then(Value::as_sequence) {
                    // Row lengths are not validated against the column
                    // count; that is the consuming renderer's concern.
                    props.data = Some(
                        rows.iter()
                            .filter_map(Value::as_sequence)
                            .map(|row| row.iter().filter_map(scalar_text).collect())
                            .collect(),
                    );
                }
            }
            Some(ElementTag::Input) => {
                props.placeholder = Some(true);
                if let Some(placeholder) = attr_str(attrs, "PLACEHOLDER") {
                    props.label = Some(placeholder.to_owned());
                }
                if matches!(attr_str(attrs, "TYPE"), Some("Checkbox" | "RadioBox")) {
                    props.checked = Some(false);
                }
            }
            _ => {}
        }
        props
    }
}

#[cfg(test)]
mod tests {
    use geom::Expanse;

    use super::*;
    use crate::{
        error::Result,
        spec,
        theme::BuiltinThemes,
        tutils::RecordingLog,
        widget::WidgetId,
    };

    fn parse(yaml: &str) -> (Widget, RecordingLog) {
        let mut session = Session::default();
        let resolver = BuiltinThemes::new();
        let table = resolver.theme("wireframe").expect("wireframe theme").clone();
        let log = RecordingLog::default();
        let mut screen = {
            let (id, z) = session.allocate();
            Widget::screen(id, z, Expanse::new(400, 800))
        };
        let doc = spec::parse_document(yaml).expect("fixture yaml");
        Parser::new(&mut session, &resolver, &table, &log, true).parse_document(&doc, &mut screen);
        (screen, log)
    }

    #[test]
    fn builds_nested_containers() -> Result<()> {
        let (screen, log) = parse(
            "CONTAINER:\n  FLEX-DIRECTION: ROW\n  CHILDREN:\n    - BUTTON:\n        CONTENT: \"Go\"\n    - BUTTON:\n        CONTENT: \"Stop\"\n",
        );
        assert_eq!(log.len(), 0);
        assert_eq!(screen.children.len(), 1);
        let row = &screen.children[0];
        assert_eq!(row.kind, WidgetKind::Box);
        assert_eq!(row.flow(), Flow::Row);
        assert_eq!(row.children.len(), 2);
        assert_eq!(row.children[0].props.label.as_deref(), Some("Go"));
        Ok(())
    }

    #[test]
    fn malformed_sibling_is_skipped() -> Result<()> {
        let (screen, log) = parse(
            "CONTAINER:\n  CHILDREN:\n    - LABEL:\n        CONTENT: \"a\"\n    - A: 1\n      B: 2\n    - LABEL:\n        CONTENT: \"b\"\n",
        );
        assert_eq!(log.len(), 1);
        let container = &screen.children[0];
        assert_eq!(container.children.len(), 2);
        assert_eq!(container.children[0].props.label.as_deref(), Some("a"));
        assert_eq!(container.children[1].props.label.as_deref(), Some("b"));
        Ok(())
    }

    #[test]
    fn ids_increase_depth_first() -> Result<()> {
        let (screen, _) = parse(
            "CONTAINER:\n  CHILDREN:\n    - CONTAINER:\n        CHILDREN:\n          - LABEL:\n              CONTENT: \"x\"\n    - BUTTON:\n        CONTENT: \"y\"\n",
        );
        let mut ids = Vec::new();
        let mut zs = Vec::new();
        screen.walk(&mut |w| {
            ids.push(w.id.0);
            zs.push(w.z);
        });
        assert_eq!(ids, vec![10_000, 10_001, 10_002, 10_003, 10_004]);
        assert_eq!(zs, vec![0, 1, 2, 3, 4]);
        Ok(())
    }

    #[test]
    fn checkbox_input() -> Result<()> {
        let (screen, _) = parse("INPUT:\n  TYPE: Checkbox\n  PLACEHOLDER: \"I agree\"\n");
        let input = &screen.children[0];
        assert_eq!(input.kind, WidgetKind::LabeledCheckBox);
        assert_eq!(input.props.checked, Some(false));
        assert_eq!(input.props.placeholder, Some(true));
        assert_eq!(input.props.label.as_deref(), Some("I agree"));
        Ok(())
    }

    #[test]
    fn table_columns_and_data() -> Result<()> {
        let (screen, _) = parse(
            "TABLE:\n  COLUMNS: [\"ID\", \"Name\"]\n  DATA:\n    - [\"1\", \"one\", \"extra\"]\n",
        );
        let table = &screen.children[0];
        let columns = table.props.columns.as_ref().expect("columns");
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].label, "ID");
        assert_eq!(columns[1].label, "Name");
        for column in columns {
            assert!(!column.is_editable && !column.is_sortable && !column.is_searchable);
            assert_eq!(column.width, 100);
        }
        // Oversized rows pass through untouched.
        assert_eq!(table.props.data.as_ref().expect("data")[0].len(), 3);
        Ok(())
    }

    #[test]
    fn unknown_tag_falls_back_to_button() -> Result<()> {
        let (screen, log) = parse("WIDGET:\n  CONTENT: \"?\"\n");
        assert_eq!(log.len(), 0);
        assert_eq!(screen.children[0].kind, WidgetKind::Button);
        assert_eq!(screen.children[0].tag, None);
        Ok(())
    }

    #[test]
    fn default_heights_from_theme() -> Result<()> {
        let (screen, _) = parse(
            "CONTAINER:\n  CHILDREN:\n    - INPUT:\n        TYPE: Text\n    - IMAGE:\n        CONTENT: \"pic\"\n",
        );
        let container = &screen.children[0];
        assert_eq!(container.h, 0);
        assert_eq!(container.children[0].h, 40);
        assert_eq!(container.children[1].h, 200);
        Ok(())
    }

    #[test]
    fn screen_keeps_allocator_continuity() -> Result<()> {
        let mut session = Session::new(500);
        let (id, z) = session.allocate();
        let screen = Widget::screen(id, z, Expanse::new(10, 10));
        assert_eq!(screen.id, WidgetId(500));
        assert_eq!(session.peek_id(), 501);
        Ok(())
    }
}
