//! Integration tests for spec parsing through the importer.

#[cfg(test)]
mod tests {
    use maquette::{
        Importer, Result, WidgetKind,
        geom::Expanse,
        tutils::RecordingLog,
    };

    const VIEWPORT: Expanse = Expanse { w: 400, h: 800 };

    #[test]
    fn malformed_node_is_dropped_and_logged() -> Result<()> {
        let yaml = "\
CONTAINER:
  CHILDREN:
    - LABEL:
        CONTENT: \"first\"
    - A: 1
      B: 2
    - LABEL:
        CONTENT: \"second\"
";
        let log = RecordingLog::new();
        let mut importer = Importer::new().with_log(log.clone());
        let screen = importer.import(yaml, VIEWPORT)?;
        let container = &screen.children[0];
        assert_eq!(container.children.len(), 2);
        assert_eq!(container.children[0].props.label.as_deref(), Some("first"));
        assert_eq!(container.children[1].props.label.as_deref(), Some("second"));
        assert_eq!(log.len(), 1);
        Ok(())
    }

    #[test]
    fn ids_and_z_strictly_increase_depth_first() -> Result<()> {
        let yaml = "\
CONTAINER:
  CHILDREN:
    - CONTAINER:
        CHILDREN:
          - LABEL:
              CONTENT: \"deep\"
          - BUTTON:
              CONTENT: \"deeper\"
    - INPUT:
        TYPE: Text
";
        let mut importer = Importer::new();
        let screen = importer.import(yaml, VIEWPORT)?;
        let mut ids = Vec::new();
        let mut zs = Vec::new();
        screen.walk(&mut |w| {
            ids.push(w.id.0);
            zs.push(w.z);
        });
        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1], "ids not increasing: {ids:?}");
        }
        for pair in zs.windows(2) {
            assert!(pair[0] < pair[1], "z not increasing: {zs:?}");
        }
        let mut deduped = ids.clone();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
        Ok(())
    }

    #[test]
    fn sequential_imports_share_the_id_space() -> Result<()> {
        let yaml = "BUTTON:\n  CONTENT: \"Go\"\n";
        let mut importer = Importer::new();
        let first = importer.import(yaml, VIEWPORT)?;
        let second = importer.import(yaml, VIEWPORT)?;
        let mut first_ids = Vec::new();
        first.walk(&mut |w| first_ids.push(w.id.0));
        let mut second_ids = Vec::new();
        second.walk(&mut |w| second_ids.push(w.id.0));
        let max_first = first_ids.iter().max().expect("ids");
        assert!(second_ids.iter().all(|id| id > max_first));
        Ok(())
    }

    #[test]
    fn seed_offsets_the_id_space() -> Result<()> {
        let yaml = "BUTTON:\n  CONTENT: \"Go\"\n";
        let mut importer = Importer::new().with_seed(50_000);
        let screen = importer.import(yaml, VIEWPORT)?;
        assert_eq!(screen.id.0, 50_000);
        assert_eq!(screen.children[0].id.0, 50_001);
        Ok(())
    }

    #[test]
    fn checkbox_input_kind_and_props() -> Result<()> {
        let yaml = "\
INPUT:
  TYPE: Checkbox
  PLACEHOLDER: \"I agree to terms and conditions\"
";
        let mut importer = Importer::new();
        let screen = importer.import(yaml, VIEWPORT)?;
        let input = &screen.children[0];
        assert_eq!(input.kind, WidgetKind::LabeledCheckBox);
        assert_eq!(input.props.checked, Some(false));
        assert_eq!(input.props.placeholder, Some(true));
        Ok(())
    }

    #[test]
    fn table_columns_in_order_with_default_flags() -> Result<()> {
        let yaml = "\
TABLE:
  COLUMNS: [\"ID\", \"Name\"]
  DATA:
    - [\"1\", \"one\"]
    - [\"2\", \"two\"]
";
        let mut importer = Importer::new();
        let screen = importer.import(yaml, VIEWPORT)?;
        let table = &screen.children[0];
        assert_eq!(table.kind, WidgetKind::Table);
        let columns = table.props.columns.as_ref().expect("columns");
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].label, "ID");
        assert_eq!(columns[1].label, "Name");
        for column in columns {
            assert!(!column.is_editable);
            assert!(!column.is_sortable);
            assert!(!column.is_searchable);
        }
        assert_eq!(table.props.data.as_ref().expect("data").len(), 2);
        Ok(())
    }

    #[test]
    fn unknown_tag_defaults_to_button() -> Result<()> {
        let yaml = "CAROUSEL:\n  CONTENT: \"spin\"\n";
        let mut importer = Importer::new();
        let screen = importer.import(yaml, VIEWPORT)?;
        assert_eq!(screen.children[0].kind, WidgetKind::Button);
        Ok(())
    }

    #[test]
    fn unparseable_document_is_fatal() {
        let mut importer = Importer::new();
        assert!(matches!(
            importer.import("[unterminated", VIEWPORT),
            Err(maquette::Error::Parse(_))
        ));
    }

    #[test]
    fn unknown_theme_is_fatal() {
        let mut importer = Importer::new().with_options(maquette::ImportOptions {
            custom_style: Some("brutalist".into()),
            ..maquette::ImportOptions::default()
        });
        assert!(matches!(
            importer.import("BUTTON:\n  CONTENT: \"x\"\n", VIEWPORT),
            Err(maquette::Error::UnknownTheme(_))
        ));
    }
}
