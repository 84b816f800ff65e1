//! Integration tests for style resolution.

#[cfg(test)]
mod tests {
    use maquette::{
        ImportOptions, Importer, Result, StyleProp, StyleValue,
        geom::Expanse,
    };

    const VIEWPORT: Expanse = Expanse { w: 400, h: 800 };

    fn importer(wireframe: bool) -> Importer {
        Importer::new().with_options(ImportOptions {
            wireframe,
            ..ImportOptions::default()
        })
    }

    #[test]
    fn wireframe_suppresses_explicit_color() -> Result<()> {
        let yaml = "LABEL:\n  CONTENT: \"Hello\"\n  COLOR: \"red\"\n";
        let screen = importer(true).import(yaml, VIEWPORT)?;
        let label = &screen.children[0];
        assert_eq!(
            label.style.get(StyleProp::Color),
            Some(&StyleValue::Str("#333333".into()))
        );
        Ok(())
    }

    #[test]
    fn explicit_color_wins_when_not_wireframe() -> Result<()> {
        let yaml = "LABEL:\n  CONTENT: \"Hello\"\n  COLOR: \"red\"\n";
        let screen = importer(false).import(yaml, VIEWPORT)?;
        let label = &screen.children[0];
        assert_eq!(
            label.style.get(StyleProp::Color),
            Some(&StyleValue::Str("red".into()))
        );
        Ok(())
    }

    #[test]
    fn overrides_beat_kind_defaults() -> Result<()> {
        let yaml = "\
BUTTON:
  CONTENT: \"MORE.\"
  BACKGROUND: \"#FFD700\"
  BORDER_COLOR: \"yellow\"
";
        let screen = importer(false).import(yaml, VIEWPORT)?;
        let button = &screen.children[0];
        assert_eq!(
            button.style.get(StyleProp::Background),
            Some(&StyleValue::Str("#FFD700".into()))
        );
        assert_eq!(
            button.style.get(StyleProp::BorderColor),
            Some(&StyleValue::Str("yellow".into()))
        );
        // Untouched defaults still resolve through the theme.
        assert_eq!(
            button.style.get(StyleProp::Color),
            Some(&StyleValue::Str("#ffffff".into()))
        );
        Ok(())
    }

    #[test]
    fn interaction_sheets_only_for_interactive_kinds() -> Result<()> {
        let yaml = "\
CONTAINER:
  CHILDREN:
    - LABEL:
        CONTENT: \"text\"
    - BUTTON:
        CONTENT: \"go\"
    - INPUT:
        TYPE: Text
    - IMAGE:
        CONTENT: \"pic\"
";
        let screen = importer(true).import(yaml, VIEWPORT)?;
        let container = &screen.children[0];
        let (label, button, input, image) = (
            &container.children[0],
            &container.children[1],
            &container.children[2],
            &container.children[3],
        );
        for passive in [label, image] {
            assert!(passive.hover.is_empty());
            assert!(passive.active.is_empty());
            assert!(passive.error.is_empty());
            assert!(passive.focus.is_empty());
        }
        assert!(!button.hover.is_empty());
        assert!(button.focus.is_empty());
        assert!(!input.hover.is_empty());
        assert!(!input.active.is_empty());
        assert!(!input.error.is_empty());
        assert!(!input.focus.is_empty());
        Ok(())
    }

    #[test]
    fn state_tokens_resolve_through_the_theme() -> Result<()> {
        let yaml = "INPUT:\n  TYPE: Text\n";
        let screen = importer(true).import(yaml, VIEWPORT)?;
        let input = &screen.children[0];
        assert_eq!(
            input.hover.get(StyleProp::Background),
            Some(&StyleValue::Str("#f7f7f7".into()))
        );
        assert_eq!(
            input.focus.get(StyleProp::BorderWidth),
            Some(&StyleValue::Px(2))
        );
        Ok(())
    }

    #[test]
    fn headline_gets_the_large_font() -> Result<()> {
        let yaml = "\
CONTAINER:
  CHILDREN:
    - LABEL:
        TYPE: Headline
        CONTENT: \"Welcome to Our Startup\"
    - LABEL:
        TYPE: Paragraph
        CONTENT: \"Body copy\"
";
        let screen = importer(true).import(yaml, VIEWPORT)?;
        let container = &screen.children[0];
        assert_eq!(
            container.children[0].style.get(StyleProp::FontSize),
            Some(&StyleValue::Px(32))
        );
        assert_eq!(
            container.children[1].style.get(StyleProp::FontSize),
            Some(&StyleValue::Px(16))
        );
        Ok(())
    }

    #[test]
    fn border_shorthand_expands_per_side() -> Result<()> {
        let yaml = "INPUT:\n  TYPE: Text\n";
        let screen = importer(true).import(yaml, VIEWPORT)?;
        let input = &screen.children[0];
        assert_eq!(
            input.style.get(StyleProp::BorderTopColor),
            Some(&StyleValue::Str("#999999".into()))
        );
        assert_eq!(
            input.style.get(StyleProp::BorderLeftWidth),
            Some(&StyleValue::Px(1))
        );
        Ok(())
    }

    #[test]
    fn capability_flags_are_static_per_kind() -> Result<()> {
        let yaml = "\
CONTAINER:
  CHILDREN:
    - LABEL:
        CONTENT: \"text\"
    - IMAGE:
        CONTENT: \"pic\"
    - BUTTON:
        CONTENT: \"go\"
";
        let screen = importer(true).import(yaml, VIEWPORT)?;
        let container = &screen.children[0];
        assert!(container.children[0].has.advanced_text);
        assert!(!container.children[0].has.editable);
        assert!(container.children[1].has.background_image);
        assert!(container.children[2].has.onclick);
        assert!(container.children[2].has.editable);
        Ok(())
    }
}
