//! The top-level importer: parse → style → layout → post-process.

use geom::Expanse;

use crate::{
    error::{Error, Result},
    layout::LayoutEngine,
    log::{ImportLog, TraceLog},
    measure::{HeuristicMeasurer, TextMeasurer},
    parse::Parser,
    pipeline,
    session::Session,
    spec,
    theme::{BuiltinThemes, ThemeResolver},
    widget::Widget,
};

/// Recognized import options.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Suppress container insets and visual boxing.
    pub remove_containers: bool,
    /// Wireframe-only render: explicit per-node color overrides are
    /// ignored.
    pub wireframe: bool,
    /// Theme selection; the wireframe theme when unset.
    pub custom_style: Option<String>,
    /// Render-target viewport. Geometry is scaled from the authoring
    /// viewport to this one; unset means no remapping.
    pub device: Option<Expanse>,
    /// Horizontal and vertical packing gap.
    pub gap: Expanse,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            remove_containers: false,
            wireframe: false,
            custom_style: None,
            device: None,
            gap: Expanse::new(16, 16),
        }
    }
}

/// One import session.
///
/// The importer owns the id/z allocator, so sequential imports through one
/// importer never produce colliding ids. Collaborator seams (theme,
/// measurement, logging) default to the stock implementations and can be
/// swapped out.
pub struct Importer {
    resolver: Box<dyn ThemeResolver>,
    measurer: Box<dyn TextMeasurer>,
    log: Box<dyn ImportLog>,
    options: ImportOptions,
    session: Session,
}

impl Importer {
    /// Construct an importer with the stock collaborators and the default
    /// id seed.
    pub fn new() -> Self {
        Self {
            resolver: Box::new(BuiltinThemes::new()),
            measurer: Box::new(HeuristicMeasurer::default()),
            log: Box::new(TraceLog),
            options: ImportOptions::default(),
            session: Session::default(),
        }
    }

    /// Replace the theme resolver.
    pub fn with_resolver(mut self, resolver: impl ThemeResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    /// Replace the text measurer.
    pub fn with_measurer(mut self, measurer: impl TextMeasurer + 'static) -> Self {
        self.measurer = Box::new(measurer);
        self
    }

    /// Replace the import log.
    pub fn with_log(mut self, log: impl ImportLog + 'static) -> Self {
        self.log = Box::new(log);
        self
    }

    /// Replace the options.
    pub fn with_options(mut self, options: ImportOptions) -> Self {
        self.options = options;
        self
    }

    /// Reseed the id allocator. Repeated imports share the session, so a
    /// caller continuing an existing model passes the next free id here.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.session = Session::new(seed);
        self
    }

    /// Compile a declarative document into a laid-out widget tree for the
    /// given authoring viewport.
    ///
    /// Recoverable problems (malformed nodes) are reported to the import
    /// log and skipped; anything else aborts the import with a single
    /// tagged error and no partial tree.
    pub fn import(&mut self, content: &str, viewport: Expanse) -> Result<Widget> {
        let doc = spec::parse_document(content)?;
        let style_name = self
            .options
            .custom_style
            .clone()
            .unwrap_or_else(|| "wireframe".to_owned());
        let table = self
            .resolver
            .theme(&style_name)
            .ok_or_else(|| Error::UnknownTheme(style_name.clone()))?
            .clone();

        let mut screen = {
            let (id, z) = self.session.allocate();
            Widget::screen(id, z, viewport)
        };
        Parser::new(
            &mut self.session,
            &*self.resolver,
            &table,
            &*self.log,
            self.options.wireframe,
        )
        .parse_document(&doc, &mut screen);

        let engine = LayoutEngine::new(&*self.measurer)
            .with_gap(self.options.gap)
            .with_remove_containers(self.options.remove_containers);
        engine.run(&mut screen)?;

        let device = self.options.device.unwrap_or(viewport);
        pipeline::scale(&mut screen, viewport, device);
        engine.run(&mut screen)?;
        pipeline::cleanup(&mut screen, self.options.remove_containers);
        Ok(screen)
    }
}

impl Default for Importer {
    fn default() -> Self {
        Self::new()
    }
}
