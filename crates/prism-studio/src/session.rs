//! One editing session: a live engine plus the host collaborators.

use std::fmt::Write as _;

use anyhow::{Context, Result};

use prism_engine::{default_catalog, find_preset, Color, GradientEngine, RenderError};

use crate::cli::{Commands, OutputArgs, OutputFormat};
use crate::host::Host;
use crate::store::GradientStore;

/// Where a command's color sequence comes from.
#[derive(Debug, Clone)]
pub enum Source {
    Random(usize),
    Harmonious(usize),
    Preset(String),
    Colors(Vec<Color>),
}

pub struct Session<S> {
    engine: GradientEngine,
    host: Host,
    store: S,
}

impl<S: GradientStore> Session<S> {
    pub fn new(engine: GradientEngine, host: Host, store: S) -> Self {
        Self { engine, host, store }
    }

    pub fn engine(&self) -> &GradientEngine {
        &self.engine
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Runs one CLI command and returns the text to print.
    pub fn run(&mut self, command: Commands) -> Result<String> {
        match command {
            Commands::Random(args) => self.compose(Source::Random(args.count), &args.output),
            Commands::Harmonious(args) => {
                self.compose(Source::Harmonious(args.count), &args.output)
            }
            Commands::Preset { name, output } => self.compose(Source::Preset(name), &output),
            Commands::Colors { colors, output } => self.compose(Source::Colors(colors), &output),
            Commands::Presets => Ok(gallery()),
            Commands::Saved => self.list_saved(),
        }
    }

    /// Fills the engine from `source`, applies edits and mode, then renders.
    pub fn compose(&mut self, source: Source, opts: &OutputArgs) -> Result<String> {
        match source {
            Source::Random(count) => self.engine.generate_random(count),
            Source::Harmonious(count) => self.engine.generate_harmonious(count),
            Source::Preset(name) => {
                let Some(preset) = find_preset(&name) else {
                    anyhow::bail!("unknown preset {name:?}; run `prism presets` for the list");
                };
                self.engine.apply_preset(preset);
                log::info!("applied preset {}", preset.name);
            }
            Source::Colors(colors) => self.engine = GradientEngine::from_colors(colors),
        }

        self.engine.set_mode(opts.mode);
        for edit in &opts.edits {
            if !self.engine.update_color(edit.index, edit.color) {
                log::warn!(
                    "--set {}={} ignored: only {} colors",
                    edit.index,
                    edit.color,
                    self.engine.len()
                );
            }
        }

        let output = self.render(opts.format)?;

        if opts.copy {
            self.copy_output(&output, opts.format);
        }

        if let Some(name) = &opts.save {
            self.store
                .save(name, &self.engine.colors(), self.engine.mode())
                .with_context(|| format!("saving gradient {name:?}"))?;
            self.host.notify(&format!("Saved gradient {name:?}"));
        }

        Ok(output)
    }

    /// Clipboard writes never fail the command; errors become a warning
    /// and a notification.
    fn copy_output(&mut self, output: &str, format: OutputFormat) {
        match self.host.copy(output) {
            Ok(true) => self.host.notify(match format {
                OutputFormat::Css => "CSS code copied",
                OutputFormat::Svg => "SVG code copied",
                OutputFormat::Export => "Gradient export copied",
            }),
            Ok(false) => {}
            Err(e) => {
                log::warn!("copy to clipboard failed: {e:#}");
                self.host.notify("Copy to clipboard failed");
            }
        }
    }

    fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Css => Ok(self.engine.render_css()),
            OutputFormat::Svg => Ok(self.engine.render_svg()?),
            OutputFormat::Export => {
                let svg = match self.engine.render_svg() {
                    Ok(svg) => svg,
                    Err(e @ RenderError::Unsupported { .. }) => format!("<!-- {e} -->"),
                };
                Ok(format!("background: {};\n\n{svg}", self.engine.render_css()))
            }
        }
    }

    fn list_saved(&self) -> Result<String> {
        let records = self.store.load()?;
        if records.is_empty() {
            return Ok("no saved gradients".to_string());
        }

        let mut out = String::new();
        for record in &records {
            let mut engine = GradientEngine::from_colors(record.parsed_colors());
            engine.set_mode(record.mode());
            let css = engine.render_css();
            _ = writeln!(out, "{:<20} {}", record.name, css);
        }
        out.pop();
        Ok(out)
    }
}

/// One line per catalog preset, each previewed through its own engine.
pub fn gallery() -> String {
    default_catalog()
        .iter()
        .map(|p| format!("{:<14} {}", p.name, p.preview_css()))
        .collect::<Vec<_>>()
        .join("\n")
}
