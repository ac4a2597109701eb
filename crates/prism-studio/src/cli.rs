use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand, ValueEnum};

use prism_engine::{Color, Mode};

/// Store file used when neither `--store` nor `PRISM_STORE` is given.
pub const DEFAULT_STORE: &str = "gradients.json";

#[derive(Debug, Parser)]
#[command(name = "prism", about = "Generate, edit and export color gradients", version)]
pub struct Cli {
    /// Debug-level logging for the engine and studio.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON file holding saved gradients.
    #[arg(long, env = "PRISM_STORE", default_value = DEFAULT_STORE, global = true)]
    pub store: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Uniform random colors.
    Random(GenerateArgs),

    /// Evenly spaced hues at a shared saturation and lightness.
    Harmonious(GenerateArgs),

    /// Start from a built-in preset.
    Preset {
        /// Preset name, case-insensitive (see `prism presets`).
        name: String,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Start from explicit hex colors.
    Colors {
        #[arg(required = true, num_args = 1..)]
        colors: Vec<Color>,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// List the preset gallery with preview CSS.
    Presets,

    /// List saved gradients.
    Saved,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Number of colors to generate.
    #[arg(short, long, default_value_t = 3)]
    pub count: usize,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Clone, Args)]
pub struct OutputArgs {
    /// Gradient shape: linear, radial or conic.
    #[arg(short, long, default_value_t = Mode::Linear)]
    pub mode: Mode,

    /// Replace one color before rendering, as INDEX=HEX. Repeatable.
    #[arg(long = "set", value_name = "INDEX=HEX")]
    pub edits: Vec<ColorEdit>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Css)]
    pub format: OutputFormat,

    /// Also copy the output to the system clipboard.
    #[arg(long)]
    pub copy: bool,

    /// Save the final colors under this name.
    #[arg(long, value_name = "NAME")]
    pub save: Option<String>,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// CSS gradient expression.
    Css,
    /// Standalone SVG document.
    Svg,
    /// `background:` declaration followed by the SVG document.
    Export,
}

/// A single `--set INDEX=HEX` edit.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ColorEdit {
    pub index: usize,
    pub color: Color,
}

impl FromStr for ColorEdit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (index, color) = s
            .split_once('=')
            .ok_or_else(|| format!("expected INDEX=HEX, got {s:?}"))?;
        let index = index
            .trim()
            .parse()
            .map_err(|_| format!("invalid color index {index:?}"))?;
        let color = color.parse::<Color>().map_err(|e| e.to_string())?;
        Ok(Self { index, color })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("prism").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn edit_parses_index_and_color() {
        let edit: ColorEdit = "2=#00ff00".parse().unwrap();
        assert_eq!(edit, ColorEdit { index: 2, color: Color::from_rgb(0, 255, 0) });
    }

    #[test]
    fn edit_rejects_missing_separator() {
        assert!("2#00ff00".parse::<ColorEdit>().is_err());
        assert!("x=#00ff00".parse::<ColorEdit>().is_err());
        assert!("1=blue".parse::<ColorEdit>().is_err());
    }

    #[test]
    fn harmonious_with_options() {
        let cli = parse(&[
            "harmonious", "-c", "5", "--mode", "radial", "--set", "0=#fff", "-f", "svg",
        ]);
        let Commands::Harmonious(args) = cli.command else { panic!("wrong command") };
        assert_eq!(args.count, 5);
        assert_eq!(args.output.mode, Mode::Radial);
        assert_eq!(args.output.format, OutputFormat::Svg);
        assert_eq!(args.output.edits.len(), 1);
    }

    #[test]
    fn defaults() {
        let cli = parse(&["random"]);
        let Commands::Random(args) = cli.command else { panic!("wrong command") };
        assert_eq!(args.count, 3);
        assert_eq!(args.output.mode, Mode::Linear);
        assert_eq!(args.output.format, OutputFormat::Css);
        assert!(!args.output.copy);
        assert!(args.output.save.is_none());
    }

    #[test]
    fn colors_parse_as_hex() {
        let cli = parse(&["colors", "#FF0000", "00f"]);
        let Commands::Colors { colors, .. } = cli.command else { panic!("wrong command") };
        assert_eq!(colors, vec![Color::from_rgb(255, 0, 0), Color::from_rgb(0, 0, 255)]);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(Cli::try_parse_from(["prism", "random", "--mode", "diamond"]).is_err());
    }

    #[test]
    fn colors_requires_at_least_one() {
        assert!(Cli::try_parse_from(["prism", "colors"]).is_err());
    }
}
