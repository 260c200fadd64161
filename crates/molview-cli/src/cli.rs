use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "molview - Build a self-contained Mol* viewer page from PDB proteins, ligands and binding pockets.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a single ligand.
    Ligand(LigandArgs),
    /// Render a protein, optionally with binding-pocket surfaces.
    Protein(ProteinArgs),
    /// List the available pocket colors.
    Colors,
}

/// Options shared by every rendering subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// Path of the HTML page to write. Existing files are overwritten.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S protein.surface-alpha=0.4
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

/// Arguments for the `ligand` subcommand.
#[derive(Args, Debug)]
pub struct LigandArgs {
    /// Path to the ligand PDB file.
    #[arg(required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Mol* representation type (e.g., 'ball-and-stick', 'spacefill').
    #[arg(short, long, value_name = "STYLE")]
    pub style: Option<String>,

    #[command(flatten)]
    pub render: RenderArgs,
}

/// Arguments for the `protein` subcommand.
#[derive(Args, Debug)]
pub struct ProteinArgs {
    /// Path to the protein PDB file.
    #[arg(required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Mol* representation type (e.g., 'cartoon'). 'surface' forces an opaque surface.
    #[arg(short, long, value_name = "STYLE")]
    pub style: Option<String>,

    /// Transparency of the molecular surface drawn over the protein, in [0, 1].
    #[arg(short = 'a', long, value_name = "FLOAT")]
    pub surface_alpha: Option<f64>,

    // --- Pockets ---
    /// Path to a pocket surface PDB file. Can be used multiple times; pockets are drawn in order.
    #[arg(short, long = "pocket", value_name = "PATH")]
    pub pockets: Vec<PathBuf>,

    /// Color key for the pocket at the same position (see `molview colors`).
    /// Pockets without an explicit color use `pocket.color`.
    #[arg(long = "pocket-color", value_name = "KEY")]
    pub pocket_colors: Vec<String>,

    /// Mol* representation type used for all pockets.
    #[arg(long, value_name = "STYLE")]
    pub pocket_style: Option<String>,

    /// Transparency used for all pockets, in [0, 1].
    #[arg(long, value_name = "FLOAT")]
    pub pocket_alpha: Option<f64>,

    #[command(flatten)]
    pub render: RenderArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn protein_command_collects_repeated_pockets_in_order() {
        let cli = Cli::parse_from([
            "molview",
            "protein",
            "5HOB.pdb",
            "-p",
            "a.pdb",
            "--pocket",
            "b.pdb",
            "--pocket-color",
            "yellow",
            "-a",
            "0.4",
        ]);
        let Commands::Protein(args) = cli.command else {
            panic!("expected protein command");
        };
        assert_eq!(args.pockets, vec![PathBuf::from("a.pdb"), PathBuf::from("b.pdb")]);
        assert_eq!(args.pocket_colors, vec!["yellow".to_string()]);
        assert_eq!(args.surface_alpha, Some(0.4));
        assert!(args.render.output.is_none());
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        let result = Cli::try_parse_from(["molview", "-v", "-q", "colors"]);
        assert!(result.is_err());
    }
}
