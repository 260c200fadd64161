use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::{LigandJob, PocketJob, ProteinJob};
use crate::cli::{LigandArgs, ProteinArgs, RenderArgs};
use crate::error::{CliError, Result};
use crate::utils::parser;
use molview::core::models::color::{COLOR_KEYS, is_known_color};
use std::path::PathBuf;
use tracing::debug;

fn load_file_config(render: &RenderArgs) -> Result<FileConfig> {
    let file_config = if let Some(config_path) = &render.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };
    apply_set_values(file_config, &render.set_values)
}

fn resolve_output(
    render: &RenderArgs,
    file_config: &FileConfig,
    defaults: &DefaultsConfig,
) -> PathBuf {
    render
        .output
        .clone()
        .or_else(|| file_config.output.clone())
        .unwrap_or_else(|| defaults.output.clone())
}

fn resolve_alpha(
    cli_val: Option<f64>,
    file_val: Option<f64>,
    default_val: f64,
    key: &str,
) -> Result<f64> {
    let alpha = cli_val.or(file_val).unwrap_or(default_val);
    parser::check_alpha(key, alpha).map_err(|e| CliError::Config(e.to_string()))
}

fn check_color(color: &str) -> Result<()> {
    if is_known_color(color) {
        return Ok(());
    }
    Err(CliError::Argument(format!(
        "Unknown pocket color '{}'.\nHint: Valid colors are: {}.",
        color,
        COLOR_KEYS.join(", ")
    )))
}

pub fn build_ligand_config(args: &LigandArgs) -> Result<LigandJob> {
    let defaults = DefaultsConfig::default();
    let mut file_config = load_file_config(&args.render)?;

    let output = resolve_output(&args.render, &file_config, &defaults);
    let ligand_file = file_config.ligand.take().unwrap_or_default();
    let style = args
        .style
        .clone()
        .or(ligand_file.style)
        .unwrap_or(defaults.ligand_style);

    let job = LigandJob {
        input: args.input.clone(),
        style,
        output,
    };
    debug!("Resolved ligand job: {:?}", job);
    Ok(job)
}

pub fn build_protein_config(args: &ProteinArgs) -> Result<ProteinJob> {
    let defaults = DefaultsConfig::default();
    let mut file_config = load_file_config(&args.render)?;

    let output = resolve_output(&args.render, &file_config, &defaults);

    let protein_file = file_config.protein.take().unwrap_or_default();
    let style = args
        .style
        .clone()
        .or(protein_file.style)
        .unwrap_or(defaults.protein_style);
    let surface_alpha = resolve_alpha(
        args.surface_alpha,
        protein_file.surface_alpha,
        defaults.protein_surface_alpha,
        "protein.surface-alpha",
    )?;

    let pocket_file = file_config.pocket.take().unwrap_or_default();
    let pocket_style = args
        .pocket_style
        .clone()
        .or(pocket_file.style)
        .unwrap_or(defaults.pocket_style);
    let pocket_alpha = resolve_alpha(
        args.pocket_alpha,
        pocket_file.surface_alpha,
        defaults.pocket_surface_alpha,
        "pocket.surface-alpha",
    )?;
    let default_color = pocket_file.color.unwrap_or(defaults.pocket_color);

    if args.pocket_colors.len() > args.pockets.len() {
        return Err(CliError::Argument(format!(
            "Got {} --pocket-color values for {} --pocket file(s).",
            args.pocket_colors.len(),
            args.pockets.len()
        )));
    }

    let pockets = args
        .pockets
        .iter()
        .enumerate()
        .map(|(i, path)| -> Result<PocketJob> {
            let color = args
                .pocket_colors
                .get(i)
                .cloned()
                .unwrap_or_else(|| default_color.clone());
            check_color(&color)?;
            Ok(PocketJob {
                path: path.clone(),
                style: pocket_style.clone(),
                surface_alpha: pocket_alpha,
                color,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let job = ProteinJob {
        input: args.input.clone(),
        style,
        surface_alpha,
        pockets,
        output,
    };
    debug!("Resolved protein job: {:?}", job);
    Ok(job)
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    if set_values.is_empty() {
        return Ok(config);
    }
    for kv_pair in set_values {
        let (key, value_str) =
            parser::parse_set_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;
        let parse_alpha =
            || parser::parse_alpha(key, value_str).map_err(|e| CliError::Config(e.to_string()));

        match key {
            "output" => {
                config.output = Some(PathBuf::from(value_str));
            }
            "ligand.style" => {
                config.ligand.get_or_insert_with(Default::default).style =
                    Some(value_str.to_string());
            }
            "protein.style" => {
                config.protein.get_or_insert_with(Default::default).style =
                    Some(value_str.to_string());
            }
            "protein.surface-alpha" => {
                config
                    .protein
                    .get_or_insert_with(Default::default)
                    .surface_alpha = Some(parse_alpha()?);
            }
            "pocket.style" => {
                config.pocket.get_or_insert_with(Default::default).style =
                    Some(value_str.to_string());
            }
            "pocket.surface-alpha" => {
                config
                    .pocket
                    .get_or_insert_with(Default::default)
                    .surface_alpha = Some(parse_alpha()?);
            }
            "pocket.color" => {
                config.pocket.get_or_insert_with(Default::default).color =
                    Some(value_str.to_string());
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
