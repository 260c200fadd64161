use crate::cli::ProteinArgs;
use crate::config::{self, ProteinJob};
use crate::error::Result;
use molview::core::models::{pocket::Pocket, protein::Protein, structure::Structure};
use molview::render::dispatch::Renderer;
use tracing::{debug, info};

pub fn run(args: ProteinArgs) -> Result<()> {
    let job = config::build_protein_config(&args)?;
    render(&job)?;
    println!(
        "✓ Protein viewer with {} pocket(s) written to: {}",
        job.pockets.len(),
        job.output.display()
    );
    Ok(())
}

pub fn render(job: &ProteinJob) -> Result<()> {
    info!("Loading protein from {:?}", &job.input);
    let mut protein = Protein::from_path(&job.input, job.style.as_str(), job.surface_alpha)?;

    for pocket_job in &job.pockets {
        debug!(
            "Loading {} pocket from {:?}",
            pocket_job.color, &pocket_job.path
        );
        let pocket = Pocket::from_path(
            &pocket_job.path,
            pocket_job.style.as_str(),
            pocket_job.surface_alpha,
        )?
        .with_color(pocket_job.color.as_str());
        protein.add_pocket(pocket);
    }

    Renderer::new(&job.output).render(&Structure::Protein(protein))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PocketJob;
    use crate::error::CliError;
    use std::fs;
    use tempfile::tempdir;

    fn pocket_job(path: std::path::PathBuf, color: &str) -> PocketJob {
        PocketJob {
            path,
            style: "gaussian-surface".to_string(),
            surface_alpha: 0.5,
            color: color.to_string(),
        }
    }

    #[test]
    fn render_writes_protein_and_pockets() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("5HOB.pdb");
        let yellow = dir.path().join("5HOB_yellow_pocket.pdb");
        let green = dir.path().join("5HOB_green_pocket.pdb");
        fs::write(&input, "ATOM 1\nATOM 2").unwrap();
        fs::write(&yellow, "ATOM\t10\n").unwrap();
        fs::write(&green, "ATOM\t20\n").unwrap();

        let job = ProteinJob {
            input,
            style: "cartoon".to_string(),
            surface_alpha: 0.4,
            pockets: vec![pocket_job(yellow, "yellow"), pocket_job(green, "green")],
            output: dir.path().join("result.html"),
        };
        render(&job).unwrap();

        let html = fs::read_to_string(&job.output).unwrap();
        assert!(html.contains("ATOM 1\\nATOM 2"));
        assert!(html.contains("protein_style_type='cartoon', protein_surface_alpha=0.4"));
        assert!(html.contains("`ATOM\\t10\\n`.trim()"));
        assert!(html.find("Yellow Pocket").unwrap() < html.find("Green Pocket").unwrap());
        assert!(html.contains("pocket_style_type='gaussian-surface', pocket_surface_alpha=0.5);"));
    }

    #[test]
    fn missing_pocket_file_aborts_without_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("5HOB.pdb");
        fs::write(&input, "ATOM 1").unwrap();

        let job = ProteinJob {
            input,
            style: "cartoon".to_string(),
            surface_alpha: 0.4,
            pockets: vec![pocket_job(dir.path().join("absent.pdb"), "red")],
            output: dir.path().join("result.html"),
        };

        assert!(matches!(render(&job), Err(CliError::Record(_))));
        assert!(!job.output.exists());
    }

    #[test]
    fn unknown_color_surfaces_as_render_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("5HOB.pdb");
        let pocket = dir.path().join("pocket.pdb");
        fs::write(&input, "ATOM 1").unwrap();
        fs::write(&pocket, "ATOM 2").unwrap();

        let job = ProteinJob {
            input,
            style: "cartoon".to_string(),
            surface_alpha: 0.4,
            pockets: vec![pocket_job(pocket, "0")],
            output: dir.path().join("result.html"),
        };

        assert!(matches!(render(&job), Err(CliError::Render(_))));
    }
}
