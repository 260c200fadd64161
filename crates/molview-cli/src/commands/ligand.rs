use crate::cli::LigandArgs;
use crate::config::{self, LigandJob};
use crate::error::Result;
use molview::core::models::{ligand::Ligand, structure::Structure};
use molview::render::dispatch::Renderer;
use tracing::info;

pub fn run(args: LigandArgs) -> Result<()> {
    let job = config::build_ligand_config(&args)?;
    render(&job)?;
    println!("✓ Ligand viewer written to: {}", job.output.display());
    Ok(())
}

pub fn render(job: &LigandJob) -> Result<()> {
    info!("Loading ligand from {:?}", &job.input);
    let ligand = Ligand::from_path(&job.input, job.style.as_str())?;

    Renderer::new(&job.output).render(&Structure::Ligand(ligand))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn render_writes_ligand_page() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("BEB.pdb");
        fs::write(&input, "HETATM 1\n").unwrap();
        let job = LigandJob {
            input,
            style: "ball-and-stick".to_string(),
            output: dir.path().join("result.html"),
        };

        render(&job).unwrap();

        let html = fs::read_to_string(&job.output).unwrap();
        assert!(html.contains("var structureData = `HETATM 1\\n`.trim();"));
        assert!(html.contains("loadLigand(viewer, structureData"));
    }

    #[test]
    fn missing_input_is_a_record_error() {
        let dir = tempdir().unwrap();
        let job = LigandJob {
            input: dir.path().join("absent.pdb"),
            style: "ball-and-stick".to_string(),
            output: dir.path().join("result.html"),
        };

        assert!(matches!(render(&job), Err(CliError::Record(_))));
        assert!(!job.output.exists());
    }
}
