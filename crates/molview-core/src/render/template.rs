//! The static page shell every document is stitched into.
//!
//! [`MOLSTAR_PREFIX`] opens the page, creates the viewer and declares the three loader
//! routines. Generated statements follow it, and [`MOLSTAR_SUFFIX`] closes the viewer
//! callback and the page.

pub const MOLSTAR_PREFIX: &str = include_str!("../../assets/molstar_prefix.html");

pub const MOLSTAR_SUFFIX: &str = "
            });
        </script>
    </body>
</html>
";

pub const DEFAULT_OUTPUT_PATH: &str = "result.html";

pub const LOAD_LIGAND: &str = "loadLigand";
pub const LOAD_STRUCTURE: &str = "loadStructureExplicitly";
pub const LOAD_POCKETS: &str = "loadStructureAndPockets";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_declares_every_loader_routine() {
        for routine in [LOAD_LIGAND, LOAD_STRUCTURE, LOAD_POCKETS] {
            let declaration = format!("async function {}(", routine);
            assert!(MOLSTAR_PREFIX.contains(&declaration), "missing {}", routine);
        }
    }

    #[test]
    fn prefix_defines_format_variables_last() {
        let tail = MOLSTAR_PREFIX.trim_end();
        assert!(tail.ends_with("var ligandFormat = 'pdb'.trim();"));
        assert!(MOLSTAR_PREFIX.contains("var structureFormat = 'pdb'.trim();"));
        assert!(MOLSTAR_PREFIX.contains("var pocketFormat = 'pdb'.trim();"));
    }

    #[test]
    fn suffix_closes_viewer_callback_and_page() {
        assert!(MOLSTAR_SUFFIX.contains("});"));
        assert!(MOLSTAR_SUFFIX.trim_end().ends_with("</html>"));
    }
}
