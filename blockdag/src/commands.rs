//! Command implementations: load the graph, run the operation, write the
//! report.

use crate::config::Config;
use crate::report;
use dag::{Graph, GraphSource, NodeSets};
use std::fs::File;
use std::io::BufWriter;
use tracing::{info, warn};

/// Check DAG validity and write the verdict to the output file.
pub fn check(config: &Config) -> Result<(), String> {
    let graph = load_graph(config)?;

    let has_cycle = dag::has_cycle(&graph);
    info!(has_cycle, "cycle check complete");

    let mut out = open_output(config)?;
    report::write_verdict(&mut out, has_cycle)
        .map_err(|e| format!("Failed to write results: {}", e))
}

/// Report past, future, anticone and tips for `node`.
///
/// An unknown vertex name is not an error: the query produces no output
/// file and the run still succeeds.
pub fn sets(config: &Config, node: &str) -> Result<(), String> {
    let graph = load_graph(config)?;

    let Some(node_sets) = NodeSets::compute(&graph, node) else {
        warn!(node, "vertex not found, no report produced");
        return Ok(());
    };

    let mut out = open_output(config)?;
    report::write_sets(&mut out, node, &node_sets)
        .map_err(|e| format!("Failed to write results: {}", e))
}

/// Print the adjacency structure to stdout.
pub fn dump(config: &Config) -> Result<(), String> {
    let graph = load_graph(config)?;
    print!("{}", graph);
    Ok(())
}

fn load_graph(config: &Config) -> Result<Graph, String> {
    let source = GraphSource::from_file(&config.files.input)
        .map_err(|e| format!("Failed to load {}: {}", config.files.input.display(), e))?;
    Ok(Graph::from_source(&source))
}

fn open_output(config: &Config) -> Result<BufWriter<File>, String> {
    let file = File::create(&config.files.output)
        .map_err(|e| format!("Failed to open {} for writing: {}", config.files.output.display(), e))?;
    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn config_in(dir: &tempfile::TempDir, input_text: &str) -> Config {
        let input = dir.path().join("blockdag.in");
        fs::write(&input, input_text).unwrap();
        Config {
            files: crate::config::FilesConfig {
                input,
                output: dir.path().join("blockdag.out"),
            },
        }
    }

    fn output(config: &Config) -> String {
        fs::read_to_string(&config.files.output).unwrap()
    }

    #[test]
    fn test_check_writes_correct_for_dag() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir, "4\nGenesis A B C\n3\nA : Genesis\nB : Genesis\nC : A\n");

        check(&config).unwrap();
        assert_eq!(output(&config), "correct\n");
    }

    #[test]
    fn test_check_writes_impossible_for_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir, "2\nX Y\n2\nX : Y\nY : X\n");

        check(&config).unwrap();
        assert_eq!(output(&config), "impossible\n");
    }

    #[test]
    fn test_sets_writes_full_report() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir, "4\nGenesis A B C\n3\nA : Genesis\nB : Genesis\nC : A\n");

        sets(&config, "A").unwrap();
        assert_eq!(
            output(&config),
            "past(A) : Genesis \nfuture(A) : C \nanticone(A) : B \ntips(G) : B C \n"
        );
    }

    #[test]
    fn test_sets_unknown_vertex_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir, "2\nGenesis A\n1\nA : Genesis\n");

        sets(&config, "Z").unwrap();
        assert!(!config.files.output.exists());
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            files: crate::config::FilesConfig {
                input: dir.path().join("missing.in"),
                output: dir.path().join("blockdag.out"),
            },
        };

        assert!(check(&config).is_err());
        assert!(sets(&config, "Genesis").is_err());
    }

    #[test]
    fn test_malformed_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir, "5\nGenesis A\n");

        let result = check(&config);
        assert!(result.is_err());
        assert!(!config.files.output.exists());
    }
}
