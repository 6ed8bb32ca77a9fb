use clap::{ArgAction, Parser};
use std::path::PathBuf;

use docproc::OutputPaths;

use super::validators::{any_path, parse_env_pair};

#[derive(Parser, Debug)]
#[command(
    name = "extract_data",
    version,
    about = "Document Processing Extractor CLI",
    args_override_self = true
)]
pub struct CliArgs {
    /// Path to the folder containing raw documents
    #[arg(long, value_parser = any_path())]
    pub folder_path: PathBuf,

    /// Output path for metadata results
    #[arg(long, value_parser = any_path())]
    pub metadata_path: PathBuf,

    /// Output path for extracted text
    #[arg(long, value_parser = any_path())]
    pub text_path: PathBuf,

    /// Output path for extracted formulas
    #[arg(long, value_parser = any_path())]
    pub formulas_path: PathBuf,

    /// Output path for extracted figures
    #[arg(long, value_parser = any_path())]
    pub figures_path: PathBuf,

    /// Output path for document hierarchy
    #[arg(long, value_parser = any_path())]
    pub hierarchy_path: PathBuf,

    /// Output path for shrinks
    #[arg(long, value_parser = any_path())]
    pub shrinks_path: PathBuf,

    /// Tasks to execute (e.g. shrinks figures)
    #[arg(long, required = true, num_args = 1.., action = ArgAction::Set)]
    pub valid_tasks: Vec<String>,

    /// Disable pipeline execution
    #[arg(long, default_value_t = false)]
    pub no_pipeline: bool,

    /// Extractor program to run (overrides the config file)
    #[arg(long, env = "DOCPROC_EXTRACTOR")]
    pub extractor: Option<String>,

    /// Argument for the extractor program; repeat for several. Replaces config-file args
    #[arg(long = "extractor-arg", allow_hyphen_values = true)]
    pub extractor_args: Vec<String>,

    /// Extra environment for the extractor as KEY=VALUE; repeat for several
    #[arg(long = "extractor-env", value_parser = parse_env_pair)]
    pub extractor_env: Vec<(String, String)>,

    /// JSON file describing how to launch the extractor
    #[arg(long, env = "DOCPROC_EXTRACTOR_CONFIG")]
    pub extractor_config: Option<PathBuf>,

    /// Print the resolved extraction request as JSON and exit without running the extractor
    #[arg(long, default_value_t = false)]
    pub print_request: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

impl CliArgs {
    pub fn output_paths(&self) -> OutputPaths {
        OutputPaths {
            metadata: self.metadata_path.clone(),
            text: self.text_path.clone(),
            formulas: self.formulas_path.clone(),
            figures: self.figures_path.clone(),
            hierarchy: self.hierarchy_path.clone(),
            shrinks: self.shrinks_path.clone(),
        }
    }

    pub fn apply_pipeline(&self) -> bool {
        !self.no_pipeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    const REQUIRED: [&str; 16] = [
        "--folder-path",
        "./docs",
        "--metadata-path",
        "out/meta",
        "--text-path",
        "out/text",
        "--formulas-path",
        "out/f",
        "--figures-path",
        "out/fig",
        "--hierarchy-path",
        "out/h",
        "--shrinks-path",
        "out/s",
        "--valid-tasks",
        "shrinks",
    ];

    fn parse(extra: &[&str]) -> Result<CliArgs, clap::Error> {
        let argv = std::iter::once("extract_data")
            .chain(REQUIRED)
            .chain(extra.iter().copied());
        CliArgs::try_parse_from(argv)
    }

    #[test]
    fn pipeline_is_applied_by_default() {
        let args = parse(&[]).unwrap();
        assert!(args.apply_pipeline());
    }

    #[test]
    fn no_pipeline_flag_disables_pipeline() {
        let args = parse(&["--no-pipeline"]).unwrap();
        assert!(!args.apply_pipeline());
    }

    #[test]
    fn tasks_keep_order_and_duplicates() {
        let args = parse(&["figures", "text", "figures", "--no-pipeline"]).unwrap();
        assert_eq!(args.valid_tasks, vec!["shrinks", "figures", "text", "figures"]);
        assert!(args.no_pipeline);
    }

    #[test]
    fn output_paths_map_to_their_names() {
        let args = parse(&[]).unwrap();
        let outputs = args.output_paths();
        assert_eq!(outputs.metadata, PathBuf::from("out/meta"));
        assert_eq!(outputs.text, PathBuf::from("out/text"));
        assert_eq!(outputs.formulas, PathBuf::from("out/f"));
        assert_eq!(outputs.figures, PathBuf::from("out/fig"));
        assert_eq!(outputs.hierarchy, PathBuf::from("out/h"));
        assert_eq!(outputs.shrinks, PathBuf::from("out/s"));
    }

    #[test]
    fn each_required_option_is_enforced() {
        for flag in REQUIRED.iter().filter(|a| a.starts_with("--")) {
            let position = REQUIRED.iter().position(|a| a == flag).unwrap();
            let argv: Vec<&str> = std::iter::once("extract_data")
                .chain(
                    REQUIRED
                        .iter()
                        .enumerate()
                        .filter(|(i, _)| *i != position && *i != position + 1)
                        .map(|(_, a)| *a),
                )
                .collect();

            let err = CliArgs::try_parse_from(argv).unwrap_err();
            assert_eq!(
                err.kind(),
                ErrorKind::MissingRequiredArgument,
                "dropping {flag} should fail"
            );
        }
    }

    #[test]
    fn valid_tasks_needs_at_least_one_value() {
        let mut argv: Vec<&str> = std::iter::once("extract_data").chain(REQUIRED).collect();
        argv.pop();
        let err = CliArgs::try_parse_from(argv).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn empty_path_is_accepted() {
        let args = parse(&["--text-path", ""]).unwrap();
        assert_eq!(args.text_path, PathBuf::new());
        assert_eq!(args.output_paths().text, PathBuf::new());
    }

    #[test]
    fn repeated_tasks_keep_last_occurrence() {
        let args = parse(&["--valid-tasks", "a", "b", "--valid-tasks", "c"]).unwrap();
        assert_eq!(args.valid_tasks, vec!["c"]);
    }

    #[test]
    fn repeated_no_pipeline_is_accepted() {
        let args = parse(&["--no-pipeline", "--no-pipeline"]).unwrap();
        assert!(!args.apply_pipeline());
    }

    #[test]
    fn repeated_path_keeps_last_occurrence() {
        let args = parse(&["--folder-path", "a", "--folder-path", "b"]).unwrap();
        assert_eq!(args.folder_path, PathBuf::from("b"));
    }

    #[test]
    fn extractor_options_parse() {
        let args = parse(&[
            "--extractor",
            "python3",
            "--extractor-arg=-m",
            "--extractor-arg",
            "extractor",
            "--extractor-env",
            "MODE=fast",
        ])
        .unwrap();
        assert_eq!(args.extractor.as_deref(), Some("python3"));
        assert_eq!(args.extractor_args, vec!["-m", "extractor"]);
        assert_eq!(
            args.extractor_env,
            vec![("MODE".to_string(), "fast".to_string())]
        );
    }
}
