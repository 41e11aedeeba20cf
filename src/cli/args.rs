use clap::Parser;
use std::path::PathBuf;

/// Validate load attempts against per-customer velocity limits
#[derive(Parser, Debug)]
#[command(name = "load-velocity-engine")]
#[command(about = "Validate load attempts against per-customer velocity limits", long_about = None)]
pub struct CliArgs {
    /// Input file path containing newline-delimited JSON load attempt records
    #[arg(value_name = "INPUT", help = "Path to the NDJSON input file")]
    pub input_file: PathBuf,

    /// Batch policy for malformed records
    #[arg(
        long = "strict",
        help = "Abort the whole batch on the first malformed record instead of skipping it"
    )]
    pub strict: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default_lenient(&["program", "input.jsonl"], false)]
    #[case::strict(&["program", "--strict", "input.jsonl"], true)]
    fn test_strict_flag(#[case] args: &[&str], #[case] expected: bool) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.strict, expected);
        assert_eq!(parsed.input_file, PathBuf::from("input.jsonl"));
    }

    #[rstest]
    #[case::missing_input(&["program"])]
    #[case::unknown_flag(&["program", "--parallel", "input.jsonl"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
