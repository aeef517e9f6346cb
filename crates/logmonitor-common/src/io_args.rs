use std::fs::{File, OpenOptions};
use std::path::PathBuf;

use clap::Args;

use crate::constants::{ENV_LOG_FILE, ENV_STDERR};
use crate::logging::OutputTarget;
use crate::{ErrorCode, LiftableResult, LmResult};

// ----------------------------------------------------------------------------------------------
// Writer Args
#[derive(Debug, Clone, Default, Args)]
pub struct WriterArgs {
    /// Write console output to stderr instead of stdout
    #[arg(long, env = ENV_STDERR)]
    pub stderr: bool,

    /// Also append every forwarded line to this file
    #[arg(long, env = ENV_LOG_FILE, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl WriterArgs {
    pub fn output_target(&self) -> OutputTarget {
        if self.stderr {
            OutputTarget::Stderr
        } else {
            OutputTarget::Stdout
        }
    }

    /// Opens the configured log file for appending, creating it if needed.
    pub fn open_log_file(&self) -> LmResult<Option<File>> {
        let Some(path) = &self.log_file else {
            return Ok(None);
        };
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .lift(ectx!(
                code => ErrorCode::IoError,
                "Failed to open log file '{}'",
                path.display()
            ))?;
        Ok(Some(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        writer: WriterArgs,
    }

    #[test]
    fn test_defaults() {
        let cli = TestCli::parse_from(["test"]);
        assert_eq!(cli.writer.output_target(), OutputTarget::Stdout);
        assert!(cli.writer.open_log_file().unwrap().is_none());
    }

    #[test]
    fn test_stderr_flag() {
        let cli = TestCli::parse_from(["test", "--stderr"]);
        assert_eq!(cli.writer.output_target(), OutputTarget::Stderr);
    }

    #[test]
    fn test_log_file_is_appended() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("monitor.log");
        std::fs::write(&path, "existing\n").unwrap();

        let args = WriterArgs {
            stderr: false,
            log_file: Some(path.clone()),
        };
        let mut file = args.open_log_file().unwrap().expect("file configured");
        file.write_all(b"appended\n").unwrap();
        drop(file);

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "existing\nappended\n"
        );
    }

    #[test]
    fn test_open_failure_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("monitor.log");

        let args = WriterArgs {
            stderr: false,
            log_file: Some(path.clone()),
        };
        let err = args.open_log_file().unwrap_err();

        assert_eq!(err.code, ErrorCode::IoError);
        assert!(err.to_string().contains(&path.display().to_string()));
    }
}
