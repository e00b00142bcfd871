use flexi_logger::{Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming};

/// Starts the global logger with a rotating file in `logs/`, duplicated to stderr.
///
/// Nothing is written to stdout, which stays free for program output.
///
/// `base_level` is a `flexi_logger` spec such as `"info"` or
/// `"info, bilateral_symmetry=debug"`. `RUST_LOG` takes precedence when set.
/// The returned handle must be kept alive for the lifetime of the program.
pub fn setup_logging(base_level: &str) -> anyhow::Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(base_level)?
        .log_to_file(FileSpec::default().directory("logs").basename("symmetry"))
        .duplicate_to_stderr(Duplicate::Info)
        .rotate(
            Criterion::Size(1024 * 1024), //1MB
            Naming::Timestamps,
            Cleanup::KeepLogFiles(5),
        )
        .start()?;

    Ok(handle)
}
