use {
    crate::error::Error,
    log::info,
    std::{path::Path, process::Command},
};

pub const DEFAULT_MAKE_PROGRAM: &str = "make";

/// Arguments for `make bump`: the unprefixed version and, for plugins, the
/// protocol name.
pub fn make_bump_args(version: &str, protocol: Option<&str>) -> Vec<String> {
    let mut args = vec!["bump".to_string(), format!("VERSION={version}")];
    if let Some(protocol) = protocol {
        args.push(format!("PROTOCOL={protocol}"));
    }
    args
}

/// Runs `<make_program> bump VERSION=.. [PROTOCOL=..]` in `dir`, with the
/// child's stdout/stderr inherited. Writing the `VERSION` file is the make
/// target's job.
pub fn run_make_bump(
    make_program: &str,
    dir: &Path,
    version: &str,
    protocol: Option<&str>,
) -> Result<(), Error> {
    let args = make_bump_args(version, protocol);
    let command = format!("{make_program} {}", args.join(" "));
    info!("running `{command}` in {}", dir.display());

    let status = Command::new(make_program)
        .args(&args)
        .current_dir(dir)
        .status()
        .map_err(|e| Error::Delegate {
            command: command.clone(),
            reason: e.to_string(),
        })?;
    if !status.success() {
        return Err(Error::Delegate {
            command,
            reason: status.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use {super::*, pretty_assertions::assert_eq};

    #[test]
    fn test_make_bump_args() {
        assert_eq!(make_bump_args("1.2.4", None), vec!["bump", "VERSION=1.2.4"]);
        assert_eq!(
            make_bump_args("1.12.3", Some("solana")),
            vec!["bump", "VERSION=1.12.3", "PROTOCOL=solana"]
        );
    }

    #[test]
    fn test_run_make_bump_missing_program() {
        let temp_dir = tempfile::tempdir().unwrap();
        let err = run_make_bump(
            "vbump-no-such-make-program",
            temp_dir.path(),
            "1.2.4",
            None,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Delegate { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_make_bump_exit_status() {
        let temp_dir = tempfile::tempdir().unwrap();
        run_make_bump("true", temp_dir.path(), "1.2.4", None).unwrap();

        let err = run_make_bump("false", temp_dir.path(), "1.2.4", None).unwrap_err();
        assert!(
            err.to_string().starts_with("`false bump VERSION=1.2.4` failed:"),
            "{err}"
        );
    }
}
