use {std::path::PathBuf, thiserror::Error};

/// Failures of a single `vbump` invocation. Every variant is terminal.
#[derive(Error, Debug)]
pub enum Error {
    #[error("VERSION file not found at {}{}", .path.display(), available_hint(.available))]
    VersionFileNotFound {
        path: PathBuf,
        available: Vec<String>,
    },

    #[error("failed to read {}", .path.display())]
    ReadVersion {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("empty version file: {}", .path.display())]
    EmptyVersionFile { path: PathBuf },

    #[error("version {version} does not have expected prefix {prefix}")]
    PrefixMismatch { version: String, prefix: String },

    #[error("invalid version format. Expected X.Y.Z, got {0}")]
    InvalidFormat(String),

    #[error("invalid protocol name {0:?}: must be a single directory name")]
    InvalidProtocol(String),

    #[error("git {command} failed: {reason}")]
    GitQuery { command: String, reason: String },

    #[error("cannot bump on {0} branch")]
    ProtectedBranch(String),

    #[error("there are uncommitted changes")]
    DirtyWorkingTree,

    #[error("`{command}` failed: {reason}")]
    Delegate { command: String, reason: String },
}

fn available_hint(available: &[String]) -> String {
    if available.is_empty() {
        String::new()
    } else {
        format!(" (available protocols: {})", available.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use {super::*, pretty_assertions::assert_eq};

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::PrefixMismatch {
                version: "1.12.2".to_string(),
                prefix: "solana-".to_string(),
            }
            .to_string(),
            "version 1.12.2 does not have expected prefix solana-"
        );
        assert_eq!(
            Error::InvalidFormat("1.2".to_string()).to_string(),
            "invalid version format. Expected X.Y.Z, got 1.2"
        );
        assert_eq!(
            Error::ProtectedBranch("main".to_string()).to_string(),
            "cannot bump on main branch"
        );
    }

    #[test]
    fn test_not_found_lists_available_protocols() {
        let err = Error::VersionFileNotFound {
            path: PathBuf::from("/repo/plugins/sol/VERSION"),
            available: vec!["ethereum".to_string(), "solana".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "VERSION file not found at /repo/plugins/sol/VERSION (available protocols: ethereum, \
             solana)"
        );

        let err = Error::VersionFileNotFound {
            path: PathBuf::from("/repo/VERSION"),
            available: vec![],
        };
        assert_eq!(err.to_string(), "VERSION file not found at /repo/VERSION");
    }
}
