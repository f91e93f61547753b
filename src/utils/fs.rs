use {
    crate::error::Error,
    log::debug,
    std::{
        fs::File,
        io::{BufRead, BufReader},
        path::{Component, Path, PathBuf},
    },
    walkdir::WalkDir,
};

pub const VERSION_FILE: &str = "VERSION";
pub const PLUGINS_DIR: &str = "plugins";

/// Resolves `<root>/VERSION`, or `<root>/plugins/<protocol>/VERSION` when a
/// protocol is given. The file must exist.
pub fn resolve_version_path(root: &Path, protocol: Option<&str>) -> Result<PathBuf, Error> {
    let path = match protocol {
        Some(protocol) => {
            validate_protocol(protocol)?;
            root.join(PLUGINS_DIR).join(protocol).join(VERSION_FILE)
        }
        None => root.join(VERSION_FILE),
    };
    debug!("resolved version file {}", path.display());

    if !path.exists() {
        let available = if protocol.is_some() {
            list_protocols(root)
        } else {
            vec![]
        };
        return Err(Error::VersionFileNotFound { path, available });
    }
    Ok(path)
}

fn validate_protocol(protocol: &str) -> Result<(), Error> {
    let mut components = Path::new(protocol).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None)
            if name == protocol && !protocol.contains(['/', '\\']) =>
        {
            Ok(())
        }
        _ => Err(Error::InvalidProtocol(protocol.to_string())),
    }
}

/// Names of the directories under `<root>/plugins` that carry a `VERSION`
/// file, sorted.
pub fn list_protocols(root: &Path) -> Vec<String> {
    let mut protocols: Vec<String> = WalkDir::new(root.join(PLUGINS_DIR))
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_dir())
        .filter(|entry| entry.path().join(VERSION_FILE).is_file())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .collect();
    protocols.sort();
    protocols
}

/// Reads the first line of `path`, trimmed. Format is not checked here.
pub fn read_version(path: &Path) -> Result<String, Error> {
    let read_err = |source: std::io::Error| Error::ReadVersion {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_err)?;
    match BufReader::new(file).lines().next() {
        Some(line) => Ok(line.map_err(read_err)?.trim().to_string()),
        None => Err(Error::EmptyVersionFile {
            path: path.to_path_buf(),
        }),
    }
}
