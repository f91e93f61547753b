use {
    crate::{
        error::Error,
        types::{increment_field, ProtocolVersion},
        utils::{self, make::DEFAULT_MAKE_PROGRAM},
    },
    anyhow::{Context, Result},
    clap::Args,
    log::{debug, info},
    std::{fmt, path::Path},
};

#[derive(Args, Debug, Clone)]
pub struct CommandArgs {
    #[arg(long, help = "Increment major version and reset minor and patch to 0")]
    pub major: bool,

    #[arg(long, help = "Increment minor version and reset patch to 0")]
    pub minor: bool,

    #[arg(long, value_name = "NAME", help = "Protocol name (e.g., solana)")]
    pub protocol: Option<String>,

    #[arg(long, help = "Compute and check, but do not run `make bump`")]
    pub dry_run: bool,

    #[arg(
        long,
        env = "VBUMP_MAKE",
        value_name = "PROGRAM",
        default_value = DEFAULT_MAKE_PROGRAM,
        help = "Program invoked as `<PROGRAM> bump VERSION=..`"
    )]
    pub make_program: String,
}

impl CommandArgs {
    /// The protocol namespace, with `--protocol=` treated as none.
    pub fn protocol(&self) -> Option<&str> {
        self.protocol.as_deref().filter(|p| !p.is_empty())
    }

    pub fn level(&self) -> BumpLevel {
        BumpLevel::from_flags(self.major, self.minor)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BumpLevel {
    /// x.y.z -> x+1.0.0
    Major,
    /// x.y.z -> x.y+1.0
    Minor,
    /// x.y.z -> x.y.z+1
    #[default]
    Patch,
}

impl BumpLevel {
    /// Major wins over minor when both are set.
    pub fn from_flags(major: bool, minor: bool) -> Self {
        if major {
            Self::Major
        } else if minor {
            Self::Minor
        } else {
            Self::Patch
        }
    }
}

/// Outcome of a bump, displayed as `old → new`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionBump {
    pub current: ProtocolVersion,
    pub new: ProtocolVersion,
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.current, self.new)
    }
}

pub fn run(args: CommandArgs, root: &Path) -> Result<VersionBump> {
    let protocol = args.protocol();

    // compute the new version
    let bump = compute_bump(root, protocol, args.level())?;
    info!("bumping version {bump}");

    // refuse to touch protected or dirty trees
    utils::check_git_status(root).context("repository is not ready for a version bump")?;

    if args.dry_run {
        info!("dry run, skipping `{} bump`", args.make_program);
        return Ok(bump);
    }

    // `make bump` writes the new version
    utils::run_make_bump(
        &args.make_program,
        root,
        &bump.new.unprefixed(),
        protocol,
    )?;

    Ok(bump)
}

/// Reads the version file under `root` and computes the next version, without
/// touching git or the file.
pub fn compute_bump(
    root: &Path,
    protocol: Option<&str>,
    level: BumpLevel,
) -> Result<VersionBump, Error> {
    let version_path = utils::resolve_version_path(root, protocol)?;
    let raw = utils::read_version(&version_path)?;
    debug!("read {raw:?} from {}", version_path.display());

    let current = ProtocolVersion::parse(&raw, protocol)?;
    let new = bump_version(level, &current);
    Ok(VersionBump { current, new })
}

/// Increments one field and resets the lower ones. Higher fields keep the
/// text they were read with.
pub fn bump_version(level: BumpLevel, current: &ProtocolVersion) -> ProtocolVersion {
    let (major, minor, patch) = match level {
        BumpLevel::Major => (
            increment_field("major", &current.major),
            "0".to_string(),
            "0".to_string(),
        ),
        BumpLevel::Minor => (
            current.major.clone(),
            increment_field("minor", &current.minor),
            "0".to_string(),
        ),
        BumpLevel::Patch => (
            current.major.clone(),
            current.minor.clone(),
            increment_field("patch", &current.patch),
        ),
    };
    ProtocolVersion {
        protocol: current.protocol.clone(),
        major,
        minor,
        patch,
    }
}
