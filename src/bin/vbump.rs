use {
    anyhow::{Context, Result},
    clap::{Args, Parser},
    log::error,
};

const AFTER_HELP: &str = "\
Examples:
  vbump                      # Increment patch version (e.g., 1.12.2 -> 1.12.3)
  vbump --minor              # Increment minor version (e.g., 1.12.2 -> 1.13.0)
  vbump --major              # Increment major version (e.g., 1.12.2 -> 2.0.0)
  vbump --protocol=solana    # Use protocol-specific version bumping (e.g., solana-1.12.2 -> solana-1.12.3)";

#[derive(Parser)]
#[command(
    name = "vbump",
    about = "Bump the VERSION file and run `make bump`",
    version,
    after_help = AFTER_HELP
)]
struct Vbump {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(flatten)]
    args: vbump::bump_version::CommandArgs,
}

#[derive(Args, Debug)]
pub struct GlobalOptions {
    #[arg(short, long, help = "Log debug output")]
    pub verbose: bool,
}

fn main() {
    if let Err(err) = try_main() {
        error!("Error: {err}");
        for (i, cause) in err.chain().skip(1).enumerate() {
            error!("  {}: {}", i.saturating_add(1), cause);
        }
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let cli = Vbump::parse();

    if cli.global.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let root = std::env::current_dir().context("failed to get current directory")?;
    let dry_run = cli.args.dry_run;
    let bump = vbump::bump_version::run(cli.args, &root)?;

    if dry_run {
        println!("Would bump version: {bump}");
    } else {
        println!("Successfully bumped version: {bump}");
    }

    Ok(())
}
