use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fwstamp",
    about = "Stamps firmware builds with a git-derived version header and README version line",
    version = env!("GIT_DESCRIBE"),
    after_help = "Logs are written to: ~/.local/share/fwstamp/logs/fwstamp.log\n\nEach run:\n- Resolves the version with git describe --tags --always --dirty (\"unknown\" if that fails)\n- Overwrites the generated header (a write failure fails the build)\n- Rewrites the **Version:** line of the README (failures only warn)"
)]
pub struct Cli {
    /// Project root (git runs here, relative paths resolve against it)
    #[arg(short, long, default_value = ".", help = "Project root (git runs here, relative paths resolve against it)")]
    pub root: PathBuf,

    /// Path to config file
    #[arg(short, long, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Generated header path (default: include/version.h)
    #[arg(long, help = "Generated header path (default: include/version.h)")]
    pub header: Option<PathBuf>,

    /// Documentation file to update (default: README.md)
    #[arg(long, help = "Documentation file to update (default: README.md)")]
    pub readme: Option<PathBuf>,

    /// Don't update the version line in the documentation file
    #[arg(long, help = "Don't update the version line in the documentation file")]
    pub no_readme: bool,

    /// Print the header that would be written without touching any file
    #[arg(long, help = "Print the header that would be written without touching any file")]
    pub dry_run: bool,
}
