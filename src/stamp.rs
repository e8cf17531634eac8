use colored::*;
use eyre::Result;
use log::{info, warn};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::header;
use crate::readme::{self, ReadmeUpdate};
use crate::version::Stamp;

/// Resolved settings for one run: config values with CLI overrides applied
/// and artifact paths anchored at the project root.
#[derive(Debug, Clone)]
pub struct Stamper {
    pub root: PathBuf,
    pub header_path: PathBuf,
    pub readme_path: Option<PathBuf>,
    pub version_marker: String,
    pub fallback_version: String,
    pub git: String,
}

/// Outcome of one stamping run.
#[derive(Debug)]
pub struct StampReport {
    pub stamp: Stamp,
    pub header_path: PathBuf,
    /// `None` when the documentation step was skipped or failed.
    pub readme: Option<ReadmeUpdate>,
}

impl Stamper {
    pub fn from_config(config: &Config, root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            header_path: root.join(&config.header_path),
            readme_path: config.update_readme.then(|| root.join(&config.readme_path)),
            version_marker: config.version_marker.clone(),
            fallback_version: config.fallback_version.clone(),
            git: config.git.clone(),
        }
    }

    pub fn resolve_stamp(&self) -> Stamp {
        Stamp::resolve(&self.git, &self.root, &self.fallback_version)
    }

    /// Resolve, write the header (fatal), then update the docs (best-effort).
    pub fn run(&self) -> Result<StampReport> {
        let stamp = self.resolve_stamp();
        self.apply(stamp)
    }

    /// Writes both artifacts for an already resolved stamp.
    pub fn apply(&self, stamp: Stamp) -> Result<StampReport> {
        info!("Stamping version {} built {}", stamp.version, stamp.build_date);

        header::write_header(&self.header_path, &stamp)?;
        println!(
            "{} Wrote {} ({})",
            "✓".green(),
            self.header_path.display(),
            stamp.version.cyan()
        );

        let readme = self.readme_path.as_deref().and_then(|path| self.update_docs(path, &stamp));

        Ok(StampReport {
            stamp,
            header_path: self.header_path.clone(),
            readme,
        })
    }

    fn update_docs(&self, path: &Path, stamp: &Stamp) -> Option<ReadmeUpdate> {
        match readme::update_readme(path, &self.version_marker, stamp) {
            Ok(update) => {
                if let ReadmeUpdate::Updated(_) = update {
                    println!("{} Updated version in {}", "✓".green(), path.display());
                }
                Some(update)
            }
            Err(e) => {
                warn!("Could not update {}: {:#}", path.display(), e);
                println!("{} Could not update {}: {:#}", "⚠".yellow(), path.display(), e);
                None
            }
        }
    }
}
