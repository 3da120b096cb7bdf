use crate::config::LauncherConfig;
use crate::utils::error::{LauncherError, Result};
use std::fmt;
use std::fs::{self, File};
use std::io;
use std::path::{Component, Path, PathBuf};
use tempfile::TempDir;
use zip::ZipArchive;

/// Folder name the webapp tree is packaged under; stripped during extraction.
pub const RESOURCE_ROOT: &str = "webapp";

/// Relative paths copied in loose mode. Mirrors the files the todo webapp ships.
pub const WELL_KNOWN_FILES: [&str; 4] = [
    "WEB-INF/web.xml",
    "index.jsp",
    "jsp/index.jsp",
    "css/base.css",
];

/// Where the webapp tree comes from, decided by an explicit probe at startup
/// rather than by catching extraction failures halfway through.
#[derive(Debug, Clone)]
pub enum WebappSource {
    /// Zip artifact containing a `webapp/` tree (packaged run).
    Archive(PathBuf),
    /// Loose `webapp/` directory on disk (unpackaged run).
    Loose(PathBuf),
}

impl WebappSource {
    pub fn probe(config: &LauncherConfig) -> Result<Self> {
        if let Some(archive) = &config.archive {
            let path = PathBuf::from(archive);
            return match open_archive(&path) {
                Ok(_) => Ok(WebappSource::Archive(path)),
                Err(e) => Err(LauncherError::ConfigError {
                    message: format!(
                        "--archive {} is not a readable zip archive: {}",
                        path.display(),
                        e
                    ),
                }),
            };
        }

        if let Some(dir) = &config.webapp_dir {
            let path = PathBuf::from(dir);
            if path.is_dir() {
                return Ok(WebappSource::Loose(path));
            }
            return Err(LauncherError::ConfigError {
                message: format!("--webapp-dir {} is not a directory", path.display()),
            });
        }

        if let Ok(exe) = std::env::current_exe() {
            if open_archive(&exe).is_ok() {
                tracing::debug!(artifact = %exe.display(), "Running executable doubles as a zip artifact");
                return Ok(WebappSource::Archive(exe));
            }
            if let Some(dir) = exe.parent().map(|p| p.join(RESOURCE_ROOT)) {
                if dir.is_dir() {
                    return Ok(WebappSource::Loose(dir));
                }
            }
        }

        let cwd_dir = PathBuf::from(RESOURCE_ROOT);
        if cwd_dir.is_dir() {
            return Ok(WebappSource::Loose(cwd_dir));
        }

        Err(LauncherError::ExtractionError {
            message: format!(
                "no webapp source found: artifact is not a zip archive and no {}/ directory exists next to the executable or in the working directory",
                RESOURCE_ROOT
            ),
        })
    }

    pub fn mode(&self) -> SourceMode {
        match self {
            WebappSource::Archive(_) => SourceMode::Archive,
            WebappSource::Loose(_) => SourceMode::Loose,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    Archive,
    Loose,
}

impl fmt::Display for SourceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceMode::Archive => write!(f, "archive"),
            SourceMode::Loose => write!(f, "loose"),
        }
    }
}

/// Accounting for one extraction run, surfaced to the log at startup.
#[derive(Debug, Clone)]
pub struct ExtractReport {
    pub mode: SourceMode,
    pub files_copied: usize,
    pub dirs_created: usize,
    pub skipped: Vec<String>,
}

impl ExtractReport {
    fn new(mode: SourceMode) -> Self {
        Self {
            mode,
            files_copied: 0,
            dirs_created: 0,
            skipped: Vec::new(),
        }
    }
}

/// Extracted webapp tree. The `TempDir` owns the directory; dropping it
/// (after graceful shutdown) removes the extracted files.
pub struct ExtractedWebapp {
    pub dir: TempDir,
    pub report: ExtractReport,
}

impl ExtractedWebapp {
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Populate a fresh uniquely named temp directory with the webapp tree.
/// Each call creates its own directory, so repeated runs never collide.
pub fn extract_webapp(source: &WebappSource) -> Result<ExtractedWebapp> {
    let dir = TempDir::with_prefix("webapp-")?;

    let report = match source {
        WebappSource::Archive(path) => extract_from_archive(path, dir.path())?,
        WebappSource::Loose(root) => copy_well_known(root, dir.path())?,
    };

    if report.files_copied == 0 {
        return Err(LauncherError::ExtractionError {
            message: format!("no webapp files extracted from {} source", report.mode),
        });
    }

    Ok(ExtractedWebapp { dir, report })
}

fn open_archive(path: &Path) -> Result<ZipArchive<File>> {
    let file = File::open(path)?;
    Ok(ZipArchive::new(file)?)
}

fn extract_from_archive(path: &Path, target: &Path) -> Result<ExtractReport> {
    let mut archive = open_archive(path)?;
    let prefix = format!("{}/", RESOURCE_ROOT);
    let mut report = ExtractReport::new(SourceMode::Archive);

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let name = entry.name().to_string();

        let Some(relative) = name.strip_prefix(&prefix) else {
            continue;
        };
        if relative.is_empty() {
            continue;
        }

        let Some(out_path) = sanitized_join(target, relative) else {
            tracing::warn!(entry = %name, "Skipping archive entry with unsafe path");
            continue;
        };

        if entry.is_dir() {
            fs::create_dir_all(&out_path)?;
            report.dirs_created += 1;
        } else {
            if let Some(parent) = out_path.parent() {
                fs::create_dir_all(parent)?;
            }
            // File::create truncates, so a re-extracted entry overwrites.
            let mut out = File::create(&out_path)?;
            io::copy(&mut entry, &mut out)?;
            report.files_copied += 1;
        }
    }

    Ok(report)
}

fn copy_well_known(root: &Path, target: &Path) -> Result<ExtractReport> {
    let mut report = ExtractReport::new(SourceMode::Loose);

    for relative in WELL_KNOWN_FILES {
        let src = root.join(relative);
        if !src.is_file() {
            report.skipped.push(relative.to_string());
            continue;
        }

        let dest = target.join(relative);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&src, &dest)?;
        report.files_copied += 1;
    }

    Ok(report)
}

/// Joins an archive entry path onto the target, rejecting entries that would
/// escape it (absolute paths, `..`, drive prefixes).
fn sanitized_join(target: &Path, relative: &str) -> Option<PathBuf> {
    let rel = Path::new(relative);
    if rel.components().all(|c| matches!(c, Component::Normal(_))) {
        Some(target.join(rel))
    } else {
        None
    }
}
