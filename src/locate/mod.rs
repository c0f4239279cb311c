//! Dependency Locator: finding an installed package on disk.
//!
//! Resolution never errors. Every failure mode (undeclared dependency,
//! missing install tree, unreadable directory) collapses into an absent
//! [`LocatedPackage`]; the single fatal check happens later, at compose time.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::manifest::PackageManifest;

/// Inputs for one resolution attempt. Constructed fresh per invocation.
#[derive(Debug)]
pub struct ResolutionContext<'a> {
    /// The consuming project's manifest.
    pub manifest: &'a PackageManifest,
    /// Where the module-resolution walk starts.
    pub working_dir: &'a Path,
    /// The package to locate, e.g. `"element-plus"`.
    pub dependency: &'a str,
    /// Secondary search root for the case where the dependency ships
    /// bundled with the plugin itself rather than the host project.
    pub fallback_dir: Option<&'a Path>,
}

/// The outcome of a resolution attempt. Absence is a normal value here,
/// recoverable until the compose-time missing-dependency check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocatedPackage {
    install_path: Option<PathBuf>,
}

impl LocatedPackage {
    pub fn found(install_path: PathBuf) -> Self {
        Self {
            install_path: Some(install_path),
        }
    }

    pub fn absent() -> Self {
        Self::default()
    }

    /// The directory containing the located package's `package.json`,
    /// if resolution succeeded.
    pub fn install_path(&self) -> Option<&Path> {
        self.install_path.as_deref()
    }

    pub fn is_located(&self) -> bool {
        self.install_path.is_some()
    }
}

/// Locates the target dependency's install directory.
///
/// The primary attempt is manifest-driven: it runs only when the project
/// manifest declares the dependency (a transitively-available module is
/// deliberately not resolved, since a false negative beats a misleading
/// path). If the primary attempt yields nothing and a fallback directory is
/// configured, the walk repeats from there.
pub fn locate(ctx: &ResolutionContext<'_>) -> LocatedPackage {
    if let Some(path) = resolve_project_dep(ctx) {
        debug!(dependency = ctx.dependency, path = %path.display(), "resolved via project manifest");
        return LocatedPackage::found(path);
    }

    if let Some(base) = ctx.fallback_dir {
        if let Some(path) = resolve_from(base, ctx.dependency) {
            debug!(dependency = ctx.dependency, path = %path.display(), "resolved via fallback directory");
            return LocatedPackage::found(path);
        }
    }

    debug!(dependency = ctx.dependency, "package not located");
    LocatedPackage::absent()
}

/// Manifest-gated resolution from the project's working directory.
fn resolve_project_dep(ctx: &ResolutionContext<'_>) -> Option<PathBuf> {
    if ctx.dependency.is_empty() || !ctx.manifest.declares(ctx.dependency) {
        return None;
    }
    resolve_from(ctx.working_dir, ctx.dependency)
}

/// Walks the `node_modules` chain upward from `base`, returning the first
/// directory that holds `<dep>/package.json`.
fn resolve_from(base: &Path, dep: &str) -> Option<PathBuf> {
    for dir in base.ancestors() {
        let candidate = dir.join("node_modules").join(dep);
        if candidate.join("package.json").is_file() {
            return Some(candidate);
        }
    }
    None
}
