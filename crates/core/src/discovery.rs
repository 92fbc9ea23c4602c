//! Executable discovery across the search path and version manager roots.
//!
//! A scan walks the process's `PATH` directories in order, then every
//! installed version's `bin` directory under each version manager root (not
//! just the active version, so tools installed under an inactive Node or
//! Python version are still found). Names are classified against the
//! configured pattern rules, deduplicated first-occurrence-wins, and each
//! winner is verified through a [`CommandResolver`] so that the reported path
//! is the one a bare invocation would actually execute right now.
//!
//! The engine never fails for an unreadable directory; such directories
//! simply contribute zero candidates.

use std::collections::HashSet;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use log::debug;

use crate::patterns::PatternRuleSet;

/// Where a discovered tool was first seen during the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolOrigin {
    StandardPath,
    VersionManagerPath,
}

/// One runnable tool found by a scan. Produced fresh on every scan and never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredTool {
    pub name: String,
    pub absolute_path: PathBuf,
    pub origin: ToolOrigin,
}

/// Shell-style command lookup: given a bare name, the absolute path that
/// would execute right now, or `None`.
///
/// Kept as a trait so tests can substitute a fake instead of depending on
/// the real `PATH`.
pub trait CommandResolver {
    fn resolve(&self, name: &str) -> Option<PathBuf>;
}

/// Production resolver backed by a `which`-style lookup of the real `PATH`.
pub struct WhichResolver;

impl CommandResolver for WhichResolver {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        which::which(name).ok()
    }
}

/// Version manager roots checked by default. Each root is expected to hold
/// one directory per installed version, with executables under `bin`.
#[must_use]
pub fn default_version_manager_roots() -> Vec<PathBuf> {
    ["~/.nvm/versions/node", "~/.pyenv/versions", "~/.rbenv/versions"]
        .iter()
        .map(|root| PathBuf::from(shellexpand::tilde(root).to_string()))
        .collect()
}

/// Splits a `PATH`-style variable into its directories, in order.
///
/// An absent variable yields an empty list; "no tools found" is a valid
/// outcome, never an error.
#[must_use]
pub fn search_path_dirs(path_var: Option<OsString>) -> Vec<PathBuf> {
    match path_var {
        Some(path_var) => env::split_paths(&path_var).collect(),
        None => Vec::new(),
    }
}

/// Splits the current process's `PATH` into its directories.
#[must_use]
pub fn current_search_path() -> Vec<PathBuf> {
    search_path_dirs(env::var_os("PATH"))
}

/// Lists the `<version>/bin` directories under a version manager root.
fn version_bin_dirs(root: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(root) else {
        return Vec::new();
    };

    let mut bin_dirs: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path().join("bin"))
        .filter(|bin| bin.is_dir())
        .collect();

    // read_dir order is platform-dependent; keep version roots stable
    bin_dirs.sort();
    bin_dirs
}

/// Builds the full ordered scan list: search path directories first, then
/// every installed version's bin directory under each extra root.
#[must_use]
pub fn build_scan_list(
    search_path: &[PathBuf],
    extra_search_roots: &[PathBuf],
) -> Vec<(PathBuf, ToolOrigin)> {
    let mut scan_list: Vec<(PathBuf, ToolOrigin)> = search_path
        .iter()
        .map(|dir| (dir.clone(), ToolOrigin::StandardPath))
        .collect();

    for root in extra_search_roots {
        for bin_dir in version_bin_dirs(root) {
            scan_list.push((bin_dir, ToolOrigin::VersionManagerPath));
        }
    }

    scan_list
}

/// Scans for runnable AI tools.
///
/// Classification order per entry: exclusion rules first (they always win),
/// then custom opt-ins, then the pattern rules. The first occurrence of a
/// name in scan order claims that name; later occurrences are ignored. Each
/// claimed name is verified through the resolver, which also supplies the
/// reported absolute path. Custom names that never appeared in any scanned
/// directory are still resolved, since explicit opt-ins may live elsewhere;
/// their origin is derived from where the resolved path lives.
///
/// The result contains at most one entry per name and is sorted by name.
#[must_use]
pub fn discover(
    search_path: &[PathBuf],
    rules: &PatternRuleSet,
    extra_search_roots: &[PathBuf],
    custom_names: &HashSet<String>,
    resolver: &dyn CommandResolver,
) -> Vec<DiscoveredTool> {
    let scan_list = build_scan_list(search_path, extra_search_roots);

    let mut seen: IndexSet<String> = IndexSet::new();
    let mut tools: Vec<DiscoveredTool> = Vec::new();

    for (dir, origin) in &scan_list {
        let Ok(entries) = fs::read_dir(dir) else {
            debug!("Skipping unreadable scan directory `{}`", dir.display());
            continue;
        };

        for entry in entries.flatten() {
            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                continue;
            };

            if seen.contains(&name) {
                continue;
            }

            if !entry.path().is_file() {
                continue;
            }

            if rules.is_excluded(&name) {
                continue;
            }

            if !(custom_names.contains(&name) || rules.is_included(&name)) {
                continue;
            }

            // First occurrence claims the name, even if verification fails
            seen.insert(name.clone());

            if let Some(absolute_path) = resolver.resolve(&name) {
                tools.push(DiscoveredTool {
                    name,
                    absolute_path,
                    origin: *origin,
                });
            } else {
                debug!("Dropping `{name}`: not resolvable on the current search path");
            }
        }
    }

    for name in custom_names {
        if seen.contains(name) || rules.is_excluded(name) {
            continue;
        }

        if let Some(absolute_path) = resolver.resolve(name) {
            // The scan never saw this name, so derive the origin from where
            // the resolved path actually lives
            let origin = if scan_list.iter().any(|(dir, origin)| {
                *origin == ToolOrigin::VersionManagerPath && absolute_path.starts_with(dir)
            }) {
                ToolOrigin::VersionManagerPath
            } else {
                ToolOrigin::StandardPath
            };

            seen.insert(name.clone());
            tools.push(DiscoveredTool {
                name: name.clone(),
                absolute_path,
                origin,
            });
        }
    }

    tools.sort_by(|a, b| a.name.cmp(&b.name));
    tools
}
