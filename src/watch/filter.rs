// src/watch/filter.rs

use std::fmt;

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::config::FilterConfig;

/// The relevance predicate applied to every regular file the scanner sees.
///
/// A file name passes when it clears both checks:
///
/// - its `.`-delimited extension is in the allow-list (case-insensitive;
///   an empty list allows everything),
/// - it matches the include/exclude patterns, where excludes are checked
///   first and always win.
///
/// Patterns use shell-glob syntax (`*` matches any run of characters, `?`
/// exactly one) anchored at both ends, and are compiled once at startup.
/// Only base file names are ever matched, never full paths.
#[derive(Clone)]
pub struct FileFilter {
    extensions: Vec<String>,
    include: Option<GlobSet>,
    exclude: Option<GlobSet>,
}

impl fmt::Debug for FileFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileFilter")
            .field("extensions", &self.extensions)
            .finish_non_exhaustive()
    }
}

impl FileFilter {
    /// Compile a filter from resolved configuration.
    ///
    /// Fails if any include/exclude pattern is not a valid glob.
    pub fn new(config: &FilterConfig) -> Result<Self> {
        let include = if config.include.is_empty() {
            None
        } else {
            Some(build_globset(&config.include).context("compiling include patterns")?)
        };

        let exclude = if config.exclude.is_empty() {
            None
        } else {
            Some(build_globset(&config.exclude).context("compiling exclude patterns")?)
        };

        Ok(Self {
            extensions: config.extensions.clone(),
            include,
            exclude,
        })
    }

    /// The single predicate the scanner calls per regular file.
    pub fn is_relevant(&self, file_name: &str) -> bool {
        self.extension_allowed(file_name) && self.pattern_allowed(file_name)
    }

    /// True if the allow-list is empty, or the name has an extension on it.
    ///
    /// A name with no extension is rejected whenever the allow-list is
    /// non-empty.
    pub fn extension_allowed(&self, file_name: &str) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        let Some((_, ext)) = file_name.rsplit_once('.') else {
            return false;
        };
        self.extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(ext))
    }

    /// Exclude patterns are checked first; a match there rejects the name no
    /// matter what the includes say. With no include patterns every name is
    /// included; otherwise at least one include must match.
    pub fn pattern_allowed(&self, file_name: &str) -> bool {
        if let Some(exclude) = &self.exclude {
            if exclude.is_match(file_name) {
                return false;
            }
        }
        match &self.include {
            None => true,
            Some(include) => include.is_match(file_name),
        }
    }
}

/// Build a GlobSet from simple string patterns.
fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        let glob = Glob::new(pat)
            .with_context(|| format!("invalid glob pattern: {pat}"))?;
        builder.add(glob);
    }
    Ok(builder.build()?)
}
