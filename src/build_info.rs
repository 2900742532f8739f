use std::fmt;

/// Placeholder reported for any piece of build metadata that was not
/// captured at compile time.
pub const UNKNOWN: &str = "unknown";

/// # Build Metadata
///
/// Version and source-revision information captured when the binary was
/// compiled. The commit and branch are exported by `build.rs` from
/// `git rev-parse`; builds outside a git checkout leave them unset.
///
/// Loaded once at startup and shared read-only with every worker through
/// `web::Data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: String,
    pub git_commit: String,
    pub git_branch: String,
}

impl BuildInfo {
    /// Builds the record from optional values, substituting [`UNKNOWN`] for
    /// anything missing or blank.
    pub fn new(version: Option<&str>, git_commit: Option<&str>, git_branch: Option<&str>) -> Self {
        Self {
            version: or_unknown(version),
            git_commit: or_unknown(git_commit),
            git_branch: or_unknown(git_branch),
        }
    }

    /// Metadata baked into this binary by cargo and the build script.
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("CARGO_PKG_VERSION"),
            option_env!("ARTAC_GIT_COMMIT"),
            option_env!("ARTAC_GIT_BRANCH"),
        )
    }

    /// Metadata with every field set to [`UNKNOWN`].
    pub fn unknown() -> Self {
        Self::new(None, None, None)
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::from_build_env()
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "version {} (commit {}, branch {})",
            self.version, self.git_commit, self.git_branch
        )
    }
}

fn or_unknown(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => UNKNOWN.to_string(),
    }
}
