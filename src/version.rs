use std::fmt;

pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

/// `git describe` output split into its parts, e.g. `v0.1.0-15-ge1c9641`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Describe<'a> {
    pub tag: &'a str,
    pub commits_after: u32,
    pub hash: &'a str,
}

impl<'a> Describe<'a> {
    /// Returns `None` for a bare tag or a bare hash
    #[must_use]
    pub fn parse(describe: &'a str) -> Option<Self> {
        let mut parts = describe.rsplitn(3, '-');
        let hash = parts.next()?.strip_prefix('g')?;
        let commits_after = parts.next()?.parse().ok()?;
        let tag = parts.next()?;
        Some(Self {
            tag,
            commits_after,
            hash,
        })
    }
}

pub struct VersionInfo {
    pub version: &'static str,
    pub commit_hash: Option<&'static str>,
    pub commit_hash_short: Option<&'static str>,
    pub git_version: Option<&'static str>,
    pub is_dirty: bool,
    pub target: &'static str,
    pub profile: &'static str,
    pub rustc_version: &'static str,
}

impl Default for VersionInfo {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionInfo {
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: built_info::PKG_VERSION,
            commit_hash: built_info::GIT_COMMIT_HASH,
            commit_hash_short: built_info::GIT_COMMIT_HASH_SHORT,
            git_version: built_info::GIT_VERSION,
            is_dirty: built_info::GIT_DIRTY.unwrap_or(false),
            target: built_info::TARGET,
            profile: built_info::PROFILE,
            rustc_version: built_info::RUSTC_VERSION,
        }
    }

    fn describe(&self) -> Option<Describe<'static>> {
        self.git_version.and_then(Describe::parse)
    }

    /// Dirty tree, debug profile, or commits past the last tag
    #[must_use]
    pub fn is_development_build(&self) -> bool {
        self.is_dirty
            || self.profile == "debug"
            || self.describe().is_some_and(|d| d.commits_after > 0)
    }

    #[must_use]
    pub fn short_version(&self) -> String {
        if !self.is_development_build() {
            return format!("v{}", self.version);
        }

        let mut build: Vec<String> = Vec::new();
        if let Some(describe) = self.describe() {
            build.push(describe.commits_after.to_string());
            build.push(describe.hash.to_string());
        } else if let Some(hash) = self.commit_hash_short {
            build.push(hash.to_string());
        }
        if self.is_dirty {
            build.push("dirty".to_string());
        }

        if build.is_empty() {
            format!("v{}-dev", self.version)
        } else {
            format!("v{}-dev+{}", self.version, build.join("."))
        }
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "byte-lens\n\nVersion: {}", self.short_version())?;

        if self.is_development_build() {
            if let Some(git_version) = self.git_version {
                writeln!(f, "Git version notation: {git_version}")?;
            }
            if let Some(commit_hash) = self.commit_hash {
                writeln!(f, "Commit hash: {commit_hash}")?;
            }
            if let Some(describe) = self.describe() {
                writeln!(f, "Commits since {}: {}", describe.tag, describe.commits_after)?;
            }
            if self.is_dirty {
                writeln!(f, "Working directory: dirty")?;
            }
            writeln!(f, "Profile: {}", self.profile)?;
            writeln!(f, "Target: {}", self.target)?;
            writeln!(f, "Rust: {}", self.rustc_version)?;
        }

        Ok(())
    }
}

#[must_use]
pub fn get_version_info() -> VersionInfo {
    VersionInfo::new()
}
