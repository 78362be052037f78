//! Build metadata embedded at compile time.
//!
//! CI sets `HELLO_WEB_VERSION`, `HELLO_WEB_GIT_SHA` and `HELLO_WEB_BUILD_TIME`
//! when compiling; local builds get the development defaults.

pub const VERSION: &str = match option_env!("HELLO_WEB_VERSION") {
    Some(version) => version,
    None => "0.0.0-dev",
};

pub const GIT_SHA: &str = match option_env!("HELLO_WEB_GIT_SHA") {
    Some(sha) => sha,
    None => "dev",
};

pub const BUILD_TIME: &str = match option_env!("HELLO_WEB_BUILD_TIME") {
    Some(time) => time,
    None => "unknown",
};

/// Version, commit and build time of the running binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: String,
    pub git_sha: String,
    pub build_time: String,
}

impl BuildInfo {
    pub fn new(
        version: impl Into<String>,
        git_sha: impl Into<String>,
        build_time: impl Into<String>,
    ) -> Self {
        Self {
            version: version.into(),
            git_sha: git_sha.into(),
            build_time: build_time.into(),
        }
    }
}

impl Default for BuildInfo {
    /// The values compiled into this binary.
    fn default() -> Self {
        Self::new(VERSION, GIT_SHA, BUILD_TIME)
    }
}
