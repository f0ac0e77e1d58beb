//! Build metadata captured at compile time by the build script

/// When the binary was compiled
pub const BUILD_TIMESTAMP: &str = env!("VERGEN_BUILD_TIMESTAMP");

/// Cargo optimization level (0, 1, 2, 3, s, z)
pub const CARGO_OPT_LEVEL: &str = env!("VERGEN_CARGO_OPT_LEVEL");

/// Target triple, e.g. x86_64-unknown-linux-gnu
pub const CARGO_TARGET_TRIPLE: &str = env!("VERGEN_CARGO_TARGET_TRIPLE");

pub const RUSTC_SEMVER: &str = env!("VERGEN_RUSTC_SEMVER");

/// stable, beta or nightly
pub const RUSTC_CHANNEL: &str = env!("VERGEN_RUSTC_CHANNEL");

/// Commit the binary was built from, when built inside a git checkout
pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

pub const GIT_BRANCH: Option<&str> = option_env!("VERGEN_GIT_BRANCH");

/// `{target_triple}-opt{opt_level}`, e.g. `x86_64-unknown-linux-gnu-opt3`
pub fn version_string() -> String {
    format!("{}-opt{}", CARGO_TARGET_TRIPLE, CARGO_OPT_LEVEL)
}

/// Short commit hash, or `unknown` outside a checkout
pub fn git_revision() -> &'static str {
    match GIT_SHA {
        Some(sha) if sha.len() > 7 => &sha[..7],
        Some(sha) => sha,
        None => "unknown",
    }
}

/// Multi-line summary for logs and the health report
pub fn detailed_info() -> String {
    format!(
        "{} {}\nBuilt: {}\nTarget: {}\nOptimization: {}\nRustc: {} ({})\nRevision: {} ({})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        BUILD_TIMESTAMP,
        CARGO_TARGET_TRIPLE,
        CARGO_OPT_LEVEL,
        RUSTC_SEMVER,
        RUSTC_CHANNEL,
        git_revision(),
        GIT_BRANCH.unwrap_or("detached"),
    )
}
