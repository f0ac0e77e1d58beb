use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use vergen::{BuildBuilder, CargoBuilder, Emitter, RustcBuilder};
use vergen_gitcl::{Emitter as GitEmitter, GitclBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let build = BuildBuilder::default().build_timestamp(true).build()?;

    let cargo = CargoBuilder::default()
        .opt_level(true)
        .target_triple(true)
        .build()?;

    let rustc = RustcBuilder::default()
        .semver(true)
        .channel(true)
        .build()?;

    // Git metadata is optional; outside a checkout these stay unset
    let gitcl = GitclBuilder::default().sha(true).branch(true).build()?;

    Emitter::default()
        .add_instructions(&build)?
        .add_instructions(&cargo)?
        .add_instructions(&rustc)?
        .emit()?;

    GitEmitter::default().add_instructions(&gitcl)?.emit()?;

    copy_profiles()?;

    Ok(())
}

/// Copies the profile files the binary can load into `target/<profile>/config`
fn copy_profiles() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    let profile = env::var("PROFILE")?;

    // OUT_DIR is target/<profile>/build/framekit-<hash>/out
    let target_dir = out_dir
        .ancestors()
        .nth(3)
        .ok_or("Could not determine target directory")?;

    let config_out_dir = target_dir.join("config");
    fs::create_dir_all(&config_out_dir)?;

    let wanted: &[&str] = if profile == "release" {
        &["release.toml"]
    } else {
        &["debug.toml", "release.toml"]
    };

    for name in wanted {
        let source = Path::new("config").join(name);
        println!("cargo:rerun-if-changed={}", source.display());
        if source.exists() {
            fs::copy(&source, config_out_dir.join(name))?;
        }
    }

    Ok(())
}
