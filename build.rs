#![allow(clippy::style)]

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

const ROUNDING_MODE_NAMES: [&str; 9] = [
    "Up", "Down", "Ceiling", "Floor", "HalfUp", "HalfDown", "HalfEven", "ZeroFiveUp", "Odd",
];

fn main() -> std::io::Result<()> {
    let outdir = match std::env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };
    let outdir_path = PathBuf::from(outdir);

    write_default_precision(&outdir_path, "default_precision.rs")?;
    write_default_rounding_mode(&outdir_path, "default_rounding_mode.rs")?;
    Ok(())
}

/// Create default_precision.rs, containing definition of constant DEFAULT_PRECISION
fn write_default_precision(outdir_path: &Path, filename: &str) -> std::io::Result<()> {
    let env_var = "RUST_BIGDECIMAL_CONTEXT_DEFAULT_PRECISION";

    let default_prec = env::var(env_var)
        .map(|s| s.parse::<std::num::NonZeroU32>().expect("$RUST_BIGDECIMAL_CONTEXT_DEFAULT_PRECISION must be an integer > 0"))
        .map(|nz_num| nz_num.into())
        .unwrap_or(100u32);

    let contents = format!("const DEFAULT_PRECISION: u64 = {default_prec};");
    write_if_changed(&outdir_path.join(filename), &contents, env_var)
}

/// Create default_rounding_mode.rs, containing definition of constant DEFAULT_ROUNDING_MODE
fn write_default_rounding_mode(outdir_path: &Path, filename: &str) -> std::io::Result<()> {
    let env_var = "RUST_BIGDECIMAL_CONTEXT_DEFAULT_ROUNDING_MODE";

    let mode = match env::var(env_var) {
        Ok(name) => ROUNDING_MODE_NAMES
            .iter()
            .find(|candidate| candidate.eq_ignore_ascii_case(name.trim()))
            .copied()
            .unwrap_or_else(|| panic!("${} must be one of {:?}", env_var, ROUNDING_MODE_NAMES)),
        Err(_) => "HalfEven",
    };

    let contents = format!("const DEFAULT_ROUNDING_MODE: RoundingMode = RoundingMode::{mode};");
    write_if_changed(&outdir_path.join(filename), &contents, env_var)
}

fn write_if_changed(path: &Path, contents: &str, env_var: &str) -> std::io::Result<()> {
    // Rewriting the file if it already exists with the same contents
    // would force a rebuild.
    match std::fs::read_to_string(path) {
        Ok(existing_contents) if existing_contents == contents => {}
        _ => {
            let mut file = File::create(path)?;
            write!(file, "{contents}")?;
        }
    };

    println!("cargo:rerun-if-changed={}", path.display());
    println!("cargo:rerun-if-env-changed={}", env_var);

    Ok(())
}
