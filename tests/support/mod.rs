#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use std::process::{Command, Output};

// Path to the compiled CLI under test.
pub fn christofel_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_christofel"))
}

// Fresh command for the CLI with seed-related env cleared so the built-in
// menu is used unless a test opts in.
pub fn christofel() -> Command {
    let mut cmd = Command::new(christofel_binary());
    cmd.env_remove("CHRISTOFEL_SEED")
        .env_remove("CHRISTOFEL_PLACEHOLDER_IMAGE")
        .env("RUST_LOG", "off");
    cmd
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to spawn {:?}", cmd.get_program()))?;
    if !output.status.success() {
        bail!(
            "command {:?} failed with {}:\nstdout: {}\nstderr: {}",
            cmd.get_program(),
            output.status,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(output)
}
