//! Consolidated test utilities for swapi-navigator
//!
//! This module provides unified testing utilities for integration tests,
//! running the binary against a local SWAPI-shaped fixture server.

pub mod assertions;
pub mod fixtures;
pub mod server;

use assert_cmd::Command;

/// The binary pointed at a fixture server, with colors off and no user config
pub fn navigator(base_url: &str) -> anyhow::Result<Command> {
    // Missing config file means defaults
    let config_home = std::env::temp_dir().join("swapi-navigator-tests-unused-config");
    let mut cmd = Command::cargo_bin("swapi-navigator")?;
    cmd.env("NO_COLOR", "1")
        .env("XDG_CONFIG_HOME", config_home)
        .env("NO_PROXY", "127.0.0.1,localhost")
        .env_remove("SWAPI_BASE_URL")
        .arg("--base-url")
        .arg(base_url);
    Ok(cmd)
}
