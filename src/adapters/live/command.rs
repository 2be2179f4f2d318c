//! Live command runner using `std::process::Command`.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::process::Command;

use crate::ports::command::{CommandOutput, CommandRunner};
use crate::ports::PortError;

/// Live command runner that spawns real processes.
pub struct LiveCommandRunner;

impl CommandRunner for LiveCommandRunner {
    fn run(
        &self,
        program: &str,
        args: &[String],
        env: &BTreeMap<OsString, OsString>,
    ) -> Result<CommandOutput, PortError> {
        let output = Command::new(program).args(args).env_clear().envs(env).output()?;
        Ok(CommandOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
