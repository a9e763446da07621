use std::{
    io,
    process::{Command, Stdio},
};

use crate::{error::WizardError, ui};

fn not_found_or_io(program: &str, err: io::Error) -> WizardError {
    if err.kind() == io::ErrorKind::NotFound {
        WizardError::CommandNotFound(program.to_string())
    } else {
        WizardError::Io(err)
    }
}

/// Run a command **silently** while displaying a spinner, capturing both
/// output streams. On success prints `done_msg` with a ✓. On failure the
/// captured output is printed verbatim and an error is returned.
pub fn run_with_spinner(
    program: &str,
    args: &[&str],
    spin_msg: &str,
    done_msg: &str,
) -> Result<(), WizardError> {
    let pb = ui::spinner(spin_msg);
    let result = Command::new(program)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| not_found_or_io(program, e));
    pb.finish_and_clear();

    match result {
        Err(e) => Err(e),
        Ok(output) if !output.status.success() => {
            for stream in [&output.stdout, &output.stderr] {
                let text = String::from_utf8_lossy(stream);
                if !text.trim().is_empty() {
                    eprintln!("{}", text.trim());
                }
            }
            Err(WizardError::CommandFailed(
                program.to_string(),
                output.status.code().unwrap_or(-1),
            ))
        }
        Ok(_) => {
            ui::print_success(done_msg);
            Ok(())
        }
    }
}

/// Run a command that **takes over the terminal** (stdin/stdout/stderr
/// inherited), with `vars` exported into the child's environment.
///
/// The exit status is discarded: the one caller is the first-boot install
/// run, whose outcome the user judges on screen, not through us.
pub fn run_inherit(program: &str, args: &[String], vars: &[(&str, String)]) {
    let _ = Command::new(program)
        .args(args)
        .envs(vars.iter().map(|(k, v)| (*k, v.as_str())))
        .status();
}
