use std::{path::Path, thread, time::Duration};

use crate::{cmd, dialog::DialogResult, error::WizardError, prompt, script, ui};

const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Offers a first boot from an installation disc before the script is saved.
///
/// Skipping is fine; the saved run.sh boots the installed system later.
pub fn run(results: &[DialogResult]) -> Result<(), WizardError> {
    if !prompt::yes_no("Would you like to install an operating system now?")? {
        ui::print_info("Skipping installation — run.sh will boot the empty image.");
        return Ok(());
    }

    wait_for_iso();

    let (program, argv) = script::install_invocation(results);
    let vars = script::variables(results);

    println!();
    ui::print_info(&format!("Starting {} — close the emulator when done.", program));
    println!();

    // The emulator owns the terminal from here. Its exit status is not
    // checked: the user watches the installation on screen, and the script
    // is saved either way.
    cmd::run_inherit(&program, &argv, &vars);

    Ok(())
}

/// Blocks until the install disc shows up in the working directory,
/// reminding the user once a second. Deliberately unbounded.
fn wait_for_iso() {
    while !Path::new(script::INSTALL_ISO).exists() {
        ui::print_warning(&format!("Please rename your ISO to {}", script::INSTALL_ISO));
        thread::sleep(POLL_INTERVAL);
    }
    ui::print_success(&format!("{} found.", script::INSTALL_ISO));
}
