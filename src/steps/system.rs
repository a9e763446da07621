use console::style;

use crate::{backend, dialog::DialogResult, error::WizardError, prompt, ui};

/// Lets the user pick one of the QEMU system emulators found on the host.
///
/// If discovery finds nothing the menu is empty and the choice prompt can
/// never be satisfied; at least one installed backend is a precondition of
/// running the wizard at all.
pub fn run() -> Result<DialogResult, WizardError> {
    let backends = backend::discover();

    ui::print_info("Choose a system for running QEMU.");
    if backends.first().map(String::as_str) == Some("qemu-kvm") {
        ui::print_info("qemu-kvm was found — hardware acceleration recommended.");
    }
    println!();
    for (i, name) in backends.iter().enumerate() {
        println!("  {}: {}", style(i + 1).cyan().bold(), name);
    }
    println!();

    let choice = prompt::menu_choice(backends.len())?;
    Ok(resolve(backends[choice - 1].clone()))
}

/// The chosen executable is embedded literally in the command line; this is
/// the one dialog that declares no variables.
pub fn resolve(name: String) -> DialogResult {
    DialogResult {
        display: name.clone(),
        variables: vec![],
        args: name,
    }
}
