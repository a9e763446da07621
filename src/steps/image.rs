use crate::{cmd, error::WizardError, script};

/// Allocates the qcow2 disk image with `qemu-img`.
///
/// This is the wizard's one fatal error path: a non-zero exit prints the
/// captured qemu-img output and aborts the whole run before anything is
/// written. A previous image at the same path is overwritten.
pub fn create(size: &str) -> Result<(), WizardError> {
    cmd::run_with_spinner(
        "qemu-img",
        &["create", "-f", "qcow2", script::IMAGE_FILE, size],
        &format!("Allocating {} ({})…", script::IMAGE_FILE, size),
        &format!("{} created ({} max).", script::IMAGE_FILE, size),
    )
}
