use dialoguer::Input;

use crate::{error::WizardError, ui};

const DEFAULT_SIZE: &str = "20G";

/// Asks for the disk image's maximum size. Any non-empty answer passes
/// through to `qemu-img` unchanged; empty means the 20G default.
pub fn run() -> Result<String, WizardError> {
    ui::print_info("The image grows on demand; this only caps its size.");
    println!();

    let answer: String = Input::new()
        .with_prompt("image.qcow2 max size (default 20G, dynamically resized)")
        .allow_empty(true)
        .interact_text()?;

    Ok(resolve(&answer))
}

fn resolve(answer: &str) -> String {
    if answer.is_empty() {
        DEFAULT_SIZE.to_string()
    } else {
        answer.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::resolve;

    #[test]
    fn empty_answer_means_20g() {
        assert_eq!(resolve(""), "20G");
    }

    #[test]
    fn non_empty_answer_passes_through() {
        assert_eq!(resolve("40G"), "40G");
        assert_eq!(resolve("512M"), "512M");
        // Not validated here; qemu-img is the authority on size syntax.
        assert_eq!(resolve("bogus"), "bogus");
    }
}
