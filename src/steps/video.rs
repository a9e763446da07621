use console::style;

use crate::{dialog::DialogResult, error::WizardError, prompt, ui};

/// Menu entries: lowercase display name, script value, description.
/// "none" persists uppercase in the script by long-standing convention;
/// existing run.sh files depend on it, so the case split stays.
const MODES: [(&str, &str, &str); 5] = [
    ("std", "std", "always works, bad performance"),
    ("qxl", "qxl", "usually works, better performance"),
    ("virtio", "virtio", "only works on Linux>=4.4 with mesa, best performance"),
    ("nographic", "nographic", "still emulates a display, but doesn't show it"),
    ("none", "NONE", "can't even be accessed from VNC"),
];

pub fn run() -> Result<DialogResult, WizardError> {
    ui::print_info("Please select a video adapter.");
    println!();
    for (i, (name, _, description)) in MODES.iter().enumerate() {
        println!(
            "  {}: {:<10} {}",
            style(i + 1).cyan().bold(),
            style(name).bold(),
            style(description).dim()
        );
    }
    println!();

    let choice = prompt::menu_choice(MODES.len())?;
    Ok(resolve(choice))
}

/// `choice` is the validated 1-indexed menu answer.
pub fn resolve(choice: usize) -> DialogResult {
    let (name, value, _) = MODES[choice - 1];
    DialogResult {
        display: name.to_string(),
        variables: vec![("VIDEO", value.to_string())],
        args: "-vga $VIDEO".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::resolve;

    #[test]
    fn qxl_choice() {
        let result = resolve(2);
        assert_eq!(result.display, "qxl");
        assert_eq!(result.variables, [("VIDEO", "qxl".to_string())]);
        assert_eq!(result.args, "-vga $VIDEO");
    }

    #[test]
    fn none_displays_lowercase_but_persists_uppercase() {
        let result = resolve(5);
        assert_eq!(result.display, "none");
        assert_eq!(result.variables, [("VIDEO", "NONE".to_string())]);
    }

    #[test]
    fn every_choice_references_only_its_own_variable() {
        for choice in 1..=5 {
            assert!(resolve(choice).references_only_own_variables());
        }
    }
}
