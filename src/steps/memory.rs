use crate::{dialog::DialogResult, error::WizardError, prompt};

/// Asks for the guest's RAM in megabytes. Zero and non-numeric answers are
/// re-asked; there is no upper bound, QEMU rejects absurd values itself.
pub fn run() -> Result<DialogResult, WizardError> {
    let answer = prompt::line_until("RAM (in megabytes)", prompt::is_positive_int)?;
    let megabytes: u64 = answer.parse().unwrap_or(0);
    Ok(resolve(megabytes))
}

pub fn resolve(megabytes: u64) -> DialogResult {
    DialogResult {
        display: megabytes.to_string(),
        variables: vec![("MEMORY", format!("{}M", megabytes))],
        args: "-m $MEMORY".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::resolve;
    use crate::prompt::is_positive_int;

    #[test]
    fn suffixes_megabyte_unit() {
        let result = resolve(512);
        assert_eq!(result.display, "512");
        assert_eq!(result.variables, [("MEMORY", "512M".to_string())]);
        assert_eq!(result.args, "-m $MEMORY");
    }

    #[test]
    fn zero_megabytes_never_reaches_resolve() {
        assert!(!is_positive_int("0"));
        assert!(is_positive_int("512"));
    }
}
