use crate::{dialog::DialogResult, error::WizardError, prompt};

/// vCPUs are capped at the host's available units; overcommit is refused.
pub fn run() -> Result<DialogResult, WizardError> {
    let available = available_units();
    let answer = prompt::line_until(
        &format!("core count (you have {})", available),
        |s| prompt::is_menu_choice(s, available),
    )?;
    Ok(resolve(answer.parse().unwrap_or(1)))
}

/// Host parallelism, falling back to 1 when it cannot be queried.
fn available_units() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

pub fn resolve(cores: usize) -> DialogResult {
    DialogResult {
        display: cores.to_string(),
        variables: vec![("CPU_CORES", cores.to_string())],
        args: "-smp $CPU_CORES".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{available_units, resolve};
    use crate::prompt::is_menu_choice;

    #[test]
    fn one_core_is_always_accepted() {
        assert!(is_menu_choice("1", available_units()));
    }

    #[test]
    fn overcommit_is_rejected() {
        let available = available_units();
        assert!(!is_menu_choice(&(available + 1).to_string(), available));
    }

    #[test]
    fn emits_core_count_variable() {
        let result = resolve(2);
        assert_eq!(result.variables, [("CPU_CORES", "2".to_string())]);
        assert_eq!(result.args, "-smp $CPU_CORES");
    }
}
