/// The outcome of one configuration dialog.
///
/// `args` is a command-line fragment that refers to the variables in
/// `variables` by `$NAME` rather than by value, so the emitted script stays
/// editable after the fact. The system dialog is the one exception: it
/// declares no variables and embeds the executable name literally.
#[derive(Debug, Clone)]
pub struct DialogResult {
    /// Value echoed back to the user in the summary.
    pub display: String,
    /// Ordered `(name, value)` pairs destined for the script's variable block.
    pub variables: Vec<(&'static str, String)>,
    /// Command-line fragment referencing the variables above.
    pub args: String,
}

impl DialogResult {
    /// The `NAME=value` assignment lines for the script's variable block.
    pub fn assignments(&self) -> impl Iterator<Item = String> + '_ {
        self.variables.iter().map(|(name, value)| format!("{}={}", name, value))
    }

    /// True when every `$NAME` token in `args` names a declared variable.
    /// Upheld by construction in each dialog; checked in tests.
    #[cfg(test)]
    pub fn references_only_own_variables(&self) -> bool {
        self.args
            .split_whitespace()
            .filter_map(|tok| tok.strip_prefix('$'))
            .all(|name| self.variables.iter().any(|(n, _)| *n == name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignments_join_name_and_value() {
        let result = DialogResult {
            display: "qxl".into(),
            variables: vec![("VIDEO", "qxl".into())],
            args: "-vga $VIDEO".into(),
        };
        assert_eq!(result.assignments().collect::<Vec<_>>(), ["VIDEO=qxl"]);
        assert!(result.references_only_own_variables());
    }

    #[test]
    fn undeclared_reference_is_detected() {
        let result = DialogResult {
            display: "bad".into(),
            variables: vec![],
            args: "-vga $VIDEO".into(),
        };
        assert!(!result.references_only_own_variables());
    }
}
