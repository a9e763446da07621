use std::{fs, io};

use crate::dialog::DialogResult;

// ── Fixed filenames ───────────────────────────────────────────────────────────

/// Disk image allocated by `qemu-img`, attached to every launch.
pub const IMAGE_FILE: &str = "image.qcow2";
/// The emitted launch script.
pub const SCRIPT_FILE: &str = "run.sh";
/// Installation disc the user supplies for the optional first boot.
pub const INSTALL_ISO: &str = "install.iso";

const DRIVE_ARGS: &str = "-drive file=image.qcow2,format=qcow2";

// ── Assembly ──────────────────────────────────────────────────────────────────

/// Builds the launch-script text from the dialog results, which the caller
/// passes in the fixed assembly order [system, memory, video, cores].
///
/// Layout: one `NAME=value` line per variable (per-dialog order preserved),
/// a blank line, then the argument templates space-joined with the drive
/// attachment appended.
pub fn assemble(results: &[DialogResult]) -> String {
    let variables: Vec<String> = results.iter().flat_map(|r| r.assignments()).collect();
    format!("{}\n\n{}", variables.join("\n"), command_line(results))
}

fn command_line(results: &[DialogResult]) -> String {
    let templates: Vec<&str> = results.iter().map(|r| r.args.as_str()).collect();
    format!("{} {}", templates.join(" "), DRIVE_ARGS)
}

/// All variable pairs across the dialogs, flattened in assembly order.
/// Exported into the install run's environment.
pub fn variables(results: &[DialogResult]) -> Vec<(&'static str, String)> {
    results.iter().flat_map(|r| r.variables.iter().cloned()).collect()
}

/// The install-run invocation as `(program, argv)`, with every `$NAME`
/// token expanded from the declaring dialog's own variables. The first
/// result is the system dialog, whose template is the executable itself.
pub fn install_invocation(results: &[DialogResult]) -> (String, Vec<String>) {
    let program = results[0].args.clone();

    let mut argv = Vec::new();
    for result in &results[1..] {
        for token in result.args.split_whitespace() {
            argv.push(match token.strip_prefix('$') {
                Some(name) => result
                    .variables
                    .iter()
                    .find(|(n, _)| *n == name)
                    .map(|(_, v)| v.clone())
                    .unwrap_or_default(),
                None => token.to_string(),
            });
        }
    }
    for token in DRIVE_ARGS.split_whitespace() {
        argv.push(token.to_string());
    }
    argv.push("-cdrom".to_string());
    argv.push(INSTALL_ISO.to_string());

    (program, argv)
}

// ── Output ────────────────────────────────────────────────────────────────────

/// Writes the script to `run.sh`, unconditionally overwriting.
pub fn save(script: &str) -> io::Result<()> {
    fs::write(SCRIPT_FILE, script)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::{cores, memory, system, video};

    fn scenario() -> Vec<DialogResult> {
        // Assembly order: system, memory, video, cores.
        vec![
            system::resolve("qemu-kvm".to_string()),
            memory::resolve(2048),
            video::resolve(2),
            cores::resolve(2),
        ]
    }

    #[test]
    fn assembles_variable_block_then_command_line() {
        let script = assemble(&scenario());
        assert_eq!(
            script,
            "MEMORY=2048M\nVIDEO=qxl\nCPU_CORES=2\n\n\
             qemu-kvm -m $MEMORY -vga $VIDEO -smp $CPU_CORES \
             -drive file=image.qcow2,format=qcow2"
        );
    }

    #[test]
    fn templates_reference_only_declared_variables() {
        for result in scenario() {
            assert!(result.references_only_own_variables(), "{:?}", result);
        }
    }

    #[test]
    fn system_dialog_embeds_executable_literally() {
        let system = system::resolve("qemu-system-x86_64".to_string());
        assert!(system.variables.is_empty());
        assert_eq!(system.args, "qemu-system-x86_64");
    }

    #[test]
    fn install_invocation_expands_variables() {
        let (program, argv) = install_invocation(&scenario());
        assert_eq!(program, "qemu-kvm");
        assert_eq!(
            argv,
            [
                "-m", "2048M", "-vga", "qxl", "-smp", "2",
                "-drive", "file=image.qcow2,format=qcow2",
                "-cdrom", "install.iso",
            ]
        );
    }

    #[test]
    fn exported_variables_flatten_in_assembly_order() {
        let vars = variables(&scenario());
        assert_eq!(
            vars,
            [
                ("MEMORY", "2048M".to_string()),
                ("VIDEO", "qxl".to_string()),
                ("CPU_CORES", "2".to_string()),
            ]
        );
    }
}
