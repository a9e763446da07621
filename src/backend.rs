use std::{fs, path::Path};

// ── Discovery constants ───────────────────────────────────────────────────────

const BIN_DIR: &str = "/usr/bin";
const SYSTEM_PREFIX: &str = "qemu-system-";
const KVM_NAME: &str = "qemu-kvm";
const KVM_PATH: &str = "/usr/bin/qemu-kvm";

// ── Public API ────────────────────────────────────────────────────────────────

/// Returns the virtualization-backend executables available on this host:
/// every `qemu-system-*` binary in `/usr/bin`, sorted, with `qemu-kvm`
/// prepended when its well-known path exists. May be empty.
pub fn discover() -> Vec<String> {
    discover_in(Path::new(BIN_DIR), Path::new(KVM_PATH))
}

fn discover_in(bin_dir: &Path, kvm_path: &Path) -> Vec<String> {
    let mut systems: Vec<String> = fs::read_dir(bin_dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .filter(|name| name.starts_with(SYSTEM_PREFIX))
                .collect()
        })
        .unwrap_or_default();

    // Directory order is platform-arbitrary; sort for a stable menu.
    systems.sort();

    if kvm_path.exists() {
        systems.insert(0, KVM_NAME.to_string());
    }

    systems
}
