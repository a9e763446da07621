use console::{style, StyledObject, Term};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const RULE_WIDTH: usize = 54;

fn rule() -> String {
    let cols = Term::stdout().size().1 as usize;
    "─".repeat(RULE_WIDTH.min(cols.max(40)))
}

// ── Banner ────────────────────────────────────────────────────────────────────

pub fn print_banner() {
    let logo = [
        r"   ██████╗ ███████╗███╗   ███╗██╗   ██╗",
        r"  ██╔═══██╗██╔════╝████╗ ████║██║   ██║",
        r"  ██║   ██║█████╗  ██╔████╔██║██║   ██║",
        r"  ██║▄▄ ██║██╔══╝  ██║╚██╔╝██║██║   ██║",
        r"  ╚██████╔╝███████╗██║ ╚═╝ ██║╚██████╔╝",
        r"   ╚══▀▀═╝ ╚══════╝╚═╝     ╚═╝ ╚═════╝ ",
    ];

    println!();
    for line in &logo {
        println!("{}", style(line).cyan().bold());
    }
    println!();
    println!(
        "  {}",
        style(format!(
            "Interactive VM setup  ·  v{}",
            env!("CARGO_PKG_VERSION")
        ))
        .dim()
        .italic()
    );
    println!("{}", style(rule()).dim());
    println!();
}

// ── Step header ───────────────────────────────────────────────────────────────

/// Numbered step header, printed before each wizard phase.
pub fn print_step(step: u8, total: u8, title: &str) {
    println!();
    println!(
        "{}  {}",
        style(format!(" {}/{} ", step, total)).black().on_cyan().bold(),
        style(title).white().bold()
    );
    println!("{}", style(rule()).dim());
}

// ── Feedback lines ────────────────────────────────────────────────────────────

fn feedback(symbol: StyledObject<&str>, msg: StyledObject<&str>) {
    println!("  {}  {}", symbol.bold(), msg);
}

pub fn print_success(msg: &str) {
    feedback(style("✓").green(), style(msg).green());
}

pub fn print_info(msg: &str) {
    feedback(style("→").blue(), style(msg));
}

pub fn print_warning(msg: &str) {
    feedback(style("⚠").yellow(), style(msg).yellow());
}

/// Written to stderr, unlike the other feedback lines.
pub fn print_error(msg: &str) {
    eprintln!("  {}  {}", style("✗").red().bold(), style(msg).red());
}

// ── Summary box ───────────────────────────────────────────────────────────────

/// Bordered key→value box, sized to its widest row.
///
/// ```text
/// ┌─ Configuration ────────────┐
/// │  system   qemu-kvm         │
/// │  memory   2048             │
/// └────────────────────────────┘
/// ```
pub fn print_kv_box(title: &str, rows: &[(&str, &str)]) {
    let key_w = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    let val_w = rows.iter().map(|(_, v)| v.chars().count()).max().unwrap_or(0);
    let inner = (key_w + val_w + 7).max(title.chars().count() + 6).max(28);

    println!(
        "  ┌─ {} {}┐",
        style(title).white().bold(),
        style("─".repeat(inner - title.chars().count() - 3)).dim()
    );
    for (key, val) in rows {
        println!(
            "  │  {}  {}{}│",
            style(format!("{:<key_w$}", key)).dim(),
            style(val).white().bold(),
            " ".repeat(inner - key_w - val.chars().count() - 4)
        );
    }
    println!("  └{}┘", style("─".repeat(inner)).dim());
}

// ── Spinner ───────────────────────────────────────────────────────────────────

/// Running braille spinner; call `finish_and_clear` once the wrapped
/// operation returns.
pub fn spinner(msg: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan.bold}  {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(msg.into());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
