mod backend;
mod cmd;
mod dialog;
mod error;
mod prompt;
mod script;
mod steps;
mod ui;

use error::WizardError;

fn main() {
    if let Err(e) = run() {
        println!();
        ui::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}

fn run() -> Result<(), WizardError> {
    // ── Welcome ───────────────────────────────────────────────────────────────
    ui::print_banner();
    ui::print_info("This wizard configures a QEMU virtual machine and saves a");
    ui::print_info("reusable run.sh launch script. Nothing is created before");
    ui::print_info("you confirm the summary.");

    // ── Step 1: Disk image size ───────────────────────────────────────────────
    ui::print_step(1, 7, "Disk Image Size");
    let size = steps::size::run()?;

    // ── Steps 2-5: Configuration dialogs ─────────────────────────────────────
    ui::print_step(2, 7, "System Backend");
    let system = steps::system::run()?;

    ui::print_step(3, 7, "Memory");
    let memory = steps::memory::run()?;

    ui::print_step(4, 7, "CPU Cores");
    let cores = steps::cores::run()?;

    ui::print_step(5, 7, "Video Adapter");
    let video = steps::video::run()?;

    // ── Summary + confirmation gate ───────────────────────────────────────────
    println!();
    ui::print_kv_box(
        "Summary",
        &[
            ("system", system.display.as_str()),
            ("memory", memory.display.as_str()),
            ("cores", cores.display.as_str()),
            ("video", video.display.as_str()),
            ("size", size.as_str()),
        ],
    );
    println!();

    if !prompt::yes_no("Is this ok?")? {
        ui::print_info("Cancelled — nothing was created.");
        return Ok(()); // declining is a valid outcome, not a failure
    }

    // ── Step 6: Allocate the disk image ──────────────────────────────────────
    ui::print_step(6, 7, "Image Allocation");
    steps::image::create(&size)?;

    // Assembly order is fixed and differs from the prompting order above.
    let results = [system, memory, video, cores];
    let launch_script = script::assemble(&results);

    // ── Step 7: Optional install run + save ──────────────────────────────────
    ui::print_step(7, 7, "Installation & Launch Script");
    steps::install::run(&results)?;

    script::save(&launch_script)?;
    println!();
    ui::print_success(&format!("Done! {} saved.", script::SCRIPT_FILE));
    ui::print_info(&format!("Boot the machine any time with: sh {}", script::SCRIPT_FILE));

    Ok(())
}
