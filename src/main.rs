use std::path::PathBuf;

use clap::Parser;

use chip8_vm::{run_machine_app, run_machine_headless, MachineError};

#[derive(Debug, Parser)]
#[command(name = "chip8-vm")]
#[command(about = "Run the CHIP-8 virtual machine")]
struct Args {
    /// Path to the ROM image to load at 0x200
    rom: PathBuf,

    #[arg(long, default_value_t = 10)]
    scale: usize,

    /// Instruction cycles per second; timers decay at the same rate
    #[arg(long, default_value_t = 100)]
    hz: usize,

    #[arg(long, default_value_t = 60)]
    fps: usize,

    #[arg(long, default_value_t = 2000)]
    max_cycles: usize,

    #[arg(long)]
    headless: bool,
}

fn main() -> Result<(), MachineError> {
    env_logger::init();
    let args = Args::parse();

    if args.headless {
        let state = run_machine_headless(&args.rom, args.max_cycles)?;
        println!("headless finished: pc=0x{:03x}", state.pc);
        return Ok(());
    }

    let _state = run_machine_app(&args.rom, args.scale, args.hz, args.fps)?;
    Ok(())
}
