pub mod chip8_vm;

pub use chip8_vm::app::{run_machine_app, run_machine_headless};
pub use chip8_vm::audio::Beeper;
pub use chip8_vm::cpu::{execute_opcode, step};
pub use chip8_vm::error::MachineError;
pub use chip8_vm::state::{
    clear_display, create_machine, first_pressed_key, load_image, load_rom, set_key_state,
    MachineState,
};
