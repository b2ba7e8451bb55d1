use std::fs;
use std::path::Path;

use log::info;

use crate::chip8_vm::config::{
    FONT_BYTES, KEY_COUNT, MAX_ROM_SIZE, MEMORY_SIZE, PROGRAM_START, REGISTER_COUNT,
    SCREEN_HEIGHT, SCREEN_WIDTH, STACK_DEPTH,
};
use crate::chip8_vm::error::MachineError;

#[derive(Debug, Clone)]
pub struct MachineState {
    pub memory: [u8; MEMORY_SIZE],
    pub registers: [u8; REGISTER_COUNT],
    pub index: usize,
    pub pc: usize,
    pub stack: [u16; STACK_DEPTH],
    pub sp: usize,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub screen_buffer: [u8; SCREEN_WIDTH * SCREEN_HEIGHT],
    pub key_inputs: [u8; KEY_COUNT],
    pub should_draw: bool,
}

impl Default for MachineState {
    fn default() -> Self {
        Self {
            memory: [0; MEMORY_SIZE],
            registers: [0; REGISTER_COUNT],
            index: 0,
            pc: PROGRAM_START,
            stack: [0; STACK_DEPTH],
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
            screen_buffer: [0; SCREEN_WIDTH * SCREEN_HEIGHT],
            key_inputs: [0; KEY_COUNT],
            should_draw: true,
        }
    }
}

/// Zeroed machine with the font table in low memory and pc at the load origin.
pub fn create_machine() -> MachineState {
    let mut state = MachineState::default();
    load_font(&mut state);
    state
}

pub fn load_font(state: &mut MachineState) {
    state.memory[..FONT_BYTES.len()].copy_from_slice(&FONT_BYTES);
}

/// Copies a raw program image into memory at the load origin.
pub fn load_image(state: &mut MachineState, image: &[u8]) -> Result<(), MachineError> {
    if image.len() > MAX_ROM_SIZE {
        return Err(MachineError::RomTooLarge {
            size: image.len(),
            max: MAX_ROM_SIZE,
        });
    }

    let start = PROGRAM_START;
    let end = PROGRAM_START + image.len();
    state.memory[start..end].copy_from_slice(image);

    Ok(())
}

pub fn load_rom(state: &mut MachineState, path: &Path) -> Result<(), MachineError> {
    let rom_bytes = fs::read(path)?;
    load_image(state, &rom_bytes)?;
    info!(
        "loaded {} ({} bytes) at 0x{:03x}",
        path.display(),
        rom_bytes.len(),
        PROGRAM_START
    );
    Ok(())
}

pub fn clear_display(state: &mut MachineState) {
    state.screen_buffer = [0; SCREEN_WIDTH * SCREEN_HEIGHT];
    state.should_draw = true;
}

pub fn first_pressed_key(state: &MachineState) -> Option<u8> {
    state
        .key_inputs
        .iter()
        .position(|pressed| *pressed == 1)
        .map(|index| index as u8)
}

pub fn set_key_state(state: &mut MachineState, key_index: usize, is_pressed: bool) {
    if key_index >= KEY_COUNT {
        return;
    }

    state.key_inputs[key_index] = u8::from(is_pressed);
}

/// Pushes a return address. The stack holds at most 16 frames; a call with a
/// full stack is an error rather than a write past the end.
pub fn push_stack(state: &mut MachineState, address: u16) -> Result<(), MachineError> {
    if state.sp >= STACK_DEPTH {
        return Err(MachineError::StackOverflow);
    }

    state.stack[state.sp] = address;
    state.sp += 1;
    Ok(())
}

pub fn pop_stack(state: &mut MachineState) -> Result<u16, MachineError> {
    if state.sp == 0 {
        return Err(MachineError::StackUnderflow);
    }

    state.sp -= 1;
    Ok(state.stack[state.sp])
}
