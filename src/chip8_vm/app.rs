use std::path::Path;
use std::time::Instant;

use log::warn;

use crate::chip8_vm::audio::Beeper;
use crate::chip8_vm::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::chip8_vm::cpu::step;
use crate::chip8_vm::error::MachineError;
use crate::chip8_vm::state::{create_machine, load_rom, set_key_state, MachineState};

/// Runs the machine without a window, up to `max_cycles` instruction cycles.
pub fn run_machine_headless(
    rom_path: &Path,
    max_cycles: usize,
) -> Result<MachineState, MachineError> {
    if max_cycles == 0 {
        return Err(MachineError::InvalidArgument("max_cycles must be > 0"));
    }

    let mut state = create_machine();
    load_rom(&mut state, rom_path)?;

    for _ in 0..max_cycles {
        step(&mut state)?;
    }

    Ok(state)
}

pub fn run_machine_app(
    rom_path: &Path,
    scale: usize,
    cpu_hz: usize,
    target_fps: usize,
) -> Result<MachineState, MachineError> {
    use raylib::prelude::{Color, KeyboardKey, RaylibDraw};

    if scale == 0 {
        return Err(MachineError::InvalidArgument("scale must be > 0"));
    }
    if cpu_hz == 0 {
        return Err(MachineError::InvalidArgument("cpu_hz must be > 0"));
    }
    if target_fps == 0 {
        return Err(MachineError::InvalidArgument("target_fps must be > 0"));
    }

    let mut state = create_machine();
    load_rom(&mut state, rom_path)?;

    let width = (SCREEN_WIDTH * scale) as i32;
    let height = (SCREEN_HEIGHT * scale) as i32;
    let (mut rl, thread) = raylib::init().size(width, height).title("chip8-vm").build();
    rl.set_target_fps(target_fps as u32);

    let mut beeper = match Beeper::new() {
        Ok(beeper) => Some(beeper),
        Err(error) => {
            warn!("no audio device, running silent: {error}");
            None
        }
    };

    let key_map = [
        (KeyboardKey::KEY_ONE, 0x1usize),
        (KeyboardKey::KEY_TWO, 0x2),
        (KeyboardKey::KEY_THREE, 0x3),
        (KeyboardKey::KEY_FOUR, 0xC),
        (KeyboardKey::KEY_Q, 0x4),
        (KeyboardKey::KEY_W, 0x5),
        (KeyboardKey::KEY_E, 0x6),
        (KeyboardKey::KEY_R, 0xD),
        (KeyboardKey::KEY_A, 0x7),
        (KeyboardKey::KEY_S, 0x8),
        (KeyboardKey::KEY_D, 0x9),
        (KeyboardKey::KEY_F, 0xE),
        (KeyboardKey::KEY_Z, 0xA),
        (KeyboardKey::KEY_X, 0x0),
        (KeyboardKey::KEY_C, 0xB),
        (KeyboardKey::KEY_V, 0xF),
    ];

    // Timers decay once per instruction, so cpu_hz also sets timer speed.
    let cycle_interval = 1.0f32 / cpu_hz as f32;
    let max_cycles_per_frame = usize::max(1, (cpu_hz / target_fps) * 3);
    let mut accumulated_time = 0.0f32;
    let mut previous_tick = Instant::now();
    let mut front_buffer = state.screen_buffer;

    while !rl.window_should_close() {
        if rl.is_key_pressed(KeyboardKey::KEY_ESCAPE) {
            break;
        }

        for (key, mapped) in key_map {
            set_key_state(&mut state, mapped, rl.is_key_down(key));
        }

        let now = Instant::now();
        accumulated_time += (now - previous_tick).as_secs_f32().min(0.1);
        previous_tick = now;

        let mut cycles_run = 0;
        while accumulated_time >= cycle_interval && cycles_run < max_cycles_per_frame {
            step(&mut state)?;
            accumulated_time -= cycle_interval;
            cycles_run += 1;
        }

        if let Some(beeper) = beeper.as_mut() {
            beeper.update(state.sound_timer > 0);
        }

        if state.should_draw {
            front_buffer = state.screen_buffer;
            state.should_draw = false;
        }

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        for (index, value) in front_buffer.iter().enumerate() {
            if *value == 0 {
                continue;
            }
            let x = (index % SCREEN_WIDTH) as i32;
            let y = (index / SCREEN_WIDTH) as i32;
            d.draw_rectangle(
                x * scale as i32,
                y * scale as i32,
                scale as i32,
                scale as i32,
                Color::WHITE,
            );
        }
    }

    Ok(state)
}
