use chip8_vm::{create_machine, load_image, load_rom, run_machine_headless, MachineError};

#[test]
fn headless_runs_requested_cycles() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), [0x12, 0x00]).unwrap();

    let state = run_machine_headless(tmp.path(), 10).unwrap();

    assert_eq!(state.pc, 0x200);
}

#[test]
fn headless_rom_draws_pixels() {
    // I = 0x20A; draw a one-row sprite at (V0, V0); spin.
    let rom = [
        0xA2, 0x0A, 0xD0, 0x01, 0x12, 0x04, 0x00, 0x00, 0x00, 0x00, 0x80,
    ];
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), rom).unwrap();

    let state = run_machine_headless(tmp.path(), 16).unwrap();

    assert_eq!(state.screen_buffer[0], 1);
}

#[test]
fn headless_rejects_zero_cycles() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), [0x12, 0x00]).unwrap();

    let result = run_machine_headless(tmp.path(), 0);

    assert!(matches!(result, Err(MachineError::InvalidArgument(_))));
}

#[test]
fn missing_rom_file_is_an_io_error() {
    let mut state = create_machine();

    let result = load_rom(&mut state, std::path::Path::new("no/such/rom.ch8"));

    assert!(matches!(result, Err(MachineError::Io(_))));
}

#[test]
fn oversized_image_is_rejected() {
    let mut state = create_machine();
    let image = vec![0u8; 3585];

    let result = load_image(&mut state, &image);

    assert!(matches!(
        result,
        Err(MachineError::RomTooLarge {
            size: 3585,
            max: 3584
        })
    ));
}

#[test]
fn image_may_fill_all_memory_above_origin() {
    let mut state = create_machine();
    let image = vec![0xABu8; 3584];

    load_image(&mut state, &image).unwrap();

    assert_eq!(state.memory[0x200], 0xAB);
    assert_eq!(state.memory[4095], 0xAB);
}

#[test]
fn loaded_image_lands_at_origin() {
    let mut state = create_machine();
    let image = [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF];

    load_image(&mut state, &image).unwrap();

    assert_eq!(state.memory[0x200..0x208], image);
}
