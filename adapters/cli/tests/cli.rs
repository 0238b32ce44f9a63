use std::{fs, process::Command};

fn tile_quest() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tile-quest"))
}

#[test]
fn scripted_walk_ends_with_goodbye() {
    let output = tile_quest()
        .args(["--script", "dd", "--frame-ms", "0"])
        .output()
        .expect("failed to launch tile-quest");

    assert!(output.status.success(), "scripted session should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Welcome to Tile Quest."));
    assert!(stdout.contains("Player:(7,5)"));
    assert!(stdout.trim_end().ends_with("Goodbye."));
}

#[test]
fn dump_maps_lists_every_map() {
    let output = tile_quest()
        .arg("--dump-maps")
        .output()
        .expect("failed to launch tile-quest");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("map 0 (50x50"));
    assert!(stdout.contains("map 1 (16x16"));
    assert!(stdout.contains("map 2 (12x12"));
    assert!(!stdout.contains("Welcome"));
}

#[test]
fn unknown_script_key_is_an_error() {
    let output = tile_quest()
        .args(["--script", "dx", "--frame-ms", "0"])
        .output()
        .expect("failed to launch tile-quest");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown key"));
}

#[test]
fn config_file_sets_the_start_tile() {
    let path = std::env::temp_dir().join(format!("tile-quest-{}.toml", std::process::id()));
    fs::write(&path, "frame_budget_ms = 0\ncolor = false\nstart = { x = 10, y = 10 }\n")
        .expect("write config");

    let output = tile_quest()
        .arg("--config")
        .arg(&path)
        .args(["--script", "."])
        .output()
        .expect("failed to launch tile-quest");
    let _ = fs::remove_file(&path);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Player:(10,10)"));
}
