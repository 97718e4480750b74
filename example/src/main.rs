// example/src/main.rs

use flatview::{compile_schema, Error, Region, Value};

// The record layout the producing module writes at the start of its state
// snapshot, plus two out-of-line blocks for the path and turret arrays.
const SCHEMA: &str = "
    b{all_loaded}
    f{curr_time}
    u{frame_count}
    [f{x}f{y}]{mouse_pos}
    [f{x}f{y}]*{path}
    [[f{x}f{y}]{position}b{dead}]*{turrets}
";

fn push_u32(snapshot: &mut Vec<u8>, value: u32) {
    snapshot.extend_from_slice(&value.to_le_bytes());
}

fn push_f32(snapshot: &mut Vec<u8>, value: f32) {
    snapshot.extend_from_slice(&value.to_le_bytes());
}

fn main() -> Result<(), Error> {
    // Build the snapshot the way the game module lays it out: a 9-word
    // inline record, the path block at byte 36 and the turret block at 60.
    let mut snapshot = Vec::new();

    push_u32(&mut snapshot, 1); // all_loaded
    push_f32(&mut snapshot, 42.5); // curr_time
    push_u32(&mut snapshot, 2550); // frame_count
    push_f32(&mut snapshot, 415.0); // mouse_pos.x
    push_f32(&mut snapshot, 288.0); // mouse_pos.y
    push_u32(&mut snapshot, 3); // path length
    push_u32(&mut snapshot, 36); // path pointer
    push_u32(&mut snapshot, 2); // turrets length
    push_u32(&mut snapshot, 60); // turrets pointer

    for (x, y) in [(0.0f32, 300.0f32), (400.0, 300.0), (800.0, 150.0)] {
        push_f32(&mut snapshot, x);
        push_f32(&mut snapshot, y);
    }

    for (x, y, dead) in [(120.0f32, 80.0f32, 0u32), (520.0, 340.0, 1)] {
        push_f32(&mut snapshot, x);
        push_f32(&mut snapshot, y);
        push_u32(&mut snapshot, dead);
    }

    // Compile the schema once, then decode the region against it.
    let fields = compile_schema(SCHEMA)?;
    let decoded = Value::decode(&fields, &Region::new(&snapshot), 0)?;

    for warning in &decoded.warnings {
        eprintln!("warning: {warning}");
    }

    let state = &decoded.value;
    println!("all_loaded  = {}", state.get("all_loaded").map(Value::as_bool).unwrap_or_default());
    println!("curr_time   = {}", state.get("curr_time").map(Value::as_float).unwrap_or_default());
    println!("frame_count = {}", state.get("frame_count").map(Value::as_uint).unwrap_or_default());

    let fallback = Value::Array(vec![]);
    let turrets = state.get("turrets").unwrap_or(&fallback);
    println!("turrets.len() = {}", turrets.len());

    for (i, turret) in turrets.as_array().iter().enumerate() {
        let position = turret.get("position");
        let x = position.and_then(|p| p.get("x")).map(Value::as_float).unwrap_or_default();
        let y = position.and_then(|p| p.get("y")).map(Value::as_float).unwrap_or_default();
        let dead = turret.get("dead").map(Value::as_bool).unwrap_or_default();
        println!("  turret[{}] = (x={}, y={}, dead={})", i, x, y, dead);
    }

    println!("{}", serde_json::to_string_pretty(state).map_err(Error::Json)?);

    Ok(())
}
