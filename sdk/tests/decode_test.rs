#![cfg(test)]

use flatview::{compile_schema, Region, Value};

fn push_u32(buffer: &mut Vec<u8>, value: u32) {
    buffer.extend_from_slice(&value.to_le_bytes());
}

fn push_f32(buffer: &mut Vec<u8>, value: f32) {
    buffer.extend_from_slice(&value.to_le_bytes());
}

#[test]
fn decode_game_state_snapshot() {
    let schema = "
      b{all_loaded}
      f{curr_time}
      u{frame_count}
      [f{x}f{y}]{mouse_pos}
      [f{x}f{y}]*{path}
      [[f{x}f{y}]{position}b{dead}]*{turrets}
    ";

    // inline record: 1 + 1 + 1 + 2 + 2 + 2 = 9 words
    let mut snapshot = Vec::new();
    push_u32(&mut snapshot, 1); // all_loaded
    push_f32(&mut snapshot, 12.75); // curr_time
    push_u32(&mut snapshot, 765); // frame_count
    push_f32(&mut snapshot, 400.0); // mouse_pos.x
    push_f32(&mut snapshot, 300.0); // mouse_pos.y
    push_u32(&mut snapshot, 3); // path length
    push_u32(&mut snapshot, 36); // path pointer
    push_u32(&mut snapshot, 2); // turrets length
    push_u32(&mut snapshot, 60); // turrets pointer

    // path block at byte 36: three 8-byte elements
    for (x, y) in [(0.0f32, 0.0f32), (100.0, 50.0), (200.0, 50.0)] {
        push_f32(&mut snapshot, x);
        push_f32(&mut snapshot, y);
    }

    // turret block at byte 60: two 12-byte elements
    for (x, y, dead) in [(120.0f32, 80.0f32, 0u32), (240.0, 160.0, 1)] {
        push_f32(&mut snapshot, x);
        push_f32(&mut snapshot, y);
        push_u32(&mut snapshot, dead);
    }

    let fields = compile_schema(schema).expect("compile_schema failed");
    let decoded = Value::decode(&fields, &Region::new(&snapshot), 0).expect("decode failed");
    assert!(decoded.warnings.is_empty());

    let state = &decoded.value;
    assert_eq!(state.get("all_loaded"), Some(&Value::Bool(true)));
    assert_eq!(state.get("curr_time").unwrap().as_float(), 12.75);
    assert_eq!(state.get("frame_count").unwrap().as_uint(), 765);
    assert_eq!(state.get("mouse_pos").unwrap().get("y").unwrap().as_float(), 300.0);

    let path = state.get("path").unwrap();
    assert_eq!(path.len(), 3);
    assert_eq!(path[1].get("x").unwrap().as_float(), 100.0);
    assert_eq!(path[2].get("y").unwrap().as_float(), 50.0);

    let turrets = state.get("turrets").unwrap();
    assert_eq!(turrets.len(), 2);
    assert_eq!(turrets[0].get("dead"), Some(&Value::Bool(false)));
    assert_eq!(turrets[1].get("dead"), Some(&Value::Bool(true)));
    assert_eq!(turrets[1].get("position").unwrap().get("x").unwrap().as_float(), 240.0);
}

#[test]
fn same_descriptors_decode_many_regions() {
    let fields = compile_schema("u{hits}b{alive}").unwrap();

    let mut first = Vec::new();
    push_u32(&mut first, 7);
    push_u32(&mut first, 1);

    let mut second = Vec::new();
    push_u32(&mut second, 9);
    push_u32(&mut second, 0);

    let a = Value::decode(&fields, &Region::new(&first), 0).unwrap();
    let b = Value::decode(&fields, &Region::new(&second), 0).unwrap();
    assert_eq!(a.value.get("hits").unwrap().as_uint(), 7);
    assert_eq!(b.value.get("hits").unwrap().as_uint(), 9);
    assert_eq!(a.value.get("alive"), Some(&Value::Bool(true)));
    assert_eq!(b.value.get("alive"), Some(&Value::Bool(false)));
}

#[test]
fn json_inspection_output() {
    let mut snapshot = Vec::new();
    push_f32(&mut snapshot, 1.5);
    push_u32(&mut snapshot, 2);
    push_u32(&mut snapshot, 0); // non-empty length behind a null pointer

    let json = flatview::decode_to_json("f{speed}u*{ids}", &snapshot, 0).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["speed"], serde_json::json!(1.5));
    assert_eq!(parsed["ids"], serde_json::json!([]));
}

#[test]
fn defective_schemas_never_decode() {
    let err = flatview::decode_to_json("f{x}$", &[0; 8], 0).unwrap_err();
    assert!(matches!(err, flatview::Error::Schema(_)));
}
