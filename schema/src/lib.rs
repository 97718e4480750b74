//! This is a Rust library for decoding flat little-endian memory snapshots
//! (such as the state record a separate computational module keeps in its
//! linear memory) into nested, labeled value trees, driven by compiled field
//! descriptors.
//!
//! ```
//! use flatview_schema::*;
//!
//! let fields = vec![
//!     Field { kind: FieldKind::Float32, is_array: false, label: Some("x".to_owned()) },
//!     Field { kind: FieldKind::Float32, is_array: false, label: Some("y".to_owned()) },
//! ];
//!
//! let region = Region::new(&[0, 0, 192, 63, 0, 0, 16, 192]);
//! let decoded = Value::decode(&fields, &region, 0).unwrap();
//! assert_eq!(format!("{:?}", decoded.value), "{x: 1.5, y: -2.25}");
//! assert!(decoded.warnings.is_empty());
//! ```

pub mod error;
pub mod field;
pub mod region;
pub mod value;

pub use error::*;
pub use field::*;
pub use region::*;
pub use value::*;

/// Width of every scalar slot in a snapshot, in bytes. The producing module
/// keeps its state 4-byte aligned, so even booleans occupy a full word.
pub const WORD_SIZE: usize = 4;

/// Width of the in-place `(length, pointer)` header of an out-of-line array.
pub const ARRAY_HEADER_SIZE: usize = 2 * WORD_SIZE;
