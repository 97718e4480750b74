use thiserror::Error;

/// Fatal decoding failures. When one of these occurs the whole decode call
/// aborts and no partial value tree is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("read of {len} bytes at offset {offset} is out of range for a {region_len} byte region")]
    OutOfRange {
        offset:     usize,
        len:        usize,
        region_len: usize,
    },

    #[error("cannot decode a field whose schema character {0:?} was not recognized")]
    UnknownFieldKind(char),
}

/// Defects recovered during a decode walk instead of aborting it. They are
/// collected on the decode result so callers can report them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeWarning {
    /// The two halves of a fat pointer disagree: a non-empty length paired
    /// with a zero pointer. The field decodes to an empty sequence.
    #[error("array field \"{field}\" has length {len} but a null pointer (header at offset {offset})")]
    NullArrayPointer {
        field:  String,
        len:    u32,
        offset: usize,
    },
}
