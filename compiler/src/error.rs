use thiserror::Error;

/// Fatal schema compilation failures. No partial descriptor list is produced
/// when one of these occurs. Offsets are byte positions into the schema
/// string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("unrecognized schema character {found:?} at offset {offset}")]
    Syntax { found: char, offset: usize },

    #[error("struct group opened at offset {offset} has no fields")]
    EmptyStruct { offset: usize },

    #[error("label opened at offset {offset} is missing its closing brace")]
    UnterminatedLabel { offset: usize },

    #[error("struct group opened at offset {offset} is missing its closing bracket")]
    UnterminatedGroup { offset: usize },
}
