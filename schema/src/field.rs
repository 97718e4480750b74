/// Compiled, immutable description of one named slot in a record.
///
/// Descriptors form a tree mirroring the nested bracket groups of the schema
/// they were compiled from, and may be reused across any number of decode
/// calls against different regions.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub kind: FieldKind,
    /// When set, the slot is stored out of line behind a fat pointer.
    pub is_array: bool,
    /// Display name; unlabeled slots fall back to their zero-based position
    /// in the enclosing record.
    pub label: Option<String>,
}

/// The wire shape of a field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Uint32,
    Float32,
    /// Stored as a full little-endian word; reads as `true` iff the word is 1.
    Bool,
    /// A nested record. Children are never empty in compiled schemas.
    Struct(Vec<Field>),
    /// Placeholder for a schema character the compiler did not recognize.
    /// `compile_schema` never produces one; decoding a hand-built tree that
    /// contains one fails.
    Error(char),
}

impl Field {
    /// Number of 4-byte words this slot occupies inline in its record: two
    /// for an array header, otherwise the width of the kind itself.
    pub fn inline_words(&self) -> usize {
        if self.is_array {
            2
        } else {
            self.kind.inline_words()
        }
    }
}

impl FieldKind {
    /// Inline width in words: scalars are one word, structs the sum of their
    /// children. This is also what fixes the element stride of struct arrays,
    /// so every element of one array must have this exact shape.
    pub fn inline_words(&self) -> usize {
        match *self {
            FieldKind::Struct(ref children) => children.iter().map(Field::inline_words).sum(),
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar(kind: FieldKind) -> Field {
        Field { kind, is_array: false, label: None }
    }

    #[test]
    fn scalars_are_one_word() {
        assert_eq!(scalar(FieldKind::Uint32).inline_words(), 1);
        assert_eq!(scalar(FieldKind::Float32).inline_words(), 1);
        assert_eq!(scalar(FieldKind::Bool).inline_words(), 1);
    }

    #[test]
    fn array_slots_are_fat_pointers() {
        let field = Field { kind: FieldKind::Float32, is_array: true, label: None };
        assert_eq!(field.inline_words(), 2);

        let pair = FieldKind::Struct(vec![scalar(FieldKind::Float32), scalar(FieldKind::Float32)]);
        let field = Field { kind: pair, is_array: true, label: None };
        assert_eq!(field.inline_words(), 2);
    }

    #[test]
    fn struct_width_counts_nested_shapes() {
        // [[ff]b]: two words for the inline pair plus one for the flag
        let position = Field {
            kind: FieldKind::Struct(vec![scalar(FieldKind::Float32), scalar(FieldKind::Float32)]),
            is_array: false,
            label: None,
        };
        let turret = FieldKind::Struct(vec![position, scalar(FieldKind::Bool)]);
        assert_eq!(turret.inline_words(), 3);

        // a nested array slot contributes its 8-byte header, not its payload
        let with_array = FieldKind::Struct(vec![
            scalar(FieldKind::Uint32),
            Field { kind: FieldKind::Float32, is_array: true, label: None },
        ]);
        assert_eq!(with_array.inline_words(), 3);
    }
}
