use crate::{
    error::{DecodeError, DecodeWarning},
    field::{Field, FieldKind},
    region::Region,
    ARRAY_HEADER_SIZE, WORD_SIZE,
};

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::ops::Index;

/// This type holds one decoded snapshot tree.
///
/// Values can represent anything a layout schema can describe and are built
/// from a byte region by [decode](#method.decode). Record labels are stored
/// as string slices borrowed from their descriptors for efficiency. This
/// means that a Value can outlive the region it was decoded from but can't
/// outlive the descriptor tree.
#[derive(Clone, PartialEq)]
pub enum Value<'a> {
    Uint(u32),
    Float(f32),
    Bool(bool),
    Array(Vec<Value<'a>>),
    Record(Vec<(Cow<'a, str>, Value<'a>)>),
}

/// A decoded record along with the defects that were recovered, rather than
/// fatal, while walking the region.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<'a> {
    pub value: Value<'a>,
    pub warnings: Vec<DecodeWarning>,
}

impl<'a> Value<'a> {
    /// A convenience method to extract the value out of a [Uint](#variant.Uint).
    /// Returns `0` for other value kinds.
    pub fn as_uint(&self) -> u32 {
        match *self {
            Value::Uint(value) => value,
            _ => 0,
        }
    }

    /// A convenience method to extract the value out of a [Float](#variant.Float).
    /// Returns `0.0` for other value kinds.
    pub fn as_float(&self) -> f32 {
        match *self {
            Value::Float(value) => value,
            _ => 0.0,
        }
    }

    /// A convenience method to extract the value out of a [Bool](#variant.Bool).
    /// Returns `false` for other value kinds.
    pub fn as_bool(&self) -> bool {
        match *self {
            Value::Bool(value) => value,
            _ => false,
        }
    }

    /// A convenience method to get the elements out of an [Array](#variant.Array).
    /// Returns an empty slice for other value kinds.
    pub fn as_array(&self) -> &[Value<'a>] {
        match *self {
            Value::Array(ref values) => values.as_slice(),
            _ => &[],
        }
    }

    /// A convenience method to extract the length out of an [Array](#variant.Array).
    /// Returns `0` for other value kinds.
    pub fn len(&self) -> usize {
        match *self {
            Value::Array(ref values) => values.len(),
            _ => 0,
        }
    }

    /// Whether this value is an [Array](#variant.Array) with no elements.
    /// Returns `true` for other value kinds as well, matching [len](#method.len).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A convenience method to extract a field out of a [Record](#variant.Record)
    /// by label. Returns `None` for other value kinds or if no field carries
    /// the label.
    pub fn get(&self, label: &str) -> Option<&Value<'a>> {
        match *self {
            Value::Record(ref fields) => fields
                .iter()
                .find(|(name, _)| name.as_ref() == label)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    /// Decodes the record described by `fields` from `region`, starting at
    /// byte `offset`. Recovered defects (a non-empty array behind a null
    /// pointer) are collected on the returned [Decoded]; fatal ones abort
    /// the whole call and no partial tree is returned.
    pub fn decode(
        fields: &'a [Field],
        region: &Region,
        offset: usize,
    ) -> Result<Decoded<'a>, DecodeError> {
        let mut warnings = Vec::new();
        let (value, _) = Value::decode_record(fields, region, offset, &mut warnings)?;
        Ok(Decoded { value, warnings })
    }

    /// Decodes one record at `offset` and reports how many bytes of the
    /// region it consumed inline. Fields decode in declaration order; the
    /// cursor advances strictly left to right, by one word per scalar, two
    /// words per array header, and whatever a nested record reports for
    /// itself. This is used by [decode](#method.decode) but may also be
    /// useful by itself.
    pub fn decode_record(
        fields: &'a [Field],
        region: &Region,
        offset: usize,
        warnings: &mut Vec<DecodeWarning>,
    ) -> Result<(Value<'a>, usize), DecodeError> {
        let mut out = Vec::with_capacity(fields.len());
        let mut consumed = 0;

        for (index, field) in fields.iter().enumerate() {
            if let FieldKind::Error(found) = field.kind {
                return Err(DecodeError::UnknownFieldKind(found));
            }

            let label = match field.label {
                Some(ref label) => Cow::Borrowed(label.as_str()),
                None => Cow::Owned(index.to_string()),
            };

            let at = offset + consumed;
            let value = if field.is_array {
                let len = region.read_u32(at)?;
                let ptr = region.read_u32(at + WORD_SIZE)?;
                consumed += ARRAY_HEADER_SIZE;
                Value::decode_array(field, label.as_ref(), region, len, ptr, at, warnings)?
            } else {
                let (value, used) = Value::decode_kind(&field.kind, region, at, warnings)?;
                consumed += used;
                value
            };

            out.push((label, value));
        }

        Ok((Value::Record(out), consumed))
    }

    fn decode_kind(
        kind: &'a FieldKind,
        region: &Region,
        offset: usize,
        warnings: &mut Vec<DecodeWarning>,
    ) -> Result<(Value<'a>, usize), DecodeError> {
        match *kind {
            FieldKind::Uint32 => Ok((Value::Uint(region.read_u32(offset)?), WORD_SIZE)),
            FieldKind::Float32 => Ok((Value::Float(region.read_f32(offset)?), WORD_SIZE)),
            FieldKind::Bool => Ok((Value::Bool(region.read_bool(offset)?), WORD_SIZE)),
            FieldKind::Struct(ref children) => {
                Value::decode_record(children, region, offset, warnings)
            }
            FieldKind::Error(found) => Err(DecodeError::UnknownFieldKind(found)),
        }
    }

    /// Decodes the out-of-line block of an array field from its fat-pointer
    /// header `(len, ptr)`. Elements sit back to back with a fixed stride
    /// computed once from the element shape, and each one decodes
    /// independently at `ptr + index * stride`.
    fn decode_array(
        field: &'a Field,
        label: &str,
        region: &Region,
        len: u32,
        ptr: u32,
        header_at: usize,
        warnings: &mut Vec<DecodeWarning>,
    ) -> Result<Value<'a>, DecodeError> {
        if len == 0 {
            // empty array; the pointer half of the header is not inspected
            return Ok(Value::Array(vec![]));
        }

        if ptr == 0 {
            // the two halves of the fat pointer disagree; decode nothing
            // rather than reinterpreting the start of the region as elements
            warnings.push(DecodeWarning::NullArrayPointer {
                field: label.to_owned(),
                len,
                offset: header_at,
            });
            return Ok(Value::Array(vec![]));
        }

        let stride = field.kind.inline_words() * WORD_SIZE;
        let start = ptr as usize;
        let total = (len as usize).checked_mul(stride).unwrap_or(usize::MAX);
        region.check_range(start, total)?;

        let mut items = Vec::with_capacity(len as usize);
        for index in 0..len as usize {
            let (value, _) =
                Value::decode_kind(&field.kind, region, start + index * stride, warnings)?;
            items.push(value);
        }
        Ok(Value::Array(items))
    }
}

impl<'a> Index<usize> for Value<'a> {
    type Output = Value<'a>;

    /// A convenience method that adds support for `self[index]` expressions.
    /// It will panic if this value isn't an [Array](#variant.Array) or if the
    /// provided index is out of bounds.
    fn index(&self, index: usize) -> &Value<'a> {
        match *self {
            Value::Array(ref values) => &values[index],
            _ => panic!(),
        }
    }
}

impl<'a> fmt::Debug for Value<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match *self {
            Value::Uint(value) => value.fmt(f),
            Value::Float(value) => value.fmt(f),
            Value::Bool(value) => value.fmt(f),
            Value::Array(ref values) => values.fmt(f),

            Value::Record(ref fields) => {
                let mut first = true;
                write!(f, "{{")?;

                for (label, value) in fields {
                    if first {
                        first = false;
                    } else {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {:?}", label, value)?;
                }

                write!(f, "}}")
            }
        }
    }
}

impl<'a> Serialize for Value<'a> {
    /// Records serialize as JSON objects with their labels in declaration
    /// order; arrays as JSON lists.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            Value::Uint(value) => serializer.serialize_u32(value),
            Value::Float(value) => serializer.serialize_f32(value),
            Value::Bool(value) => serializer.serialize_bool(value),
            Value::Array(ref values) => values.serialize(serializer),

            Value::Record(ref fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (label, value) in fields {
                    map.serialize_entry(label.as_ref(), value)?;
                }
                map.end()
            }
        }
    }
}
