use crate::error::SchemaError;
use crate::scanner::Scanner;
use flatview_schema::{Field, FieldKind};

/// Compile a schema string into the ordered field descriptors of its
/// top-level record.
///
/// The grammar is case-sensitive and whitespace, newlines and commas are
/// insignificant between tokens: `u`/`f`/`b` are 4-byte scalars, `[` … `]`
/// nests a record, a trailing `*` marks an out-of-line array and a trailing
/// `{label}` attaches a display name (in that order when both appear). Any
/// other character fails the whole compilation.
///
/// ```
/// use flatview_compiler::compile_schema;
/// use flatview_schema::FieldKind;
///
/// let fields = compile_schema("f{x}f{y}[uu]*{cells}").unwrap();
/// assert_eq!(fields.len(), 3);
/// assert_eq!(fields[0].label.as_deref(), Some("x"));
/// assert!(fields[2].is_array);
/// assert!(matches!(fields[2].kind, FieldKind::Struct(_)));
/// ```
pub fn compile_schema(text: &str) -> Result<Vec<Field>, SchemaError> {
    let mut scanner = Scanner::new(text);
    parse_record(&mut scanner, None)
}

/// Parse fields until the input (or, inside a bracket group, the group)
/// ends. `group_start` is the offset of the `[` whose body this call is
/// parsing; nesting depth is tracked by the recursion itself, so inner
/// bracket pairs cannot terminate an outer group.
fn parse_record(
    scanner: &mut Scanner,
    group_start: Option<usize>,
) -> Result<Vec<Field>, SchemaError> {
    let mut fields = Vec::new();

    loop {
        scanner.skip_separators();

        let Some(found) = scanner.peek() else {
            return match group_start {
                Some(offset) => Err(SchemaError::UnterminatedGroup { offset }),
                None => Ok(fields),
            };
        };

        let kind = match found {
            'u' => {
                scanner.bump();
                FieldKind::Uint32
            }
            'f' => {
                scanner.bump();
                FieldKind::Float32
            }
            'b' => {
                scanner.bump();
                FieldKind::Bool
            }
            '[' => {
                let offset = scanner.pos();
                scanner.bump();
                let children = parse_record(scanner, Some(offset))?;
                if children.is_empty() {
                    return Err(SchemaError::EmptyStruct { offset });
                }
                FieldKind::Struct(children)
            }
            ']' if group_start.is_some() => {
                scanner.bump();
                return Ok(fields);
            }
            found => return Err(SchemaError::Syntax { found, offset: scanner.pos() }),
        };

        fields.push(parse_modifiers(scanner, kind)?);
    }
}

/// Parse the optional `*` and `{label}` suffixes of a token, in that order.
/// Both bind immediately; a separator detaches them from their token. Label
/// text is captured verbatim up to the closing brace, then trimmed of
/// leading and trailing whitespace only.
fn parse_modifiers(scanner: &mut Scanner, kind: FieldKind) -> Result<Field, SchemaError> {
    let is_array = scanner.eat('*');

    let offset = scanner.pos();
    let label = if scanner.eat('{') {
        match scanner.take_until('}') {
            Some(text) => Some(text.trim().to_owned()),
            None => return Err(SchemaError::UnterminatedLabel { offset }),
        }
    } else {
        None
    };

    Ok(Field { kind, is_array, label })
}
