//! Conversion between logical [Arg] values and EIP712 JSON, driven by the declared field types.
//!
//! Integers of any width cross into EIP712 as decimal strings, bytes as `0x`-prefixed hex.

use error_stack::{report, Result};
use serde_json::{Map, Value};

use crate::args::{parse_decimal, Arg, Args};
use crate::error::Error;
use crate::registry::{Entry, FieldSchema};

/// Encodes the `value` object of an EIP712 envelope. `fields` must name exactly the fields of
/// the entry's schema, in schema order.
pub(crate) fn encode_value(
    entry: &Entry,
    fields: Vec<(&'static str, Arg)>,
) -> Result<Map<String, Value>, Error> {
    encode_struct(entry, entry.schema, fields, "")
}

/// Decodes the `value` object of an EIP712 envelope back into logical arguments.
pub(crate) fn decode_value(entry: &Entry, value: &Map<String, Value>) -> Result<Args, Error> {
    let fields = decode_struct(entry, entry.schema, value, "")?;
    Ok(Args::new(entry.kind, fields))
}

fn encode_struct<N>(
    entry: &Entry,
    schema: FieldSchema,
    fields: Vec<(N, Arg)>,
    path: &str,
) -> Result<Map<String, Value>, Error>
where
    N: AsRef<str>,
{
    if fields.len() != schema.len() {
        return Err(report!(Error::invalid_arg(entry.kind, path_or_root(path)))
            .attach_printable(format!(
                "{{ expected_fields = {}, actual_fields = {} }}",
                schema.len(),
                fields.len()
            )));
    }

    schema
        .iter()
        .zip(fields)
        .map(|(field, (name, arg))| {
            let field_path = format!("{}{}", path, field.name);
            if field.name != name.as_ref() {
                return Err(report!(Error::invalid_arg(entry.kind, field_path))
                    .attach_printable(format!("{{ unexpected_field = {} }}", name.as_ref())));
            }

            encode_field(entry, field.r#type, arg, &field_path)
                .map(|value| (field.name.to_string(), value))
        })
        .collect()
}

fn encode_field(entry: &Entry, ty: &str, arg: Arg, path: &str) -> Result<Value, Error> {
    let mismatch = |arg: &Arg| {
        report!(Error::invalid_arg(entry.kind, path))
            .attach_printable(format!("{{ eip712_type = {}, value = {:?} }}", ty, arg))
    };

    if let Some(element_ty) = ty.strip_suffix("[]") {
        let items = match arg {
            Arg::List(items) => items,
            other => return Err(mismatch(&other)),
        };

        return items
            .into_iter()
            .enumerate()
            .map(|(i, item)| encode_field(entry, element_ty, item, &format!("{}[{}]", path, i)))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array);
    }

    if let Some(schema) = entry.nested_schema(ty) {
        let fields = match arg {
            Arg::Struct(fields) => fields,
            other => return Err(mismatch(&other)),
        };

        return encode_struct(entry, schema, fields, &format!("{}.", path)).map(Value::Object);
    }

    match (ty, arg) {
        ("string", Arg::Str(s)) => Ok(Value::String(s)),
        ("string", Arg::Uint(n)) => Ok(Value::String(n.to_string())),
        ("string", Arg::Int(n)) => Ok(Value::String(n.to_string())),
        ("bool", Arg::Bool(b)) => Ok(Value::Bool(b)),
        ("bytes", Arg::Bytes(bytes)) => Ok(Value::String(format!("0x{}", hex::encode(bytes)))),
        (ty, Arg::Uint(n)) if unsigned_bits(ty).is_some_and(|bits| fits_unsigned(n, bits)) => {
            Ok(Value::String(n.to_string()))
        }
        (ty, Arg::Int(n)) if signed_bits(ty).is_some_and(|bits| fits_signed(n, bits)) => {
            Ok(Value::String(n.to_string()))
        }
        (ty, Arg::Uint(n)) if signed_bits(ty).is_some() => {
            let n = i128::try_from(n).map_err(|_| mismatch(&Arg::Uint(n)))?;
            encode_field(entry, ty, Arg::Int(n), path)
        }
        (_, arg) => Err(mismatch(&arg)),
    }
}

fn decode_struct(
    entry: &Entry,
    schema: FieldSchema,
    value: &Map<String, Value>,
    path: &str,
) -> Result<Vec<(String, Arg)>, Error> {
    if let Some(unknown) = value
        .keys()
        .find(|key| !schema.iter().any(|field| field.name == key.as_str()))
    {
        return Err(report!(Error::invalid_arg(
            entry.kind,
            format!("{}{}", path, unknown)
        ))
        .attach_printable("unexpected field"));
    }

    schema
        .iter()
        .map(|field| {
            let field_path = format!("{}{}", path, field.name);
            let value = value.get(field.name).ok_or_else(|| {
                report!(Error::invalid_arg(entry.kind, field_path.as_str()))
                    .attach_printable("missing field")
            })?;

            decode_field(entry, field.r#type, value, &field_path)
                .map(|arg| (field.name.to_string(), arg))
        })
        .collect()
}

fn decode_field(entry: &Entry, ty: &str, value: &Value, path: &str) -> Result<Arg, Error> {
    let mismatch = || {
        report!(Error::invalid_arg(entry.kind, path))
            .attach_printable(format!("{{ eip712_type = {}, value = {} }}", ty, value))
    };

    if let Some(element_ty) = ty.strip_suffix("[]") {
        let items = value.as_array().ok_or_else(mismatch)?;

        return items
            .iter()
            .enumerate()
            .map(|(i, item)| decode_field(entry, element_ty, item, &format!("{}[{}]", path, i)))
            .collect::<Result<Vec<_>, _>>()
            .map(Arg::List);
    }

    if let Some(schema) = entry.nested_schema(ty) {
        let object = value.as_object().ok_or_else(mismatch)?;

        return decode_struct(entry, schema, object, &format!("{}.", path)).map(Arg::Struct);
    }

    match (ty, value) {
        ("string", Value::String(s)) => Ok(Arg::Str(s.clone())),
        ("bool", Value::Bool(b)) => Ok(Arg::Bool(*b)),
        ("bytes", Value::String(s)) => s
            .strip_prefix("0x")
            .and_then(|s| hex::decode(s).ok())
            .map(Arg::Bytes)
            .ok_or_else(mismatch),
        (ty, value) if unsigned_bits(ty).is_some() => decimal(value)
            .and_then(|n| u128::try_from(n).ok())
            .filter(|n| unsigned_bits(ty).is_some_and(|bits| fits_unsigned(*n, bits)))
            .map(Arg::Uint)
            .ok_or_else(mismatch),
        (ty, value) if signed_bits(ty).is_some() => decimal(value)
            .filter(|n| signed_bits(ty).is_some_and(|bits| fits_signed(*n, bits)))
            .map(Arg::Int)
            .ok_or_else(mismatch),
        _ => Err(mismatch()),
    }
}

fn decimal(value: &Value) -> Option<i128> {
    match value {
        Value::String(s) => match s.strip_prefix('-') {
            Some(abs) => parse_decimal(abs)
                .and_then(|n| i128::try_from(n).ok())
                .and_then(i128::checked_neg),
            None => parse_decimal(s).and_then(|n| i128::try_from(n).ok()),
        },
        Value::Number(n) => n
            .as_u64()
            .map(i128::from)
            .or_else(|| n.as_i64().map(i128::from)),
        _ => None,
    }
}

fn unsigned_bits(ty: &str) -> Option<u32> {
    ty.strip_prefix("uint").and_then(type_bits)
}

fn signed_bits(ty: &str) -> Option<u32> {
    ty.strip_prefix("int").and_then(type_bits)
}

fn type_bits(suffix: &str) -> Option<u32> {
    if suffix.is_empty() {
        return Some(256);
    }

    suffix
        .parse::<u32>()
        .ok()
        .filter(|bits| (8..=256).contains(bits) && bits % 8 == 0)
}

fn fits_unsigned(n: u128, bits: u32) -> bool {
    n.checked_shr(bits).map_or(true, |rest| rest == 0)
}

fn fits_signed(n: i128, bits: u32) -> bool {
    n.checked_shr(bits.saturating_sub(1))
        .map_or(true, |rest| rest == 0 || rest == -1)
}

fn path_or_root(path: &str) -> String {
    match path.trim_end_matches('.') {
        "" => "<root>".to_string(),
        path => path.to_string(),
    }
}
