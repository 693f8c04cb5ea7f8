//! Logical message arguments and their typed extraction.
//!
//! [Arg] is the encoding-independent value of a single message field. Builders pull typed
//! values out of [Args] by name, so a wrong shape is reported against the exact field that
//! carried it.

use std::collections::BTreeMap;

use error_stack::{report, Result};
use serde_json::Value;

use crate::error::Error;
use crate::registry::MessageKind;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Arg {
    Str(String),
    Uint(u128),
    Int(i128),
    Bool(bool),
    Bytes(Vec<u8>),
    List(Vec<Arg>),
    Struct(Vec<(String, Arg)>),
}

impl Arg {
    fn from_json(value: Value) -> std::result::Result<Self, &'static str> {
        match value {
            Value::String(s) => Ok(Arg::Str(s)),
            Value::Bool(b) => Ok(Arg::Bool(b)),
            Value::Number(n) => {
                if let Some(n) = n.as_u64() {
                    Ok(Arg::Uint(n.into()))
                } else if let Some(n) = n.as_i64() {
                    Ok(Arg::Int(n.into()))
                } else {
                    Err("number is not an integer representable without precision loss")
                }
            }
            Value::Array(values) => values
                .into_iter()
                .map(Arg::from_json)
                .collect::<std::result::Result<Vec<_>, _>>()
                .map(Arg::List),
            Value::Object(map) => map
                .into_iter()
                .map(|(name, value)| Arg::from_json(value).map(|arg| (name, arg)))
                .collect::<std::result::Result<Vec<_>, _>>()
                .map(Arg::Struct),
            Value::Null => Err("null is not a valid argument"),
        }
    }

    fn as_u128(&self) -> Option<u128> {
        match self {
            Arg::Uint(n) => Some(*n),
            Arg::Str(s) => parse_decimal(s),
            _ => None,
        }
    }

    fn as_i128(&self) -> Option<i128> {
        match self {
            Arg::Uint(n) => i128::try_from(*n).ok(),
            Arg::Int(n) => Some(*n),
            Arg::Str(s) => match s.strip_prefix('-') {
                Some(abs) => parse_decimal(abs)
                    .and_then(|abs| i128::try_from(abs).ok())
                    .and_then(i128::checked_neg),
                None => parse_decimal(s).and_then(|n| i128::try_from(n).ok()),
            },
            _ => None,
        }
    }
}

/// Parses a plain decimal string. Signs, whitespace, exponents and fractions are rejected.
pub(crate) fn parse_decimal(s: &str) -> Option<u128> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    s.parse().ok()
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Str(s)
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Str(s.to_string())
    }
}

impl From<u64> for Arg {
    fn from(n: u64) -> Self {
        Arg::Uint(n.into())
    }
}

impl From<u128> for Arg {
    fn from(n: u128) -> Self {
        Arg::Uint(n)
    }
}

impl From<i32> for Arg {
    fn from(n: i32) -> Self {
        Arg::Int(n.into())
    }
}

impl From<bool> for Arg {
    fn from(b: bool) -> Self {
        Arg::Bool(b)
    }
}

impl<T> From<Vec<T>> for Arg
where
    T: Into<Arg>,
{
    fn from(values: Vec<T>) -> Self {
        Arg::List(values.into_iter().map(Into::into).collect())
    }
}

/// Named arguments of a single message, consumed field by field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Args {
    kind: MessageKind,
    prefix: String,
    values: BTreeMap<String, Arg>,
}

impl Args {
    pub fn new(kind: MessageKind, values: impl IntoIterator<Item = (String, Arg)>) -> Self {
        Args {
            kind,
            prefix: String::new(),
            values: values.into_iter().collect(),
        }
    }

    /// Reads arguments from a JSON object. Integers must fit a `u64`/`i64`; larger values have
    /// to be passed as decimal strings.
    pub fn from_json(kind: MessageKind, value: Value) -> Result<Self, Error> {
        let Value::Object(map) = value else {
            return Err(report!(Error::invalid_arg(kind, "<root>"))
                .attach_printable("arguments must be a JSON object"));
        };

        let values = map
            .into_iter()
            .map(|(name, value)| match Arg::from_json(value) {
                Ok(arg) => Ok((name, arg)),
                Err(reason) => Err(report!(Error::invalid_arg(kind, name)).attach_printable(reason)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Args::new(kind, values))
    }

    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    pub fn string(&mut self, name: &str) -> Result<String, Error> {
        match self.take(name)? {
            Arg::Str(s) => Ok(s),
            other => Err(self.invalid(name, "expected a string", &other)),
        }
    }

    pub fn uint64(&mut self, name: &str) -> Result<u64, Error> {
        let arg = self.take(name)?;
        arg.as_u128()
            .and_then(|n| u64::try_from(n).ok())
            .ok_or_else(|| self.invalid(name, "expected an unsigned 64-bit integer", &arg))
    }

    pub fn uint128(&mut self, name: &str) -> Result<u128, Error> {
        let arg = self.take(name)?;
        arg.as_u128()
            .ok_or_else(|| self.invalid(name, "expected an unsigned integer", &arg))
    }

    pub fn int32(&mut self, name: &str) -> Result<i32, Error> {
        let arg = self.take(name)?;
        arg.as_i128()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| self.invalid(name, "expected a signed 32-bit integer", &arg))
    }

    pub fn boolean(&mut self, name: &str) -> Result<bool, Error> {
        match self.take(name)? {
            Arg::Bool(b) => Ok(b),
            other => Err(self.invalid(name, "expected a boolean", &other)),
        }
    }

    /// Accepts raw bytes, a `0x`-prefixed hex string or a list of byte values.
    pub fn bytes(&mut self, name: &str) -> Result<Vec<u8>, Error> {
        let arg = self.take(name)?;
        let bytes = match &arg {
            Arg::Bytes(bytes) => Some(bytes.clone()),
            Arg::Str(s) => s.strip_prefix("0x").and_then(|s| hex::decode(s).ok()),
            Arg::List(items) => items
                .iter()
                .map(|item| item.as_u128().and_then(|n| u8::try_from(n).ok()))
                .collect(),
            _ => None,
        };

        bytes.ok_or_else(|| self.invalid(name, "expected 0x-prefixed hex or a byte list", &arg))
    }

    pub fn uint64_list(&mut self, name: &str) -> Result<Vec<u64>, Error> {
        let arg = self.take(name)?;
        let Arg::List(items) = &arg else {
            return Err(self.invalid(name, "expected a list", &arg));
        };

        items
            .iter()
            .map(|item| item.as_u128().and_then(|n| u64::try_from(n).ok()))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| self.invalid(name, "expected a list of unsigned 64-bit integers", &arg))
    }

    pub fn string_list(&mut self, name: &str) -> Result<Vec<String>, Error> {
        let arg = self.take(name)?;
        let Arg::List(items) = &arg else {
            return Err(self.invalid(name, "expected a list", &arg));
        };

        items
            .iter()
            .map(|item| match item {
                Arg::Str(s) => Some(s.clone()),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| self.invalid(name, "expected a list of strings", &arg))
    }

    /// Returns one nested [Args] per element of a list of structs. Errors raised by the nested
    /// arguments name the full path, e.g. `amount[0].denom`.
    pub fn structs(&mut self, name: &str) -> Result<Vec<Args>, Error> {
        let items = match self.take(name)? {
            Arg::List(items) => items,
            other => return Err(self.invalid(name, "expected a list", &other)),
        };

        items
            .into_iter()
            .enumerate()
            .map(|(i, item)| match item {
                Arg::Struct(fields) => Ok(Args {
                    kind: self.kind,
                    prefix: format!("{}{}[{}].", self.prefix, name, i),
                    values: fields.into_iter().collect(),
                }),
                other => Err(self.invalid(&format!("{}[{}]", name, i), "expected a struct", &other)),
            })
            .collect()
    }

    /// Fails if any argument was not consumed by the builder.
    pub fn finish(self) -> Result<(), Error> {
        match self.values.into_iter().next() {
            None => Ok(()),
            Some((name, _)) => Err(report!(Error::invalid_arg(
                self.kind,
                format!("{}{}", self.prefix, name)
            ))
            .attach_printable("unexpected field")),
        }
    }

    fn take(&mut self, name: &str) -> Result<Arg, Error> {
        self.values.remove(name).ok_or_else(|| {
            report!(Error::invalid_arg(self.kind, self.path(name))).attach_printable("missing field")
        })
    }

    fn invalid(&self, name: &str, reason: &'static str, arg: &Arg) -> error_stack::Report<Error> {
        report!(Error::invalid_arg(self.kind, self.path(name)))
            .attach_printable(reason)
            .attach_printable(format!("{{ value = {:?} }}", arg))
    }

    fn path(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{parse_decimal, Arg, Args};
    use crate::error::Error;
    use crate::registry::MessageKind;

    fn args(value: serde_json::Value) -> Args {
        Args::from_json(MessageKind::DeleteCollection, value).unwrap()
    }

    fn invalid_field(err: error_stack::Report<Error>) -> String {
        match err.current_context() {
            Error::InvalidMessageArgs { field, .. } => field.clone(),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn uint64_should_accept_numbers_and_decimal_strings() {
        let mut args = args(json!({"a": 42, "b": "18446744073709551615"}));

        assert_eq!(args.uint64("a").unwrap(), 42);
        assert_eq!(args.uint64("b").unwrap(), u64::MAX);
        assert!(args.finish().is_ok());
    }

    #[test]
    fn uint64_should_reject_lossy_or_malformed_values() {
        let mut args = args(json!({
            "negative": -1,
            "float": "1.5",
            "hex": "0x10",
            "too_big": "18446744073709551616",
            "text": "abc",
        }));

        for name in ["negative", "float", "hex", "too_big", "text"] {
            assert_eq!(invalid_field(args.uint64(name).unwrap_err()), name);
        }
    }

    #[test]
    fn from_json_should_reject_non_integral_numbers() {
        let err = Args::from_json(MessageKind::MsgSend, json!({"amount": 1.5})).unwrap_err();

        assert_eq!(invalid_field(err), "amount");
    }

    #[test]
    fn from_json_should_reject_non_objects() {
        assert!(Args::from_json(MessageKind::MsgSend, json!([1, 2])).is_err());
    }

    #[test]
    fn missing_fields_should_be_named() {
        let mut args = args(json!({}));

        assert_eq!(invalid_field(args.string("creator").unwrap_err()), "creator");
    }

    #[test]
    fn string_should_not_accept_numbers() {
        let mut args = args(json!({"creator": 5}));

        assert_eq!(invalid_field(args.string("creator").unwrap_err()), "creator");
    }

    #[test]
    fn finish_should_report_leftover_fields() {
        let mut args = args(json!({"creator": "a", "extra": true}));
        args.string("creator").unwrap();

        assert_eq!(invalid_field(args.finish().unwrap_err()), "extra");
    }

    #[test]
    fn int32_should_accept_negative_strings() {
        let mut args = args(json!({"a": "-7", "b": -7, "c": 2147483648u64}));

        assert_eq!(args.int32("a").unwrap(), -7);
        assert_eq!(args.int32("b").unwrap(), -7);
        assert!(args.int32("c").is_err());
    }

    #[test]
    fn bytes_should_accept_hex_and_byte_lists() {
        let mut args = args(json!({"a": "0x0aff", "b": [10, 255], "c": [256], "d": "0aff"}));

        assert_eq!(args.bytes("a").unwrap(), vec![10, 255]);
        assert_eq!(args.bytes("b").unwrap(), vec![10, 255]);
        assert!(args.bytes("c").is_err());
        assert!(args.bytes("d").is_err());
    }

    #[test]
    fn lists_should_validate_every_element() {
        let mut args = args(json!({"ids": [1, "2", 3], "bad": [1, "x"], "names": ["a", 1]}));

        assert_eq!(args.uint64_list("ids").unwrap(), vec![1, 2, 3]);
        assert_eq!(invalid_field(args.uint64_list("bad").unwrap_err()), "bad");
        assert_eq!(invalid_field(args.string_list("names").unwrap_err()), "names");
    }

    #[test]
    fn nested_structs_should_report_full_paths() {
        let mut args = args(json!({"amount": [{"denom": "ubadge", "amount": "1"}, {"amount": "2"}]}));
        let mut coins = args.structs("amount").unwrap();

        assert_eq!(coins[0].string("denom").unwrap(), "ubadge");
        assert_eq!(
            invalid_field(coins[1].string("denom").unwrap_err()),
            "amount[1].denom"
        );
    }

    #[test]
    fn parse_decimal_should_only_accept_plain_digits() {
        assert_eq!(parse_decimal("0"), Some(0));
        assert_eq!(parse_decimal("9223372036854775807"), Some(9223372036854775807));
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("+1"), None);
        assert_eq!(parse_decimal(" 1"), None);
        assert_eq!(parse_decimal("1e3"), None);
    }

    #[test]
    fn vec_conversion_should_build_lists() {
        assert_eq!(
            Arg::from(vec![1u64, 2]),
            Arg::List(vec![Arg::Uint(1), Arg::Uint(2)])
        );
    }
}
