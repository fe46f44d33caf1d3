//! Loggable values. Callers pass a mix of text, numbers, flags and whole data
//! structures; primitives reach the sink untouched while anything structured is
//! rendered as indented JSON before it becomes the primary message.

use serde::Serialize;
use std::fmt;

/// One argument of a log call.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Number(serde_json::Number),
    Bool(bool),
    /// Objects, arrays and null. Rendered with four-space indentation.
    Structured(serde_json::Value),
}

impl Value {
    /// Serializes any `Serialize` type into a structured value.
    ///
    /// # Errors
    /// Propagates the serializer's error (e.g. maps with non-string keys).
    pub fn structured<T: Serialize + ?Sized>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(value).map(Self::from)
    }

    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        !matches!(self, Self::Structured(_))
    }

    /// Text form used for the primary message of a plain (unstyled) line.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            Self::Number(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Structured(v) => pretty(v),
        }
    }
}

fn pretty(value: &serde_json::Value) -> String {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    if value.serialize(&mut ser).is_err() {
        return value.to_string();
    }
    String::from_utf8(buf).unwrap_or_else(|_| value.to_string())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => Self::Str(s),
            serde_json::Value::Number(n) => Self::Number(n),
            serde_json::Value::Bool(b) => Self::Bool(b),
            other => Self::Structured(other),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Self::Str(s.clone())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Self::Number(serde_json::Number::from(n))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl From<f64> for Value {
    /// NaN and infinities have no JSON number form and fall back to their text.
    fn from(n: f64) -> Self {
        serde_json::Number::from_f64(n).map_or_else(|| Self::Str(n.to_string()), Self::Number)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Self::from(f64::from(n))
    }
}

/// Anything a level method accepts as its argument list.
pub trait IntoArgs {
    fn into_args(self) -> Vec<Value>;
}

impl IntoArgs for Vec<Value> {
    fn into_args(self) -> Vec<Value> {
        self
    }
}

impl<const N: usize> IntoArgs for [Value; N] {
    fn into_args(self) -> Vec<Value> {
        self.into()
    }
}

impl IntoArgs for () {
    fn into_args(self) -> Vec<Value> {
        Vec::new()
    }
}

macro_rules! impl_into_args_single {
    ($($t:ty),*) => {
        $(
            impl IntoArgs for $t {
                fn into_args(self) -> Vec<Value> {
                    vec![Value::from(self)]
                }
            }
        )*
    };
}

impl_into_args_single!(
    Value,
    &str,
    String,
    &String,
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    u64,
    usize,
    isize,
    f32,
    f64,
    serde_json::Value
);

macro_rules! impl_into_args_tuple {
    ($($name:ident),+) => {
        impl<$($name: Into<Value>),+> IntoArgs for ($($name,)+) {
            #[allow(non_snake_case)]
            fn into_args(self) -> Vec<Value> {
                let ($($name,)+) = self;
                vec![$($name.into()),+]
            }
        }
    };
}

impl_into_args_tuple!(A);
impl_into_args_tuple!(A, B);
impl_into_args_tuple!(A, B, C);
impl_into_args_tuple!(A, B, C, D);

/// Builds a `Vec<Value>` from heterogeneous arguments.
///
/// ```
/// let args = tierlog::args!["loaded", 3, true];
/// assert_eq!(args.len(), 3);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($arg)),+]
    };
}
