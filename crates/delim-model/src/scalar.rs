//! Declared field types and text coercion.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoerceError;

/// The restricted set of value types a record field may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    Text,
    Char,
    Bool,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
}

impl ScalarType {
    /// Returns the Rust type name used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarType::Text => "String",
            ScalarType::Char => "char",
            ScalarType::Bool => "bool",
            ScalarType::I8 => "i8",
            ScalarType::I16 => "i16",
            ScalarType::I32 => "i32",
            ScalarType::I64 => "i64",
            ScalarType::I128 => "i128",
            ScalarType::Isize => "isize",
            ScalarType::U8 => "u8",
            ScalarType::U16 => "u16",
            ScalarType::U32 => "u32",
            ScalarType::U64 => "u64",
            ScalarType::U128 => "u128",
            ScalarType::Usize => "usize",
            ScalarType::F32 => "f32",
            ScalarType::F64 => "f64",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Rust type that can be stored in a record field.
///
/// `to_text` returns `None` only for an absent value. `from_text` uses the
/// standard `FromStr` parse; empty text is an error for every type except
/// `String` (empty string) and `Option<T>` (absent).
pub trait FieldValue: Sized {
    const SCALAR: ScalarType;
    const NULLABLE: bool = false;

    fn to_text(&self) -> Option<String>;

    fn from_text(text: &str) -> Result<Self, CoerceError>;
}

impl FieldValue for String {
    const SCALAR: ScalarType = ScalarType::Text;

    fn to_text(&self) -> Option<String> {
        Some(self.clone())
    }

    fn from_text(text: &str) -> Result<Self, CoerceError> {
        Ok(text.to_string())
    }
}

macro_rules! impl_parsed_value {
    ($($ty:ty => $scalar:ident),* $(,)?) => {
        $(
            impl FieldValue for $ty {
                const SCALAR: ScalarType = ScalarType::$scalar;

                fn to_text(&self) -> Option<String> {
                    Some(self.to_string())
                }

                fn from_text(text: &str) -> Result<Self, CoerceError> {
                    text.parse::<$ty>()
                        .map_err(|_| CoerceError::new(text, Self::SCALAR))
                }
            }
        )*
    };
}

impl_parsed_value! {
    char => Char,
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    f32 => F32,
    f64 => F64,
}

impl<T: FieldValue> FieldValue for Option<T> {
    const SCALAR: ScalarType = T::SCALAR;
    const NULLABLE: bool = true;

    fn to_text(&self) -> Option<String> {
        self.as_ref().and_then(FieldValue::to_text)
    }

    fn from_text(text: &str) -> Result<Self, CoerceError> {
        if text.is_empty() {
            return Ok(None);
        }
        T::from_text(text).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_accepts_empty() {
        assert_eq!(String::from_text("").unwrap(), "");
        assert_eq!(String::from_text("a b").unwrap(), "a b");
    }

    #[test]
    fn numeric_rejects_empty() {
        let err = i32::from_text("").unwrap_err();
        assert_eq!(err.target, ScalarType::I32);
        assert_eq!(err.value, "");
        assert!(f64::from_text("").is_err());
        assert!(char::from_text("").is_err());
    }

    #[test]
    fn numeric_parse() {
        assert_eq!(i64::from_text("-42").unwrap(), -42);
        assert_eq!(u8::from_text("255").unwrap(), 255);
        assert!(u8::from_text("256").is_err());
        assert_eq!(f64::from_text("1.5").unwrap(), 1.5);
        assert!(bool::from_text("true").unwrap());
        assert!(bool::from_text("yes").is_err());
    }

    #[test]
    fn option_maps_empty_to_absent() {
        assert_eq!(Option::<i32>::from_text("").unwrap(), None);
        assert_eq!(Option::<i32>::from_text("7").unwrap(), Some(7));
        assert!(Option::<i32>::from_text("x").is_err());
        assert_eq!(Option::<i32>::None.to_text(), None);
        assert!(<Option<u16> as FieldValue>::NULLABLE);
        assert_eq!(<Option<u16> as FieldValue>::SCALAR, ScalarType::U16);
    }

    #[test]
    fn scalar_display() {
        assert_eq!(ScalarType::Text.to_string(), "String");
        assert_eq!(ScalarType::F32.to_string(), "f32");
    }
}
