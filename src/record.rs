//! Read-only value records with a fixed, named field set.
//!
//! [`anonymous_record!`] declares one struct per field shape. Fields are private,
//! there is one accessor per field and no mutators, so a record cannot change
//! after `new`. Reading a field that the shape does not declare fails to compile.

use serde::Serialize;

use crate::error::Result;

/// Declares an immutable record type.
///
/// ```ignore
/// anonymous_record! {
///     pub struct AmountMessage {
///         #[serde(rename = "Amount")] amount: i32,
///         #[serde(rename = "Message")] message: String,
///     }
/// }
/// ```
///
/// `FIELDS` lists the field names as they appear when serialized.
macro_rules! anonymous_record {
    (@key $field:ident) => {
        stringify!($field)
    };
    (@key $field:ident $key:literal) => {
        $key
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $(#[serde(rename = $key:literal)])? $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
        $vis struct $name {
            $( $(#[serde(rename = $key)])? $field: $ty, )*
        }

        impl $name {
            pub const FIELDS: &'static [&'static str] =
                &[$( anonymous_record!(@key $field $($key)?) ),*];

            pub fn new($( $field: impl Into<$ty> ),*) -> Self {
                $name {
                    $( $field: $field.into(), )*
                }
            }

            $(
                pub fn $field(&self) -> &$ty {
                    &self.$field
                }
            )*
        }
    };
}

pub(crate) use anonymous_record;

/// Renders any record as a compact JSON object.
pub fn to_json<T: Serialize>(record: &T) -> Result<String> {
    Ok(serde_json::to_string(record)?)
}

anonymous_record! {
    /// `{ Amount, Message }`
    pub struct AmountMessage {
        #[serde(rename = "Amount")] amount: i32,
        #[serde(rename = "Message")] message: String,
    }
}

anonymous_record! {
    /// `{ name, diam }`
    pub struct Fruit {
        name: String,
        diam: i32,
    }
}

pub fn greeting() -> AmountMessage {
    AmountMessage::new(101, "Hello")
}

pub fn fruit_basket() -> [Fruit; 2] {
    [Fruit::new("apple", 4), Fruit::new("grape", 1)]
}
