//! Catalog identifiers.
//!
//! Ids are numeric in the catalog and in stored carts. `define_id!` wraps a
//! primitive integer in a distinct type so a product id cannot be passed where
//! another entity's id is expected.

use thiserror::Error;

/// An id string that did not parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind}: {input:?}")]
pub struct InvalidId {
    kind: &'static str,
    input: String,
}

impl InvalidId {
    #[doc(hidden)]
    #[must_use]
    pub fn new(kind: &'static str, input: &str) -> Self {
        Self {
            kind,
            input: input.to_string(),
        }
    }

    /// The id type that was being parsed (e.g. `"ProductId"`).
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }
}

/// Define an id newtype over an integer representation.
///
/// The generated type is `Copy` and totally ordered, serializes as the bare
/// integer, formats like the integer (honouring width and alignment), and
/// parses from trimmed text with an [`InvalidId`] error.
///
/// ```rust
/// # use mini_boutique_core::define_id;
/// define_id!(SkuId: u64);
///
/// let sku: SkuId = "17".parse().unwrap();
/// assert_eq!(sku.get(), 17);
/// assert_eq!(format!("[{sku:>4}]"), "[  17]");
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident : $repr:ty) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name($repr);

        impl $name {
            #[must_use]
            pub const fn new(raw: $repr) -> Self {
                Self(raw)
            }

            /// The raw integer.
            #[must_use]
            pub const fn get(self) -> $repr {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::types::InvalidId;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                s.trim()
                    .parse::<$repr>()
                    .map(Self)
                    .map_err(|_| $crate::types::InvalidId::new(stringify!($name), s))
            }
        }
    };
}

define_id!(ProductId: i32);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_honours_padding() {
        let id = ProductId::new(42);
        assert_eq!(id.get(), 42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(format!("{id:>4}|{id:<4}|"), "  42|42  |");
    }

    #[test]
    fn test_parse_trims_and_names_the_kind() {
        assert_eq!(" 7 ".parse::<ProductId>().unwrap(), ProductId::new(7));

        let err = "seven".parse::<ProductId>().unwrap_err();
        assert_eq!(err.kind(), "ProductId");
        assert_eq!(err.to_string(), r#"invalid ProductId: "seven""#);
    }

    #[test]
    fn test_serializes_as_bare_integer() {
        assert_eq!(serde_json::to_string(&ProductId::new(3)).unwrap(), "3");
        assert_eq!(
            serde_json::from_str::<ProductId>("3").unwrap(),
            ProductId::new(3)
        );
    }

    #[test]
    fn test_ids_order_numerically() {
        let mut ids = vec![ProductId::new(10), ProductId::new(2), ProductId::new(7)];
        ids.sort();
        assert_eq!(ids, vec![ProductId::new(2), ProductId::new(7), ProductId::new(10)]);
    }
}
