//! Closed string enumerations.
//!
//! Graph enumerations are exchanged as plain strings (`"notConfigured"`,
//! `"camera"`, ...). Each enumeration is declared once with [`graph_enum!`],
//! which produces a fieldless Rust enum whose discriminant is the ordinal and
//! a wire table indexed by that ordinal. Parsing a string outside the table is
//! an error, never a silent default.
//!
//! Members are only ever appended: the ordinal of an existing member does not
//! change between versions.

use crate::error::{Error, Result};

/// A closed set of wire strings backed by an ordinal.
pub trait GraphEnum: Copy + Eq + 'static {
    /// Wire type name, e.g. `"androidKeyguardFeature"`.
    const TYPE_NAME: &'static str;

    /// All members in declaration (ordinal) order.
    const VALUES: &'static [Self];

    /// Wire strings indexed by ordinal.
    const WIRE_VALUES: &'static [&'static str];

    /// Position of this member in [`Self::VALUES`].
    fn ordinal(self) -> usize;

    /// Member at `ordinal`, if one is declared.
    fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::VALUES.get(ordinal).copied()
    }

    /// Parse a wire string.
    ///
    /// Returns [`Error::UnrecognizedEnumValue`] for any string outside the
    /// declared set, including case variants of declared strings.
    fn parse(value: &str) -> Result<Self> {
        Self::WIRE_VALUES
            .iter()
            .position(|wire| *wire == value)
            .and_then(Self::from_ordinal)
            .ok_or_else(|| Error::UnrecognizedEnumValue {
                type_name: Self::TYPE_NAME,
                value: value.to_string(),
            })
    }

    /// Wire string for this member.
    fn as_str(self) -> &'static str {
        Self::WIRE_VALUES[self.ordinal()]
    }
}

/// Format a list of members as wire strings, preserving order and length.
pub fn serialize_enum_values<E: GraphEnum>(values: &[E]) -> Vec<String> {
    values.iter().map(|v| v.as_str().to_string()).collect()
}

/// Parse a list of wire strings, failing on the first undeclared one.
pub fn parse_enum_values<E: GraphEnum, S: AsRef<str>>(values: &[S]) -> Result<Vec<E>> {
    values.iter().map(|v| E::parse(v.as_ref())).collect()
}

/// Parse a wire string and return the member's ordinal.
pub fn parse_ordinal<E: GraphEnum>(value: &str) -> Result<usize> {
    E::parse(value).map(GraphEnum::ordinal)
}

/// Declare a Graph enumeration.
///
/// ```ignore
/// graph_enum! {
///     /// Possible values for a kiosk app type.
///     pub enum WindowsKioskAppType: "windowsKioskAppType" {
///         Unknown => "unknown",
///         Store => "store",
///     }
/// }
/// ```
macro_rules! graph_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $type_name:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $crate::enum_codec::GraphEnum for $name {
            const TYPE_NAME: &'static str = $type_name;
            const VALUES: &'static [Self] = &[ $( Self::$variant, )+ ];
            const WIRE_VALUES: &'static [&'static str] = &[ $( $wire, )+ ];

            fn ordinal(self) -> usize {
                self as usize
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::Error;

            fn from_str(s: &str) -> $crate::error::Result<Self> {
                <Self as $crate::enum_codec::GraphEnum>::parse(s)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::enum_codec::GraphEnum::as_str(*self))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::enum_codec::GraphEnum::as_str(*self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::std::result::Result<Self, D::Error> {
                let value = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::enum_codec::GraphEnum>::parse(&value)
                    .map_err(<D::Error as ::serde::de::Error>::custom)
            }
        }
    };
}

pub(crate) use graph_enum;

#[cfg(test)]
mod tests {
    use super::*;

    graph_enum! {
        enum Fruit: "fruit" {
            Apple => "apple",
            BloodOrange => "bloodOrange",
            Pear => "pear",
        }
    }

    #[test]
    fn parse_declared_values() {
        assert_eq!(Fruit::parse("apple").unwrap(), Fruit::Apple);
        assert_eq!(Fruit::parse("bloodOrange").unwrap(), Fruit::BloodOrange);
        assert_eq!("pear".parse::<Fruit>().unwrap(), Fruit::Pear);
    }

    #[test]
    fn format_round_trips() {
        for wire in Fruit::WIRE_VALUES {
            assert_eq!(Fruit::parse(wire).unwrap().as_str(), *wire);
        }
        assert_eq!(Fruit::BloodOrange.to_string(), "bloodOrange");
    }

    #[test]
    fn ordinals_follow_declaration_order() {
        assert_eq!(Fruit::Apple.ordinal(), 0);
        assert_eq!(Fruit::Pear.ordinal(), 2);
        assert_eq!(Fruit::from_ordinal(1), Some(Fruit::BloodOrange));
        assert_eq!(Fruit::from_ordinal(3), None);
        assert_eq!(parse_ordinal::<Fruit>("pear").unwrap(), 2);
    }

    #[test]
    fn unknown_value_is_an_error() {
        let err = Fruit::parse("banana").unwrap_err();
        match err {
            Error::UnrecognizedEnumValue { type_name, value } => {
                assert_eq!(type_name, "fruit");
                assert_eq!(value, "banana");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!(Fruit::parse("Apple").is_err());
        assert!(Fruit::parse("").is_err());
    }

    #[test]
    fn batch_helpers_preserve_order() {
        let values = [Fruit::Pear, Fruit::Apple, Fruit::Pear];
        assert_eq!(serialize_enum_values(&values), vec!["pear", "apple", "pear"]);
        assert!(serialize_enum_values::<Fruit>(&[]).is_empty());

        let parsed: Vec<Fruit> = parse_enum_values(&["apple", "bloodOrange"]).unwrap();
        assert_eq!(parsed, vec![Fruit::Apple, Fruit::BloodOrange]);
        assert!(parse_enum_values::<Fruit, _>(&["apple", "kiwi"]).is_err());
    }

    #[test]
    fn serde_uses_wire_strings() {
        let json = serde_json::to_string(&[Fruit::Apple, Fruit::BloodOrange]).unwrap();
        assert_eq!(json, r#"["apple","bloodOrange"]"#);

        let back: Vec<Fruit> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![Fruit::Apple, Fruit::BloodOrange]);
        assert!(serde_json::from_str::<Fruit>(r#""kiwi""#).is_err());
    }
}
