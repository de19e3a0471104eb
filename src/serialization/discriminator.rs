//! `@odata.type` dispatch for polymorphic models.
//!
//! A polymorphic Graph type is modelled as a Rust enum with one variant per
//! concrete type plus a `Base` variant. Its [`Discriminated::DISCRIMINATORS`]
//! table maps each canonical `#microsoft.graph.*` string to a constructor for
//! the matching variant. The tables are `const` data, so concurrent decodes
//! share them without synchronization.

use super::{JsonParseNode, ODATA_TYPE_KEY, Parsable};
use crate::error::Result;

/// A polymorphic model whose concrete type is chosen by `@odata.type`.
pub trait Discriminated: Parsable + Sized + 'static {
    /// Wire name of the hierarchy's base type, e.g. `"windowsKioskAppBase"`.
    const TYPE_NAME: &'static str;

    /// Discriminator → constructor, in declaration order.
    const DISCRIMINATORS: &'static [(&'static str, fn() -> Self)];

    /// Empty instance of the base type.
    fn fallback() -> Self;
}

/// Peek at the `@odata.type` string of the object under `node`.
///
/// Does not consume anything: the same key is later applied as a regular
/// field of the chosen type.
pub fn discriminator_value<'a>(node: &JsonParseNode<'a>) -> Result<Option<&'a str>> {
    match node.get_child_node(ODATA_TYPE_KEY) {
        Some(child) if !child.is_null() => match child.value().as_str() {
            Some(s) => Ok(Some(s)),
            None => Err(super::primitive::mismatch("string", child.value())),
        },
        _ => Ok(None),
    }
}

/// Build the empty instance `node`'s discriminator selects.
///
/// The first table entry whose string matches wins. A missing or unknown
/// discriminator yields [`Discriminated::fallback`].
pub fn resolve<T: Discriminated>(node: &JsonParseNode<'_>) -> Result<T> {
    let Some(value) = discriminator_value(node)? else {
        tracing::debug!(base = T::TYPE_NAME, "no discriminator, using base type");
        return Ok(T::fallback());
    };

    match T::DISCRIMINATORS.iter().find(|(name, _)| *name == value) {
        Some((_, create)) => Ok(create()),
        None => {
            tracing::debug!(
                base = T::TYPE_NAME,
                discriminator = value,
                "unknown discriminator, using base type"
            );
            Ok(T::fallback())
        }
    }
}

/// The discriminator strings of `T`, in declaration order.
pub fn discriminators<T: Discriminated>() -> Vec<&'static str> {
    T::DISCRIMINATORS.iter().map(|(name, _)| *name).collect()
}

/// Implement [`AdditionalDataHolder`](super::AdditionalDataHolder) and
/// [`Parsable`] for a polymorphic enum by forwarding to the variant.
macro_rules! delegate_kind {
    ($kind:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::serialization::AdditionalDataHolder for $kind {
            fn additional_data(&self) -> &$crate::serialization::AdditionalData {
                match self {
                    $( Self::$variant(inner) => {
                        $crate::serialization::AdditionalDataHolder::additional_data(inner)
                    } )+
                }
            }

            fn additional_data_mut(&mut self) -> &mut $crate::serialization::AdditionalData {
                match self {
                    $( Self::$variant(inner) => {
                        $crate::serialization::AdditionalDataHolder::additional_data_mut(inner)
                    } )+
                }
            }
        }

        impl $crate::serialization::Parsable for $kind {
            fn create_from_discriminator_value(
                node: &$crate::serialization::JsonParseNode<'_>,
            ) -> $crate::error::Result<Self> {
                $crate::serialization::discriminator::resolve(node)
            }

            fn deserialize_field(
                &mut self,
                key: &str,
                node: &$crate::serialization::JsonParseNode<'_>,
            ) -> $crate::error::Result<bool> {
                match self {
                    $( Self::$variant(inner) => {
                        $crate::serialization::Parsable::deserialize_field(inner, key, node)
                    } )+
                }
            }

            fn serialize_fields(
                &self,
                writer: &mut $crate::serialization::JsonSerializationWriter,
            ) -> $crate::error::Result<()> {
                match self {
                    $( Self::$variant(inner) => {
                        $crate::serialization::Parsable::serialize_fields(inner, writer)
                    } )+
                }
            }
        }
    };
}

pub(crate) use delegate_kind;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::{KeyValuePair, WindowsKioskAppKind};
    use serde_json::json;

    /// Two entries share a discriminator; the first must win.
    #[derive(Debug, PartialEq)]
    enum Shape {
        Base(KeyValuePair),
        First(KeyValuePair),
        Second(KeyValuePair),
    }

    delegate_kind!(Shape { Base, First, Second });

    impl Discriminated for Shape {
        const TYPE_NAME: &'static str = "shape";
        const DISCRIMINATORS: &'static [(&'static str, fn() -> Self)] = &[
            ("#test.circle", || Self::First(KeyValuePair::new())),
            ("#test.circle", || Self::Second(KeyValuePair::new())),
        ];

        fn fallback() -> Self {
            Self::Base(KeyValuePair::new())
        }
    }

    #[test]
    fn first_declared_discriminator_wins() {
        let value = json!({"@odata.type": "#test.circle"});
        let shape: Shape = resolve(&JsonParseNode::new(&value)).unwrap();
        assert!(matches!(shape, Shape::First(_)));
    }

    #[test]
    fn missing_or_unknown_discriminator_falls_back() {
        for value in [
            json!({}),
            json!({"@odata.type": null}),
            json!({"@odata.type": "#test.square"}),
        ] {
            let shape: Shape = resolve(&JsonParseNode::new(&value)).unwrap();
            assert!(matches!(shape, Shape::Base(_)), "for {value}");
        }
    }

    #[test]
    fn non_string_discriminator_is_a_mismatch() {
        let value = json!({"@odata.type": 7});
        assert!(matches!(
            resolve::<Shape>(&JsonParseNode::new(&value)),
            Err(Error::TypeMismatch { .. })
        ));
    }

    #[test]
    fn peek_does_not_consume() {
        let value = json!({"@odata.type": "#microsoft.graph.windowsKioskUWPApp", "appId": "x"});
        let node = JsonParseNode::new(&value);
        assert_eq!(
            discriminator_value(&node).unwrap(),
            Some("#microsoft.graph.windowsKioskUWPApp")
        );
        assert!(node.get_child_node(ODATA_TYPE_KEY).is_some());
    }

    #[test]
    fn table_order_is_declaration_order() {
        assert_eq!(discriminators::<Shape>(), vec!["#test.circle", "#test.circle"]);
        assert_eq!(
            discriminators::<WindowsKioskAppKind>(),
            vec![
                "#microsoft.graph.windowsKioskDesktopApp",
                "#microsoft.graph.windowsKioskUWPApp",
                "#microsoft.graph.windowsKioskWin32App",
            ]
        );
    }
}
