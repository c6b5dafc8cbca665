/// A closed set of wire strings that tolerates values it does not know.
pub trait StringEnum {
    /// The wire string.
    fn as_str(&self) -> &str;

    /// All wire strings this version knows about.
    fn values() -> &'static [&'static str];

    /// Whether the value is one of [`values`](StringEnum::values).
    fn is_known(&self) -> bool;
}

/// Defines a string enum with an `Unknown(String)` fallback variant.
///
/// ```
/// madsim_aws_shape::string_enum! {
///     /// Key role.
///     pub enum KeyType {
///         Hash = "HASH",
///         Range = "RANGE",
///     }
/// }
///
/// assert_eq!(KeyType::from("HASH"), KeyType::Hash);
/// assert_eq!(KeyType::from("SORT"), KeyType::Unknown("SORT".into()));
/// assert_eq!(KeyType::Range.to_string(), "RANGE");
/// ```
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value not known to this version.
            Unknown(::std::string::String),
        }

        impl $name {
            /// The wire string.
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $value, )+
                    $name::Unknown(s) => s.as_str(),
                }
            }

            /// All known wire strings.
            pub const fn values() -> &'static [&'static str] {
                &[$( $value ),+]
            }
        }

        impl $crate::StringEnum for $name {
            fn as_str(&self) -> &str {
                $name::as_str(self)
            }

            fn values() -> &'static [&'static str] {
                $name::values()
            }

            fn is_known(&self) -> bool {
                !matches!(self, $name::Unknown(_))
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $( $value => $name::$variant, )+
                    other => $name::Unknown(other.to_owned()),
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Ok($name::from(s))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let s = <::std::string::String as $crate::__private::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                Ok($name::from(s.as_str()))
            }
        }
    };
}
