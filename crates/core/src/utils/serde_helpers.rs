//! Serde utility helpers for case-insensitive deserialization

/// Macro to implement deserialization for enums through their `FromStr`.
///
/// The `FromStr` implementation is expected to ignore case, so values read
/// from config files are accepted with the same spellings as on the
/// command line.
///
/// Usage:
/// ```ignore
/// impl_case_insensitive_deserialize!(MyEnum);
/// ```
#[macro_export]
macro_rules! impl_case_insensitive_deserialize {
    ($enum_type:ty) => {
        impl<'de> serde::Deserialize<'de> for $enum_type {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                s.parse::<$enum_type>()
                    .map_err(serde::de::Error::custom)
            }
        }
    };
}
