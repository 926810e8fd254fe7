/// String conversions for prop enums that parse leniently
///
/// The enum must provide `as_str(&self) -> &'static str` and
/// `parse_lossy(&str) -> Self`. Deserialization goes through `String`, so
/// an unknown option degrades to the default instead of failing the whole
/// props document.
macro_rules! lossy_enum_conversions {
    ($ty:ty) => {
        impl From<&str> for $ty {
            fn from(name: &str) -> Self {
                <$ty>::parse_lossy(name)
            }
        }

        impl From<String> for $ty {
            fn from(name: String) -> Self {
                <$ty>::parse_lossy(&name)
            }
        }

        impl From<$ty> for &'static str {
            fn from(value: $ty) -> Self {
                value.as_str()
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use lossy_enum_conversions;
