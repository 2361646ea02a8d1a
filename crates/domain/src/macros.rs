//! Macro for implementing Display and FromStr for closed domain enums
//!
//! Stage and activity-type enums share the same wire conventions: a
//! snake_case key on output, and forgiving parsing on input so that values
//! echoed back by the generation service ("Quote presented", "QUOTE-PRESENTED")
//! still resolve to the right variant.
//!
//! # Example
//!
//! ```rust
//! use asnalo_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Priority {
//!     Low,
//!     High,
//! }
//!
//! impl_domain_status_conversions!(Priority {
//!     Low => "low",
//!     High => "high",
//! });
//!
//! assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
//! ```

/// Implements Display and FromStr traits for closed domain enums
///
/// This macro generates:
/// - Display trait: writes the variant's canonical key
/// - FromStr trait: trims the input, lowercases it, and treats spaces and
///   hyphens as underscores before matching a canonical key
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $key` - Mapping of enum variants to their canonical keys
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $key:literal),+ $(,)? }) => {
        impl ::std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($key),)+
                }
            }
        }

        impl ::std::str::FromStr for $enum_name {
            type Err = ::std::string::String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                let normalized: ::std::string::String = s
                    .trim()
                    .chars()
                    .map(|c| if c == ' ' || c == '-' { '_' } else { c.to_ascii_lowercase() })
                    .collect();
                match normalized.as_str() {
                    $($key => ::std::result::Result::Ok(Self::$variant),)+
                    _ => ::std::result::Result::Err(::std::format!(
                        "Invalid {}: {}",
                        stringify!($enum_name),
                        s
                    )),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestStage {
        Open,
        InReview,
        Closed,
    }

    impl_domain_status_conversions!(TestStage {
        Open => "open",
        InReview => "in_review",
        Closed => "closed",
    });

    #[test]
    fn test_display_conversion() {
        assert_eq!(TestStage::Open.to_string(), "open");
        assert_eq!(TestStage::InReview.to_string(), "in_review");
        assert_eq!(TestStage::Closed.to_string(), "closed");
    }

    #[test]
    fn test_fromstr_case_insensitive() {
        assert_eq!(TestStage::from_str("OPEN").unwrap(), TestStage::Open);
        assert_eq!(TestStage::from_str("Closed").unwrap(), TestStage::Closed);
    }

    #[test]
    fn test_fromstr_accepts_spaces_and_hyphens() {
        assert_eq!(TestStage::from_str("In review").unwrap(), TestStage::InReview);
        assert_eq!(TestStage::from_str("in-review").unwrap(), TestStage::InReview);
        assert_eq!(TestStage::from_str("  in_review ").unwrap(), TestStage::InReview);
    }

    mod with_result_alias {
        use std::str::FromStr;

        // A one-parameter alias in scope must not leak into the expansion
        #[allow(unused_imports)]
        use crate::Result;

        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        enum Channel {
            Phone,
            Email,
        }

        impl_domain_status_conversions!(Channel {
            Phone => "phone",
            Email => "email",
        });

        #[test]
        fn test_expands_next_to_result_alias() {
            assert_eq!(Channel::from_str("PHONE").unwrap(), Channel::Phone);
            assert_eq!(Channel::Email.to_string(), "email");
            let ok: Result<()> = Ok(());
            assert!(ok.is_ok());
        }
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = TestStage::from_str("archived");
        assert!(result.unwrap_err().contains("Invalid TestStage: archived"));
        assert!(TestStage::from_str("").is_err());
    }
}
