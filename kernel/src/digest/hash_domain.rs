//! Typed domain separators for canonical hashing.
//!
//! Every hash computation selects a domain via [`HashDomain`]. Adding a
//! domain is a single change here: the enum, `as_bytes()`, `ALL`, and
//! `Display` are all generated from one macro invocation.

/// Declares `HashDomain` enum, `as_bytes()`, `ALL`, and `Display` from one list.
macro_rules! define_hash_domains {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $bytes:expr
        ),+ $(,)?
    ) => {
        /// Typed domain separator for [`super::hash::canonical_hash`].
        ///
        /// Every variant maps to a unique, null-terminated byte string used as
        /// a SHA-256 prefix.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HashDomain {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl HashDomain {
            /// The raw domain-separator bytes (null-terminated).
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $( Self::$variant => $bytes, )+
                }
            }

            /// All domain variants in declaration order.
            pub const ALL: &[HashDomain] = &[
                $( Self::$variant, )+
            ];
        }

        impl core::fmt::Display for HashDomain {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    $( Self::$variant => write!(f, stringify!($variant)), )+
                }
            }
        }
    };
}

define_hash_domains! {
    /// Canonical JSON of a `SearchTrace` (expansion log + metadata).
    SearchTrace => b"WAYFINDER::SEARCH_TRACE::V1\0",

    /// Canonical JSON of a reconstructed solution (steps + total cost).
    Solution => b"WAYFINDER::SOLUTION::V1\0",

    /// Canonical JSON of a multi-strategy comparison report.
    ComparisonReport => b"WAYFINDER::COMPARISON_REPORT::V1\0",

    /// Canonical JSON of a problem definition (graph, board pair, jug goal).
    ProblemDefinition => b"WAYFINDER::PROBLEM_DEFINITION::V1\0",
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_domains_null_terminated() {
        for d in HashDomain::ALL {
            assert!(d.as_bytes().ends_with(&[0]), "{d} is not null-terminated");
        }
    }

    #[test]
    fn all_domains_unique() {
        let unique: HashSet<&[u8]> = HashDomain::ALL.iter().map(HashDomain::as_bytes).collect();
        assert_eq!(unique.len(), HashDomain::ALL.len());
    }

    #[test]
    fn all_domains_share_prefix() {
        for d in HashDomain::ALL {
            assert!(d.as_bytes().starts_with(b"WAYFINDER::"), "{d}");
        }
    }

    #[test]
    fn display_uses_variant_name() {
        assert_eq!(HashDomain::SearchTrace.to_string(), "SearchTrace");
    }
}
