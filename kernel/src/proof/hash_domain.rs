//! Typed domain separators for canonical hashing.
//!
//! Every hash computed in the workspace selects a domain via [`HashDomain`].
//! Adding a domain is a single change here: the enum, `as_bytes()`, `ALL`
//! and `Display` are all generated from one macro invocation.

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
        /// Every variant maps to a unique, null-terminated byte string that is
        /// fed to SHA-256 ahead of the payload.
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
    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    /// 8-puzzle tile layout fingerprint (closed-set identity).
    PuzzleState => b"LODESTAR::PUZZLE_STATE::V1\0",

    /// Tic-tac-toe board fingerprint.
    BoardState => b"LODESTAR::BOARD_STATE::V1\0",

    /// Search report hashing.
    SearchReport => b"LODESTAR::SEARCH_REPORT::V1\0",

    // -----------------------------------------------------------------------
    // Harness
    // -----------------------------------------------------------------------

    /// Run configuration snapshot hashing.
    RunConfig => b"LODESTAR::RUN_CONFIG::V1\0",

    /// Run report digest (report bytes bound to config digest).
    RunReport => b"LODESTAR::RUN_REPORT::V1\0",

    /// Self-play transcript hashing.
    GameTranscript => b"LODESTAR::GAME_TRANSCRIPT::V1\0",

    // -----------------------------------------------------------------------
    // Benchmarks
    // -----------------------------------------------------------------------

    /// Benchmark determinism guard.
    BenchGuard => b"LODESTAR::BENCH_GUARD::V1\0",
}
