//! Domain-specific assertion macros for osf harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that say which
//! wire layer was being inspected.

/// Assert that percent-decoding `$wire` `$times` times yields `$expected`.
///
/// ```rust
/// assert_decodes_to!(term, 2, "type:\"http://x.org/T\"");
/// ```
#[macro_export]
macro_rules! assert_decodes_to {
    ($wire:expr, $times:expr, $expected:expr) => {{
        let mut decoded: String = String::from($wire);
        for layer in 0..$times {
            decoded = match osf_core::encoding::urldecode(&decoded) {
                Ok(d) => d,
                Err(e) => panic!(
                    "assert_decodes_to! failed: layer {} of {:?} is not decodable: {}",
                    layer + 1,
                    $wire,
                    e
                ),
            };
        }
        pretty_assertions::assert_eq!(decoded, $expected, "after {} decode(s)", $times);
    }};
}

/// Assert that a strict builder rejects its expression with a
/// `MalformedExpression` carrying the given position and defect.
#[macro_export]
macro_rules! assert_malformed {
    ($builder:expr, $position:expr, $defect:pat) => {{
        match $builder.finish() {
            Err(osf_core::FilterError::MalformedExpression { position, defect }) => {
                assert_eq!(position, $position, "wrong position (defect: {defect:?})");
                assert!(
                    matches!(defect, $defect),
                    "assert_malformed! failed: expected {}, got {:?}",
                    stringify!($defect),
                    defect
                );
            }
            Err(other) => panic!("assert_malformed! failed: unexpected error {other:?}"),
            Ok(value) => panic!("assert_malformed! failed: expression accepted: {value:?}"),
        }
    }};
}
