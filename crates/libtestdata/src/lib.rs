pub use libtestdata_core::*;

/// Macros that turn a directory of fixture files into `#[test]` functions at
/// Rust compile-time (see [`fixture_tests!`](crate::macros::fixture_tests)).
#[cfg(feature = "macros")]
pub mod macros {
    pub use libtestdata_macros::*;
}
