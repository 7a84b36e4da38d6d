// tests/support/mod.rs
// Shared by multiple integration test binaries; individual binaries use
// different subsets, so dead_code warnings are allowed at module level.
#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use helpers::*;
#[allow(unused_imports)]
pub use mocks::*;
