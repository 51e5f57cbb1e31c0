//! Test modules for the operator core.
//!
//! Per coding guidelines, test suites exceeding 200 lines live in this
//! directory instead of inline `mod tests` blocks.

mod method_dispatch_tests;
