//! Resolver unit tests

mod datum_tests;
mod test_utils;
mod tiepoint_tests;
