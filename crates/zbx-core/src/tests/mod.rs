//! Test module for zbx-core
//!
//! These tests drive the client against an in-process HTTP server and cover:
//! - Client construction, login and credential checks
//! - Method naming and request ids for every kind and operation
//! - Partial serialization of typed schemas on the wire
//! - Response envelope handling over real HTTP
//! - Accessor memoization
//! - Configuration loading and overrides

mod client_tests;
mod fixtures;
mod registry_tests;
