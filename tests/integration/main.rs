//! Integration tests
//!
//! `client_tests` drive the HTTP client and a remote session against a fake
//! REST backend bound to an ephemeral port. `ui_tests` drive the web UI
//! router in-process.

mod client_tests;
mod fake_backend;
mod ui_tests;
