//! End-to-end tests against a running server

mod api_tests;
