//! Library-level integration tests: aggregation, HTTP surface and chat.

mod aggregation_tests;
mod chat_tests;
mod http_tests;
