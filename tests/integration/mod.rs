//! Adapter tests against a scripted transport and a mock HTTP server

pub mod chat;
pub mod fake_transport;
pub mod mock_server;
