//! Cron jobs running next to the HTTP server.

pub mod token_cleanup;
