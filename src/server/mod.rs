//! Server-side API backend and business logic.
//!
//! This module contains the complete backend: API endpoints, business rules, data
//! access and infrastructure. It uses Axum as the web framework and SeaORM for
//! database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business rules and transactions across repositories
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Authentication guard, cookies and request extractors
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, JWT keys, cookie policy)
//! - **Startup** (`startup`) - Database connection, migrations and staff bootstrap
//! - **Router** (`router`) - Route table, rate limiting and OpenAPI documentation
//! - **Scheduler** (`scheduler/`) - Cron jobs (expired token cleanup)
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Middleware** extracts cookies and decodes the request
//! 3. **Controller** checks access, converts DTOs to params, calls a service
//! 4. **Service** applies business rules and orchestrates data operations
//! 5. **Data** queries the database and converts entities to domain models
//! 6. **Controller** converts the domain model to a DTO and responds

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
