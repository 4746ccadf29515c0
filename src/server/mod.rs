//! Command relay backend.
//!
//! Accepts authenticated HTTP requests naming a stored command template, renders the
//! template with the caller's arguments and Steam persona name, and posts the result to
//! a Discord channel. A Discord bot in the same process administers the API tokens
//! through the `/rust` slash command.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Token lifecycle, command dispatch, Steam and Discord clients
//! - **Data Layer** (`data/`) - Credential and usage tables, and the command template file
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Token authentication guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, Steam client, gateway status, channel)
//! - **Startup** (`startup`) - Database, HTTP client and tracing initialization
//! - **Router** (`router`) - Axum route configuration
//! - **Bot** (`bot/`) - Discord bot event handlers and the admin slash command
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request
//! 2. **Middleware** checks the gateway is ready and authenticates the token
//! 3. **Controller** extracts the body and calls the command service
//! 4. **Service** loads the template, looks up the Steam name, renders and sends it
//! 5. **Controller** records usage in the background and responds

pub mod bot;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
