//! Chat Gateway
//!
//! A small GraphQL gateway that relays a chat message to an OpenAI-compatible
//! completion API and returns the generated reply with a timestamp.
//!
//! # Modules
//! - `controller`: GraphQL HTTP handlers and GraphiQL
//! - `entities`: public response type and upstream wire types
//! - `error`: application error type
//! - `middleware`: CORS, request logging and the error envelope
//! - `routes`: endpoint registration
//! - `schema`: GraphQL query and mutation roots
//! - `service`: chat relay and the completion provider client
//! - `utils`: configuration loading and startup
//!
//! # Examples
//! ```no_run
//! use actix_web::{web, App, HttpServer};
//! use chat_gateway::controller::GraphqlState;
//! use chat_gateway::service::completion::OpenAiClient;
//! use chat_gateway::utils::AppConfig;
//! use std::sync::Arc;
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let config = AppConfig::default();
//!     let state = GraphqlState::new(Arc::new(OpenAiClient::new(&config.provider)), true);
//!     HttpServer::new(move || {
//!         App::new()
//!             .app_data(web::Data::new(state.clone()))
//!             .wrap(chat_gateway::middleware::cors(&config.cors))
//!             .configure(chat_gateway::routes::configure)
//!     })
//!     .bind("127.0.0.1:8787")?
//!     .run()
//!     .await
//! }
//! ```

rust_i18n::i18n!("locales", fallback = "en");

pub mod controller;
pub mod entities;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod schema;
pub mod service;
pub mod utils;

pub use entities::*;
pub use error::*;
pub use utils::*;
