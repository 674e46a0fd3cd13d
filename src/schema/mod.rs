//! GraphQL schema
//!
//! ```graphql
//! type Query { hello: String! }
//! type Mutation { chat(message: String!): ChatResponse! }
//! type ChatResponse { message: String!, timestamp: String! }
//! ```

pub mod mutation;
pub mod query;

use crate::service::completion::CompletionClient;
use async_graphql::{EmptySubscription, Schema};
use std::sync::Arc;

pub use mutation::Mutation;
pub use query::{Query, HELLO_GREETING};

pub type AppSchema = Schema<Query, Mutation, EmptySubscription>;

pub fn build_schema() -> AppSchema {
    Schema::build(Query, Mutation, EmptySubscription).finish()
}

/// Execution context attached to every GraphQL request.
///
/// Carries the completion client configured with the provider credential;
/// resolvers never read configuration from anywhere else.
#[derive(Clone)]
pub struct RequestContext {
    pub completion: Arc<dyn CompletionClient>,
}

impl RequestContext {
    pub fn new(completion: Arc<dyn CompletionClient>) -> Self {
        Self { completion }
    }
}
