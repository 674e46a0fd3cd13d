pub mod graphql;

pub use graphql::GraphqlState;
