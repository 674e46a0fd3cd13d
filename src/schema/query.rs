use async_graphql::Object;

pub const HELLO_GREETING: &str = "Hello from Cloudflare Workers!";

pub struct Query;

#[Object]
impl Query {
    /// Constant greeting, useful as a liveness probe.
    async fn hello(&self) -> &'static str {
        HELLO_GREETING
    }
}
