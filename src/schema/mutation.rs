use crate::entities::ChatResponse;
use crate::schema::RequestContext;
use crate::service::chat::ChatService;
use async_graphql::{Context, ErrorExtensions, Object};

pub struct Mutation;

#[Object]
impl Mutation {
    /// Sends `message` to the completion provider as a single user turn.
    async fn chat(&self, ctx: &Context<'_>, message: String) -> async_graphql::Result<ChatResponse> {
        let request = ctx.data::<RequestContext>()?;
        ChatService::new(request.completion.clone()).reply(&message).await.map_err(|e| e.extend())
    }
}
