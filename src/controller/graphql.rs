use crate::error::{AppError, ValidationDetails};
use crate::schema::{build_schema, AppSchema, RequestContext};
use crate::service::completion::CompletionClient;
use actix_web::{http::header, web, Either, HttpRequest, HttpResponse};
use async_graphql::http::{parse_query_string, GraphiQLSource};
use async_graphql::parser::{
    parse_query,
    types::{OperationDefinition, OperationType},
    Positioned,
};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};
use std::sync::Arc;

pub const GRAPHQL_ENDPOINT: &str = "/";

/// Shared, read-only state of the GraphQL endpoint.
#[derive(Clone)]
pub struct GraphqlState {
    schema: AppSchema,
    completion: Arc<dyn CompletionClient>,
    graphiql: bool,
}

impl GraphqlState {
    pub fn new(completion: Arc<dyn CompletionClient>, graphiql: bool) -> Self {
        Self { schema: build_schema(), completion, graphiql }
    }

    fn context(&self) -> RequestContext {
        RequestContext::new(self.completion.clone())
    }
}

/// `POST /`: executes a GraphQL request with a fresh per-request context.
pub async fn graphql(state: web::Data<GraphqlState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner().data(state.context())).await.into()
}

/// `GET /`: the GraphiQL explorer for browsers, otherwise a GraphQL query
/// read from the query string. Mutations are only accepted over POST.
pub async fn graphql_get(
    state: web::Data<GraphqlState>,
    http_req: HttpRequest,
) -> Result<Either<HttpResponse, GraphQLResponse>, AppError> {
    let query_string = http_req.query_string();

    if state.graphiql && accepts_html(&http_req) && !has_query_param(query_string) {
        log::debug!("Serving GraphiQL");
        return Ok(Either::Left(graphiql()));
    }

    let request = parse_query_string(query_string).map_err(|e| {
        AppError::Validation(ValidationDetails { field: "query".to_string(), message: e.to_string() })
    })?;

    if selects_mutation(&request.query, request.operation_name.as_deref()) {
        log::warn!("Rejected mutation sent over GET");
        return Err(AppError::MethodNotAllowed(
            "mutations must be sent with POST".to_string(),
        ));
    }

    let response = state.schema.execute(request.data(state.context())).await;
    Ok(Either::Right(response.into()))
}

pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound)
}

fn graphiql() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint(GRAPHQL_ENDPOINT).title("Chat Gateway").finish())
}

fn accepts_html(req: &HttpRequest) -> bool {
    req.headers()
        .get(header::ACCEPT)
        .and_then(|h| h.to_str().ok())
        .map_or(false, |accept| accept.contains("text/html"))
}

fn has_query_param(query_string: &str) -> bool {
    query_string.split('&').any(|pair| pair == "query" || pair.starts_with("query="))
}

/// Whether the operation that will run is a mutation. When the selection is
/// ambiguous or names an unknown operation, any mutation in the document
/// counts. Unparseable documents are left to the engine.
fn selects_mutation(query: &str, operation_name: Option<&str>) -> bool {
    let Ok(document) = parse_query(query) else {
        return false;
    };
    let is_mutation = |operation: &Positioned<OperationDefinition>| {
        matches!(operation.node.ty, OperationType::Mutation)
    };

    let mut operations = document.operations.iter();
    let selected = match operation_name {
        Some(name) => operations
            .find(|(op_name, _)| op_name.map(|n| n.as_str()) == Some(name))
            .map(|(_, operation)| operation),
        None => match (operations.next(), operations.next()) {
            (Some((_, operation)), None) => Some(operation),
            _ => None,
        },
    };

    match selected {
        Some(operation) => is_mutation(operation),
        None => document.operations.iter().any(|(_, operation)| is_mutation(operation)),
    }
}
