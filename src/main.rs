use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use chat_gateway::controller::GraphqlState;
use chat_gateway::middleware;
use chat_gateway::routes;
use chat_gateway::service::completion::OpenAiClient;
use chat_gateway::utils::init;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 初始化应用配置和日志系统
    let config = init::init().await?;

    let client = Arc::new(OpenAiClient::new(&config.provider));
    let state = GraphqlState::new(client, config.graphql.graphiql);

    let host = config.server.host.clone();
    let port = config.server.port;
    let shutdown_timeout = config.server.shutdown_timeout;

    log::info!("Listening on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(middleware::error_handler())
            .wrap(middleware::Logging)
            .wrap(middleware::cors(&config.cors))
            .configure(routes::configure)
    })
    .bind((host, port))?
    .shutdown_timeout(shutdown_timeout) // 优雅关闭等待时间
    .run()
    .await
}
