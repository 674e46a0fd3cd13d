use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::Error;
use futures::future::{ok, Ready};
use std::future::Future;
use std::pin::Pin;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 用于请求计时和日志记录的中间件
///
/// Tags every response with an `x-request-id` header.
///
/// # 示例
/// ```
/// use actix_web::App;
/// use chat_gateway::middleware::Logging;
///
/// App::new()
///     .wrap(Logging);
/// ```
pub struct Logging;

impl<S, B> Transform<S, ServiceRequest> for Logging
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = LoggingMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(LoggingMiddleware { service })
    }
}

pub struct LoggingMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for LoggingMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(
        &self,
        ctx: &mut core::task::Context<'_>,
    ) -> core::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = std::time::Instant::now();
        let request_id = Uuid::new_v4();
        let path = req.path().to_string();
        let method = req.method().to_string();
        let origin = req
            .headers()
            .get("Origin")
            .and_then(|h| h.to_str().ok())
            .unwrap_or("-")
            .to_string();

        log::debug!("[{}] {} {} from origin {}", request_id, method, path, origin);

        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;
            let duration = start.elapsed();
            log::info!(
                "[{}] {} {} - {} - {}ms",
                request_id,
                method,
                path,
                res.status().as_u16(),
                duration.as_millis()
            );
            if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
                res.headers_mut().insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
            }
            Ok(res)
        })
    }
}
