use crate::error::{AppError, ValidationDetails};
use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    Error as ActixError, HttpResponse,
};
use rust_i18n::t;
use serde::{Deserialize, Serialize};
use std::{future::Future, pin::Pin};

/// JSON envelope for transport-level failures. GraphQL field errors never
/// take this path; they travel in the GraphQL `errors` array.
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub code: u32,
    pub status: String,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

impl AppError {
    fn error_context(&self) -> String {
        match self {
            AppError::Io(msg) => format!("IO Error: {}", msg),
            AppError::Anyhow(msg) => format!("Internal Error: {}", msg),
            AppError::Config(msg) => format!("Config Error: {}", msg),
            AppError::Provider(err) => format!("Provider Error: {}", err),
            AppError::Validation(details) => format!("Validation Error: {}", details),
            AppError::MethodNotAllowed(msg) => format!("Method Error: {}", msg),
            AppError::NotFound => "Resource Not Found".to_string(),
            AppError::PayloadTooLarge => "Payload Too Large".to_string(),
            AppError::Timeout(msg) => format!("Timeout Error: {}", msg),
            AppError::Generic(msg) => format!("Generic Error: {}", msg),
        }
    }

    fn status_info(&self) -> (u32, String) {
        match self {
            AppError::Io(_) | AppError::Anyhow(_) | AppError::Config(_) | AppError::Generic(_) => {
                (500, t!("errors.http.internal_server_error").to_string())
            }
            AppError::Provider(_) => (502, t!("errors.http.bad_gateway").to_string()),
            AppError::Validation(_) => (400, t!("errors.http.bad_request").to_string()),
            AppError::MethodNotAllowed(_) => (405, t!("errors.http.method_not_allowed").to_string()),
            AppError::NotFound => (404, t!("errors.http.not_found").to_string()),
            AppError::PayloadTooLarge => (413, t!("errors.http.payload_too_large").to_string()),
            AppError::Timeout(_) => (408, t!("errors.http.request_timeout").to_string()),
        }
    }
}

impl From<&ActixError> for AppError {
    fn from(err: &ActixError) -> Self {
        let status = err.as_response_error().status_code();
        let error_str = err.to_string();
        let context = format!("Status: {}, Error: {}", status, error_str);

        log::error!("{}", t!("logs.error_occurred", context = context));

        let app_error = match status {
            StatusCode::NOT_FOUND => AppError::NotFound,
            StatusCode::METHOD_NOT_ALLOWED => AppError::MethodNotAllowed(error_str),
            StatusCode::BAD_REQUEST => AppError::Validation(ValidationDetails {
                field: "request".to_string(),
                message: error_str,
            }),
            StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge,
            StatusCode::REQUEST_TIMEOUT => AppError::Timeout(error_str),
            _ => {
                log::debug!("Unmatched error occurred. Status: {}, Error: {}", status, error_str);
                AppError::Generic(format!(
                    "Unexpected error occurred: {} (context: {})",
                    error_str, context
                ))
            }
        };

        log::debug!("Converted error to: {:?}", app_error);
        app_error
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_info().0 as u16).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        let response = ErrorResponse::from(self);
        let status_code = match StatusCode::from_u16(response.code as u16) {
            Ok(code) => code,
            Err(_) => {
                log::error!("{}", t!("logs.invalid_status_code", code = response.code));
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        HttpResponse::build(status_code).content_type(ContentType::json()).json(response)
    }
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        let (code, status) = error.status_info();
        let error_context = error.error_context();

        let mut response = ErrorResponse {
            code,
            status,
            message: format!("{} (context: {})", error, error_context),
            data: None,
        };

        if let AppError::Validation(details) = error {
            response.data = serde_json::to_value(details)
                .map_err(|err| {
                    log::error!("{}", t!("logs.serialization_failed", msg = err.to_string()));
                })
                .ok();
        }

        log::debug!("Final error response: {:?}", response);
        response
    }
}

/// Rewrites any response that carries an actix error (extractor failures,
/// handler errors, middleware errors) into the [`ErrorResponse`] envelope.
pub struct ErrorHandlerMiddleware;

impl<S, B> Transform<S, ServiceRequest> for ErrorHandlerMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError> + 'static,
    S::Future: 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = ActixError;
    type Transform = ErrorHandlerService<S>;
    type InitError = ();
    type Future = Pin<Box<dyn Future<Output = Result<Self::Transform, Self::InitError>>>>;

    fn new_transform(&self, service: S) -> Self::Future {
        Box::pin(async move { Ok(ErrorHandlerService { service }) })
    }
}

pub struct ErrorHandlerService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for ErrorHandlerService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = ActixError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(
        &self,
        ctx: &mut core::task::Context<'_>,
    ) -> core::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let req_parts = req.request().clone();

        log::debug!("Handling request: method={}, uri={}", req_parts.method(), req_parts.uri());

        let fut = self.service.call(req);

        Box::pin(async move {
            match fut.await {
                Ok(res) => {
                    let replacement = match res.response().error() {
                        // already an envelope
                        Some(err) if err.as_error::<AppError>().is_some() => None,
                        Some(err) => Some(AppError::from(err)),
                        None => None,
                    };
                    match replacement {
                        Some(app_error) => {
                            log::error!(
                                "Request failed: {} {}",
                                req_parts.method(),
                                req_parts.uri()
                            );
                            let (req, _) = res.into_parts();
                            Ok(ServiceResponse::new(req, app_error.error_response()))
                        }
                        None => {
                            log::debug!(
                                "Processed request: {} {} -> {}",
                                req_parts.method(),
                                req_parts.uri(),
                                res.status()
                            );
                            Ok(res.map_into_boxed_body())
                        }
                    }
                }
                Err(err) => {
                    log::error!("Request failed: {} {}", req_parts.method(), req_parts.uri());
                    log::debug!("Error details: {:?}", err);

                    let app_error = AppError::from(&err);
                    Ok(ServiceResponse::new(req_parts, app_error.error_response()))
                }
            }
        })
    }
}

pub fn error_handler() -> ErrorHandlerMiddleware {
    ErrorHandlerMiddleware
}
