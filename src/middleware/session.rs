//! Visitor session middleware
//!
//! Tags every visitor with an opaque UUID v4 carried in a cookie. The token
//! only marks authorship of submitted posts; it carries no authorization
//! semantics.
//!
//! ## Design
//! - If the request carries a `visitor_id` cookie: reuse it
//! - Otherwise: generate a UUID v4 and set the cookie on the response
//! - Store the value in request extensions for access by handlers

use actix_web::{
    cookie::Cookie,
    dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse, Transform},
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use uuid::Uuid;

/// Cookie name carrying the visitor token.
pub const VISITOR_COOKIE: &str = "visitor_id";

/// The per-visitor opaque session token, extractable in handlers.
#[derive(Debug, Clone)]
pub struct VisitorId(pub String);

impl FromRequest for VisitorId {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        // Populated by the middleware; mint a fresh token when a handler is
        // exercised without it (unit tests, misconfigured route trees).
        let visitor = req
            .extensions()
            .get::<VisitorId>()
            .cloned()
            .unwrap_or_else(|| VisitorId(Uuid::new_v4().to_string()));
        ready(Ok(visitor))
    }
}

/// Middleware that manages visitor session cookies
#[derive(Clone)]
pub struct VisitorSessionMiddleware;

impl<S, B> Transform<S, ServiceRequest> for VisitorSessionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = VisitorSessionService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(VisitorSessionService { service }))
    }
}

pub struct VisitorSessionService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for VisitorSessionService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let existing = req.cookie(VISITOR_COOKIE).map(|c| c.value().to_string());
        let minted = existing.is_none();
        let visitor_id = existing.unwrap_or_else(|| Uuid::new_v4().to_string());

        if minted {
            tracing::debug!(%visitor_id, "new visitor session");
        }

        req.extensions_mut().insert(VisitorId(visitor_id.clone()));

        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;
            if minted {
                let cookie = Cookie::build(VISITOR_COOKIE, visitor_id).path("/").finish();
                res.response_mut()
                    .add_cookie(&cookie)
                    .map_err(actix_web::error::ErrorInternalServerError)?;
            }
            Ok(res)
        })
    }
}
