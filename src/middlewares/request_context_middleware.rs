//! 요청 컨텍스트 미들웨어
//!
//! 요청마다 `RequestContext`를 생성하여 request extension에 저장하고,
//! 응답에 trace id 헤더를 설정합니다.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::request_context_inner::RequestContextMiddlewareService;
use crate::services::context::ContextFactory;

/// 요청 컨텍스트 미들웨어
pub struct RequestContextMiddleware {
    factory: Arc<ContextFactory>,
}

impl RequestContextMiddleware {
    /// 지정한 컨텍스트 생성기를 사용하는 미들웨어 생성
    pub fn new(factory: Arc<ContextFactory>) -> Self {
        Self { factory }
    }

    /// 환경 설정으로 구성한 컨텍스트 생성기를 사용하는 미들웨어 생성
    pub fn from_config() -> Self {
        Self::new(Arc::new(ContextFactory::from_config()))
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for RequestContextMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RequestContextMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestContextMiddlewareService {
            service: Rc::new(service),
            factory: Arc::clone(&self.factory),
        }))
    }
}
