//! RequestContextMiddleware 컨텍스트 생성/응답 보강 로직
use std::rc::Rc;
use std::sync::Arc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use crate::services::context::{ContextFactory, ResponseEnricher};

/// 실제 컨텍스트 생성을 수행하는 서비스
pub struct RequestContextMiddlewareService<S> {
    pub service: Rc<S>,
    pub factory: Arc<ContextFactory>,
}

impl<S, B> Service<ServiceRequest> for RequestContextMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let factory = self.factory.clone();

        Box::pin(async move {
            let uri = req.uri().to_string();
            let peer_ip = req.connection_info().realip_remote_addr().map(str::to_string);

            let context = match factory.build(req.headers(), &uri, peer_ip.as_deref()) {
                Ok(context) => Arc::new(context),
                Err(err) => {
                    log::error!("요청 컨텍스트 생성 실패 ({} {}): {}", req.method(), uri, err);
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response)
                        .map_into_right_body();
                    return Ok(res);
                }
            };

            // 핸들러와 하위 작업이 공유할 컨텍스트 저장
            req.extensions_mut().insert(Arc::clone(&context));

            let res = service.call(req).await?;
            let res = ResponseEnricher::before_envelope_sent(res, &context);
            Ok(res.map_into_left_body())
        })
    }
}
