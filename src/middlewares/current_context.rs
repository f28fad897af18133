use std::future::{ready, Ready};
use std::ops::Deref;
use std::sync::Arc;
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use crate::core::errors::AppError;
use crate::domain::context::RequestContext;

/// 현재 요청의 컨텍스트 추출자
///
/// [`RequestContextMiddleware`](crate::middlewares::RequestContextMiddleware)가 저장한
/// `Arc<RequestContext>`를 꺼냅니다. 미들웨어가 등록되지 않은 경로에서는 500 에러입니다.
#[derive(Debug, Clone)]
pub struct CurrentContext(pub Arc<RequestContext>);

impl CurrentContext {
    pub fn into_inner(self) -> Arc<RequestContext> {
        self.0
    }
}

impl Deref for CurrentContext {
    type Target = RequestContext;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for CurrentContext {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<Arc<RequestContext>>() {
            Some(context) => ready(Ok(CurrentContext(Arc::clone(context)))),
            None => ready(Err(AppError::InternalError(
                "요청 컨텍스트가 없습니다 (RequestContextMiddleware 미등록)".to_string(),
            )
            .into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_extracts_stored_context() {
        let req = TestRequest::default().to_http_request();
        let stored = Arc::new(RequestContext::new());
        req.extensions_mut().insert(Arc::clone(&stored));

        let extracted = CurrentContext::extract(&req).await.unwrap();

        assert!(Arc::ptr_eq(&extracted.0, &stored));
    }

    #[actix_web::test]
    async fn test_missing_context_is_an_error() {
        let req = TestRequest::default().to_http_request();

        let result = CurrentContext::extract(&req).await;

        assert!(result.is_err());
    }
}
