//! # Application Error Handling System
//!
//! 요청 컨텍스트와 타입 안전 식별자 계층에서 사용하는 통합 에러 처리 시스템입니다.
//! `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
//! 요청 경계에서 일관된 JSON 에러 응답으로 변환됩니다.
//!
//! ## 에러 분류
//!
//! | 변형 | 발생 지점 | HTTP 상태 |
//! |------|-----------|-----------|
//! | `InvalidArgument` | 식별자 생성/파싱 | 400 |
//! | `UnconvertibleType` | 비타입 값(`serde_json::Value`) 변환 | 400 |
//! | `AlreadySet` | set-once 필드 재할당 | 409 |
//! | `TraceGenerationFailure` | 외부 ID 생성기 실패 | 500 |
//! | `EnrichmentFailure` | 응답 envelope 보강 실패 (항상 호출부에서 삼켜짐) | 500 |
//! | `InternalError` | 그 밖의 예상치 못한 오류 | 500 |
//!
//! ## 전파 정책
//!
//! - 식별자 생성 실패는 생성 지점에서 즉시 반환됩니다 (기본값으로 대체하지 않음).
//! - 속성 맵 조회/저장은 실패하지 않습니다. 값이 없으면 `None`입니다.
//! - 응답 보강 실패는 `ResponseEnricher`가 잡아서 로그로만 남깁니다.
//!
//! ```rust,ignore
//! use crate::core::errors::AppResult;
//! use crate::domain::ids::UserId;
//!
//! fn parse_user(raw: &str) -> AppResult<UserId> {
//!     let user_id: UserId = raw.parse()?;
//!     Ok(user_id)
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// 식별자 인자가 거부된 이유
///
/// "값이 없음/비어 있음"과 "형식이 잘못됨"을 구분하기 위해 사용합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    /// 값 자체가 주어지지 않음 (null)
    Missing,
    /// 빈 문자열
    Empty,
    /// 공백으로만 구성된 문자열
    Blank,
    /// 대상 타입으로 파싱할 수 없는 문자열
    Malformed(String),
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::Missing => write!(f, "value is required but was null"),
            InvalidReason::Empty => write!(f, "value is empty"),
            InvalidReason::Blank => write!(f, "value is blank"),
            InvalidReason::Malformed(detail) => write!(f, "malformed value: {}", detail),
        }
    }
}

/// 애플리케이션 전역 에러 타입
///
/// 식별자 생성, 컨텍스트 설정, trace id 생성, 응답 보강 과정에서 발생할 수 있는
/// 모든 에러를 포괄합니다. 핸들러에서 반환되면 자동으로 HTTP 응답으로 변환됩니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// 식별자 생성자에 null이 전달되었거나 문자열을 파싱할 수 없음
    ///
    /// # 예제
    /// ```rust,ignore
    /// let err = "abc".parse::<UserId>().unwrap_err();
    /// assert!(matches!(err, AppError::InvalidArgument { .. }));
    /// ```
    #[error("Invalid argument for {type_name}: {reason}")]
    InvalidArgument {
        /// 생성하려던 식별자 타입 이름
        type_name: &'static str,
        /// 거부 사유
        reason: InvalidReason,
    },

    /// 대상 타입도 문자열도 아닌 값으로 변환을 시도함
    #[error("Unconvertible type for {type_name}: expected {expected} or string, got {actual}")]
    UnconvertibleType {
        /// 생성하려던 식별자 타입 이름
        type_name: &'static str,
        /// 허용되는 원시 타입 이름
        expected: &'static str,
        /// 실제로 전달된 값의 종류
        actual: String,
    },

    /// 외부 ID 생성기가 실패함
    ///
    /// 해당 요청의 상관관계 추적이 불가능하므로 요청 단위로 실패시킵니다.
    #[error("Trace id generation failed: {0}")]
    TraceGenerationFailure(String),

    /// 응답 envelope에 trace id를 복사하는 중 실패함
    ///
    /// 호출부(`ResponseEnricher`)에서 항상 잡혀 로그로만 남습니다.
    #[error("Response enrichment failed: {0}")]
    EnrichmentFailure(String),

    /// set-once 필드에 두 번째 값을 할당하려 함
    #[error("{0} is already set for this request")]
    AlreadySet(&'static str),

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// `InvalidArgument` 에러를 생성합니다.
    pub fn invalid(type_name: &'static str, reason: InvalidReason) -> Self {
        AppError::InvalidArgument { type_name, reason }
    }

    /// `UnconvertibleType` 에러를 생성합니다.
    pub fn unconvertible(type_name: &'static str, expected: &'static str, actual: impl Into<String>) -> Self {
        AppError::UnconvertibleType {
            type_name,
            expected,
            actual: actual.into(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    /// HTTP 상태 코드를 결정합니다.
    ///
    /// - `InvalidArgument`, `UnconvertibleType` → 400 Bad Request
    /// - `AlreadySet` → 409 Conflict
    /// - 나머지 → 500 Internal Server Error
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::InvalidArgument { .. } | AppError::UnconvertibleType { .. } => StatusCode::BAD_REQUEST,
            AppError::AlreadySet(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// ```json
    /// { "error": "Invalid argument for UserId: malformed value: abc" }
    /// ```
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
