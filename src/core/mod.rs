//! # Core Module
//!
//! 애플리케이션 전역에서 사용하는 에러 타입을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현 (상태 코드 + JSON 본문)
//! - **InvalidReason**: 식별자 생성 실패 사유 (누락, 빈 값, 공백, 형식 오류)
//!
//! ## 에러 전파 정책
//!
//! | 에러 | 전파 |
//! |------|------|
//! | `InvalidArgument`, `UnconvertibleType` | 생성 지점에서 즉시 반환 (400) |
//! | `TraceGenerationFailure` | 해당 요청만 실패 (500) |
//! | `EnrichmentFailure` | 호출 지점에서 잡아 경고 로그, 응답에는 영향 없음 |
//! | `AlreadySet` | 한 번만 설정 가능한 필드의 재설정 시도 (409) |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! fn handler_logic(raw: &str) -> AppResult<UserId> {
//!     let user_id: UserId = raw.parse()?; // 실패 시 400 응답으로 변환
//!     Ok(user_id)
//! }
//! ```

pub mod errors;

pub use errors::*;
