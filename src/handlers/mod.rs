//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   RequestContextMiddleware - 컨텍스트 생성       ← Middleware
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - CurrentContext 사용       ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   ApiResult Responder - trace id 보강           ← Response
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! ```text
//! handlers/
//! ├── health.rs   ← 헬스체크
//! └── context.rs  ← 요청 컨텍스트 조회/사용자 지정/속성 지정
//! ```
//!
//! ## 작성 규칙
//!
//! - 성공 응답은 [`ApiResult`](crate::domain::dto::ApiResult)로 반환합니다.
//! - 실패는 `Result<_, AppError>`로 반환하며 `AppError`가 상태 코드를 결정합니다.
//! - 요청 컨텍스트는 [`CurrentContext`](crate::middlewares::CurrentContext) 추출자로 받습니다.

pub mod health;
pub mod context;
