//! # Domain Layer Module
//!
//! 요청 범위 컨텍스트와 타입 안전 식별자를 정의하는 도메인 계층입니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── values    - TypedValue 트레이트 (null 안전 생성, 문자열/JSON 변환, 값 동등성)
//! ├── ids       - UserId, TraceId, Token, DeviceId
//! ├── enums     - Language, DeviceType (코드 → 변형 매핑)
//! ├── context   - RequestContext (요청 하나의 수명 동안 공유되는 상태)
//! └── dto       - ApiResult envelope, ContextSnapshot
//!      │
//!      ▼
//! Application Layer (services: trace id 발급, 컨텍스트 생성, 응답 보강)
//!      │
//!      ▼
//! Web Layer (middlewares, handlers, routes)
//! ```
//!
//! ## 타입 안전성
//!
//! - **null 없음**: 값의 부재는 `Option<T>`로만 표현합니다.
//! - **원자적 생성**: 식별자 생성은 완전히 성공하거나 `AppError`로 실패합니다.
//!   부분적으로 변환된 값을 가진 인스턴스는 존재하지 않습니다.
//! - **값 동등성**: 감싼 값이 같으면 같은 식별자이며 해시도 같습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::domain::{RequestContext, TraceId, UserId};
//! use crate::domain::values::TypedValue;
//!
//! let ctx = Arc::new(RequestContext::new());
//! ctx.set_trace_id(TraceId::of("TRACE-1".to_string()))?;
//! ctx.set_user_info_and_user_id("42".parse::<UserId>()?)?;
//! ctx.set_attribute("order.count", 3_u32);
//!
//! assert_eq!(ctx.attribute_as::<u32>("order.count"), Some(3));
//! ```

pub mod values;
pub mod ids;
pub mod enums;
pub mod context;
pub mod dto;

pub use ids::*;
pub use enums::*;
pub use context::*;
pub use dto::*;
