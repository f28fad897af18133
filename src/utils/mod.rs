//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 헤더 값 정리, Bearer 토큰 추출, Accept-Language 파싱, 브라우저 감지
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::{accept_language_tags, strip_bearer};
//!
//! assert_eq!(strip_bearer("Bearer abc"), Some("abc"));
//! assert_eq!(accept_language_tags("en;q=0.5, ko"), vec!["ko", "en"]);
//! ```

pub mod string_utils;
