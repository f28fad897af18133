//! # Request Context Configuration
//!
//! trace id 발급, ID 생성기, 기본 언어 설정을 관리합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export TRACE_ID_PREFIX="TRACE-"      # 생성되는 trace id 접두사
//! export TRACE_ID_GENERATOR="snowflake" # snowflake | uuid
//! export ID_WORKER_ID="1"               # snowflake worker id (0-1023)
//! export DEFAULT_LANGUAGE="en"          # Accept-Language가 없을 때의 언어
//! ```
//!
//! 잘못된 값은 경고 로그를 남기고 기본값을 사용합니다.

use std::env;
use log::warn;
use crate::domain::enums::{CodeEnum, Language};

/// trace id 설정
pub struct TraceConfig;

impl TraceConfig {
    pub const DEFAULT_PREFIX: &'static str = "TRACE-";

    /// 생성되는 trace id의 접두사를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `TRACE_ID_PREFIX`: 비어 있으면 기본값 `TRACE-` 사용
    pub fn prefix() -> String {
        env::var("TRACE_ID_PREFIX")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_PREFIX.to_string())
    }
}

/// ID 생성기 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdGeneratorKind {
    /// 시간 순 정렬 가능한 64비트 ID (기본값)
    Snowflake,
    /// 랜덤 UUID v4
    Uuid,
}

/// ID 생성기 설정
pub struct IdGeneratorConfig;

impl IdGeneratorConfig {
    /// snowflake worker id 최댓값 (10비트)
    pub const MAX_WORKER_ID: u16 = 1023;
    pub const DEFAULT_WORKER_ID: u16 = 1;

    /// 사용할 ID 생성기 종류를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `TRACE_ID_GENERATOR`: `snowflake` (기본값) 또는 `uuid`
    pub fn kind() -> IdGeneratorKind {
        match env::var("TRACE_ID_GENERATOR") {
            Ok(value) => Self::parse_kind(&value).unwrap_or_else(|| {
                warn!("알 수 없는 TRACE_ID_GENERATOR '{}', snowflake 사용", value);
                IdGeneratorKind::Snowflake
            }),
            Err(_) => IdGeneratorKind::Snowflake,
        }
    }

    /// snowflake worker id를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `ID_WORKER_ID`: 0-1023 범위, 벗어나면 기본값 1
    pub fn worker_id() -> u16 {
        match env::var("ID_WORKER_ID") {
            Ok(value) => Self::parse_worker_id(&value).unwrap_or_else(|| {
                warn!(
                    "잘못된 ID_WORKER_ID '{}' (0-{}), 기본값 {} 사용",
                    value,
                    Self::MAX_WORKER_ID,
                    Self::DEFAULT_WORKER_ID
                );
                Self::DEFAULT_WORKER_ID
            }),
            Err(_) => Self::DEFAULT_WORKER_ID,
        }
    }

    pub fn parse_kind(value: &str) -> Option<IdGeneratorKind> {
        match value.trim().to_lowercase().as_str() {
            "snowflake" => Some(IdGeneratorKind::Snowflake),
            "uuid" => Some(IdGeneratorKind::Uuid),
            _ => None,
        }
    }

    pub fn parse_worker_id(value: &str) -> Option<u16> {
        value
            .trim()
            .parse::<u16>()
            .ok()
            .filter(|id| *id <= Self::MAX_WORKER_ID)
    }
}

/// 언어 설정
pub struct LocaleConfig;

impl LocaleConfig {
    /// `Accept-Language`가 없거나 지원하지 않는 언어일 때 사용할 언어
    ///
    /// # Environment Variables
    ///
    /// - `DEFAULT_LANGUAGE`: 언어 코드 (`en`, `ko`, ...). 기본값 `en`
    pub fn fallback_language() -> Language {
        match env::var("DEFAULT_LANGUAGE") {
            Ok(code) => Language::from_code(&code).unwrap_or_else(|| {
                warn!("지원하지 않는 DEFAULT_LANGUAGE '{}', {} 사용", code, Language::FALLBACK.code());
                Language::FALLBACK
            }),
            Err(_) => Language::FALLBACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generator_kind() {
        assert_eq!(IdGeneratorConfig::parse_kind("snowflake"), Some(IdGeneratorKind::Snowflake));
        assert_eq!(IdGeneratorConfig::parse_kind(" UUID "), Some(IdGeneratorKind::Uuid));
        assert_eq!(IdGeneratorConfig::parse_kind("ulid"), None);
    }

    #[test]
    fn test_parse_worker_id_range() {
        assert_eq!(IdGeneratorConfig::parse_worker_id("0"), Some(0));
        assert_eq!(IdGeneratorConfig::parse_worker_id("1023"), Some(1023));
        assert_eq!(IdGeneratorConfig::parse_worker_id("1024"), None);
        assert_eq!(IdGeneratorConfig::parse_worker_id("-1"), None);
        assert_eq!(IdGeneratorConfig::parse_worker_id("abc"), None);
    }

    #[test]
    fn test_defaults_when_unset() {
        if env::var("TRACE_ID_PREFIX").is_err() {
            assert_eq!(TraceConfig::prefix(), "TRACE-");
        }
        if env::var("TRACE_ID_GENERATOR").is_err() {
            assert_eq!(IdGeneratorConfig::kind(), IdGeneratorKind::Snowflake);
        }
        if env::var("DEFAULT_LANGUAGE").is_err() {
            assert_eq!(LocaleConfig::fallback_language(), Language::English);
        }
    }
}
