//! # Trace ID Provider
//!
//! 요청의 trace id를 결정합니다.
//!
//! - 인바운드 `X-Trace-Id` 값이 공백이 아니면 그대로 사용 (호출자가 보낸 상관관계 ID 신뢰)
//! - 없거나 공백이면 `접두사 + 생성기 발급 ID`로 새로 생성
//!
//! 생성기 실패는 재시도하거나 대체 ID로 넘어가지 않고 `TraceGenerationFailure`로 전파합니다.
//! 해당 요청만 실패하며 프로세스는 계속 동작합니다.

use std::sync::Arc;
use log::{debug, error};
use crate::config::TraceConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::ids::TraceId;
use crate::domain::values::TypedValue;
use crate::services::trace::id_generator::{default_generator, IdGenerator};
use crate::utils::string_utils::non_blank;

/// trace id 결정/발급 서비스
pub struct TraceIdProvider {
    prefix: String,
    generator: Arc<dyn IdGenerator>,
}

impl TraceIdProvider {
    pub fn new(prefix: impl Into<String>, generator: Arc<dyn IdGenerator>) -> Self {
        Self {
            prefix: prefix.into(),
            generator,
        }
    }

    /// `TRACE_ID_PREFIX` 설정과 프로세스 전역 생성기로 생성합니다.
    pub fn from_config() -> Self {
        Self::new(TraceConfig::prefix(), default_generator())
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// 인바운드 헤더 값으로 trace id를 결정합니다.
    ///
    /// 같은 인바운드 값에 대해서는 항상 같은 trace id를 반환합니다 (생성기를 호출하지 않음).
    ///
    /// # Errors
    ///
    /// * `AppError::TraceGenerationFailure` - 새로 생성해야 하는데 생성기가 실패한 경우
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let provider = TraceIdProvider::from_config();
    ///
    /// assert_eq!(provider.resolve(Some("abc-123"))?.value(), "abc-123");
    /// assert!(provider.resolve(None)?.value().starts_with("TRACE-"));
    /// ```
    pub fn resolve(&self, inbound: Option<&str>) -> AppResult<TraceId> {
        match non_blank(inbound) {
            Some(value) => {
                debug!("인바운드 trace id 사용: {}", value);
                Ok(TraceId::of(value.to_string()))
            }
            None => self.generate(),
        }
    }

    /// 새 trace id를 생성합니다.
    pub fn generate(&self) -> AppResult<TraceId> {
        let id = self.generator.next_id(&self.prefix).map_err(|e| {
            error!("trace id 생성 실패: {}", e);
            match e {
                AppError::TraceGenerationFailure(_) => e,
                other => AppError::TraceGenerationFailure(other.to_string()),
            }
        })?;

        debug!("trace id 생성: {}", id);
        Ok(TraceId::of(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use crate::services::trace::id_generator::{SnowflakeIdGenerator, UuidIdGenerator};

    struct FailingGenerator;

    impl IdGenerator for FailingGenerator {
        fn next_id(&self, _prefix: &str) -> AppResult<String> {
            Err(AppError::InternalError("generator offline".to_string()))
        }
    }

    fn snowflake_provider() -> TraceIdProvider {
        TraceIdProvider::new("TRACE-", Arc::new(SnowflakeIdGenerator::new(1).unwrap()))
    }

    #[test]
    fn test_inbound_value_passes_through_verbatim() {
        let provider = TraceIdProvider::new("TRACE-", Arc::new(FailingGenerator));

        let trace_id = provider.resolve(Some("abc-123")).unwrap();

        assert_eq!(trace_id.value(), "abc-123");
        assert_eq!(provider.resolve(Some("abc-123")).unwrap(), trace_id);
    }

    #[test]
    fn test_absent_or_blank_inbound_generates_prefixed_id() {
        let provider = snowflake_provider();

        let generated = provider.resolve(None).unwrap();
        let from_blank = provider.resolve(Some("   ")).unwrap();

        assert!(generated.value().starts_with("TRACE-"));
        assert!(from_blank.value().starts_with("TRACE-"));
        assert_ne!(generated, from_blank);
    }

    #[test]
    fn test_ten_thousand_generated_ids_do_not_collide() {
        for provider in [snowflake_provider(), TraceIdProvider::new("TRACE-", Arc::new(UuidIdGenerator))] {
            let ids: HashSet<String> = (0..10_000)
                .map(|_| provider.resolve(None).unwrap().into_value())
                .collect();
            assert_eq!(ids.len(), 10_000);
        }
    }

    #[test]
    fn test_generator_failure_propagates_as_trace_generation_failure() {
        let provider = TraceIdProvider::new("TRACE-", Arc::new(FailingGenerator));

        match provider.resolve(None) {
            Err(AppError::TraceGenerationFailure(message)) => assert!(message.contains("generator offline")),
            other => panic!("Expected TraceGenerationFailure, got {:?}", other),
        }
    }
}
