//! # ID Generator
//!
//! trace id 접미사를 발급하는 프로세스 전역 ID 생성기입니다.
//! 여러 요청이 동시에 호출하므로 전역 잠금 없이 안전해야 합니다.
//!
//! ## Snowflake 레이아웃 (64비트)
//!
//! ```text
//! | 0 | 41 bits: epoch 이후 밀리초 | 10 bits: worker id | 12 bits: sequence |
//! ```
//!
//! 시간과 sequence는 하나의 `AtomicU64` 상태로 관리하며 compare-and-swap으로 단조 증가시킵니다.
//! 같은 밀리초에 4096개를 넘게 발급하면 다음 밀리초 값을 미리 사용합니다.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use chrono::Utc;
use log::{error, info};
use once_cell::sync::Lazy;
use uuid::Uuid;
use crate::config::{IdGeneratorConfig, IdGeneratorKind};
use crate::core::errors::{AppError, AppResult, InvalidReason};

/// "다음 고유 ID" 발급 인터페이스
pub trait IdGenerator: Send + Sync {
    /// `prefix`로 시작하고 호출 시점에 프로세스 전역에서 고유한 문자열을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::TraceGenerationFailure` - ID를 발급할 수 없는 경우
    fn next_id(&self, prefix: &str) -> AppResult<String>;
}

/// 2024-01-01T00:00:00Z (밀리초)
pub const SNOWFLAKE_EPOCH_MS: i64 = 1_704_067_200_000;

const WORKER_ID_BITS: u32 = 10;
const SEQUENCE_BITS: u32 = 12;
const SEQUENCE_MASK: u64 = (1 << SEQUENCE_BITS) - 1;
const MAX_WORKER_ID: u16 = (1 << WORKER_ID_BITS) - 1;

/// 시간 순으로 정렬 가능한 64비트 ID 생성기
pub struct SnowflakeIdGenerator {
    worker_id: u16,
    /// `(epoch 이후 밀리초 << SEQUENCE_BITS) | sequence`
    state: AtomicU64,
    clock: fn() -> i64,
}

impl SnowflakeIdGenerator {
    /// 시스템 시계를 사용하는 생성기를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidArgument` - `worker_id`가 1023을 넘는 경우
    pub fn new(worker_id: u16) -> AppResult<Self> {
        Self::with_clock(worker_id, || Utc::now().timestamp_millis())
    }

    /// 시계 함수를 지정하여 생성기를 생성합니다.
    pub fn with_clock(worker_id: u16, clock: fn() -> i64) -> AppResult<Self> {
        if worker_id > MAX_WORKER_ID {
            return Err(AppError::invalid(
                "WorkerId",
                InvalidReason::Malformed(format!("{} (허용 범위 0-{})", worker_id, MAX_WORKER_ID)),
            ));
        }

        Ok(Self {
            worker_id,
            state: AtomicU64::new(0),
            clock,
        })
    }

    pub fn worker_id(&self) -> u16 {
        self.worker_id
    }

    /// 다음 64비트 ID를 발급합니다.
    pub fn next_raw(&self) -> AppResult<u64> {
        let now = (self.clock)();
        if now < SNOWFLAKE_EPOCH_MS {
            return Err(AppError::TraceGenerationFailure(format!(
                "시스템 시계({}ms)가 생성기 기준 시각보다 이전입니다",
                now
            )));
        }
        let floor = ((now - SNOWFLAKE_EPOCH_MS) as u64) << SEQUENCE_BITS;

        let mut last = self.state.load(Ordering::Acquire);
        loop {
            let next = floor.max(last + 1);
            match self
                .state
                .compare_exchange_weak(last, next, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => return Ok(self.compose(next)),
                Err(actual) => last = actual,
            }
        }
    }

    fn compose(&self, state: u64) -> u64 {
        let millis = state >> SEQUENCE_BITS;
        let sequence = state & SEQUENCE_MASK;
        (millis << (WORKER_ID_BITS + SEQUENCE_BITS)) | (u64::from(self.worker_id) << SEQUENCE_BITS) | sequence
    }
}

impl IdGenerator for SnowflakeIdGenerator {
    fn next_id(&self, prefix: &str) -> AppResult<String> {
        Ok(format!("{}{}", prefix, self.next_raw()?))
    }
}

/// UUID v4 기반 생성기 (하이픈 없는 32자리 16진수)
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self, prefix: &str) -> AppResult<String> {
        Ok(format!("{}{}", prefix, Uuid::new_v4().simple()))
    }
}

static DEFAULT_GENERATOR: Lazy<Arc<dyn IdGenerator>> = Lazy::new(build_default_generator);

fn build_default_generator() -> Arc<dyn IdGenerator> {
    match IdGeneratorConfig::kind() {
        IdGeneratorKind::Snowflake => match SnowflakeIdGenerator::new(IdGeneratorConfig::worker_id()) {
            Ok(generator) => {
                info!("🆔 Snowflake ID 생성기 초기화 (worker_id={})", generator.worker_id());
                Arc::new(generator)
            }
            Err(e) => {
                error!("Snowflake ID 생성기 초기화 실패, UUID 생성기 사용: {}", e);
                Arc::new(UuidIdGenerator)
            }
        },
        IdGeneratorKind::Uuid => {
            info!("🆔 UUID ID 생성기 초기화");
            Arc::new(UuidIdGenerator)
        }
    }
}

/// 설정(`TRACE_ID_GENERATOR`, `ID_WORKER_ID`)에 따라 첫 사용 시 생성되는 프로세스 전역 생성기
pub fn default_generator() -> Arc<dyn IdGenerator> {
    Arc::clone(&DEFAULT_GENERATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    fn fixed_clock() -> i64 {
        SNOWFLAKE_EPOCH_MS + 1_000
    }

    fn broken_clock() -> i64 {
        0
    }

    #[test]
    fn test_worker_id_out_of_range_is_rejected() {
        assert!(SnowflakeIdGenerator::new(1023).is_ok());
        assert!(matches!(
            SnowflakeIdGenerator::new(1024),
            Err(AppError::InvalidArgument { type_name: "WorkerId", .. })
        ));
    }

    #[test]
    fn test_snowflake_layout() {
        let generator = SnowflakeIdGenerator::with_clock(5, fixed_clock).unwrap();

        let first = generator.next_raw().unwrap();
        let second = generator.next_raw().unwrap();

        assert_eq!(first >> 22, 1_000);
        assert_eq!((first >> 12) & 0x3FF, 5);
        assert_eq!(first & 0xFFF, 0);
        assert_eq!(second & 0xFFF, 1);
    }

    #[test]
    fn test_sequence_overflow_borrows_next_millisecond() {
        let generator = SnowflakeIdGenerator::with_clock(1, fixed_clock).unwrap();

        let ids: Vec<u64> = (0..5_000).map(|_| generator.next_raw().unwrap()).collect();

        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(ids[4096] >> 22, 1_001);
    }

    #[test]
    fn test_clock_before_epoch_fails() {
        let generator = SnowflakeIdGenerator::with_clock(1, broken_clock).unwrap();

        assert!(matches!(
            generator.next_id("TRACE-"),
            Err(AppError::TraceGenerationFailure(_))
        ));
    }

    #[test]
    fn test_concurrent_ids_are_unique() {
        let generator = SnowflakeIdGenerator::new(1).unwrap();
        let generator = &generator;

        let ids: Vec<u64> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(move || (0..1_000).map(|_| generator.next_raw().unwrap()).collect::<Vec<_>>()))
                .collect();
            handles.into_iter().flat_map(|h| h.join().unwrap()).collect()
        });

        let unique: HashSet<u64> = ids.iter().copied().collect();
        assert_eq!(unique.len(), 8_000);
    }

    #[test]
    fn test_uuid_generator_uses_prefix() {
        let id = UuidIdGenerator.next_id("T-").unwrap();

        assert!(id.starts_with("T-"));
        assert_eq!(id.len(), 2 + 32);
        assert_ne!(id, UuidIdGenerator.next_id("T-").unwrap());
    }
}
