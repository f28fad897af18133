//! trace id 발급 서비스
//!
//! - [`id_generator`] - 프로세스 전역 고유 ID 생성기 (Snowflake, UUID)
//! - [`trace_id_provider`] - 인바운드 trace id 재사용 또는 신규 발급

pub mod id_generator;
pub mod trace_id_provider;

pub use id_generator::{default_generator, IdGenerator, SnowflakeIdGenerator, UuidIdGenerator};
pub use trace_id_provider::TraceIdProvider;
