//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 중앙에서 관리합니다.
//! 설정 구조체는 상태를 갖지 않으며, 호출 시점의 환경 변수를 읽고 값이 없거나 잘못되면 기본값을 사용합니다.
//!
//! ## 모듈 구성
//!
//! - [`server_config`] - 실행 환경, 서버 바인딩 설정
//! - [`context_config`] - trace id 접두사, ID 생성기, 기본 언어
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, ServerConfig, TraceConfig};
//!
//! let env = Environment::current();
//! let bind = (ServerConfig::host(), ServerConfig::port());
//! let prefix = TraceConfig::prefix();
//! ```
//!
//! ## 환경 변수
//!
//! | 변수 | 기본값 | 설명 |
//! |------|--------|------|
//! | `HOST` | `0.0.0.0` | 바인딩 주소 |
//! | `PORT` | `8080` | 바인딩 포트 |
//! | `ENVIRONMENT` | `production` | development, test, staging, production |
//! | `TRACE_ID_PREFIX` | `TRACE-` | 생성되는 trace id 접두사 |
//! | `TRACE_ID_GENERATOR` | `snowflake` | `snowflake` 또는 `uuid` |
//! | `ID_WORKER_ID` | `1` | snowflake worker id (0-1023) |
//! | `DEFAULT_LANGUAGE` | `en` | 기본 응답 언어 |

pub mod server_config;
pub mod context_config;

pub use server_config::*;
pub use context_config::*;
