//! # Context Factory
//!
//! 인바운드 요청 메타데이터로 [`RequestContext`]를 생성합니다.
//!
//! ## 처리 순서
//!
//! 1. `X-Trace-Id`로 trace id 결정 ([`TraceIdProvider::resolve`])
//! 2. 요청 시각, URI, `Referer`로 메타데이터 구성
//! 3. 전체 헤더 복사
//! 4. 잘 알려진 헤더로 토큰, 언어, 클라이언트 정보 채우기
//!
//! 헤더 이름은 대소문자를 구분하지 않고 조회하며, 공백뿐인 값은 없는 것으로 취급합니다.

use std::collections::HashMap;
use std::sync::Arc;
use actix_web::http::header::HeaderMap;
use chrono::Utc;
use crate::config::LocaleConfig;
use crate::core::errors::AppResult;
use crate::domain::context::{RequestContext, RequestMetadata};
use crate::domain::enums::{CodeEnum, DeviceType, Language};
use crate::domain::ids::{DeviceId, Token};
use crate::domain::values::TypedValue;
use crate::services::trace::TraceIdProvider;
use crate::utils::string_utils::{detect_browser, non_blank, strip_bearer};

/// 컨텍스트 생성에 사용하는 헤더 이름
pub mod header_names {
    pub const TRACE_ID: &str = "X-Trace-Id";
    /// `HeaderName::from_static`용 소문자 표기
    pub const TRACE_ID_LOWER: &str = "x-trace-id";
    pub const DEVICE_ID: &str = "X-Device-Id";
    pub const DEVICE_TYPE: &str = "X-Device-Type";
    pub const DEVICE_VERSION: &str = "X-Device-Version";
    pub const USER_TOKEN: &str = "X-User-Token";
    pub const ACCEPT_LANGUAGE: &str = "Accept-Language";
    pub const USER_AGENT: &str = "User-Agent";
    pub const REFERER: &str = "Referer";
}

/// 헤더 형태의 인바운드 메타데이터
pub trait HeaderSource {
    /// 대소문자를 구분하지 않고 헤더 값을 조회합니다.
    fn header(&self, name: &str) -> Option<&str>;

    /// 모든 헤더 (이름, 값)
    fn entries(&self) -> Vec<(String, String)>;
}

/// actix 헤더 맵
///
/// 헤더 이름은 actix가 소문자로 정규화한 형태로 복사됩니다.
/// 같은 이름의 헤더가 여러 개면 `, `로 이어 붙입니다.
impl HeaderSource for HeaderMap {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|value| value.to_str().ok())
    }

    fn entries(&self) -> Vec<(String, String)> {
        self.keys()
            .map(|name| {
                let joined = self
                    .get_all(name)
                    .filter_map(|value| value.to_str().ok())
                    .collect::<Vec<_>>()
                    .join(", ");
                (name.as_str().to_string(), joined)
            })
            .collect()
    }
}

impl HeaderSource for HashMap<String, String> {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name)
            .or_else(|| {
                self.iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(name))
                    .map(|(_, value)| value)
            })
            .map(String::as_str)
    }

    fn entries(&self) -> Vec<(String, String)> {
        self.iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }
}

/// 요청 컨텍스트 생성기
pub struct ContextFactory {
    trace_ids: Arc<TraceIdProvider>,
    fallback_language: Language,
}

impl ContextFactory {
    pub fn new(trace_ids: Arc<TraceIdProvider>, fallback_language: Language) -> Self {
        Self {
            trace_ids,
            fallback_language,
        }
    }

    /// 환경 설정(`TRACE_ID_PREFIX`, `DEFAULT_LANGUAGE`)과 프로세스 전역 ID 생성기로 생성합니다.
    pub fn from_config() -> Self {
        Self::new(
            Arc::new(TraceIdProvider::from_config()),
            LocaleConfig::fallback_language(),
        )
    }

    /// 인바운드 메타데이터로 컨텍스트를 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `source` - 요청 헤더
    /// * `request_uri` - 요청 경로 (쿼리 포함)
    /// * `peer_ip` - 클라이언트 IP (알 수 없으면 `None`)
    ///
    /// # Errors
    ///
    /// * `AppError::TraceGenerationFailure` - trace id를 생성할 수 없는 경우
    pub fn build<S>(&self, source: &S, request_uri: &str, peer_ip: Option<&str>) -> AppResult<RequestContext>
    where
        S: HeaderSource + ?Sized,
    {
        let trace_id = self.trace_ids.resolve(source.header(header_names::TRACE_ID))?;
        let request_time = Utc::now();

        let context = RequestContext::with_metadata(RequestMetadata {
            request_time,
            request_uri: request_uri.to_string(),
            referer: non_blank(source.header(header_names::REFERER)).map(str::to_string),
        });
        context.set_trace_id(trace_id)?;

        for (name, value) in source.entries() {
            context.insert_header(name, value);
        }

        if let Some(token) = source.header(header_names::USER_TOKEN).and_then(strip_bearer) {
            context.set_token(Token::of(token.to_string()));
        }

        context.set_language(Language::from_accept_language(
            non_blank(source.header(header_names::ACCEPT_LANGUAGE)),
            self.fallback_language,
        ));

        let user_agent = non_blank(source.header(header_names::USER_AGENT));
        let device_type = non_blank(source.header(header_names::DEVICE_TYPE))
            .and_then(DeviceType::from_code)
            .or_else(|| user_agent.map(DeviceType::from_user_agent))
            .unwrap_or_default();
        let device_id = non_blank(source.header(header_names::DEVICE_ID));
        let device_version = non_blank(source.header(header_names::DEVICE_VERSION));

        context.update_client_info(|info| {
            info.device_type = device_type;
            info.device_id = device_id.map(|id| DeviceId::of(id.to_string()));
            info.device_version = device_version.map(str::to_string);
            info.ip = peer_ip.map(str::to_string);
            info.user_agent = user_agent.map(str::to_string);
            info.browser = user_agent.and_then(detect_browser).map(str::to_string);
            info.last_active_at = Some(request_time);
        });

        Ok(context)
    }
}
