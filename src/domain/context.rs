//! # Request Context
//!
//! 요청 하나의 수명 동안 trace id, 인증 토큰, 사용자/클라이언트 정보, 헤더,
//! 임의 속성을 운반하는 요청 범위 객체입니다.
//!
//! ## 수명
//!
//! ```text
//! 요청 진입 ── ContextFactory ──▶ RequestContext 생성 + trace id 설정
//!                                   │
//!                                   ▼  Arc<RequestContext> (요청 내부 작업들이 공유)
//!                         비즈니스 로직: 속성 읽기/쓰기, 사용자 설정
//!                                   │
//!                                   ▼
//!                 ResponseEnricher: trace id → 응답 envelope
//!                                   │
//!                                   ▼
//!                           요청 종료 시 drop
//! ```
//!
//! ## 동시성 규칙
//!
//! - `trace_id`, 사용자 식별 정보는 `OnceLock`: 첫 설정만 성공하고 이후 설정은 `AlreadySet`.
//! - `headers`, `attributes`는 `DashMap`: 호출자가 잠금 없이 여러 작업에서 동시에 읽고 씀.
//!   같은 키에 대한 경쟁 쓰기는 마지막 쓰기가 남습니다.
//! - 토큰, 언어, 클라이언트 정보는 `parking_lot::RwLock`.
//!
//! `RequestContext`는 `Clone`을 구현하지 않습니다. 요청 간에 공유하거나 재사용하지 않으며,
//! 요청 내부에서는 `Arc`로 공유합니다.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::ContextSnapshot;
use crate::domain::enums::{DeviceType, Language};
use crate::domain::ids::{DeviceId, Token, TraceId, UserId};

/// 속성 맵에 저장되는 값
///
/// 속성 값은 타입을 강제하지 않습니다. 꺼낸 값을 원래 타입으로 변환하는 것은 호출자의 책임이며,
/// [`RequestContext::attribute_as`] 가 이를 위한 편의 메서드입니다.
pub type AttributeValue = Arc<dyn Any + Send + Sync>;

/// 사용자 스냅샷 (비정규화된 사용자 정보)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub user_id: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl UserInfo {
    /// ID만 가진 최소 사용자 스냅샷을 생성합니다.
    pub fn of(user_id: UserId) -> Self {
        Self {
            user_id,
            username: None,
            display_name: None,
            roles: Vec::new(),
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// 클라이언트/기기 정보
///
/// `last_active_at`은 활동이 있을 때마다 외부 협력자가 갱신합니다 ([`RequestContext::touch`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    pub device_type: DeviceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<DeviceId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_active_at: Option<DateTime<Utc>>,
}

/// 요청 메타데이터 (생성 이후 변경되지 않음)
#[derive(Debug, Clone)]
pub struct RequestMetadata {
    pub request_time: DateTime<Utc>,
    pub request_uri: String,
    pub referer: Option<String>,
}

impl Default for RequestMetadata {
    fn default() -> Self {
        Self {
            request_time: Utc::now(),
            request_uri: String::new(),
            referer: None,
        }
    }
}

/// 사용자 ID와 사용자 스냅샷은 항상 함께 설정됩니다.
#[derive(Debug)]
struct UserIdentity {
    user_id: UserId,
    user_info: UserInfo,
}

/// 요청 범위 컨텍스트
pub struct RequestContext {
    trace_id: OnceLock<TraceId>,
    identity: OnceLock<UserIdentity>,
    token: RwLock<Option<Token>>,
    language: RwLock<Language>,
    client_info: RwLock<ClientInfo>,
    metadata: RequestMetadata,
    headers: DashMap<String, String>,
    attributes: DashMap<String, AttributeValue>,
}

impl RequestContext {
    /// 기본값으로 초기화된 컨텍스트를 생성합니다.
    ///
    /// 언어는 [`Language::FALLBACK`], 헤더/속성은 빈 맵, 클라이언트 정보는 빈 레코드입니다.
    /// trace id는 생성 직후 front-end 협력자가 [`set_trace_id`](Self::set_trace_id)로 한 번 설정합니다.
    pub fn new() -> Self {
        Self::with_metadata(RequestMetadata::default())
    }

    /// 요청 메타데이터를 지정하여 컨텍스트를 생성합니다.
    pub fn with_metadata(metadata: RequestMetadata) -> Self {
        Self {
            trace_id: OnceLock::new(),
            identity: OnceLock::new(),
            token: RwLock::new(None),
            language: RwLock::new(Language::FALLBACK),
            client_info: RwLock::new(ClientInfo::default()),
            metadata,
            headers: DashMap::new(),
            attributes: DashMap::new(),
        }
    }

    // ---- trace id ----

    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.get()
    }

    /// trace id를 설정합니다. 요청당 한 번만 가능합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AlreadySet` - 이미 trace id가 설정된 경우 (기존 값은 유지됨)
    pub fn set_trace_id(&self, trace_id: TraceId) -> AppResult<()> {
        self.trace_id
            .set(trace_id)
            .map_err(|_| AppError::AlreadySet("traceId"))
    }

    // ---- user ----

    pub fn user_id(&self) -> Option<UserId> {
        self.identity.get().map(|identity| identity.user_id)
    }

    pub fn user_info(&self) -> Option<&UserInfo> {
        self.identity.get().map(|identity| &identity.user_info)
    }

    /// 사용자 ID와 사용자 스냅샷을 함께 설정합니다.
    ///
    /// 두 값은 하나의 슬롯에 원자적으로 저장되므로 한쪽만 설정된 상태는 관찰되지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AlreadySet` - 이미 사용자가 설정된 경우
    pub fn set_user_info_and_user_id(&self, user_id: UserId) -> AppResult<()> {
        self.set_user_info(UserInfo::of(user_id))
    }

    /// 사용자 스냅샷으로 사용자 ID와 스냅샷을 함께 설정합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AlreadySet` - 이미 사용자가 설정된 경우
    pub fn set_user_info(&self, user_info: UserInfo) -> AppResult<()> {
        let identity = UserIdentity {
            user_id: user_info.user_id,
            user_info,
        };
        self.identity
            .set(identity)
            .map_err(|_| AppError::AlreadySet("userId"))
    }

    // ---- token ----

    pub fn token(&self) -> Option<Token> {
        self.token.read().clone()
    }

    pub fn set_token(&self, token: Token) {
        *self.token.write() = Some(token);
    }

    pub fn clear_token(&self) -> Option<Token> {
        self.token.write().take()
    }

    // ---- locale ----

    pub fn language(&self) -> Language {
        *self.language.read()
    }

    pub fn set_language(&self, language: Language) {
        *self.language.write() = language;
    }

    // ---- client info ----

    /// 클라이언트 정보의 복사본을 반환합니다.
    pub fn client_info(&self) -> ClientInfo {
        self.client_info.read().clone()
    }

    /// 쓰기 잠금 안에서 클라이언트 정보를 수정합니다.
    ///
    /// 잠금은 재진입할 수 없으므로 `update` 안에서 같은 컨텍스트의 `client_info()`나
    /// `touch()`를 호출하면 교착 상태가 됩니다.
    pub fn update_client_info<F>(&self, update: F)
    where
        F: FnOnce(&mut ClientInfo),
    {
        let mut guard = self.client_info.write();
        update(&mut guard);
    }

    /// 마지막 활동 시각을 현재 시각으로 갱신합니다.
    pub fn touch(&self) {
        self.client_info.write().last_active_at = Some(Utc::now());
    }

    // ---- request metadata ----

    pub fn request_time(&self) -> DateTime<Utc> {
        self.metadata.request_time
    }

    pub fn request_uri(&self) -> &str {
        &self.metadata.request_uri
    }

    pub fn referer(&self) -> Option<&str> {
        self.metadata.referer.as_deref()
    }

    // ---- headers ----

    /// 수신한 그대로의 헤더 이름(대소문자 구분)으로 값을 조회합니다.
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers.get(name).map(|entry| entry.value().clone())
    }

    /// 대소문자를 구분하지 않고 헤더 값을 조회합니다.
    pub fn header_ignore_case(&self, name: &str) -> Option<String> {
        self.header(name).or_else(|| {
            self.headers
                .iter()
                .find(|entry| entry.key().eq_ignore_ascii_case(name))
                .map(|entry| entry.value().clone())
        })
    }

    /// 헤더를 추가합니다. 컨텍스트 생성 시점에만 사용하는 것을 전제로 합니다.
    pub fn insert_header(&self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(name.into(), value.into());
    }

    /// 헤더 전체의 복사본을 반환합니다.
    pub fn headers(&self) -> HashMap<String, String> {
        self.headers
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    pub fn header_count(&self) -> usize {
        self.headers.len()
    }

    // ---- attributes ----

    /// 속성 값을 조회합니다. 없으면 `None`입니다.
    pub fn attribute(&self, key: &str) -> Option<AttributeValue> {
        self.attributes.get(key).map(|entry| Arc::clone(entry.value()))
    }

    /// 속성 값을 `T`로 꺼냅니다. 없거나 타입이 다르면 `None`입니다.
    pub fn attribute_as<T>(&self, key: &str) -> Option<T>
    where
        T: Any + Clone,
    {
        let value = self.attribute(key)?;
        (*value).downcast_ref::<T>().cloned()
    }

    /// 속성을 저장합니다 (마지막 쓰기 우선). 이전 값이 있으면 반환합니다.
    pub fn set_attribute<V>(&self, key: impl Into<String>, value: V) -> Option<AttributeValue>
    where
        V: Any + Send + Sync,
    {
        self.attributes.insert(key.into(), Arc::new(value))
    }

    /// 속성을 제거하고 제거된 값을 반환합니다.
    pub fn remove_attribute(&self, key: &str) -> Option<AttributeValue> {
        self.attributes.remove(key).map(|(_, value)| value)
    }

    pub fn contains_attribute(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    /// 속성 키 목록 (정렬됨)
    pub fn attribute_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.attributes.iter().map(|entry| entry.key().clone()).collect();
        keys.sort();
        keys
    }

    /// 응답/로그용 직렬화 가능한 스냅샷을 생성합니다. 토큰은 포함하지 않습니다.
    pub fn snapshot(&self) -> ContextSnapshot {
        ContextSnapshot {
            trace_id: self.trace_id().cloned(),
            user_id: self.user_id(),
            user_info: self.user_info().cloned(),
            authenticated: self.token.read().is_some(),
            language: self.language(),
            request_uri: self.metadata.request_uri.clone(),
            request_time: self.metadata.request_time,
            client_info: self.client_info(),
            header_count: self.header_count(),
            attribute_keys: self.attribute_keys(),
        }
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestContext")
            .field("trace_id", &self.trace_id())
            .field("user_id", &self.user_id())
            .field("token", &self.token.read().as_ref().map(Token::masked))
            .field("language", &self.language())
            .field("request_uri", &self.metadata.request_uri)
            .field("attribute_keys", &self.attribute_keys())
            .finish()
    }
}
