//! 코드 기반 열거형
//!
//! 외부에서 문자열 코드로 전달되는 값(언어, 기기 종류)을 열거형으로 변환합니다.
//! 코드 → 변형 매핑은 첫 사용 시 한 번만 구성되며 (`once_cell::sync::Lazy`),
//! 이후 조회는 O(1) 해시 조회입니다. 모든 변형을 순회하며 비교하지 않습니다.
//!
//! ```rust,ignore
//! use crate::domain::enums::{CodeEnum, Language};
//!
//! assert_eq!(Language::from_code("KO"), Some(Language::Korean));
//! assert_eq!(Language::from_code("xx"), None);
//! ```

use std::collections::HashMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use crate::utils::string_utils::accept_language_tags;

/// 문자열 코드를 가지는 열거형의 공통 인터페이스
pub trait CodeEnum: Sized + Copy + 'static {
    /// 외부 표현 코드 (소문자)
    fn code(&self) -> &'static str;

    /// 모든 변형 목록
    fn all() -> &'static [Self];

    /// 코드로 변형을 찾습니다. 대소문자를 구분하지 않습니다.
    fn from_code(code: &str) -> Option<Self>;
}

/// 변형 목록에서 코드 → 변형 매핑을 구성합니다.
fn build_code_map<T: CodeEnum>() -> HashMap<&'static str, T> {
    T::all().iter().map(|variant| (variant.code(), *variant)).collect()
}

/// 응답 언어
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "zh")]
    Chinese,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "de")]
    German,
}

static LANGUAGE_CODES: Lazy<HashMap<&'static str, Language>> = Lazy::new(build_code_map::<Language>);

impl CodeEnum for Language {
    fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Korean => "ko",
            Language::Chinese => "zh",
            Language::Japanese => "ja",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
        }
    }

    fn all() -> &'static [Self] {
        &[
            Language::English,
            Language::Korean,
            Language::Chinese,
            Language::Japanese,
            Language::Spanish,
            Language::French,
            Language::German,
        ]
    }

    fn from_code(code: &str) -> Option<Self> {
        LANGUAGE_CODES.get(code.trim().to_lowercase().as_str()).copied()
    }
}

impl Language {
    /// 헤더가 없거나 지원하지 않는 언어일 때 사용하는 기본 언어
    pub const FALLBACK: Language = Language::English;

    /// `Accept-Language` 헤더에서 지원하는 언어를 선택합니다.
    ///
    /// q 값이 높은 태그부터 확인하며, 태그의 주 언어 부분(`ko-KR` → `ko`)으로 조회합니다.
    /// 지원하는 언어가 하나도 없으면 `fallback`을 반환합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let lang = Language::from_accept_language(Some("fr;q=0.4, ko-KR"), Language::English);
    /// assert_eq!(lang, Language::Korean);
    /// ```
    pub fn from_accept_language(header: Option<&str>, fallback: Language) -> Language {
        header
            .map(accept_language_tags)
            .unwrap_or_default()
            .iter()
            .filter_map(|tag| {
                let primary = tag.split(['-', '_']).next().unwrap_or(tag.as_str());
                Language::from_code(primary)
            })
            .next()
            .unwrap_or(fallback)
    }
}

/// 클라이언트 기기 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Web,
    Android,
    Ios,
    Desktop,
    #[default]
    Unknown,
}

static DEVICE_TYPE_CODES: Lazy<HashMap<&'static str, DeviceType>> = Lazy::new(build_code_map::<DeviceType>);

impl CodeEnum for DeviceType {
    fn code(&self) -> &'static str {
        match self {
            DeviceType::Web => "web",
            DeviceType::Android => "android",
            DeviceType::Ios => "ios",
            DeviceType::Desktop => "desktop",
            DeviceType::Unknown => "unknown",
        }
    }

    fn all() -> &'static [Self] {
        &[
            DeviceType::Web,
            DeviceType::Android,
            DeviceType::Ios,
            DeviceType::Desktop,
            DeviceType::Unknown,
        ]
    }

    fn from_code(code: &str) -> Option<Self> {
        DEVICE_TYPE_CODES.get(code.trim().to_lowercase().as_str()).copied()
    }
}

impl DeviceType {
    /// User-Agent 문자열로 기기 종류를 추정합니다.
    pub fn from_user_agent(user_agent: &str) -> DeviceType {
        let ua = user_agent.to_lowercase();

        if ua.contains("android") {
            DeviceType::Android
        } else if ua.contains("iphone") || ua.contains("ipad") || ua.contains("cfnetwork") {
            DeviceType::Ios
        } else if ua.contains("electron") {
            DeviceType::Desktop
        } else if ua.contains("mozilla") {
            DeviceType::Web
        } else {
            DeviceType::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code_roundtrip() {
        for language in Language::all() {
            assert_eq!(Language::from_code(language.code()), Some(*language));
        }
        assert_eq!(Language::from_code("KO"), Some(Language::Korean));
        assert_eq!(Language::from_code("xx"), None);
    }

    #[test]
    fn test_language_from_accept_language() {
        assert_eq!(
            Language::from_accept_language(Some("ko-KR,ko;q=0.9,en-US;q=0.8"), Language::English),
            Language::Korean
        );
        assert_eq!(
            Language::from_accept_language(Some("fr;q=0.4, ja;q=0.7"), Language::English),
            Language::Japanese
        );
        assert_eq!(
            Language::from_accept_language(Some("pt-BR, xx"), Language::English),
            Language::English
        );
        assert_eq!(
            Language::from_accept_language(None, Language::German),
            Language::German
        );
    }

    #[test]
    fn test_language_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Language::Korean).unwrap(), "\"ko\"");
        let parsed: Language = serde_json::from_str("\"ja\"").unwrap();
        assert_eq!(parsed, Language::Japanese);
    }

    #[test]
    fn test_device_type_lookup_and_detection() {
        assert_eq!(DeviceType::from_code("IOS"), Some(DeviceType::Ios));
        assert_eq!(
            DeviceType::from_user_agent("Mozilla/5.0 (Linux; Android 14; Pixel 8)"),
            DeviceType::Android
        );
        assert_eq!(
            DeviceType::from_user_agent("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)"),
            DeviceType::Ios
        );
        assert_eq!(
            DeviceType::from_user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) Chrome/120.0"),
            DeviceType::Web
        );
        assert_eq!(DeviceType::from_user_agent("curl/8.4.0"), DeviceType::Unknown);
    }
}
