//! # Typed Value
//!
//! 원시 값 하나를 감싸는 불변 래퍼 타입의 공통 계약입니다.
//! 식별자 타입(`UserId`, `TraceId`, `Token`, `DeviceId`)은 모두 이 trait을 구현하며,
//! 생성/변환/비교 규칙을 한 곳에서 공유합니다.
//!
//! ## 규칙
//!
//! - **원자적 생성**: 생성은 완전히 성공하거나 에러를 반환합니다. 절반만 변환된 값은 없습니다.
//! - **값 동등성**: `PartialEq`/`Hash`는 감싼 값에 위임됩니다.
//! - **투명 직렬화**: JSON으로 직렬화하면 감싼 값 그대로 나옵니다 (`{"value": 42}`가 아닌 `42`).
//! - **null 모델링**: Rust에는 null이 없으므로 `Option`으로 표현합니다.
//!   `of_nullable(None)`은 `None`, `try_of(None)`은 `InvalidArgument(Missing)`입니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::ids::UserId;
//! use crate::domain::values::TypedValue;
//!
//! let id = UserId::of(42);
//! assert_eq!(*id.value(), 42);
//!
//! let parsed = UserId::from_json(&serde_json::json!("42"))?;
//! assert_eq!(parsed, Some(id));
//!
//! assert_eq!(UserId::from_json(&serde_json::Value::Null)?, None);
//! ```

use std::fmt;
use std::hash::Hash;
use serde_json::Value;
use crate::core::errors::{AppError, AppResult, InvalidReason};

/// 원시 값 하나를 감싸는 불변 래퍼의 공통 인터페이스
pub trait TypedValue: Sized + Clone + PartialEq + Eq + Hash + fmt::Debug {
    /// 감싸는 원시 타입
    type Value: Clone + PartialEq + Eq + Hash;

    /// 에러 메시지에 사용되는 타입 이름
    const TYPE_NAME: &'static str;

    /// 원시 타입의 종류 ("integer", "string")
    const VALUE_KIND: &'static str;

    /// 존재하는 값으로 인스턴스를 생성합니다.
    fn of(value: Self::Value) -> Self;

    /// 감싼 값을 그대로 반환합니다. 직렬화에 사용되는 유일한 표현입니다.
    fn value(&self) -> &Self::Value;

    /// 래퍼를 해제하여 원시 값을 반환합니다.
    fn into_value(self) -> Self::Value;

    /// 문자열 표현을 원시 값으로 파싱합니다.
    fn parse_value(raw: &str) -> Result<Self::Value, InvalidReason>;

    /// 문자열이 아닌 JSON 값에서 원시 값을 꺼냅니다. 타입이 맞지 않으면 `None`입니다.
    fn typed_from_json(value: &Value) -> Option<Self::Value>;

    /// null 입력은 null 출력, 그 외에는 `of`와 동일합니다.
    fn of_nullable(value: Option<Self::Value>) -> Option<Self> {
        value.map(Self::of)
    }

    /// null을 허용하지 않는 생성자입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidArgument` - 값이 `None`인 경우 (`InvalidReason::Missing`)
    fn try_of(value: Option<Self::Value>) -> AppResult<Self> {
        value
            .map(Self::of)
            .ok_or_else(|| AppError::invalid(Self::TYPE_NAME, InvalidReason::Missing))
    }

    /// 문자열 표현에서 인스턴스를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidArgument` - 빈 문자열, 공백 문자열, 또는 형식 오류
    fn parse(raw: &str) -> AppResult<Self> {
        Self::parse_value(raw)
            .map(Self::of)
            .map_err(|reason| AppError::invalid(Self::TYPE_NAME, reason))
    }

    /// null 허용 문자열 파싱입니다. `None`이면 `Ok(None)`을 반환합니다.
    fn parse_nullable(raw: Option<&str>) -> AppResult<Option<Self>> {
        raw.map(Self::parse).transpose()
    }

    /// 비타입 값(이미 타입이 맞는 값, 문자열 표현, 또는 null)에서 인스턴스를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidArgument` - 문자열 파싱 실패
    /// * `AppError::UnconvertibleType` - 대상 타입도 문자열도 아닌 값
    fn from_json(value: &Value) -> AppResult<Option<Self>> {
        match value {
            Value::Null => Ok(None),
            Value::String(raw) => Self::parse(raw).map(Some),
            other => match Self::typed_from_json(other) {
                Some(typed) => Ok(Some(Self::of(typed))),
                // 종류는 맞지만 표현 범위를 벗어난 값 (예: i64 범위 밖의 정수)
                None if json_kind(other) == Self::VALUE_KIND => Err(AppError::invalid(
                    Self::TYPE_NAME,
                    InvalidReason::Malformed(format!("{} is out of range", other)),
                )),
                None => Err(AppError::unconvertible(Self::TYPE_NAME, Self::VALUE_KIND, json_kind(other))),
            },
        }
    }

    /// `from_json`의 null 불허 버전입니다.
    fn require_json(value: &Value) -> AppResult<Self> {
        Self::from_json(value)?
            .ok_or_else(|| AppError::invalid(Self::TYPE_NAME, InvalidReason::Missing))
    }
}

/// 문자열을 감싸는 래퍼 전용 연산
///
/// 모든 연산은 순수 함수이며 수신자를 변경하지 않고 새 인스턴스를 반환합니다.
/// 값이 없는 경우는 `Option<Self>`에 `map`/`and_then`을 적용하면 그대로 `None`이 전파됩니다.
pub trait StringTypedValue: TypedValue<Value = String> {
    /// 감싼 문자열을 `&str`로 반환합니다.
    fn as_str(&self) -> &str {
        self.value().as_str()
    }

    fn is_empty(&self) -> bool {
        self.value().is_empty()
    }

    fn is_blank(&self) -> bool {
        self.value().trim().is_empty()
    }

    fn to_upper_case(&self) -> Self {
        Self::of(self.value().to_uppercase())
    }

    fn to_lower_case(&self) -> Self {
        Self::of(self.value().to_lowercase())
    }

    fn trim(&self) -> Self {
        Self::of(self.value().trim().to_string())
    }

    /// 문자 단위 `[begin, end)` 구간을 잘라냅니다. 범위를 벗어나면 `None`입니다.
    fn substring(&self, begin: usize, end: usize) -> Option<Self> {
        let len = self.value().chars().count();
        if begin > end || end > len {
            return None;
        }
        let sliced: String = self.value().chars().skip(begin).take(end - begin).collect();
        Some(Self::of(sliced))
    }

    fn replace(&self, from: &str, to: &str) -> Self {
        Self::of(self.value().replace(from, to))
    }

    fn contains(&self, needle: &str) -> bool {
        self.value().contains(needle)
    }

    fn starts_with(&self, prefix: &str) -> bool {
        self.value().starts_with(prefix)
    }
}

/// JSON 값의 종류 이름을 반환합니다 (에러 메시지용).
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "floating-point number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// 정수 문자열 파싱 (빈 값과 형식 오류를 구분)
pub(crate) fn parse_i64(raw: &str) -> Result<i64, InvalidReason> {
    if raw.is_empty() {
        return Err(InvalidReason::Empty);
    }
    if raw.trim().is_empty() {
        return Err(InvalidReason::Blank);
    }
    raw.parse::<i64>()
        .map_err(|e| InvalidReason::Malformed(format!("{:?} is not a valid integer ({})", raw, e)))
}

/// 문자열 식별자 파싱 (빈 값/공백 값 거부, 그 외에는 원문 유지)
pub(crate) fn parse_non_blank(raw: &str) -> Result<String, InvalidReason> {
    if raw.is_empty() {
        return Err(InvalidReason::Empty);
    }
    if raw.trim().is_empty() {
        return Err(InvalidReason::Blank);
    }
    Ok(raw.to_string())
}

/// 정수(`i64`) 기반 식별자에 `TypedValue`, `FromStr`, `Display`, 변환 trait을 구현합니다.
macro_rules! long_typed_value {
    ($t:ident, $name:literal) => {
        impl $crate::domain::values::TypedValue for $t {
            type Value = i64;
            const TYPE_NAME: &'static str = $name;
            const VALUE_KIND: &'static str = "integer";

            fn of(value: i64) -> Self {
                Self(value)
            }

            fn value(&self) -> &i64 {
                &self.0
            }

            fn into_value(self) -> i64 {
                self.0
            }

            fn parse_value(raw: &str) -> Result<i64, $crate::core::errors::InvalidReason> {
                $crate::domain::values::parse_i64(raw)
            }

            fn typed_from_json(value: &serde_json::Value) -> Option<i64> {
                value.as_i64()
            }
        }

        impl std::str::FromStr for $t {
            type Err = $crate::core::errors::AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::domain::values::TypedValue>::parse(s)
            }
        }

        impl std::fmt::Display for $t {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<$t> for i64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

/// 문자열 기반 식별자에 `TypedValue`, `StringTypedValue`, `FromStr`, 변환 trait을 구현합니다.
///
/// `Display`/`Debug`는 타입마다 노출 정책이 다르므로 (예: 토큰 마스킹) 직접 구현합니다.
macro_rules! string_typed_value {
    ($t:ident, $name:literal) => {
        impl $crate::domain::values::TypedValue for $t {
            type Value = String;
            const TYPE_NAME: &'static str = $name;
            const VALUE_KIND: &'static str = "string";

            fn of(value: String) -> Self {
                Self(value)
            }

            fn value(&self) -> &String {
                &self.0
            }

            fn into_value(self) -> String {
                self.0
            }

            fn parse_value(raw: &str) -> Result<String, $crate::core::errors::InvalidReason> {
                $crate::domain::values::parse_non_blank(raw)
            }

            fn typed_from_json(value: &serde_json::Value) -> Option<String> {
                value.as_str().map(str::to_string)
            }
        }

        impl $crate::domain::values::StringTypedValue for $t {}

        impl std::str::FromStr for $t {
            type Err = $crate::core::errors::AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::domain::values::TypedValue>::parse(s)
            }
        }

        impl TryFrom<String> for $t {
            type Error = $crate::core::errors::AppError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                <Self as $crate::domain::values::TypedValue>::parse(&value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

pub(crate) use long_typed_value;
pub(crate) use string_typed_value;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_i64_distinguishes_empty_blank_and_malformed() {
        assert_eq!(parse_i64("42"), Ok(42));
        assert_eq!(parse_i64("-1"), Ok(-1));
        assert_eq!(parse_i64(""), Err(InvalidReason::Empty));
        assert_eq!(parse_i64("   "), Err(InvalidReason::Blank));
        assert!(matches!(parse_i64("4x2"), Err(InvalidReason::Malformed(_))));
        assert!(matches!(parse_i64(" 42"), Err(InvalidReason::Malformed(_))));
    }

    #[test]
    fn test_parse_non_blank_keeps_original_text() {
        assert_eq!(parse_non_blank(" abc "), Ok(" abc ".to_string()));
        assert_eq!(parse_non_blank(""), Err(InvalidReason::Empty));
        assert_eq!(parse_non_blank("\t"), Err(InvalidReason::Blank));
    }

    #[test]
    fn test_json_kind_names() {
        assert_eq!(json_kind(&json!(null)), "null");
        assert_eq!(json_kind(&json!(true)), "boolean");
        assert_eq!(json_kind(&json!(3)), "integer");
        assert_eq!(json_kind(&json!(3.5)), "floating-point number");
        assert_eq!(json_kind(&json!([1])), "array");
        assert_eq!(json_kind(&json!({"a": 1})), "object");
    }
}
