//! 타입 안전 식별자
//!
//! 요청 파이프라인 전체에서 사용하는 식별자 타입들입니다.
//! 모두 [`TypedValue`](crate::domain::values::TypedValue) 를 구현하며 JSON 직렬화 시 감싼 값 그대로 표현됩니다.
//!
//! | 타입 | 원시 값 | 비고 |
//! |------|---------|------|
//! | [`UserId`] | `i64` | `SYSTEM = 0`, `ANONYMOUS = -1`, 일반 사용자는 양수 |
//! | [`TraceId`] | `String` | 상관관계 추적 전용, 비즈니스 의미 없음 |
//! | [`Token`] | `String` | 불투명 인증 토큰, 로그 출력 시 마스킹 |
//! | [`DeviceId`] | `String` | 클라이언트 기기 식별자 |

use std::fmt;
use serde::{Deserialize, Serialize};
use crate::domain::values::{long_typed_value, string_typed_value};

/// 사용자 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

long_typed_value!(UserId, "UserId");

impl UserId {
    /// 시스템 내부 작업을 나타내는 예약 ID
    pub const SYSTEM: UserId = UserId(0);
    /// 인증되지 않은 사용자를 나타내는 예약 ID
    pub const ANONYMOUS: UserId = UserId(-1);

    pub fn is_system(&self) -> bool {
        *self == Self::SYSTEM
    }

    pub fn is_anonymous(&self) -> bool {
        *self == Self::ANONYMOUS
    }

    /// 실제 가입 사용자인지 확인합니다 (값 > 0).
    pub fn is_regular_user(&self) -> bool {
        self.0 > 0
    }
}

/// 요청 추적 ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TraceId(String);

string_typed_value!(TraceId, "TraceId");

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 기기 ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DeviceId(String);

string_typed_value!(DeviceId, "DeviceId");

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 인증 토큰
///
/// 만료 정보는 타입에 포함되지 않습니다 (인증 협력자가 별도 레코드로 관리).
/// `Debug`/`Display`는 긴 토큰의 앞 4글자만 노출하므로 로그에 원문이 남지 않습니다.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Token(String);

string_typed_value!(Token, "Token");

impl Token {
    /// 로그 출력용 마스킹 문자열
    ///
    /// 8글자 이하의 짧은 토큰은 앞부분도 노출하지 않습니다.
    pub fn masked(&self) -> String {
        if self.0.chars().count() <= 8 {
            return "****".to_string();
        }
        let visible: String = self.0.chars().take(4).collect();
        format!("{}****", visible)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Token").field(&self.masked()).finish()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use serde_json::json;
    use crate::core::errors::{AppError, InvalidReason};
    use crate::domain::values::{StringTypedValue, TypedValue};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_of_round_trips_value() {
        assert_eq!(*UserId::of(7).value(), 7);
        assert_eq!(TraceId::of("abc-123".to_string()).value(), "abc-123");
        assert_eq!(Token::of("tok".to_string()).into_value(), "tok");
    }

    #[test]
    fn test_user_id_sentinels() {
        assert!(UserId::of(0).is_system());
        assert!(UserId::of(5).is_regular_user());
        assert!(!UserId::of(-1).is_regular_user());
        assert!(UserId::of(-1).is_anonymous());
        assert!(!UserId::SYSTEM.is_regular_user());
    }

    #[test]
    fn test_from_str_parses_valid_and_rejects_invalid() {
        assert_eq!("42".parse::<UserId>().unwrap(), UserId::of(42));
        assert_eq!("-1".parse::<UserId>().unwrap(), UserId::ANONYMOUS);

        match "abc".parse::<UserId>() {
            Err(AppError::InvalidArgument { type_name, reason: InvalidReason::Malformed(_) }) => {
                assert_eq!(type_name, "UserId");
            }
            other => panic!("Expected malformed InvalidArgument, got {:?}", other),
        }

        assert_eq!(
            "".parse::<UserId>(),
            Err(AppError::invalid("UserId", InvalidReason::Empty))
        );
        assert_eq!(
            "  ".parse::<TraceId>(),
            Err(AppError::invalid("TraceId", InvalidReason::Blank))
        );
    }

    #[test]
    fn test_of_nullable_returns_none_for_none() {
        assert_eq!(UserId::of_nullable(None), None);
        assert_eq!(TraceId::of_nullable(None), None);
        assert_eq!(Token::of_nullable(None), None);
        assert_eq!(DeviceId::of_nullable(None), None);

        assert_eq!(UserId::from_json(&serde_json::Value::Null), Ok(None));
        assert_eq!(TraceId::from_json(&serde_json::Value::Null), Ok(None));
        assert_eq!(Token::from_json(&serde_json::Value::Null), Ok(None));
    }

    #[test]
    fn test_try_of_rejects_missing_value() {
        assert_eq!(
            UserId::try_of(None),
            Err(AppError::invalid("UserId", InvalidReason::Missing))
        );
        assert_eq!(UserId::try_of(Some(3)), Ok(UserId::of(3)));
    }

    #[test]
    fn test_from_json_accepts_typed_value_and_string() {
        assert_eq!(UserId::from_json(&json!(42)), Ok(Some(UserId::of(42))));
        assert_eq!(UserId::from_json(&json!("42")), Ok(Some(UserId::of(42))));
        assert_eq!(
            TraceId::from_json(&json!("T-1")),
            Ok(Some(TraceId::of("T-1".to_string())))
        );
    }

    #[test]
    fn test_from_json_rejects_unconvertible_types() {
        assert!(matches!(
            UserId::from_json(&json!(true)),
            Err(AppError::UnconvertibleType { type_name: "UserId", .. })
        ));
        assert!(matches!(
            UserId::from_json(&json!(1.5)),
            Err(AppError::UnconvertibleType { .. })
        ));
        assert!(matches!(
            Token::from_json(&json!({"token": "x"})),
            Err(AppError::UnconvertibleType { .. })
        ));
        assert!(matches!(
            UserId::from_json(&json!("12a")),
            Err(AppError::InvalidArgument { .. })
        ));
        assert!(matches!(
            UserId::require_json(&serde_json::Value::Null),
            Err(AppError::InvalidArgument { reason: InvalidReason::Missing, .. })
        ));
    }

    #[test]
    fn test_value_equality_and_hash() {
        let a = UserId::of(10);
        let b = "10".parse::<UserId>().unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(UserId::of(10), UserId::of(11));

        let t1 = Token::of("secret".to_string());
        let t2 = Token::of("secret".to_string());
        assert_eq!(t1, t2);
        assert_eq!(hash_of(&t1), hash_of(&t2));
        assert_ne!(t1, Token::of("Secret".to_string()));
    }

    #[test]
    fn test_serializes_as_bare_value() {
        assert_eq!(serde_json::to_string(&UserId::of(42)).unwrap(), "42");
        assert_eq!(
            serde_json::to_string(&TraceId::of("TRACE-9".to_string())).unwrap(),
            "\"TRACE-9\""
        );

        let restored: UserId = serde_json::from_str("42").unwrap();
        assert_eq!(restored, UserId::of(42));
        let restored: Token = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(restored.value(), "abc");
    }

    #[test]
    fn test_string_operations_return_new_instances() {
        let trace = TraceId::of("Trace-Abc".to_string());

        assert_eq!(trace.to_upper_case().value(), "TRACE-ABC");
        assert_eq!(trace.to_lower_case().value(), "trace-abc");
        assert_eq!(trace.replace("Abc", "xyz").value(), "Trace-xyz");
        assert_eq!(trace.substring(0, 5).unwrap().value(), "Trace");
        assert!(trace.substring(4, 20).is_none());
        assert!(trace.contains("-A"));
        assert_eq!(trace.value(), "Trace-Abc");

        assert!(TraceId::of("   ".to_string()).is_blank());
        assert!(TraceId::of(String::new()).is_empty());
        assert_eq!(DeviceId::of(" d1 ".to_string()).trim().value(), "d1");

        let absent: Option<TraceId> = None;
        assert!(absent.map(|t| t.to_upper_case()).is_none());
    }

    #[test]
    fn test_token_is_masked_in_logs() {
        let token = Token::of("abcdef123456".to_string());

        assert_eq!(token.to_string(), "abcd****");
        assert!(!format!("{:?}", token).contains("123456"));
        assert_eq!(token.value(), "abcdef123456");

        let short = Token::of("ab".to_string());
        assert_eq!(short.to_string(), "****");
        assert_eq!(format!("{:?}", short), "Token(\"****\")");
        assert_eq!(Token::of("abcd".to_string()).to_string(), "****");
        assert_eq!(Token::of("abcdefgh".to_string()).to_string(), "****");
    }

    #[test]
    fn test_deserialize_rejects_blank_string_ids() {
        assert!(serde_json::from_str::<TraceId>("\"   \"").is_err());
        assert!(serde_json::from_str::<Token>("\"\"").is_err());
        assert!(serde_json::from_str::<DeviceId>("\" \\t\"").is_err());

        let restored: TraceId = serde_json::from_str("\" T-1 \"").unwrap();
        assert_eq!(restored.value(), " T-1 ");
    }

    #[test]
    fn test_from_json_reports_out_of_range_integer_as_malformed() {
        assert!(matches!(
            UserId::from_json(&json!(u64::MAX)),
            Err(AppError::InvalidArgument { type_name: "UserId", reason: InvalidReason::Malformed(_) })
        ));
        assert!(matches!(
            UserId::from_json(&json!(u64::MAX.to_string())),
            Err(AppError::InvalidArgument { reason: InvalidReason::Malformed(_), .. })
        ));
        assert_eq!(UserId::from_json(&json!(i64::MAX)).unwrap(), Some(UserId::of(i64::MAX)));
    }
}
