//! 서버 및 실행 환경 설정 관리 모듈

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// 개발 환경 - 상세 로그
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let env = Environment::current();
    /// if env.is_development() {
    ///     println!("개발 환경");
    /// }
    /// ```
    pub fn current() -> Self {
        env::var("ENVIRONMENT")
            .map(|value| Self::from_str(&value))
            .unwrap_or(Environment::Production)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `s` - 환경 이름 문자열 (대소문자 무관)
    ///
    /// # Returns
    ///
    /// 해당하는 Environment 값. 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development | Environment::Test)
    }

    /// 환경별 기본 로그 필터 (`RUST_LOG`가 없을 때 사용)
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Environment::Development | Environment::Test => "debug,actix_web=debug",
            Environment::Staging | Environment::Production => "info,actix_web=debug",
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Returns
    ///
    /// 포트 번호. 기본값: 8080
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Returns
    ///
    /// 호스트 주소. 기본값: "0.0.0.0" (모든 인터페이스)
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str(" DEV "), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_default_log_filter_per_environment() {
        assert!(Environment::Development.is_development());
        assert!(!Environment::Production.is_development());
        assert_eq!(Environment::Production.default_log_filter(), "info,actix_web=debug");
        assert!(Environment::Test.default_log_filter().starts_with("debug"));
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }
}
