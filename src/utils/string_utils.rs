//! # 문자열 유틸리티
//!
//! 요청 헤더 값 처리와 관련된 공통 유틸리티 함수들입니다.

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
///
/// # 인자
/// * `value` - 확인할 문자열
///
/// # 반환값
/// * `true` - 유효한 문자열
/// * `false` - 빈 문자열이거나 공백만 있는 경우
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::is_valid_string;
///
/// assert_eq!(is_valid_string("Hello"), true);
/// assert_eq!(is_valid_string("   "), false);
/// assert_eq!(is_valid_string(""), false);
/// ```
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 헤더 값 정리
///
/// 값이 없거나 공백뿐이면 `None`, 그 외에는 원문을 그대로 반환합니다.
/// 헤더 값은 전달된 그대로 보존해야 하므로 trim하지 않습니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(non_blank(Some("abc")), Some("abc"));
/// assert_eq!(non_blank(Some("  ")), None);
/// assert_eq!(non_blank(None), None);
/// ```
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| is_valid_string(v))
}

/// `Bearer ` 접두사를 제거한 토큰 문자열을 반환합니다.
///
/// 접두사는 대소문자를 구분하지 않으며, 접두사가 없으면 원문을 반환합니다.
/// 접두사 제거 후 남은 값이 공백뿐이면 `None`입니다.
pub fn strip_bearer(value: &str) -> Option<&str> {
    let start = value.trim_start();
    let token = match start.get(..7) {
        Some(prefix) if prefix.eq_ignore_ascii_case("bearer ") => &start[7..],
        _ => start,
    }
    .trim();
    if token.is_empty() { None } else { Some(token) }
}

/// `Accept-Language` 헤더를 q 값 내림차순의 언어 태그 목록으로 변환합니다.
///
/// q 값이 없으면 1.0으로 간주하며, 같은 q 값끼리는 헤더에 나온 순서를 유지합니다.
/// `q=0`인 태그와 `*`는 제외됩니다. 파라미터 이름(`q`/`Q`)은 대소문자를 구분하지 않으며,
/// 유한하지 않거나 `0..=1` 범위를 벗어난 q 값도 `q=0`으로 취급합니다.
///
/// # 예제
/// ```rust,ignore
/// let tags = accept_language_tags("fr;q=0.5, ko-KR, en;q=0.8");
/// assert_eq!(tags, vec!["ko-KR", "en", "fr"]);
/// ```
pub fn accept_language_tags(header: &str) -> Vec<String> {
    let mut weighted: Vec<(f32, String)> = header
        .split(',')
        .filter_map(|part| {
            let mut pieces = part.split(';');
            let tag = pieces.next()?.trim();
            if tag.is_empty() || tag == "*" {
                return None;
            }
            let quality = pieces
                .filter_map(|param| {
                    let (name, value) = param.split_once('=')?;
                    name.trim().eq_ignore_ascii_case("q").then_some(value)
                })
                .next()
                .map(|q| q.trim().parse::<f32>().unwrap_or(0.0))
                .unwrap_or(1.0);
            // NaN, inf, 범위 밖 값은 q=0과 동일하게 취급
            if !quality.is_finite() || quality <= 0.0 || quality > 1.0 {
                return None;
            }
            Some((quality, tag.to_string()))
        })
        .collect();

    // sort_by는 stable 정렬이므로 동일 q 값의 원래 순서가 유지됨
    weighted.sort_by(|a, b| b.0.total_cmp(&a.0));
    weighted.into_iter().map(|(_, tag)| tag).collect()
}

/// User-Agent 문자열에서 브라우저 이름을 추정합니다.
///
/// 여러 브라우저 토큰이 함께 들어 있는 경우가 많으므로 (Edge UA에는 Chrome과 Safari가 포함됨)
/// 구체적인 토큰부터 검사합니다.
pub fn detect_browser(user_agent: &str) -> Option<&'static str> {
    const MARKERS: [(&str, &str); 7] = [
        ("edg/", "Edge"),
        ("opr/", "Opera"),
        ("samsungbrowser/", "Samsung Internet"),
        ("firefox/", "Firefox"),
        ("chrome/", "Chrome"),
        ("safari/", "Safari"),
        ("trident/", "Internet Explorer"),
    ];

    let ua = user_agent.to_lowercase();
    MARKERS
        .iter()
        .find(|(marker, _)| ua.contains(marker))
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_string() {
        assert!(is_valid_string("Hello"));
        assert!(is_valid_string("  World  "));
        assert!(!is_valid_string(""));
        assert!(!is_valid_string("   "));
        assert!(!is_valid_string("\t\n"));
    }

    #[test]
    fn test_non_blank_keeps_original_value() {
        assert_eq!(non_blank(Some(" abc ")), Some(" abc "));
        assert_eq!(non_blank(Some("")), None);
        assert_eq!(non_blank(Some(" \t")), None);
        assert_eq!(non_blank(None), None);
    }

    #[test]
    fn test_strip_bearer() {
        assert_eq!(strip_bearer("Bearer abc.def"), Some("abc.def"));
        assert_eq!(strip_bearer("bearer   abc"), Some("abc"));
        assert_eq!(strip_bearer("abc"), Some("abc"));
        assert_eq!(strip_bearer("Bearer "), None);
        assert_eq!(strip_bearer("   "), None);
        // 한글 등 멀티바이트 문자가 접두사 위치에 와도 패닉하지 않음
        assert_eq!(strip_bearer("토큰값"), Some("토큰값"));
    }

    #[test]
    fn test_accept_language_tags_ordering() {
        assert_eq!(
            accept_language_tags("fr;q=0.5, ko-KR, en;q=0.8"),
            vec!["ko-KR".to_string(), "en".to_string(), "fr".to_string()]
        );
        assert_eq!(
            accept_language_tags("ko-KR,ko;q=0.9,en-US;q=0.8,en;q=0.7"),
            vec!["ko-KR", "ko", "en-US", "en"]
        );
        assert_eq!(accept_language_tags("*, de;q=0"), Vec::<String>::new());
        assert!(accept_language_tags("").is_empty());
    }

    #[test]
    fn test_accept_language_tags_q_parameter_name_ignores_case() {
        assert_eq!(accept_language_tags("fr;Q=0.5, de;q=0.7, ko"), vec!["ko", "de", "fr"]);
        assert_eq!(accept_language_tags("fr; Q = 0.2, en"), vec!["en", "fr"]);
    }

    #[test]
    fn test_accept_language_tags_drops_invalid_quality_values() {
        assert_eq!(
            accept_language_tags("fr;q=NaN, de;q=inf, es;q=1.5, ja;q=-0.3, it;q=-inf, ko;q=0.9, en"),
            vec!["en", "ko"]
        );

        let hostile: Vec<String> = (0..21)
            .map(|i| match i % 3 {
                0 => format!("l{};q=NaN", i),
                1 => format!("l{};q=0.{}", i, i % 10),
                _ => format!("l{}", i),
            })
            .collect();
        let tags = accept_language_tags(&hostile.join(", "));
        assert!(tags.iter().all(|tag| {
            let index: usize = tag[1..].parse().unwrap();
            index % 3 != 0
        }));
    }

    #[test]
    fn test_detect_browser() {
        let chrome = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";
        let edge = "Mozilla/5.0 (Windows NT 10.0) AppleWebKit/537.36 Chrome/120.0 Safari/537.36 Edg/120.0";
        let firefox = "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0";
        let safari = "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_0) AppleWebKit/605.1.15 Version/17.0 Safari/605.1.15";

        assert_eq!(detect_browser(chrome), Some("Chrome"));
        assert_eq!(detect_browser(edge), Some("Edge"));
        assert_eq!(detect_browser(firefox), Some("Firefox"));
        assert_eq!(detect_browser(safari), Some("Safari"));
        assert_eq!(detect_browser("curl/8.4.0"), None);
    }
}
