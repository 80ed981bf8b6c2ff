//! 라우트 분류 테이블
//!
//! 경로 패턴과 분류의 쌍을 고정된 순서로 평가하여 경로를 분류합니다.
//! 웹 프레임워크의 미들웨어 훅과 무관한 순수 데이터 구조입니다.

/// 경로 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// 정적 자산, API 프록시, 파일 경로: 평가 없이 통과
    Bypass,
    /// 유효한 세션 자격 증명이 필요한 경로
    Protected,
    /// 누구나 접근 가능한 경로
    Public,
}

/// 경로 패턴
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPattern {
    /// 정확히 일치
    Exact(String),
    /// 자기 자신 또는 하위 경로 (`/orders`, `/orders/42`; `/orders-old`는 제외)
    Prefix(String),
    /// 마지막 경로 세그먼트에 확장자가 있는 경우 (`/logo.png`)
    FileExtension,
}

impl PathPattern {
    pub fn exact(path: &str) -> Self {
        PathPattern::Exact(path.to_string())
    }

    pub fn prefix(path: &str) -> Self {
        PathPattern::Prefix(path.trim_end_matches('/').to_string())
    }

    /// 경로가 패턴과 일치하는지 확인
    pub fn matches(&self, path: &str) -> bool {
        match self {
            PathPattern::Exact(p) => path == p,
            PathPattern::Prefix(p) => match path.strip_prefix(p.as_str()) {
                Some(rest) => rest.is_empty() || rest.starts_with('/'),
                None => false,
            },
            PathPattern::FileExtension => path
                .rsplit('/')
                .next()
                .and_then(|segment| segment.rfind('.'))
                .is_some_and(|dot| dot > 0),
        }
    }
}

/// (패턴, 분류) 규칙
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRule {
    pub pattern: PathPattern,
    pub class: RouteClass,
}

impl RouteRule {
    pub fn new(pattern: PathPattern, class: RouteClass) -> Self {
        Self { pattern, class }
    }
}

/// 순서가 있는 라우트 규칙 테이블
///
/// 첫 번째로 일치하는 규칙의 분류를 사용합니다.
/// 어떤 규칙에도 일치하지 않는 경로는 `None`(미분류)이며 접근이 허용됩니다.
#[derive(Debug, Clone)]
pub struct RouteTable {
    rules: Vec<RouteRule>,
}

impl RouteTable {
    pub fn new(rules: Vec<RouteRule>) -> Self {
        Self { rules }
    }

    /// 마켓플레이스 기본 라우트 테이블
    ///
    /// 1. 우회: 프레임워크 자산, API 프록시, 확장자가 있는 파일
    /// 2. 보호: 주문, 결제, 채팅, 프로필
    /// 3. 공개: 홈, 인증 화면, 서비스/파트너 목록, 안내 페이지
    pub fn marketplace() -> Self {
        use PathPattern as P;
        use RouteClass::*;

        let mut rules = vec![
            RouteRule::new(P::prefix("/_next"), Bypass),
            RouteRule::new(P::prefix("/static"), Bypass),
            RouteRule::new(P::prefix("/assets"), Bypass),
            RouteRule::new(P::prefix("/api"), Bypass),
            RouteRule::new(P::FileExtension, Bypass),
        ];

        for path in ["/orders", "/checkout", "/chat", "/profile"] {
            rules.push(RouteRule::new(P::prefix(path), Protected));
        }

        rules.push(RouteRule::new(P::exact("/"), Public));
        for path in [
            "/login",
            "/register",
            "/forgot-password",
            "/services",
            "/providers",
            "/about",
            "/help",
            "/terms",
            "/privacy",
        ] {
            rules.push(RouteRule::new(P::prefix(path), Public));
        }

        Self::new(rules)
    }

    /// 경로 분류. 일치하는 규칙이 없으면 `None`
    pub fn classify(&self, path: &str) -> Option<RouteClass> {
        self.rules
            .iter()
            .find(|rule| rule.pattern.matches(path))
            .map(|rule| rule.class)
    }
}

/// 분류 전에 경로를 정규화합니다.
///
/// 퍼센트 인코딩을 해제하고 연속된 `/`를 하나로 합칩니다. `//orders`와
/// `/%6Frders`는 모두 `/orders`로 분류되어야 합니다.
pub fn normalize_path(path: &str) -> String {
    let decoded = urlencoding::decode(path)
        .map(|p| p.into_owned())
        .unwrap_or_else(|_| path.to_string());

    let mut normalized = String::with_capacity(decoded.len());
    for ch in decoded.chars() {
        if ch == '/' && normalized.ends_with('/') {
            continue;
        }
        normalized.push(ch);
    }
    normalized
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::marketplace()
    }
}
