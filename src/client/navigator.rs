//! 세션 만료 시 화면 전환 훅
//!
//! API 클라이언트는 화면을 직접 다루지 않고 [`SessionNavigator`]에 알림과 이동을 위임합니다.

use std::sync::RwLock;

use log::{info, warn};

use crate::domain::models::locale::Locale;

/// 세션 만료 알림 메시지
pub fn session_expired_message(locale: Locale) -> &'static str {
    match locale {
        Locale::Id => "Sesi Anda telah berakhir. Silakan masuk kembali.",
        Locale::En => "Your session has expired. Please log in again.",
    }
}

/// 화면 전환 인터페이스
pub trait SessionNavigator: Send + Sync {
    /// 현재 화면 경로
    fn current_path(&self) -> String;

    /// 세션 만료 알림 표시
    fn notify_session_expired(&self, message: &str);

    /// 지정한 경로로 이동
    fn redirect(&self, location: &str);
}

/// 이벤트를 로그로만 남기는 기본 구현
///
/// 현재 경로는 직접 갱신하며, `redirect` 시 이동한 경로로 바뀝니다.
#[derive(Debug)]
pub struct LoggingNavigator {
    current: RwLock<String>,
}

impl LoggingNavigator {
    pub fn new(initial_path: &str) -> Self {
        Self {
            current: RwLock::new(initial_path.to_string()),
        }
    }

    pub fn set_current_path(&self, path: &str) {
        if let Ok(mut current) = self.current.write() {
            *current = path.to_string();
        }
    }
}

impl Default for LoggingNavigator {
    fn default() -> Self {
        Self::new("/")
    }
}

impl SessionNavigator for LoggingNavigator {
    fn current_path(&self) -> String {
        self.current
            .read()
            .map(|p| p.clone())
            .unwrap_or_else(|_| "/".to_string())
    }

    fn notify_session_expired(&self, message: &str) {
        warn!("🔒 {}", message);
    }

    fn redirect(&self, location: &str) {
        info!("➡️ {} 으로 이동", location);
        self.set_current_path(location);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_navigator_tracks_redirects() {
        let navigator = LoggingNavigator::new("/orders");
        assert_eq!(navigator.current_path(), "/orders");

        navigator.redirect("/login");
        assert_eq!(navigator.current_path(), "/login");
    }

    #[test]
    fn test_session_expired_message_is_localized() {
        assert!(session_expired_message(Locale::Id).starts_with("Sesi"));
        assert!(session_expired_message(Locale::En).starts_with("Your session"));
    }
}
