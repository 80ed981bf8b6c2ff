//! 단일 슬롯 토큰 갱신 조정자
//!
//! 클라이언트 인스턴스마다 하나씩 소유되며, 동시에 하나의 갱신만 진행되도록 보장합니다.
//! 갱신이 진행 중일 때 401을 받은 요청은 대기열에 추가되고,
//! 진행 중인 갱신의 결과(새 토큰 또는 실패 사유)로 함께 처리됩니다.
//!
//! ```text
//! acquire() ─┬─ 진행 중 아님 → Initiator(lease) ── resolve(token) / reject(reason)
//!            │                                          │
//!            └─ 진행 중     → Waiter(rx) ◄──────────────┘ (대기열 전체에 결과 전달)
//! ```
//!
//! 잠금은 대기열 조작 동안에만 잡히며 await 지점을 넘어 유지되지 않습니다.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::sync::oneshot;

/// 갱신 결과: 새 액세스 토큰 또는 실패 사유
pub type RefreshOutcome = Result<String, String>;

#[derive(Debug, Default)]
struct RefreshState {
    in_flight: bool,
    waiters: Vec<oneshot::Sender<RefreshOutcome>>,
}

/// 갱신 조정자
#[derive(Debug, Default)]
pub struct RefreshCoordinator {
    state: Mutex<RefreshState>,
}

/// `acquire` 결과
#[derive(Debug)]
pub enum RefreshTicket<'a> {
    /// 이 요청이 갱신을 수행해야 함
    Initiator(RefreshLease<'a>),
    /// 진행 중인 갱신의 결과를 기다려야 함
    Waiter(oneshot::Receiver<RefreshOutcome>),
}

impl RefreshCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 갱신 슬롯을 요청합니다.
    ///
    /// 진행 중인 갱신이 없으면 슬롯을 차지하고 `Initiator`를, 있으면 대기열에 추가하고
    /// `Waiter`를 반환합니다. 두 경우 모두 같은 잠금 안에서 결정됩니다.
    pub fn acquire(&self) -> RefreshTicket<'_> {
        let mut state = self.lock();
        if state.in_flight {
            let (tx, rx) = oneshot::channel();
            state.waiters.push(tx);
            RefreshTicket::Waiter(rx)
        } else {
            state.in_flight = true;
            RefreshTicket::Initiator(RefreshLease {
                coordinator: self,
                settled: false,
            })
        }
    }

    /// 갱신 진행 여부
    pub fn is_in_flight(&self) -> bool {
        self.lock().in_flight
    }

    /// 대기 중인 요청 수
    pub fn queued(&self) -> usize {
        self.lock().waiters.len()
    }

    /// 슬롯을 해제하고 대기열 전체에 결과를 전달합니다. 전달된 대기 요청 수를 반환합니다.
    fn settle(&self, outcome: RefreshOutcome) -> usize {
        let waiters = {
            let mut state = self.lock();
            state.in_flight = false;
            std::mem::take(&mut state.waiters)
        };

        let count = waiters.len();
        for waiter in waiters {
            // 시간 초과로 떠난 대기 요청은 수신자가 없음
            let _ = waiter.send(outcome.clone());
        }
        count
    }

    fn lock(&self) -> MutexGuard<'_, RefreshState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// 갱신 수행 권한
///
/// `resolve` 또는 `reject`로 정산되지 않고 drop되면(갱신 중인 future가 취소된 경우)
/// 대기열을 실패로 정산하여 슬롯이 영구히 잠기지 않도록 합니다.
#[derive(Debug)]
pub struct RefreshLease<'a> {
    coordinator: &'a RefreshCoordinator,
    settled: bool,
}

impl RefreshLease<'_> {
    /// 새 토큰으로 대기열을 해제합니다.
    pub fn resolve(mut self, access_token: String) -> usize {
        self.settled = true;
        self.coordinator.settle(Ok(access_token))
    }

    /// 실패 사유로 대기열을 거부합니다.
    pub fn reject(mut self, reason: String) -> usize {
        self.settled = true;
        self.coordinator.settle(Err(reason))
    }
}

impl Drop for RefreshLease<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.coordinator
                .settle(Err("토큰 갱신이 중단되었습니다".to_string()));
        }
    }
}
