//! 전이 알림 — 단일 직렬화 이벤트 큐
//!
//! 모든 외부 이벤트(설정 변경, 방향 전환, IME 브로드캐스트)는 불변 이벤트
//! 값으로 하나의 큐에 올라가 도착 순서대로 처리됩니다. rebuild가 완전히
//! 끝나기 전에는 뒤따르는 cycle/가시성 계산이 새 Configuration을 관측하지
//! 않습니다 (부분 상태 노출 없음).

use crate::core::engine::CycleDirection;
use crate::models::runtime::{DisabledFlags, Orientation};
use crate::system::settings::SettingsSnapshot;
use std::sync::mpsc::{self, Receiver, Sender};

/// 현재 화면에 무엇이 표시 중인지 (전이 상태 기계의 상태)
///
/// 초기 상태는 `Layout(0)`, 종결 상태는 없다. `ImeOverlay`로 들어갈 때의
/// 인덱스는 Configuration이 기억하므로 토글 복귀 시 그대로 돌아온다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowingState {
    Layout(usize),
    ImeOverlay,
}

/// 협력자가 제출하는 외부 이벤트
#[derive(Debug, Clone, PartialEq)]
pub enum BarEvent {
    /// 설정 스냅샷 전체 교체 (rebuild 유발)
    SettingsChanged(SettingsSnapshot),
    OrientationChanged {
        orientation: Orientation,
        is_tablet: bool,
        is_rtl: bool,
    },
    ImeVisibility(bool),
    MenuRequested(bool),
    DisabledChanged(DisabledFlags),
    Cycle(CycleDirection),
    EditMode(bool),
    ScreenOn(bool),
}

/// 단일 소비자 이벤트 큐. 송신 핸들은 여러 협력자에게 복제해 줄 수 있다.
#[derive(Debug)]
pub struct EventQueue {
    tx: Sender<BarEvent>,
    rx: Receiver<BarEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    /// 외부 협력자에게 넘겨줄 송신 핸들
    pub fn sender(&self) -> Sender<BarEvent> {
        self.tx.clone()
    }

    pub fn push(&self, event: BarEvent) {
        // 수신단은 self가 소유하므로 전송은 실패하지 않는다
        let _ = self.tx.send(event);
    }

    /// 대기 중인 다음 이벤트. 비어 있으면 None (블로킹하지 않음).
    pub fn try_pop(&self) -> Option<BarEvent> {
        self.rx.try_recv().ok()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_preserves_arrival_order() {
        let queue = EventQueue::new();
        queue.push(BarEvent::MenuRequested(true));
        queue.push(BarEvent::ImeVisibility(true));
        queue.push(BarEvent::Cycle(CycleDirection::Next));

        assert_eq!(queue.try_pop(), Some(BarEvent::MenuRequested(true)));
        assert_eq!(queue.try_pop(), Some(BarEvent::ImeVisibility(true)));
        assert_eq!(
            queue.try_pop(),
            Some(BarEvent::Cycle(CycleDirection::Next))
        );
        assert_eq!(queue.try_pop(), None);
    }

    #[test]
    fn test_cloned_sender_feeds_same_queue() {
        let queue = EventQueue::new();
        let sender = queue.sender();
        sender.send(BarEvent::ScreenOn(false)).unwrap();
        assert_eq!(queue.try_pop(), Some(BarEvent::ScreenOn(false)));
    }
}
