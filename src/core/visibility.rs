//! 가시성 / 비활성화 정책
//!
//! 비활성화된 시스템 기능 비트와 IME/메뉴 상태에서 버튼별 표시 상태를
//! 유도합니다. 결과 매핑을 실제 위젯에 적용하는 것은 호출자(협력자)의
//! 몫이며, 이 모듈은 매핑 생산 외의 부수 효과가 없습니다.

use crate::core::engine::{BarSlot, SlotKind};
use crate::models::button::ButtonRole;
use crate::models::runtime::{Capability, RuntimeState};

/// 표시 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Invisible,
    Gone,
}

/// dpad 화살표 오버라이드가 숨기기 직전 가시성을 기억하는 1칸 저장소
///
/// 스택이 아니라 단일 슬롯이다: 복원 전에 다시 숨기면 저장값을 덮어쓴다.
/// 원본과의 동작 일치를 위해 의도적으로 일반화하지 않았다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DpadOverride {
    saved_first: Option<Visibility>,
    saved_last: Option<Visibility>,
}

impl DpadOverride {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_active(&self) -> bool {
        self.saved_first.is_some() || self.saved_last.is_some()
    }
}

/// 슬롯 행 전체의 표시 상태 계산
///
/// 규칙 우선순위 (버튼 역할 기준, 먼저 맞는 규칙 적용):
/// 1. HOME: home 비활성 시 INVISIBLE
/// 2. BACK: back 비활성이어도 IME 표시 중이면 VISIBLE (IME 닫기 수단 유지)
/// 3. RECENTS: recents 비활성 시 INVISIBLE
/// 4. MENU: 메뉴 요청 중이고 IME가 없을 때만 VISIBLE
/// 5. IME 스위처: IME 표시 중일 때만 VISIBLE (dpad 오버라이드가 켜져 있으면 양보)
/// 6. dpad 오버라이드: 지정된 필러 두 개(처음/마지막 사용자 버튼)를 숨기고
///    이전 가시성을 저장, IME가 사라지면 정확히 복원 후 저장값 폐기
/// 7. 그 외 역할: recents 비활성 정책을 그대로 상속
pub fn compute(
    slots: &[BarSlot],
    runtime: &RuntimeState,
    dpad_arrows: bool,
    override_state: &mut DpadOverride,
) -> Vec<Visibility> {
    let disabled = &runtime.disabled;
    let mut result: Vec<Visibility> = slots
        .iter()
        .map(|slot| match slot.role() {
            None => Visibility::Visible, // 스페이서는 항상 자리 유지
            Some(ButtonRole::Home) => invisible_if(disabled.contains(Capability::Home)),
            Some(ButtonRole::Back) => {
                invisible_if(disabled.contains(Capability::Back) && !runtime.ime_visible)
            }
            Some(ButtonRole::Recents) => invisible_if(disabled.contains(Capability::Recents)),
            Some(ButtonRole::Menu) => {
                if runtime.menu_requested && !runtime.ime_visible {
                    Visibility::Visible
                } else {
                    Visibility::Invisible
                }
            }
            Some(ButtonRole::ImeSwitch) => {
                if runtime.ime_visible && !dpad_arrows {
                    Visibility::Visible
                } else {
                    Visibility::Invisible
                }
            }
            // blank / 화살표 / 사용자 지정 역할은 recents 정책 상속
            Some(_) => invisible_if(disabled.contains(Capability::Recents)),
        })
        .collect();

    if dpad_arrows {
        apply_dpad_override(slots, runtime, override_state, &mut result);
    }
    result
}

fn invisible_if(condition: bool) -> Visibility {
    if condition {
        Visibility::Invisible
    } else {
        Visibility::Visible
    }
}

/// 규칙 6: 필러 슬롯(처음/마지막 사용자 버튼) 숨김/복원
fn apply_dpad_override(
    slots: &[BarSlot],
    runtime: &RuntimeState,
    override_state: &mut DpadOverride,
    result: &mut [Visibility],
) {
    let first = slots.iter().position(BarSlot::is_key);
    let last = slots.iter().rposition(BarSlot::is_key);
    let (Some(first), Some(last)) = (first, last) else {
        return;
    };

    if runtime.ime_visible {
        // 복원 전에 다시 숨기면 덮어쓴다 (단일 슬롯 저장)
        override_state.saved_first = Some(result[first]);
        override_state.saved_last = Some(result[last]);
        result[first] = Visibility::Gone;
        result[last] = Visibility::Gone;
    } else {
        if let Some(saved) = override_state.saved_first.take() {
            result[first] = saved;
        }
        if let Some(saved) = override_state.saved_last.take() {
            result[last] = saved;
        }
    }
}
