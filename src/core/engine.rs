//! 레이아웃 결정 엔진
//!
//! 현재 상태와 구성에서 "무엇을 그릴지"만 결정합니다. 위젯 생성/갱신은
//! 렌더 싱크 협력자의 몫이며, 이 모듈은 툴킷 타입을 일절 모릅니다.

use crate::models::button::{actions, ButtonRole, ButtonSpec};
use crate::models::config::Configuration;
use crate::models::layout::LayoutSet;
use crate::models::runtime::{Orientation, RuntimeState};

/// 레이아웃 전환 요청 방향
///
/// 수동 전환(좌/우 화살표)과 IME 오버레이 토글이 하나의 알림 채널을
/// 공유한다. 두 경우 모두 같은 재렌더 트리거로 모아 "지금 화면에 무엇이
/// 있는지"의 단일 진실 원천을 유지하기 위함. 기존 {-1, 0, +1} 인코딩과의
/// 호환을 위해 `from_delta`를 둔다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    Prev,
    ImeToggle,
    Next,
}

impl CycleDirection {
    pub fn from_delta(delta: i8) -> Self {
        match delta.signum() {
            -1 => CycleDirection::Prev,
            1 => CycleDirection::Next,
            _ => CycleDirection::ImeToggle,
        }
    }

    pub fn delta(&self) -> i8 {
        match self {
            CycleDirection::Prev => -1,
            CycleDirection::ImeToggle => 0,
            CycleDirection::Next => 1,
        }
    }
}

/// 슬롯 너비 등급. 실제 픽셀 값은 렌더 싱크가 결정한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotWidth {
    /// 사용자 구성 버튼 너비
    Key,
    /// 가장자리 레이아웃 체인저 너비
    Changer,
    /// 레거시 메뉴 키 너비
    Menu,
    /// 남는 공간을 나눠 갖는 유연 스페이서 (태블릿)
    Flexible,
}

/// 렌더링될 한 칸의 내용
#[derive(Debug, Clone, PartialEq)]
pub enum SlotKind {
    /// 사용자 구성 버튼
    Key(ButtonSpec),
    /// 가장자리 전환 버튼 (레이아웃 체인저 / 메뉴 / IME 스위처)
    Changer(ButtonSpec),
    /// 빈 공간
    Spacer,
}

/// 렌더링될 한 칸
#[derive(Debug, Clone, PartialEq)]
pub struct BarSlot {
    pub kind: SlotKind,
    pub width: SlotWidth,
}

impl BarSlot {
    pub fn key(spec: ButtonSpec, width: SlotWidth) -> Self {
        Self {
            kind: SlotKind::Key(spec),
            width,
        }
    }

    pub fn changer(spec: ButtonSpec, width: SlotWidth) -> Self {
        Self {
            kind: SlotKind::Changer(spec),
            width,
        }
    }

    pub fn spacer(width: SlotWidth) -> Self {
        Self {
            kind: SlotKind::Spacer,
            width,
        }
    }

    pub fn spec(&self) -> Option<&ButtonSpec> {
        match &self.kind {
            SlotKind::Key(spec) | SlotKind::Changer(spec) => Some(spec),
            SlotKind::Spacer => None,
        }
    }

    pub fn role(&self) -> Option<ButtonRole> {
        self.spec().map(ButtonSpec::role)
    }

    pub fn is_key(&self) -> bool {
        matches!(self.kind, SlotKind::Key(_))
    }
}

/// lights-out(축소 상태바) 표시에서 슬롯이 받는 자리
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightsOutSlot {
    /// 점 아이콘
    Dot,
    /// 빈 자리 표시자 (blank 버튼과 스페이서는 점을 받지 않음)
    Placeholder,
}

/// 현재 상태에서 렌더 대상 버튼 목록 선택
///
/// IME 오버레이 표시 중이면 전용 레이아웃, 아니면 현재 순환 위치 레이아웃.
pub fn select_buttons<'a>(config: &'a Configuration, runtime: &RuntimeState) -> &'a LayoutSet {
    if runtime.showing_ime_overlay {
        &config.ime_layout
    } else {
        config.current_set()
    }
}

/// 레이아웃 전환 상태 변경
///
/// `ImeToggle`은 `current_layout`을 건드리지 않고 오버레이만 토글한다.
/// `Prev`/`Next`는 순환 이동하며 항상 오버레이를 해제한다. 상태가 이미
/// 일치해도 호출자는 무조건 재렌더를 요청한다 (중복 제거 없음).
pub fn cycle(config: &mut Configuration, runtime: &mut RuntimeState, direction: CycleDirection) {
    match direction {
        CycleDirection::ImeToggle => {
            runtime.showing_ime_overlay = !runtime.showing_ime_overlay;
        }
        CycleDirection::Prev | CycleDirection::Next => {
            let count = config.layout_count() as isize;
            let next = config.current_layout as isize + direction.delta() as isize;
            config.current_layout = next.rem_euclid(count) as usize;
            runtime.showing_ime_overlay = false;
        }
    }
}

/// 가장자리 슬롯을 포함한 전체 버튼 행 구성
///
/// 좌측 가장자리 + 사용자 버튼 + 우측 가장자리 순으로 쌓는다.
/// 폰 가로 모드는 행이 아래→위로 쌓이므로 전체 순서를 뒤집는다
/// (태블릿은 가로에서도 읽기 순서 유지).
pub fn compose(config: &Configuration, runtime: &RuntimeState) -> Vec<BarSlot> {
    let multi = config.layout_count() > 1;
    let overlay = runtime.showing_ime_overlay;
    let mut slots = Vec::new();

    // 좌측 가장자리
    if multi {
        if config.ime_arrows && overlay {
            slots.push(BarSlot::changer(
                ButtonSpec::single(actions::IME_LAYOUT),
                SlotWidth::Changer,
            ));
        } else {
            slots.push(BarSlot::changer(
                ButtonSpec::single(actions::LAYOUT_LEFT),
                SlotWidth::Changer,
            ));
        }
    } else if config.legacy_menu {
        if config.ime_arrows {
            slots.push(BarSlot::changer(
                ButtonSpec::single(actions::IME_LAYOUT),
                SlotWidth::Menu,
            ));
        } else {
            slots.push(BarSlot::spacer(SlotWidth::Menu));
        }
        if runtime.is_tablet {
            slots.push(BarSlot::spacer(SlotWidth::Flexible));
        }
    }

    // 사용자 구성 버튼
    for spec in select_buttons(config, runtime).iter() {
        slots.push(BarSlot::key(spec.clone(), SlotWidth::Key));
    }

    // 우측 가장자리
    if config.legacy_menu && !multi {
        if runtime.is_tablet {
            slots.push(BarSlot::spacer(SlotWidth::Flexible));
        }
        let action = if config.ime_arrows && !runtime.menu_requested {
            actions::IME_SWITCHER
        } else {
            actions::MENU
        };
        slots.push(BarSlot::changer(ButtonSpec::single(action), SlotWidth::Menu));
    }
    if multi {
        if config.ime_arrows && overlay {
            slots.push(BarSlot::changer(
                ButtonSpec::single(actions::IME_SWITCHER),
                SlotWidth::Changer,
            ));
        } else {
            let action = if runtime.menu_requested {
                actions::MENU
            } else {
                actions::LAYOUT_RIGHT
            };
            slots.push(BarSlot::changer(
                ButtonSpec::single(action),
                SlotWidth::Changer,
            ));
        }
    }

    if runtime.orientation == Orientation::Landscape && !runtime.is_tablet {
        slots.reverse();
    }
    slots
}

/// 슬롯 행에 대응하는 lights-out 표시 결정
///
/// blank 버튼과 스페이서, 일시적으로만 보이는 메뉴 체인저는 점 대신
/// 빈 자리 표시자를 받는다.
pub fn lights_out(slots: &[BarSlot]) -> Vec<LightsOutSlot> {
    slots
        .iter()
        .map(|slot| match &slot.kind {
            SlotKind::Spacer => LightsOutSlot::Placeholder,
            SlotKind::Key(spec) if spec.is_blank() => LightsOutSlot::Placeholder,
            SlotKind::Changer(spec) if spec.role() == ButtonRole::Menu => {
                LightsOutSlot::Placeholder
            }
            _ => LightsOutSlot::Dot,
        })
        .collect()
}
