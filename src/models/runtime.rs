//! 엔진이 소유하는 런타임 상태
//!
//! 외부 이벤트(방향 전환, IME 표시, 기능 비활성화)가 개별 필드를 갱신하며,
//! 각 갱신은 전체 재파싱 없이 표시 버튼 재계산만 유발합니다.

/// 화면 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// 비활성화될 수 있는 시스템 기능
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Home,
    Back,
    Recents,
    Search,
}

/// 비활성화된 기능 집합
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisabledFlags {
    home: bool,
    back: bool,
    recents: bool,
    search: bool,
}

impl DisabledFlags {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn set(&mut self, capability: Capability, disabled: bool) {
        match capability {
            Capability::Home => self.home = disabled,
            Capability::Back => self.back = disabled,
            Capability::Recents => self.recents = disabled,
            Capability::Search => self.search = disabled,
        }
    }

    /// 테스트/빌더 편의용
    pub fn with(mut self, capability: Capability) -> Self {
        self.set(capability, true);
        self
    }

    pub fn contains(&self, capability: Capability) -> bool {
        match capability {
            Capability::Home => self.home,
            Capability::Back => self.back,
            Capability::Recents => self.recents,
            Capability::Search => self.search,
        }
    }

    /// 네 기능이 모두 비활성화되면 바 바깥 터치를 통과시킨다 (창 관리자 협력자용)
    pub fn slippery(&self) -> bool {
        self.home && self.back && self.recents && self.search
    }
}

/// 엔진이 단독 소유하는 가변 상태. 협력자는 이벤트 값으로만 갱신을 요청한다.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeState {
    pub orientation: Orientation,
    pub is_tablet: bool,
    pub is_rtl: bool,
    pub ime_visible: bool,
    pub menu_requested: bool,
    pub disabled: DisabledFlags,
    /// IME 오버레이 표시 중 여부. 대체 레이아웃 순환과 상호 배타.
    pub showing_ime_overlay: bool,
    /// 편집(드래그 재배치) 모드 — 상태 비트만 유지
    pub edit_mode: bool,
    pub screen_on: bool,
}

impl Default for RuntimeState {
    fn default() -> Self {
        Self {
            orientation: Orientation::Portrait,
            is_tablet: false,
            is_rtl: false,
            ime_visible: false,
            menu_requested: false,
            disabled: DisabledFlags::none(),
            showing_ime_overlay: false,
            edit_mode: false,
            screen_on: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slippery_requires_all_four() {
        // 16개 조합 전수 검사
        for mask in 0u8..16 {
            let mut flags = DisabledFlags::none();
            flags.set(Capability::Home, mask & 1 != 0);
            flags.set(Capability::Back, mask & 2 != 0);
            flags.set(Capability::Recents, mask & 4 != 0);
            flags.set(Capability::Search, mask & 8 != 0);
            assert_eq!(flags.slippery(), mask == 15, "mask={mask:04b}");
        }
    }

    #[test]
    fn test_set_and_contains() {
        let mut flags = DisabledFlags::none();
        assert!(!flags.contains(Capability::Back));
        flags.set(Capability::Back, true);
        assert!(flags.contains(Capability::Back));
        flags.set(Capability::Back, false);
        assert!(!flags.contains(Capability::Back));
    }

    #[test]
    fn test_default_runtime_state() {
        let state = RuntimeState::default();
        assert_eq!(state.orientation, Orientation::Portrait);
        assert!(state.screen_on);
        assert!(!state.showing_ime_overlay);
    }
}
