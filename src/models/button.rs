//! 내비게이션 바 버튼 모델
//!
//! 버튼 하나의 액션 구성(단일/더블탭/롱프레스)과 의미상 역할(Role) 분류를
//! 담당합니다. 역할은 화면 위치가 아니라 단일 액션 식별자에서 유도됩니다.

/// 설정 문자열에 저장되는 잘 알려진 액션 토큰
pub mod actions {
    pub const BACK: &str = "back";
    pub const HOME: &str = "home";
    pub const RECENTS: &str = "recents";
    pub const MENU: &str = "menu";
    pub const IME_SWITCHER: &str = "ime_switcher";
    /// IME 오버레이 토글 (오버레이 표시 중 좌측 가장자리 버튼)
    pub const IME_LAYOUT: &str = "ime_layout";
    pub const LAYOUT_LEFT: &str = "layout_left";
    pub const LAYOUT_RIGHT: &str = "layout_right";
    pub const ARROW_LEFT: &str = "arrow_left";
    pub const ARROW_RIGHT: &str = "arrow_right";
    pub const ARROW_UP: &str = "arrow_up";
    pub const ARROW_DOWN: &str = "arrow_down";
    /// 자리만 차지하는 비활성 버튼
    pub const BLANK: &str = "blank";
    /// 액션 없음 (필드 자리 표시자)
    pub const NULL: &str = "null";
}

/// 레이아웃 전환 화살표 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowSide {
    Left,
    Right,
}

/// 버튼의 의미상 역할 (화면 위치와 무관)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonRole {
    Home,
    Back,
    Recents,
    Menu,
    ImeSwitch,
    LayoutArrow(ArrowSide),
    Blank,
    Custom,
}

/// 설정 가능한 버튼 하나. 파싱 이후 불변이며 필드 값으로 동등성을 판단.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonSpec {
    pub single_action: Option<String>,
    pub double_tap_action: Option<String>,
    pub long_press_action: Option<String>,
    pub icon_uri: Option<String>,
}

impl ButtonSpec {
    /// 설정 문자열의 4개 필드에서 버튼 생성 ("null"/공백은 액션 없음)
    pub fn from_fields(single: &str, double: &str, long: &str, icon: &str) -> Self {
        Self {
            single_action: normalize(single),
            double_tap_action: normalize(double),
            long_press_action: normalize(long),
            icon_uri: normalize(icon),
        }
    }

    /// 단일 액션만 갖는 버튼 (가장자리 전환 버튼 구성용)
    pub fn single(action: &str) -> Self {
        Self {
            single_action: Some(action.to_string()),
            double_tap_action: None,
            long_press_action: None,
            icon_uri: None,
        }
    }

    pub fn has_single_action(&self) -> bool {
        self.single_action.is_some()
    }

    pub fn has_double_action(&self) -> bool {
        self.double_tap_action.is_some()
    }

    pub fn has_long_action(&self) -> bool {
        self.long_press_action.is_some()
    }

    /// 단일 액션이 BLANK이면 비활성 스페이서로 취급:
    /// 클릭/롱프레스 핸들러를 받지 않고 lights-out 점 표시에서도 제외된다.
    pub fn is_blank(&self) -> bool {
        self.single_action.as_deref() == Some(actions::BLANK)
    }

    /// 방향키(dpad) 액션 여부 (터치 유지 시 반복 입력 대상)
    pub fn is_dpad(&self) -> bool {
        matches!(
            self.single_action.as_deref(),
            Some(actions::ARROW_LEFT)
                | Some(actions::ARROW_RIGHT)
                | Some(actions::ARROW_UP)
                | Some(actions::ARROW_DOWN)
        )
    }

    /// 단일 액션 토큰에서 역할 유도
    pub fn role(&self) -> ButtonRole {
        match self.single_action.as_deref() {
            Some(actions::HOME) => ButtonRole::Home,
            Some(actions::BACK) => ButtonRole::Back,
            Some(actions::RECENTS) => ButtonRole::Recents,
            Some(actions::MENU) => ButtonRole::Menu,
            Some(actions::IME_SWITCHER) | Some(actions::IME_LAYOUT) => ButtonRole::ImeSwitch,
            Some(actions::LAYOUT_LEFT) => ButtonRole::LayoutArrow(ArrowSide::Left),
            Some(actions::LAYOUT_RIGHT) => ButtonRole::LayoutArrow(ArrowSide::Right),
            Some(actions::BLANK) => ButtonRole::Blank,
            _ => ButtonRole::Custom,
        }
    }

    /// 설정 문자열 형식으로 직렬화 (없는 필드는 "null")
    pub fn serialize(&self) -> String {
        format!(
            "{},{},{},{}",
            field(&self.single_action),
            field(&self.double_tap_action),
            field(&self.long_press_action),
            field(&self.icon_uri),
        )
    }
}

fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == actions::NULL {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(actions::NULL)
}
