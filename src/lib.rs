//! softbar — 소프트키 내비게이션 바 레이아웃 결정 엔진
//!
//! 사용자 구성 버튼 레이아웃(최대 5개 대체 세트 + IME 전용 세트), 방향/폼팩터,
//! 입력기 상태, 기능 비활성화 비트에서 "무엇을 그릴지"를 결정하는 호스트
//! 독립적 코어입니다. 위젯 트리, 터치 디스패치, 설정 전달, 아이콘 해석은
//! 모두 외부 협력자이며 이벤트 값과 렌더 프레임으로만 연결됩니다.

pub mod bar;
pub mod core;
pub mod models;
pub mod system;
pub mod utils;

pub use crate::bar::NavigationBar;
pub use crate::core::engine::{BarSlot, CycleDirection, LightsOutSlot, SlotKind, SlotWidth};
pub use crate::core::notifier::{BarEvent, EventQueue, ShowingState};
pub use crate::core::visibility::{DpadOverride, Visibility};
pub use crate::models::button::{actions, ArrowSide, ButtonRole, ButtonSpec};
pub use crate::models::config::{Configuration, MAX_LAYOUTS};
pub use crate::models::layout::LayoutSet;
pub use crate::models::runtime::{Capability, DisabledFlags, Orientation, RuntimeState};
pub use crate::system::render::{RecordingSink, RenderFrame, RenderSink};
pub use crate::system::settings::{SettingsSnapshot, SettingsStore};
pub use crate::utils::error::{Result, SoftbarError};
