//! 렌더 싱크 경계
//!
//! 엔진은 프레임 값만 내보내고, 실제 위젯 생성/갱신은 싱크 구현이 맡습니다.

use crate::core::engine::{BarSlot, LightsOutSlot};
use crate::core::visibility::Visibility;
use crate::models::button::ButtonRole;
use crate::models::runtime::Orientation;

/// 렌더 싱크가 받는 한 프레임: 슬롯 행과 그에 평행한 표시/점 매핑
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub slots: Vec<BarSlot>,
    pub visibility: Vec<Visibility>,
    pub lights_out: Vec<LightsOutSlot>,
    /// 네 기능이 모두 비활성일 때 바 바깥 터치 통과 (창 관리자용)
    pub slippery: bool,
    pub orientation: Orientation,
    /// 아이콘 틴트 색 (ARGB)
    pub tint: Option<u32>,
    /// 편집 모드 중에는 싱크가 클릭 핸들러 연결을 보류한다
    pub edit_mode: bool,
}

impl RenderFrame {
    /// 역할로 슬롯 위치 조회. 없으면 None (호출자는 no-op으로 처리).
    pub fn slot_with_role(&self, role: ButtonRole) -> Option<usize> {
        self.slots.iter().position(|s| s.role() == Some(role))
    }

    pub fn visibility_of(&self, role: ButtonRole) -> Option<Visibility> {
        self.slot_with_role(role).map(|i| self.visibility[i])
    }
}

/// 실제 위젯을 만들고 갱신하는 외부 협력자 경계
pub trait RenderSink {
    fn apply(&mut self, frame: RenderFrame);
}

/// 수신한 프레임을 순서대로 기록하는 싱크 (테스트/진단용)
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub frames: Vec<RenderFrame>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&RenderFrame> {
        self.frames.last()
    }
}

impl RenderSink for RecordingSink {
    fn apply(&mut self, frame: RenderFrame) {
        self.frames.push(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::{BarSlot, SlotWidth};
    use crate::models::button::{actions, ButtonSpec};

    fn frame_with(slots: Vec<BarSlot>, visibility: Vec<Visibility>) -> RenderFrame {
        let lights_out = crate::core::engine::lights_out(&slots);
        RenderFrame {
            slots,
            visibility,
            lights_out,
            slippery: false,
            orientation: Orientation::Portrait,
            tint: None,
            edit_mode: false,
        }
    }

    #[test]
    fn test_slot_with_role_lookup() {
        let frame = frame_with(
            vec![
                BarSlot::key(ButtonSpec::single(actions::BACK), SlotWidth::Key),
                BarSlot::key(ButtonSpec::single(actions::HOME), SlotWidth::Key),
            ],
            vec![Visibility::Visible, Visibility::Invisible],
        );
        assert_eq!(frame.slot_with_role(ButtonRole::Home), Some(1));
        // 없는 역할은 None — 호출자에게는 no-op
        assert_eq!(frame.slot_with_role(ButtonRole::ImeSwitch), None);
        assert_eq!(frame.visibility_of(ButtonRole::Home), Some(Visibility::Invisible));
    }

    #[test]
    fn test_recording_sink_keeps_order() {
        let mut sink = RecordingSink::new();
        sink.apply(frame_with(vec![], vec![]));
        sink.apply(frame_with(
            vec![BarSlot::spacer(SlotWidth::Menu)],
            vec![Visibility::Visible],
        ));
        assert_eq!(sink.frames.len(), 2);
        assert_eq!(sink.last().unwrap().slots.len(), 1);
    }
}
