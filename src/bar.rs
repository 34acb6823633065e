//! 내비게이션 바 컨트롤러
//!
//! Configuration과 RuntimeState를 단독 소유하며, 협력자가 제출한 이벤트를
//! 도착 순서대로 하나씩 처리하고 매번 렌더 프레임을 내보냅니다. 상태가
//! 이미 일치하는 이벤트라도 렌더 요청은 생략하지 않습니다
//! (한 번의 상태 변경 후 무조건 렌더 — 중복 제거 최적화 아님).

use crate::core::engine::{self, CycleDirection};
use crate::core::notifier::{BarEvent, EventQueue, ShowingState};
use crate::core::store;
use crate::core::visibility::{self, DpadOverride};
use crate::models::config::Configuration;
use crate::models::runtime::RuntimeState;
use crate::system::render::{RenderFrame, RenderSink};
use crate::system::settings::SettingsSnapshot;
use std::sync::mpsc::Sender;

/// 내비게이션 바 상태 전체와 렌더 싱크를 묶는 컨트롤러
pub struct NavigationBar<S: RenderSink> {
    config: Configuration,
    runtime: RuntimeState,
    dpad_override: DpadOverride,
    queue: EventQueue,
    sink: S,
    tint: Option<u32>,
}

impl<S: RenderSink> NavigationBar<S> {
    /// 초기 스냅샷으로 구성하고 첫 프레임을 즉시 내보낸다
    pub fn new(snapshot: &SettingsSnapshot, sink: S) -> Self {
        let mut bar = Self {
            config: store::rebuild(snapshot, 0),
            runtime: RuntimeState::default(),
            dpad_override: DpadOverride::default(),
            queue: EventQueue::new(),
            sink,
            tint: snapshot.tint,
        };
        bar.render();
        bar
    }

    /// 협력자에게 넘겨줄 이벤트 송신 핸들
    pub fn sender(&self) -> Sender<BarEvent> {
        self.queue.sender()
    }

    /// 큐에 쌓인 이벤트를 도착 순서대로 모두 처리
    pub fn pump(&mut self) {
        while let Some(event) = self.queue.try_pop() {
            self.handle_event(event);
        }
    }

    /// 이벤트 하나를 동기 처리하고 렌더 프레임을 내보낸다
    pub fn handle_event(&mut self, event: BarEvent) {
        match event {
            BarEvent::SettingsChanged(snapshot) => self.apply_settings(&snapshot),
            BarEvent::OrientationChanged {
                orientation,
                is_tablet,
                is_rtl,
            } => {
                self.runtime.orientation = orientation;
                self.runtime.is_tablet = is_tablet;
                self.runtime.is_rtl = is_rtl;
            }
            BarEvent::ImeVisibility(visible) => self.apply_ime_visibility(visible),
            BarEvent::MenuRequested(requested) => {
                self.runtime.menu_requested = requested;
            }
            BarEvent::DisabledChanged(flags) => {
                self.runtime.disabled = flags;
            }
            BarEvent::Cycle(direction) => {
                engine::cycle(&mut self.config, &mut self.runtime, direction);
            }
            BarEvent::EditMode(editing) => {
                self.runtime.edit_mode = editing;
            }
            BarEvent::ScreenOn(on) => {
                self.runtime.screen_on = on;
            }
        }
        self.render();
    }

    /// 스냅샷 전체 반영: layout_sets를 통째로 교체하고 인덱스를 보정
    fn apply_settings(&mut self, snapshot: &SettingsSnapshot) {
        self.config = store::rebuild(snapshot, self.config.current_layout);
        self.tint = snapshot.tint;
        // 레이아웃이 새로 구성되므로 필러 저장값은 의미를 잃는다
        self.dpad_override.reset();
    }

    fn apply_ime_visibility(&mut self, visible: bool) {
        self.runtime.ime_visible = visible;
        // 화살표 오버레이 설정 시 IME 세션 시작/종료가 오버레이 토글을 겸한다
        if self.config.ime_arrows && visible != self.runtime.showing_ime_overlay {
            engine::cycle(&mut self.config, &mut self.runtime, CycleDirection::ImeToggle);
        }
    }

    fn render(&mut self) {
        let slots = engine::compose(&self.config, &self.runtime);
        let vis = visibility::compute(
            &slots,
            &self.runtime,
            self.config.dpad_arrows,
            &mut self.dpad_override,
        );
        let lights_out = engine::lights_out(&slots);
        self.sink.apply(RenderFrame {
            visibility: vis,
            lights_out,
            slippery: self.runtime.disabled.slippery(),
            orientation: self.runtime.orientation,
            tint: self.tint,
            edit_mode: self.runtime.edit_mode,
            slots,
        });
    }

    /// 현재 표시 상태 (전이 상태 기계 관점)
    pub fn showing(&self) -> ShowingState {
        if self.runtime.showing_ime_overlay {
            ShowingState::ImeOverlay
        } else {
            ShowingState::Layout(self.config.current_layout)
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn runtime(&self) -> &RuntimeState {
        &self.runtime
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
