//! 레이아웃 구성 저장소 — 스냅샷에서 Configuration 재구성
//!
//! 슬롯 하나가 깨져도 rebuild 전체를 중단하지 않고 해당 슬롯만 기본
//! 레이아웃으로 대체합니다. 원시 문자열을 직접 가져오지 않으며 부수 효과도
//! 없습니다 (Configuration 값 생산만 담당).

use crate::models::config::{Configuration, MAX_LAYOUTS};
use crate::models::layout::LayoutSet;
use crate::system::settings::SettingsSnapshot;

/// 기본 3버튼 레이아웃 (back / home / recents)
pub const DEFAULT_LAYOUT: &str =
    "back,null,null,null|home,null,null,null|recents,null,null,null";

/// IME 활성 중 기본 레이아웃 (뒤로가기 + 커서 이동 화살표)
pub const DEFAULT_IME_LAYOUT: &str =
    "back,null,null,null|arrow_left,null,null,null|arrow_right,null,null,null";

/// 스냅샷 전체를 반영한 새 Configuration 생성
///
/// `previous_index`는 직전 순환 위치로, 줄어든 레이아웃 수에 맞춰 보정된다.
pub fn rebuild(snapshot: &SettingsSnapshot, previous_index: usize) -> Configuration {
    let count = snapshot.layout_count.clamp(1, MAX_LAYOUTS);
    if count != snapshot.layout_count {
        log::warn!(
            "layout count {} out of range, clamped to {}",
            snapshot.layout_count,
            count
        );
    }

    let default_set = parse_or_empty(DEFAULT_LAYOUT);
    let mut layout_sets = Vec::with_capacity(count);
    for slot in 0..count {
        layout_sets.push(parse_slot(snapshot.layout_string(slot), slot, &default_set));
    }

    let ime_layout = match snapshot.ime_layout_string.as_deref() {
        Some(raw) => match LayoutSet::parse(raw) {
            Ok(set) => set,
            Err(e) => {
                log::warn!("IME layout fallback to default: {e}");
                parse_or_empty(DEFAULT_IME_LAYOUT)
            }
        },
        None => parse_or_empty(DEFAULT_IME_LAYOUT),
    };

    let mut config = Configuration {
        layout_sets,
        current_layout: previous_index,
        ime_layout,
        legacy_menu: snapshot.legacy_menu,
        ime_arrows: snapshot.ime_arrows,
        dpad_arrows: snapshot.dpad_arrows,
        long_press_timeout_ms: snapshot.long_press_timeout_ms,
    };
    config.clamp_current();
    config
}

fn parse_slot(raw: Option<&str>, slot: usize, default_set: &LayoutSet) -> LayoutSet {
    match raw {
        Some(raw) => match LayoutSet::parse(raw) {
            Ok(set) => set,
            Err(e) => {
                log::warn!("layout slot {} fallback to default: {e}", slot + 1);
                default_set.clone()
            }
        },
        None => default_set.clone(),
    }
}

// 기본 상수는 항상 파싱 가능. 만에 하나를 위해 빈 세트로 대체.
fn parse_or_empty(raw: &str) -> LayoutSet {
    LayoutSet::parse(raw).unwrap_or_default()
}
