//! 파싱된 레이아웃 구성 전체
//!
//! 설정 변경이 관측되면 rebuild로 통째로 교체되며, 부분 갱신은 없습니다.

use crate::models::layout::LayoutSet;

/// 대체 레이아웃 최대 개수
pub const MAX_LAYOUTS: usize = 5;

/// 레이아웃 슬롯들과 설정 플래그. `current_layout < layout_sets.len()` 불변식은
/// 항상 보정(clamp)으로 유지되고 오류로 표면화되지 않는다.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub layout_sets: Vec<LayoutSet>,
    pub current_layout: usize,
    /// 입력기 활성 중에만 쓰이는 별도 레이아웃
    pub ime_layout: LayoutSet,
    pub legacy_menu: bool,
    pub ime_arrows: bool,
    pub dpad_arrows: bool,
    pub long_press_timeout_ms: u32,
}

impl Configuration {
    pub fn layout_count(&self) -> usize {
        self.layout_sets.len()
    }

    /// 현재 인덱스를 유효 범위로 보정
    pub fn clamp_current(&mut self) {
        if self.current_layout >= self.layout_sets.len() {
            self.current_layout = self.layout_sets.len().saturating_sub(1);
        }
    }

    /// 현재 순환 위치의 레이아웃 (IME 오버레이와 무관)
    pub fn current_set(&self) -> &LayoutSet {
        &self.layout_sets[self.current_layout]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_sets(count: usize) -> Configuration {
        let set = LayoutSet::parse("home,null,null,null").unwrap();
        Configuration {
            layout_sets: vec![set.clone(); count],
            current_layout: 0,
            ime_layout: set,
            legacy_menu: true,
            ime_arrows: false,
            dpad_arrows: false,
            long_press_timeout_ms: 500,
        }
    }

    #[test]
    fn test_clamp_after_shrinking() {
        let mut config = config_with_sets(5);
        config.current_layout = 4;
        config.layout_sets.truncate(2);
        config.clamp_current();
        assert_eq!(config.current_layout, 1);
    }

    #[test]
    fn test_clamp_keeps_valid_index() {
        let mut config = config_with_sets(3);
        config.current_layout = 2;
        config.clamp_current();
        assert_eq!(config.current_layout, 2);
    }
}
