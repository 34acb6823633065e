//! 레이아웃 세트 — 버튼 배열 하나의 파싱/직렬화
//!
//! 원본 설정 문자열 형식: `single,double,long,icon|single,double,long,icon|...`
//! 각 버튼 그룹은 정확히 4개 필드로 구성되며, 필드 수가 다르면 파싱 실패.

use crate::models::button::{ButtonRole, ButtonSpec};
use crate::utils::error::{Result, SoftbarError};

/// 버튼 그룹 구분자
pub const SET_SEPARATOR: char = '|';
/// 그룹 내 필드 구분자
pub const FIELD_SEPARATOR: char = ',';
/// 그룹당 필드 수 (single, double, long, icon-uri)
pub const FIELDS_PER_BUTTON: usize = 4;

/// 완전한 대체 레이아웃 하나를 이루는 순서 있는 버튼 목록
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LayoutSet {
    buttons: Vec<ButtonSpec>,
}

impl LayoutSet {
    /// 설정 문자열 파싱
    ///
    /// 마지막 필드(icon-uri)에 쉼표가 들어갈 수 있으므로 `splitn`으로
    /// 최대 4조각까지만 나눈다. 4개 미만이면 `SoftbarError::Parse`.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut buttons = Vec::new();
        for group in raw.split(SET_SEPARATOR) {
            let group = group.trim();
            let fields: Vec<&str> = group.splitn(FIELDS_PER_BUTTON, FIELD_SEPARATOR).collect();
            if fields.len() != FIELDS_PER_BUTTON {
                return Err(SoftbarError::Parse {
                    group: group.to_string(),
                    expected: FIELDS_PER_BUTTON,
                    found: fields.len(),
                });
            }
            buttons.push(ButtonSpec::from_fields(
                fields[0], fields[1], fields[2], fields[3],
            ));
        }
        Ok(Self { buttons })
    }

    pub fn from_buttons(buttons: Vec<ButtonSpec>) -> Self {
        Self { buttons }
    }

    /// 같은 구분자로 다시 직렬화. `parse(serialize(s)) == s` 가 성립한다.
    pub fn serialize(&self) -> String {
        self.buttons
            .iter()
            .map(ButtonSpec::serialize)
            .collect::<Vec<_>>()
            .join(&SET_SEPARATOR.to_string())
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ButtonSpec> {
        self.buttons.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ButtonSpec> {
        self.buttons.iter()
    }

    pub fn buttons(&self) -> &[ButtonSpec] {
        &self.buttons
    }

    /// 역할로 버튼 위치 조회. 없으면 None (호출자는 no-op으로 처리)
    pub fn position_of(&self, role: ButtonRole) -> Option<usize> {
        self.buttons.iter().position(|b| b.role() == role)
    }
}
