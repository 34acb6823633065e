//! 설정 제공자 경계
//!
//! 설정 제공자는 rebuild 한 번에 해당하는 원자적 스냅샷을 넘깁니다.
//! 부분 필드 갱신은 없으며, 엔진은 스냅샷 내용을 더 검증하지 않습니다.
//! 스냅샷은 TOML 파일로 저장/복원할 수 있습니다.

use crate::models::config::MAX_LAYOUTS;
use crate::utils::error::{Result, SoftbarError};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// 롱프레스 기본 타임아웃 (ms)
pub const DEFAULT_LONG_PRESS_TIMEOUT_MS: u32 = 500;

/// 설정 스냅샷. 최대 5개의 레이아웃 슬롯 문자열과 플래그 일체.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsSnapshot {
    /// 슬롯별 원시 레이아웃 문자열 (None이면 기본 레이아웃 사용)
    pub layout_strings: Vec<Option<String>>,
    /// 사용할 대체 레이아웃 수 (1~5, 범위 밖은 rebuild에서 보정)
    pub layout_count: usize,
    /// IME 활성 중 표시할 레이아웃 문자열
    pub ime_layout_string: Option<String>,
    pub legacy_menu: bool,
    pub ime_arrows: bool,
    pub dpad_arrows: bool,
    pub long_press_timeout_ms: u32,
    /// 아이콘 틴트 색 (ARGB), None이면 틴트 없음
    pub tint: Option<u32>,
}

impl Default for SettingsSnapshot {
    fn default() -> Self {
        Self {
            layout_strings: vec![None; MAX_LAYOUTS],
            layout_count: 1,
            ime_layout_string: None,
            legacy_menu: true,
            ime_arrows: false,
            dpad_arrows: false,
            long_press_timeout_ms: DEFAULT_LONG_PRESS_TIMEOUT_MS,
            tint: None,
        }
    }
}

impl SettingsSnapshot {
    /// 슬롯 인덱스의 원시 문자열. 범위 밖이면 None.
    pub fn layout_string(&self, index: usize) -> Option<&str> {
        self.layout_strings.get(index)?.as_deref()
    }
}

/// 저장 형식. TOML에는 null이 없으므로 비어 있는 슬롯은 빈 문자열로 기록.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedSettings {
    version: u32,
    layouts: Vec<String>,
    layout_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ime_layout: Option<String>,
    legacy_menu: bool,
    ime_arrows: bool,
    dpad_arrows: bool,
    long_press_timeout_ms: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tint: Option<u32>,
}

impl PersistedSettings {
    fn from_snapshot(snapshot: &SettingsSnapshot, version: u32) -> Self {
        Self {
            version,
            layouts: snapshot
                .layout_strings
                .iter()
                .map(|s| s.clone().unwrap_or_default())
                .collect(),
            layout_count: snapshot.layout_count,
            ime_layout: snapshot.ime_layout_string.clone(),
            legacy_menu: snapshot.legacy_menu,
            ime_arrows: snapshot.ime_arrows,
            dpad_arrows: snapshot.dpad_arrows,
            long_press_timeout_ms: snapshot.long_press_timeout_ms,
            tint: snapshot.tint,
        }
    }

    fn into_snapshot(self) -> SettingsSnapshot {
        let mut layout_strings: Vec<Option<String>> = self
            .layouts
            .into_iter()
            .map(|s| if s.is_empty() { None } else { Some(s) })
            .collect();
        layout_strings.resize(MAX_LAYOUTS, None);
        SettingsSnapshot {
            layout_strings,
            layout_count: self.layout_count,
            ime_layout_string: self.ime_layout,
            legacy_menu: self.legacy_menu,
            ime_arrows: self.ime_arrows,
            dpad_arrows: self.dpad_arrows,
            long_press_timeout_ms: self.long_press_timeout_ms,
            tint: self.tint,
        }
    }
}

/// 스냅샷의 TOML 파일 저장소
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    const VERSION: u32 = 1;

    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// 기본 저장 경로. `SOFTBAR_SETTINGS_FILE` 환경변수로 재정의 가능.
    pub fn default_path() -> Option<PathBuf> {
        if let Ok(custom) = env::var("SOFTBAR_SETTINGS_FILE") {
            let trimmed = custom.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        dirs::config_dir().map(|dir| dir.join("softbar").join("settings.toml"))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn save(&self, snapshot: &SettingsSnapshot) -> Result<()> {
        let payload = PersistedSettings::from_snapshot(snapshot, Self::VERSION);
        let data =
            toml::to_string_pretty(&payload).map_err(|e| SoftbarError::Config(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, data)?;
        Ok(())
    }

    pub fn load(&self) -> Result<SettingsSnapshot> {
        let data = fs::read_to_string(&self.path)?;
        let parsed: PersistedSettings =
            toml::from_str(&data).map_err(|e| SoftbarError::Config(e.to_string()))?;
        if parsed.version != Self::VERSION {
            return Err(SoftbarError::Config(format!(
                "unsupported settings version {}",
                parsed.version
            )));
        }
        Ok(parsed.into_snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_defaults() {
        let snapshot = SettingsSnapshot::default();
        assert_eq!(snapshot.layout_count, 1);
        assert!(snapshot.legacy_menu);
        assert_eq!(snapshot.layout_strings.len(), MAX_LAYOUTS);
        assert!(snapshot.layout_string(0).is_none());
        assert!(snapshot.layout_string(99).is_none());
    }

    #[test]
    fn test_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.toml"));

        let mut snapshot = SettingsSnapshot::default();
        snapshot.layout_count = 3;
        snapshot.layout_strings[0] = Some("back,null,null,null".to_string());
        snapshot.ime_layout_string = Some("arrow_left,null,null,null".to_string());
        snapshot.tint = Some(0xFF00_FF00);
        store.save(&snapshot).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn test_store_round_trip_with_empty_slots() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.toml"));

        // None 슬롯이 빈 문자열을 거쳐 그대로 돌아오는지
        let snapshot = SettingsSnapshot::default();
        store.save(&snapshot).unwrap();
        assert_eq!(store.load().unwrap(), snapshot);
    }

    #[test]
    fn test_store_rejects_unknown_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let store = SettingsStore::new(path.clone());
        store.save(&SettingsSnapshot::default()).unwrap();

        let data = fs::read_to_string(&path)
            .unwrap()
            .replace("version = 1", "version = 99");
        fs::write(&path, data).unwrap();

        assert!(store.load().is_err());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("missing.toml"));
        match store.load() {
            Err(SoftbarError::Io(_)) => {}
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
