//! Device diagnostics: a snapshot of firmware and hardware health of the
//! monitoring device (an ESP32 in the reference hardware).
//!
//! Field order mirrors the JSON the device emits, so serializing a snapshot
//! is byte-stable.

use serde::{Deserialize, Serialize};

/// Full diagnostics snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDiagnostics {
    pub build: BuildInfo,
    pub chip: ChipInfo,
    pub filesystem: FilesystemInfo,
    pub flash: FlashInfo,
    pub ram: RamInfo,
    /// Raw `esp_reset_reason_t` code of the last reboot.
    pub reboot_reason: u8,
    pub sketch: SketchInfo,
    pub spi: SpiInfo,
}

/// Firmware build identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInfo {
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChipInfo {
    pub cores: u8,
    #[serde(rename = "cpuFreqMHz")]
    pub cpu_freq_mhz: u32,
    pub cycle_count: u64,
    pub efuse_mac: u64,
    pub model: String,
    pub revision: u8,
    pub sdk_version: String,
    /// Internal die temperature in °C.
    pub temperature: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilesystemInfo {
    pub total_bytes: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub usage_percent: f64,
    pub used_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashInfo {
    pub flash_chip_mode: u8,
    pub flash_chip_real_size: u64,
    pub flash_chip_size: u64,
    #[serde(rename = "flashChipSpeedMHz")]
    pub flash_chip_speed_mhz: u32,
    /// Reported by the firmware as a number, not a version string.
    pub sdk_version: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RamInfo {
    pub free_heap: u64,
    pub heap_size: u64,
    pub max_alloc_heap: u64,
    pub min_free_heap: u64,
    pub usage_percent: f64,
}

/// Metrics of the running firmware image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SketchInfo {
    pub max_size: u64,
    pub md5: String,
    pub size: u64,
    pub usage_percent: f64,
}

/// External SPI PSRAM statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpiInfo {
    pub free_psram: u64,
    pub max_alloc_psram: u64,
    pub min_free_psram: u64,
    pub psram_size: u64,
}

impl DeviceDiagnostics {
    /// Snapshot of the reference ESP32-D0WDQ6 board.
    #[must_use]
    #[allow(clippy::unreadable_literal)]
    pub fn reference() -> Self {
        Self {
            build: BuildInfo {
                date: "Jul 30 2022".to_string(),
                time: "18:44:25".to_string(),
            },
            chip: ChipInfo {
                cores: 2,
                cpu_freq_mhz: 240,
                cycle_count: 2752759759,
                efuse_mac: 92372254712696,
                model: "ESP32-D0WDQ6".to_string(),
                revision: 1,
                sdk_version: "v4.4-dev-3569-g6a7d83af19-dirty".to_string(),
                temperature: 49.44444444,
            },
            filesystem: FilesystemInfo {
                total_bytes: 786432,
                kind: "LittleFS".to_string(),
                usage_percent: 68.75,
                used_bytes: 540672,
            },
            flash: FlashInfo {
                flash_chip_mode: 2,
                flash_chip_real_size: 4194304,
                flash_chip_size: 4194304,
                flash_chip_speed_mhz: 80,
                sdk_version: 4194304,
            },
            ram: RamInfo {
                free_heap: 129688,
                heap_size: 234856,
                max_alloc_heap: 65524,
                min_free_heap: 27424,
                usage_percent: 55.22022247,
            },
            reboot_reason: 3,
            sketch: SketchInfo {
                max_size: 1572864,
                md5: "5a7682ea68473bb5a654352ee6bf3049".to_string(),
                size: 1158320,
                usage_percent: 73.64399719,
            },
            spi: SpiInfo {
                free_psram: 0,
                max_alloc_psram: 0,
                min_free_psram: 0,
                psram_size: 0,
            },
        }
    }
}
