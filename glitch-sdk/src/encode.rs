//! JSON payload encoding.
//!
//! Each record is mapped onto a tree of borrowed, optional nodes and
//! serialized once. Field order is the declaration order below and is part
//! of the wire contract. Absent values (empty strings, zero counts, empty
//! collections) are skipped, and a section whose fields are all absent is
//! skipped entirely. `device` and `os` are the exceptions: they are always
//! present, possibly as `{}`.

use crate::error::SdkResult;
use glitch_types::{FingerprintComponents, FingerprintInstall, KeyboardLayout, PurchaseData};
use serde::Serialize;

#[derive(Serialize)]
struct FingerprintPayload<'a> {
    device: DeviceSection<'a>,
    os: OsSection<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    display: Option<DisplaySection<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hardware: Option<HardwareSection<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    environment: Option<EnvironmentSection<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    desktop_data: Option<DesktopSection<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    keyboard_layout: Option<&'a KeyboardLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    identifiers: Option<IdentifiersSection<'a>>,
}

#[derive(Serialize)]
struct DeviceSection<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    device_type: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    manufacturer: Option<&'a str>,
}

#[derive(Serialize)]
struct OsSection<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'a str>,
}

#[derive(Serialize)]
struct DisplaySection<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    resolution: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    density: Option<u32>,
}

#[derive(Serialize)]
struct HardwareSection<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    cpu: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cores: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gpu: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    memory: Option<u32>,
}

#[derive(Serialize)]
struct EnvironmentSection<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timezone: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    region: Option<&'a str>,
}

/// User-Agent client hints; keys are camelCase to match the browser API.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DesktopSection<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    form_factors: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    architecture: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bitness: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    platform_version: Option<&'a str>,
    wow64: bool,
}

#[derive(Serialize)]
struct IdentifiersSection<'a> {
    advertising_id: &'a str,
}

#[derive(Serialize)]
struct InstallPayload<'a> {
    user_install_id: &'a str,
    platform: &'a str,
}

#[derive(Serialize)]
struct FingerprintInstallPayload<'a> {
    user_install_id: &'a str,
    platform: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    game_version: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    referral_source: Option<&'a str>,
    fingerprint_components: FingerprintPayload<'a>,
}

#[derive(Serialize)]
struct PurchasePayload<'a> {
    game_install_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    purchase_type: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    purchase_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    currency: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    transaction_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    item_sku: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    item_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    quantity: Option<u32>,
}

fn text(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

fn count(value: u32) -> Option<u32> {
    (value > 0).then_some(value)
}

impl<'a> From<&'a FingerprintComponents> for FingerprintPayload<'a> {
    fn from(fp: &'a FingerprintComponents) -> Self {
        let display = (!fp.display_resolution.is_empty() || fp.display_density > 0).then(|| {
            DisplaySection {
                resolution: text(&fp.display_resolution),
                density: count(fp.display_density),
            }
        });

        let hardware = HardwareSection {
            cpu: text(&fp.cpu_model),
            cores: count(fp.cpu_cores),
            gpu: text(&fp.gpu_model),
            memory: count(fp.memory_mb),
        };
        let hardware = (hardware.cpu.is_some()
            || hardware.cores.is_some()
            || hardware.gpu.is_some()
            || hardware.memory.is_some())
        .then_some(hardware);

        let environment = EnvironmentSection {
            language: text(&fp.language),
            timezone: text(&fp.timezone),
            region: text(&fp.region),
        };
        let environment = (environment.language.is_some()
            || environment.timezone.is_some()
            || environment.region.is_some())
        .then_some(environment);

        let desktop_data = (!fp.form_factors.is_empty() || !fp.architecture.is_empty()).then(|| {
            DesktopSection {
                form_factors: (!fp.form_factors.is_empty()).then_some(fp.form_factors.as_slice()),
                architecture: text(&fp.architecture),
                bitness: text(&fp.bitness),
                platform_version: text(&fp.platform_version),
                wow64: fp.is_wow64,
            }
        });

        Self {
            device: DeviceSection {
                model: text(&fp.device_model),
                device_type: text(&fp.device_type),
                manufacturer: text(&fp.device_manufacturer),
            },
            os: OsSection {
                name: text(&fp.os_name),
                version: text(&fp.os_version),
            },
            display,
            hardware,
            environment,
            desktop_data,
            keyboard_layout: (!fp.keyboard_layout.is_empty()).then_some(&fp.keyboard_layout),
            identifiers: text(&fp.advertising_id)
                .map(|advertising_id| IdentifiersSection { advertising_id }),
        }
    }
}

impl<'a> From<&'a PurchaseData> for PurchasePayload<'a> {
    fn from(purchase: &'a PurchaseData) -> Self {
        let amount = purchase.purchase_amount;
        Self {
            game_install_id: &purchase.game_install_id,
            purchase_type: text(&purchase.purchase_type),
            purchase_amount: (amount.is_finite() && amount > 0.0).then_some(amount),
            currency: text(&purchase.currency),
            transaction_id: text(&purchase.transaction_id),
            item_sku: text(&purchase.item_sku),
            item_name: text(&purchase.item_name),
            quantity: count(purchase.quantity),
        }
    }
}

/// Encodes a fingerprint as the `fingerprint_components` object.
///
/// # Errors
///
/// Returns [`SdkError::Serialization`](crate::SdkError::Serialization) if
/// serialization fails.
pub fn fingerprint_to_json(fingerprint: &FingerprintComponents) -> SdkResult<String> {
    Ok(serde_json::to_string(&FingerprintPayload::from(fingerprint))?)
}

/// Encodes a purchase event.
///
/// `game_install_id` always comes first. A non-blank `metadata_json` is
/// appended last as a raw JSON value, without validation.
///
/// # Errors
///
/// Returns [`SdkError::Serialization`](crate::SdkError::Serialization) if
/// serialization fails.
pub fn purchase_to_json(purchase: &PurchaseData) -> SdkResult<String> {
    let mut json = serde_json::to_string(&PurchasePayload::from(purchase))?;

    let metadata = purchase.metadata_json.trim();
    if !metadata.is_empty() {
        // game_install_id is always present, so the object is never empty.
        json.pop();
        json.push_str(",\"metadata\":");
        json.push_str(metadata);
        json.push('}');
    }

    Ok(json)
}

/// Encodes the body of a plain install record.
///
/// # Errors
///
/// Returns [`SdkError::Serialization`](crate::SdkError::Serialization) if
/// serialization fails.
pub fn install_to_json(user_install_id: &str, platform: &str) -> SdkResult<String> {
    Ok(serde_json::to_string(&InstallPayload {
        user_install_id,
        platform,
    })?)
}

/// Encodes the body of an install record with fingerprint data.
///
/// # Errors
///
/// Returns [`SdkError::Serialization`](crate::SdkError::Serialization) if
/// serialization fails.
pub fn fingerprint_install_to_json(install: &FingerprintInstall) -> SdkResult<String> {
    Ok(serde_json::to_string(&FingerprintInstallPayload {
        user_install_id: &install.user_install_id,
        platform: &install.platform,
        game_version: text(&install.game_version),
        referral_source: text(&install.referral_source),
        fingerprint_components: FingerprintPayload::from(&install.fingerprint),
    })?)
}
