// Presenter tests: per-category rendering and failure isolation

mod common;

use common::*;
use std::sync::Arc;
use tokio::time::Duration;
use tvstatus::models::PropertyKind;
use tvstatus::presenter::Presenter;
use tvstatus::surface::{SharedSurface, Target};

type TestPresenter = Presenter<ScriptedGateway, SharedSurface>;

fn presenter_with(
    gateway: ScriptedGateway,
) -> (TestPresenter, Arc<ScriptedGateway>, Arc<SharedSurface>) {
    let gateway = Arc::new(gateway);
    let surface = Arc::new(SharedSurface::new(64));
    (
        Presenter::new(gateway.clone(), surface.clone()),
        gateway,
        surface,
    )
}

fn text(surface: &SharedSurface, target: Target) -> Option<String> {
    surface.text(target)
}

#[tokio::test]
async fn test_static_info_success() {
    let (presenter, gateway, surface) = presenter_with(healthy_gateway());
    let cycle = presenter.fetch_static_info();
    assert_eq!(cycle.len(), 2);
    cycle.settled().await;

    assert_eq!(text(&surface, Target::ModelName).as_deref(), Some("QN65QN90"));
    assert_eq!(
        text(&surface, Target::PlatformVersion).as_deref(),
        Some("Platform: 7.0")
    );
    assert_eq!(
        text(&surface, Target::DisplayResolution).as_deref(),
        Some("3840 x 2160 px")
    );
    assert_eq!(gateway.call_count(PropertyKind::Build), 1);
    assert_eq!(gateway.call_count(PropertyKind::Cpu), 0);
}

#[tokio::test]
async fn test_static_info_failures_write_placeholders() {
    let gateway = healthy_gateway();
    gateway.set_error(PropertyKind::Build, "permission denied");
    gateway.set_error(PropertyKind::Display, "no display");
    let (presenter, _, surface) = presenter_with(gateway);
    presenter.fetch_static_info().settled().await;

    assert_eq!(
        text(&surface, Target::ModelName).as_deref(),
        Some("Build Info Error")
    );
    assert_eq!(text(&surface, Target::PlatformVersion), None);
    assert_eq!(
        text(&surface, Target::DisplayResolution).as_deref(),
        Some("Display Error")
    );
}

#[tokio::test]
async fn test_dynamic_cycle_renders_all_categories() {
    let (presenter, gateway, surface) = presenter_with(healthy_gateway());
    let cycle = presenter.update_dynamic_data();
    assert_eq!(cycle.len(), 4);
    cycle.settled().await;

    assert_eq!(text(&surface, Target::CpuLoad).as_deref(), Some("42%"));
    assert_eq!(surface.width(Target::CpuFill).as_deref(), Some("42%"));
    assert_eq!(
        text(&surface, Target::MemoryTotal).as_deref(),
        Some("16.00 GB Total")
    );
    assert_eq!(
        text(&surface, Target::MemoryAvailable).as_deref(),
        Some("8192 MB Free (50% Used)")
    );
    assert_eq!(
        text(&surface, Target::NetworkStatus).as_deref(),
        Some("Type: ETHERNET")
    );
    assert_eq!(
        text(&surface, Target::IpAddress).as_deref(),
        Some("IP: 192.168.1.20")
    );
    assert_eq!(
        text(&surface, Target::StorageAvailable).as_deref(),
        Some("125.0 GB Free (75% Used)")
    );
    assert_eq!(surface.width(Target::StorageFill).as_deref(), Some("75%"));
    // Address was on the primary result; no secondary query.
    assert_eq!(gateway.call_count(PropertyKind::EthernetNetwork), 0);
}

#[tokio::test]
async fn test_cpu_failure_resets_fill() {
    let (presenter, gateway, surface) = presenter_with(healthy_gateway());
    presenter.update_dynamic_data().settled().await;
    gateway.set_error(PropertyKind::Cpu, "busy");
    presenter.update_dynamic_data().settled().await;

    assert_eq!(text(&surface, Target::CpuLoad).as_deref(), Some("CPU Error"));
    assert_eq!(surface.width(Target::CpuFill).as_deref(), Some("0%"));
}

#[tokio::test]
async fn test_memory_failure_clears_secondary_target() {
    let (presenter, gateway, surface) = presenter_with(healthy_gateway());
    presenter.update_dynamic_data().settled().await;
    gateway.set_error(PropertyKind::Memory, "unavailable");
    presenter.update_dynamic_data().settled().await;

    assert_eq!(
        text(&surface, Target::MemoryTotal).as_deref(),
        Some("Memory Error")
    );
    assert_eq!(text(&surface, Target::MemoryAvailable).as_deref(), Some(""));
}

#[tokio::test]
async fn test_failure_leaves_other_categories_untouched() {
    let (presenter, gateway, surface) = presenter_with(healthy_gateway());
    presenter.update_dynamic_data().settled().await;
    let before = surface.snapshot();

    gateway.set_error(PropertyKind::Memory, "unavailable");
    gateway.set_value(PropertyKind::Cpu, cpu(0.9));
    presenter.update_dynamic_data().settled().await;
    let after = surface.snapshot();

    for target in [
        Target::NetworkStatus,
        Target::IpAddress,
        Target::StorageAvailable,
        Target::StorageFill,
    ] {
        assert_eq!(before.get(&target), after.get(&target), "{:?}", target);
    }
    assert_eq!(text(&surface, Target::CpuLoad).as_deref(), Some("90%"));
    assert_eq!(
        text(&surface, Target::MemoryTotal).as_deref(),
        Some("Memory Error")
    );
}

#[tokio::test]
async fn test_wifi_without_address_queries_detail() {
    let gateway = healthy_gateway();
    gateway.set_value(PropertyKind::Network, network(Some("WIFI"), None));
    gateway.set_value(PropertyKind::WifiNetwork, network_detail(Some("10.0.0.5")));
    let (presenter, gateway, surface) = presenter_with(gateway);
    presenter.update_dynamic_data().settled().await;

    assert_eq!(gateway.call_count(PropertyKind::WifiNetwork), 1);
    assert_eq!(
        text(&surface, Target::IpAddress).as_deref(),
        Some("IP: 10.0.0.5")
    );
    assert_eq!(
        text(&surface, Target::NetworkStatus).as_deref(),
        Some("Type: WIFI")
    );
}

#[tokio::test]
async fn test_wifi_detail_without_address_is_unknown() {
    let gateway = healthy_gateway();
    gateway.set_value(PropertyKind::Network, network(Some("WIFI"), None));
    gateway.set_value(PropertyKind::WifiNetwork, network_detail(None));
    let (presenter, _, surface) = presenter_with(gateway);
    presenter.update_dynamic_data().settled().await;

    assert_eq!(
        text(&surface, Target::IpAddress).as_deref(),
        Some("IP: Unknown")
    );
}

#[tokio::test]
async fn test_wifi_detail_failure_shows_api_error_marker() {
    let gateway = healthy_gateway();
    gateway.set_value(PropertyKind::Network, network(Some("WIFI"), None));
    gateway.set_error(PropertyKind::WifiNetwork, "wifi manager down");
    let (presenter, _, surface) = presenter_with(gateway);
    presenter.update_dynamic_data().settled().await;

    assert_eq!(
        text(&surface, Target::IpAddress).as_deref(),
        Some("IP: API Error")
    );
}

#[tokio::test]
async fn test_ethernet_detail_failure_keeps_status() {
    let gateway = healthy_gateway();
    gateway.set_value(PropertyKind::Network, network(Some("ETHERNET"), None));
    gateway.set_error(PropertyKind::EthernetNetwork, "ethernet manager down");
    let (presenter, gateway, surface) = presenter_with(gateway);
    presenter.update_dynamic_data().settled().await;

    assert_eq!(gateway.call_count(PropertyKind::EthernetNetwork), 1);
    assert_eq!(
        text(&surface, Target::IpAddress).as_deref(),
        Some("IP: API Error")
    );
    assert_eq!(
        text(&surface, Target::NetworkStatus).as_deref(),
        Some("Type: ETHERNET")
    );
}

#[tokio::test]
async fn test_cellular_without_address_not_connected() {
    let gateway = healthy_gateway();
    gateway.set_value(PropertyKind::Network, network(Some("NONE"), None));
    let (presenter, gateway, surface) = presenter_with(gateway);
    presenter.update_dynamic_data().settled().await;

    assert_eq!(
        text(&surface, Target::IpAddress).as_deref(),
        Some("Not Connected")
    );
    assert_eq!(gateway.call_count(PropertyKind::WifiNetwork), 0);
    assert_eq!(gateway.call_count(PropertyKind::EthernetNetwork), 0);
}

#[tokio::test]
async fn test_network_failure_writes_raw_message_to_address() {
    let gateway = healthy_gateway();
    gateway.set_error(PropertyKind::Network, "NotSupportedError: network");
    let (presenter, _, surface) = presenter_with(gateway);
    presenter.update_dynamic_data().settled().await;

    assert_eq!(
        text(&surface, Target::NetworkStatus).as_deref(),
        Some("Network Error")
    );
    assert_eq!(
        text(&surface, Target::IpAddress).as_deref(),
        Some("NotSupportedError: network")
    );
}

#[tokio::test]
async fn test_storage_not_found_keeps_previous_fill() {
    let (presenter, gateway, surface) = presenter_with(healthy_gateway());
    presenter.update_dynamic_data().settled().await;
    assert_eq!(surface.width(Target::StorageFill).as_deref(), Some("75%"));

    gateway.set_value(PropertyKind::Storage, storage(vec![unit("USB_HOST", 64_000, 1_000)]));
    presenter.update_dynamic_data().settled().await;

    assert_eq!(
        text(&surface, Target::StorageAvailable).as_deref(),
        Some("Internal Storage Not Found")
    );
    assert_eq!(surface.width(Target::StorageFill).as_deref(), Some("75%"));
}

#[tokio::test]
async fn test_storage_failure_resets_fill() {
    let (presenter, gateway, surface) = presenter_with(healthy_gateway());
    presenter.update_dynamic_data().settled().await;
    gateway.set_error(PropertyKind::Storage, "io error");
    presenter.update_dynamic_data().settled().await;

    assert_eq!(
        text(&surface, Target::StorageAvailable).as_deref(),
        Some("Storage Error")
    );
    assert_eq!(surface.width(Target::StorageFill).as_deref(), Some("0%"));
}

#[tokio::test]
async fn test_stalled_query_does_not_block_other_categories() {
    let gateway = healthy_gateway();
    gateway.set(PropertyKind::Cpu, Response::Pending);
    let (presenter, _, surface) = presenter_with(gateway);

    let cycle = presenter.update_dynamic_data();
    let settled = tokio::time::timeout(Duration::from_millis(200), cycle.settled()).await;
    assert!(settled.is_err(), "stalled CPU query should never settle");

    assert_eq!(text(&surface, Target::CpuLoad), None);
    assert_eq!(
        text(&surface, Target::MemoryTotal).as_deref(),
        Some("16.00 GB Total")
    );
    assert_eq!(
        text(&surface, Target::StorageAvailable).as_deref(),
        Some("125.0 GB Free (75% Used)")
    );
}
