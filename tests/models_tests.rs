// Payload decoding and property kind tests

use tvstatus::models::*;

#[test]
fn test_property_kind_round_trips_wire_names() {
    for kind in PropertyKind::ALL {
        let parsed: PropertyKind = kind.as_str().parse().unwrap();
        assert_eq!(parsed, kind);
    }
    assert_eq!(PropertyKind::WifiNetwork.to_string(), "WIFI_NETWORK");
    assert!("BATTERY".parse::<PropertyKind>().is_err());
}

#[test]
fn test_decode_device_payloads_camel_case() {
    let build = PropertyValue::from_json(
        PropertyKind::Build,
        serde_json::json!({ "model": "UA55", "platformVersion": "6.0" }),
    )
    .unwrap();
    assert_eq!(
        BuildInfo::try_from(build).unwrap().platform_version,
        "6.0"
    );

    let storage = PropertyValue::from_json(
        PropertyKind::Storage,
        serde_json::json!({
            "units": [
                { "type": "USB_HOST", "capacity": 64000, "availableCapacity": 1000, "isRemovable": true },
                { "type": "INTERNAL", "capacity": 8000, "availableCapacity": 2000 }
            ]
        }),
    )
    .unwrap();
    let storage = StorageInfo::try_from(storage).unwrap();
    let internal = storage.internal_unit().unwrap();
    assert_eq!(internal.available_capacity, 2000);
    assert!(!internal.is_removable);
}

#[test]
fn test_network_fields_optional() {
    let value =
        PropertyValue::from_json(PropertyKind::Network, serde_json::json!({ "networkType": "WIFI" }))
            .unwrap();
    let network = NetworkInfo::try_from(value).unwrap();
    assert_eq!(network.ip_address, None);
    assert_eq!(network.detail_kind(), Some(PropertyKind::WifiNetwork));

    let detail = PropertyValue::from_json(PropertyKind::EthernetNetwork, serde_json::json!({}))
        .unwrap();
    assert_eq!(
        NetworkDetail::try_from(detail).unwrap(),
        NetworkDetail::default()
    );
}

#[test]
fn test_detail_kind_only_for_wifi_and_ethernet() {
    let of = |t: &str| NetworkInfo {
        network_type: Some(t.into()),
        ip_address: None,
    };
    assert_eq!(of("ETHERNET").detail_kind(), Some(PropertyKind::EthernetNetwork));
    assert_eq!(of("4G").detail_kind(), None);
    assert_eq!(of("NONE").detail_kind(), None);
    assert_eq!(NetworkInfo::default().detail_kind(), None);
}

#[test]
fn test_value_kind_mismatch_is_query_error() {
    let err = CpuInfo::try_from(PropertyValue::Memory(MemoryInfo {
        capacity: 1,
        available_capacity: 1,
    }))
    .unwrap_err();
    assert!(err.message.contains("Cpu"));
}
