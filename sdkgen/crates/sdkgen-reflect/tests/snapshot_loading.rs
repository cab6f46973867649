//! Loading registry snapshots from disk.

use std::io::Write;

use sdkgen_reflect::{Kind, Registry, RegistryError, RegistryIndex, TypeRegistry};
use tempfile::NamedTempFile;

const SNAPSHOT: &str = r#"{
    "objects": [
        {
            "index": 0,
            "name": "ENetRole",
            "kind": "enum",
            "members": [
                { "name": "ENetRole::ROLE_None", "value": 0 },
                { "name": "ENetRole::ROLE_Authority", "value": 3 },
                { "name": "ENetRole::ROLE_MAX", "value": 4 }
            ]
        },
        {
            "index": 4,
            "name": "Actor",
            "kind": "struct",
            "properties": [
                { "name": "Role", "size": 1, "kind": "enum", "enum_ref": 0, "underlying": { "size": 1 } },
                { "name": "Tags", "size": 16, "kind": "other" }
            ]
        },
        { "index": 9, "name": "/Script/Engine", "kind": "other" }
    ]
}"#;

#[test]
fn load_snapshot_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SNAPSHOT.as_bytes()).unwrap();

    let registry = Registry::load(file.path()).unwrap();
    assert_eq!(registry.len(), 3);
    assert_eq!(registry.index_bound(), 10);

    let kinds: Vec<_> = registry.descriptors().map(|d| d.kind_tag()).collect();
    assert_eq!(kinds, [Kind::Enum, Kind::Struct, Kind::Other]);

    let role = registry.descriptors().next().and_then(|d| d.as_enum()).unwrap();
    assert_eq!(role.index(), RegistryIndex(0));
    assert_eq!(role.members()[1].name, "ENetRole::ROLE_Authority");
    assert_eq!(role.members()[1].value, 3);
}

#[test]
fn missing_file_reports_path() {
    let err = Registry::load(std::path::Path::new("/nonexistent/registry.json")).unwrap_err();
    assert!(matches!(err, RegistryError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/registry.json"));
}

#[test]
fn malformed_snapshot_is_json_error() {
    let err = Registry::from_json_str(r#"{"objects": [{"index": 0}]}"#).unwrap_err();
    assert!(matches!(err, RegistryError::Json(_)));
}

#[test]
fn negative_member_values_survive_loading() {
    let json = r#"{"objects": [
        {"index": 2, "name": "ESigned", "kind": "enum",
         "members": [{"name": "ESigned::Low", "value": -1}]}
    ]}"#;
    let registry = Registry::from_json_str(json).unwrap();
    let signed = registry.descriptors().next().and_then(|d| d.as_enum()).unwrap();
    assert_eq!(signed.members()[0].value, -1);
}
