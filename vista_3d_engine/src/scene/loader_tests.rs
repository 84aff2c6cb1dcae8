use super::*;
use glam::Vec3;
use crate::vista3d::Error;

fn descriptor(id: &str) -> AssetDescriptor {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "category": "model",
        "file": format!("{}.json", id),
        "scale": [1.0, 1.0, 1.0],
        "position": [0.0, 0.0, 0.0],
        "rotation": [0.0, 0.0, 0.0],
        "section": "home"
    }))
    .unwrap()
}

const TRIANGLE_DOC: &str = r#"{
    "meshes": [{
        "name": "tri",
        "positions": [[0,0,0],[1,0,0],[0,1,0]],
        "indices": [0,1,2],
        "material": {
            "name": "hull",
            "baseColor": [0.2, 0.4, 0.6],
            "metallic": 0.9,
            "roughness": 0.3
        }
    }]
}"#;

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_triangle_document() {
    let model = JsonModelLoader
        .parse(&descriptor("a"), TRIANGLE_DOC.as_bytes())
        .unwrap();

    assert_eq!(model.meshes.len(), 1);
    let mesh = &model.meshes[0];
    assert_eq!(mesh.name, "tri");
    assert_eq!(mesh.geometry.vertex_count(), 3);
    assert_eq!(mesh.geometry.triangle_count(), 1);
    assert_eq!(mesh.material.name, "hull");
    assert_eq!(mesh.material.base_color, Vec3::new(0.2, 0.4, 0.6));
    assert_eq!(mesh.material.metallic, 0.9);
    assert_eq!(mesh.material.roughness, 0.3);
}

#[test]
fn test_parse_mesh_without_material_gets_standard() {
    let doc = r#"{"meshes":[{"name":"bare","positions":[[0,0,0],[1,0,0],[0,1,0]],"indices":[0,1,2]}]}"#;
    let model = JsonModelLoader.parse(&descriptor("a"), doc.as_bytes()).unwrap();

    let material = &model.meshes[0].material;
    assert_eq!(material.name, "bare-material");
    assert_eq!(material.kind, MaterialKind::Pbr);
}

#[test]
fn test_parse_explicit_normals_kept() {
    let doc = r#"{"meshes":[{
        "name": "n",
        "positions": [[0,0,0],[1,0,0],[0,1,0]],
        "normals": [[0,0,1],[0,0,1],[0,0,1]],
        "indices": [0,1,2]
    }]}"#;
    let model = JsonModelLoader.parse(&descriptor("a"), doc.as_bytes()).unwrap();
    assert!(model.meshes[0].geometry.has_normals());
    assert_eq!(model.meshes[0].geometry.normals[0], Vec3::Z);
}

#[test]
fn test_parse_basic_material_kind() {
    let doc = r#"{"meshes":[{
        "name": "flat",
        "positions": [[0,0,0],[1,0,0],[0,1,0]],
        "indices": [0,1,2],
        "material": {"kind": "basic"}
    }]}"#;
    let model = JsonModelLoader.parse(&descriptor("a"), doc.as_bytes()).unwrap();
    assert_eq!(model.meshes[0].material.kind, MaterialKind::Basic);
}

#[test]
fn test_parse_partial_opacity_marks_transparent() {
    let doc = r#"{"meshes":[{
        "name": "glass",
        "positions": [[0,0,0],[1,0,0],[0,1,0]],
        "indices": [0,1,2],
        "material": {"opacity": 0.5}
    }]}"#;
    let model = JsonModelLoader.parse(&descriptor("a"), doc.as_bytes()).unwrap();
    assert_eq!(model.meshes[0].material.opacity, 0.5);
    assert!(model.meshes[0].material.transparent);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_parse_error_carries_asset_id() {
    let err = JsonModelLoader
        .parse(&descriptor("station-home"), b"not json")
        .unwrap_err();
    match err {
        Error::AssetParse { asset_id, .. } => assert_eq!(asset_id, "station-home"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_parse_rejects_empty_mesh_list() {
    let err = JsonModelLoader
        .parse(&descriptor("a"), br#"{"meshes":[]}"#)
        .unwrap_err();
    assert!(err.to_string().contains("no meshes"));
}

#[test]
fn test_parse_rejects_ragged_indices() {
    let doc = r#"{"meshes":[{"name":"bad","positions":[[0,0,0],[1,0,0],[0,1,0]],"indices":[0,1]}]}"#;
    let err = JsonModelLoader.parse(&descriptor("a"), doc.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("multiple of 3"));
}

#[test]
fn test_parse_rejects_out_of_range_index() {
    let doc = r#"{"meshes":[{"name":"bad","positions":[[0,0,0],[1,0,0],[0,1,0]],"indices":[0,1,9]}]}"#;
    let err = JsonModelLoader.parse(&descriptor("a"), doc.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("out of range"));
}
