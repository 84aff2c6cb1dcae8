use super::*;
use glam::Vec3;

use crate::scene::{
    Geometry, Light, Material, MaterialKind, Mesh, NodeKind, Scene, SceneNode,
};

fn mesh_node(name: &str, material: Material) -> SceneNode {
    let mut geometry = Geometry::new(
        vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z],
        vec![0, 1, 2, 0, 2, 3],
    );
    geometry.compute_vertex_normals();
    SceneNode::new(name, NodeKind::Mesh(Mesh::new(geometry, material)))
}

// ============================================================================
// Model analysis
// ============================================================================

#[test]
fn test_analyze_model_counts_structure() {
    let mut scene = Scene::new();
    let root = scene.add_node(scene.root(), SceneNode::new("station", NodeKind::Group));
    scene.add_node(root, mesh_node("hull", Material::standard("paint")));
    let mut glow = Material::standard("glow");
    glow.emissive = Vec3::ONE;
    scene.add_node(root, mesh_node("window", glow));
    // Shared material name: still one unique material
    scene.add_node(root, mesh_node("hull-2", Material::standard("paint")));

    let report = DiagnosticInspector::analyze_model(&scene, root);
    assert_eq!(report.mesh_count, 3);
    assert_eq!(report.vertex_count, 12);
    assert_eq!(report.triangle_count, 6);
    assert_eq!(report.unique_materials, 2);
    assert_eq!(report.emissive_materials, 1);
}

#[test]
fn test_analyze_model_empty_subtree() {
    let mut scene = Scene::new();
    let root = scene.add_node(scene.root(), SceneNode::new("empty", NodeKind::Group));

    let report = DiagnosticInspector::analyze_model(&scene, root);
    assert_eq!(report.mesh_count, 0);
    assert_eq!(report.unique_materials, 0);
}

// ============================================================================
// Mesh verification
// ============================================================================

#[test]
fn test_verify_meshes_flags_missing_normals() {
    let mut scene = Scene::new();
    let bare = SceneNode::new(
        "bare",
        NodeKind::Mesh(Mesh::new(
            Geometry::new(vec![Vec3::ZERO, Vec3::X, Vec3::Y], vec![0, 1, 2]),
            Material::standard("m"),
        )),
    );
    scene.add_node(scene.root(), bare);

    let findings = DiagnosticInspector::verify_meshes(&scene, scene.root());
    assert_eq!(findings.len(), 1);
    assert!(findings[0].contains("bare"));
    assert!(findings[0].contains("normals"));
}

#[test]
fn test_verify_meshes_flags_unlit_materials() {
    let mut scene = Scene::new();
    let mut material = Material::standard("flat");
    material.kind = MaterialKind::Basic;
    scene.add_node(scene.root(), mesh_node("panel", material));

    let findings = DiagnosticInspector::verify_meshes(&scene, scene.root());
    assert_eq!(findings.len(), 1);
    assert!(findings[0].contains("unlit"));
}

#[test]
fn test_verify_meshes_clean_scene_has_no_findings() {
    let mut scene = Scene::new();
    scene.add_node(scene.root(), mesh_node("ok", Material::standard("m")));
    assert!(DiagnosticInspector::verify_meshes(&scene, scene.root()).is_empty());
}

// ============================================================================
// Lighting analysis
// ============================================================================

#[test]
fn test_analyze_lighting_census() {
    let mut scene = Scene::new();
    scene.add_node(
        scene.root(),
        SceneNode::new("a", NodeKind::Light(Light::ambient(Vec3::ONE, 0.4))),
    );
    scene.add_node(
        scene.root(),
        SceneNode::new(
            "d",
            NodeKind::Light(Light::directional_from(
                Vec3::new(5.0, 10.0, 7.0),
                Vec3::ONE,
                0.8,
            )),
        ),
    );
    scene.add_node(
        scene.root(),
        SceneNode::new(
            "h",
            NodeKind::Light(Light::hemisphere(Vec3::ONE, Vec3::ZERO, 0.15)),
        ),
    );

    let report = DiagnosticInspector::analyze_lighting(&scene);
    assert_eq!(report.ambient_count, 1);
    assert_eq!(report.directional_count, 1);
    assert_eq!(report.hemisphere_count, 1);
    assert_eq!(report.light_count(), 3);
    assert!((report.total_intensity - 1.35).abs() < 1e-6);
}

#[test]
fn test_analyze_lighting_empty_scene() {
    let report = DiagnosticInspector::analyze_lighting(&Scene::new());
    assert_eq!(report.light_count(), 0);
    assert_eq!(report.total_intensity, 0.0);
}
