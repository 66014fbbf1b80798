//! Render Tests - GPU Layout and Shader Validation
//!
//! Tests for the render module: uniform and vertex struct layout against the
//! WGSL side, shader source validation via naga, and the key binding map.

use glam::Mat4;
use heightfield_engine::input::{CameraAction, KeyBindings, KeyCode};
use heightfield_engine::render::uniforms::TerrainUniforms;
use heightfield_engine::terrain::TerrainVertex;
use heightfield_engine::viewer::ViewerConfig;

// ============================================================================
// TerrainUniforms Layout
// ============================================================================

#[test]
fn test_uniforms_are_two_mat4() {
    // Must stay 128 bytes to match the WGSL TerrainUniforms struct
    assert_eq!(std::mem::size_of::<TerrainUniforms>(), 128);
}

#[test]
fn test_uniforms_pack_column_major() {
    let mv = Mat4::from_scale(glam::Vec3::splat(2.0));
    let mvp = Mat4::IDENTITY;
    let uniforms = TerrainUniforms::new(mv, mvp);

    assert_eq!(uniforms.mv, mv.to_cols_array_2d());
    assert_eq!(uniforms.mvp, Mat4::IDENTITY.to_cols_array_2d());

    let bytes: &[u8] = bytemuck::bytes_of(&uniforms);
    assert_eq!(bytes.len(), 128);
}

// ============================================================================
// TerrainVertex Layout
// ============================================================================

#[test]
fn test_vertex_stride_is_eight_floats() {
    assert_eq!(std::mem::size_of::<TerrainVertex>(), 32);
}

#[test]
fn test_vertex_field_order_matches_attributes() {
    // The pipeline binds position at offset 0, tex coords at 12, normal at 20
    let vertex = TerrainVertex {
        position: [1.0, 2.0, 3.0],
        tex_coords: [4.0, 5.0],
        normal: [6.0, 7.0, 8.0],
    };
    let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&vertex));
    assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
}

// ============================================================================
// Shader Source
// ============================================================================

#[test]
fn test_terrain_shader_parses_and_validates() {
    let source = include_str!("../../shaders/terrain.wgsl");
    let module = naga::front::wgsl::parse_str(source).expect("terrain.wgsl should parse");

    naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    )
    .validate(&module)
    .expect("terrain.wgsl should validate");
}

#[test]
fn test_terrain_shader_declares_expected_bindings() {
    let source = include_str!("../../shaders/terrain.wgsl");
    assert!(source.contains("@group(0) @binding(0)"));
    assert!(source.contains("@group(0) @binding(1)"));
    assert!(source.contains("@group(0) @binding(2)"));
    assert!(source.contains("mvp"));
}

// ============================================================================
// Key Bindings
// ============================================================================

#[test]
fn test_default_bindings_cover_all_controls() {
    let bindings = KeyBindings::new();

    assert_eq!(bindings.action_for(KeyCode::Equal), Some(CameraAction::ZoomIn));
    assert_eq!(bindings.action_for(KeyCode::NumpadAdd), Some(CameraAction::ZoomIn));
    assert_eq!(bindings.action_for(KeyCode::Minus), Some(CameraAction::ZoomOut));
    assert_eq!(
        bindings.action_for(KeyCode::NumpadSubtract),
        Some(CameraAction::ZoomOut)
    );
    assert_eq!(bindings.action_for(KeyCode::W), Some(CameraAction::DollyForward));
    assert_eq!(
        bindings.action_for(KeyCode::ArrowUp),
        Some(CameraAction::DollyForward)
    );
    assert_eq!(bindings.action_for(KeyCode::S), Some(CameraAction::DollyBack));
    assert_eq!(
        bindings.action_for(KeyCode::ArrowDown),
        Some(CameraAction::DollyBack)
    );
    assert_eq!(bindings.action_for(KeyCode::A), Some(CameraAction::StrafeLeft));
    assert_eq!(bindings.action_for(KeyCode::D), Some(CameraAction::StrafeRight));
    assert_eq!(bindings.action_for(KeyCode::ArrowLeft), Some(CameraAction::YawLeft));
    assert_eq!(
        bindings.action_for(KeyCode::ArrowRight),
        Some(CameraAction::YawRight)
    );
}

// ============================================================================
// Viewer Defaults
// ============================================================================

#[test]
fn test_viewer_config_defaults_off() {
    let config = ViewerConfig::default();
    assert!(!config.auto_spin);
    assert_eq!(
        config.cell_order,
        heightfield_engine::terrain::CellOrder::RowMajor
    );
}
