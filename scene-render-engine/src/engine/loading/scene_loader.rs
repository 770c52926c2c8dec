use bevy::prelude::*;
use constants::path::{
    MODEL_BLACKLIST_FILE, MODEL_CATEGORY_FILE, RELATIVE_SCENE_PATH, SCENE_FILE,
    SEMANTIC_COLOUR_FILE,
};

use crate::engine::assets::category_tables::{ModelCategoryMap, SemanticColourTable};
use crate::engine::assets::scene_description::{SceneDescription, split_shapes_by_material};
use crate::engine::camera::viewport_camera::ViewportCamera;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::mesh::textured_mesh::create_scene_mesh;
use crate::engine::render_mode::{SceneObjectRecord, SceneObjects, SceneSettings};
use crate::engine::scene::category::CategoryResolver;
use crate::engine::scene::model_filter::{
    filter_blacklisted, filter_excluded_categories, load_blacklist,
};
use crate::engine::scene::scene_builder::build_scene;
use crate::engine::shaders::{SceneMeshShader, SceneShaderParams};

#[derive(Resource, Default)]
pub struct SceneLoader {
    scene: Option<Handle<SceneDescription>>,
    categories: Option<Handle<ModelCategoryMap>>,
    colours: Option<Handle<SemanticColourTable>>,
}

/// Start loading the scene description and both category tables
pub fn start_loading(mut loader: ResMut<SceneLoader>, asset_server: Res<AssetServer>) {
    let scene_path = format!("{RELATIVE_SCENE_PATH}/{SCENE_FILE}");
    println!("Loading scene description from: {scene_path}");

    loader.scene = Some(asset_server.load(&scene_path));
    loader.categories =
        Some(asset_server.load(format!("{RELATIVE_SCENE_PATH}/{MODEL_CATEGORY_FILE}")));
    loader.colours =
        Some(asset_server.load(format!("{RELATIVE_SCENE_PATH}/{SEMANTIC_COLOUR_FILE}")));
}

/// Run the preparation pipeline once all inputs are available: filter,
/// split, build, then spawn one entity per prepared mesh.
pub fn build_scene_when_ready(
    mut loading_progress: ResMut<LoadingProgress>,
    loader: Res<SceneLoader>,
    settings: Res<SceneSettings>,
    descriptions: Res<Assets<SceneDescription>>,
    category_maps: Res<Assets<ModelCategoryMap>>,
    colour_tables: Res<Assets<SemanticColourTable>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<SceneMeshShader>>,
    mut scene_objects: ResMut<SceneObjects>,
    asset_server: Res<AssetServer>,
    mut commands: Commands,
) {
    if loading_progress.scene_built {
        return;
    }

    let (Some(description), Some(categories), Some(colours)) = (
        loader.scene.as_ref().and_then(|h| descriptions.get(h)),
        loader.categories.as_ref().and_then(|h| category_maps.get(h)),
        loader.colours.as_ref().and_then(|h| colour_tables.get(h)),
    ) else {
        return;
    };

    println!("✓ Scene description and category tables loaded");
    let resolver = CategoryResolver::new(categories.clone(), colours.clone());

    let mut shapes = description.indexed_shapes();
    let original_shape_count = description.original_shape_count();

    if let Some(blacklist) = load_blacklist(MODEL_BLACKLIST_FILE) {
        filter_blacklisted(&mut shapes, &blacklist);
    }
    filter_excluded_categories(&mut shapes, &resolver);
    let shapes = split_shapes_by_material(shapes);

    println!(
        "Scene: {} shapes after filtering and splitting ({} in source), {} materials",
        shapes.len(),
        original_shape_count,
        description.materials.len()
    );

    let built = build_scene(shapes, &resolver, original_shape_count, settings.palette_seed);

    let mut records = Vec::with_capacity(built.descriptors.len());
    for (mesh_data, descriptor) in built.meshes.into_iter().zip(built.descriptors) {
        let record = description.materials[descriptor.material_id].clone();
        let textured = !record.diffuse_texture.is_empty();
        let diffuse_texture = textured
            .then(|| asset_server.load(texture_path(&description.texture_dir, &record.diffuse_texture)));

        let material = materials.add(SceneMeshShader {
            params: SceneShaderParams::lit(
                Vec3::from(record.diffuse),
                Vec3::from(record.ambient),
                record.dissolve,
                textured,
            ),
            diffuse_texture,
        });

        commands.spawn((
            Mesh3d(meshes.add(create_scene_mesh(mesh_data))),
            MeshMaterial3d(material.clone()),
            Transform::IDENTITY,
        ));

        records.push(SceneObjectRecord {
            material,
            descriptor,
            record,
            textured,
        });
    }

    if built.bounds.is_valid() {
        commands.insert_resource(ViewportCamera::with_bounds(&built.bounds));
    }
    commands.insert_resource(built.bounds);

    let background = resolver.background_colour();
    commands.insert_resource(ClearColor(Color::srgb(
        background.x,
        background.y,
        background.z,
    )));

    scene_objects.records = records;
    loading_progress.scene_built = true;
    println!("✓ Scene ready: {} mesh/material pairs", scene_objects.records.len());
}

fn texture_path(texture_dir: &str, texture_name: &str) -> String {
    if texture_dir.is_empty() {
        format!("{RELATIVE_SCENE_PATH}/{texture_name}")
    } else {
        format!("{RELATIVE_SCENE_PATH}/{texture_dir}/{texture_name}")
    }
}
