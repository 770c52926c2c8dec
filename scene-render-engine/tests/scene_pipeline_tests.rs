//! Integration tests for the scene preparation pipeline

use std::collections::{HashMap, HashSet};

use bevy::math::Vec3;
use scene_render_engine::engine::assets::category_tables::{ModelCategoryMap, SemanticColourTable};
use scene_render_engine::engine::assets::scene_description::{
    SceneDescription, split_shapes_by_material,
};
use scene_render_engine::engine::scene::category::CategoryResolver;
use scene_render_engine::engine::scene::instance_palette::instance_palette;
use scene_render_engine::engine::scene::model_filter::{
    filter_blacklisted, filter_excluded_categories,
};
use scene_render_engine::engine::scene::scene_builder::build_scene;

const PALETTE_SEED: u64 = 17;

/// A three-object scene: a chair model, the ground and an inner wall.
fn demo_description() -> SceneDescription {
    serde_json::from_str(
        r#"{
            "shapes": [
                {
                    "name": "Model#5",
                    "faces": [
                        {
                            "material_id": 0,
                            "vertices": [
                                { "position": [0.0, 0.0, 0.0], "normal": [0.0, 1.0, 0.0], "texcoord": [0.0, 0.0] },
                                { "position": [1.0, 0.0, 0.0], "normal": [0.0, 1.0, 0.0], "texcoord": [1.0, 0.0] },
                                { "position": [0.0, 1.0, 0.0], "normal": [0.0, 1.0, 0.0], "texcoord": [0.0, 1.0] }
                            ]
                        }
                    ]
                },
                {
                    "name": "Ground",
                    "faces": [
                        {
                            "material_id": 1,
                            "vertices": [
                                { "position": [-5.0, 0.0, -5.0], "normal": [0.0, 1.0, 0.0], "texcoord": [0.0, 0.0] },
                                { "position": [5.0, 0.0, -5.0], "normal": [0.0, 1.0, 0.0], "texcoord": [1.0, 0.0] },
                                { "position": [5.0, 0.0, 5.0], "normal": [0.0, 1.0, 0.0], "texcoord": [1.0, 1.0] },
                                { "position": [-5.0, 0.0, 5.0], "normal": [0.0, 1.0, 0.0], "texcoord": [0.0, 1.0] }
                            ]
                        }
                    ]
                },
                {
                    "name": "WallInside#1",
                    "faces": [
                        {
                            "material_id": 1,
                            "vertices": [
                                { "position": [-5.0, 0.0, -5.0], "normal": [0.0, 0.0, 1.0], "texcoord": [0.0, 0.0] },
                                { "position": [5.0, 0.0, -5.0], "normal": [0.0, 0.0, 1.0], "texcoord": [1.0, 0.0] },
                                { "position": [5.0, 3.0, -5.0], "normal": [0.0, 0.0, 1.0], "texcoord": [1.0, 1.0] }
                            ]
                        }
                    ]
                }
            ],
            "materials": [
                {
                    "name": "chair_wood",
                    "diffuse": [0.6, 0.4, 0.2],
                    "ambient": [0.1, 0.1, 0.1],
                    "dissolve": 1.0,
                    "diffuse_texture": "wood.png"
                },
                {
                    "name": "flat",
                    "diffuse": [0.7, 0.7, 0.7],
                    "ambient": [0.1, 0.1, 0.1],
                    "dissolve": 1.0
                }
            ],
            "texture_dir": "textures"
        }"#,
    )
    .expect("demo scene should deserialize")
}

fn demo_resolver() -> CategoryResolver {
    let models = ModelCategoryMap {
        models: HashMap::from([("5".to_string(), "Chair".to_string())]),
    };
    let colours = SemanticColourTable {
        categories: HashMap::from([
            ("Chair".to_string(), [0.8, 0.1, 0.1]),
            ("Ground".to_string(), [0.2, 0.6, 0.2]),
            ("Wall".to_string(), [0.4, 0.4, 0.9]),
        ]),
        background: [0.0, 0.0, 0.0],
        unlabelled: None,
    };
    CategoryResolver::new(models, colours)
}

#[test]
fn test_semantic_scenario_produces_three_distinct_regions() {
    let description = demo_description();
    let resolver = demo_resolver();

    // Empty blacklist: nothing is filtered
    let shapes = split_shapes_by_material(description.indexed_shapes());
    let built = build_scene(
        shapes,
        &resolver,
        description.original_shape_count(),
        PALETTE_SEED,
    );

    assert_eq!(built.meshes.len(), 3);
    assert_eq!(built.meshes.len(), built.descriptors.len());

    // Each object carries the exact table colour of its category
    let labels: Vec<Vec3> = built.descriptors.iter().map(|d| d.label_colour).collect();
    assert_eq!(labels[0], Vec3::new(0.8, 0.1, 0.1));
    assert_eq!(labels[1], Vec3::new(0.2, 0.6, 0.2));
    assert_eq!(labels[2], Vec3::new(0.4, 0.4, 0.9));

    let unique: HashSet<[u32; 3]> = labels
        .iter()
        .map(|c| [c.x.to_bits(), c.y.to_bits(), c.z.to_bits()])
        .collect();
    assert_eq!(unique.len(), 3);
}

#[test]
fn test_instance_colours_survive_blacklist_filtering() {
    let description = demo_description();
    let resolver = demo_resolver();
    let original_shape_count = description.original_shape_count();

    let blacklist: HashSet<String> = HashSet::from(["Model#5".to_string()]);
    let mut shapes = description.indexed_shapes();
    filter_blacklisted(&mut shapes, &blacklist);
    filter_excluded_categories(&mut shapes, &resolver);
    let shapes = split_shapes_by_material(shapes);

    let built = build_scene(shapes, &resolver, original_shape_count, PALETTE_SEED);
    assert_eq!(built.meshes.len(), 2);

    // Ground kept original index 1, the wall index 2; their instance colours
    // equal the palette entries at those indices even though index 0 is gone.
    let palette = instance_palette(original_shape_count, PALETTE_SEED);
    assert_eq!(built.descriptors[0].instance_colour, palette[1]);
    assert_eq!(built.descriptors[1].instance_colour, palette[2]);
}

#[test]
fn test_bounds_cover_the_ground_plane() {
    let description = demo_description();
    let resolver = demo_resolver();

    let shapes = split_shapes_by_material(description.indexed_shapes());
    let built = build_scene(
        shapes,
        &resolver,
        description.original_shape_count(),
        PALETTE_SEED,
    );

    assert!(built.bounds.is_valid());
    assert!(built.bounds.min.cmple(built.bounds.max).all());
    assert_eq!(built.bounds.min, Vec3::new(-5.0, 0.0, -5.0));
    assert_eq!(built.bounds.max, Vec3::new(5.0, 3.0, 5.0));
}

#[test]
fn test_quad_faces_are_fanned_into_triangles() {
    let description = demo_description();
    let resolver = demo_resolver();

    let shapes = split_shapes_by_material(description.indexed_shapes());
    let built = build_scene(
        shapes,
        &resolver,
        description.original_shape_count(),
        PALETTE_SEED,
    );

    // The ground quad becomes two triangles
    assert_eq!(built.meshes[1].vertex_count(), 6);
}

#[test]
fn test_untextured_material_deserializes_empty() {
    let description = demo_description();
    assert_eq!(description.materials[0].diffuse_texture, "wood.png");
    assert!(description.materials[1].diffuse_texture.is_empty());
}
