use bevy::prelude::*;

use crate::engine::assets::bounds::SceneBounds;
use crate::engine::assets::scene_description::{FaceData, Shape};
use crate::engine::scene::category::CategoryResolver;
use crate::engine::scene::instance_palette::instance_palette;

/// Render-ready material state for one prepared mesh. References the scene
/// description's material list by index rather than owning the record.
#[derive(Debug, Clone)]
pub struct MaterialDescriptor {
    pub material_id: usize,
    pub label_colour: Vec3,
    pub instance_colour: Vec3,
}

/// Flattened vertex buffers for one material's faces
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub texcoords: Vec<[f32; 2]>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}

pub struct BuiltScene {
    pub meshes: Vec<MeshData>,
    pub descriptors: Vec<MaterialDescriptor>,
    pub bounds: SceneBounds,
}

/// Convert filtered, split shapes into index-aligned mesh/descriptor tables
/// and the scene bounding box. Consumes the shape storage.
///
/// Preconditions, fatal when violated: every shape has at least one face and
/// all faces of a shape share one material id (established by splitting).
pub fn build_scene(
    shapes: Vec<Shape>,
    resolver: &CategoryResolver,
    original_shape_count: usize,
    palette_seed: u64,
) -> BuiltScene {
    let palette = instance_palette(original_shape_count, palette_seed);

    let mut meshes = Vec::with_capacity(shapes.len());
    let mut descriptors = Vec::with_capacity(shapes.len());
    let mut bounds = SceneBounds::new();

    for shape in shapes {
        assert!(!shape.faces.is_empty(), "shape {} has no faces", shape.name);
        let material_id = shape.faces[0].material_id;
        assert!(
            shape.faces.iter().all(|face| face.material_id == material_id),
            "shape {} spans multiple materials after splitting",
            shape.name
        );

        let label_colour = resolver.colour_of(&shape.name);
        let instance_colour = palette[shape.original_index];

        let mut mesh = MeshData::default();
        for face in &shape.faces {
            flatten_face(face, &mut mesh, &mut bounds);
        }

        descriptors.push(MaterialDescriptor {
            material_id,
            label_colour,
            instance_colour,
        });
        meshes.push(mesh);
    }

    assert_eq!(meshes.len(), descriptors.len(), "mesh/material tables diverged");
    BuiltScene {
        meshes,
        descriptors,
        bounds,
    }
}

/// Append one face to the flat buffers as a triangle fan, expanding the
/// bounds with every emitted vertex.
fn flatten_face(face: &FaceData, mesh: &mut MeshData, bounds: &mut SceneBounds) {
    for i in 2..face.vertices.len() {
        for vertex in [&face.vertices[0], &face.vertices[i - 1], &face.vertices[i]] {
            mesh.positions.push(vertex.position);
            mesh.normals.push(vertex.normal);
            mesh.texcoords.push(vertex.texcoord);
            bounds.update(Vec3::from(vertex.position));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::category_tables::{ModelCategoryMap, SemanticColourTable};
    use crate::engine::assets::scene_description::VertexData;
    use std::collections::HashMap;

    fn resolver() -> CategoryResolver {
        let colours = SemanticColourTable {
            categories: HashMap::from([
                ("Ground".to_string(), [0.2, 0.6, 0.2]),
                ("Wall".to_string(), [0.4, 0.4, 0.9]),
            ]),
            background: [0.0, 0.0, 0.0],
            unlabelled: None,
        };
        CategoryResolver::new(ModelCategoryMap::default(), colours)
    }

    fn triangle(material_id: usize, offset: f32) -> FaceData {
        let vertex = |x: f32, z: f32| VertexData {
            position: [x + offset, 0.0, z],
            normal: [0.0, 1.0, 0.0],
            texcoord: [0.0, 0.0],
        };
        FaceData {
            material_id,
            vertices: vec![vertex(0.0, 0.0), vertex(1.0, 0.0), vertex(0.0, 1.0)],
        }
    }

    fn shape(name: &str, original_index: usize, faces: Vec<FaceData>) -> Shape {
        Shape {
            name: name.to_string(),
            original_index,
            faces,
        }
    }

    #[test]
    fn test_tables_are_index_aligned() {
        let shapes = vec![
            shape("Ground", 0, vec![triangle(0, 0.0)]),
            shape("Wall#1", 1, vec![triangle(1, 2.0), triangle(1, 4.0)]),
        ];

        let built = build_scene(shapes, &resolver(), 2, 0);
        assert_eq!(built.meshes.len(), built.descriptors.len());
        assert_eq!(built.meshes[0].vertex_count(), 3);
        assert_eq!(built.meshes[1].vertex_count(), 6);
        assert_eq!(built.descriptors[1].material_id, 1);
    }

    #[test]
    fn test_bounds_cover_all_vertices() {
        let shapes = vec![
            shape("Ground", 0, vec![triangle(0, 0.0)]),
            shape("Wall#1", 1, vec![triangle(1, 4.0)]),
        ];

        let built = build_scene(shapes, &resolver(), 2, 0);
        assert!(built.bounds.is_valid());
        assert!(built.bounds.min.cmple(built.bounds.max).all());
        assert_eq!(built.bounds.max.x, 5.0);
    }

    #[test]
    fn test_instance_colour_survives_filtering() {
        // A shape with original index 2 keeps palette entry 2 even when the
        // shapes before it were filtered out.
        let seed = 11;
        let palette = instance_palette(3, seed);

        let shapes = vec![shape("Wall#1", 2, vec![triangle(0, 0.0)])];
        let built = build_scene(shapes, &resolver(), 3, seed);

        assert_eq!(built.descriptors[0].instance_colour, palette[2]);
    }

    #[test]
    fn test_empty_scene_has_invalid_bounds() {
        let built = build_scene(Vec::new(), &resolver(), 0, 0);
        assert!(built.meshes.is_empty());
        assert!(!built.bounds.is_valid());
    }

    #[test]
    #[should_panic(expected = "spans multiple materials")]
    fn test_mixed_materials_are_fatal() {
        let shapes = vec![shape("Wall#1", 0, vec![triangle(0, 0.0), triangle(1, 2.0)])];
        build_scene(shapes, &resolver(), 1, 0);
    }

    #[test]
    #[should_panic(expected = "has no faces")]
    fn test_zero_faces_are_fatal() {
        let shapes = vec![shape("Wall#1", 0, Vec::new())];
        build_scene(shapes, &resolver(), 1, 0);
    }
}
