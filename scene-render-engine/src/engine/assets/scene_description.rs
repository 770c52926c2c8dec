use std::collections::HashMap;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// One vertex of a face, already in world coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VertexData {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub texcoord: [f32; 2],
}

/// One face together with the material it is drawn with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaceData {
    pub material_id: usize,
    pub vertices: Vec<VertexData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeData {
    pub name: String,
    pub faces: Vec<FaceData>,
}

/// Material record as produced by the scene parser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialData {
    #[serde(default)]
    pub name: String,
    pub diffuse: [f32; 3],
    pub ambient: [f32; 3],
    pub dissolve: f32,
    /// Empty when the material is untextured
    #[serde(default)]
    pub diffuse_texture: String,
}

/// Complete parsed scene as a Bevy asset. Mirrors the JSON structure exactly.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath)]
pub struct SceneDescription {
    pub shapes: Vec<ShapeData>,
    pub materials: Vec<MaterialData>,
    /// Texture directory relative to the scene directory
    #[serde(default)]
    pub texture_dir: String,
}

/// Runtime shape. `original_index` is the shape's position in the unfiltered,
/// unsplit input list and stays stable through filtering and splitting, so it
/// can key the instance colour palette.
#[derive(Debug, Clone)]
pub struct Shape {
    pub name: String,
    pub original_index: usize,
    pub faces: Vec<FaceData>,
}

impl SceneDescription {
    /// Shape count before any filtering or splitting. Sizes the instance
    /// colour palette.
    pub fn original_shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Stamp each shape with its original index.
    pub fn indexed_shapes(&self) -> Vec<Shape> {
        self.shapes
            .iter()
            .enumerate()
            .map(|(index, shape)| Shape {
                name: shape.name.clone(),
                original_index: index,
                faces: shape.faces.clone(),
            })
            .collect()
    }
}

/// Split every shape into one shape per referenced material, preserving
/// first-seen material order. Afterwards all faces of a shape share a single
/// material id. Shapes without faces pass through unchanged so the scene
/// builder can reject them.
pub fn split_shapes_by_material(shapes: Vec<Shape>) -> Vec<Shape> {
    let mut result = Vec::with_capacity(shapes.len());
    for shape in shapes {
        if shape.faces.is_empty() {
            result.push(shape);
            continue;
        }

        let Shape {
            name,
            original_index,
            faces,
        } = shape;

        let mut order: Vec<usize> = Vec::new();
        let mut groups: HashMap<usize, Vec<FaceData>> = HashMap::new();
        for face in faces {
            if !groups.contains_key(&face.material_id) {
                order.push(face.material_id);
            }
            groups.entry(face.material_id).or_default().push(face);
        }

        for material_id in order {
            if let Some(faces) = groups.remove(&material_id) {
                result.push(Shape {
                    name: name.clone(),
                    original_index,
                    faces,
                });
            }
        }
    }
    result
}
