pub mod textured_mesh;
