use cgmath::{InnerSpace, Point3, Vector3};
use cube_world::engine_state::rendering::meshing::{
    build_mesh, build_unculled_mesh, face, ChunkMesher, GeometryStrategy, MeshData,
    VertexAttributes,
};
use cube_world::engine_state::voxels::block::block_side::BlockSide;
use cube_world::engine_state::voxels::block::block_type::BlockType;
use cube_world::engine_state::voxels::chunk::{Chunk, ChunkDimensions, EdgePolicy};
use cube_world::error::VoxelError;

fn demo_chunk() -> Chunk {
    let mut chunk = Chunk::new(ChunkDimensions::new(16, 128, 16));
    chunk.fill_up_to_y(15, BlockType::DIRT);
    chunk
}

fn v(p: [f32; 3]) -> Vector3<f32> {
    Vector3::new(p[0], p[1], p[2])
}

#[test]
fn carving_the_demo_chunk_exposes_new_faces() {
    let mut mesher = ChunkMesher::new(demo_chunk(), GeometryStrategy::PerFace, EdgePolicy::Expose);

    // top 256 + bottom 256 + four walls of 16x15
    let before = mesher.generate_mesh_data().face_count();
    assert_eq!(before, 1472);
    assert!(!mesher.chunk().is_dirty());

    mesher.set_block(Point3::new(5, 14, 8), BlockType::AIR).unwrap();
    mesher.set_block(Point3::new(5, 14, 9), BlockType::AIR).unwrap();
    assert!(mesher.chunk().is_dirty());

    let mesh = mesher.generate_mesh_data();
    // two top faces gone, six walls and two floors opened
    assert_eq!(mesh.face_count(), 1478);
    assert_eq!(mesh.index_count(), 8868);
    assert_eq!(mesh.vertex_count(), 1478 * 4);
    assert!(!mesher.chunk().is_dirty());
}

#[test]
fn generate_mesh_data_is_idempotent() {
    let mut mesher = ChunkMesher::new(
        demo_chunk(),
        GeometryStrategy::SharedVertex,
        EdgePolicy::Expose,
    );

    let first = mesher.generate_mesh_data().clone();
    let build_time = mesher.stats().build_time;
    let second = mesher.generate_mesh_data().clone();

    assert_eq!(first, second);
    assert!(!mesher.needs_rebuild());
    // the cached path leaves the stats of the last real build alone
    assert_eq!(mesher.stats().build_time, build_time);
}

#[test]
fn culling_beats_the_full_cube_baseline() {
    let mut chunk = Chunk::new(ChunkDimensions::new(16, 128, 16));
    chunk.fill_up_to_y(1, BlockType::DIRT);

    let baseline = build_unculled_mesh(&chunk);
    assert_eq!(baseline.index_count(), 9216);

    let culled = build_mesh(&chunk, GeometryStrategy::SharedVertex, EdgePolicy::Expose);
    assert!(culled.index_count() < baseline.index_count());
    // 256 tops, 256 bottoms and a 64-face rim
    assert_eq!(culled.face_count(), 576);
    assert_eq!(culled.index_count(), 3456);
}

#[test]
fn every_emitted_triangle_faces_away_from_its_block() {
    let chunk = Chunk::perlin(ChunkDimensions::new(8, 16, 8), 10, BlockType::GRASS, 11);

    for strategy in [GeometryStrategy::SharedVertex, GeometryStrategy::PerFace] {
        let mesh = build_mesh(&chunk, strategy, EdgePolicy::Expose);
        assert_eq!(mesh.index_count() % 3, 0);

        for triangle in mesh.indices.chunks(3) {
            let [a, b, c] = [0, 1, 2].map(|i| v(mesh.positions[triangle[i] as usize]));
            let normal = (b - a).cross(c - a).normalize();

            // the triangle's owning cell sits half a unit behind its centroid
            let centroid = (a + b + c) / 3.0;
            let cell = centroid - normal * 0.5;
            let cell = Point3::new(
                cell.x.round() as i32,
                cell.y.round() as i32,
                cell.z.round() as i32,
            );
            assert!(chunk.get_block(cell).unwrap().is_solid());

            let outside = cell
                + Vector3::new(
                    normal.x.round() as i32,
                    normal.y.round() as i32,
                    normal.z.round() as i32,
                );
            if chunk.verify_coordinate(outside) {
                assert_eq!(chunk.get_block(outside), Ok(BlockType::AIR));
            }
        }
    }
}

#[test]
fn face_templates_match_their_side_normals() {
    for side in BlockSide::all() {
        let corners = face::face_vertex_template(side);
        let normal = (v(corners[1]) - v(corners[0])).cross(v(corners[2]) - v(corners[0]));
        assert!(normal.normalize().dot(side.normal()) > 0.999, "{side:?}");
    }
    let above = face::face_index_template(BlockSide::ABOVE);
    let [a, b, c] = [0, 1, 2].map(|i| v(face::CUBE_VERTICES[above[i] as usize]));
    assert!((b - a).cross(c - a).normalize().y > 0.999);
}

#[test]
fn per_face_mesh_carries_texture_slots() {
    let mut chunk = Chunk::new(ChunkDimensions::new(2, 2, 2));
    chunk.set_block(Point3::new(0, 0, 0), BlockType::GRASS).unwrap();

    let mesh = build_mesh(&chunk, GeometryStrategy::PerFace, EdgePolicy::Expose);
    let VertexAttributes::Textured {
        uvs,
        texture_indices,
    } = &mesh.attributes
    else {
        panic!("per-face meshes are textured");
    };
    assert_eq!(uvs.len(), mesh.positions.len());
    // faces follow BlockSide::all(): grass top, dirt bottom, grass sides
    assert_eq!(&texture_indices[0..4], &[3; 4]);
    assert_eq!(&texture_indices[4..8], &[1; 4]);
    assert_eq!(&texture_indices[8..], &[2; 16]);

    let vertices = mesh.to_vertices();
    assert_eq!(vertices.len(), 24);
    assert_eq!(vertices[0].texture_index(), 3);
}

#[test]
fn shared_vertex_mesh_carries_colors() {
    let mut chunk = Chunk::new(ChunkDimensions::new(2, 2, 2));
    chunk.set_block(Point3::new(1, 1, 1), BlockType::STONE).unwrap();

    let mesh: MeshData = build_mesh(&chunk, GeometryStrategy::SharedVertex, EdgePolicy::Expose);
    assert_eq!(mesh.attributes, VertexAttributes::Colors(face::CUBE_COLORS.to_vec()));
    assert_eq!(mesh.positions[0], [0.5, 0.5, 0.5]);
}

#[test]
fn cull_policy_hides_chunk_walls() {
    let chunk = demo_chunk();
    let mesh = build_mesh(&chunk, GeometryStrategy::PerFace, EdgePolicy::Cull);
    // only the open top remains
    assert_eq!(mesh.face_count(), 256);
}

#[test]
fn grid_access_errors_are_typed() {
    let mut chunk = demo_chunk();
    assert!(matches!(
        chunk.set_block(Point3::new(0, 128, 0), BlockType::DIRT),
        Err(VoxelError::OutOfBounds { y: 128, .. })
    ));
    assert!(matches!(
        chunk.sides_exposed_to_air(Point3::new(0, 20, 0)),
        Err(VoxelError::InvalidInput(_))
    ));
    assert_eq!(
        chunk.sides_exposed_to_air(Point3::new(5, 5, 5)),
        Ok(Vec::new())
    );
}
