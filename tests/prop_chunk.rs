use cgmath::Point3;
use proptest::prelude::*;

use cube_world::engine_state::rendering::meshing::{build_mesh, GeometryStrategy};
use cube_world::engine_state::voxels::block::block_side::BlockSide;
use cube_world::engine_state::voxels::block::block_type::BlockType;
use cube_world::engine_state::voxels::chunk::{
    sides_exposed_to_air, Chunk, ChunkDimensions, EdgePolicy,
};

const W: usize = 6;
const H: usize = 5;
const D: usize = 4;

fn arb_block() -> impl Strategy<Value = BlockType> {
    prop_oneof![
        3 => Just(BlockType::AIR),
        1 => Just(BlockType::DIRT),
        1 => Just(BlockType::GRASS),
        1 => Just(BlockType::STONE),
    ]
}

// A chunk with random contents, built through the public edit API
fn arb_chunk() -> impl Strategy<Value = Chunk> {
    prop::collection::vec(arb_block(), W * H * D).prop_map(|cells| {
        let mut chunk = Chunk::new(ChunkDimensions::new(W, H, D));
        for (i, block) in cells.into_iter().enumerate() {
            let (x, y, z) = (i / (H * D), (i / D) % H, i % D);
            chunk
                .set_block(Point3::new(x as i32, y as i32, z as i32), block)
                .unwrap();
        }
        chunk
    })
}

fn arb_policy() -> impl Strategy<Value = EdgePolicy> {
    prop_oneof![Just(EdgePolicy::Expose), Just(EdgePolicy::Cull)]
}

proptest! {
    #[test]
    fn verify_coordinate_matches_bounds(x in -3i32..10, y in -3i32..10, z in -3i32..10) {
        let chunk = Chunk::new(ChunkDimensions::new(W, H, D));
        let expected = (0..W as i32).contains(&x)
            && (0..H as i32).contains(&y)
            && (0..D as i32).contains(&z);
        prop_assert_eq!(chunk.verify_coordinate(Point3::new(x, y, z)), expected);
        prop_assert_eq!(chunk.get_block(Point3::new(x, y, z)).is_ok(), expected);
    }

    #[test]
    fn set_then_get_round_trips(
        x in 0i32..W as i32, y in 0i32..H as i32, z in 0i32..D as i32, block in arb_block()
    ) {
        let mut chunk = Chunk::new(ChunkDimensions::new(W, H, D));
        chunk.set_block(Point3::new(x, y, z), block).unwrap();
        prop_assert_eq!(chunk.get_block(Point3::new(x, y, z)), Ok(block));
        prop_assert!(chunk.is_dirty());
    }

    #[test]
    fn mesh_indices_stay_in_range(chunk in arb_chunk(), policy in arb_policy()) {
        for strategy in [GeometryStrategy::SharedVertex, GeometryStrategy::PerFace] {
            let mesh = build_mesh(&chunk, strategy, policy);
            prop_assert_eq!(mesh.index_count() % 6, 0);
            prop_assert_eq!(mesh.attributes.len(), mesh.positions.len());
            let vertex_count = mesh.vertex_count();
            prop_assert!(mesh.indices.iter().all(|i| *i < vertex_count));
        }
    }

    #[test]
    fn face_count_matches_visibility(chunk in arb_chunk(), policy in arb_policy()) {
        let expected: usize = chunk
            .solid_blocks()
            .map(|(p, _)| {
                let coordinate = Point3::new(p.x as i32, p.y as i32, p.z as i32);
                sides_exposed_to_air(&chunk, coordinate, policy).unwrap().len()
            })
            .sum();

        let shared = build_mesh(&chunk, GeometryStrategy::SharedVertex, policy);
        let per_face = build_mesh(&chunk, GeometryStrategy::PerFace, policy);
        prop_assert_eq!(shared.face_count() as usize, expected);
        prop_assert_eq!(per_face.face_count() as usize, expected);
        prop_assert_eq!(per_face.vertex_count() as usize, expected * 4);
    }

    #[test]
    fn visibility_is_symmetric_between_solid_neighbours(chunk in arb_chunk()) {
        // A face between two solid cells is hidden from both sides
        for (p, _) in chunk.solid_blocks() {
            let here = Point3::new(p.x as i32, p.y as i32, p.z as i32);
            let exposed = chunk.sides_exposed_to_air(here).unwrap();
            for side in BlockSide::all() {
                let there = here + side.delta();
                if !chunk.verify_coordinate(there) {
                    prop_assert!(exposed.contains(&side));
                    continue;
                }
                let neighbour_solid = chunk.get_block(there).unwrap().is_solid();
                prop_assert_eq!(exposed.contains(&side), !neighbour_solid);
                if neighbour_solid {
                    let back = chunk.sides_exposed_to_air(there).unwrap();
                    prop_assert!(!back.contains(&side.opposite()));
                }
            }
        }
    }
}
