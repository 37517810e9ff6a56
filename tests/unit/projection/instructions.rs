//! Tests for projecting blocks into world-space instructions

#[cfg(test)]
mod tests {
    use blockplan::blocks::block::Block;
    use blockplan::blocks::kind::BlockKind;
    use blockplan::projection::instructions::{project_block, project_instructions, round2};

    fn block(kind: BlockKind, row: usize, col: usize) -> Block {
        Block {
            kind,
            row,
            col,
            size: kind.cell_size(),
            color: [0.0; 3],
        }
    }

    // Tests a medium block at the origin lands at its center
    #[test]
    fn test_medium_block_at_origin() {
        let inst = project_block(&block(BlockKind::Medium, 0, 0), 5, 0.05, 0.0, false);

        assert_eq!(inst.block_type, BlockKind::Medium);
        assert!((inst.width - 0.5).abs() < 1e-9);
        assert!((inst.height - 0.5).abs() < 1e-9);
        assert!((inst.x - 0.25).abs() < 1e-9);
        assert!((inst.z - 0.25).abs() < 1e-9);
    }

    // Tests column maps to x and row maps to z
    #[test]
    fn test_axes() {
        let inst = project_block(&block(BlockKind::Large, 10, 20), 5, 0.05, 0.0, false);

        assert!((inst.x - 6.25).abs() < 1e-9);
        assert!((inst.z - 3.75).abs() < 1e-9);
        assert!((inst.width - 2.5).abs() < 1e-9);
    }

    // Tests 3D mode swaps the height for the tier thickness
    #[test]
    fn test_3d_height() {
        let small = project_block(&block(BlockKind::Small, 0, 0), 4, 0.1, 0.0, true);
        let large = project_block(&block(BlockKind::Large, 0, 0), 4, 0.1, 0.0, true);

        assert!((small.height - 0.25).abs() < 1e-9);
        assert!((large.height - 2.5).abs() < 1e-9);
        assert!((small.width - 0.4).abs() < 1e-9);
    }

    // Tests the elevation is copied unchanged onto every instruction
    #[test]
    fn test_constant_y() {
        let blocks = [block(BlockKind::Small, 0, 0), block(BlockKind::Small, 3, 7)];
        let instructions = project_instructions(&blocks, 5, 0.05, 12.345, false);
        assert!(instructions.iter().all(|inst| inst.y == 12.345));
    }

    // Tests output order follows block order
    #[test]
    fn test_order_preserved() {
        let blocks = [
            block(BlockKind::Large, 0, 0),
            block(BlockKind::Small, 12, 3),
            block(BlockKind::Medium, 10, 10),
        ];
        let types: Vec<_> = project_instructions(&blocks, 5, 0.05, 0.0, false)
            .iter()
            .map(|inst| inst.block_type)
            .collect();
        assert_eq!(types, vec![BlockKind::Large, BlockKind::Small, BlockKind::Medium]);
        assert!(project_instructions(&[], 5, 0.05, 0.0, false).is_empty());
    }

    // Tests two-decimal rounding
    #[test]
    fn test_round2() {
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(1.236), 1.24);
        assert_eq!(round2(-0.5), -0.5);
        assert_eq!(round2(3.0), 3.0);
    }

    // Tests halfway values round to the even hundredth
    #[test]
    fn test_round2_ties_to_even() {
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(0.625), 0.62);
        assert_eq!(round2(0.875), 0.88);
    }

    // Tests one-cell centers at 5 px per cell land on even hundredths
    #[test]
    fn test_small_block_centers_round_to_even() {
        let origin = project_block(&block(BlockKind::Small, 0, 0), 5, 0.05, 0.0, false);
        assert_eq!(origin.x, 0.12);
        assert_eq!(origin.z, 0.12);
        assert_eq!(origin.width, 0.25);

        let third_column = project_block(&block(BlockKind::Small, 0, 2), 5, 0.05, 0.0, false);
        assert_eq!(third_column.x, 0.62);
        assert_eq!(third_column.z, 0.12);
    }
}
