//! Tests for block footprint geometry

#[cfg(test)]
mod tests {
    use blockplan::blocks::block::Block;
    use blockplan::blocks::kind::BlockKind;

    fn block(row: usize, col: usize, kind: BlockKind) -> Block {
        Block {
            kind,
            row,
            col,
            size: kind.cell_size(),
            color: [0.0; 3],
        }
    }

    // Tests exclusive end coordinates
    #[test]
    fn test_extent() {
        let b = block(3, 4, BlockKind::Medium);
        assert_eq!(b.end_row(), 5);
        assert_eq!(b.end_col(), 6);

        let large = block(0, 0, BlockKind::Large);
        assert_eq!((large.end_row(), large.end_col()), (10, 10));
    }

    // Tests cells are listed row-major
    #[test]
    fn test_cells_row_major() {
        let cells: Vec<_> = block(1, 2, BlockKind::Medium).cells().collect();
        assert_eq!(cells, vec![(1, 2), (1, 3), (2, 2), (2, 3)]);
        assert_eq!(block(0, 0, BlockKind::Large).cells().count(), 100);
    }
}
