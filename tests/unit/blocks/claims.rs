//! Tests for the write-once claim grid

#[cfg(test)]
mod tests {
    use blockplan::blocks::claims::ClaimGrid;

    // Verifies a new grid has nothing claimed
    #[test]
    fn test_new_grid_is_unclaimed() {
        let claims = ClaimGrid::new(4, 5);
        assert_eq!(claims.count(), 0);
        assert_eq!(claims.to_string(), "ClaimGrid(4x5, 0 claimed)");
        assert!(!claims.any_claimed(0, 0, 4));
    }

    // Tests square claims mark exactly the covered cells
    #[test]
    fn test_claim_square() {
        let mut claims = ClaimGrid::new(4, 4);
        claims.claim_square(1, 1, 2);

        assert_eq!(claims.count(), 4);
        assert!(claims.is_claimed(1, 1));
        assert!(claims.is_claimed(2, 2));
        assert!(!claims.is_claimed(0, 1));
        assert!(!claims.is_claimed(3, 3));
    }

    // Tests overlap detection for windows touching a claimed cell
    #[test]
    fn test_any_claimed_windows() {
        let mut claims = ClaimGrid::new(5, 5);
        claims.claim(2, 3);

        assert!(claims.any_claimed(1, 2, 2));
        assert!(claims.any_claimed(2, 3, 1));
        assert!(!claims.any_claimed(0, 0, 2));
        assert!(!claims.any_claimed(3, 3, 2));
    }

    // Tests claims never wrap into the next row at the right border
    #[test]
    fn test_no_row_wrap() {
        let mut claims = ClaimGrid::new(3, 3);
        claims.claim_square(0, 2, 2);

        assert!(claims.is_claimed(0, 2));
        assert!(claims.is_claimed(1, 2));
        assert!(!claims.is_claimed(1, 0));
        assert!(!claims.is_claimed(2, 0));
        assert_eq!(claims.count(), 2);
    }

    // Tests out-of-grid coordinates are ignored
    #[test]
    fn test_out_of_bounds() {
        let mut claims = ClaimGrid::new(2, 2);
        claims.claim(5, 5);
        assert_eq!(claims.count(), 0);
        assert!(!claims.is_claimed(5, 5));
        assert!(claims.to_string().contains("2x2"));
    }
}
