use bttlship::{BitBoard, BitBoardError};

#[test]
fn test_get_set_bounds() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());

    bb.set(1, 2).unwrap();
    assert!(bb.get(1, 2).unwrap());
    assert!(!bb.get(2, 1).unwrap());
    assert_eq!(bb.count_ones(), 1);

    assert_eq!(
        bb.set(4, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { row: 4, col: 0 }
    );
}

#[test]
fn test_from_cells_and_iter() {
    let bb = BitBoard::<u16, 4>::from_cells([(3, 3), (0, 1)]).unwrap();
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (3, 3)]);
}

#[test]
fn test_halo_of_interior_cell() {
    let bb = BitBoard::<u128, 10>::from_cells([(4, 4)]).unwrap();
    let halo = bb.halo();
    assert_eq!(halo.count_ones(), 9);
    for r in 3..=5 {
        for c in 3..=5 {
            assert!(halo.get(r, c).unwrap());
        }
    }
    assert!(!halo.get(2, 4).unwrap());
}

#[test]
fn test_halo_clips_at_corner_and_edge() {
    let corner = BitBoard::<u128, 10>::from_cells([(0, 0)]).unwrap();
    assert_eq!(corner.halo().count_ones(), 4);

    let edge_run = BitBoard::<u128, 10>::from_cells([(9, 3), (9, 4), (9, 5)]).unwrap();
    // columns 2..=6 on rows 8 and 9
    assert_eq!(edge_run.halo().count_ones(), 10);
}

#[test]
fn test_intersects() {
    let a = BitBoard::<u64, 8>::from_cells([(0, 0), (1, 1)]).unwrap();
    let b = BitBoard::<u64, 8>::from_cells([(1, 1)]).unwrap();
    let c = BitBoard::<u64, 8>::from_cells([(2, 2)]).unwrap();
    assert!(a.intersects(&b));
    assert!(!a.intersects(&c));
    assert!(a.halo().intersects(&c));
}
