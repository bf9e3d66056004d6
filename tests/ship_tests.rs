use armada::{BoardError, Orientation, Ship, ShipSpec};

#[test]
fn test_new_and_mask() -> Result<(), BoardError> {
    let spec = ShipSpec::new("Test", 3);
    let ship = Ship::<u32, 5, 5>::new(spec, Orientation::Horizontal, 2, 1)?;
    // check mask coordinates
    for c in 1..4 {
        assert!(ship.mask().get(2, c)?);
    }
    assert_eq!(ship.mask().count_ones(), 3);
    assert_eq!(ship.origin(), (2, 1));
    assert_eq!(ship.orientation(), Orientation::Horizontal);
    Ok(())
}

#[test]
fn test_cells_and_contains() -> Result<(), BoardError> {
    let spec = ShipSpec::new("Test", 4);
    let ship = Ship::<u32, 5, 5>::new(spec, Orientation::Vertical, 0, 0)?;
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
    for (r, c) in cells {
        assert!(ship.contains(r, c));
    }
    assert!(!ship.contains(4, 0));
    Ok(())
}

#[test]
fn test_out_of_bounds() {
    let spec = ShipSpec::new("Test", 4);
    assert_eq!(
        Ship::<u16, 4, 4>::new(spec, Orientation::Horizontal, 0, 1).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert_eq!(
        Ship::<u16, 4, 4>::new(spec, Orientation::Vertical, 1, 0).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert!(Ship::<u16, 4, 4>::new(spec, Orientation::Horizontal, 0, 0).is_ok());
}

#[test]
fn test_zero_size_rejected() {
    let spec = ShipSpec::new("Empty", 0);
    assert_eq!(
        Ship::<u16, 4, 4>::new(spec, Orientation::Horizontal, 0, 0).unwrap_err(),
        BoardError::InvalidShipSize
    );
}

#[test]
fn test_record_hit_and_sunk() {
    let spec = ShipSpec::new("Test", 2);
    let mut ship = Ship::<u16, 4, 4>::new(spec, Orientation::Horizontal, 1, 1).unwrap();
    assert_eq!(ship.hits(), 0);
    assert!(!ship.is_sunk());

    ship.record_hit();
    assert_eq!(ship.hits(), 1);
    assert!(!ship.is_sunk());

    ship.record_hit();
    assert!(ship.is_sunk());

    // counter saturates at the ship's size
    ship.record_hit();
    assert_eq!(ship.hits(), 2);
}
