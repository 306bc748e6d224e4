use reflex_arena::{Layout, LayoutError};
use reflex_core::Cell;

#[test]
fn parses_tiles_with_y_pointing_north() {
    let layout = Layout::parse(
        "%%%%%%\n\
         %1 .o%\n\
         %  .2%\n\
         %%%%%%\n",
    )
    .expect("valid layout");

    assert_eq!(layout.width(), 6);
    assert_eq!(layout.height(), 4);
    assert_eq!(layout.starts(), &[Cell::new(1, 2), Cell::new(4, 1)]);
    assert!(layout.food().contains(&Cell::new(3, 2)));
    assert!(layout.food().contains(&Cell::new(3, 1)));
    assert!(layout.capsules().contains(&Cell::new(4, 2)));
    assert!(layout.maze().is_wall(Cell::new(0, 0)));
    assert!(layout.is_red_side(Cell::new(2, 1)));
    assert!(!layout.is_red_side(Cell::new(3, 1)));
}

#[test]
fn rejects_malformed_layouts() {
    assert_eq!(Layout::parse(""), Err(LayoutError::Empty));
    assert_eq!(
        Layout::parse("%%%\n"),
        Err(LayoutError::OddWidth { width: 3 })
    );
    assert_eq!(
        Layout::parse("%%%%\n%1%\n"),
        Err(LayoutError::Ragged {
            row: 1,
            expected: 4,
            found: 3
        })
    );
    assert_eq!(
        Layout::parse("%1x%\n"),
        Err(LayoutError::UnknownTile {
            tile: 'x',
            row: 0,
            col: 2
        })
    );
    assert_eq!(
        Layout::parse("%2 %\n"),
        Err(LayoutError::MissingAgent { slot: 1 })
    );
    assert_eq!(
        Layout::parse("%11%\n"),
        Err(LayoutError::DuplicateAgent { slot: 1 })
    );
}

#[test]
fn default_capture_map_is_balanced() {
    let layout = Layout::default_capture().expect("embedded layout parses");
    assert_eq!(layout.num_agents(), 4);
    assert_eq!((layout.width(), layout.height()), (20, 9));

    let red_food = layout.food().iter().filter(|c| layout.is_red_side(**c)).count();
    assert_eq!(red_food * 2, layout.food().len());
    for (slot, start) in layout.starts().iter().enumerate() {
        assert_eq!(layout.is_red_side(*start), slot % 2 == 0);
    }
}
