use super::*;
use crate::domain::Position;

fn source() -> Vec<Vec<i32>> {
    vec![vec![1, 2], vec![3, 4]]
}

#[test]
fn no_source_gives_empty_grid() {
    let mut applier = make_grid::<i32>(GridSource::Empty);
    assert!(applier.apply(None).is_empty());
}

#[test]
fn dimensions_fill_with_default_value() {
    let grid = make_grid::<i32>(GridSource::dimensions(4, 3)).apply(None);
    assert_eq!(grid.height(), 3);
    assert!(grid.rows().iter().all(|row| row.len() == 4));
    assert!(grid.rows().iter().flatten().all(|&c| c == 0));
}

#[test]
fn non_positive_dimensions_give_empty_grid() {
    for (w, h) in [(0, 2), (2, 0), (-1, -1), (-1, 3)] {
        let grid = make_grid::<i32>(GridSource::dimensions(w, h)).apply(None);
        assert!(grid.is_empty(), "{}x{} should be empty", w, h);
    }
}

#[test]
fn configured_default_value_fills_and_clears() {
    let config = GridConfig::with_default_value("hello".to_string());
    let mut applier = make_grid_with(GridSource::dimensions(2, 2), config);
    assert_eq!(applier.apply(None), vec![vec!["hello".to_string(); 2]; 2]);

    applier.apply(Some(Action::set((0, 0), "x".to_string())));
    applier.set_default_value("world".to_string());
    let grid = applier.apply(Some(Action::clear((0, 0))));
    assert_eq!(grid.get(Position::new(0, 0)).map(String::as_str), Some("world"));
    assert_eq!(grid.get(Position::new(1, 1)).map(String::as_str), Some("hello"));
}

#[test]
fn matrix_is_copied_not_shared() {
    let source = source();
    let grid = make_grid::<i32>(source.as_slice()).apply(None);
    assert_eq!(grid, source);
    assert_ne!(grid.rows()[0].as_ptr(), source[0].as_ptr());
}

#[test]
fn snapshots_are_independent_of_later_actions() {
    let mut applier = make_grid::<i32>(source());
    let before = applier.apply(None);
    let after = applier.apply(Some(Action::set((0, 0), 9)));
    assert_eq!(before, source());
    assert_eq!(after, vec![vec![9, 2], vec![3, 4]]);
}

#[test]
fn clear_resets_only_that_cell() {
    let source = source();
    let grid = make_grid::<i32>(source.as_slice()).apply(Some(Action::clear((0, 0))));
    assert_eq!(grid, vec![vec![0, 2], vec![3, 4]]);
    assert_eq!(source[0][0], 1);
}

#[test]
fn clear_out_of_range_is_noop() {
    for pos in [(2, 2), (4, 4), (-1, 0), (0, 2)] {
        let grid = make_grid::<i32>(source()).apply(Some(Action::clear(pos)));
        assert_eq!(grid, source());
    }
}

#[test]
fn set_overwrites_copy_only() {
    let source = source();
    let grid = make_grid::<i32>(source.as_slice()).apply(Some(Action::set((1, 1), 5)));
    assert_eq!(grid, vec![vec![1, 2], vec![3, 5]]);
    assert_eq!(source[1][1], 4);
}

#[test]
fn set_out_of_range_is_noop() {
    let grid = make_grid::<i32>(source()).apply(Some(Action::set((3, 0), 5)));
    assert_eq!(grid, source());
}

#[test]
fn swap_exchanges_two_cells() {
    let source = source();
    let grid = make_grid::<i32>(source.as_slice()).apply(Some(Action::swap((0, 0), (1, 1))));
    assert_eq!(grid, vec![vec![4, 2], vec![3, 1]]);
    assert_eq!(source, vec![vec![1, 2], vec![3, 4]]);
}

#[test]
fn swap_twice_restores() {
    let mut applier = make_grid::<i32>(source());
    applier.apply(Some(Action::swap((0, 1), (1, 0))));
    let grid = applier.apply(Some(Action::swap((0, 1), (1, 0))));
    assert_eq!(grid, source());
}

#[test]
fn swap_with_invalid_side_is_noop() {
    let grid = make_grid::<i32>(source()).apply(Some(Action::swap((0, 0), (2, 2))));
    assert_eq!(grid, source());
}

#[test]
fn noop_returns_copy_unchanged() {
    let grid = make_grid::<i32>(source()).apply(Some(Action::NoOp));
    assert_eq!(grid, source());
}

#[test]
fn json_source_and_actions() {
    let mut applier = make_grid_from_json::<i32>(Some("[[1,2],[3,4]]"), GridConfig::default());
    let grid = applier.apply_json(Some(r#"{"type":"SWAP","from":[0,0],"to":[1,1]}"#));
    assert_eq!(grid.to_json().unwrap(), "[[4,2],[3,1]]");

    let grid = applier.apply_json(Some(r#"{"type":"SET","pos":[0,1],"value":7}"#));
    assert_eq!(grid, vec![vec![4, 7], vec![3, 1]]);
}

#[test]
fn invalid_json_source_falls_back_to_empty() {
    for json in [
        r#"{"width":null,"height":null}"#,
        r#"{"width":-1,"height":-1}"#,
        r#"{"width":"4","height":"4"}"#,
        "not json",
    ] {
        let grid = make_grid_from_json::<i32>(Some(json), GridConfig::default()).apply(None);
        assert!(grid.is_empty(), "{} should give an empty grid", json);
    }
    assert!(make_grid_from_json::<i32>(None, GridConfig::default()).apply(None).is_empty());
}

#[test]
fn malformed_or_unknown_json_action_is_noop() {
    let mut applier = make_grid_from_json::<i32>(Some("[[1,2],[3,4]]"), GridConfig::default());
    assert_eq!(applier.apply_json(Some("{")), source());
    assert_eq!(applier.apply_json(Some(r#"{"type":"FLIP"}"#)), source());
    assert_eq!(applier.apply_json(None), source());
}

#[test]
fn into_grid_keeps_applied_state() {
    let mut applier = make_grid::<i32>(source());
    applier.apply(Some(Action::set([1, 0], 8)));
    assert_eq!(applier.into_grid(), vec![vec![1, 2], vec![8, 4]]);
}
