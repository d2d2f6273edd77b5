//! Integration tests for the key → movement → render loop

use crossterm::event::{KeyCode, KeyEvent};

use tile_walker::core::{world_position, Grid, MovementController, SAMPLE_MAP};
use tile_walker::input::{handle_key_event, should_quit};
use tile_walker::term::{encode_diff_into, encode_full_into, AnchorY, MapView, Viewport, PLAYER_GLYPH};
use tile_walker::types::PlayerState;

fn press(game: &mut MovementController, code: KeyCode) {
    let key = KeyEvent::from(code);
    assert!(!should_quit(key));
    if let Some(direction) = handle_key_event(key) {
        game.handle_input(direction);
    }
}

#[test]
fn test_arrow_keys_drive_the_player() {
    let mut game = MovementController::new(Grid::parse(SAMPLE_MAP).unwrap()).unwrap();

    for _ in 0..3 {
        press(&mut game, KeyCode::Right);
    }
    press(&mut game, KeyCode::Down);
    press(&mut game, KeyCode::Down);
    assert_eq!(game.player(), PlayerState::new(4, 3));

    // Non-arrow keys do nothing.
    press(&mut game, KeyCode::Char('x'));
    press(&mut game, KeyCode::Enter);
    assert_eq!(game.player(), PlayerState::new(4, 3));
}

#[test]
fn test_frame_after_move_differs_only_around_player() {
    let mut game = MovementController::new(Grid::parse(SAMPLE_MAP).unwrap()).unwrap();
    let view = MapView::default().with_anchor_y(AnchorY::Top);
    let vp = Viewport::new(24, 11);

    let before = view.render(&game.current_state(), vp);
    press(&mut game, KeyCode::Right);
    let after = view.render(&game.current_state(), vp);

    assert_eq!(before.get(2, 1).unwrap().ch, PLAYER_GLYPH);
    assert_eq!(after.get(4, 1).unwrap().ch, PLAYER_GLYPH);

    let mut diff = Vec::new();
    let mut full = Vec::new();
    encode_diff_into(&before, &after, &mut diff).unwrap();
    encode_full_into(&after, &mut full).unwrap();
    assert!(!diff.is_empty());
    assert!(diff.len() < full.len());
}

#[test]
fn test_world_positions_center_the_map() {
    let game = MovementController::new(Grid::parse(SAMPLE_MAP).unwrap()).unwrap();
    let p = game.player();
    assert_eq!(world_position(game.grid(), p.x, p.y), (-4.5, 3.5));
}

#[test]
fn test_bad_map_aborts_startup() {
    let err = "# # #\n# ? #\n# # #".parse::<Grid>().unwrap_err();
    let report = anyhow::Error::from(err);
    assert!(report.to_string().contains("\"?\""));
}
