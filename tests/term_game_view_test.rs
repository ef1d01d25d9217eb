use tui_2048::core::{GameConfig, GameSnapshot, GameState, GameStatus, Grid};
use tui_2048::term::{tile_color, AnchorY, FrameBuffer, GameView, Viewport};

fn snapshot(rows: Vec<Vec<u32>>, status: GameStatus) -> GameSnapshot {
    GameSnapshot::from_grid(Grid::from_rows(rows).unwrap(), status)
}

fn empty_4x4() -> Vec<Vec<u32>> {
    vec![vec![0; 4]; 4]
}

fn all_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let snap = snapshot(empty_4x4(), GameStatus::Playing);
    let view = GameView::default();

    // 4x4 board of 7x3 tiles with 1-cell gaps => 33x17, plus border => 35x19.
    let fb = view.render(&snap, Viewport::new(35, 19));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(34, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 18).unwrap().ch, '└');
    assert_eq!(fb.get(34, 18).unwrap().ch, '┘');
}

#[test]
fn term_view_centers_tile_value() {
    let mut rows = empty_4x4();
    rows[0][0] = 128;
    let snap = snapshot(rows, GameStatus::Playing);
    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(35, 19));

    // Tile (0,0) starts inside border + gap at (2,2); label on its middle row.
    let (x, y) = view.tile_origin(0, 0, 0, 0);
    assert_eq!((x, y), (2, 2));
    let label: String = (x..x + 7).map(|cx| fb.get(cx, y + 1).unwrap().ch).collect();
    assert_eq!(label, "  128  ");
    assert_eq!(fb.get(x, y).unwrap().style.bg, tile_color(128));
}

#[test]
fn term_view_paints_empty_tiles() {
    let snap = snapshot(empty_4x4(), GameStatus::Playing);
    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(35, 19));

    let (x, y) = view.tile_origin(0, 0, 3, 3);
    let cell = fb.get(x, y).unwrap();
    assert_eq!(cell.ch, ' ');
    assert_eq!(cell.style.bg, tile_color(0));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let state = GameState::new(&GameConfig {
        seed: Some(1),
        ..GameConfig::default()
    })
    .unwrap();
    let view = GameView::default();
    let fb = view.render(&state.snapshot(), Viewport::new(70, 24));

    let text = all_text(&fb);
    assert!(text.contains("BEST"));
    assert!(text.contains("EMPTY"));
    assert!(text.contains("14"));
}

#[test]
fn term_view_shows_seed_for_replay() {
    let state = GameState::new(&GameConfig {
        seed: Some(987654),
        ..GameConfig::default()
    })
    .unwrap();
    let fb = GameView::default().render(&state.snapshot(), Viewport::new(70, 24));

    let text = all_text(&fb);
    assert!(text.contains("SEED"));
    assert!(text.contains("987654"));
}

#[test]
fn term_view_skips_side_panel_when_narrow() {
    let snap = snapshot(empty_4x4(), GameStatus::Playing);
    let fb = GameView::default().render(&snap, Viewport::new(40, 19));
    assert!(!all_text(&fb).contains("BEST"));
}

#[test]
fn term_view_shows_game_over_overlay() {
    let snap = snapshot(vec![vec![2, 4], vec![4, 2]], GameStatus::GameOver);
    let fb = GameView::default().render(&snap, Viewport::new(40, 20));
    assert!(all_text(&fb).contains("GAME OVER"));

    let playing = snapshot(vec![vec![2, 0], vec![4, 2]], GameStatus::Playing);
    let fb = GameView::default().render(&playing, Viewport::new(40, 20));
    assert!(!all_text(&fb).contains("GAME OVER"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = snapshot(empty_4x4(), GameStatus::Playing);
    let view = GameView::default();

    // Frame is 19 rows tall: start_y = (29 - 19) / 2 = 5.
    let fb = view.render(&snap, Viewport::new(35, 29));
    assert_eq!(fb.get(0, 5).unwrap().ch, '┌');

    let top = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = top.render(&snap, Viewport::new(35, 29));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}

#[test]
fn term_view_sizes_frame_to_grid() {
    let snap = snapshot(vec![vec![0; 3]; 3], GameStatus::Playing);
    let view = GameView::default();
    let (w, h) = view.frame_size(3);
    assert_eq!((w, h), (3 * 7 + 4 + 2, 3 * 3 + 4 + 2));

    let fb = view.render(&snap, Viewport::new(w, h));
    assert_eq!(fb.get(w - 1, h - 1).unwrap().ch, '┘');
}
