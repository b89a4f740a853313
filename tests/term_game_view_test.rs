use tui_2048::core::{GameSnapshot, OutputSink};
use tui_2048::term::{FrameBuffer, GameView, HelpPager, Overlay, Scene, TerminalOutput, Viewport};
use tui_2048::types::GamePhase;

fn snapshot(rows: &[[u64; 4]; 4], score: u64) -> GameSnapshot {
    GameSnapshot {
        width: 4,
        height: 4,
        empty: 0,
        cells: rows.iter().flatten().copied().collect(),
        score,
        phase: GamePhase::Active,
    }
}

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect()
}

fn render(snap: &GameSnapshot, overlay: Overlay<'_>, vp: Viewport) -> FrameBuffer {
    GameView::default().render(&Scene { snapshot: snap, overlay }, vp)
}

#[test]
fn term_view_renders_border_corners() {
    // 4 tiles of pitch 8x4 plus border and gutter => 35x19 frame, 2 header rows.
    let snap = snapshot(&[[0; 4]; 4], 0);
    let fb = render(&snap, Overlay::None, Viewport::new(35, 22));

    assert_eq!(fb.get(0, 2).unwrap().ch, '┌');
    assert_eq!(fb.get(34, 2).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 20).unwrap().ch, '└');
    assert_eq!(fb.get(34, 20).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_title_and_score() {
    let snap = snapshot(&[[0; 4]; 4], 36);
    let fb = render(&snap, Overlay::None, Viewport::new(35, 22));

    let header = fb.row_text(0);
    assert!(header.starts_with("2048"));
    assert!(header.trim_end().ends_with("SCORE 36"));
}

#[test]
fn term_view_centers_tile_values() {
    let mut rows = [[0; 4]; 4];
    rows[0][0] = 2048;
    rows[3][3] = 8;
    let snap = snapshot(&rows, 0);
    let fb = render(&snap, Overlay::None, Viewport::new(35, 22));

    // Tile (0, 0) covers x 2..9, y 4..7; the label sits on its middle row.
    let row: Vec<char> = fb.row_text(5).chars().collect();
    assert_eq!(row[3..7].iter().collect::<String>(), "2048");
    // Empty neighbour (0, 1) shows a dot in its middle.
    assert_eq!(row[13], '·');

    let row: Vec<char> = fb.row_text(5 + 12).chars().collect();
    assert_eq!(row[26 + 3], '8');
}

#[test]
fn term_view_shows_endgame_box() {
    let mut snap = snapshot(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]], 512);
    snap.phase = GamePhase::Endgame;
    let fb = render(&snap, Overlay::Endgame, Viewport::new(80, 24));

    let text = screen_text(&fb);
    assert!(text.contains("GAME OVER"));
    assert!(text.contains("score 512"));
    assert!(text.contains("best tile 4"));
}

#[test]
fn term_view_shows_intro_and_help() {
    let snap = snapshot(&[[0; 4]; 4], 0);
    let fb = render(&snap, Overlay::Intro, Viewport::new(80, 24));
    assert!(screen_text(&fb).contains("press any key"));

    let mut pager = HelpPager::default();
    pager.open();
    pager.layout(40, 10);
    let fb = render(&snap, Overlay::Help(&pager), Viewport::new(80, 24));
    let text = screen_text(&fb);
    assert!(text.contains(" Help "));
    assert!(text.contains("Slide the tiles"));
}

#[test]
fn term_view_survives_tiny_viewports() {
    let snap = snapshot(&[[2; 4]; 4], 0);
    for (w, h) in [(1, 1), (10, 5), (36, 12)] {
        let fb = render(&snap, Overlay::Endgame, Viewport::new(w, h));
        assert_eq!((fb.width(), fb.height()), (w, h));
    }
}

#[test]
fn terminal_output_renders_latest_state() {
    let mut out = TerminalOutput::new(Viewport::new(80, 24)).without_intro();
    let mut rows = [[0; 4]; 4];
    rows[1][2] = 128;
    out.update_game_state(&snapshot(&rows, 1000));

    let mut fb = FrameBuffer::new(1, 1);
    out.render_into(&mut fb);
    let text = screen_text(&fb);
    assert!(text.contains("SCORE 1000"));
    assert!(text.contains("128"));
}
