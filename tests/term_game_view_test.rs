use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use tui_concentration::core::{CardView, GameState, Phase};
use tui_concentration::input::handle_mouse_event;
use tui_concentration::term::{GameView, Viewport};
use tui_concentration::types::{GameAction, Rank, Suit};

/// Exactly fits the frame plus HUD, so the frame starts at (0,0).
const VP: Viewport = Viewport {
    width: 68,
    height: 19,
};

fn face_up(rank: u8, suit: Suit) -> CardView {
    CardView {
        rank: Rank::new(rank).unwrap(),
        suit,
        face_up: true,
        selected: false,
    }
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::seeded(1).snapshot();
    let fb = GameView::default().render(&snap, None, VP);

    assert_eq!(fb.get(0, 0).unwrap().ch, '╭');
    assert_eq!(fb.get(67, 0).unwrap().ch, '╮');
    assert_eq!(fb.get(0, 13).unwrap().ch, '╰');
    assert_eq!(fb.get(67, 13).unwrap().ch, '╯');
}

#[test]
fn term_view_draws_face_up_rank_and_suit() {
    let mut snap = GameState::seeded(1).snapshot();
    snap.cards[0][0] = face_up(10, Suit::Heart);
    snap.cards[0][1] = face_up(10, Suit::Spade);

    let fb = GameView::default().render(&snap, None, VP);

    // First card at (2,1), second one slot (5 columns) to the right.
    assert_eq!(fb.get(2, 1).unwrap().ch, '1');
    assert_eq!(fb.get(3, 1).unwrap().ch, '0');
    assert_eq!(fb.get(4, 1).unwrap().ch, '♥');
    assert_eq!(fb.get(5, 2).unwrap().ch, '♥');
    assert_eq!(fb.get(9, 1).unwrap().ch, '♠');

    let red = fb.get(2, 1).unwrap().style.fg;
    let black = fb.get(7, 1).unwrap().style.fg;
    assert_ne!(red, black);
}

#[test]
fn term_view_highlights_the_selected_card() {
    let mut snap = GameState::seeded(1).snapshot();
    snap.cards[0][0] = face_up(4, Suit::Club);
    snap.cards[0][1] = face_up(4, Suit::Diamond);
    snap.cards[0][1].selected = true;

    let fb = GameView::default().render(&snap, None, VP);
    assert_ne!(
        fb.get(2, 1).unwrap().style.bg,
        fb.get(7, 1).unwrap().style.bg
    );
}

#[test]
fn term_view_draws_hud_under_the_board() {
    let mut snap = GameState::seeded(1).snapshot();
    snap.elapsed_ticks = 754;
    snap.score = 21;
    snap.steps_remaining = 88;

    let fb = GameView::default().render(&snap, None, VP);

    assert!(fb.row_text(15).contains("Time: 01:15"));
    assert!(fb.row_text(16).contains("Score: 21   Steps Left: 88"));
    assert!(fb.row_text(18).contains("r reset"));
}

#[test]
fn term_view_shows_out_of_steps_overlay() {
    let mut snap = GameState::seeded(1).snapshot();
    snap.steps_remaining = 0;
    snap.phase = Phase::Exhausted;

    let fb = GameView::default().render(&snap, None, VP);
    assert!(fb.row_text(7).contains("OUT OF STEPS"));
    assert!(fb.row_text(17).contains("OUT OF STEPS"));
}

#[test]
fn term_view_hides_overlay_while_pair_is_pending() {
    let mut snap = GameState::seeded(1).snapshot();
    snap.steps_remaining = 0;
    snap.phase = Phase::Exhausted;
    snap.flip_back_delay = 5;

    let fb = GameView::default().render(&snap, None, VP);
    assert!(!fb.row_text(7).contains("OUT OF STEPS"));
}

#[test]
fn term_view_shows_complete_overlay() {
    let mut snap = GameState::seeded(1).snapshot();
    snap.score = 0;
    snap.complete = true;

    let fb = GameView::default().render(&snap, None, VP);
    assert!(fb.text().contains("  COMPLETE  "));
}

#[test]
fn term_view_underlines_the_cursor_cell() {
    let snap = GameState::seeded(1).snapshot();
    let fb = GameView::default().render(&snap, Some((1, 2)), VP);

    // Card (1,2) starts at (12,4); its gap row is y=6.
    for x in 12..16 {
        assert_eq!(fb.get(x, 6).unwrap().ch, '▔');
    }
    assert_ne!(fb.get(2, 3).unwrap().ch, '▔');
}

#[test]
fn term_view_centers_in_a_larger_viewport() {
    let view = GameView::default();
    let g = view.geometry(Viewport::new(100, 30));
    assert_eq!((g.origin_x, g.origin_y), (18, 6));
}

#[test]
fn mouse_clicks_land_on_the_drawn_card() {
    let view = GameView::default();
    let vp = Viewport::new(120, 40);
    let geometry = view.geometry(vp);

    for (row, col) in [(0u8, 0u8), (2, 7), (3, 12)] {
        let (x, y) = geometry.cell_origin(row, col);
        let event = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x + 1,
            row: y + 1,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            handle_mouse_event(event, &geometry),
            Some(GameAction::Click { row, col })
        );
    }
}

#[test]
fn render_into_reuses_the_buffer_across_frames() {
    let mut game = GameState::seeded(3);
    let view = GameView::default();
    let mut fb = view.render(&game.snapshot(), None, VP);

    game.on_cell_clicked(0, 0);
    view.render_into(&game.snapshot(), None, VP, &mut fb);
    assert_eq!(fb.width(), VP.width);
    assert_ne!(fb.get(2, 1).unwrap().ch, '▒');
}
