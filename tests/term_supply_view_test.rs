use tetris_stack::core::{Session, SessionConfig, SupplySnapshot};
use tetris_stack::term::{AnchorY, FrameBuffer, SupplyView, Viewport, MENU_TITLE};
use tetris_stack::types::{Piece, PieceKind, SupplyAction};

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn snapshot_with(upcoming: &[Piece], reserved: &[Piece]) -> SupplySnapshot {
    let mut snap = SupplySnapshot::empty();
    snap.upcoming.extend(upcoming.iter().copied());
    snap.reserved.extend(reserved.iter().copied());
    snap
}

#[test]
fn term_view_renders_border_corners_at_top() {
    let snap = SupplySnapshot::empty();
    let view = SupplyView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, "", Viewport::new(80, 24));

    let top = fb.row_text(0);
    let first = top.find('┌').expect("top-left corner");
    assert!(top.contains('┐'));
    assert!(top.contains(MENU_TITLE));

    let bottom_row = (0..fb.height())
        .find(|&y| fb.row_text(y).contains('└'))
        .expect("bottom-left corner");
    assert_eq!(fb.row_text(bottom_row).find('└'), Some(first));
    assert!(fb.row_text(bottom_row).contains('┘'));
}

#[test]
fn term_view_shows_counters_and_pieces() {
    let snap = snapshot_with(
        &[Piece::new(PieceKind::I, 0), Piece::new(PieceKind::O, 1)],
        &[Piece::new(PieceKind::T, 7)],
    );
    let fb = SupplyView::default().render(&snap, "", Viewport::new(80, 24));
    let all = screen_text(&fb);

    assert!(all.contains("UPCOMING 2/5"));
    assert!(all.contains("RESERVE 1/3"));
    assert!(all.contains("[I 0]"));
    assert!(all.contains("[O 1]"));
    assert!(all.contains("[T 7]"));
    assert!(all.contains("< top"));
    assert!(all.contains("^ next"));
}

#[test]
fn term_view_marks_empty_slots() {
    let snap = SupplySnapshot::empty();
    let fb = SupplyView::default().render(&snap, "", Viewport::new(80, 24));
    let all = screen_text(&fb);

    assert!(all.contains("UPCOMING 0/5"));
    assert!(all.contains("RESERVE 0/3"));
    assert_eq!(all.matches("[ -- ]").count(), 5 + 3);
    assert!(!all.contains("^ next"));
}

#[test]
fn term_view_lists_menu_unless_hidden() {
    let snap = SupplySnapshot::empty();
    let vp = Viewport::new(80, 24);

    let with_menu = screen_text(&SupplyView::default().render(&snap, "", vp));
    for action in SupplyAction::ALL {
        assert!(with_menu.contains(action.label()), "missing {:?}", action);
    }

    let bare = screen_text(&SupplyView::default().with_menu(false).render(&snap, "", vp));
    assert!(!bare.contains(SupplyAction::SwapThree.label()));
}

#[test]
fn term_view_shows_status_line() {
    let session = Session::new(SessionConfig {
        seed: 5,
        auto_refill: true,
    });
    let snap = session.snapshot();
    let fb = SupplyView::default().render(&snap, "Reserved [L 3].", Viewport::new(80, 24));
    assert!(screen_text(&fb).contains("Reserved [L 3]."));
}

#[test]
fn term_view_survives_tiny_viewport() {
    let snap = SupplySnapshot::empty();
    let fb = SupplyView::default().render(&snap, "status", Viewport::new(4, 2));
    assert_eq!(fb.width(), 4);
    assert_eq!(fb.height(), 2);
}

#[test]
fn term_view_keeps_six_digit_ids_apart() {
    let upcoming: Vec<Piece> = (123456..=123460).map(|id| Piece::new(PieceKind::I, id)).collect();
    let snap = snapshot_with(&upcoming, &[Piece::new(PieceKind::L, 654321)]);
    let fb = SupplyView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, "", Viewport::new(80, 24));

    let slots = fb.row_text(2);
    for id in 123456..=123460 {
        assert!(slots.contains(&format!("[I {id}]")), "row was {slots:?}");
    }
    assert!(screen_text(&fb).contains("[L 654321] < top"));
}

#[test]
fn term_view_fits_largest_ids_in_eighty_columns() {
    let upcoming = [Piece::new(PieceKind::T, u32::MAX); 5];
    let snap = snapshot_with(&upcoming, &[]);
    let fb = SupplyView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, "", Viewport::new(80, 24));

    let slots = fb.row_text(2);
    assert_eq!(slots.matches("[T 4294967295]").count(), 5);
    assert!(slots.trim_end().ends_with('│'));
}
