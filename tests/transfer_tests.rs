//! Transfer operation tests - reserve, front/top swap and 3-for-3 swap

use tetris_stack::core::{
    reserve, swap_front_top, swap_three, Container, ReserveStack, SupplyError, UpcomingQueue,
};
use tetris_stack::types::{Piece, PieceKind};

const A: Piece = Piece::new(PieceKind::I, 0);
const B: Piece = Piece::new(PieceKind::O, 1);
const C: Piece = Piece::new(PieceKind::T, 2);
const D: Piece = Piece::new(PieceKind::L, 3);
const E: Piece = Piece::new(PieceKind::I, 4);
const X: Piece = Piece::new(PieceKind::O, 10);
const Y: Piece = Piece::new(PieceKind::T, 11);
const Z: Piece = Piece::new(PieceKind::L, 12);

fn queue(pieces: &[Piece]) -> UpcomingQueue {
    let mut q = UpcomingQueue::new();
    for p in pieces {
        q.enqueue(*p).unwrap();
    }
    q
}

/// Push bottom first.
fn stack(pieces: &[Piece]) -> ReserveStack {
    let mut s = ReserveStack::new();
    for p in pieces {
        s.push(*p).unwrap();
    }
    s
}

fn queue_vec(q: &UpcomingQueue) -> Vec<Piece> {
    q.iter().copied().collect()
}

fn stack_vec(s: &ReserveStack) -> Vec<Piece> {
    s.iter_top_down().copied().collect()
}

// ============== reserve ==============

#[test]
fn test_reserve_moves_front_to_top() {
    let mut q = queue(&[A, B, C]);
    let mut s = stack(&[X]);

    assert_eq!(reserve(&mut q, &mut s), Ok(A));
    assert_eq!(queue_vec(&q), vec![B, C]);
    assert_eq!(stack_vec(&s), vec![A, X]);
}

#[test]
fn test_reserve_on_empty_queue_fails() {
    let mut q = queue(&[]);
    let mut s = stack(&[]);
    assert_eq!(
        reserve(&mut q, &mut s),
        Err(SupplyError::EmptyContainer(Container::Queue))
    );
    assert!(s.is_empty());
}

#[test]
fn test_reserve_on_full_stack_is_all_or_nothing() {
    let mut q = queue(&[A, B, C, D, E]);
    let mut s = stack(&[X, Y, Z]);
    assert_eq!(
        reserve(&mut q, &mut s),
        Err(SupplyError::CapacityExceeded(Container::Reserve))
    );
    assert_eq!(queue_vec(&q), vec![A, B, C, D, E]);
    assert_eq!(stack_vec(&s), vec![Z, Y, X]);
}

// ============== swap_front_top ==============

#[test]
fn test_swap_front_top_exchanges_values() {
    let mut q = queue(&[A, B]);
    let mut s = stack(&[X, Y]);

    swap_front_top(&mut q, &mut s).unwrap();
    assert_eq!(queue_vec(&q), vec![Y, B]);
    assert_eq!(stack_vec(&s), vec![A, X]);
    assert_eq!(q.len(), 2);
    assert_eq!(s.len(), 2);
}

#[test]
fn test_swap_front_top_twice_restores() {
    let mut q = queue(&[A, B, C]);
    let mut s = stack(&[X]);

    swap_front_top(&mut q, &mut s).unwrap();
    swap_front_top(&mut q, &mut s).unwrap();
    assert_eq!(queue_vec(&q), vec![A, B, C]);
    assert_eq!(stack_vec(&s), vec![X]);
}

#[test]
fn test_swap_front_top_on_empty_queue_fails() {
    let mut q = queue(&[]);
    let mut s = stack(&[X]);
    assert_eq!(
        swap_front_top(&mut q, &mut s),
        Err(SupplyError::EmptyContainer(Container::Queue))
    );
    assert_eq!(stack_vec(&s), vec![X]);
}

#[test]
fn test_swap_front_top_after_wrap_uses_logical_head() {
    let mut q = queue(&[A, B, C, D, E]);
    q.dequeue().unwrap();
    q.dequeue().unwrap();
    q.enqueue(Y).unwrap();
    let mut s = stack(&[X]);

    swap_front_top(&mut q, &mut s).unwrap();
    assert_eq!(q.front(), Some(&X));
    assert_eq!(stack_vec(&s), vec![C]);
}

// ============== swap_three ==============

#[test]
fn test_swap_three_pairs_nearest_pieces() {
    let mut q = queue(&[A, B, C, D, E]);
    let mut s = stack(&[X, Y, Z]);

    swap_three(&mut q, &mut s).unwrap();
    assert_eq!(queue_vec(&q), vec![Z, Y, X, D, E]);
    // Bottom to top the reserve now reads C, B, A.
    assert_eq!(stack_vec(&s), vec![A, B, C]);
    assert_eq!(q.len(), 5);
    assert_eq!(s.len(), 3);
}

#[test]
fn test_swap_three_with_wrapped_queue() {
    let mut q = queue(&[A, B, C, D, E]);
    // Head moves to physical slot 3; the first three logical pieces span the wrap.
    for p in [A, B, C] {
        assert_eq!(q.dequeue(), Ok(p));
        q.enqueue(p).unwrap();
    }
    let mut s = stack(&[X, Y, Z]);

    swap_three(&mut q, &mut s).unwrap();
    assert_eq!(queue_vec(&q), vec![Z, Y, X, B, C]);
    assert_eq!(stack_vec(&s), vec![D, E, A]);
}

#[test]
fn test_swap_three_needs_exactly_three_reserved() {
    let mut q = queue(&[A, B, C, D, E]);
    let mut s = stack(&[X, Y]);

    let err = swap_three(&mut q, &mut s).unwrap_err();
    assert!(matches!(
        err,
        SupplyError::PreconditionUnmet {
            required: 3,
            queue_len: 5,
            reserve_len: 2
        }
    ));
    assert_eq!(queue_vec(&q), vec![A, B, C, D, E]);
    assert_eq!(stack_vec(&s), vec![Y, X]);
}

#[test]
fn test_swap_three_needs_three_queued() {
    let mut q = queue(&[A, B]);
    let mut s = stack(&[X, Y, Z]);

    assert!(matches!(
        swap_three(&mut q, &mut s),
        Err(SupplyError::PreconditionUnmet { queue_len: 2, .. })
    ));
    assert_eq!(queue_vec(&q), vec![A, B]);
    assert_eq!(stack_vec(&s), vec![Z, Y, X]);
}

#[test]
fn test_swap_three_on_exactly_three_queued() {
    let mut q = queue(&[A, B, C]);
    let mut s = stack(&[X, Y, Z]);

    swap_three(&mut q, &mut s).unwrap();
    assert_eq!(queue_vec(&q), vec![Z, Y, X]);
    assert_eq!(stack_vec(&s), vec![A, B, C]);
}
