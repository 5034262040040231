use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetris_stack::core::{
    reserve, swap_front_top, swap_three, ReserveStack, Session, SessionConfig, SupplySnapshot,
    UpcomingQueue,
};
use tetris_stack::types::{Piece, PieceKind, SupplyAction};

fn filled() -> (UpcomingQueue, ReserveStack) {
    let mut queue = UpcomingQueue::new();
    let mut stack = ReserveStack::new();
    for id in 0..5 {
        let _ = queue.enqueue(Piece::new(PieceKind::ALL[id as usize % 4], id));
    }
    for id in 10..13 {
        let _ = stack.push(Piece::new(PieceKind::T, id));
    }
    (queue, stack)
}

fn bench_queue_cycle(c: &mut Criterion) {
    let (mut queue, _) = filled();

    c.bench_function("queue_dequeue_enqueue", |b| {
        b.iter(|| {
            if let Ok(p) = queue.dequeue() {
                let _ = queue.enqueue(black_box(p));
            }
        })
    });
}

fn bench_swap_front_top(c: &mut Criterion) {
    let (mut queue, mut stack) = filled();

    c.bench_function("swap_front_top", |b| {
        b.iter(|| {
            let _ = swap_front_top(black_box(&mut queue), black_box(&mut stack));
        })
    });
}

fn bench_swap_three(c: &mut Criterion) {
    let (mut queue, mut stack) = filled();

    c.bench_function("swap_three", |b| {
        b.iter(|| {
            let _ = swap_three(black_box(&mut queue), black_box(&mut stack));
        })
    });
}

fn bench_reserve_and_use(c: &mut Criterion) {
    let (mut queue, mut stack) = filled();
    let _ = stack.pop();

    c.bench_function("reserve_then_pop", |b| {
        b.iter(|| {
            if let Ok(p) = reserve(&mut queue, &mut stack) {
                let _ = stack.pop();
                let _ = queue.enqueue(black_box(p));
            }
        })
    });
}

fn bench_session_refill(c: &mut Criterion) {
    let mut session = Session::new(SessionConfig {
        seed: 12345,
        auto_refill: true,
    });

    c.bench_function("session_play_with_refill", |b| {
        b.iter(|| {
            let _ = session.apply_action(black_box(SupplyAction::Play));
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut session = Session::new(SessionConfig {
        seed: 12345,
        auto_refill: true,
    });
    let _ = session.apply_action(SupplyAction::Reserve);
    let mut snap = SupplySnapshot::empty();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            session.snapshot_into(black_box(&mut snap));
        })
    });
}

criterion_group!(
    benches,
    bench_queue_cycle,
    bench_swap_front_top,
    bench_swap_three,
    bench_reserve_and_use,
    bench_session_refill,
    bench_snapshot
);
criterion_main!(benches);
