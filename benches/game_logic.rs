use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_playroom::core::{Puzzle, RecallGame, RecallSnapshot};
use tui_playroom::term::{RecallView, Viewport};
use tui_playroom::types::{Difficulty, Hue, RecallEvent, RecallPhase, TICK_MS};

fn bench_tick(c: &mut Criterion) {
    let mut game = RecallGame::new(12345);
    let _ = game.start_round(10);

    c.bench_function("recall_tick_16ms", |b| {
        b.iter(|| {
            if game.phase() != RecallPhase::Presenting {
                game.reset_session();
                let _ = game.start_round(10);
            }
            game.tick(black_box(TICK_MS));
            game.take_last_event()
        })
    });
}

fn bench_full_round(c: &mut Criterion) {
    c.bench_function("recall_full_round_len_6", |b| {
        b.iter(|| {
            let mut game = RecallGame::new(black_box(7));
            let _ = game.start_round(6);

            let mut sequence = [Hue::Red; 6];
            let mut seen = 0;
            while game.phase() == RecallPhase::Presenting {
                game.tick(TICK_MS);
                if let Some(RecallEvent::StepLit { hue, .. }) = game.take_last_event() {
                    sequence[seen] = hue;
                    seen += 1;
                }
            }
            for &hue in &sequence[..seen] {
                let _ = game.press(hue);
            }
            game.score()
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut game = RecallGame::new(12345);
    let _ = game.start_round(10);
    game.tick(TICK_MS);
    let mut snap = RecallSnapshot::default();

    c.bench_function("recall_snapshot_into", |b| {
        b.iter(|| {
            game.snapshot_into(black_box(&mut snap));
            snap.score
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut game = RecallGame::new(12345);
    let _ = game.start_round(8);
    let snap = game.snapshot();
    let view = RecallView::default();
    let vp = Viewport::new(80, 24);
    let mut fb = view.render(&snap, vp);

    c.bench_function("recall_render_80x24", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), vp, &mut fb);
        })
    });
}

fn bench_puzzle_scramble(c: &mut Criterion) {
    let mut puzzle = Puzzle::new(12345, Difficulty::Hard);

    c.bench_function("puzzle_scramble_5x5", |b| {
        b.iter(|| {
            puzzle.scramble();
            puzzle.solved()
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_full_round,
    bench_snapshot,
    bench_render,
    bench_puzzle_scramble
);
criterion_main!(benches);
