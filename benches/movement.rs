use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tile_walker::core::{Grid, MovementController, SAMPLE_MAP};
use tile_walker::term::{FrameBuffer, MapView, Viewport};
use tile_walker::types::Direction;

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_sample_map", |b| {
        b.iter(|| Grid::parse(black_box(SAMPLE_MAP)))
    });
}

fn bench_handle_input(c: &mut Criterion) {
    let mut game = MovementController::new(Grid::parse(SAMPLE_MAP).unwrap()).unwrap();
    let mut i = 0usize;

    c.bench_function("handle_input", |b| {
        b.iter(|| {
            i = i.wrapping_add(1);
            game.handle_input(black_box(Direction::ALL[i % 4]))
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let game = MovementController::new(Grid::parse(SAMPLE_MAP).unwrap()).unwrap();
    let view = MapView::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_into_80x24", |b| {
        b.iter(|| {
            view.render_into(&game.current_state(), black_box(Viewport::new(80, 24)), &mut fb);
        })
    });
}

criterion_group!(benches, bench_parse, bench_handle_input, bench_render);
criterion_main!(benches);
