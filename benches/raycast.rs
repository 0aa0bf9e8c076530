use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_raycast::core::{DrawTarget, FrameRenderer, GridMap, Player, Ray, Raycaster, Settings};
use tui_raycast::term::{Canvas, FrameBuffer, ScreenScale};

struct NullTarget;

impl DrawTarget for NullTarget {
    fn draw_vertical_line(&mut self, x: i32, y_top: i32, y_bottom: i32, intensity: u8) {
        black_box((x, y_top, y_bottom, intensity));
    }
}

fn bench_single_cast(c: &mut Criterion) {
    let map = GridMap::default();
    let rc = Raycaster::from_settings(&map, &Settings::default());

    c.bench_function("cast_to_east_wall", |b| {
        b.iter(|| rc.cast(black_box(Ray::new(300.0, 300.0, 0.0))))
    });

    c.bench_function("cast_long_diagonal", |b| {
        b.iter(|| rc.cast(black_box(Ray::new(70.0, 70.0, std::f64::consts::FRAC_PI_4))))
    });
}

fn bench_full_frame(c: &mut Criterion) {
    let map = GridMap::default();
    let renderer = FrameRenderer::new(Settings::default());
    let player = Player::new(300.0, 300.0, 1.0);

    c.bench_function("render_120_rays", |b| {
        b.iter(|| renderer.render(&map, black_box(&player), &mut NullTarget))
    });
}

fn bench_compose(c: &mut Criterion) {
    let settings = Settings::default();
    let scale = ScreenScale::from_settings(&settings);
    let mut canvas = Canvas::for_terminal(160, 48);
    let mut fb = FrameBuffer::new(160, 48);

    c.bench_function("canvas_slivers_and_compose", |b| {
        b.iter(|| {
            canvas.clear(0);
            for i in 0..settings.ray_count as i32 {
                canvas.draw_sliver(&scale, i * 5, 120, 360, 200);
            }
            canvas.compose_into(&mut fb);
        })
    });
}

criterion_group!(benches, bench_single_cast, bench_full_frame, bench_compose);
criterion_main!(benches);
