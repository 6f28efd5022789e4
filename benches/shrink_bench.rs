use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use image::DynamicImage;
use img_shrink::processing::{resize_image, ShrinkOptions};
use img_shrink::utils::get_size_format;

fn bench_size_format(c: &mut Criterion) {
    c.bench_function("get_size_format", |b| {
        b.iter(|| get_size_format(black_box(1_253_656_678)))
    });
}

fn bench_ratio_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("ratio_resize");
    let options = ShrinkOptions::new(0.5, 90, None, None, false).unwrap();

    for (width, height) in [(800u32, 600u32), (1920u32, 1080u32)] {
        let img = DynamicImage::new_rgb8(width, height);

        group.bench_with_input(
            BenchmarkId::new("lanczos3", format!("{}x{}", width, height)),
            &img,
            |b, img| {
                b.iter(|| {
                    let mut resized = img.clone();
                    resize_image(&mut resized, &options);
                    resized
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_size_format, bench_ratio_resize);
criterion_main!(benches);
