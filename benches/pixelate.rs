use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use ppm_pixelator::image_pipeline::{
    pixelate, FormatTag, PixelateConfig, PixelatePipeline, Raster,
};

fn generate_mock_raster(width: usize, height: usize) -> Raster {
    let mut pixels = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            let value = ((x + y) % 256) as u8;
            pixels.extend_from_slice(&[value, value / 2, 255 - value]);
        }
    }
    Raster {
        width,
        height,
        max_color_value: 255,
        format: FormatTag::Binary,
        pixels,
    }
}

fn generate_mock_ppm(width: usize, height: usize) -> Vec<u8> {
    let raster = generate_mock_raster(width, height);
    let mut data = format!("P6\n{} {}\n255\n", width, height).into_bytes();
    data.extend_from_slice(&raster.pixels);
    data
}

fn benchmark_pixelate_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("pixelate_by_size");

    let sizes = vec![
        (100, 100, "100x100"),
        (500, 500, "500x500"),
        (1000, 1000, "1000x1000"),
    ];

    for (width, height, label) in sizes {
        let raster = generate_mock_raster(width, height);

        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &raster,
            |b, raster| {
                b.iter(|| pixelate(black_box(raster), 30));
            },
        );
    }

    group.finish();
}

fn benchmark_block_widths(c: &mut Criterion) {
    let mut group = c.benchmark_group("block_widths");
    let raster = generate_mock_raster(500, 500);

    for block_width in [1usize, 4, 30, 250] {
        group.bench_with_input(
            BenchmarkId::from_parameter(block_width),
            &block_width,
            |b, &block_width| {
                b.iter(|| pixelate(black_box(&raster), block_width));
            },
        );
    }

    group.finish();
}

fn benchmark_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    let mock_data = generate_mock_ppm(500, 500);

    group.bench_function("decode_pixelate_encode", |b| {
        let pipeline = PixelatePipeline::new(PixelateConfig::default()).unwrap();

        b.iter(|| {
            let mut output = Vec::new();
            let _ = pipeline.convert(black_box(&mock_data), &mut output);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_pixelate_sizes,
    benchmark_block_widths,
    benchmark_full_pipeline
);
criterion_main!(benches);
