//! Scale3x regression test
//!
//! Differential check of the banded engine against the per-pixel
//! reference, plus geometry and center-pixel properties.

use scalex_core::{Bgr24, Bgr32, Bgra32, Pixel, PixelBuffer, count_matching};
use scalex_test::{RegParams, benchmark_scene, noise, palette_noise};
use scalex_transform::{PixelArtScale, scale_pixel_art, scale3x, scale3x_reference};

#[test]
fn scale3x_reg() {
    let mut rp = RegParams::new("scale3x");

    check_engines(&mut rp, &noise::<Bgra32>(29, 19, 11).expect("noise"), "noise bgra32");
    check_engines(&mut rp, &noise::<Bgr24>(7, 13, 12).expect("noise"), "noise bgr24");

    let two = [Bgr24::BLACK, Bgr24::WHITE];
    check_engines(&mut rp, &palette_noise(50, 40, &two, 13).expect("palette"), "palette2");

    let four = [
        Bgra32::BLACK,
        Bgra32::WHITE,
        Bgra32::TRANSPARENT,
        Bgra32::new(200, 100, 50, 255),
    ];
    check_engines(&mut rp, &palette_noise(33, 21, &four, 14).expect("palette"), "palette4");

    check_engines(&mut rp, &palette_noise(1, 25, &two, 15).expect("column"), "1-wide");
    check_engines(&mut rp, &palette_noise(25, 1, &two, 16).expect("row"), "1-tall");

    // --- Benchmark scene: three subpixels rounded off per corner ---
    let scene = benchmark_scene().expect("benchmark_scene");
    let out = check_engines(&mut rp, &scene, "benchmark scene");
    let blue = Bgr32::new(0, 0, 255);
    rp.compare_values(
        (9 * count_matching(&scene, blue, false) - 12) as f64,
        count_matching(&out, blue, false) as f64,
        0.0,
    );

    let via_mode = scale_pixel_art(&scene, PixelArtScale::X3).expect("scale_pixel_art");
    rp.compare_buffers(&out, &via_mode);

    // --- 1x1 and empty sources ---
    let one = PixelBuffer::new_filled(1, 1, Bgr32::new(1, 2, 3)).expect("1x1");
    let out = scale3x(&one).expect("scale3x 1x1");
    let expected = PixelBuffer::new_filled(3, 3, Bgr32::new(1, 2, 3)).expect("3x3");
    rp.compare_buffers(&expected, &out);

    let empty = PixelBuffer::<Bgr32>::new(4, 0).expect("empty");
    let out = scale3x(&empty).expect("scale3x empty");
    rp.compare_values(12.0, out.width() as f64, 0.0);
    rp.compare_values(0.0, out.height() as f64, 0.0);

    assert!(rp.cleanup(), "scale3x regression test failed");
}

fn check_engines<P: Pixel>(rp: &mut RegParams, src: &PixelBuffer<P>, label: &str) -> PixelBuffer<P> {
    let fast = scale3x(src).expect("scale3x");
    let slow = scale3x_reference(src).expect("scale3x_reference");
    eprintln!("  {}: {}x{} -> {}x{}", label, src.width(), src.height(), fast.width(), fast.height());

    rp.compare_values((3 * src.width()) as f64, fast.width() as f64, 0.0);
    rp.compare_values((3 * src.height()) as f64, fast.height() as f64, 0.0);
    rp.compare_buffers(&slow, &fast);

    // Center of every block is the source pixel
    let centers_ok = (0..src.height()).all(|y| {
        (0..src.width()).all(|x| fast.get(3 * x + 1, 3 * y + 1) == src.get(x, y))
    });
    rp.compare_values(1.0, if centers_ok { 1.0 } else { 0.0 }, 0.0);
    fast
}
