//! Probe and decode a HEIF/HEIC file from the command line.
//!
//! Prints the negotiated descriptor, decodes, and reports the assembled
//! layout and segment sizes.
//!
//! Run: `cargo run --example decode_file --features libheif -- image.heic`

use zenheif::{DecodeRequest, LibheifBackend, OutputPolicy, PixelFormat};

fn main() {
    let path = std::env::args()
        .nth(1)
        .expect("usage: decode_file <image.heic>");
    let data = std::fs::read(&path).expect("read input file");

    let backend = LibheifBackend::new();

    let descriptor = DecodeRequest::new(&backend, &data)
        .probe()
        .expect("probe failed");
    println!(
        "{path}: {}x{} {:?} premultiplied={}",
        descriptor.width, descriptor.height, descriptor.format, descriptor.premultiplied_alpha,
    );

    let image = DecodeRequest::new(&backend, &data)
        .decode()
        .expect("decode failed");
    println!("layout: {:?}", image.layout());
    println!("buffer: {} bytes", image.bytes().len());
    if let PixelFormat::YCbCr(_) = image.descriptor().format {
        println!(
            "segments: y={} cb={} cr={}",
            image.y().map_or(0, |s| s.len()),
            image.cb().map_or(0, |s| s.len()),
            image.cr().map_or(0, |s| s.len()),
        );
    }

    let rgba = DecodeRequest::new(&backend, &data)
        .with_policy(OutputPolicy::ForceRgba)
        .decode()
        .expect("forced RGBA decode failed");
    println!(
        "forced RGBA: {} bytes, pixel view available: {}",
        rgba.bytes().len(),
        rgba.as_rgba().is_some(),
    );
}
