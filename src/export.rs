// Turns the canvas into the exported JPEG.
// Visual expectation: after save_jpeg() returns, an `image.jpeg` with the
// current drawing sits in the working directory.

use std::fs::File;
use std::io::{BufWriter, Write};

use image::codecs::jpeg::JpegEncoder;
use image::{ImageBuffer, Rgb};
use log::info;

use crate::error::Error;
use crate::types::Canvas;

/// Fixed name of the exported file. Every export overwrites the last one.
pub const EXPORT_FILE_NAME: &str = "image.jpeg";

/// Quality handed to the JPEG encoder.
const JPEG_QUALITY: u8 = 92;

/// JPEG-encode the whole surface into `writer`.
/// Writing to a plain Vec<u8> works too, which is how the tests look at
/// the encoded bytes without touching the filesystem.
pub fn write_jpeg<W: Write>(canvas: &Canvas, writer: W) -> Result<(), Error> {
    // 1) Unpack 0x00RRGGBB words into the Rgb<u8> buffer the encoder wants.
    let rgb_img: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_fn(canvas.width as u32, canvas.height as u32, |x, y| {
            let px = canvas.pixels[y as usize * canvas.width + x as usize];
            let r = ((px >> 16) & 0xFF) as u8;
            let g = ((px >> 8) & 0xFF) as u8;
            let b = (px & 0xFF) as u8;
            Rgb([r, g, b])
        });

    // 2) Encode. The background and every stroke land in one flat image;
    //    there are no layers to merge at this point.
    rgb_img.write_with_encoder(JpegEncoder::new_with_quality(writer, JPEG_QUALITY))?;
    Ok(())
}

/// Encode the surface and save it under the fixed export name.
pub fn save_jpeg(canvas: &Canvas) -> Result<(), Error> {
    let file = File::create(EXPORT_FILE_NAME)?;
    write_jpeg(canvas, BufWriter::new(file))?;
    info!("drawing exported to {EXPORT_FILE_NAME}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw;
    use crate::types::{BACKGROUND_COLOR, Point, StrokeStyle};

    fn decoded(canvas: &Canvas) -> image::RgbImage {
        let mut bytes = Vec::new();
        write_jpeg(canvas, &mut bytes).unwrap();
        image::load_from_memory(&bytes).unwrap().to_rgb8()
    }

    #[test]
    fn encoded_image_keeps_the_surface_dimensions() {
        let canvas = Canvas {
            width: 40,
            height: 20,
            pixels: vec![BACKGROUND_COLOR; 40 * 20],
        };
        assert_eq!(decoded(&canvas).dimensions(), (40, 20));
    }

    #[test]
    fn background_survives_encoding() {
        let canvas = Canvas {
            width: 32,
            height: 32,
            pixels: vec![BACKGROUND_COLOR; 32 * 32],
        };
        let img = decoded(&canvas);
        // JPEG is lossy, so compare channels with a small tolerance.
        for &(x, y) in &[(0, 0), (16, 16), (31, 31)] {
            let [r, g, b] = img.get_pixel(x, y).0;
            for channel in [r, g, b] {
                assert!(channel.abs_diff(0xD3) < 16, "channel {channel} at ({x},{y})");
            }
        }
    }

    #[test]
    fn ink_survives_encoding() {
        let mut canvas = Canvas {
            width: 64,
            height: 64,
            pixels: vec![BACKGROUND_COLOR; 64 * 64],
        };
        // A chunky dot so the sample sits in a flat black neighborhood.
        draw::stroke_segment(
            &mut canvas,
            Point::new(32.0, 32.0),
            Point::new(32.0, 32.0),
            StrokeStyle { color: 0x0000_0000, width: 12.0 },
        );
        let img = decoded(&canvas);
        let [r, g, b] = img.get_pixel(32, 32).0;
        assert!(r < 64 && g < 64 && b < 64, "center not dark: {r},{g},{b}");
        let [r, g, b] = img.get_pixel(4, 4).0;
        assert!(r > 180 && g > 180 && b > 180, "corner not light: {r},{g},{b}");
    }
}
