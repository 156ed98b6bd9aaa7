use std::fs::File;
use std::io::{self, BufWriter, Seek, Write};
use std::path::Path;

use image::{ImageFormat, RgbImage};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreviewWriteError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Encode `image` as PNG into any seekable writer.
pub fn encode_png<W: Write + Seek>(image: &RgbImage, writer: &mut W) -> Result<(), PreviewWriteError> {
    image.write_to(writer, ImageFormat::Png)?;
    Ok(())
}

/// Write `image` to `path` as PNG, replacing any existing file.
pub fn write_png<P: AsRef<Path>>(image: &RgbImage, path: P) -> Result<(), PreviewWriteError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    encode_png(image, &mut writer)?;
    writer.flush()?;

    let (width, height) = image.dimensions();
    log::info!("Wrote {}x{} preview to {}", width, height, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_encode_png_signature() {
        let image = RgbImage::from_pixel(3, 2, image::Rgb([67, 101, 138]));
        let mut buffer = Cursor::new(Vec::new());
        encode_png(&image, &mut buffer).unwrap();
        assert_eq!(&buffer.get_ref()[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_write_png_file() {
        let path = std::env::temp_dir().join(format!("structview-{}-out.png", std::process::id()));
        let image = RgbImage::from_pixel(5, 4, image::Rgb([200, 200, 200]));
        write_png(&image, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(decoded.dimensions(), (5, 4));
        assert_eq!(decoded.get_pixel(4, 3).0, [200, 200, 200]);
    }
}
