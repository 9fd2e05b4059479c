//! Image to PDF conversion
//!
//! Builds a PDF with one page per input image. JPEG data is embedded as-is
//! behind a DCTDecode filter (dimensions read from the SOF marker); PNG
//! data is decoded to 8-bit RGB and re-compressed as FlateDecode.

use crate::error::PdfToolError;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use lopdf::{dictionary, Dictionary, Document, Object, Stream};
use std::io::Write;

/// One source image for [`images_to_pdf`]
#[derive(Debug, Clone)]
pub struct ImageInput {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// A4 portrait in points; pages never exceed this box
const PAGE_MAX: (f32, f32) = (595.0, 842.0);

struct EmbeddedImage {
    width: u32,
    height: u32,
    color_space: &'static str,
    filter: &'static str,
    data: Vec<u8>,
}

/// Convert images to a single PDF, one page per image in input order.
pub fn images_to_pdf(images: &[ImageInput]) -> Result<Vec<u8>, PdfToolError> {
    if images.is_empty() {
        return Err(PdfToolError::Operation("No images to convert".into()));
    }

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let mut kids = Vec::with_capacity(images.len());

    for input in images {
        let image = embed_image(input)?;

        let xobject = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => image.width as i64,
                "Height" => image.height as i64,
                "ColorSpace" => image.color_space,
                "BitsPerComponent" => 8,
                "Filter" => image.filter,
            },
            image.data,
        );
        let xobject_id = doc.add_object(xobject);

        // Image at native 72 dpi size, scaled down to fit A4 if needed
        let (page_w, page_h) = fit_page(image.width as f32, image.height as f32);
        let content = format!("q {:.2} 0 0 {:.2} 0 0 cm /Im0 Do Q", page_w, page_h);
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => Object::Reference(pages_id),
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(page_w),
                Object::Real(page_h),
            ],
            "Contents" => Object::Reference(content_id),
            "Resources" => dictionary! {
                "XObject" => dictionary! { "Im0" => Object::Reference(xobject_id) },
            },
        });
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut out = Vec::new();
    doc.save_to(&mut out)
        .map_err(|e| PdfToolError::Operation(format!("Could not write PDF: {}", e)))?;
    Ok(out)
}

fn fit_page(width: f32, height: f32) -> (f32, f32) {
    let scale = (PAGE_MAX.0 / width).min(PAGE_MAX.1 / height).min(1.0);
    (width * scale, height * scale)
}

fn embed_image(input: &ImageInput) -> Result<EmbeddedImage, PdfToolError> {
    match input.bytes.as_slice() {
        [0xFF, 0xD8, 0xFF, ..] => embed_jpeg(input),
        [0x89, b'P', b'N', b'G', ..] => embed_png(input),
        _ => Err(PdfToolError::UnsupportedImage(format!(
            "{}: only JPEG and PNG are supported",
            input.name
        ))),
    }
}

/// JPEG passes through untouched; PDF viewers decode DCT natively.
fn embed_jpeg(input: &ImageInput) -> Result<EmbeddedImage, PdfToolError> {
    let (width, height, components) = jpeg_dimensions(&input.bytes).ok_or_else(|| {
        PdfToolError::UnsupportedImage(format!("{}: malformed JPEG", input.name))
    })?;
    let color_space = match components {
        1 => "DeviceGray",
        3 => "DeviceRGB",
        4 => "DeviceCMYK",
        n => {
            return Err(PdfToolError::UnsupportedImage(format!(
                "{}: unsupported JPEG component count {}",
                input.name, n
            )))
        }
    };
    Ok(EmbeddedImage {
        width,
        height,
        color_space,
        filter: "DCTDecode",
        data: input.bytes.clone(),
    })
}

/// Scan JPEG markers for the start-of-frame header
fn jpeg_dimensions(bytes: &[u8]) -> Option<(u32, u32, u8)> {
    let mut pos = 2; // past SOI
    while pos + 4 <= bytes.len() {
        if bytes[pos] != 0xFF {
            return None;
        }
        let marker = bytes[pos + 1];
        let length = u16::from_be_bytes([bytes[pos + 2], bytes[pos + 3]]) as usize;
        let is_sof = matches!(marker, 0xC0..=0xCF) && !matches!(marker, 0xC4 | 0xC8 | 0xCC);
        if is_sof {
            if pos + 9 >= bytes.len() {
                return None;
            }
            let height = u16::from_be_bytes([bytes[pos + 5], bytes[pos + 6]]) as u32;
            let width = u16::from_be_bytes([bytes[pos + 7], bytes[pos + 8]]) as u32;
            let components = bytes[pos + 9];
            return Some((width, height, components));
        }
        pos += 2 + length;
    }
    None
}

/// Decode the PNG, flatten to RGB and deflate the raw pixels
fn embed_png(input: &ImageInput) -> Result<EmbeddedImage, PdfToolError> {
    let mut decoder = png::Decoder::new(input.bytes.as_slice());
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| PdfToolError::UnsupportedImage(format!("{}: {}", input.name, e)))?;

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let frame = reader
        .next_frame(&mut buf)
        .map_err(|e| PdfToolError::UnsupportedImage(format!("{}: {}", input.name, e)))?;
    buf.truncate(frame.buffer_size());

    let rgb: Vec<u8> = match frame.color_type {
        png::ColorType::Rgb => buf,
        png::ColorType::Rgba => buf.chunks_exact(4).flat_map(|p| [p[0], p[1], p[2]]).collect(),
        png::ColorType::Grayscale => buf.iter().flat_map(|&g| [g, g, g]).collect(),
        png::ColorType::GrayscaleAlpha => {
            buf.chunks_exact(2).flat_map(|p| [p[0], p[0], p[0]]).collect()
        }
        png::ColorType::Indexed => {
            return Err(PdfToolError::UnsupportedImage(format!(
                "{}: indexed PNG not expanded",
                input.name
            )))
        }
    };

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(&rgb)
        .and_then(|_| encoder.finish())
        .map(|data| EmbeddedImage {
            width: frame.width,
            height: frame.height,
            color_space: "DeviceRGB",
            filter: "FlateDecode",
            data,
        })
        .map_err(|e| PdfToolError::Operation(format!("Deflate failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal 1x1 red JPEG is overkill to inline; synthesise a JPEG header
    /// with a valid SOF0 for the dimension parser instead.
    fn fake_jpeg(width: u16, height: u16, components: u8) -> Vec<u8> {
        let mut bytes = vec![0xFF, 0xD8];
        // APP0 segment
        bytes.extend_from_slice(&[0xFF, 0xE0, 0x00, 0x04, 0x4A, 0x46]);
        // SOF0
        bytes.extend_from_slice(&[0xFF, 0xC0, 0x00, 0x0B, 0x08]);
        bytes.extend_from_slice(&height.to_be_bytes());
        bytes.extend_from_slice(&width.to_be_bytes());
        bytes.push(components);
        bytes.extend_from_slice(&[0x01, 0x11, 0x00]);
        bytes
    }

    fn tiny_png(width: u32, height: u32) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, width, height);
            encoder.set_color(png::ColorType::Rgb);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            let row = vec![200u8; (width * height * 3) as usize];
            writer.write_image_data(&row).unwrap();
        }
        out
    }

    #[test]
    fn test_jpeg_dimension_parsing() {
        let jpeg = fake_jpeg(640, 480, 3);
        assert_eq!(jpeg_dimensions(&jpeg), Some((640, 480, 3)));
    }

    #[test]
    fn test_png_to_pdf_single_page() {
        let input = ImageInput { name: "dot.png".into(), bytes: tiny_png(4, 4) };
        let pdf = images_to_pdf(&[input]).unwrap();
        let doc = Document::load_mem(&pdf).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_one_page_per_image() {
        let inputs: Vec<ImageInput> = (0..3)
            .map(|i| ImageInput { name: format!("{i}.png"), bytes: tiny_png(2, 2) })
            .collect();
        let pdf = images_to_pdf(&inputs).unwrap();
        let doc = Document::load_mem(&pdf).unwrap();
        assert_eq!(doc.get_pages().len(), 3);
    }

    #[test]
    fn test_large_image_page_capped_to_a4() {
        assert_eq!(fit_page(595.0, 842.0), (595.0, 842.0));
        let (w, h) = fit_page(1190.0, 842.0);
        assert!(w <= PAGE_MAX.0 && h <= PAGE_MAX.1);
        assert!((w / h - 1190.0 / 842.0).abs() < 0.01);
    }

    #[test]
    fn test_small_image_not_upscaled() {
        assert_eq!(fit_page(100.0, 50.0), (100.0, 50.0));
    }

    #[test]
    fn test_rejects_unknown_format() {
        let input = ImageInput { name: "x.gif".into(), bytes: b"GIF89a".to_vec() };
        assert!(matches!(
            images_to_pdf(&[input]),
            Err(PdfToolError::UnsupportedImage(_))
        ));
    }

    #[test]
    fn test_rejects_empty_input() {
        assert!(images_to_pdf(&[]).is_err());
    }
}
