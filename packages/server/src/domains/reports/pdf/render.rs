//! Turns a laid-out [`Canvas`] into PDF bytes with printpdf.

use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, Image, ImageTransform, IndirectFontRef, Line, Mm, PdfDocument,
    PdfLayerReference, Point, Rect, Rgb,
};

use super::layout::{Canvas, DrawOp, FontWeight, Rgb8, PAGE_HEIGHT, PAGE_WIDTH};
use crate::domains::reports::errors::ReportError;

const LAYER_NAME: &str = "Camada 1";
const IMAGE_DPI: f32 = 300.0;

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Fonts {
    fn get(&self, weight: FontWeight) -> &IndirectFontRef {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }
}

fn pdf_err(e: impl std::fmt::Display) -> ReportError {
    ReportError::Pdf(e.to_string())
}

fn color(c: Rgb8) -> Color {
    Color::Rgb(Rgb::new(
        c.0 as f32 / 255.0,
        c.1 as f32 / 255.0,
        c.2 as f32 / 255.0,
        None,
    ))
}

/// Layout y runs top-down, PDF y bottom-up
fn flip(y: f32) -> Mm {
    Mm(PAGE_HEIGHT - y)
}

pub fn render_pdf(canvas: &Canvas) -> Result<Vec<u8>, ReportError> {
    let (doc, first_page, first_layer) =
        PdfDocument::new(&canvas.title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER_NAME);

    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(pdf_err)?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_err)?,
    };

    for (i, page) in canvas.pages.iter().enumerate() {
        let (page_index, layer_index) = if i == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER_NAME)
        };
        let layer = doc.get_page(page_index).get_layer(layer_index);

        for op in &page.ops {
            draw(&layer, &fonts, op);
        }
    }

    doc.save_to_bytes().map_err(pdf_err)
}

fn draw(layer: &PdfLayerReference, fonts: &Fonts, op: &DrawOp) {
    match op {
        DrawOp::Text {
            x,
            y,
            size,
            weight,
            color: c,
            text,
        } => {
            layer.set_fill_color(color(*c));
            layer.use_text(text.as_str(), *size, Mm(*x), flip(*y), fonts.get(*weight));
        }
        DrawOp::Rect {
            x,
            y,
            width,
            height,
            fill,
            stroke,
        } => {
            let mode = match (fill, stroke) {
                (Some(_), Some(_)) => PaintMode::FillStroke,
                (Some(_), None) => PaintMode::Fill,
                _ => PaintMode::Stroke,
            };
            if let Some(c) = fill {
                layer.set_fill_color(color(*c));
            }
            if let Some(c) = stroke {
                layer.set_outline_color(color(*c));
                layer.set_outline_thickness(0.5);
            }
            let rect = Rect::new(Mm(*x), flip(y + height), Mm(x + width), flip(*y)).with_mode(mode);
            layer.add_rect(rect);
        }
        DrawOp::Line {
            x1,
            y1,
            x2,
            y2,
            color: c,
        } => {
            layer.set_outline_color(color(*c));
            layer.set_outline_thickness(0.5);
            layer.add_line(Line {
                points: vec![
                    (Point::new(Mm(*x1), flip(*y1)), false),
                    (Point::new(Mm(*x2), flip(*y2)), false),
                ],
                is_closed: false,
            });
        }
        DrawOp::Image {
            x,
            y,
            width,
            height,
            image,
        } => {
            use printpdf::image_crate::GenericImageView;

            let (px_w, px_h) = image.dimensions();
            if px_w == 0 || px_h == 0 {
                return;
            }
            // Natural size at IMAGE_DPI, scaled to the requested box
            let natural_w = px_w as f32 / IMAGE_DPI * 25.4;
            let natural_h = px_h as f32 / IMAGE_DPI * 25.4;

            Image::from_dynamic_image(&**image).add_to_layer(
                layer.clone(),
                ImageTransform {
                    translate_x: Some(Mm(*x)),
                    translate_y: Some(flip(y + height)),
                    scale_x: Some(width / natural_w),
                    scale_y: Some(height / natural_h),
                    dpi: Some(IMAGE_DPI),
                    ..Default::default()
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::reports::pdf::layout::Rgb8;
    use printpdf::image_crate::DynamicImage;
    use std::sync::Arc;

    #[test]
    fn test_renders_multi_page_pdf() {
        let mut canvas = Canvas::new("Teste");
        canvas.text(15.0, 20.0, 12.0, FontWeight::Bold, "Ficha");
        canvas.fill_rect(15.0, 30.0, 180.0, 8.0, Rgb8::BLUE);
        canvas.stroke_rect(15.0, 45.0, 40.0, 40.0, Rgb8::GREY);
        canvas.line(15.0, 35.0, 195.0, 35.0, Rgb8::GREY);
        canvas.image(16.0, 46.0, 38.0, 38.0, Arc::new(DynamicImage::new_rgb8(8, 8)));
        canvas.add_page();
        canvas.text(15.0, 20.0, 10.0, FontWeight::Regular, "Segunda página");

        let bytes = render_pdf(&canvas).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }
}
