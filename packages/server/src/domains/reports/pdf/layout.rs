//! Page model shared by every PDF report.
//!
//! Layout code places text, boxes and images on A4 pages using millimetres
//! measured from the top-left corner, the way a printed form is described.
//! `render` turns the result into an actual PDF.

use printpdf::image_crate::DynamicImage;
use std::sync::Arc;

pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;

const PT_TO_MM: f32 = 25.4 / 72.0;

/// Portion of the font size above the baseline for capital letters
const ASCENT: f32 = 0.72;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb8(pub u8, pub u8, pub u8);

impl Rgb8 {
    pub const BLACK: Rgb8 = Rgb8(0, 0, 0);
    pub const WHITE: Rgb8 = Rgb8(255, 255, 255);
    pub const GREY: Rgb8 = Rgb8(150, 150, 150);
    /// Section header bars
    pub const BLUE: Rgb8 = Rgb8(37, 99, 235);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

#[derive(Debug, Clone)]
pub enum DrawOp {
    /// `y` is the baseline
    Text {
        x: f32,
        y: f32,
        size: f32,
        weight: FontWeight,
        color: Rgb8,
        text: String,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Option<Rgb8>,
        stroke: Option<Rgb8>,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: Rgb8,
    },
    Image {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        image: Arc<DynamicImage>,
    },
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

impl Page {
    /// Every text run on the page, in drawing order
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn has_text(&self, wanted: &str) -> bool {
        self.texts().contains(&wanted)
    }
}

/// A laid-out document, ready for rendering
#[derive(Debug, Clone)]
pub struct Canvas {
    pub title: String,
    pub pages: Vec<Page>,
}

impl Canvas {
    /// Starts with one blank page.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            pages: vec![Page::default()],
        }
    }

    pub fn add_page(&mut self) {
        self.pages.push(Page::default());
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn current(&mut self) -> &mut Page {
        if self.pages.is_empty() {
            self.pages.push(Page::default());
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    pub fn push(&mut self, op: DrawOp) {
        self.current().ops.push(op);
    }

    pub fn text(&mut self, x: f32, y: f32, size: f32, weight: FontWeight, text: impl Into<String>) {
        self.colored_text(x, y, size, weight, Rgb8::BLACK, text);
    }

    pub fn colored_text(
        &mut self,
        x: f32,
        y: f32,
        size: f32,
        weight: FontWeight,
        color: Rgb8,
        text: impl Into<String>,
    ) {
        self.push(DrawOp::Text {
            x,
            y,
            size,
            weight,
            color,
            text: text.into(),
        });
    }

    /// Text whose top edge sits at `top`
    pub fn text_from_top(&mut self, x: f32, top: f32, size: f32, weight: FontWeight, text: impl Into<String>) {
        self.text(x, top + cap_height(size), size, weight, text);
    }

    /// Text horizontally centred on `center_x`
    pub fn centered_text(&mut self, center_x: f32, y: f32, size: f32, weight: FontWeight, text: &str) {
        let x = center_x - text_width(text, size, weight) / 2.0;
        self.text(x, y, size, weight, text);
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb8) {
        self.push(DrawOp::Rect {
            x,
            y,
            width,
            height,
            fill: Some(color),
            stroke: None,
        });
    }

    pub fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb8) {
        self.push(DrawOp::Rect {
            x,
            y,
            width,
            height,
            fill: None,
            stroke: Some(color),
        });
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Rgb8) {
        self.push(DrawOp::Line {
            x1,
            y1,
            x2,
            y2,
            color,
        });
    }

    pub fn image(&mut self, x: f32, y: f32, width: f32, height: f32, image: Arc<DynamicImage>) {
        self.push(DrawOp::Image {
            x,
            y,
            width,
            height,
            image,
        });
    }
}

pub fn pt_to_mm(pt: f32) -> f32 {
    pt * PT_TO_MM
}

/// Distance from the top of capitals to the baseline, in mm
pub fn cap_height(size: f32) -> f32 {
    pt_to_mm(size) * ASCENT
}

/// Approximate Helvetica advance width of a character, in em.
fn char_width(c: char, weight: FontWeight) -> f32 {
    let regular = match c {
        ' ' | 'i' | 'j' | 'l' | '.' | ',' | ':' | ';' | '!' | '|' | '\'' | 'í' | 'ì' => 0.278,
        'f' | 't' | 'I' | '/' | '(' | ')' | '[' | ']' | '-' | 'r' => 0.333,
        'm' | 'M' | 'W' => 0.833,
        'w' => 0.722,
        '@' => 1.015,
        c if c.is_ascii_digit() => 0.556,
        'c' | 'k' | 's' | 'v' | 'x' | 'y' | 'z' | 'J' | 'ç' => 0.5,
        c if c.is_uppercase() => 0.667,
        _ => 0.556,
    };
    match weight {
        FontWeight::Regular => regular,
        FontWeight::Bold => regular * 1.08,
    }
}

/// Width of `text` in mm at `size` points.
pub fn text_width(text: &str, size: f32, weight: FontWeight) -> f32 {
    let ems: f32 = text.chars().map(|c| char_width(c, weight)).sum();
    ems * pt_to_mm(size)
}

/// Greedy word wrap to `max_width` mm.
///
/// Explicit newlines are kept. Words wider than the line are split.
pub fn wrap_text(text: &str, max_width: f32, size: f32, weight: FontWeight) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();

        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };

            if text_width(&candidate, size, weight) <= max_width {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }

            // A single word that still does not fit is broken by characters
            for c in word.chars() {
                current.push(c);
                if text_width(&current, size, weight) > max_width && current.chars().count() > 1 {
                    let overflow = current.pop().unwrap_or(c);
                    lines.push(std::mem::take(&mut current));
                    current.push(overflow);
                }
            }
        }

        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
