//! Visual side of a comparison: the diverging color scale, the highlighted
//! table and the standalone legend.

use crate::compare::Comparison;
use crate::table::{ResultTable, NUMERIC_COLUMNS};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use std::fmt::Write;

/// Backgrounds darker than this get light text.
const TEXT_COLOR_THRESHOLD: f64 = 0.408;

const LIGHT_TEXT: Rgb = Rgb(0xf1, 0xf1, 0xf1);
const DARK_TEXT: Rgb = Rgb(0x00, 0x00, 0x00);

/// Purple-orange diverging palette, low (orange) to high (purple).
const PUOR: [Rgb; 11] = [
    Rgb(0x7f, 0x3b, 0x08),
    Rgb(0xb3, 0x58, 0x06),
    Rgb(0xe0, 0x82, 0x14),
    Rgb(0xfd, 0xb8, 0x63),
    Rgb(0xfe, 0xe0, 0xb6),
    Rgb(0xf7, 0xf7, 0xf7),
    Rgb(0xd8, 0xda, 0xeb),
    Rgb(0xb2, 0xab, 0xd2),
    Rgb(0x80, 0x73, 0xac),
    Rgb(0x54, 0x27, 0x88),
    Rgb(0x2d, 0x00, 0x4b),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// WCAG relative luminance.
    pub fn luminance(&self) -> f64 {
        let linear = |c: u8| {
            let x = c as f64 / 255.0;
            if x <= 0.04045 {
                x / 12.92
            } else {
                ((x + 0.055) / 1.055).powf(2.4)
            }
        };
        0.2126 * linear(self.0) + 0.7152 * linear(self.1) + 0.0722 * linear(self.2)
    }

    /// Readable text color on top of this background.
    pub fn text_color(&self) -> Rgb {
        if self.luminance() < TEXT_COLOR_THRESHOLD {
            LIGHT_TEXT
        } else {
            DARK_TEXT
        }
    }

    fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb {
            r: c.0,
            g: c.1,
            b: c.2,
        }
    }
}

/// Maps values in [-bound, +bound] onto the palette, zero at the neutral midpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DivergingScale {
    bound: f64,
}

impl DivergingScale {
    pub fn new(bound: f64) -> Self {
        Self { bound: bound.abs() }
    }

    pub fn bound(&self) -> f64 {
        self.bound
    }

    /// Position in [0, 1]; values beyond the bound are clipped.
    pub fn normalize(&self, value: f64) -> f64 {
        if self.bound == 0.0 {
            return 0.5;
        }
        ((value + self.bound) / (2.0 * self.bound)).clamp(0.0, 1.0)
    }

    /// `None` for NaN, which stays unstyled.
    pub fn color(&self, value: f64) -> Option<Rgb> {
        if value.is_nan() {
            return None;
        }
        Some(sample(self.normalize(value)))
    }
}

fn sample(t: f64) -> Rgb {
    let pos = t * (PUOR.len() - 1) as f64;
    let lo = (pos.floor() as usize).min(PUOR.len() - 2);
    PUOR[lo].lerp(PUOR[lo + 1], pos - lo as f64)
}

/// `table` with every numeric cell's background driven by its difference in `comparison`.
///
/// Cells show `table`'s own values; rows without a difference entry stay unstyled.
pub fn highlighted_table(table: &ResultTable, comparison: &Comparison) -> Table {
    let scale = DivergingScale::new(comparison.bound());

    let mut out = Table::new();
    out.load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![
        Cell::new("Dataset").add_attribute(Attribute::Bold),
        Cell::new("Method").add_attribute(Attribute::Bold),
    ];
    header.extend(
        NUMERIC_COLUMNS
            .iter()
            .map(|c| Cell::new(c).add_attribute(Attribute::Bold)),
    );
    out.set_header(header);

    for i in 2..=5 {
        if let Some(col) = out.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for row in table {
        let diffs = comparison.diff(row.dataset, row.method);
        let mut cells = vec![
            Cell::new(row.dataset).add_attribute(Attribute::Bold),
            Cell::new(row.method),
        ];
        for (i, value) in row.values().into_iter().enumerate() {
            let cell = Cell::new(format!("{:.3}", value));
            let bg = diffs.and_then(|d| scale.color(d[i]));
            cells.push(match bg {
                Some(bg) => cell.bg(bg.into()).fg(bg.text_color().into()),
                None => cell,
            });
        }
        out.add_row(cells);
    }
    out
}

const LEGEND_WIDTH: f64 = 100.0;
const LEGEND_HEIGHT: f64 = 350.0;
const BAR_X: f64 = 12.0;
const BAR_Y: f64 = 15.0;
const BAR_WIDTH: f64 = 22.0;
const BAR_HEIGHT: f64 = 320.0;
const TICKS: usize = 5;

/// Vertical color bar spanning [-bound, +bound], as a standalone SVG document.
///
/// Top of the bar is +bound. Nothing is written to disk here.
pub fn legend_svg(scale: &DivergingScale) -> String {
    let mut out = String::new();
    let _ = write!(
        &mut out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = LEGEND_WIDTH,
        h = LEGEND_HEIGHT
    );
    out.push_str(r#"<defs><linearGradient id="puor" x1="0" y1="1" x2="0" y2="0">"#);
    for (i, c) in PUOR.iter().enumerate() {
        let offset = i as f64 / (PUOR.len() - 1) as f64;
        let _ = write!(
            &mut out,
            r#"<stop offset="{:.3}" stop-color="{}"/>"#,
            offset,
            c.hex()
        );
    }
    out.push_str("</linearGradient></defs>");

    let _ = write!(
        &mut out,
        r##"<rect x="{}" y="{}" width="{}" height="{}" fill="url(#puor)" stroke="#000000" stroke-width="0.8"/>"##,
        BAR_X, BAR_Y, BAR_WIDTH, BAR_HEIGHT
    );

    let bound = scale.bound();
    for i in 0..TICKS {
        let frac = i as f64 / (TICKS - 1) as f64;
        let value = bound - 2.0 * bound * frac;
        let y = BAR_Y + BAR_HEIGHT * frac;
        let x = BAR_X + BAR_WIDTH;
        let _ = write!(
            &mut out,
            r##"<line x1="{x}" y1="{y:.1}" x2="{x2}" y2="{y:.1}" stroke="#000000" stroke-width="0.8"/>"##,
            x = x,
            x2 = x + 4.0,
            y = y
        );
        let _ = write!(
            &mut out,
            r#"<text x="{}" y="{:.1}" font-family="sans-serif" font-size="10" dominant-baseline="middle">{}</text>"#,
            x + 7.0,
            y,
            tick_label(value)
        );
    }
    out.push_str("</svg>");
    out
}

fn tick_label(value: f64) -> String {
    // avoid "-0.000"
    if value.abs() < 5e-4 {
        "0.000".to_string()
    } else {
        format!("{:.3}", value)
    }
}
