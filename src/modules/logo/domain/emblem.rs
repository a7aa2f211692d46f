//! Builds the emblem as an SVG document. The SVG is the single source of
//! truth; raster and PDF encodings are derived from it.

use super::parameters::Parameters;

pub const SIZE: u32 = 2048;
const MARGIN: u32 = 150;
const OUTER_WIDTH: u32 = SIZE - 2 * MARGIN;
const INNER_WIDTH: u32 = SIZE - 6 * MARGIN;
const CORNER_RADIUS: u32 = 100;
const LINE_WIDTH: u32 = 20;

const PINS: u32 = 9;
const PIN_LENGTH: u32 = 100;

const TOP_TEXT: &str = "OLIVER JONES";
const BOTTOM_TEXT: &str = "@oathompsonjones";
// "</>" with the angle brackets XML-escaped.
const MIDDLE_TEXT: &str = "&lt;/&gt;";
const TEXT_SIZE: u32 = 150;
const MIDDLE_TEXT_SIZE: u32 = 700;
const FONT_FAMILY: &str = "Fira Code, monospace";

pub fn render_svg(parameters: &Parameters) -> String {
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{SIZE}" height="{SIZE}" viewBox="0 0 {SIZE} {SIZE}">"#
    );

    if let Some(background) = &parameters.background_colour {
        svg.push_str(&format!(
            r#"<rect width="{SIZE}" height="{SIZE}" fill="{background}"/>"#
        ));
    }

    push_pins(&mut svg, parameters);
    push_frames(&mut svg, parameters);
    push_labels(&mut svg, parameters);

    svg.push_str("</svg>");
    svg
}

/// Nine evenly spaced ticks per edge, sticking outwards from the outer frame.
fn push_pins(svg: &mut String, parameters: &Parameters) {
    let spacing = f64::from(SIZE - 4 * MARGIN) / f64::from(PINS - 1);

    let mut path = String::new();
    for i in 0..PINS {
        let offset = f64::from(2 * MARGIN) + f64::from(i) * spacing;
        // Top, bottom, left, right edges.
        path.push_str(&format!(
            "M{offset} {top} V{top_end} M{offset} {bottom} V{bottom_end} \
             M{left} {offset} H{left_end} M{right} {offset} H{right_end} ",
            top = MARGIN,
            top_end = MARGIN - PIN_LENGTH,
            bottom = MARGIN + OUTER_WIDTH,
            bottom_end = MARGIN + OUTER_WIDTH + PIN_LENGTH,
            left = MARGIN,
            left_end = MARGIN - PIN_LENGTH,
            right = MARGIN + OUTER_WIDTH,
            right_end = MARGIN + OUTER_WIDTH + PIN_LENGTH,
        ));
    }

    svg.push_str(&format!(
        r#"<path d="{path}" fill="none" stroke="{pin}" stroke-width="{LINE_WIDTH}"/>"#,
        path = path.trim_end(),
        pin = parameters.pin_colour,
    ));
}

/// Two concentric frames: a rounded outer square and a sharp inner square,
/// each with its own stroke and fill.
fn push_frames(svg: &mut String, parameters: &Parameters) {
    let outer_origin = (SIZE - OUTER_WIDTH) / 2;
    svg.push_str(&format!(
        r#"<rect x="{outer_origin}" y="{outer_origin}" width="{OUTER_WIDTH}" height="{OUTER_WIDTH}" rx="{CORNER_RADIUS}" fill="{fill}" stroke="{stroke}" stroke-width="{LINE_WIDTH}"/>"#,
        fill = parameters.outer_colour,
        stroke = parameters.outer_line_colour,
    ));

    let inner_origin = (SIZE - INNER_WIDTH) / 2;
    svg.push_str(&format!(
        r#"<rect x="{inner_origin}" y="{inner_origin}" width="{INNER_WIDTH}" height="{INNER_WIDTH}" fill="{fill}" stroke="{stroke}" stroke-width="{LINE_WIDTH}"/>"#,
        fill = parameters.inner_colour,
        stroke = parameters.inner_line_colour,
    ));
}

fn push_labels(svg: &mut String, parameters: &Parameters) {
    let centre = SIZE / 2;
    let top_centre = 2 * MARGIN;
    let bottom_centre = SIZE - 2 * MARGIN;

    push_label(svg, centre, top_centre, TEXT_SIZE, &parameters.top_text_colour, TOP_TEXT);
    push_label(
        svg,
        centre,
        bottom_centre,
        TEXT_SIZE,
        &parameters.bottom_text_colour,
        BOTTOM_TEXT,
    );
    push_label(
        svg,
        centre,
        centre,
        MIDDLE_TEXT_SIZE,
        &parameters.middle_text_colour,
        MIDDLE_TEXT,
    );
}

fn push_label(svg: &mut String, x: u32, y: u32, size: u32, colour: &str, text: &str) {
    svg.push_str(&format!(
        r#"<text x="{x}" y="{y}" font-family="{FONT_FAMILY}" font-size="{size}" fill="{colour}" text-anchor="middle" dominant-baseline="central">{text}</text>"#
    ));
}
