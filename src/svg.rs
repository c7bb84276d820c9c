//! SVG generation
//!
//! [`SvgCanvas`] turns canvas calls into a standalone SVG document written with
//! `quick_xml`. Transforms become nested `<g transform="…">` groups, closed
//! again on `restore`.

use std::io;

use glam::DVec2;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::canvas::Canvas;
use crate::errors::RenderError;
use crate::geometry::{HitRegion, Rect};
use crate::types::{Color, Degrees, Size};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const CLIP_ID: &str = "ruler";

/// Format a coordinate the way SVG readers expect: integers without a
/// fraction, everything else to three decimals with trailing zeros trimmed.
pub fn fmt_num(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    let s = format!("{value:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_owned() } else { s.to_owned() }
}

fn fmt_point(p: DVec2) -> String {
    format!("{},{}", fmt_num(p.x), fmt_num(p.y))
}

/// Polygon `points` attribute for a hit region.
pub fn polygon_points(region: &HitRegion) -> String {
    region
        .corners()
        .iter()
        .map(|&p| fmt_point(p))
        .collect::<Vec<_>>()
        .join(" ")
}

fn tag<'a>(name: &'a str, attrs: &[(&str, &str)]) -> BytesStart<'a> {
    BytesStart::new(name).with_attributes(attrs.iter().copied())
}

fn rect_attrs(rect: Rect) -> [String; 4] {
    [
        fmt_num(rect.left()),
        fmt_num(rect.top()),
        fmt_num(rect.size.x),
        fmt_num(rect.size.y),
    ]
}

/// Canvas that serializes to SVG.
///
/// Canvas calls cannot fail, so the first write error is kept and reported
/// by [`SvgCanvas::finish`].
pub struct SvgCanvas {
    size: Size<u32>,
    body: Writer<Vec<u8>>,
    /// Groups opened since the most recent save, per save level.
    open_groups: Vec<usize>,
    current_groups: usize,
    clip: Option<String>,
    background: Option<Color>,
    error: Option<io::Error>,
}

impl SvgCanvas {
    pub fn new(size: Size<u32>) -> Self {
        Self {
            size,
            body: Writer::new(Vec::new()),
            open_groups: Vec::new(),
            current_groups: 0,
            clip: None,
            background: None,
            error: None,
        }
    }

    /// Clip everything to `region`, like the host window would.
    pub fn with_clip(mut self, region: &HitRegion) -> Self {
        self.clip = Some(polygon_points(region));
        self
    }

    /// Paint the window background under everything drawn.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    fn emit(&mut self, event: Event<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.body.write_event(event) {
            self.error = Some(err);
        }
    }

    fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) {
        self.emit(Event::Empty(tag(name, attrs)));
    }

    fn open_group(&mut self, transform: String) {
        self.emit(Event::Start(tag("g", &[("transform", transform.as_str())])));
        self.current_groups += 1;
    }

    fn close_groups(&mut self, count: usize) {
        for _ in 0..count {
            self.emit(Event::End(BytesEnd::new("g")));
        }
    }

    /// Close every open group and return the document.
    pub fn finish(mut self) -> Result<String, RenderError> {
        let pending = self.current_groups + self.open_groups.drain(..).sum::<usize>();
        self.close_groups(pending);
        if let Some(err) = self.error.take() {
            return Err(err.into());
        }

        let Size { w, h } = self.size;
        let (w, h) = (w.to_string(), h.to_string());
        let view_box = format!("0 0 {w} {h}");
        let mut doc = Writer::new(Vec::new());
        doc.write_event(Event::Start(tag(
            "svg",
            &[
                ("xmlns", SVG_NS),
                ("width", w.as_str()),
                ("height", h.as_str()),
                ("viewBox", view_box.as_str()),
            ],
        )))?;
        if let Some(points) = &self.clip {
            doc.write_event(Event::Start(BytesStart::new("defs")))?;
            doc.write_event(Event::Start(tag("clipPath", &[("id", CLIP_ID)])))?;
            doc.write_event(Event::Empty(tag("polygon", &[("points", points.as_str())])))?;
            doc.write_event(Event::End(BytesEnd::new("clipPath")))?;
            doc.write_event(Event::End(BytesEnd::new("defs")))?;
            let url = format!("url(#{CLIP_ID})");
            doc.write_event(Event::Start(tag("g", &[("clip-path", url.as_str())])))?;
        }
        if let Some(color) = self.background {
            let fill = color.to_string();
            doc.write_event(Event::Empty(tag(
                "rect",
                &[
                    ("x", "0"),
                    ("y", "0"),
                    ("width", w.as_str()),
                    ("height", h.as_str()),
                    ("fill", fill.as_str()),
                ],
            )))?;
        }
        doc.get_mut().extend_from_slice(&self.body.into_inner());
        if self.clip.is_some() {
            doc.write_event(Event::End(BytesEnd::new("g")))?;
        }
        doc.write_event(Event::End(BytesEnd::new("svg")))?;

        let mut out = String::from_utf8(doc.into_inner())?;
        out.push('\n');
        Ok(out)
    }
}

impl Canvas for SvgCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let [x, y, w, h] = rect_attrs(rect);
        let fill = color.to_string();
        self.empty(
            "rect",
            &[
                ("x", x.as_str()),
                ("y", y.as_str()),
                ("width", w.as_str()),
                ("height", h.as_str()),
                ("fill", fill.as_str()),
            ],
        );
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        let [x, y, w, h] = rect_attrs(rect);
        let stroke = color.to_string();
        let stroke_width = fmt_num(width);
        self.empty(
            "rect",
            &[
                ("x", x.as_str()),
                ("y", y.as_str()),
                ("width", w.as_str()),
                ("height", h.as_str()),
                ("fill", "none"),
                ("stroke", stroke.as_str()),
                ("stroke-width", stroke_width.as_str()),
            ],
        );
    }

    fn line(&mut self, from: DVec2, to: DVec2, color: Color, width: f64) {
        let (x1, y1) = (fmt_num(from.x), fmt_num(from.y));
        let (x2, y2) = (fmt_num(to.x), fmt_num(to.y));
        let stroke = color.to_string();
        let stroke_width = fmt_num(width);
        self.empty(
            "line",
            &[
                ("x1", x1.as_str()),
                ("y1", y1.as_str()),
                ("x2", x2.as_str()),
                ("y2", y2.as_str()),
                ("stroke", stroke.as_str()),
                ("stroke-width", stroke_width.as_str()),
            ],
        );
    }

    fn text(&mut self, origin: DVec2, text: &str, size: f64, color: Color) {
        let (x, y) = (fmt_num(origin.x), fmt_num(origin.y));
        let font_size = fmt_num(size);
        let fill = color.to_string();
        self.emit(Event::Start(tag(
            "text",
            &[
                ("x", x.as_str()),
                ("y", y.as_str()),
                ("font-family", "sans-serif"),
                ("font-size", font_size.as_str()),
                ("dominant-baseline", "hanging"),
                ("fill", fill.as_str()),
            ],
        )));
        self.emit(Event::Text(BytesText::new(text)));
        self.emit(Event::End(BytesEnd::new("text")));
    }

    fn save(&mut self) {
        self.open_groups.push(self.current_groups);
        self.current_groups = 0;
    }

    fn restore(&mut self) {
        match self.open_groups.pop() {
            Some(outer) => {
                self.close_groups(self.current_groups);
                self.current_groups = outer;
            }
            None => {
                crate::log::warn!("restore without matching save");
            }
        }
    }

    fn translate(&mut self, by: DVec2) {
        self.open_group(format!("translate({} {})", fmt_num(by.x), fmt_num(by.y)));
    }

    fn rotate(&mut self, angle: Degrees) {
        self.open_group(format!("rotate({})", fmt_num(angle.raw())));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn numbers_are_compact() {
        assert_eq!(fmt_num(10.0), "10");
        assert_eq!(fmt_num(-265.0), "-265");
        assert_eq!(fmt_num(37.795275), "37.795");
        assert_eq!(fmt_num(0.5), "0.5");
        assert_eq!(fmt_num(-0.0001), "0");
    }

    #[test]
    fn groups_balance_across_save_restore() {
        let mut canvas = SvgCanvas::new(Size::new(10, 10));
        canvas.save();
        canvas.rotate_about(dvec2(5.0, 5.0), Degrees(90.0));
        canvas.line(dvec2(0.0, 0.0), dvec2(1.0, 0.0), Color::BLACK, 1.0);
        canvas.restore();
        canvas.translate(dvec2(1.0, 1.0));
        let svg = canvas.finish().unwrap();
        assert_eq!(svg.matches("<g ").count(), svg.matches("</g>").count());
        insta::assert_snapshot!(
            svg.trim_end(),
            @r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10" viewBox="0 0 10 10"><g transform="translate(5 5)"><g transform="rotate(90)"><g transform="translate(-5 -5)"><line x1="0" y1="0" x2="1" y2="0" stroke="#000000" stroke-width="1"/></g></g></g><g transform="translate(1 1)"></g></svg>"##
        );
    }

    #[test]
    fn unmatched_restore_keeps_document_balanced() {
        let mut canvas = SvgCanvas::new(Size::new(10, 10));
        canvas.restore();
        canvas.translate(dvec2(2.0, 0.0));
        canvas.restore();
        let svg = canvas.finish().unwrap();
        assert_eq!(svg.matches("<g ").count(), 1);
        assert_eq!(svg.matches("</g>").count(), 1);
    }

    #[test]
    fn text_is_escaped() {
        let mut canvas = SvgCanvas::new(Size::new(10, 10));
        canvas.text(dvec2(0.0, 0.0), "<1&2>", 12.0, Color::BLACK);
        let svg = canvas.finish().unwrap();
        assert!(svg.contains("&lt;1&amp;2&gt;"));
    }

    #[test]
    fn clip_and_background_wrap_the_drawing() {
        let region = crate::geometry::hit_region(Size::new(620, 70), 600, 50, Degrees::ZERO);
        let mut canvas = SvgCanvas::new(Size::new(620, 70))
            .with_background(Color::BLACK)
            .with_clip(&region);
        canvas.fill_rect(Rect::new(10.0, 10.0, 600.0, 50.0), Color::WHITE_SMOKE);
        let svg = canvas.finish().unwrap();
        let clip = svg.find(r#"<g clip-path="url(#ruler)">"#).unwrap();
        let background = svg.find(r##"fill="#000000""##).unwrap();
        let body = svg.find(r##"fill="#f5f5f5""##).unwrap();
        assert!(clip < background && background < body);
        assert!(svg.contains(r#"<polygon points="10,10 610,10 610,60 10,60"/>"#));
    }
}
