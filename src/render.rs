//! Views of a workout for the map and the list, plus two renderers.
//!
//! Both views are built from stored fields only, so entries loaded from a
//! snapshot render exactly as they did when first recorded.

use std::fmt::Write as _;
use uuid::Uuid;

use crate::types::{Activity, Coords, Workout, WorkoutKind};

pub const fn kind_icon(kind: WorkoutKind) -> &'static str {
    match kind {
        WorkoutKind::Running => "🏃🏻‍♂️",
        WorkoutKind::Cycling => "🚴‍♀️",
    }
}

/// A value cell in a list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detail {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

/// Map pin with its popup.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: Uuid,
    pub coords: Coords,
    pub kind: WorkoutKind,
    pub popup: String,
}

impl Marker {
    pub fn popup_class(&self) -> String {
        format!("{}-popup", self.kind)
    }
}

impl From<&Workout> for Marker {
    fn from(w: &Workout) -> Self {
        Self {
            id: w.id,
            coords: w.coords,
            kind: w.kind(),
            popup: format!("{} {}", kind_icon(w.kind()), w.description),
        }
    }
}

/// One row in the workout list, keyed by the workout id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub id: Uuid,
    pub kind: WorkoutKind,
    pub title: String,
    /// Distance, duration, pace/speed, cadence/elevation.
    pub details: [Detail; 4],
}

impl From<&Workout> for ListEntry {
    fn from(w: &Workout) -> Self {
        let kind = w.kind();
        let (metric, secondary) = match w.activity {
            Activity::Running { cadence, pace } => (
                Detail {
                    icon: "⚡️",
                    value: to_fixed_1(pace),
                    unit: "min/km",
                },
                Detail {
                    icon: "🦶",
                    value: cadence.to_string(),
                    unit: "spm",
                },
            ),
            Activity::Cycling {
                elevation_gain,
                speed,
            } => (
                Detail {
                    icon: "⚡️",
                    value: to_fixed_1(speed),
                    unit: "km/h",
                },
                Detail {
                    icon: "🏔",
                    value: elevation_gain.to_string(),
                    unit: "m",
                },
            ),
        };

        Self {
            id: w.id,
            kind,
            title: w.description.clone(),
            details: [
                Detail {
                    icon: kind_icon(kind),
                    value: w.distance.to_string(),
                    unit: "km",
                },
                Detail {
                    icon: "⏱",
                    value: w.duration.to_string(),
                    unit: "min",
                },
                metric,
                secondary,
            ],
        }
    }
}

/// Receives one marker and one list entry per workout, in collection order.
pub trait Renderer {
    fn render_marker(&mut self, marker: &Marker);
    fn render_entry(&mut self, entry: &ListEntry);
}

/// Builds the list markup the page shows below the form.
#[derive(Debug, Default)]
pub struct HtmlRenderer {
    entries: Vec<String>,
    markers: Vec<Marker>,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Each entry is inserted right after the form, so the newest comes first.
    pub fn list_html(&self) -> String {
        self.entries.iter().rev().map(String::as_str).collect()
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }
}

impl Renderer for HtmlRenderer {
    fn render_marker(&mut self, marker: &Marker) {
        self.markers.push(marker.clone());
    }

    fn render_entry(&mut self, entry: &ListEntry) {
        let mut html = String::new();
        let _ = writeln!(
            html,
            r#"<li class="workout workout--{}" data-id="{}">"#,
            entry.kind, entry.id
        );
        let _ = writeln!(
            html,
            r#"  <h2 class="workout__title">{}</h2>"#,
            escape_html(&entry.title)
        );
        for d in &entry.details {
            let _ = writeln!(
                html,
                concat!(
                    r#"  <div class="workout__details">"#,
                    r#"<span class="workout__icon">{}</span>"#,
                    r#"<span class="workout__value">{}</span>"#,
                    r#"<span class="workout__unit">{}</span>"#,
                    "</div>"
                ),
                d.icon,
                escape_html(&d.value),
                d.unit
            );
        }
        html.push_str("</li>\n");
        self.entries.push(html);
    }
}

/// Plain terminal lines, one per list entry; markers become "pin" lines.
#[derive(Debug, Default)]
pub struct TextRenderer {
    lines: Vec<String>,
    show_markers: bool,
}

impl TextRenderer {
    pub fn new(show_markers: bool) -> Self {
        Self {
            lines: Vec::new(),
            show_markers,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Renderer for TextRenderer {
    fn render_marker(&mut self, marker: &Marker) {
        if self.show_markers {
            self.lines
                .push(format!("pin {} {}", marker.coords, marker.popup));
        }
    }

    fn render_entry(&mut self, entry: &ListEntry) {
        let mut line = entry.title.clone();
        for d in &entry.details {
            let _ = write!(line, "  {} {} {}", d.icon, d.value, d.unit);
        }
        let _ = write!(line, "  [{}]", entry.id);
        self.lines.push(line);
    }
}

/// One decimal, ties rounded away from zero (`5.25` -> `"5.3"`).
pub fn to_fixed_1(v: f64) -> String {
    let scaled = (v * 10.0).round();
    if scaled.is_finite() {
        format!("{:.1}", scaled / 10.0)
    } else {
        format!("{v:.1}")
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn running() -> Workout {
        let at = Utc.with_ymd_and_hms(2024, 4, 14, 12, 0, 0).unwrap();
        Workout::running_at(at, Coords::new(51.5, -0.1), 5.2, 24.0, 178.0)
    }

    fn cycling() -> Workout {
        let at = Utc.with_ymd_and_hms(2024, 4, 14, 12, 0, 0).unwrap();
        Workout::cycling_at(at, Coords::new(51.5, -0.1), 27.0, 95.0, 523.0)
    }

    #[test]
    fn running_entry_shows_pace_and_cadence() {
        let entry = ListEntry::from(&running());
        let values: Vec<_> = entry.details.iter().map(|d| d.value.as_str()).collect();
        let units: Vec<_> = entry.details.iter().map(|d| d.unit).collect();

        assert_eq!(values, ["5.2", "24", "4.6", "178"]);
        assert_eq!(units, ["km", "min", "min/km", "spm"]);
    }

    #[test]
    fn cycling_entry_shows_speed_and_elevation() {
        let entry = ListEntry::from(&cycling());
        let values: Vec<_> = entry.details.iter().map(|d| d.value.as_str()).collect();

        assert_eq!(values, ["27", "95", "17.1", "523"]);
        assert_eq!(entry.details[3].icon, "🏔");
        assert_eq!(entry.details[2].unit, "km/h");
    }

    #[test]
    fn marker_popup_has_icon_and_description() {
        let w = cycling();
        let marker = Marker::from(&w);

        assert_eq!(marker.coords, w.coords);
        assert_eq!(marker.popup, format!("🚴‍♀️ {}", w.description));
        assert_eq!(marker.popup_class(), "cycling-popup");
    }

    #[test]
    fn html_lists_newest_first_and_keys_by_id() {
        let (a, b) = (running(), cycling());
        let mut r = HtmlRenderer::new();
        for w in [&a, &b] {
            r.render_marker(&Marker::from(w));
            r.render_entry(&ListEntry::from(w));
        }

        let html = r.list_html();
        let pos_a = html.find(&format!(r#"data-id="{}""#, a.id)).unwrap();
        let pos_b = html.find(&format!(r#"data-id="{}""#, b.id)).unwrap();
        assert!(pos_b < pos_a);
        assert!(html.contains(r#"class="workout workout--running""#));
        assert_eq!(r.markers().len(), 2);
        assert_eq!(r.markers()[0].id, a.id);
    }

    #[test]
    fn metrics_round_ties_up() {
        assert_eq!(to_fixed_1(5.25), "5.3");
        assert_eq!(to_fixed_1(12.25), "12.3");
        assert_eq!(to_fixed_1(4.615), "4.6");
        assert_eq!(to_fixed_1(20.0), "20.0");

        let run = Workout::running(Coords::new(0.0, 0.0), 4.0, 21.0, 170.0);
        assert_eq!(ListEntry::from(&run).details[2].value, "5.3");

        let ride = Workout::cycling(Coords::new(0.0, 0.0), 49.0, 240.0, 0.0);
        assert_eq!(ListEntry::from(&ride).details[2].value, "12.3");
    }

    #[test]
    fn html_escapes_text() {
        assert_eq!(escape_html(r#"<a & "b">"#), "&lt;a &amp; &quot;b&quot;&gt;");
    }

    #[test]
    fn text_renderer_optionally_prints_pins() {
        let w = running();
        let mut quiet = TextRenderer::new(false);
        quiet.render_marker(&Marker::from(&w));
        quiet.render_entry(&ListEntry::from(&w));
        assert_eq!(quiet.lines().len(), 1);
        assert!(quiet.lines()[0].contains("4.6 min/km"));

        let mut loud = TextRenderer::new(true);
        loud.render_marker(&Marker::from(&w));
        assert!(loud.lines()[0].starts_with("pin 51.50000,-0.10000"));
    }
}
