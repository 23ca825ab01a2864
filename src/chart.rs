use crate::aggregate::{aggregate, rank_top, totals};
use crate::models::{
    FIRST_YEAR, FocusDot, HoverFrame, NameTotal, NameYearCounts, RegistrationRecord, Series,
    SeriesStyle, TOP_N, TooltipRow, TrendData, TrendResponse,
};
use crate::scale::{LinearScale, format_count};
use crate::series::{build_series, y_upper};
use crate::ui::escape_html;
use std::fmt::Write;

pub const WIDTH: f64 = 900.0;
pub const HEIGHT: f64 = 420.0;
pub const MARGIN_LEFT: f64 = 60.0;
pub const MARGIN_TOP: f64 = 20.0;
pub const MARGIN_RIGHT: f64 = 24.0;
pub const MARGIN_BOTTOM: f64 = 40.0;
pub const INNER_WIDTH: f64 = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
pub const INNER_HEIGHT: f64 = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

const X_TICKS: usize = 9;
const Y_TICKS: usize = 6;
const DOT_RADIUS: f64 = 5.0;
const MUTED_OPACITY: f64 = 0.6;

pub fn x_scale(trim_year: i32) -> LinearScale {
    LinearScale::new(
        (f64::from(FIRST_YEAR), f64::from(trim_year)),
        (0.0, INNER_WIDTH),
    )
}

pub fn y_scale(y_max: u64) -> LinearScale {
    LinearScale::new((0.0, y_max as f64), (INNER_HEIGHT, 0.0))
}

pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_word_start = true;
    for ch in name.chars() {
        let is_word = ch.is_alphanumeric() || ch == '_';
        if is_word && at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
        at_word_start = !is_word;
    }
    out
}

pub fn hover_frame(pointer_x: f64, series: &[Series], trim_year: i32) -> HoverFrame {
    let x = x_scale(trim_year);
    let max_count = series
        .iter()
        .flat_map(|s| s.points.iter().map(|point| point.count))
        .max()
        .unwrap_or(0);
    let y = y_scale(y_upper(max_count));

    let raw = x.invert(pointer_x);
    let nearest = if raw.is_finite() {
        raw.round().clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
    } else {
        FIRST_YEAR
    };
    let year = nearest.clamp(FIRST_YEAR, trim_year.max(FIRST_YEAR));
    let guideline_x = x.apply(f64::from(year));

    let dots = series
        .iter()
        .map(|s| FocusDot {
            name: s.name.clone(),
            cx: guideline_x,
            cy: y.apply(s.count_at(year) as f64),
            stroke: s.stroke().to_string(),
        })
        .collect();

    let mut rows: Vec<TooltipRow> = series
        .iter()
        .map(|s| {
            let count = s.count_at(year);
            TooltipRow {
                name: s.name.clone(),
                display_name: title_case(&s.name),
                count,
                count_label: format_count(count),
                color: s.stroke().to_string(),
                muted: s.muted,
            }
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count));

    let tooltip_html = render_tooltip(year, &rows);

    HoverFrame {
        year,
        guideline_x,
        dots,
        rows,
        tooltip_html,
    }
}

fn render_tooltip(year: i32, rows: &[TooltipRow]) -> String {
    let mut html = format!("<div><strong>{year}</strong></div>");
    for row in rows {
        let opacity = if row.muted { MUTED_OPACITY } else { 1.0 };
        let _ = write!(
            html,
            r#"<div class="row"><span class="sw" style="background:{color}"></span><span style="opacity:{opacity}">{name}: {count}</span></div>"#,
            color = row.color,
            name = escape_html(&row.display_name),
            count = row.count_label,
        );
    }
    html
}

fn join_names<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    names
        .into_iter()
        .map(|name| escape_html(&title_case(name)))
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone)]
pub struct TrendChart {
    counts: NameYearCounts,
    data: TrendData,
    x: LinearScale,
    y: LinearScale,
}

impl TrendChart {
    pub fn new(counts: NameYearCounts) -> Self {
        let top = rank_top(&counts, TOP_N);
        let data = build_series(&top, &counts);
        let x = x_scale(data.trim_year);
        let y = y_scale(data.y_max);
        Self { counts, data, x, y }
    }

    pub fn from_records(records: &[RegistrationRecord]) -> Self {
        Self::new(aggregate(records))
    }

    pub fn series(&self) -> &[Series] {
        &self.data.series
    }

    pub fn trim_year(&self) -> i32 {
        self.data.trim_year
    }

    pub fn is_empty(&self) -> bool {
        self.data.series.is_empty()
    }

    pub fn ranking(&self) -> Vec<NameTotal> {
        totals(&self.counts)
    }

    pub fn styles(&self) -> Vec<SeriesStyle> {
        self.data.series.iter().map(style_of).collect()
    }

    pub fn toggle_mute(&mut self, name: &str) -> Option<SeriesStyle> {
        let series = self.data.series.iter_mut().find(|s| s.name == name)?;
        series.muted = !series.muted;
        Some(style_of(series))
    }

    pub fn hover(&self, pointer_x: f64) -> HoverFrame {
        hover_frame(pointer_x, &self.data.series, self.data.trim_year)
    }

    pub fn to_response(&self) -> TrendResponse {
        TrendResponse {
            first_year: FIRST_YEAR,
            trim_year: self.data.trim_year,
            y_max: self.data.y_max,
            series: self.data.series.clone(),
        }
    }

    fn overlay_width(&self) -> f64 {
        let (d0, d1) = self.x.domain();
        if d0 == d1 {
            return INNER_WIDTH;
        }
        self.x.apply(f64::from(self.data.trim_year)) - self.x.apply(f64::from(FIRST_YEAR))
    }

    fn path_for(&self, series: &Series) -> String {
        let mut d = String::new();
        for (index, point) in series.points.iter().enumerate() {
            let command = if index == 0 { 'M' } else { 'L' };
            let _ = write!(
                d,
                "{command}{:.2},{:.2}",
                self.x.apply(f64::from(point.year)),
                self.y.apply(point.count as f64)
            );
        }
        d
    }

    pub fn render_svg(&self) -> String {
        let mut svg = String::new();
        let _ = write!(
            svg,
            r#"<svg width="100%" height="100%" viewBox="0 0 {WIDTH} {HEIGHT}" preserveAspectRatio="xMidYMid meet" role="img" aria-label="Top dog names per year">"#
        );
        let _ = write!(
            svg,
            r#"<defs><clipPath id="plot-clip"><rect x="0" y="-6" width="{INNER_WIDTH}" height="{}"></rect></clipPath></defs>"#,
            INNER_HEIGHT + 12.0
        );
        let _ = write!(svg, r#"<g transform="translate({MARGIN_LEFT},{MARGIN_TOP})">"#);

        self.write_x_axis(&mut svg);
        self.write_y_axis(&mut svg);

        if self.is_empty() {
            let _ = write!(
                svg,
                r#"<text class="chart-label" x="{}" y="{}" text-anchor="middle">No registrations to chart</text></g></svg>"#,
                INNER_WIDTH / 2.0,
                INNER_HEIGHT / 2.0
            );
            return svg;
        }

        svg.push_str(r#"<g class="lines" clip-path="url(#plot-clip)">"#);
        for series in &self.data.series {
            let _ = write!(
                svg,
                r#"<path class="series-line{muted}" data-name="{name}" fill="none" stroke="{stroke}" d="{d}"></path>"#,
                muted = if series.muted { " muted" } else { "" },
                name = escape_html(&series.name),
                stroke = series.stroke(),
                d = self.path_for(series),
            );
        }
        svg.push_str("</g>");

        let _ = write!(
            svg,
            r#"<g class="hover-layer" style="display:none"><line class="guideline" x1="0" x2="0" y1="0" y2="{INNER_HEIGHT}"></line>"#
        );
        for series in &self.data.series {
            let _ = write!(
                svg,
                r##"<circle class="focus-dot" data-name="{name}" r="{DOT_RADIUS}" fill="#fff" stroke="{stroke}"></circle>"##,
                name = escape_html(&series.name),
                stroke = series.stroke(),
            );
        }
        svg.push_str("</g>");

        let _ = write!(
            svg,
            r#"<rect class="overlay" x="0" y="0" width="{:.2}" height="{INNER_HEIGHT}" fill="transparent"></rect>"#,
            self.overlay_width()
        );
        svg.push_str("</g></svg>");
        svg
    }

    fn write_x_axis(&self, svg: &mut String) {
        let _ = write!(
            svg,
            r#"<g class="axis axis-x" transform="translate(0,{INNER_HEIGHT})"><line class="domain" x1="0" x2="{INNER_WIDTH}"></line>"#
        );
        for tick in self.x.integer_ticks(X_TICKS) {
            let _ = write!(
                svg,
                r#"<g class="tick" transform="translate({:.2},0)"><line y2="6"></line><text y="18" text-anchor="middle">{tick}</text></g>"#,
                self.x.apply(tick as f64)
            );
        }
        svg.push_str("</g>");
    }

    fn write_y_axis(&self, svg: &mut String) {
        let _ = write!(
            svg,
            r#"<g class="axis axis-y"><line class="domain" y1="0" y2="{INNER_HEIGHT}"></line>"#
        );
        for tick in self.y.integer_ticks(Y_TICKS) {
            let _ = write!(
                svg,
                r#"<g class="tick" transform="translate(0,{:.2})"><line x2="-6"></line><text x="-9" dy="0.32em" text-anchor="end">{}</text></g>"#,
                self.y.apply(tick as f64),
                format_count(tick.max(0) as u64)
            );
        }
        svg.push_str("</g>");
    }

    pub fn render_legend(&self) -> String {
        let mut html = String::new();
        for series in &self.data.series {
            let _ = write!(
                html,
                r#"<button type="button" class="legend-chip{muted}" data-name="{name}" aria-pressed="{pressed}"><span class="swatch" style="background:{stroke}"></span><span>{label}</span></button>"#,
                muted = if series.muted { " muted" } else { "" },
                name = escape_html(&series.name),
                pressed = series.muted,
                stroke = series.stroke(),
                label = escape_html(&title_case(&series.name)),
            );
        }
        html
    }

    pub fn summary(&self) -> String {
        let series = &self.data.series;
        let trim = self.data.trim_year;

        let lead = match series.len() {
            0 => return String::new(),
            1 => "the most registered name is",
            2 => "the two most registered names are",
            _ => "the three most registered names are",
        };
        let top = join_names(series.iter().map(|s| s.name.as_str()));

        let mut latest: Vec<&Series> = series.iter().collect();
        latest.sort_by(|a, b| b.count_at(trim).cmp(&a.count_at(trim)));

        let closing = if let [only] = latest.as_slice() {
            let count = only.count_at(trim);
            let noun = if count == 1 { "registration" } else { "registrations" };
            format!(
                "In {trim}, <b>{}</b> recorded {} {noun}.",
                escape_html(&title_case(&only.name)),
                format_count(count)
            )
        } else {
            format!(
                "In {trim}, totals rank <b>{}</b> in that order.",
                join_names(latest.iter().map(|s| s.name.as_str()))
            )
        };

        format!(
            "Across {FIRST_YEAR} to {trim}, {lead} <b>{top}</b>. Lines show yearly registrations. \
             Peaks reflect short bursts in naming popularity, while flatter segments indicate \
             stable adoption. {closing}"
        )
    }
}

fn style_of(series: &Series) -> SeriesStyle {
    SeriesStyle {
        name: series.name.clone(),
        stroke: series.stroke().to_string(),
        muted: series.muted,
    }
}
