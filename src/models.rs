use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const FIRST_YEAR: i32 = 2000;
pub const LAST_YEAR: i32 = 2025;
pub const TOP_N: usize = 3;

pub const PALETTE: [&str; TOP_N] = ["#2f80ed", "#27ae60", "#f2994a"];
pub const MUTED_COLOR: &str = "#bdbdbd";

pub type NameYearCounts = BTreeMap<String, BTreeMap<i32, u64>>;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationRecord {
    #[serde(rename = "AnimalName", default)]
    pub name: String,
    #[serde(rename = "LicenseIssuedDate", default)]
    pub issued_date: String,
}

impl RegistrationRecord {
    pub fn new(name: impl Into<String>, issued_date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            issued_date: issued_date.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTotal {
    pub name: String,
    pub total: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Point {
    pub year: i32,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Series {
    pub name: String,
    pub color: &'static str,
    pub points: Vec<Point>,
    pub muted: bool,
}

impl Series {
    pub fn count_at(&self, year: i32) -> u64 {
        self.points
            .iter()
            .find(|point| point.year == year)
            .map(|point| point.count)
            .unwrap_or(0)
    }

    pub fn stroke(&self) -> &'static str {
        if self.muted { MUTED_COLOR } else { self.color }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendData {
    pub series: Vec<Series>,
    pub trim_year: i32,
    pub y_max: u64,
}

#[derive(Debug, Deserialize)]
pub struct MuteRequest {
    pub page: u64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: u64,
}

#[derive(Debug, Deserialize)]
pub struct HoverQuery {
    pub page: u64,
    pub x: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub name: String,
    pub stroke: String,
    pub muted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusDot {
    pub name: String,
    pub cx: f64,
    pub cy: f64,
    pub stroke: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipRow {
    pub name: String,
    pub display_name: String,
    pub count: u64,
    pub count_label: String,
    pub color: String,
    pub muted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverFrame {
    pub year: i32,
    pub guideline_x: f64,
    pub dots: Vec<FocusDot>,
    pub rows: Vec<TooltipRow>,
    pub tooltip_html: String,
}

#[derive(Debug, Serialize)]
pub struct TrendResponse {
    pub first_year: i32,
    pub trim_year: i32,
    pub y_max: u64,
    pub series: Vec<Series>,
}
