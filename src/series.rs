use crate::models::{FIRST_YEAR, LAST_YEAR, NameYearCounts, PALETTE, Point, Series, TrendData};

fn count_for(counts: &NameYearCounts, name: &str, year: i32) -> u64 {
    counts
        .get(name)
        .and_then(|years| years.get(&year))
        .copied()
        .unwrap_or(0)
}

pub fn trim_year(top: &[String], counts: &NameYearCounts) -> i32 {
    (FIRST_YEAR..=LAST_YEAR)
        .rev()
        .find(|year| top.iter().any(|name| count_for(counts, name, *year) > 0))
        .unwrap_or(FIRST_YEAR)
}

pub fn y_upper(max_count: u64) -> u64 {
    // ceil(1.1 * max) in integers
    let max = max_count.max(1);
    max.saturating_mul(11).saturating_add(9) / 10
}

pub fn build_series(top: &[String], counts: &NameYearCounts) -> TrendData {
    let trim_year = trim_year(top, counts);

    let series: Vec<Series> = top
        .iter()
        .zip(PALETTE)
        .map(|(name, color)| Series {
            name: name.clone(),
            color,
            points: (FIRST_YEAR..=trim_year)
                .map(|year| Point {
                    year,
                    count: count_for(counts, name, year),
                })
                .collect(),
            muted: false,
        })
        .collect();

    let max_count = series
        .iter()
        .flat_map(|s| s.points.iter().map(|point| point.count))
        .max()
        .unwrap_or(0);

    TrendData {
        series,
        trim_year,
        y_max: y_upper(max_count),
    }
}

impl TrendData {
    pub fn x_domain(&self) -> (i32, i32) {
        (FIRST_YEAR, self.trim_year)
    }

    pub fn y_domain(&self) -> (u64, u64) {
        (0, self.y_max)
    }

    pub fn max_count(&self) -> u64 {
        self.series
            .iter()
            .flat_map(|s| s.points.iter().map(|point| point.count))
            .max()
            .unwrap_or(0)
    }
}
