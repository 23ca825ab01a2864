use crate::chart::TrendChart;
use std::collections::VecDeque;

pub const MAX_PAGES: usize = 64;

// Charts keyed by the page load that built them, oldest evicted first.
#[derive(Debug)]
pub struct PageCharts {
    next_id: u64,
    capacity: usize,
    charts: VecDeque<(u64, TrendChart)>,
}

impl Default for PageCharts {
    fn default() -> Self {
        Self::with_capacity(MAX_PAGES)
    }
}

impl PageCharts {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            next_id: 1,
            capacity: capacity.max(1),
            charts: VecDeque::new(),
        }
    }

    pub fn insert(&mut self, chart: TrendChart) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        while self.charts.len() >= self.capacity {
            self.charts.pop_front();
        }
        self.charts.push_back((id, chart));
        id
    }

    pub fn get(&self, id: u64) -> Option<&TrendChart> {
        self.charts
            .iter()
            .find(|(page, _)| *page == id)
            .map(|(_, chart)| chart)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut TrendChart> {
        self.charts
            .iter_mut()
            .find(|(page, _)| *page == id)
            .map(|(_, chart)| chart)
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MUTED_COLOR, PALETTE, RegistrationRecord};

    fn chart() -> TrendChart {
        let records: Vec<RegistrationRecord> = (0..5)
            .map(|_| RegistrationRecord::new("Bella", "2020-05-01"))
            .chain((0..3).map(|_| RegistrationRecord::new("Max", "2021-01-01")))
            .collect();
        TrendChart::from_records(&records)
    }

    #[test]
    fn overlapping_pages_keep_their_own_mute_state() {
        let mut pages = PageCharts::default();
        let first = pages.insert(chart());
        pages.get_mut(first).unwrap().toggle_mute("BELLA");

        let second = pages.insert(chart());
        assert_ne!(first, second);

        let x = 777.0;
        let first_frame = pages.get(first).unwrap().hover(x);
        let second_frame = pages.get(second).unwrap().hover(x);

        assert_eq!(first_frame.dots[0].name, "BELLA");
        assert_eq!(first_frame.dots[0].stroke, MUTED_COLOR);
        assert!(first_frame.rows[0].muted);
        assert_eq!(second_frame.dots[0].stroke, PALETTE[0]);
        assert!(!second_frame.rows[0].muted);
    }

    #[test]
    fn oldest_page_is_evicted() {
        let mut pages = PageCharts::with_capacity(2);
        let first = pages.insert(chart());
        let second = pages.insert(chart());
        let third = pages.insert(chart());

        assert_eq!(pages.len(), 2);
        assert!(pages.get(first).is_none());
        assert!(pages.get(second).is_some());
        assert!(pages.get(third).is_some());
    }

    #[test]
    fn unknown_page_is_none() {
        let mut pages = PageCharts::default();
        assert!(pages.is_empty());
        assert!(pages.get(1).is_none());
        assert!(pages.get_mut(42).is_none());
    }
}
