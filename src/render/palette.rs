use chrono::{Datelike, NaiveDate};
use indexmap::IndexMap;

use crate::error::ScatterResult;
use crate::render::{Color, GradientStop};

pub const MONTH_COLORS: [&str; 12] = [
    "#2196f3", "#212bf3", "#7f21f3", "#e821f3", "#f32194", "#f3212b", "#f37f21", "#f3e821",
    "#94f321", "#2bf321", "#21f380", "#21f3e8",
];

/// Ordinal color scale keyed by zero-padded month labels `"01"..="12"`.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthPalette {
    colors: IndexMap<String, Color>,
}

impl MonthPalette {
    pub fn new(range: &[&str; 12]) -> ScatterResult<Self> {
        let mut colors = IndexMap::with_capacity(12);
        for (month, hex) in (1..=12).zip(range) {
            colors.insert(format!("{month:02}"), Color::from_hex(hex)?);
        }
        Ok(Self { colors })
    }

    /// Month labels in domain order.
    pub fn domain(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }

    /// Unknown labels fall back to the first color.
    #[must_use]
    pub fn color_for_label(&self, label: &str) -> Color {
        self.colors
            .get(label)
            .or_else(|| self.colors.first().map(|(_, color)| color))
            .copied()
            .unwrap_or(Color::GREY)
    }

    #[must_use]
    pub fn color_for_month(&self, month: u32) -> Color {
        self.color_for_label(&format!("{month:02}"))
    }

    #[must_use]
    pub fn color_for_date(&self, date: NaiveDate) -> Color {
        self.color_for_month(date.month())
    }

    /// Month colors spread evenly from January at offset 0 to December at 1.
    #[must_use]
    pub fn gradient_stops(&self) -> Vec<GradientStop> {
        let last = self.colors.len().saturating_sub(1).max(1) as f64;
        self.colors
            .values()
            .enumerate()
            .map(|(index, color)| GradientStop {
                offset: index as f64 / last,
                color: *color,
            })
            .collect()
    }
}

impl Default for MonthPalette {
    fn default() -> Self {
        let colors = (1..=12u32)
            .zip(MONTH_COLORS)
            .filter_map(|(month, hex)| Some((format!("{month:02}"), Color::from_hex(hex).ok()?)))
            .collect();
        Self { colors }
    }
}

#[cfg(test)]
mod tests {
    use super::{MONTH_COLORS, MonthPalette};

    #[test]
    fn domain_is_ordered_month_labels() {
        let palette = MonthPalette::new(&MONTH_COLORS).expect("palette");
        let domain: Vec<&str> = palette.domain().collect();
        assert_eq!(domain.first(), Some(&"01"));
        assert_eq!(domain.last(), Some(&"12"));
        assert_eq!(domain.len(), 12);
        assert_eq!(palette, MonthPalette::default());
    }

    #[test]
    fn months_map_to_their_color() {
        let palette = MonthPalette::default();
        assert_eq!(palette.color_for_month(1).to_hex(), "#2196f3");
        assert_eq!(palette.color_for_month(12).to_hex(), "#21f3e8");
        assert_eq!(palette.color_for_label("13").to_hex(), "#2196f3");
    }

    #[test]
    fn gradient_runs_from_january_to_december() {
        let stops = MonthPalette::default().gradient_stops();
        assert_eq!(stops.len(), 12);
        assert_eq!(stops[0].offset, 0.0);
        assert_eq!(stops[11].offset, 1.0);
        assert_eq!(stops[11].color.to_hex(), "#21f3e8");
    }
}
