use crate::core::{BrushRange, Dataset};

/// Partition of the dataset by a brush window, in dataset order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    selected: Vec<bool>,
}

impl Selection {
    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn selected_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected
            .iter()
            .enumerate()
            .filter(|(_, selected)| **selected)
            .map(|(index, _)| index)
    }

    pub fn unselected_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected
            .iter()
            .enumerate()
            .filter(|(_, selected)| !**selected)
            .map(|(index, _)| index)
    }

    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected.iter().filter(|selected| **selected).count()
    }
}

/// A point is selected iff `start <= date < start + window`.
#[must_use]
pub fn classify(dataset: &Dataset, range: BrushRange) -> Selection {
    Selection {
        selected: dataset
            .points()
            .iter()
            .map(|point| range.contains(point.date))
            .collect(),
    }
}
