use ndarray::{Array1, Array2, ArrayView1, Axis};

/// Concentration history of a run, one row per layer and one column per step.
///
/// The array has shape `(n_layers, steps + 1)`; column 0 is the initial state.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    data: Array2<f64>,
}

/// A labeled, step-major view of a [`History`].
///
/// Headers are `soil_layer_1` through `soil_layer_N`; each row holds the
/// concentrations of every layer at one step.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl History {
    /// Builds a history from step-major values: all layers at step 0, then all
    /// layers at step 1, and so on.
    pub(super) fn from_step_major(n_layers: usize, values: &[f64]) -> Self {
        let n_columns = values.len() / n_layers;
        let data = Array2::from_shape_fn((n_layers, n_columns), |(layer, step)| {
            values[step * n_layers + layer]
        });
        Self { data }
    }

    /// Returns the number of layers (rows).
    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.data.nrows()
    }

    /// Returns the number of recorded columns, including the initial state.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.data.ncols()
    }

    /// Returns the full `(n_layers, steps + 1)` array.
    #[must_use]
    pub fn as_array(&self) -> &Array2<f64> {
        &self.data
    }

    /// Consumes the history and returns the underlying array.
    #[must_use]
    pub fn into_array(self) -> Array2<f64> {
        self.data
    }

    /// Returns the trajectory of one layer, or `None` if out of range.
    #[must_use]
    pub fn layer(&self, index: usize) -> Option<ArrayView1<'_, f64>> {
        (index < self.layer_count()).then(|| self.data.row(index))
    }

    /// Returns every layer's concentration at one step, or `None` if out of range.
    #[must_use]
    pub fn at_step(&self, step: usize) -> Option<ArrayView1<'_, f64>> {
        (step < self.column_count()).then(|| self.data.column(step))
    }

    /// Returns the concentrations the run started from.
    #[must_use]
    pub fn initial_concentrations(&self) -> ArrayView1<'_, f64> {
        self.data.column(0)
    }

    /// Returns the concentrations after the last recorded step.
    #[must_use]
    pub fn final_concentrations(&self) -> ArrayView1<'_, f64> {
        self.data.column(self.column_count() - 1)
    }

    /// Returns the sum over layers at every step.
    ///
    /// The mixing scheme does not conserve this quantity; the drift is a
    /// useful diagnostic when comparing runs.
    #[must_use]
    pub fn totals(&self) -> Array1<f64> {
        self.data.sum_axis(Axis(0))
    }

    /// Returns the per-step mean over a group of layers.
    ///
    /// Used to compare several thin model layers against one thicker sampled
    /// layer. Returns `None` if `layers` is empty or any index is out of range.
    #[must_use]
    pub fn mean_of_layers(&self, layers: &[usize]) -> Option<Array1<f64>> {
        if layers.is_empty() || layers.iter().any(|&index| index >= self.layer_count()) {
            return None;
        }
        self.data.select(Axis(0), layers).mean_axis(Axis(0))
    }

    /// Returns a labeled, step-major table of the history.
    #[must_use]
    pub fn to_table(&self) -> Table {
        let headers = (1..=self.layer_count())
            .map(|i| format!("soil_layer_{i}"))
            .collect();
        let rows = self
            .data
            .columns()
            .into_iter()
            .map(|column| column.to_vec())
            .collect();

        Table { headers, rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    /// Three layers over two steps.
    fn history() -> History {
        History::from_step_major(
            3,
            &[
                6.0, 0.0, 0.0, // step 0
                4.0, 1.0, 0.5, // step 1
                3.0, 2.0, 1.0, // step 2
            ],
        )
    }

    #[test]
    fn rows_are_layers_and_columns_are_steps() {
        let history = history();

        assert_eq!(history.layer_count(), 3);
        assert_eq!(history.column_count(), 3);
        assert_eq!(
            history.as_array(),
            &array![[6.0, 4.0, 3.0], [0.0, 1.0, 2.0], [0.0, 0.5, 1.0]]
        );
    }

    #[test]
    fn layer_and_step_views() {
        let history = history();

        assert_eq!(history.layer(1).unwrap().to_vec(), vec![0.0, 1.0, 2.0]);
        assert_eq!(history.at_step(1).unwrap().to_vec(), vec![4.0, 1.0, 0.5]);
        assert!(history.layer(3).is_none());
        assert!(history.at_step(3).is_none());

        assert_eq!(history.initial_concentrations().to_vec(), vec![6.0, 0.0, 0.0]);
        assert_eq!(history.final_concentrations().to_vec(), vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn totals_per_step() {
        assert_eq!(history().totals().to_vec(), vec![6.0, 5.5, 6.0]);
    }

    #[test]
    fn mean_of_selected_layers() {
        let history = history();

        let mean = history.mean_of_layers(&[1, 2]).unwrap();
        assert_relative_eq!(mean[0], 0.0);
        assert_relative_eq!(mean[1], 0.75);
        assert_relative_eq!(mean[2], 1.5);

        assert!(history.mean_of_layers(&[]).is_none());
        assert!(history.mean_of_layers(&[0, 3]).is_none());
    }

    #[test]
    fn table_is_labeled_and_step_major() {
        let table = history().to_table();

        assert_eq!(
            table.headers,
            vec!["soil_layer_1", "soil_layer_2", "soil_layer_3"]
        );
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[2], vec![3.0, 2.0, 1.0]);
    }
}
