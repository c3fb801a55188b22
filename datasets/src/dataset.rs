use std::io::Read;

use csv::ReaderBuilder;
use descent::dataset::records_from_rows;
use descent::Dataset;
use ndarray::{s, Array1, Axis};
use thiserror::Error;

/// An error when reading a dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("csv {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    BaseCrate(#[from] descent::Error),
    #[error("target column {column} out of bounds for {ncols} columns")]
    TargetColumn { column: usize, ncols: usize },
}

/// Read a numeric CSV table into a dataset
///
/// Every row has to contain the same number of numeric fields. The column with index
/// `target_column` becomes the targets, all other columns the records in their original order.
/// Header names, if present, are kept as feature names.
pub fn dataset_from_csv<R: Read>(
    csv: R,
    has_headers: bool,
    separator: u8,
    target_column: usize,
) -> Result<Dataset<f64>, DatasetError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(has_headers)
        .delimiter(separator)
        .from_reader(csv);

    let header = if has_headers {
        Some(reader.headers()?.clone())
    } else {
        None
    };

    let rows = reader
        .deserialize::<Vec<f64>>()
        .collect::<Result<Vec<_>, _>>()?;
    let table = records_from_rows(&rows)?;

    let ncols = table.ncols();
    if target_column >= ncols {
        return Err(DatasetError::TargetColumn {
            column: target_column,
            ncols,
        });
    }

    let targets: Array1<f64> = table.column(target_column).to_owned();
    let feature_idx = (0..ncols)
        .filter(|idx| *idx != target_column)
        .collect::<Vec<_>>();
    let records = table.select(Axis(1), &feature_idx);

    let dataset = Dataset::new(records, targets);
    match header {
        Some(header) => {
            let names = feature_idx
                .iter()
                .filter_map(|idx| header.get(*idx))
                .collect::<Vec<_>>();
            Ok(dataset.with_feature_names(names))
        }
        None => Ok(dataset),
    }
}

/// Split off the last `n_test` samples of a dataset
///
/// Returns `(train, test)`; both keep the feature names.
pub fn split_tail(dataset: Dataset<f64>, n_test: usize) -> (Dataset<f64>, Dataset<f64>) {
    let names = dataset.feature_names();
    let n_train = dataset.nsamples().saturating_sub(n_test);

    let train = Dataset::new(
        dataset.records.slice(s![..n_train, ..]).to_owned(),
        dataset.targets.slice(s![..n_train]).to_owned(),
    )
    .with_feature_names(names.clone());
    let test = Dataset::new(
        dataset.records.slice(s![n_train.., ..]).to_owned(),
        dataset.targets.slice(s![n_train..]).to_owned(),
    )
    .with_feature_names(names);

    (train, test)
}
