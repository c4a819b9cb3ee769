use crate::error::{AppError, Result};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_regressor::{
    RandomForestRegressor, RandomForestRegressorParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::linear_regression::{LinearRegression, LinearRegressionParameters};

/// Regression backends an artifact may carry.
///
/// The enum tag is part of the artifact format; a bundle records which model
/// family the training run produced and deserializes back into it.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationRegressor {
    RandomForest(RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>),
    Linear(LinearRegression<f64, f64, DenseMatrix<f64>, Vec<f64>>),
}

impl DurationRegressor {
    /// Fit a random forest. Used by training tooling and test fixtures, not
    /// by the serving path.
    pub fn fit_random_forest(
        x: &Array2<f64>,
        y: &[f64],
        params: RandomForestRegressorParameters,
    ) -> Result<Self> {
        let matrix = ndarray_to_densematrix(x);
        let targets = y.to_vec();

        let model = RandomForestRegressor::fit(&matrix, &targets, params)
            .map_err(|e| AppError::Model(format!("Failed to fit random forest: {}", e)))?;

        Ok(DurationRegressor::RandomForest(model))
    }

    /// Fit an ordinary least squares model. Used by training tooling and test
    /// fixtures, not by the serving path.
    pub fn fit_linear(x: &Array2<f64>, y: &[f64]) -> Result<Self> {
        let matrix = ndarray_to_densematrix(x);
        let targets = y.to_vec();

        let model = LinearRegression::fit(&matrix, &targets, LinearRegressionParameters::default())
            .map_err(|e| AppError::Model(format!("Failed to fit linear regression: {}", e)))?;

        Ok(DurationRegressor::Linear(model))
    }

    /// Predict the duration for a single encoded row.
    pub fn predict_one(&self, features: &Array1<f64>) -> Result<f64> {
        let x = ndarray_row_to_densematrix(features);

        let predictions = match self {
            DurationRegressor::RandomForest(model) => model.predict(&x),
            DurationRegressor::Linear(model) => model.predict(&x),
        }
        .map_err(|e| AppError::Model(format!("Prediction failed: {}", e)))?;

        predictions
            .first()
            .copied()
            .ok_or_else(|| AppError::Model("Regressor returned no predictions".to_string()))
    }

    /// Model family name for metadata endpoints.
    pub fn kind(&self) -> &'static str {
        match self {
            DurationRegressor::RandomForest(_) => "random_forest",
            DurationRegressor::Linear(_) => "linear_regression",
        }
    }
}

fn ndarray_to_densematrix(arr: &Array2<f64>) -> DenseMatrix<f64> {
    let shape = arr.shape();
    let data: Vec<f64> = arr.iter().copied().collect();
    DenseMatrix::new(shape[0], shape[1], data, false)
}

fn ndarray_row_to_densematrix(arr: &Array1<f64>) -> DenseMatrix<f64> {
    DenseMatrix::new(1, arr.len(), arr.to_vec(), false)
}
