//! The pre-trained pass/fail classifier.
//!
//! Prediction code only sees the [`Classifier`] trait. The artifact shipped with
//! the app is a fitted binary logistic regression stored as JSON, driven through
//! linfa's `Predict` like any other fitted linfa model.

use linfa::traits::{Predict, PredictInplace};
use ndarray::{Array1, Array2, ArrayBase, Data, Ix2};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::ModelError;

/// A fitted classifier with a declared, ordered input schema.
pub trait Classifier: Send + Sync {
    /// The columns the classifier expects, in order.
    fn feature_names(&self) -> &[String];

    /// One integer label per row of `table`. Columns must already be aligned
    /// to [`Classifier::feature_names`].
    fn predict_labels(&self, table: &Array2<f64>) -> Vec<i64>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticModel {
    #[serde(rename = "feature_names_in_")]
    feature_names: Vec<String>,
    coef: Vec<f64>,
    intercept: f64,
    classes: Vec<i64>,
}

impl LogisticModel {
    pub fn new(
        feature_names: Vec<String>,
        coef: Vec<f64>,
        intercept: f64,
        classes: Vec<i64>,
    ) -> Result<Self, ModelError> {
        let model = Self {
            feature_names,
            coef,
            intercept,
            classes,
        };
        model.validate()?;
        Ok(model)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw).map_err(|err| match err {
            ModelError::Json(source) => ModelError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    pub fn from_json(raw: &str) -> Result<Self, ModelError> {
        let model: LogisticModel = serde_json::from_str(raw).map_err(ModelError::Json)?;
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<(), ModelError> {
        if self.feature_names.is_empty() {
            return Err(ModelError::NoFeatures);
        }
        let mut seen = HashSet::new();
        for name in &self.feature_names {
            if !seen.insert(name.as_str()) {
                return Err(ModelError::DuplicateFeature(name.clone()));
            }
        }
        if self.coef.len() != self.feature_names.len() {
            return Err(ModelError::ShapeMismatch {
                features: self.feature_names.len(),
                coefs: self.coef.len(),
            });
        }
        if self.classes.len() != 2 {
            return Err(ModelError::Classes(self.classes.len()));
        }
        Ok(())
    }

    /// Signed distance to the decision boundary for each row.
    pub fn decision_function<D: Data<Elem = f64>>(&self, x: &ArrayBase<D, Ix2>) -> Array1<f64> {
        let coef = Array1::from(self.coef.clone());
        x.dot(&coef) + self.intercept
    }
}

impl<D: Data<Elem = f64>> PredictInplace<ArrayBase<D, Ix2>, Array1<i64>> for LogisticModel {
    fn predict_inplace(&self, x: &ArrayBase<D, Ix2>, y: &mut Array1<i64>) {
        assert_eq!(
            x.nrows(),
            y.len(),
            "The number of data points must match the number of output targets."
        );
        assert_eq!(
            x.ncols(),
            self.coef.len(),
            "The number of columns must match the number of fitted features."
        );

        let decision = self.decision_function(x);
        for (target, score) in y.iter_mut().zip(decision.iter()) {
            *target = if *score > 0.0 { self.classes[1] } else { self.classes[0] };
        }
    }

    fn default_target(&self, x: &ArrayBase<D, Ix2>) -> Array1<i64> {
        Array1::zeros(x.nrows())
    }
}

impl Classifier for LogisticModel {
    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn predict_labels(&self, table: &Array2<f64>) -> Vec<i64> {
        let labels: Array1<i64> = self.predict(table);
        labels.to_vec()
    }
}
