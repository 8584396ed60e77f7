//! Serialization support for parameter sets
//!
//! A parameter set is written as a record that names its policy and the
//! selected parameters, so that data can only be read back into a set of the
//! same type. Values are range-corrected again when they are read.

use crate::error::{ParSetError, Result};
use crate::parameters::parameter_set::ParameterSet;
use crate::parameters::policy::ParameterPolicy;
use crate::parameters::selection::ParameterSelection;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// On-disk layout of a parameter set
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ParameterSetRecord {
    policy: String,
    parameters: Vec<String>,
    values: Vec<f64>,
    #[serde(default)]
    covariance: Option<Vec<Vec<f64>>>,
}

impl<P: ParameterPolicy, S: ParameterSelection<P>> ParameterSet<P, S> {
    fn to_record(&self) -> ParameterSetRecord {
        ParameterSetRecord {
            policy: P::NAME.to_string(),
            parameters: Self::parameter_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
            values: self.parameters().to_vec(),
            covariance: self
                .covariance()
                .map(|cov| cov.rows().into_iter().map(|row| row.to_vec()).collect()),
        }
    }

    fn from_record(record: ParameterSetRecord) -> Result<Self> {
        if record.policy != P::NAME {
            tracing::debug!(expected = P::NAME, found = %record.policy, "rejecting parameter set record");
            return Err(ParSetError::PolicyMismatch {
                expected: P::NAME.to_string(),
                found: record.policy,
            });
        }

        let expected = Self::parameter_names();
        if record.parameters.len() != expected.len()
            || record.parameters.iter().zip(&expected).any(|(a, b)| a != b)
        {
            tracing::debug!(policy = P::NAME, "rejecting parameter set record with another selection");
            return Err(ParSetError::SelectionMismatch {
                expected: expected.join(", "),
                found: record.parameters.join(", "),
            });
        }

        let covariance = match record.covariance {
            Some(rows) => Some(covariance_from_rows(rows, S::SIZE)?),
            None => None,
        };

        Self::new(covariance, Array1::from(record.values))
    }

    /// Serialize the parameter set to a JSON string
    ///
    /// ```
    /// use parset_rs::parameters::policy::{BoundParameters, Loc1, Theta};
    /// use parset_rs::parameters::ParameterSet;
    ///
    /// type Set = ParameterSet<BoundParameters, (Loc1, Theta)>;
    ///
    /// let set = Set::from_slice(None, &[0.5, 1.0]).unwrap();
    /// let json = set.to_json().unwrap();
    /// assert_eq!(Set::from_json(&json).unwrap(), set);
    /// ```
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a parameter set from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let record: ParameterSetRecord = serde_json::from_str(json)?;
        Self::from_record(record)
    }

    /// Save the parameter set to a JSON file
    pub fn save_json<Q: AsRef<Path>>(&self, path: Q) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Load a parameter set from a JSON file
    pub fn load_json<Q: AsRef<Path>>(path: Q) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let record: ParameterSetRecord = serde_json::from_reader(reader)?;
        Self::from_record(record)
    }
}

fn covariance_from_rows(rows: Vec<Vec<f64>>, size: usize) -> Result<Array2<f64>> {
    if rows.len() != size || rows.iter().any(|row| row.len() != size) {
        return Err(ParSetError::DimensionMismatch(format!(
            "expected a {0}x{0} covariance in the record",
            size
        )));
    }

    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    Array2::from_shape_vec((size, size), flat)
        .map_err(|err| ParSetError::DimensionMismatch(err.to_string()))
}

impl<P: ParameterPolicy, S: ParameterSelection<P>> Serialize for ParameterSet<P, S> {
    fn serialize<Ser>(&self, serializer: Ser) -> std::result::Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        self.to_record().serialize(serializer)
    }
}

impl<'de, P: ParameterPolicy, S: ParameterSelection<P>> Deserialize<'de> for ParameterSet<P, S> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = ParameterSetRecord::deserialize(deserializer)?;
        Self::from_record(record).map_err(serde::de::Error::custom)
    }
}
