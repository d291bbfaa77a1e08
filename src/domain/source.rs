use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// What a grid is built from
#[derive(Clone, Debug, PartialEq)]
pub enum GridSource<T> {
    /// Nothing supplied: zero rows
    Empty,
    /// Fresh grid filled with the default value. Non-positive sizes give zero rows.
    Dimensions { width: i64, height: i64 },
    /// Existing matrix, deep-copied on construction
    Matrix(Vec<Vec<T>>),
}

#[derive(Deserialize)]
struct DimensionsJson {
    width: i64,
    height: i64,
}

impl<T> Default for GridSource<T> {
    fn default() -> Self {
        GridSource::Empty
    }
}

impl<T> GridSource<T> {
    pub fn dimensions(width: i64, height: i64) -> Self {
        GridSource::Dimensions { width, height }
    }
}

impl<T: DeserializeOwned> GridSource<T> {
    /// Parse a source from JSON.
    ///
    /// `null` -> Empty, array -> Matrix, object -> Dimensions.
    /// Dimensions must be JSON integers; `null`, strings (`"4"`) and
    /// fractions are rejected here rather than coerced.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let value: Value = serde_json::from_str(json).map_err(|e| e.to_string())?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, String> {
        match value {
            Value::Null => Ok(GridSource::Empty),
            Value::Array(_) => serde_json::from_value::<Vec<Vec<T>>>(value)
                .map(GridSource::Matrix)
                .map_err(|e| e.to_string()),
            Value::Object(_) => {
                let dims: DimensionsJson =
                    serde_json::from_value(value).map_err(|e| e.to_string())?;
                Ok(GridSource::Dimensions { width: dims.width, height: dims.height })
            }
            other => Err(format!("unsupported grid source: {}", other)),
        }
    }
}

impl<T> From<Vec<Vec<T>>> for GridSource<T> {
    fn from(rows: Vec<Vec<T>>) -> Self {
        GridSource::Matrix(rows)
    }
}

impl<T: Clone> From<&[Vec<T>]> for GridSource<T> {
    fn from(rows: &[Vec<T>]) -> Self {
        GridSource::Matrix(rows.to_vec())
    }
}
