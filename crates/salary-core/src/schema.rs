//! Arrow schema for the classifier input row.

use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;

use crate::features::{FEATURE_ORDER, FeatureVector};

/// One non-nullable `Float64` column per feature, in training order.
pub fn feature_schema() -> Schema {
    Schema::new(
        FEATURE_ORDER
            .iter()
            .map(|f| Field::new(f.column_name(), DataType::Float64, false))
            .collect::<Vec<_>>(),
    )
}

impl FeatureVector {
    /// Single-row batch with [`feature_schema`].
    pub fn to_record_batch(&self) -> Result<RecordBatch, ArrowError> {
        let columns: Vec<ArrayRef> = self
            .to_array()
            .into_iter()
            .map(|v| Arc::new(Float64Array::from(vec![v])) as ArrayRef)
            .collect();
        RecordBatch::try_new(Arc::new(feature_schema()), columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::Array;

    #[test]
    fn feature_schema_has_expected_fields() {
        let schema = feature_schema();
        assert_eq!(schema.fields().len(), 8);
        assert_eq!(schema.field(0).name(), "age");
        assert_eq!(schema.field(2).name(), "educational-num");
        assert_eq!(schema.field(7).name(), "hours-per-week");
        assert!(schema.fields().iter().all(|f| !f.is_nullable()));
    }

    #[test]
    fn record_batch_is_one_row_in_order() {
        let v = FeatureVector::from_array([30.0, 4.0, 10.0, 12.0, 1.0, 0.0, 0.0, 40.0]);
        let batch = v.to_record_batch().unwrap();
        assert_eq!(batch.num_rows(), 1);
        assert_eq!(batch.num_columns(), 8);

        let hours = batch
            .column_by_name("hours-per-week")
            .unwrap()
            .as_any()
            .downcast_ref::<Float64Array>()
            .unwrap();
        assert_eq!(hours.len(), 1);
        assert_eq!(hours.value(0), 40.0);

        let occupation = batch
            .column(3)
            .as_any()
            .downcast_ref::<Float64Array>()
            .unwrap();
        assert_eq!(occupation.value(0), 12.0);
    }
}
