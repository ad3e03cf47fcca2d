//! Low-level helpers around the native netcdf/HDF5 libraries.

use std::sync::Once;

use netcdf::AttributeValue;
use rt_common::AttrValue;
use tracing::debug;

/// Silence HDF5's automatic error printing to stderr.
///
/// The HDF5 C library prints verbose error messages to stderr even when errors
/// are handled gracefully by the Rust code (e.g., when probing for optional
/// attributes that don't exist). This creates confusing log spam like:
///
/// ```text
/// HDF5-DIAG: Error detected in HDF5 (1.10.8) thread 3:
///   #003: ../../../src/H5Adense.c line 397 in H5A__dense_open(): can't locate attribute in name index
/// ```
///
/// This function disables that output by calling H5Eset_auto2 with null handlers.
/// It only needs to be called once per process, but is safe to call multiple times.
/// [`open_dataset`](crate::open_dataset) and [`write_dataset`](crate::write_dataset)
/// call it before touching any file.
pub fn silence_hdf5_errors() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        // SAFETY: H5Eset_auto2 is thread-safe and we're passing null pointers
        // to disable error output, which is a documented valid use.
        unsafe {
            hdf5_metno_sys::h5e::H5Eset_auto2(
                hdf5_metno_sys::h5e::H5E_DEFAULT,
                None,
                std::ptr::null_mut(),
            );
        }
    });
}

/// Convert a native attribute value into a dataset attribute.
///
/// Returns `None` for value kinds that have no useful representation
/// (e.g. raw byte arrays).
pub(crate) fn to_attr_value(name: &str, value: AttributeValue) -> Option<AttrValue> {
    match value {
        AttributeValue::Str(s) => Some(AttrValue::Text(s)),
        AttributeValue::Strs(list) => Some(AttrValue::Text(list.join("\n"))),
        AttributeValue::Doubles(v) => Some(AttrValue::Numbers(v)),
        AttributeValue::Floats(v) => Some(AttrValue::Numbers(v.into_iter().map(f64::from).collect())),
        AttributeValue::Ints(v) => Some(AttrValue::Numbers(v.into_iter().map(f64::from).collect())),
        AttributeValue::Shorts(v) => Some(AttrValue::Numbers(v.into_iter().map(f64::from).collect())),
        other => match f64::try_from(other) {
            Ok(number) => Some(AttrValue::Number(number)),
            Err(_) => {
                debug!(attribute = name, "Skipping attribute with unsupported type");
                None
            }
        },
    }
}

/// Convert a dataset attribute into a native attribute value.
pub(crate) fn from_attr_value(value: &AttrValue) -> AttributeValue {
    match value {
        AttrValue::Text(s) => AttributeValue::Str(s.clone()),
        AttrValue::Number(n) => AttributeValue::Double(*n),
        AttrValue::Numbers(v) => AttributeValue::Doubles(v.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_attribute_conversion() {
        assert_eq!(
            to_attr_value("scale", AttributeValue::Int(3)),
            Some(AttrValue::Number(3.0))
        );
        assert_eq!(
            to_attr_value("title", AttributeValue::Str("spectrum".to_string())),
            Some(AttrValue::Text("spectrum".to_string()))
        );
    }

    #[test]
    fn test_float_list_widened() {
        assert_eq!(
            to_attr_value("range", AttributeValue::Floats(vec![0.5, 1.5])),
            Some(AttrValue::Numbers(vec![0.5, 1.5]))
        );
    }

    #[test]
    fn test_silence_is_idempotent() {
        silence_hdf5_errors();
        silence_hdf5_errors();
    }
}
