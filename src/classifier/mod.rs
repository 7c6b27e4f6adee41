mod classification_result;
mod classifier_patterns;
pub(crate) mod helper_constants;
pub(crate) mod helper_functions;
pub mod classifier;
pub mod enums;

use std::sync::LazyLock;

pub use classification_result::{ClassificationResult, FixedLineCheck};
pub use classifier::PhoneNumberClassifier;
pub use enums::{PhoneNumberType, SpecialNumberClass};

/// A ready-to-use classifier over the compiled-in table snapshot. Built on
/// first access; applications that load the table from an external path use
/// [`PhoneNumberClassifier::new_for_table`] instead.
pub static PHONE_NUMBER_CLASSIFIER: LazyLock<PhoneNumberClassifier> =
    LazyLock::new(|| PhoneNumberClassifier::new());
