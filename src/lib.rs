mod areacodes;
mod classifier;
mod formatter;
pub(crate) mod regex_util;
pub(crate) mod string_util;

#[cfg(test)]
mod tests;

pub use areacodes::{AreaCodeEntry, AreaCodeTable, TableLoadError};
pub use classifier::{
    ClassificationResult, FixedLineCheck, PhoneNumberClassifier, PhoneNumberType,
    SpecialNumberClass, PHONE_NUMBER_CLASSIFIER,
};
pub use formatter::{format_fixed, format_mobile};
