mod area_code_table_tests;

use std::sync::Once;

use crate::PhoneNumberClassifier;

static ONCE: Once = Once::new();

/// Classifier over the compiled-in table, with logging wired up once.
pub(self) fn get_classifier() -> PhoneNumberClassifier {
    ONCE.call_once(|| {
        colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .init()
    });
    PhoneNumberClassifier::new()
}
