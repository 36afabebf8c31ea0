mod crop_tests;
mod naming_tests;
mod plan_tests;
mod selection_tests;
