mod pricing_tests;
mod property_tests;
mod surface_tests;
