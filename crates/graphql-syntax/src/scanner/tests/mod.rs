mod scanner_tests;
mod string_value_tests;
