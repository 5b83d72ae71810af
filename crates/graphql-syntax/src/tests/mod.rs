mod parser_operation_tests;
mod parser_property_tests;
mod utils;
