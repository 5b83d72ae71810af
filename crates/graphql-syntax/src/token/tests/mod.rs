mod keyword_table_tests;
mod token_kind_tests;
