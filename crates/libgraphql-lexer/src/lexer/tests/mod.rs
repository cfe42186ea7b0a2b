mod byte_class_tests;
mod utf8_graphql_lexer_string_tests;
