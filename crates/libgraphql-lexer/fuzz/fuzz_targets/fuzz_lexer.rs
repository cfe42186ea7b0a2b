#![no_main]

use libfuzzer_sys::fuzz_target;
use libgraphql_lexer::Utf8GraphQLLexer;

fuzz_target!(|data: &[u8]| {
    let Ok(mut lexer) = Utf8GraphQLLexer::new(data) else {
        return;
    };
    // Errors are expected on arbitrary input; panics are not.
    while let Ok(true) = lexer.advance() {}
});
