//! Lexical analysis: turning source text into [`Token`](crate::Token)s and
//! decoding string literals.

mod block_string;
#[allow(clippy::module_inception)]
mod scanner;
mod string_value;

pub use block_string::decode_block_string_value;
pub use block_string::dedent_block_string;
pub use scanner::Scanner;
pub(crate) use scanner::line_at;
pub(crate) use scanner::offset_to_u32;
pub use string_value::StringValueError;
pub use string_value::decode_string_value;

#[cfg(test)]
mod tests;
