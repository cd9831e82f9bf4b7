// src/macros.rs

/// String shorthand: `s!()` → empty String, `s!(x)` → String::from(x).
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    // Single expression: literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}
