pub mod compliance;
pub mod invoker;
pub mod sanitizer;
pub mod translator;

pub use invoker::{RemoteTranslator, translate_for_display};
pub use sanitizer::{contains_forbidden, sanitize};
pub use translator::{FallbackTranslator, TranslateError, Translator};
