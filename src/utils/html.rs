use ammonia;

/// Escape arbitrary text for use inside HTML element content or a quoted
/// attribute value.
///
/// This uses `ammonia::clean_text`, which escapes every character that could
/// open a tag, end an attribute or start an entity (including whitespace, as
/// numeric references). Browsers render the result exactly as the input text.
/// Never pass already-built markup through here.
pub fn escape(input: &str) -> String {
    ammonia::clean_text(input)
}
