//! Name conversions for application modules.

/// Class-style name for a module: `with-dashes` becomes `WithDashes`.
pub fn class_name_from_module_name(module_name: &str) -> String {
    module_name
        .replace('-', "_")
        .split('_')
        .map(title_case)
        .collect()
}

/// Uppercase each letter that follows a non-letter, lowercase the rest.
fn title_case(word: &str) -> String {
    let mut titled = String::with_capacity(word.len());
    let mut after_letter = false;
    for c in word.chars() {
        if c.is_alphabetic() {
            if after_letter {
                titled.extend(c.to_lowercase());
            } else {
                titled.extend(c.to_uppercase());
            }
            after_letter = true;
        } else {
            titled.push(c);
            after_letter = false;
        }
    }
    titled
}
