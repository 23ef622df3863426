/// Convert a source file stem to the kebab-case output file stem.
///
/// A hyphen goes in front of every maximal run of ASCII uppercase letters,
/// the result is lowercased, and a single leading hyphen is dropped. Runs are
/// kept together, so acronyms do not split letter by letter.
///
/// # Examples
/// ```
/// use typeport_core::utils::to_kebab_case;
/// assert_eq!(to_kebab_case("UserAccount"), "user-account");
/// assert_eq!(to_kebab_case("HTTPConfig"), "httpconfig");
/// assert_eq!(to_kebab_case("myDTO"), "my-dto");
/// ```
pub fn to_kebab_case(stem: &str) -> String {
    let mut result = String::with_capacity(stem.len() + 4);
    let mut in_run = false;
    for c in stem.chars() {
        let upper = c.is_ascii_uppercase();
        if upper && !in_run {
            result.push('-');
        }
        in_run = upper;
        result.push(c);
    }

    let result = result.to_lowercase();
    match result.strip_prefix('-') {
        Some(rest) => rest.to_owned(),
        None => result,
    }
}
