use regex::Regex;
use std::sync::LazyLock;

/// Codes of the form `XXX-NNNNA-...` are coded variants of a base ingredient
static VARIANT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}-[0-9]{4}[A-Z]-").expect("valid variant prefix pattern"));

/// Trailing `letter-digits[letters]` block of a variant code
static VARIANT_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]-[0-9]+[A-Z]*$").expect("valid variant suffix pattern"));

/// CodeNormalizer service collapsing raw-material code variants onto their base code
///
/// `MXD-0002A-1` and `MXD-0002B-2` are both lots of `MXD-0002`. Codes that do not
/// look like a variant are returned untouched.
pub struct CodeNormalizer;

impl CodeNormalizer {
    /// Returns the base ingredient code for a raw-material code
    ///
    /// The suffix is stripped until the code no longer looks like a variant, so the
    /// result is a fixed point: `normalize(normalize(x)) == normalize(x)`.
    pub fn normalize(code: &str) -> String {
        let mut current = code.to_string();
        while VARIANT_PREFIX.is_match(&current) {
            let stripped = VARIANT_SUFFIX.replace(&current, "");
            if stripped.len() == current.len() {
                break;
            }
            current = stripped.into_owned();
        }
        current
    }

    /// Returns true if the code is a coded variant that normalizes to something shorter
    pub fn is_variant(code: &str) -> bool {
        Self::normalize(code) != code
    }
}
