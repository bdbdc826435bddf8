//! PHP's reserved magic method names.

/// Every magic method name, spelled the way PHP documents it.
const MAGIC_METHODS: &[&str] = &[
    "__construct",
    "__destruct",
    "__call",
    "__callStatic",
    "__get",
    "__set",
    "__isset",
    "__unset",
    "__sleep",
    "__wakeup",
    "__toString",
    "__invoke",
    "__set_state",
    "__clone",
    "__debugInfo",
];

/// Whether `name` is a magic method name.
///
/// PHP method names are case-insensitive, so `__TOSTRING` counts.
pub fn is_magic_method_name(name: &str) -> bool {
    // Every magic name starts with `__` and is at most 12 bytes long.
    if !name.starts_with("__") || name.len() > 12 {
        return false;
    }
    MAGIC_METHODS
        .iter()
        .any(|magic| magic.eq_ignore_ascii_case(name))
}
