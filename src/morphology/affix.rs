//! Affix inventories and the sound rules applied at prefix boundaries.

/// Prefixes whose final nasal assimilates to the first sound of the root.
pub const NASAL_PREFIXES: [&str; 2] = ["me", "pe"];

/// Prefixes attached without any sound change.
pub const PLAIN_PREFIXES: [&str; 3] = ["di", "ke", "se"];

/// Prefixes that lose their final `r` before an `r`-initial root.
pub const LIQUID_PREFIXES: [&str; 3] = ["ber", "ter", "per"];

/// Bases starting with one of these take the transitive suffixes.
pub const TRANSITIVE_BASE_PREFIXES: [&str; 3] = ["me", "di", "ter"];

/// Nominalizing suffix added to every prefixed base.
pub const NOMINAL_SUFFIX: &str = "an";

/// Transitive/causative suffixes.
pub const TRANSITIVE_SUFFIXES: [&str; 2] = ["kan", "i"];

/// Possessive/pronominal enclitics.
pub const ENCLITICS: [&str; 3] = ["nya", "ku", "mu"];

/// Discourse particles.
pub const PARTICLES: [&str; 3] = ["lah", "kah", "pun"];

/// Whether `c` is one of the five vowel letters.
pub fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// Attach a nasal prefix (`me`, `pe`) to `root`, assimilating the nasal.
///
/// `k`, `p`, `s` and `t` are replaced by the homorganic nasal when a vowel
/// follows them (`pukul` -> `memukul`) and kept otherwise (`klaim` ->
/// `mengklaim`). A root with a single letter counts as vowel-followed.
pub fn nasalize(prefix: &str, root: &str) -> String {
    let mut chars = root.chars();
    let Some(first) = chars.next() else {
        return prefix.to_string();
    };
    let drops_initial = chars.next().is_none_or(is_vowel);
    let stem = if drops_initial {
        &root[first.len_utf8()..]
    } else {
        root
    };

    match first {
        'k' => format!("{prefix}ng{stem}"),
        'p' => format!("{prefix}m{stem}"),
        's' => format!("{prefix}ny{stem}"),
        't' => format!("{prefix}n{stem}"),
        'l' | 'm' | 'n' | 'r' | 'w' | 'y' => format!("{prefix}{root}"),
        'b' | 'f' | 'v' => format!("{prefix}m{root}"),
        'c' | 'd' | 'j' | 'z' => format!("{prefix}n{root}"),
        'g' | 'h' => format!("{prefix}ng{root}"),
        c if is_vowel(c) => format!("{prefix}ng{root}"),
        _ => format!("{prefix}{root}"),
    }
}

/// Attach `ber`/`ter`/`per`, dropping the prefix's final consonant before `r`.
pub fn elide_liquid(prefix: &str, root: &str) -> String {
    match prefix.strip_suffix('r') {
        Some(short) if root.starts_with('r') => format!("{short}{root}"),
        _ => format!("{prefix}{root}"),
    }
}
