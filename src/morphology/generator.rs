//! Three-level surface form generator.

use ahash::AHashSet;

use crate::morphology::affix::{
    ENCLITICS, LIQUID_PREFIXES, NASAL_PREFIXES, NOMINAL_SUFFIX, PARTICLES, PLAIN_PREFIXES,
    TRANSITIVE_BASE_PREFIXES, TRANSITIVE_SUFFIXES, elide_liquid, nasalize,
};

/// Expands a root word into its inflected and derived surface forms.
///
/// Generation runs in three levels, each consuming the forms of the previous
/// ones:
///
/// 1. the root and the root with each single prefix,
/// 2. every level-1 base with the nominal suffix, plus the transitive
///    suffixes for bases starting with `me`, `di` or `ter`,
/// 3. every level-1 or level-2 base with each enclitic and particle.
///
/// Input is expected to be a non-empty lowercase alphabetic root; callers
/// filter anything else upstream.
pub struct FormGenerator;

impl FormGenerator {
    /// Generate every surface form of `root`, the root itself included.
    pub fn generate(root: &str) -> AHashSet<String> {
        let level1 = Self::prefixed_bases(root);
        let level2 = Self::suffixed_bases(&level1);

        let mut forms = AHashSet::with_capacity((level1.len() + level2.len()) * 7);
        forms.insert(root.to_string());

        for base in level1.iter().chain(level2.iter()) {
            for clitic in ENCLITICS.iter().chain(PARTICLES.iter()) {
                forms.insert(format!("{base}{clitic}"));
            }
        }

        forms.extend(level1);
        forms.extend(level2);
        forms
    }

    fn prefixed_bases(root: &str) -> AHashSet<String> {
        let mut bases = AHashSet::new();
        bases.insert(root.to_string());

        for prefix in NASAL_PREFIXES {
            bases.insert(nasalize(prefix, root));
        }
        for prefix in PLAIN_PREFIXES {
            bases.insert(format!("{prefix}{root}"));
        }
        for prefix in LIQUID_PREFIXES {
            bases.insert(elide_liquid(prefix, root));
        }

        bases
    }

    fn suffixed_bases(level1: &AHashSet<String>) -> AHashSet<String> {
        let mut bases = AHashSet::new();

        for base in level1 {
            bases.insert(format!("{base}{NOMINAL_SUFFIX}"));

            if TRANSITIVE_BASE_PREFIXES
                .iter()
                .any(|prefix| base.starts_with(*prefix))
            {
                for suffix in TRANSITIVE_SUFFIXES {
                    bases.insert(format!("{base}{suffix}"));
                }
            }
        }

        bases
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_contains_core_forms() {
        let forms = FormGenerator::generate("makan");

        for expected in [
            "makan",
            "memakan",
            "dimakan",
            "makanan",
            "memakankan",
            "makanannya",
        ] {
            assert!(forms.contains(expected), "missing {expected}");
        }
    }

    #[test]
    fn test_generate_level_one_prefixes() {
        let forms = FormGenerator::generate("makan");

        for expected in [
            "pemakan", "kemakan", "semakan", "bermakan", "termakan", "permakan",
        ] {
            assert!(forms.contains(expected), "missing {expected}");
        }
    }

    #[test]
    fn test_generate_nasal_assimilation() {
        let forms = FormGenerator::generate("pukul");
        assert!(forms.contains("memukul"));
        assert!(forms.contains("pemukul"));
        assert!(!forms.contains("mempukul"));
    }

    #[test]
    fn test_transitive_suffixes_only_on_active_passive_and_ter_bases() {
        let forms = FormGenerator::generate("tulis");

        assert!(forms.contains("menuliskan"));
        assert!(forms.contains("ditulisi"));
        assert!(forms.contains("tertuliskan"));
        assert!(!forms.contains("penuliskan"));
        assert!(!forms.contains("bertuliskan"));
        assert!(!forms.contains("tuliskan"));
    }

    #[test]
    fn test_liquid_elision() {
        let forms = FormGenerator::generate("renang");
        assert!(forms.contains("berenang"));
        assert!(forms.contains("terenang"));
        assert!(!forms.contains("berrenang"));
    }

    #[test]
    fn test_enclitics_and_particles_stack_on_suffixed_bases() {
        let forms = FormGenerator::generate("baca");

        for expected in [
            "bacaku",
            "membacamu",
            "bacaanlah",
            "dibacakankah",
            "membacakanpun",
            "dibacainya",
        ] {
            assert!(forms.contains(expected), "missing {expected}");
        }

        // Clitics never stack on each other
        assert!(!forms.contains("bacanyalah"));
    }

    #[test]
    fn test_generate_is_deterministic() {
        assert_eq!(FormGenerator::generate("ajar"), FormGenerator::generate("ajar"));
    }
}
