//! Morphological form generation for Indonesian root words.
//!
//! The generator expands a root (kata dasar) into the surface forms that the
//! affixation system can produce from it: prefixed forms with nasal
//! assimilation, suffixed forms, and forms carrying possessive enclitics or
//! discourse particles. It never analyses words back into roots.
//!
//! # Examples
//!
//! ```
//! use ejaan::morphology::generator::FormGenerator;
//!
//! let forms = FormGenerator::generate("pukul");
//! assert!(forms.contains("memukul"));
//! assert!(forms.contains("dipukulnya"));
//! assert!(!forms.contains("mempukul"));
//! ```

pub mod affix;
pub mod generator;
