//! Veredictos y su clasificación.
//!
//! Herramientas distintas escriben el mismo veredicto de formas distintas
//! (`TRUE`, `true`, `false(unreach-call)`, ...). La igualdad entre veredictos
//! compara el *bucket* que asigna un `VerdictClassifier`, no el literal.
//!
//! Política por defecto (`ResultClassPolicy`), sobre el token sin espacios y
//! en minúsculas ASCII:
//! - `true` o prefijo `true(` => `True`
//! - `false` o prefijo `false(` => `False`
//! - cualquier otro token (incluido vacío) => `Other`

use std::fmt::Debug;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerdictClass {
    True,
    False,
    Other,
}

/// Política intercambiable de clasificación de veredictos.
pub trait VerdictClassifier: Send + Sync + Debug {
    fn classify(&self, token: &str) -> VerdictClass;

    fn equals(&self, a: &Verdict, b: &Verdict) -> bool {
        self.classify(a.token()) == self.classify(b.token())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ResultClassPolicy;

impl VerdictClassifier for ResultClassPolicy {
    fn classify(&self, token: &str) -> VerdictClass {
        let t = token.trim().to_ascii_lowercase();
        if t == "true" || t.starts_with("true(") {
            VerdictClass::True
        } else if t == "false" || t.starts_with("false(") {
            VerdictClass::False
        } else {
            VerdictClass::Other
        }
    }
}

/// Veredicto: token sin ruta.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    token: String,
}

impl Verdict {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn class(&self) -> VerdictClass {
        ResultClassPolicy.classify(&self.token)
    }

    pub fn equals_with(&self, other: &Verdict, classifier: &dyn VerdictClassifier) -> bool {
        classifier.equals(self, other)
    }
}

impl PartialEq for Verdict {
    fn eq(&self, other: &Self) -> bool {
        self.equals_with(other, &ResultClassPolicy)
    }
}

impl Eq for Verdict {}

impl Hash for Verdict {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.class().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spelling_variants_share_a_bucket() {
        assert_eq!(Verdict::new("TRUE"), Verdict::new("true"));
        assert_eq!(Verdict::new("false(unreach-call)"), Verdict::new("FALSE"));
        assert_ne!(Verdict::new("TRUE"), Verdict::new("FALSE"));
    }

    #[test]
    fn everything_else_is_other() {
        assert_eq!(Verdict::new("UNKNOWN").class(), VerdictClass::Other);
        assert_eq!(Verdict::new("TIMEOUT"), Verdict::new("ERROR"));
        assert_eq!(Verdict::new("").class(), VerdictClass::Other);
        assert_eq!(Verdict::new("trueish").class(), VerdictClass::Other);
    }

    #[derive(Debug)]
    struct Literal;
    impl VerdictClassifier for Literal {
        fn classify(&self, token: &str) -> VerdictClass {
            if token == "TRUE" { VerdictClass::True } else { VerdictClass::Other }
        }
    }

    #[test]
    fn custom_policy_is_honored() {
        let a = Verdict::new("TRUE");
        let b = Verdict::new("true");
        assert!(!a.equals_with(&b, &Literal));
        assert!(a.equals_with(&b, &ResultClassPolicy));
    }
}
