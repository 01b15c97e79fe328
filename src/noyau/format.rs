// src/noyau/format.rs
//
// Formatage des opérandes (nombre -> texte affiché)
// -------------------------------------------------
// - Fraction tronquée à `fraction_max` chiffres (arrondi), zéros finaux retirés
// - Groupes de 3 chiffres séparés par `separateur_milliers`
// - Séparateur décimal dérivé de la locale ("fr" => ',' ; sinon '.')
// - NaN / ±∞ => `jeton_erreur`
//
// Le noyau ne connaît que le trait `FormateurNombre` : la politique d’affichage
// reste une valeur explicite passée à l’évaluation (pas d’état global).

use serde::Deserialize;

/// Collaborateur de formatage consommé par l’évaluateur.
pub trait FormateurNombre {
    fn formater(&self, valeur: f64) -> String;
}

/// Toute fonction `f64 -> String` fait l’affaire (tests, intégrations).
impl<F> FormateurNombre for F
where
    F: Fn(f64) -> String,
{
    fn formater(&self, valeur: f64) -> String {
        self(valeur)
    }
}

/// Précision d’affichage par défaut.
pub const FRACTION_MAX_DEFAUT: usize = 6;

/// Au-delà, les chiffres affichés ne sont plus significatifs pour un f64.
pub const FRACTION_MAX_LIMITE: usize = 15;

/// Locales dont le séparateur décimal est la virgule.
const LOCALES_VIRGULE: [&str; 8] = ["fr", "de", "es", "it", "pt", "ru", "nl", "pl"];

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatNombre {
    pub fraction_max: usize,
    pub separateur_milliers: String,
    pub locale: String,
    pub jeton_erreur: String,
}

impl Default for FormatNombre {
    fn default() -> Self {
        Self {
            fraction_max: FRACTION_MAX_DEFAUT,
            separateur_milliers: " ".to_string(),
            locale: "en".to_string(),
            jeton_erreur: "Error".to_string(),
        }
    }
}

impl FormatNombre {
    /// Séparateur décimal : "fr", "fr_FR", "fr-CA"… => ','.
    pub fn separateur_decimal(&self) -> char {
        let langue = self
            .locale
            .split(['_', '-'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        if LOCALES_VIRGULE.contains(&langue.as_str()) {
            ','
        } else {
            '.'
        }
    }

    /// Lecture inverse (texte affiché -> nombre), tolère les séparateurs de milliers.
    pub fn lire(&self, texte: &str) -> Option<f64> {
        let sep = self.separateur_decimal();
        let mut brut = String::with_capacity(texte.len());

        let sans_milliers = if self.separateur_milliers.is_empty() {
            texte.to_string()
        } else {
            texte.replace(self.separateur_milliers.as_str(), "")
        };

        for c in sans_milliers.trim().chars() {
            if c == sep {
                brut.push('.');
            } else {
                brut.push(c);
            }
        }

        brut.parse::<f64>().ok()
    }
}

impl FormateurNombre for FormatNombre {
    fn formater(&self, valeur: f64) -> String {
        if !valeur.is_finite() {
            return self.jeton_erreur.clone();
        }

        let digits = self.fraction_max.min(FRACTION_MAX_LIMITE);
        let brut = format!("{:.*}", digits, valeur.abs());

        let (entier, fraction) = match brut.split_once('.') {
            Some((e, f)) => (e, f.trim_end_matches('0')),
            None => (brut.as_str(), ""),
        };

        // -0.0000001 tronqué => "0", pas "-0"
        let nul = entier.bytes().all(|b| b == b'0') && fraction.is_empty();
        let negatif = valeur.is_sign_negative() && !nul;

        let mut out = String::with_capacity(brut.len() + 8);
        if negatif {
            out.push('-');
        }
        out.push_str(&grouper(entier, &self.separateur_milliers));
        if !fraction.is_empty() {
            out.push(self.separateur_decimal());
            out.push_str(fraction);
        }
        out
    }
}

/// "1234567" -> "1 234 567"
fn grouper(entier: &str, sep: &str) -> String {
    if sep.is_empty() || entier.len() <= 3 {
        return entier.to_string();
    }

    let mut out = String::with_capacity(entier.len() + sep.len() * (entier.len() / 3));
    let tete = entier.len() % 3;

    for (i, c) in entier.chars().enumerate() {
        if i > 0 && (i + 3 - tete) % 3 == 0 {
            out.push_str(sep);
        }
        out.push(c);
    }
    out
}
