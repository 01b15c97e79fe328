// src/noyau/config.rs
//
// Configuration (calculatrice.toml)
// ---------------------------------
// [format]
// fraction_max = 6
// separateur_milliers = " "
// locale = "fr_FR"
// jeton_erreur = "Erreur"
//
// [operations]
// desactivees = ["Ran"]   # retirées de la table standard (touches grisées)
//
// Fichier absent => valeurs par défaut. Fichier illisible / invalide => erreur typée,
// l’appelant décide (main.rs : log + défauts).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::format::{FormatNombre, FRACTION_MAX_LIMITE};
use super::operation::TableOperations;

/// Nom du fichier cherché dans le répertoire courant.
pub const FICHIER_CONFIG: &str = "calculatrice.toml";

/// Variable d’environnement : chemin explicite du fichier de configuration.
pub const ENV_CONFIG: &str = "CALCULATRICE_CONFIG";

#[derive(Debug, Error)]
pub enum ErreurConfig {
    #[error("lecture de {chemin:?} impossible: {source}")]
    Lecture {
        chemin: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("syntaxe TOML invalide: {0}")]
    Syntaxe(#[from] toml::de::Error),

    #[error("valeur invalide pour `{champ}`: {raison}")]
    Invalide { champ: &'static str, raison: String },
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigCalc {
    pub format: FormatNombre,
    pub operations: ConfigOperations,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOperations {
    pub desactivees: Vec<String>,
}

impl ConfigCalc {
    /// Charge et valide un fichier donné.
    pub fn charger(chemin: &Path) -> Result<Self, ErreurConfig> {
        let contenu = fs::read_to_string(chemin).map_err(|source| ErreurConfig::Lecture {
            chemin: chemin.to_path_buf(),
            source,
        })?;
        Self::depuis_toml(&contenu)
    }

    pub fn depuis_toml(contenu: &str) -> Result<Self, ErreurConfig> {
        let config: ConfigCalc = toml::from_str(contenu)?;
        config.valider()?;
        Ok(config)
    }

    /// Résolution : $CALCULATRICE_CONFIG, sinon ./calculatrice.toml s’il existe, sinon défauts.
    pub fn charger_par_defaut() -> Result<Self, ErreurConfig> {
        if let Some(chemin) = std::env::var_os(ENV_CONFIG) {
            return Self::charger(Path::new(&chemin));
        }

        let local = Path::new(FICHIER_CONFIG);
        if local.exists() {
            return Self::charger(local);
        }

        Ok(Self::default())
    }

    /// Table standard privée des opérations désactivées.
    pub fn table(&self) -> TableOperations {
        let mut table = TableOperations::standard().clone();
        for symbole in &self.operations.desactivees {
            if table.retirer(symbole).is_some() {
                log::debug!("opération désactivée: {symbole}");
            }
        }
        table
    }

    pub fn valider(&self) -> Result<(), ErreurConfig> {
        self.valider_format()?;
        self.valider_operations()
    }

    fn valider_operations(&self) -> Result<(), ErreurConfig> {
        let standard = TableOperations::standard();

        for symbole in &self.operations.desactivees {
            if symbole == "=" {
                return Err(ErreurConfig::Invalide {
                    champ: "operations.desactivees",
                    raison: "\"=\" ne peut pas être désactivé".into(),
                });
            }
            if !standard.contient(symbole) {
                return Err(ErreurConfig::Invalide {
                    champ: "operations.desactivees",
                    raison: format!(
                        "{symbole:?} inconnu (connus: {})",
                        standard.symboles().join(" ")
                    ),
                });
            }
        }

        Ok(())
    }

    fn valider_format(&self) -> Result<(), ErreurConfig> {
        let f = &self.format;

        if f.fraction_max > FRACTION_MAX_LIMITE {
            return Err(ErreurConfig::Invalide {
                champ: "format.fraction_max",
                raison: format!("{} > {FRACTION_MAX_LIMITE}", f.fraction_max),
            });
        }

        if f.separateur_milliers.chars().any(|c| c.is_ascii_digit() || c == '-') {
            return Err(ErreurConfig::Invalide {
                champ: "format.separateur_milliers",
                raison: format!("{:?} contient un chiffre ou un signe", f.separateur_milliers),
            });
        }

        if f.separateur_milliers.contains(f.separateur_decimal()) {
            return Err(ErreurConfig::Invalide {
                champ: "format.separateur_milliers",
                raison: format!(
                    "{:?} se confond avec le séparateur décimal de la locale {:?}",
                    f.separateur_milliers, f.locale
                ),
            });
        }

        if f.jeton_erreur.trim().is_empty() {
            return Err(ErreurConfig::Invalide {
                champ: "format.jeton_erreur",
                raison: "vide".into(),
            });
        }

        Ok(())
    }
}
