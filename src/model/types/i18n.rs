use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "es")]
    Spanish,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::French, Language::Spanish];

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
            Language::Spanish => "es",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|language| language.code().eq_ignore_ascii_case(code))
    }

    /// label shown in the language switcher, always in the language itself
    pub fn native_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::French => "Français",
            Language::Spanish => "Español",
        }
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Language::English => EN,
            Language::French => FR,
            Language::Spanish => ES,
        }
    }
}

/// Looks `key` up in `language`, then in English, and finally returns the key itself.
pub fn translate<'a>(language: Language, key: &'a str) -> &'a str {
    lookup(language, key)
        .or_else(|| lookup(Language::English, key))
        .unwrap_or(key)
}

fn lookup(language: Language, key: &str) -> Option<&'static str> {
    language
        .table()
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}

const EN: &[(&str, &str)] = &[
    ("title", "Is it on aitronz Database?"),
    ("subtitle", "Search every source at once and find where your game is available."),
    ("search.placeholder", "Search for a game..."),
    ("search.button", "Search"),
    ("search.searching", "Searching..."),
    ("search.noResults", "No games found."),
    ("search.error", "Search failed, please try again."),
    ("sourceFilter.title", "Sources"),
    ("sourceFilter.all", "All sources"),
    ("sourceFilter.clear", "Clear"),
    ("features.fast.title", "Fast"),
    ("features.fast.description", "Results from every source in a single search."),
    ("features.smart.title", "Smart"),
    ("features.smart.description", "Games are grouped by name with art and genres."),
    ("features.reliable.title", "Reliable"),
    ("features.reliable.description", "Only trusted community sources are searched."),
    ("credits", "Made with care by the community"),
    ("gameResult.select", "Select"),
    ("gameResult.source", "source"),
    ("gameResult.sources", "sources"),
    ("gameResult.visit", "Visit source"),
    ("urlPopup.title", "Choose a download"),
    ("urlPopup.copied", "Copied to clipboard!"),
    ("urlPopup.empty", "This source has no links."),
    ("urlPopup.close", "Close"),
    ("notFound", "Page not found."),
];

const FR: &[(&str, &str)] = &[
    ("title", "Est-ce sur la base de données aitronz ?"),
    ("subtitle", "Cherchez dans toutes les sources à la fois et trouvez où votre jeu est disponible."),
    ("search.placeholder", "Rechercher un jeu..."),
    ("search.button", "Rechercher"),
    ("search.searching", "Recherche..."),
    ("search.noResults", "Aucun jeu trouvé."),
    ("search.error", "La recherche a échoué, veuillez réessayer."),
    ("sourceFilter.title", "Sources"),
    ("sourceFilter.all", "Toutes les sources"),
    ("sourceFilter.clear", "Effacer"),
    ("features.fast.title", "Rapide"),
    ("features.fast.description", "Les résultats de toutes les sources en une seule recherche."),
    ("features.smart.title", "Intelligent"),
    ("features.smart.description", "Les jeux sont regroupés par nom avec image et genres."),
    ("features.reliable.title", "Fiable"),
    ("features.reliable.description", "Seules des sources communautaires de confiance sont utilisées."),
    ("credits", "Fait avec soin par la communauté"),
    ("gameResult.select", "Choisir"),
    ("gameResult.source", "source"),
    ("gameResult.sources", "sources"),
    ("gameResult.visit", "Voir la source"),
    ("urlPopup.title", "Choisissez un téléchargement"),
    ("urlPopup.copied", "Copié dans le presse-papiers !"),
    ("urlPopup.empty", "Cette source n'a aucun lien."),
    ("urlPopup.close", "Fermer"),
    ("notFound", "Page introuvable."),
];

const ES: &[(&str, &str)] = &[
    ("title", "¿Está en la base de datos de aitronz?"),
    ("subtitle", "Busca en todas las fuentes a la vez y encuentra dónde está tu juego."),
    ("search.placeholder", "Buscar un juego..."),
    ("search.button", "Buscar"),
    ("search.searching", "Buscando..."),
    ("search.noResults", "No se encontraron juegos."),
    ("sourceFilter.title", "Fuentes"),
    ("sourceFilter.all", "Todas las fuentes"),
    ("features.fast.title", "Rápido"),
    ("features.fast.description", "Resultados de todas las fuentes en una sola búsqueda."),
    ("features.smart.title", "Inteligente"),
    ("features.smart.description", "Los juegos se agrupan por nombre con imagen y géneros."),
    ("features.reliable.title", "Fiable"),
    ("features.reliable.description", "Solo se usan fuentes de confianza de la comunidad."),
    ("credits", "Hecho con cariño por la comunidad"),
    ("gameResult.select", "Elegir"),
    ("gameResult.source", "fuente"),
    ("gameResult.sources", "fuentes"),
    ("urlPopup.title", "Elige una descarga"),
    ("urlPopup.copied", "¡Copiado al portapapeles!"),
    ("urlPopup.close", "Cerrar"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_known_keys() {
        assert_eq!(translate(Language::French, "gameResult.select"), "Choisir");
        assert_eq!(translate(Language::English, "features.fast.title"), "Fast");
    }

    #[test]
    fn falls_back_to_english_then_to_the_key() {
        assert_eq!(translate(Language::Spanish, "search.error"), "Search failed, please try again.");
        assert_eq!(translate(Language::Spanish, "missing.key"), "missing.key");
    }

    #[test]
    fn every_translation_key_exists_in_english() {
        for language in Language::ALL {
            for (key, _) in language.table() {
                assert!(lookup(Language::English, key).is_some(), "{key} missing from english");
            }
        }
    }

    #[test]
    fn codes_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
        assert_eq!(Language::from_code("FR"), Some(Language::French));
        assert_eq!(Language::from_code("de"), None);
    }
}
