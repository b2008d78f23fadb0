//! Provides the vocabulary IRIs this crate gives a special meaning to.

pub mod rdf {
    //! [RDF](https://www.w3.org/TR/rdf11-concepts/) vocabulary.

    /// The datatype of [language-tagged string](https://www.w3.org/TR/rdf11-concepts/#dfn-language-tagged-string)s.
    pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
}

pub mod xsd {
    //! [XML Schema datatypes](https://www.w3.org/TR/xmlschema11-2/) vocabulary.

    /// The datatype of plain string literals, left implicit on the wire.
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
}

pub mod i18n {
    //! The [`i18n` namespace](https://www.w3.org/ns/i18n) encoding a language
    //! tag and a base direction into a single datatype IRI, used by data
    //! models that have no native direction field.

    use crate::model::BaseDirection;

    /// The namespace IRI all encoded datatypes start with.
    pub const BASE: &str = "https://www.w3.org/ns/i18n#";

    /// Builds the datatype IRI encoding the given language tag and base direction.
    ///
    /// ```
    /// use oxnquads::vocab::i18n;
    /// use oxnquads::BaseDirection;
    ///
    /// assert_eq!(
    ///     i18n::encode(Some("cz"), BaseDirection::Ltr),
    ///     "https://www.w3.org/ns/i18n#cz_ltr"
    /// );
    /// assert_eq!(
    ///     i18n::encode(None, BaseDirection::Rtl),
    ///     "https://www.w3.org/ns/i18n#_rtl"
    /// );
    /// ```
    pub fn encode(language: Option<&str>, direction: BaseDirection) -> String {
        format!("{BASE}{}_{direction}", language.unwrap_or(""))
    }

    /// Splits a datatype IRI from the `i18n` namespace into its language tag
    /// and base direction parts.
    ///
    /// Returns `None` for IRIs outside the namespace and for IRIs whose
    /// fragment does not follow the `language? '_' direction` shape, so that
    /// callers can fall back to treating them as opaque datatypes.
    ///
    /// ```
    /// use oxnquads::vocab::i18n;
    /// use oxnquads::BaseDirection;
    ///
    /// assert_eq!(
    ///     i18n::decode("https://www.w3.org/ns/i18n#cz_ltr"),
    ///     Some((Some("cz"), Some(BaseDirection::Ltr)))
    /// );
    /// assert_eq!(
    ///     i18n::decode("https://www.w3.org/ns/i18n#_rtl"),
    ///     Some((None, Some(BaseDirection::Rtl)))
    /// );
    /// assert_eq!(
    ///     i18n::decode("https://www.w3.org/ns/i18n#de"),
    ///     Some((Some("de"), None))
    /// );
    /// assert_eq!(i18n::decode("http://www.w3.org/2001/XMLSchema#string"), None);
    /// ```
    pub fn decode(datatype: &str) -> Option<(Option<&str>, Option<BaseDirection>)> {
        let fragment = datatype.strip_prefix(BASE)?;
        if fragment.is_empty() {
            return Some((None, None));
        }
        let Some((language, direction)) = fragment.split_once('_') else {
            return Some((Some(fragment), None));
        };
        let direction = match direction {
            "ltr" => BaseDirection::Ltr,
            "rtl" => BaseDirection::Rtl,
            _ => return None,
        };
        Some(((!language.is_empty()).then_some(language), Some(direction)))
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn decode_rejects_malformed_fragments() {
            assert_eq!(decode("https://www.w3.org/ns/i18n#cz_xyz"), None);
            assert_eq!(decode("https://www.w3.org/ns/i18n#cz_ltr_x"), None);
            assert_eq!(decode("https://www.w3.org/ns/i18n#_"), None);
        }

        #[test]
        fn decode_empty_fragment() {
            assert_eq!(decode("https://www.w3.org/ns/i18n#"), Some((None, None)));
        }

        #[test]
        fn encode_decode_round_trip() {
            for (language, direction) in [
                (Some("cz"), BaseDirection::Ltr),
                (Some("ar-EG"), BaseDirection::Rtl),
                (None, BaseDirection::Rtl),
            ] {
                let datatype = encode(language, direction);
                assert_eq!(decode(&datatype), Some((language, Some(direction))));
            }
        }
    }
}
