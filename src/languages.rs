/// The languages offered in the settings panel, as (locale tag, label) pairs.
///
/// Static and ordered; the panel seeds its language dropdown with "default"
/// followed by these entries in this order. The tags select pronunciation
/// rules in the platform synthesizer, they do not translate anything.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("ar-SA", "Arabic Saudi Arabia"),
    ("cs-CZ", "Czech Czech Republic"),
    ("da-DK", "Danish Denmark"),
    ("de-DE", "German Germany"),
    ("el-GR", "Modern Greek Greece"),
    ("en-AU", "English Australia"),
    ("en-GB", "English United Kingdom"),
    ("en-IE", "English Ireland"),
    ("en-US", "English United States"),
    ("en-ZA", "English South Africa"),
    ("es-ES", "Spanish Spain"),
    ("es-MX", "Spanish Mexico"),
    ("fi-FI", "Finnish Finland"),
    ("fr-CA", "French Canada"),
    ("fr-FR", "French France"),
    ("he-IL", "Hebrew Israel"),
    ("hi-IN", "Hindi India"),
    ("hu-HU", "Hungarian Hungary"),
    ("id-ID", "Indonesian Indonesia"),
    ("it-IT", "Italian Italy"),
    ("ja-JP", "Japanese Japan"),
    ("ko-KR", "Korean Republic of Korea"),
    ("nl-BE", "Dutch Belgium"),
    ("nl-NL", "Dutch Netherlands"),
    ("no-NO", "Norwegian Norway"),
    ("pl-PL", "Polish Poland"),
    ("pt-BR", "Portuguese Brazil"),
    ("pt-PT", "Portuguese Portugal"),
    ("ro-RO", "Romanian Romania"),
    ("ru-RU", "Russian Russian Federation"),
    ("sk-SK", "Slovak Slovakia"),
    ("sv-SE", "Swedish Sweden"),
    ("th-TH", "Thai Thailand"),
    ("tr-TR", "Turkish Turkey"),
    ("zh-CN", "Chinese China"),
    ("zh-HK", "Chinese Hong Kong"),
    ("zh-TW", "Chinese Taiwan"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_tags_are_unique_and_well_formed() {
        let mut seen = HashSet::new();
        for (tag, label) in SUPPORTED_LANGUAGES {
            assert!(seen.insert(*tag), "duplicate tag {tag}");
            assert_eq!(tag.trim(), *tag);
            assert!(tag.len() == 5 && tag.as_bytes()[2] == b'-', "bad tag {tag}");
            assert!(!label.is_empty());
        }
    }

    #[test]
    fn catalog_is_in_fixed_order() {
        assert_eq!(SUPPORTED_LANGUAGES.first().unwrap().0, "ar-SA");
        assert_eq!(SUPPORTED_LANGUAGES.last().unwrap().0, "zh-TW");
        assert_eq!(SUPPORTED_LANGUAGES.len(), 37);
    }
}
