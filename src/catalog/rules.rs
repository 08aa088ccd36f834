//! Substring rules for names that are not catalog keys verbatim.
//!
//! Proposals print the same product with varying spacing, numerals and
//! qualifiers. Rules are tried top to bottom and the first match decides,
//! so more specific rules sit above the generic ones.

use super::data;

const INTEGRATED: &str = "암 통합치료비";

pub struct FallbackRule {
    pub label: &'static str,
    pub matches: fn(&str) -> bool,
    /// Catalog key to use; `None` means the name is known to be unsupported.
    pub target: Option<&'static str>,
}

pub static FALLBACK_RULES: &[FallbackRule] = &[
    FallbackRule {
        label: "integrated-iii",
        matches: |n| n.contains(INTEGRATED) && (n.contains("III") || n.contains('Ⅲ')),
        target: Some(data::RANGE_III),
    },
    FallbackRule {
        label: "integrated-major-treatment",
        matches: |n| n.contains(INTEGRATED) && n.contains("주요치료"),
        target: None,
    },
    FallbackRule {
        label: "integrated-premium-non-covered",
        matches: |n| n.contains(INTEGRATED) && n.contains("비급여") && n.contains("전액본인부담"),
        target: Some(data::PREMIUM_NON_COVERED),
    },
    FallbackRule {
        label: "integrated-ii-non-covered",
        matches: |n| {
            n.contains(INTEGRATED) && (n.contains('Ⅱ') || n.contains("II")) && n.contains("비급여")
        },
        target: Some(data::NON_COVERED_II),
    },
    FallbackRule {
        label: "integrated-basic",
        matches: |n| n.contains(INTEGRATED) && n.contains("기본형"),
        target: Some(data::BASIC),
    },
    FallbackRule {
        label: "integrated-economy",
        matches: |n| n.contains(INTEGRATED) && n.contains("실속형"),
        target: Some(data::ECONOMY),
    },
    FallbackRule {
        label: "heavy-ion",
        matches: |n| n.contains("중입자방사선"),
        target: Some(data::HEAVY_ION),
    },
    FallbackRule {
        label: "imrt",
        matches: |n| n.contains("세기조절방사선"),
        target: Some(data::IMRT),
    },
    FallbackRule {
        label: "immunotherapy",
        matches: |n| n.contains("면역항암"),
        target: Some(data::IMMUNOTHERAPY),
    },
    FallbackRule {
        label: "targeted",
        matches: |n| n.contains("표적항암"),
        target: Some(data::TARGETED),
    },
    FallbackRule {
        label: "proton",
        matches: |n| n.contains("양성자"),
        target: Some(data::PROTON),
    },
    FallbackRule {
        label: "twenty-six",
        matches: |n| n.contains("26종"),
        target: Some(data::TWENTY_SIX),
    },
    FallbackRule {
        // Robotic surgery limited to specific cancers is a different product
        // unless the name says those cancers are excluded.
        label: "robotic-surgery",
        matches: |n| {
            n.contains("다빈치") && n.contains("로봇") && (!n.contains("특정암") || n.contains("제외"))
        },
        target: Some(data::ROBOTIC_SURGERY),
    },
];

/// First rule matching `name`.
pub fn first_match(name: &str) -> Option<&'static FallbackRule> {
    FALLBACK_RULES.iter().find(|rule| (rule.matches)(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(name: &str) -> Option<&'static str> {
        first_match(name).map(|rule| rule.label)
    }

    #[test]
    fn integrated_variants_by_qualifier() {
        assert_eq!(label("암 통합치료비Ⅲ(갱신형)"), Some("integrated-iii"));
        assert_eq!(label("암 통합치료비II(비급여) 10년"), Some("integrated-ii-non-covered"));
        assert_eq!(label("암 통합치료비(기본형)"), Some("integrated-basic"));
        assert_eq!(label("암 통합치료비(실속형) 갱신"), Some("integrated-economy"));
        assert_eq!(
            label("암 통합치료비(비급여(전액본인부담 포함))"),
            Some("integrated-premium-non-covered")
        );
    }

    #[test]
    fn precedence_follows_rule_order() {
        // "III" also contains "II"; the range product is checked first.
        assert_eq!(label("암 통합치료비III(비급여)"), Some("integrated-iii"));
        // Major-treatment variant wins over the non-covered qualifiers it also carries.
        let rule = first_match("암 통합치료비(주요치료)(비급여(전액본인부담 포함))").unwrap();
        assert_eq!(rule.label, "integrated-major-treatment");
        assert_eq!(rule.target, None);
        // Heavy-ion is checked before the 26-category bundle.
        assert_eq!(label("26종 중입자방사선치료비"), Some("heavy-ion"));
    }

    #[test]
    fn robotic_surgery_excludes_specific_cancer_variant() {
        assert_eq!(label("다빈치 로봇 암수술비"), Some("robotic-surgery"));
        assert_eq!(label("특정암 다빈치 로봇 수술비"), None);
        assert_eq!(label("다빈치 로봇 수술비(특정암 제외)"), Some("robotic-surgery"));
    }

    #[test]
    fn unrelated_names_match_nothing() {
        assert_eq!(label("질병사망"), None);
        assert_eq!(label("암진단비(유사암제외)"), None);
    }
}
