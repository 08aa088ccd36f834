//! Built-in product table for the supported proposal template.

use super::entry::{Benefit, CatalogEntry, ExpansionItem, Tier};

pub const PREMIUM_NON_COVERED: &str =
    "암 통합치료비(비급여(전액본인부담 포함), 암중점치료기관(상급종합병원 포함))";
pub const BASIC: &str = "암 통합치료비(기본형)(암중점치료기관(상급종합병원 포함))";
pub const ECONOMY: &str = "암 통합치료비(실속형)(암중점치료기관(상급종합병원 포함))";
pub const NON_COVERED_II: &str = "암 통합치료비Ⅱ(비급여)";
pub const RANGE_III: &str = "암진단및치료비(암 통합치료비III)";
pub const HEAVY_ION: &str = "항암중입자방사선치료비";
pub const IMRT: &str = "항암세기조절방사선치료비";
pub const IMMUNOTHERAPY: &str = "특정면역항암약물허가치료비";
pub const TARGETED: &str = "표적항암약물허가치료비";
pub const PROTON: &str = "항암양성자방사선치료비";
pub const ROBOTIC_SURGERY: &str = "다빈치로봇암수술비";
pub const TWENTY_SIX: &str = "26종항암방사선및약물치료비";

macro_rules! premium_non_covered_tier {
    ($min:expr, $robot:literal, $targeted:literal, $immune:literal, $proton:literal) => {
        Tier {
            min_amount: $min,
            benefits: &[
                Benefit::new("(매회) (비급여)다빈치로봇수술비", $robot),
                Benefit::new("(연1회) (비급여) 표적항암약물치료비", $targeted),
                Benefit::new("(연1회) (비급여) 면역항암약물치료비", $immune),
                Benefit::new("(연1회) (비급여) 양성자방사선 치료비", $proton),
            ],
        }
    };
}

macro_rules! basic_tier {
    ($min:expr, $base:literal, $extra:literal, $robot:literal, $targeted:literal, $immune:literal) => {
        Tier {
            min_amount: $min,
            benefits: &[
                Benefit::new("(매회) (급여/비급여) 암 수술비", $base),
                Benefit::new("(매회) 다빈치 로봇 수술비", $robot).with_sub(&[
                    concat!("(매회) (급여/비급여) 암 수술비 ", $base),
                    concat!("(매회) (비급여) 다빈치 로봇 수술 ", $base),
                ]),
                Benefit::new("(연1회) (급여/비급여) 항암 약물 치료비", $base),
                Benefit::new("(연1회) (급여/비급여) 항암 방사선 치료비", $base),
                Benefit::new("(연1회) 표적 항암 약물 치료비", $targeted).with_sub(&[
                    concat!("(연1회) (급여/비급여) 항암 약물 치료비 ", $base),
                    concat!("(연1회) (비급여) 표적 항암 약물 치료비 ", $extra),
                ]),
                Benefit::new("(연1회) 면역 항암 약물 치료비", $immune).with_sub(&[
                    concat!("(연1회) (급여/비급여) 항암 약물 치료비 ", $base),
                    concat!("(연1회) (비급여) 표적 항암 약물 치료비 ", $extra),
                    concat!("(연1회) (비급여) 면역 항암 약물 치료비 ", $extra),
                ]),
                Benefit::new("(연1회) 양성자 방사선 치료비", $targeted).with_sub(&[
                    concat!("(연1회) (급여/비급여) 항암 방사선 치료비 ", $base),
                    concat!("(연1회) (비급여) 양성자 방사선 치료비 ", $extra),
                ]),
                Benefit::new("(연1회) 중입자 방사선 치료비", $base)
                    .with_sub(&[concat!("(연1회) (급여/비급여) 항암 방사선 치료비 ", $base)]),
                Benefit::new("(연1회) 세기조절방사선치료비", $base)
                    .with_sub(&[concat!("(연1회) (급여/비급여) 항암 방사선 치료비 ", $base)]),
            ],
        }
    };
}

macro_rules! economy_tier {
    ($min:expr, $base:literal, $targeted:literal, $immune:literal) => {
        Tier {
            min_amount: $min,
            benefits: &[
                Benefit::new("(매회) (급여/비급여) 암 수술비", $base),
                Benefit::new("(매회) 다빈치 로봇 수술비", $base)
                    .with_sub(&[concat!("(매회) (급여/비급여) 암 수술비 ", $base)]),
                Benefit::new("(연1회) (급여/비급여) 항암 약물 치료비", $base),
                Benefit::new("(연1회) (급여/비급여) 항암 방사선 치료비", $base),
                Benefit::new("(연1회) 표적 항암 약물 치료비", $targeted).with_sub(&[
                    concat!("(연1회) (급여/비급여) 항암 약물 치료비 ", $base),
                    concat!("(연1회) (비급여) 표적 항암 약물 치료비 ", $base),
                ]),
                Benefit::new("(연1회) 면역 항암 약물 치료비", $immune).with_sub(&[
                    concat!("(연1회) (급여/비급여) 항암 약물 치료비 ", $base),
                    concat!("(연1회) (비급여) 표적 항암 약물 치료비 ", $base),
                    concat!("(연1회) (비급여) 면역 항암 약물 치료비 ", $base),
                ]),
                Benefit::new("(연1회) 양성자 방사선 치료비", $targeted).with_sub(&[
                    concat!("(연1회) (급여/비급여) 항암 방사선 치료비 ", $base),
                    concat!("(연1회) (비급여) 양성자 방사선 치료비 ", $base),
                ]),
                Benefit::new("(연1회) 중입자 방사선 치료비", $base)
                    .with_sub(&[concat!("(연1회) (급여/비급여) 항암 방사선 치료비 ", $base)]),
                Benefit::new("(연1회) 세기조절방사선치료비", $base)
                    .with_sub(&[concat!("(연1회) (급여/비급여) 항암 방사선 치료비 ", $base)]),
            ],
        }
    };
}

// The lower tiers of this product were printed with different spacing than the top one.
macro_rules! non_covered_ii_tier {
    ($min:expr, $base:literal, $robot:literal, $extra:literal, $targeted:literal, $immune:literal) => {
        Tier {
            min_amount: $min,
            benefits: &[
                Benefit::new("(매회) (비급여) 암 수술비", $base),
                Benefit::new("(매회) (비급여) 다빈치 로봇 수술비", $robot).with_sub(&[
                    concat!("(매회) (비급여) 암 수술비 ", $base),
                    concat!("(매회) (비급여) 다빈치 로봇수술 ", $base),
                ]),
                Benefit::new("(연1회) (비급여) 항암방사선 치료비", $base),
                Benefit::new("(연1회) (비급여) 항암 약물 치료비", $base),
                Benefit::new("(연1회) (비급여) 표적항암약물치료비", $targeted).with_sub(&[
                    concat!("(연1회) (비급여) 항암 약물 치료비 ", $base),
                    concat!("(연1회) (비급여) 표적항암약물 치료비 ", $extra),
                ]),
                Benefit::new("(연1회) (비급여) 면역항암 약물 치료비", $immune).with_sub(&[
                    concat!("(연1회) (비급여) 항암약물 치료비 ", $base),
                    concat!("(연1회) (비급여) 표적항암 약물치료비 ", $extra),
                    concat!("(연1회) (비급여) 면역항암 약물 치료비 ", $extra),
                ]),
                Benefit::new("(연1회) (비급여) 양성자 방사선 치료비", $targeted).with_sub(&[
                    concat!("(연1회) (비급여) 항암방사선 치료비 ", $base),
                    concat!("(연1회) (비급여) 양성자 방사선 치료비 ", $extra),
                ]),
                Benefit::new("(연1회) 중입자 방사선 치료비", $base)
                    .with_sub(&[concat!("(연1회) (비급여) 항암 방사선 치료비 ", $base)]),
            ],
        }
    };
}

macro_rules! range_iii_tier {
    ($min:expr, $amount:literal, $cap:literal) => {
        Tier {
            min_amount: $min,
            benefits: &[
                Benefit::new("(연1회) 표적항암약물치료비", $amount).capped($cap),
                Benefit::new("(연1회) 면역항암약물치료비", $amount)
                    .capped($cap)
                    .hidden(),
                Benefit::new("(연1회) 양성자 방사선 치료비", $amount).capped($cap),
            ],
        }
    };
}

pub static ENTRIES: &[(&str, CatalogEntry)] = &[
    (
        PREMIUM_NON_COVERED,
        CatalogEntry::Tiered {
            tiers: &[
                premium_non_covered_tier!(8_000, "1,000만", "3,000만", "6,000만", "3,000만"),
                premium_non_covered_tier!(5_000, "750만", "2,000만", "4,000만", "2,000만"),
                premium_non_covered_tier!(2_000, "500만", "1,000만", "2,000만", "1,000만"),
            ],
        },
    ),
    (
        BASIC,
        CatalogEntry::Tiered {
            tiers: &[
                basic_tier!(10_000, "1,000만", "3,000만", "2,000만", "4,000만", "7,000만"),
                basic_tier!(8_000, "750만", "2,000만", "1,500만", "2,750만", "4,750만"),
                basic_tier!(4_000, "500만", "1,000만", "1,000만", "1,500만", "2,500만"),
            ],
        },
    ),
    (
        ECONOMY,
        CatalogEntry::Tiered {
            tiers: &[
                economy_tier!(7_000, "1,000만", "2,000만", "3,000만"),
                economy_tier!(5_000, "750만", "1,500만", "2,150만"),
                economy_tier!(3_000, "500만", "1,000만", "1,500만"),
            ],
        },
    ),
    (
        NON_COVERED_II,
        CatalogEntry::Tiered {
            tiers: &[
                Tier {
                    min_amount: 10_000,
                    benefits: &[
                        Benefit::new("(매회) (비급여) 암 수술비", "1,000만"),
                        Benefit::new("(매회) (비급여) 다빈치 로봇 수술비", "2,000만").with_sub(&[
                            "(매회) (비급여) 암 수술비 1,000만",
                            "(매회) (비급여) 다빈치 로봇수술 1,000만",
                        ]),
                        Benefit::new("(연1회) (비급여) 항암 방사선 치료비", "1,000만"),
                        Benefit::new("(연1회) (비급여) 항암 약물 치료비", "1,000만"),
                        Benefit::new("(연1회) (비급여) 표적 항암 약물 치료비", "4,000만").with_sub(&[
                            "(연1회) (비급여) 항암 약물 치료비 1,000만",
                            "(연1회) (비급여) 표적 항암 약물 치료비 3,000만",
                        ]),
                        Benefit::new("(연1회) (비급여) 면역 항암 약물 치료비", "7,000만").with_sub(&[
                            "(연1회) (비급여) 항암 약물 치료비 1,000만",
                            "(연1회) (비급여) 표적 항암 약물 치료비 3,000만",
                            "(연1회) (비급여) 면역 항암 약물 치료비 3,000만",
                        ]),
                        Benefit::new("(연1회) (비급여) 양성자 방사선 치료비", "4,000만").with_sub(&[
                            "(연1회) (비급여) 항암 방사선 치료비 1,000만",
                            "(연1회) (비급여) 양성자 방사선 치료비 3,000만",
                        ]),
                        Benefit::new("(연1회) 중입자 방사선 치료비", "1,000만")
                            .with_sub(&["(연1회) (비급여) 항암 방사선 치료비 1,000만"]),
                    ],
                },
                non_covered_ii_tier!(7_000, "750만", "1,500만", "2,000만", "2,750만", "4,750만"),
                non_covered_ii_tier!(4_000, "500만", "1,000만", "1,000만", "1,500만", "2,500만"),
            ],
        },
    ),
    (
        RANGE_III,
        CatalogEntry::Tiered {
            tiers: &[
                range_iii_tier!(5_000, "2,000만(3,000만)", "3,000만"),
                range_iii_tier!(4_000, "1,000만(3,000만)", "3,000만"),
            ],
        },
    ),
    (
        HEAVY_ION,
        CatalogEntry::PassThrough {
            display_name: "(최초1회) 중입자방사선치료비",
        },
    ),
    (
        IMRT,
        CatalogEntry::PassThrough {
            display_name: "(10년갱신)(최초1회) 세기조절방사선치료비",
        },
    ),
    (
        IMMUNOTHERAPY,
        CatalogEntry::PassThrough {
            display_name: "(10년갱신)(최초1회) 면역항암약물치료비",
        },
    ),
    (
        TARGETED,
        CatalogEntry::PassThrough {
            display_name: "(10년갱신)(최초1회) 표적항암약물치료비",
        },
    ),
    (
        PROTON,
        CatalogEntry::PassThrough {
            display_name: "(10년갱신)(최초1회) 양성자방사선치료비",
        },
    ),
    (
        ROBOTIC_SURGERY,
        CatalogEntry::PassThrough {
            display_name: "(10년갱신)(최초1회) 다빈치 로봇 수술비",
        },
    ),
    (
        TWENTY_SIX,
        CatalogEntry::TwentySixCategory {
            detail_name: "26종 항암방사선 및 약물 치료비",
            summary_items: &[
                ExpansionItem {
                    name: "(최대 26회) 26종 항암 방사선 치료비",
                    target_name: Some("항암방사선치료비"),
                },
                ExpansionItem {
                    name: "(최대 26회) 26종 항암 약물 치료비",
                    target_name: Some("항암약물치료비"),
                },
                ExpansionItem {
                    name: "(최대 26회) 26종항암방사선치료비",
                    target_name: Some("표적항암약물치료비"),
                },
                ExpansionItem {
                    name: "(최대 26회) 26종항암방사선치료비",
                    target_name: Some("면역항암약물치료비"),
                },
                ExpansionItem {
                    name: "(최대 26회) 26종항암방사선치료비",
                    target_name: Some("양성자방사선치료비"),
                },
                ExpansionItem {
                    name: "(최대 26회) 26종항암방사선치료비",
                    target_name: Some("중입자방사선치료비"),
                },
            ],
        },
    ),
];
