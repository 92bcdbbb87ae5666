//! Lexical tables for Arabic number words.

/// Grammatical gender of the counted noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Masculine,
    Feminine,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Masculine, Gender::Feminine];
}

/// Conjunction joining number components ("and").
pub const CONNECTOR: &str = "و";

const UNITS_MASCULINE: [&str; 10] = [
    "صفر", "واحد", "اثنان", "ثلاثة", "أربعة", "خمسة", "ستة", "سبعة", "ثمانية", "تسعة",
];

const UNITS_FEMININE: [&str; 10] = [
    "صفر", "واحدة", "اثنتان", "ثلاث", "أربع", "خمس", "ست", "سبع", "ثمان", "تسع",
];

const TEENS_MASCULINE: [&str; 10] = [
    "عشرة",
    "أحد عشر",
    "اثنا عشر",
    "ثلاثة عشر",
    "أربعة عشر",
    "خمسة عشر",
    "ستة عشر",
    "سبعة عشر",
    "ثمانية عشر",
    "تسعة عشر",
];

const TEENS_FEMININE: [&str; 10] = [
    "عشر",
    "إحدى عشرة",
    "اثنتا عشرة",
    "ثلاث عشرة",
    "أربع عشرة",
    "خمس عشرة",
    "ست عشرة",
    "سبع عشرة",
    "ثماني عشرة",
    "تسع عشرة",
];

/// Multiples of ten, indexed by the tens digit. Index 0 and 1 are never
/// used directly for compound numbers.
pub const TENS: [&str; 10] = [
    "", "عشر", "عشرون", "ثلاثون", "أربعون", "خمسون", "ستون", "سبعون", "ثمانون", "تسعون",
];

/// Multiples of a hundred, indexed by the hundreds digit.
pub const HUNDREDS: [&str; 10] = [
    "",
    "مائة",
    "مائتان",
    "ثلاثمائة",
    "أربعمائة",
    "خمسمائة",
    "ستمائة",
    "سبعمائة",
    "ثمانمائة",
    "تسعمائة",
];

/// Units 0-9.
pub fn units(gender: Gender) -> &'static [&'static str; 10] {
    match gender {
        Gender::Masculine => &UNITS_MASCULINE,
        Gender::Feminine => &UNITS_FEMININE,
    }
}

/// 10-19, indexed by `n - 10`.
pub fn teens(gender: Gender) -> &'static [&'static str; 10] {
    match gender {
        Gender::Masculine => &TEENS_MASCULINE,
        Gender::Feminine => &TEENS_FEMININE,
    }
}

/// Form of the word "thousand" after a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThousandsForm {
    /// 1000 on its own.
    One,
    /// Dual, 2000.
    Two,
    /// Plural used after 3-10.
    Plural,
    /// Singular used after 11 and above.
    Many,
}

impl ThousandsForm {
    pub fn for_count(count: u32) -> Self {
        match count {
            1 => Self::One,
            2 => Self::Two,
            3..=10 => Self::Plural,
            _ => Self::Many,
        }
    }

    pub fn word(&self) -> &'static str {
        match self {
            Self::One => "ألف",
            Self::Two => "ألفان",
            Self::Plural => "آلاف",
            Self::Many => "ألف",
        }
    }
}

/// Informal and alternative spellings accepted for specific numbers.
pub fn spelling_variants(n: u32) -> &'static [&'static str] {
    match n {
        0 => &["صفر"],
        1 => &["واحد", "واحدة", "احد", "احدى"],
        2 => &["اثنان", "اثنين", "اثنتان", "اثنتين"],
        3 => &["ثلاثة", "ثلاث", "تلاتة", "تلاث"],
        4 => &["أربعة", "اربعة", "أربع", "اربع"],
        5 => &["خمسة", "خمس"],
        6 => &["ستة", "ست"],
        7 => &["سبعة", "سبع"],
        8 => &["ثمانية", "ثماني", "ثمان", "تمانية", "تماني"],
        9 => &["تسعة", "تسع"],
        10 => &["عشرة", "عشر"],
        11 => &["أحد عشر", "احد عشر", "إحدى عشرة", "احدى عشرة"],
        12 => &["اثنا عشر", "اثني عشر", "اثنتا عشرة", "اثنتي عشرة"],
        20 => &["عشرون", "عشرين"],
        30 => &["ثلاثون", "ثلاثين", "تلاتون", "تلاتين"],
        40 => &["أربعون", "اربعون", "أربعين", "اربعين"],
        50 => &["خمسون", "خمسين"],
        60 => &["ستون", "ستين"],
        70 => &["سبعون", "سبعين"],
        80 => &["ثمانون", "ثمانين", "تمانون", "تمانين"],
        90 => &["تسعون", "تسعين"],
        100 => &["مائة", "مئة", "ميه", "ميا"],
        200 => &["مائتان", "مئتان", "مائتين", "مئتين", "ميتين"],
        1000 => &["ألف", "الف"],
        2000 => &["ألفان", "الفان", "ألفين", "الفين"],
        _ => &[],
    }
}
