//! Locale name pools.
//!
//! Display names stay ASCII so login handles can be derived from them.
//! The Japanese and Spanish pools pair each ASCII form with a native
//! rendering (kanji, accents) used for the `true_name` field.

use std::collections::BTreeMap;

/// Name-pool locale. Chosen per user with a 60/20/20 weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Locale {
    English,
    Japanese,
    Spanish,
}

impl Locale {
    /// All locales.
    pub const ALL: [Locale; 3] = [Locale::English, Locale::Japanese, Locale::Spanish];

    /// Returns true if the native rendering puts the surname first.
    pub fn surname_first(&self) -> bool {
        matches!(self, Locale::Japanese)
    }

    /// Returns the display name for this locale.
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Japanese => "ja",
            Locale::Spanish => "es",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One name-pool entry: the ASCII form, plus a native rendering where it
/// differs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEntry {
    ascii: String,
    native: Option<String>,
}

impl NameEntry {
    /// Creates an entry whose native rendering equals the ASCII form.
    pub fn plain(ascii: &str) -> Self {
        Self {
            ascii: ascii.to_string(),
            native: None,
        }
    }

    /// Creates an entry with a distinct native rendering.
    pub fn with_native(ascii: &str, native: &str) -> Self {
        Self {
            ascii: ascii.to_string(),
            native: Some(native.to_string()),
        }
    }

    /// Returns the ASCII form.
    pub fn ascii(&self) -> &str {
        &self.ascii
    }

    /// Returns the native rendering, falling back to the ASCII form.
    pub fn native_or_ascii(&self) -> &str {
        self.native.as_deref().unwrap_or(&self.ascii)
    }
}

/// First- and last-name pools for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePool {
    first_names: Vec<NameEntry>,
    last_names: Vec<NameEntry>,
}

impl NamePool {
    /// Creates a pool.
    pub fn new(first_names: Vec<NameEntry>, last_names: Vec<NameEntry>) -> Self {
        Self {
            first_names,
            last_names,
        }
    }

    /// Returns the first-name entries.
    pub fn first_names(&self) -> &[NameEntry] {
        &self.first_names
    }

    /// Returns the last-name entries.
    pub fn last_names(&self) -> &[NameEntry] {
        &self.last_names
    }

    /// Returns true if either side of the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.first_names.is_empty() || self.last_names.is_empty()
    }

    /// Returns the number of distinct full names this pool can produce.
    pub fn combinations(&self) -> usize {
        self.first_names.len() * self.last_names.len()
    }
}

fn plain(names: &[&str]) -> Vec<NameEntry> {
    names.iter().map(|n| NameEntry::plain(n)).collect()
}

fn paired(names: &[(&str, &str)]) -> Vec<NameEntry> {
    names
        .iter()
        .map(|(ascii, native)| NameEntry::with_native(ascii, native))
        .collect()
}

/// Built-in name pools.
pub(super) fn builtin() -> BTreeMap<Locale, NamePool> {
    let mut pools = BTreeMap::new();

    pools.insert(
        Locale::English,
        NamePool::new(
            plain(&[
                "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda",
                "David", "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph",
                "Jessica", "Thomas", "Sarah", "Charles", "Karen", "Christopher", "Lisa",
                "Daniel", "Nancy", "Matthew", "Betty", "Anthony", "Margaret", "Mark", "Sandra",
                "Steven", "Ashley", "Paul", "Kimberly", "Andrew", "Emily", "Joshua", "Donna",
                "Kenneth", "Michelle",
            ]),
            plain(&[
                "Smith", "Johnson", "Williams", "Brown", "Jones", "Miller", "Davis", "Wilson",
                "Anderson", "Taylor", "Thomas", "Moore", "Jackson", "White", "Harris", "Clark",
                "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright", "Scott",
                "Hill", "Green", "Adams", "Baker", "Nelson", "Carter", "Mitchell", "Turner",
                "Phillips", "Campbell", "Parker", "Evans", "Edwards", "Collins", "Stewart",
                "Morris",
            ]),
        ),
    );

    pools.insert(
        Locale::Japanese,
        NamePool::new(
            paired(&[
                ("Ken", "健"),
                ("Yuki", "優希"),
                ("Hiro", "浩"),
                ("Aki", "明"),
                ("Saki", "咲"),
                ("Mai", "麻衣"),
                ("Kai", "海"),
                ("Ryu", "竜"),
                ("Taro", "太郎"),
                ("Kenji", "健二"),
                ("Yuta", "裕太"),
                ("Kenta", "健太"),
                ("Yui", "結衣"),
                ("Miku", "美空"),
                ("Hana", "花"),
            ]),
            paired(&[
                ("Tanaka", "田中"),
                ("Sato", "佐藤"),
                ("Suzuki", "鈴木"),
                ("Watanabe", "渡辺"),
                ("Yamamoto", "山本"),
                ("Nakamura", "中村"),
                ("Takahashi", "高橋"),
                ("Ito", "伊藤"),
                ("Saito", "斎藤"),
                ("Kobayashi", "小林"),
                ("Kato", "加藤"),
                ("Yoshida", "吉田"),
                ("Yamada", "山田"),
                ("Sasaki", "佐々木"),
                ("Yamaguchi", "山口"),
            ]),
        ),
    );

    pools.insert(
        Locale::Spanish,
        NamePool::new(
            vec![
                NameEntry::with_native("Carlos", "Carlos"),
                NameEntry::with_native("Miguel", "Miguel"),
                NameEntry::with_native("Jose", "José"),
                NameEntry::with_native("Juan", "Juan"),
                NameEntry::with_native("Maria", "María"),
                NameEntry::with_native("Ana", "Ana"),
                NameEntry::with_native("Luis", "Luis"),
                NameEntry::with_native("Elena", "Elena"),
                NameEntry::with_native("Sofia", "Sofía"),
                NameEntry::with_native("Isabella", "Isabella"),
            ],
            vec![
                NameEntry::with_native("Garcia", "García"),
                NameEntry::with_native("Rodriguez", "Rodríguez"),
                NameEntry::with_native("Martinez", "Martínez"),
                NameEntry::with_native("Hernandez", "Hernández"),
                NameEntry::with_native("Lopez", "López"),
                NameEntry::with_native("Gonzalez", "González"),
                NameEntry::with_native("Perez", "Pérez"),
                NameEntry::with_native("Sanchez", "Sánchez"),
                NameEntry::with_native("Ramirez", "Ramírez"),
                NameEntry::with_native("Torres", "Torres"),
            ],
        ),
    );

    pools
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_entries_have_no_native_form() {
        let pools = builtin();
        let en = &pools[&Locale::English];
        assert_eq!(en.first_names()[0].ascii(), en.first_names()[0].native_or_ascii());
    }

    #[test]
    fn japanese_entries_pair_romaji_with_kanji() {
        let pools = builtin();
        let ja = &pools[&Locale::Japanese];
        let ken = &ja.first_names()[0];
        assert_eq!(ken.ascii(), "Ken");
        assert_eq!(ken.native_or_ascii(), "健");
    }

    #[test]
    fn spanish_accents_only_where_they_exist() {
        let pools = builtin();
        let es = &pools[&Locale::Spanish];
        let jose = es.first_names().iter().find(|e| e.ascii() == "Jose").unwrap();
        assert_eq!(jose.native_or_ascii(), "José");
        let juan = es.first_names().iter().find(|e| e.ascii() == "Juan").unwrap();
        assert_eq!(juan.native_or_ascii(), "Juan");
    }

    #[test]
    fn only_japanese_puts_surname_first() {
        assert!(Locale::Japanese.surname_first());
        assert!(!Locale::English.surname_first());
        assert!(!Locale::Spanish.surname_first());
    }

    #[test]
    fn pools_offer_enough_combinations_for_a_default_run() {
        let pools = builtin();
        // Default run asks for 100 users at 60/20/20 locale weights.
        assert!(pools[&Locale::English].combinations() >= 1_000);
        assert!(pools[&Locale::Japanese].combinations() >= 200);
        assert!(pools[&Locale::Spanish].combinations() >= 100);
    }
}
