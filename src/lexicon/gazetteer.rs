//! Hardcoded word lists that complement the generated forms.
//!
//! Entries are lowercase; multi-word place names are kept as phrases here and
//! split into tokens by the lexicon builder.

/// Indonesian cities (kota).
pub const CITIES: &[&str] = &[
    "ambon", "balikpapan", "banda aceh", "bandar lampung", "bandung", "banjar", "banjarbaru",
    "banjarmasin", "batam", "batu", "baubau", "bekasi", "bengkulu", "bima", "binjai", "bitung",
    "blitar", "bogor", "bontang", "bukittinggi", "cilegon", "cimahi", "cirebon", "denpasar",
    "depok", "dumai", "gorontalo", "gunungsitoli", "jakarta barat", "jakarta pusat",
    "jakarta selatan", "jakarta timur", "jakarta utara", "jambi", "jayapura", "kediri", "kendari",
    "kotamobagu", "kupang", "langsa", "lhokseumawe", "lubuk linggau", "madiun", "magelang",
    "makassar", "malang", "manado", "mataram", "medan", "metro", "mojokerto", "padang",
    "padang panjang", "padangsidempuan", "pagar alam", "palangka raya", "palembang", "palopo",
    "palu", "pangkalpinang", "parepare", "pariaman", "pasuruan", "payakumbuh", "pekalongan",
    "pekanbaru", "pematangsiantar", "pontianak", "prabumulih", "probolinggo", "sabang",
    "salatiga", "samarinda", "sawahlunto", "semarang", "serang", "sibolga", "singkawang", "solok",
    "sorong", "subulussalam", "sukabumi", "sungai penuh", "surabaya", "surakarta", "tangerang",
    "tangerang selatan", "tanjungbalai", "tanjungpinang", "tarakan", "tasikmalaya",
    "tebing tinggi", "tegal", "ternate", "tidore kepulauan", "tomohon", "tual", "yogyakarta",
];

/// Provinces and major islands.
pub const PROVINCES_AND_ISLANDS: &[&str] = &[
    "aceh", "sumatera utara", "sumatera barat", "riau", "kepulauan riau", "jambi", "bengkulu",
    "sumatera selatan", "kepulauan bangka belitung", "lampung", "banten", "dki jakarta",
    "jawa barat", "jawa tengah", "di yogyakarta", "jawa timur", "bali", "nusa tenggara barat",
    "nusa tenggara timur", "kalimantan barat", "kalimantan tengah", "kalimantan selatan",
    "kalimantan timur", "kalimantan utara", "sulawesi utara", "gorontalo", "sulawesi tengah",
    "sulawesi barat", "sulawesi selatan", "sulawesi tenggara", "maluku", "maluku utara", "papua",
    "papua barat", "papua selatan", "papua tengah", "papua pegunungan", "papua barat daya",
    "sumatera", "jawa", "kalimantan", "sulawesi", "papua", "bali", "lombok", "sumbawa", "flores",
    "sumba", "timor", "halmahera", "seram", "buru", "bangka", "belitung", "nias", "mentawai",
    "madura",
];

/// Pronouns, prepositions, conjunctions, particles, adverbs and honorifics.
pub const FUNCTION_WORDS: &[&str] = &[
    "saya", "aku", "ku", "hamba", "kami", "kita", "kamu", "engkau", "kau", "anda", "kalian",
    "saudara", "dia", "ia", "beliau", "mereka", "nya", "ini", "itu", "sini", "situ", "sana",
    "apa", "siapa", "mana", "kapan", "mengapa", "kenapa", "bagaimana", "berapa", "di", "ke",
    "dari", "pada", "dalam", "atas", "bawah", "kepada", "daripada", "untuk", "bagi", "guna",
    "buat", "oleh", "dengan", "tentang", "mengenai", "terhadap", "soal", "sejak", "semenjak",
    "sampai", "hingga", "keluar", "masuk", "dan", "serta", "atau", "tetapi", "tapi", "namun",
    "melainkan", "sedangkan", "jika", "kalau", "jikalau", "asal", "bila", "manakala", "agar",
    "supaya", "biar", "sebab", "karena", "lantaran", "sehingga", "maka", "akibatnya", "ketika",
    "sewaktu", "tatkala", "selagi", "seraya", "sambil", "setelah", "sesudah", "sebelum",
    "sehabis", "selesai", "bahwa", "yakni", "yaitu", "adalah", "ialah", "merupakan", "biarpun",
    "meskipun", "walaupun", "sekalipun", "sungguhpun", "padahal", "kendatipun", "kah", "lah",
    "tah", "pun", "per", "yang", "tak", "tidak", "bukan", "tanpa", "tiada", "belum", "sudah",
    "telah", "akan", "sedang", "lagi", "pernah", "masih", "baru", "ada", "bisa", "dapat",
    "boleh", "harus", "mesti", "wajib", "perlu", "butuh", "mau", "ingin", "hendak", "bakal",
    "sangat", "amat", "terlalu", "paling", "cukup", "kurang", "lebih", "agak", "hanya", "cuma",
    "saja", "juga", "nanti", "kemarin", "besok", "lusa", "sekarang", "dahulu", "dulu", "tadi",
    "barusan", "tentu", "pasti", "yakin", "memang", "barangkali", "mungkin", "bahkan", "malah",
    "justru", "segera", "langsung", "lantas", "kemudian", "lalu", "akhirnya", "pak", "bapak",
    "bu", "ibu", "mas", "mbak", "kak", "kakak", "bang", "abang", "dik", "adik", "om", "tante",
];

/// Domain terms added verbatim: currency, number scales and weekdays.
pub const EXTRA_TERMS: &[&str] = &[
    "rupiah", "hobi", "proyek", "triliun", "miliar", "juta", "senin", "selasa", "rabu", "kamis",
    "jumat", "sabtu", "minggu",
];

/// Every gazetteer list consumed by the lexicon builder.
pub fn all() -> Vec<&'static [&'static str]> {
    vec![CITIES, PROVINCES_AND_ISLANDS, FUNCTION_WORDS]
}

/// Status prefixes of province names (`di yogyakarta`, `dki jakarta`). `di`
/// is also the everyday locative preposition.
pub const ADMINISTRATIVE_PREFIXES: [&str; 2] = ["di", "dki"];

/// Place names that are also ordinary words (`batu` stone, `malang`
/// unlucky, `padang` field, `seram` scary, ...).
pub const AMBIGUOUS_PLACE_NAMES: &[&str] = &[
    "banjar", "batu", "binjai", "buru", "lombok", "malang", "medan", "metro", "padang",
    "padang panjang", "pagar alam", "palu", "seram", "serang", "solok", "sorong",
    "sungai penuh", "tebing tinggi", "tegal",
];

/// Place-name phrases (cities, provinces, islands) without administrative
/// prefixes, deduplicated.
pub fn place_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = CITIES
        .iter()
        .chain(PROVINCES_AND_ISLANDS.iter())
        .map(|name| strip_administrative_prefix(name))
        .collect();
    names.sort_unstable();
    names.dedup();
    names
}

fn strip_administrative_prefix(name: &'static str) -> &'static str {
    ADMINISTRATIVE_PREFIXES
        .iter()
        .find_map(|prefix| name.strip_prefix(prefix)?.strip_prefix(' '))
        .unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_are_lowercase() {
        for list in all().into_iter().chain([EXTRA_TERMS]) {
            for entry in list {
                assert_eq!(*entry, entry.to_lowercase(), "{entry} is not lowercase");
                assert!(!entry.trim().is_empty());
            }
        }
    }

    #[test]
    fn test_place_names_are_deduplicated() {
        let names = place_names();
        assert_eq!(names.iter().filter(|name| **name == "gorontalo").count(), 1);
        assert!(names.contains(&"jakarta selatan"));
        assert!(names.contains(&"madura"));
    }

    #[test]
    fn test_place_names_drop_administrative_prefixes() {
        let names = place_names();
        assert!(names.contains(&"yogyakarta"));
        assert!(names.contains(&"jakarta"));
        assert!(!names.contains(&"di yogyakarta"));
        assert!(!names.contains(&"dki jakarta"));
        assert!(names.iter().all(|name| !name.starts_with("di ")));
        // only whole prefix words are stripped
        assert!(names.contains(&"dumai"));
    }

    #[test]
    fn test_ambiguous_names_are_places() {
        let names = place_names();
        for name in AMBIGUOUS_PLACE_NAMES {
            assert!(names.contains(name), "{name} is not a place name");
        }
    }
}
