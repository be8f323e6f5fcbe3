//! Wikipedia language editions.
//!
//! Static lookup from a language edition code (the subdomain of
//! `<code>.wikipedia.org`) to its English name.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Language edition codes and their English names.
const LANGUAGES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("als", "Alemannic German"),
    ("smn", "Inari Sámi"),
    ("atj", "Atikamekw"),
    ("nrm", "Norman"),
    ("ay", "Aymara"),
    ("az", "Azerbaijani"),
    ("cdo", "Eastern Min"),
    ("mwl", "Mirandese"),
    ("an", "Aragonese"),
    ("bar", "Bavarian"),
    ("cs", "Czech"),
    ("cbk-zam", "Zamboanga Chavacano"),
    ("co", "Corsican"),
    ("dga", "Dagaare"),
    ("da", "Danish"),
    ("se", "Northern Sámi"),
    ("de", "German"),
    ("dsb", "Lower Sorbian"),
    ("et", "Estonian"),
    ("eml", "Emilian–Romagnol"),
    ("ang", "Old English"),
    ("en", "English"),
    ("eu", "Basque"),
    ("fat", "Fante"),
    ("hif", "Fiji Hindi"),
    ("fo", "Faroese"),
    ("fy", "West Frisian"),
    ("gag", "Gagauz"),
    ("gl", "Galician"),
    ("gpe", "Ghanaian Pidgin English"),
    ("ext", "Extremaduran"),
    ("guw", "Gun"),
    ("gur", "Farefare (Gurene)"),
    ("haw", "Hawaiian"),
    ("hsb", "Upper Sorbian"),
    ("hr", "Croatian"),
    ("nah", "Nahuatl"),
    ("is", "Icelandic"),
    ("jam", "Jamaican Patois"),
    ("kl", "Greenlandic"),
    ("csb", "Kashubian"),
    ("lt", "Lithuanian"),
    ("li", "Limburgish"),
    ("ln", "Lingala"),
    ("olo", "Livvi-Karelian"),
    ("hu", "Hungarian"),
    ("pcm", "Nigerian Pidgin"),
    ("nl", "Dutch"),
    ("nds-nl", "Dutch Low Saxon"),
    ("jbo", "Lojban"),
    ("frr", "North Frisian"),
    ("pih", "Norfuk"),
    ("nn", "Norwegian (Nynorsk)"),
    ("no", "Norwegian (Bokmål)"),
    ("uz", "Uzbek"),
    ("om", "Oromo"),
    ("pfl", "Palatine German"),
    ("zh-min-nan", "Southern Min"),
    ("pdc", "Pennsylvania Dutch"),
    ("hak", "Hakka Chinese"),
    ("nds", "Low German"),
    ("pl", "Polish"),
    ("kaa", "Karakalpak"),
    ("qu", "Quechua (Southern Quechua)"),
    ("crh", "Crimean Tatar"),
    ("rmy", "Romani (Vlax Romani)"),
    ("sco", "Scots"),
    ("trv", "Seediq"),
    ("stq", "Saterland Frisian"),
    ("simple", "Simple English"),
    ("sk", "Slovak"),
    ("sl", "Slovene"),
    ("szl", "Silesian"),
    ("so", "Somali"),
    ("srn", "Sranan Tongo"),
    ("sh", "Serbo-Croatian"),
    ("fi", "Finnish"),
    ("sv", "Swedish"),
    ("tly", "Talysh"),
    ("zh", "Chinese (vernacular)"),
    ("wuu", "Wu Chinese"),
    ("zh-yue", "Cantonese"),
    ("gan", "Gan Chinese"),
    ("tr", "Turkish"),
    ("tk", "Turkmen"),
    ("ug", "Uyghur"),
    ("roa-tara", "Tarantino"),
    ("gd", "Scottish Gaelic"),
    ("ik", "Iñupiaq"),
    ("fj", "Fijian"),
    ("za", "Zhuang (Standard Zhuang)"),
    ("chy", "Cheyenne"),
    ("vep", "Veps"),
    ("rm", "Romansh"),
    ("fur", "Friulian"),
    ("la", "Latin"),
    ("lfn", "Lingua Franca Nova"),
    ("ga", "Irish"),
    ("ltg", "Latgalian"),
    ("lv", "Latvian"),
    ("eo", "Esperanto"),
    ("lad", "Judaeo-Spanish"),
    ("gn", "Guarani"),
    ("ca", "Catalan"),
    ("ty", "Tahitian"),
    ("fiu-vro", "Võro"),
    ("frp", "Franco-Provençal"),
    ("vo", "Volapük"),
    ("war", "Waray"),
    ("vls", "West Flemish"),
    ("cy", "Welsh"),
    ("tay", "Atayal"),
    ("nv", "Navajo"),
    ("sn", "Shona"),
    ("bm", "Bambara"),
    ("bew", "Betawi"),
    ("scn", "Sicilian"),
    ("mg", "Malagasy"),
    ("pms", "Piedmontese"),
    ("gor", "Gorontalo"),
    ("id", "Indonesian"),
    ("ms", "Malay"),
    ("ace", "Acehnese"),
    ("ban", "Balinese"),
    ("map-bms", "Banyumasan"),
    ("jv", "Javanese"),
    ("su", "Sundanese"),
    ("bbc", "Toba Batak"),
    ("mad", "Madurese"),
    ("ch", "Chamorro"),
    ("ny", "Chewa"),
    ("tum", "Tumbuka"),
    ("dtp", "Dusun"),
    ("br", "Breton"),
    ("wa", "Walloon"),
    ("pt", "Portuguese"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("vec", "Venetian"),
    ("oc", "Occitan"),
    ("ff", "Fula"),
    ("sm", "Samoan"),
    ("ki", "Kikuyu"),
    ("ha", "Hausa"),
    ("to", "Tongan"),
    ("ig", "Igbo"),
    ("tet", "Tetum"),
    ("ia", "Interlingua"),
    ("ie", "Interlingue"),
    ("it", "Italian"),
    ("ro", "Romanian"),
    ("pcd", "Picard"),
    ("lmo", "Lombard"),
    ("sc", "Sardinian"),
    ("xh", "Xhosa"),
    ("zu", "Zulu"),
    ("kg", "Kongo"),
    ("nia", "Nias"),
    ("lij", "Ligurian"),
    ("bi", "Bislama"),
    ("tpi", "Tok Pisin"),
    ("mi", "Māori"),
    ("avk", "Kotava"),
    ("min", "Minangkabau"),
    ("ast", "Asturian"),
    ("bs", "Bosnian"),
    ("pap", "Papiamento"),
    ("nap", "Neapolitan"),
    ("ilo", "Ilocano"),
    ("ve", "Venda"),
    ("lb", "Luxembourgish"),
    ("pag", "Pangasinan"),
    ("lld", "Ladin"),
    ("roa-rup", "Aromanian"),
    ("btm", "Mandailing Batak"),
    ("st", "Sotho"),
    ("nso", "Northern Sotho"),
    ("tn", "Tswana"),
    ("sq", "Albanian"),
    ("ss", "Swazi"),
    ("kab", "Kabyle"),
    ("din", "Dinka"),
    ("vi", "Vietnamese"),
    ("wo", "Wolof"),
    ("sw", "Swahili"),
    ("gv", "Manx"),
    ("pam", "Kapampangan"),
    ("tl", "Tagalog"),
    ("nov", "Novial"),
    ("mt", "Maltese"),
    ("io", "Ido"),
    ("kbp", "Kabiye"),
    ("ku", "Kurdish (Kurmanji)"),
    ("lg", "Luganda"),
    ("rw", "Kinyarwanda"),
    ("rn", "Kirundi"),
    ("ts", "Tsonga"),
    ("sg", "Sango"),
    ("diq", "Zaza"),
    ("gcr", "French Guianese Creole"),
    ("fon", "Fon"),
    ("kw", "Cornish"),
    ("ht", "Haitian Creole"),
    ("ceb", "Cebuano"),
    ("bcl", "Central Bikol"),
    ("yo", "Yoruba"),
    ("guc", "Wayuu"),
    ("bdr", "West Coast Bajau"),
    ("bjn", "Banjarese"),
    ("dag", "Dagbani"),
    ("tw", "Twi"),
    ("igl", "Igala"),
    ("pwn", "Paiwan"),
    ("shi", "Shilha"),
    ("ee", "Ewe"),
    ("kus", "Kusaal"),
    ("ami", "Amis"),
    ("szy", "Sakizaya"),
    ("ksh", "Ripuarian"),
    ("kcg", "Tyap"),
    ("zea", "Zeelandic"),
    ("bat-smg", "Samogitian"),
    ("el", "Greek"),
    ("pnt", "Pontic Greek"),
    ("av", "Avar"),
    ("ady", "Adyghe"),
    ("kbd", "Kabardian"),
    ("ab", "Abkhaz"),
    ("ba", "Bashkir"),
    ("be", "Belarusian (Narkamaŭka)"),
    ("be-tarask", "Belarusian (Taraškievica)"),
    ("bxr", "Buryat (Russia Buriat)"),
    ("bg", "Bulgarian"),
    ("sr", "Serbian"),
    ("tg", "Tajik"),
    ("inh", "Ingush"),
    ("os", "Ossetian"),
    ("kv", "Komi"),
    ("krc", "Karachay-Balkar"),
    ("ky", "Kyrgyz"),
    ("mrj", "Hill Mari"),
    ("kk", "Kazakh"),
    ("lbe", "Lak"),
    ("lez", "Lezgian"),
    ("mk", "Macedonian"),
    ("mdf", "Moksha"),
    ("mn", "Mongolian"),
    ("ce", "Chechen"),
    ("mhr", "Meadow Mari"),
    ("koi", "Komi-Permyak"),
    ("rue", "Rusyn"),
    ("ru", "Russian"),
    ("sah", "Yakut"),
    ("cu", "Old Church Slavonic"),
    ("tt", "Tatar"),
    ("alt", "Southern Altai"),
    ("tyv", "Tuvan"),
    ("udm", "Udmurt"),
    ("uk", "Ukrainian"),
    ("xal", "Kalmyk Oirat"),
    ("cv", "Chuvash"),
    ("myv", "Erzya"),
    ("xmf", "Mingrelian"),
    ("ka", "Georgian"),
    ("hyw", "Western Armenian"),
    ("hy", "Armenian"),
    ("he", "Hebrew"),
    ("yi", "Yiddish"),
    ("ur", "Urdu"),
    ("ps", "Pashto"),
    ("pnb", "Western Punjabi"),
    ("azb", "South Azerbaijani"),
    ("skr", "Saraiki"),
    ("sd", "Sindhi"),
    ("ks", "Kashmiri"),
    ("glk", "Gilaki"),
    ("mzn", "Mazanderani"),
    ("ar", "Arabic"),
    ("ary", "Moroccan Arabic"),
    ("arz", "Egyptian Arabic"),
    ("fa", "Persian"),
    ("ckb", "Kurdish (Sorani)"),
    ("arc", "Aramaic (Syriac)"),
    ("dv", "Maldivian"),
    ("nqo", "N'Ko"),
    ("zgh", "Standard Moroccan Amazigh"),
    ("am", "Amharic"),
    ("ti", "Tigrinya"),
    ("awa", "Awadhi"),
    ("gom", "Konkani (Goan Konkani)"),
    ("dty", "Doteli"),
    ("ne", "Nepali"),
    ("pi", "Pali"),
    ("bh", "Bihari (Bhojpuri)"),
    ("mr", "Marathi"),
    ("mai", "Maithili"),
    ("new", "Newar"),
    ("anp", "Angika"),
    ("sa", "Sanskrit"),
    ("hi", "Hindi"),
    ("as", "Assamese"),
    ("bn", "Bengali"),
    ("bpy", "Bishnupriya Manipuri"),
    ("pa", "Punjabi"),
    ("gu", "Gujarati"),
    ("or", "Odia"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("kn", "Kannada"),
    ("tcy", "Tulu"),
    ("ml", "Malayalam"),
    ("si", "Sinhala"),
    ("mni", "Meitei"),
    ("th", "Thai"),
    ("lo", "Lao"),
    ("bo", "Central Tibetan (Lhasa Tibetan)"),
    ("dz", "Dzongkha"),
    ("bug", "Buginese"),
    ("blk", "Pa'O"),
    ("my", "Burmese"),
    ("shn", "Shan"),
    ("mnw", "Mon"),
    ("km", "Khmer"),
    ("sat", "Santali"),
    ("chr", "Cherokee"),
    ("iu", "Inuktitut"),
    ("cr", "Cree"),
    ("ko", "Korean"),
    ("ja", "Japanese"),
    ("got", "Gothic"),
    ("zh-classical", "Classical Chinese"),
];

static LANGUAGE_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| LANGUAGES.iter().copied().collect());

/// Returns the English name of a language edition, or the code itself if
/// the edition is unknown.
pub fn language_name(code: &str) -> &str {
    LANGUAGE_MAP.get(code).copied().unwrap_or(code)
}
