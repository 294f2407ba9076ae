//! Static reference tables: financial topic categories and the BISINDO
//! glossary. Loaded at startup, never mutated.

/// A financial literacy category with its suggested prompts.
pub struct TopicCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub topics: &'static [&'static str],
}

pub const FINANCIAL_TOPICS: &[TopicCategory] = &[
    TopicCategory {
        title: "Perbankan Dasar",
        icon: "🏦",
        topics: &[
            "Cara membuka rekening bank",
            "Menggunakan ATM dengan aman",
            "Daftar mobile banking",
            "Cek saldo rekening",
            "Transfer uang antar bank",
        ],
    },
    TopicCategory {
        title: "Tips Menabung",
        icon: "💰",
        topics: &[
            "Membuat dana darurat",
            "Cara budgeting bulanan",
            "Investasi untuk pemula",
            "Menabung untuk masa depan",
            "Mengatur pengeluaran harian",
        ],
    },
    TopicCategory {
        title: "Edukasi Kredit",
        icon: "📋",
        topics: &[
            "Pengajuan kredit pribadi",
            "Memahami bunga kredit",
            "Tips kredit rumah (KPR)",
            "Cara meningkatkan credit score",
            "Mengelola cicilan dengan baik",
        ],
    },
    TopicCategory {
        title: "Banking Digital",
        icon: "📱",
        topics: &[
            "Keamanan internet banking",
            "Menggunakan e-wallet",
            "Transfer via QR code",
            "Pembayaran tagihan online",
            "Investasi digital",
        ],
    },
];

/// Shortcut prompts shown below the input box on the generation view.
pub const QUICK_TOPICS: &[&str] = &[
    "Cara buka rekening",
    "Transfer uang",
    "Menabung rutin",
    "Investasi aman",
];

/// One BISINDO gesture term with its description.
pub struct GlossaryEntry {
    pub term: &'static str,
    pub gesture: &'static str,
    pub description: &'static str,
}

pub const BISINDO_GLOSSARY: &[GlossaryEntry] = &[
    GlossaryEntry {
        term: "bank",
        gesture: "🏦",
        description: "Gerakan menunjuk gedung dengan kedua tangan",
    },
    GlossaryEntry {
        term: "uang",
        gesture: "💰",
        description: "Gerakan menggosok jari seperti menghitung uang",
    },
    GlossaryEntry {
        term: "menabung",
        gesture: "📦",
        description: "Gerakan memasukkan sesuatu ke wadah",
    },
    GlossaryEntry {
        term: "kredit",
        gesture: "🤝",
        description: "Gerakan memberi dan menerima",
    },
    GlossaryEntry {
        term: "investasi",
        gesture: "📈",
        description: "Gerakan naik dengan tangan",
    },
    GlossaryEntry {
        term: "bunga",
        gesture: "🌸",
        description: "Gerakan mekar dengan jari-jari",
    },
    GlossaryEntry {
        term: "transfer",
        gesture: "➡️",
        description: "Gerakan memindahkan dari kiri ke kanan",
    },
    GlossaryEntry {
        term: "saldo",
        gesture: "⚖️",
        description: "Gerakan menimbang dengan kedua tangan",
    },
];

/// All topics across every category, flattened in display order.
pub fn all_topics() -> Vec<(&'static TopicCategory, &'static str)> {
    FINANCIAL_TOPICS
        .iter()
        .flat_map(|cat| cat.topics.iter().map(move |t| (cat, *t)))
        .collect()
}
