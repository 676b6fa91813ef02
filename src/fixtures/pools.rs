//! Value pools the generators draw from.

pub const PROVINCES: &[(&str, &str)] = &[
    ("KIN", "Kinshasa"),
    ("KOC", "Kongo-Central"),
    ("HKA", "Haut-Katanga"),
    ("LUA", "Lualaba"),
    ("NKV", "Nord-Kivu"),
    ("SKV", "Sud-Kivu"),
    ("TSH", "Tshopo"),
    ("ITU", "Ituri"),
    ("KSC", "Kasaï-Central"),
    ("EQU", "Équateur"),
];

pub const PROVINCE_NAMES: &[&str] = &[
    "Kinshasa",
    "Kongo-Central",
    "Haut-Katanga",
    "Lualaba",
    "Nord-Kivu",
    "Sud-Kivu",
    "Tshopo",
    "Ituri",
    "Kasaï-Central",
    "Équateur",
];

pub const MAKES_AND_MODELS: &[(&str, &str)] = &[
    ("Toyota", "Hilux"),
    ("Toyota", "Corolla"),
    ("Toyota", "Land Cruiser"),
    ("Nissan", "Hardbody"),
    ("Mitsubishi", "L200"),
    ("Hyundai", "H100"),
    ("Mercedes-Benz", "Sprinter"),
    ("Isuzu", "NQR"),
    ("Suzuki", "DR200"),
    ("Ford", "Ranger"),
];

pub const COLORS: &[&str] = &[
    "blanc", "noir", "gris", "bleu", "rouge", "vert", "jaune", "argent",
];

pub const FIRST_NAMES: &[&str] = &[
    "Jean", "Marie", "Joseph", "Grâce", "Patrick", "Christelle", "Didier",
    "Sarah", "Emmanuel", "Nadine", "Félix", "Esther", "Olivier", "Clarisse",
];

pub const LAST_NAMES: &[&str] = &[
    "Kabongo", "Mukendi", "Ilunga", "Tshibanda", "Mbuyi", "Kasongo",
    "Ngalula", "Mutombo", "Kalala", "Lukusa", "Mwamba", "Tshimanga",
];

pub const LOCATIONS: &[&str] = &[
    "Boulevard du 30 Juin",
    "Avenue de la Libération",
    "Route Nationale 1",
    "Avenue Kasa-Vubu",
    "Pont Matete",
    "Rond-point Ngaba",
    "Avenue de l'Université",
    "Route de Matadi",
    "Carrefour Victoire",
    "Avenue Lumumba",
];

/// Infraction code, description, fine amount.
pub const INFRACTIONS: &[(&str, &str, u32)] = &[
    ("EXC-VIT", "Excès de vitesse", 50_000),
    ("STA-INT", "Stationnement interdit", 20_000),
    ("FEU-ROU", "Franchissement de feu rouge", 75_000),
    ("DOC-MAN", "Documents de bord manquants", 30_000),
    ("SUR-CHA", "Surcharge de véhicule", 100_000),
    ("CEI-NON", "Défaut de ceinture de sécurité", 15_000),
    ("TEL-VOL", "Téléphone au volant", 25_000),
    ("ASS-EXP", "Assurance expirée", 60_000),
];

pub const EQUIPMENT_MODELS: &[&str] = &[
    "TraffiStar SR520",
    "Gatso RS-GS11",
    "PoliScan FM1",
    "Multanova MU-VR",
    "Vitronic PS-Enf",
];

pub const LICENSE_CATEGORIES: &[&str] = &["A", "B", "C", "D", "E"];
