//! The genre catalog shipped with the application.

use super::{Genre, GenreCategory};

struct GenreSeed {
    id: &'static str,
    name: &'static str,
    category: GenreCategory,
    description: &'static str,
    characteristics: &'static [&'static str],
    origin_year: Option<&'static str>,
    key_artists: &'static [&'static str],
    related_genres: &'static [&'static str],
    color: &'static str,
    spotify_genre: &'static str,
}

impl From<&GenreSeed> for Genre {
    fn from(seed: &GenreSeed) -> Self {
        fn owned(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }
        Genre {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            category: seed.category,
            description: seed.description.to_string(),
            characteristics: owned(seed.characteristics),
            origin_year: seed.origin_year.map(str::to_string),
            key_artists: owned(seed.key_artists),
            related_genres: owned(seed.related_genres),
            color: seed.color.to_string(),
            spotify_genre: seed.spotify_genre.to_string(),
        }
    }
}

pub fn builtin_genres() -> Vec<Genre> {
    BUILTIN_GENRES.iter().map(Genre::from).collect()
}

const BUILTIN_GENRES: &[GenreSeed] = &[
    // Rock
    GenreSeed {
        id: "classic-rock",
        name: "Classic Rock",
        category: GenreCategory::Rock,
        description: "The foundational sound of rock music from the 1960s-80s, characterized by electric guitars, strong rhythms, and memorable melodies.",
        characteristics: &["Guitar-driven", "Blues influence", "Live energy", "Anthemic"],
        origin_year: Some("1960s"),
        key_artists: &["Led Zeppelin", "The Rolling Stones", "Queen"],
        related_genres: &["hard-rock", "blues-rock", "alternative"],
        color: "#dc2626",
        spotify_genre: "classic rock",
    },
    GenreSeed {
        id: "alternative",
        name: "Alternative Rock",
        category: GenreCategory::Rock,
        description: "Non-mainstream rock that emerged in the 1980s and became hugely popular in the 1990s.",
        characteristics: &["Experimental", "Diverse", "Independent spirit"],
        origin_year: Some("1980s"),
        key_artists: &["Nirvana", "Radiohead", "R.E.M."],
        related_genres: &["indie-rock", "grunge", "post-punk"],
        color: "#ef4444",
        spotify_genre: "alternative",
    },
    GenreSeed {
        id: "punk",
        name: "Punk",
        category: GenreCategory::Rock,
        description: "Fast, hard-edged music with short songs, stripped-down instrumentation, and often political lyrics.",
        characteristics: &["Raw energy", "DIY ethos", "Short songs", "Rebellious"],
        origin_year: Some("1970s"),
        key_artists: &["The Ramones", "Sex Pistols", "The Clash"],
        related_genres: &["post-punk", "pop-punk", "hardcore"],
        color: "#f97316",
        spotify_genre: "punk",
    },
    // Electronic
    GenreSeed {
        id: "house",
        name: "House",
        category: GenreCategory::Electronic,
        description: "Four-on-the-floor dance music that originated in Chicago in the early 1980s.",
        characteristics: &["4/4 beat", "Repetitive", "Soulful", "Dance-focused"],
        origin_year: Some("1980s"),
        key_artists: &["Daft Punk", "Frankie Knuckles", "Disclosure"],
        related_genres: &["techno", "deep-house", "edm"],
        color: "#0891b2",
        spotify_genre: "house",
    },
    GenreSeed {
        id: "techno",
        name: "Techno",
        category: GenreCategory::Electronic,
        description: "Repetitive, hypnotic electronic music that emerged from Detroit in the mid-1980s.",
        characteristics: &["Repetitive beats", "120-150 BPM", "Minimal", "Futuristic"],
        origin_year: Some("1980s"),
        key_artists: &["Carl Craig", "Jeff Mills", "Richie Hawtin"],
        related_genres: &["house", "trance", "industrial"],
        color: "#06b6d4",
        spotify_genre: "techno",
    },
    GenreSeed {
        id: "ambient",
        name: "Ambient",
        category: GenreCategory::Electronic,
        description: "Atmospheric music that emphasizes tone and atmosphere over traditional musical structure.",
        characteristics: &["Atmospheric", "Minimal beats", "Meditative", "Textural"],
        origin_year: Some("1970s"),
        key_artists: &["Brian Eno", "Aphex Twin", "Boards of Canada"],
        related_genres: &["downtempo", "drone", "chillout"],
        color: "#22d3ee",
        spotify_genre: "ambient",
    },
    // Hip hop
    GenreSeed {
        id: "hip-hop",
        name: "Hip Hop",
        category: GenreCategory::HipHop,
        description: "Cultural movement and music genre developed in the Bronx in the 1970s, featuring MCing, DJing, and sampling.",
        characteristics: &["Rapping", "Sampling", "Beats", "Cultural"],
        origin_year: Some("1970s"),
        key_artists: &["Run-DMC", "Nas", "Kendrick Lamar"],
        related_genres: &["trap", "boom-bap", "conscious-rap"],
        color: "#7c3aed",
        spotify_genre: "hip hop",
    },
    GenreSeed {
        id: "trap",
        name: "Trap",
        category: GenreCategory::HipHop,
        description: "Hip hop subgenre that originated in the Southern United States, characterized by 808 kicks and hi-hats.",
        characteristics: &["808 drums", "Hi-hats", "Dark", "Heavy bass"],
        origin_year: Some("2000s"),
        key_artists: &["T.I.", "Gucci Mane", "Travis Scott"],
        related_genres: &["hip-hop", "drill", "mumble-rap"],
        color: "#8b5cf6",
        spotify_genre: "trap",
    },
    // Jazz
    GenreSeed {
        id: "jazz",
        name: "Jazz",
        category: GenreCategory::Jazz,
        description: "Music characterized by swing, blue notes, complex chords, and improvisation.",
        characteristics: &["Improvisation", "Complex harmony", "Swing", "Blue notes"],
        origin_year: Some("1920s"),
        key_artists: &["Miles Davis", "John Coltrane", "Duke Ellington"],
        related_genres: &["bebop", "smooth-jazz", "fusion"],
        color: "#ea580c",
        spotify_genre: "jazz",
    },
    GenreSeed {
        id: "bebop",
        name: "Bebop",
        category: GenreCategory::Jazz,
        description: "Fast, complex jazz style developed in the 1940s with intricate melodies and rhythms.",
        characteristics: &["Fast tempo", "Complex", "Virtuosic", "Improvisation"],
        origin_year: Some("1940s"),
        key_artists: &["Charlie Parker", "Dizzy Gillespie", "Thelonious Monk"],
        related_genres: &["jazz", "hard-bop", "post-bop"],
        color: "#f59e0b",
        spotify_genre: "bebop",
    },
    // Pop
    GenreSeed {
        id: "pop",
        name: "Pop",
        category: GenreCategory::Pop,
        description: "Mainstream popular music aimed at a mass audience, characterized by short, catchy songs.",
        characteristics: &["Catchy melodies", "Verse-chorus", "Radio-friendly", "Commercial"],
        origin_year: Some("1950s"),
        key_artists: &["Michael Jackson", "Madonna", "Taylor Swift"],
        related_genres: &["synth-pop", "electropop", "indie-pop"],
        color: "#db2777",
        spotify_genre: "pop",
    },
    GenreSeed {
        id: "synth-pop",
        name: "Synth Pop",
        category: GenreCategory::Pop,
        description: "Pop music featuring synthesizers as the dominant musical instrument.",
        characteristics: &["Synthesizers", "80s sound", "Electronic", "Melodic"],
        origin_year: Some("1980s"),
        key_artists: &["Depeche Mode", "Pet Shop Boys", "The Weeknd"],
        related_genres: &["pop", "new-wave", "electropop"],
        color: "#ec4899",
        spotify_genre: "synth pop",
    },
    // Indie
    GenreSeed {
        id: "indie-rock",
        name: "Indie Rock",
        category: GenreCategory::Indie,
        description: "Independent rock music that exists outside of the mainstream commercial rock genre.",
        characteristics: &["Independent", "Experimental", "DIY", "Alternative"],
        origin_year: Some("1980s"),
        key_artists: &["The Strokes", "Arctic Monkeys", "Tame Impala"],
        related_genres: &["alternative", "indie-pop", "post-punk"],
        color: "#059669",
        spotify_genre: "indie rock",
    },
    GenreSeed {
        id: "indie-pop",
        name: "Indie Pop",
        category: GenreCategory::Indie,
        description: "Melodic, guitar-based pop music with an independent ethos.",
        characteristics: &["Melodic", "Jangly guitars", "Lo-fi", "Introspective"],
        origin_year: Some("1980s"),
        key_artists: &["Vampire Weekend", "Beach House", "MGMT"],
        related_genres: &["indie-rock", "dream-pop", "chamber-pop"],
        color: "#10b981",
        spotify_genre: "indie pop",
    },
    // Metal
    GenreSeed {
        id: "metal",
        name: "Heavy Metal",
        category: GenreCategory::Metal,
        description: "Loud, aggressive rock music with amplified distortion, extended guitar solos, and powerful vocals.",
        characteristics: &["Heavy riffs", "Loud", "Powerful", "Technical"],
        origin_year: Some("1970s"),
        key_artists: &["Black Sabbath", "Iron Maiden", "Metallica"],
        related_genres: &["thrash-metal", "death-metal", "doom-metal"],
        color: "#475569",
        spotify_genre: "metal",
    },
    // Classical
    GenreSeed {
        id: "classical",
        name: "Classical",
        category: GenreCategory::Classical,
        description: "Western art music spanning from the 11th century to present, characterized by complex compositions.",
        characteristics: &["Orchestral", "Complex", "Formal", "Historical"],
        origin_year: Some("1600s"),
        key_artists: &["Bach", "Mozart", "Beethoven"],
        related_genres: &["baroque", "romantic", "contemporary-classical"],
        color: "#6366f1",
        spotify_genre: "classical",
    },
    // Latin
    GenreSeed {
        id: "salsa",
        name: "Salsa",
        category: GenreCategory::Latin,
        description: "Energetic dance music rooted in Cuban son, shaped by the Latin communities of New York in the 1960s and 70s.",
        characteristics: &["Clave rhythm", "Brass sections", "Dance-focused", "Percussive"],
        origin_year: Some("1960s"),
        key_artists: &["Celia Cruz", "Héctor Lavoe", "Marc Anthony"],
        related_genres: &["bachata", "reggaeton"],
        color: "#e11d48",
        spotify_genre: "salsa",
    },
    GenreSeed {
        id: "reggaeton",
        name: "Reggaeton",
        category: GenreCategory::Latin,
        description: "Urban music from Puerto Rico blending dancehall, hip hop, and Latin rhythms over the dembow beat.",
        characteristics: &["Dembow rhythm", "Dance-focused", "Rapping", "Heavy bass"],
        origin_year: Some("1990s"),
        key_artists: &["Daddy Yankee", "Bad Bunny", "J Balvin"],
        related_genres: &["dancehall", "trap", "salsa"],
        color: "#f43f5e",
        spotify_genre: "reggaeton",
    },
    GenreSeed {
        id: "bachata",
        name: "Bachata",
        category: GenreCategory::Latin,
        description: "Romantic guitar music from the Dominican Republic, built on requinto melodies and bongo rhythms.",
        characteristics: &["Romantic", "Guitar-driven", "Dance-focused", "Melodic"],
        origin_year: Some("1960s"),
        key_artists: &["Juan Luis Guerra", "Aventura", "Romeo Santos"],
        related_genres: &["salsa", "bolero"],
        color: "#fb7185",
        spotify_genre: "bachata",
    },
    // Country
    GenreSeed {
        id: "country",
        name: "Country",
        category: GenreCategory::Country,
        description: "American roots music with storytelling lyrics, built around guitars, fiddles, and steel guitar.",
        characteristics: &["Storytelling", "Acoustic guitar", "Twang", "Heartfelt"],
        origin_year: Some("1920s"),
        key_artists: &["Johnny Cash", "Dolly Parton", "Willie Nelson"],
        related_genres: &["bluegrass", "folk", "americana"],
        color: "#ca8a04",
        spotify_genre: "country",
    },
    GenreSeed {
        id: "bluegrass",
        name: "Bluegrass",
        category: GenreCategory::Country,
        description: "Fast acoustic string-band music from Appalachia, featuring banjo, fiddle, mandolin, and tight harmonies.",
        characteristics: &["Acoustic", "Banjo", "Virtuosic", "Fast tempo"],
        origin_year: Some("1940s"),
        key_artists: &["Bill Monroe", "Earl Scruggs", "Alison Krauss"],
        related_genres: &["country", "folk"],
        color: "#eab308",
        spotify_genre: "bluegrass",
    },
    // Blues
    GenreSeed {
        id: "blues",
        name: "Blues",
        category: GenreCategory::Blues,
        description: "African American music from the Deep South built on the twelve-bar form, call and response, and blue notes.",
        characteristics: &["Blue notes", "12-bar form", "Call and response", "Emotional"],
        origin_year: Some("1870s"),
        key_artists: &["B.B. King", "Muddy Waters", "Robert Johnson"],
        related_genres: &["blues-rock", "jazz", "soul"],
        color: "#1d4ed8",
        spotify_genre: "blues",
    },
    GenreSeed {
        id: "blues-rock",
        name: "Blues Rock",
        category: GenreCategory::Blues,
        description: "Electric fusion of blues structures with rock instrumentation and volume.",
        characteristics: &["Guitar-driven", "Blues influence", "12-bar form", "Improvisation"],
        origin_year: Some("1960s"),
        key_artists: &["Cream", "Stevie Ray Vaughan", "The Black Keys"],
        related_genres: &["blues", "classic-rock", "hard-rock"],
        color: "#2563eb",
        spotify_genre: "blues rock",
    },
    // Reggae
    GenreSeed {
        id: "reggae",
        name: "Reggae",
        category: GenreCategory::Reggae,
        description: "Jamaican music with an offbeat rhythm guitar, prominent bass lines, and often spiritual or political lyrics.",
        characteristics: &["Offbeat rhythm", "Heavy bass", "Laid-back", "Conscious lyrics"],
        origin_year: Some("1960s"),
        key_artists: &["Bob Marley", "Peter Tosh", "Toots and the Maytals"],
        related_genres: &["dancehall", "dub", "ska"],
        color: "#16a34a",
        spotify_genre: "reggae",
    },
    GenreSeed {
        id: "dancehall",
        name: "Dancehall",
        category: GenreCategory::Reggae,
        description: "Faster, digital descendant of reggae built on riddims, toasting, and sound system culture.",
        characteristics: &["Riddims", "Dance-focused", "Toasting", "Digital"],
        origin_year: Some("1980s"),
        key_artists: &["Shabba Ranks", "Beenie Man", "Vybz Kartel"],
        related_genres: &["reggae", "reggaeton"],
        color: "#22c55e",
        spotify_genre: "dancehall",
    },
    // Soul
    GenreSeed {
        id: "soul",
        name: "Soul",
        category: GenreCategory::Soul,
        description: "Gospel-rooted popular music combining rhythm and blues with passionate vocal delivery.",
        characteristics: &["Gospel influence", "Powerful vocals", "Emotional", "Groovy"],
        origin_year: Some("1950s"),
        key_artists: &["Aretha Franklin", "Otis Redding", "Marvin Gaye"],
        related_genres: &["r-n-b", "funk", "blues"],
        color: "#9333ea",
        spotify_genre: "soul",
    },
    GenreSeed {
        id: "r-n-b",
        name: "R&B",
        category: GenreCategory::Soul,
        description: "Contemporary rhythm and blues blending soul, pop, and hip hop production with smooth vocals.",
        characteristics: &["Smooth vocals", "Groovy", "Sensual", "Melodic"],
        origin_year: Some("1940s"),
        key_artists: &["Beyoncé", "Usher", "Frank Ocean"],
        related_genres: &["soul", "hip-hop", "pop"],
        color: "#a855f7",
        spotify_genre: "r&b",
    },
    // Folk
    GenreSeed {
        id: "folk",
        name: "Folk",
        category: GenreCategory::Folk,
        description: "Traditional and revivalist acoustic music centered on storytelling and communal singing.",
        characteristics: &["Acoustic", "Storytelling", "Traditional", "Introspective"],
        origin_year: Some("1940s"),
        key_artists: &["Bob Dylan", "Joan Baez", "Woody Guthrie"],
        related_genres: &["indie-folk", "country", "bluegrass"],
        color: "#78716c",
        spotify_genre: "folk",
    },
    GenreSeed {
        id: "indie-folk",
        name: "Indie Folk",
        category: GenreCategory::Folk,
        description: "Folk songwriting filtered through indie production, often hushed, layered, and atmospheric.",
        characteristics: &["Acoustic", "Introspective", "Lo-fi", "Atmospheric"],
        origin_year: Some("2000s"),
        key_artists: &["Bon Iver", "Fleet Foxes", "Sufjan Stevens"],
        related_genres: &["folk", "indie-pop", "indie-rock"],
        color: "#a8a29e",
        spotify_genre: "indie folk",
    },
];
