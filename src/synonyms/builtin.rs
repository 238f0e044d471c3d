// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The built-in concept table, tuned for the topics people bookmark on X.
//!
//! Keys and terms must already be lowercase. A term may sit under several
//! concepts ("game" is both sports and gaming); expansion unions them all.

/// Concept key to related terms.
pub const BUILTIN_SYNONYMS: &[(&str, &[&str])] = &[
    // Technology
    (
        "tech",
        &[
            "technology",
            "technical",
            "digital",
            "software",
            "hardware",
            "computing",
            "programming",
            "coding",
            "development",
        ],
    ),
    (
        "ai",
        &[
            "artificial intelligence",
            "machine learning",
            "deep learning",
            "neural network",
            "llm",
            "gpt",
            "chatgpt",
            "openai",
            "ml",
        ],
    ),
    (
        "programming",
        &["coding", "developer", "code", "software engineering", "programmer"],
    ),
    ("startup", &["founder", "vc", "venture capital", "seed round", "saas"]),
    // Money
    (
        "crypto",
        &["bitcoin", "btc", "ethereum", "eth", "blockchain", "web3", "defi", "nft"],
    ),
    (
        "finance",
        &["money", "investing", "stocks", "market", "trading", "economy", "portfolio"],
    ),
    ("business", &["company", "entrepreneur", "revenue", "marketing", "sales"]),
    ("career", &["job", "jobs", "hiring", "interview", "resume", "salary"]),
    // Sports
    (
        "sports",
        &["game", "match", "team", "player", "season", "league", "score"],
    ),
    (
        "basketball",
        &["nba", "hoops", "dunk", "court", "playoffs", "game"],
    ),
    ("football", &["nfl", "quarterback", "touchdown", "super bowl"]),
    ("soccer", &["premier league", "goal", "fifa", "world cup", "striker"]),
    // Public life
    (
        "politics",
        &["election", "government", "policy", "congress", "senate", "vote", "president"],
    ),
    ("news", &["breaking", "headline", "report", "update", "announcement"]),
    ("climate", &["environment", "sustainability", "carbon", "renewable", "global warming"]),
    // Wellbeing
    ("health", &["medical", "medicine", "wellness", "doctor", "mental health", "nutrition"]),
    ("fitness", &["workout", "exercise", "gym", "training", "running"]),
    ("food", &["recipe", "cooking", "restaurant", "meal", "dinner", "baking"]),
    ("travel", &["trip", "vacation", "flight", "hotel", "destination"]),
    // Culture
    ("music", &["song", "album", "concert", "spotify", "playlist", "band"]),
    ("movies", &["film", "cinema", "netflix", "trailer", "box office"]),
    ("gaming", &["video game", "game", "playstation", "xbox", "nintendo", "esports"]),
    ("books", &["reading", "novel", "author", "book club", "kindle"]),
    ("design", &["ui", "ux", "figma", "typography", "branding"]),
    ("humor", &["funny", "meme", "joke", "lol", "comedy"]),
    // Knowledge
    ("science", &["research", "study", "physics", "biology", "chemistry", "paper"]),
    ("space", &["nasa", "spacex", "rocket", "astronomy", "mars", "launch"]),
    ("education", &["learning", "course", "tutorial", "school", "university"]),
];
